// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! Errors at the fallible edges: config, logging and report output.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("report output failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot read config {path}: {source}")]
    ConfigRead {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Config {
        path: String,
        source: serde_yaml::Error,
    },

    #[error("cannot install logger: {0}")]
    Logging(String),
}
