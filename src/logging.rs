// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! Diagnostic logging. Goes to stderr so the echoed report on stdout stays clean.

use tracing_subscriber::EnvFilter;

use crate::error::BenchError;

/// Install the global subscriber. RUST_LOG takes precedence over `level`.
pub fn init_logging(level: &str) -> Result<(), BenchError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| BenchError::Logging(e.to_string()))
}
