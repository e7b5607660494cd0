// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! Run configuration. Sample size, rounds and batch sizes are constants,
//! only where output goes and how the generators are seeded can change.

use serde::{Deserialize, Serialize};
use std::fs;

use crate::error::BenchError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    pub output_path: String,
    pub log_level: String,
    /// Fixed seed for every generator. Time derived when absent.
    pub seed: Option<u64>,
    /// Also print report lines to stdout.
    pub echo_stdout: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            output_path: "output.txt".to_string(),
            log_level: "info".to_string(),
            seed: None,
            echo_stdout: true,
        }
    }
}

impl BenchConfig {
    pub fn load(path: &str) -> Result<Self, BenchError> {
        let content = fs::read_to_string(path).map_err(|source| BenchError::ConfigRead {
            path: path.to_string(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|source| BenchError::Config {
            path: path.to_string(),
            source,
        })
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }
}
