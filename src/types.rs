// src/types.rs
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_THREADS: usize = 100;

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub scanner: ScannerConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone)]
pub struct ScannerConfig {
    /// Maximum number of lookups in flight at once
    pub threads: usize,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            threads: DEFAULT_THREADS,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub file: Option<String>,
    pub silent: bool,
    pub verbose: bool,
}

/// Result of probing a single name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Resolved,
    Unresolved,
}

#[derive(Debug, Clone)]
pub struct ScanSummary {
    pub elapsed: Duration,
    pub found: usize,
    pub dispatched: usize,
    pub output: PathBuf,
}

#[derive(Debug, Error)]
pub enum TldScanError {
    #[error("{0}")]
    ArgumentError(String),

    #[error("Failed to load TLD list {path}: {message}")]
    LoadError {
        path: String,
        message: String,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Resolution error: {0}")]
    ResolutionError(String),

    #[error("Output error: {0}")]
    OutputError(String),

    #[error("Task error: {0}")]
    TaskError(String),
}
