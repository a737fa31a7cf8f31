// src/lib.rs
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod loader;
pub mod output;
pub mod resolver;
pub mod types;
pub mod utils;

pub use cli::Args;
pub use engine::{scan, TldScanEngine};
pub use resolver::{DnsLookup, HostLookup};
pub use types::{Config, Outcome, ScanSummary, TldScanError};
