use crate::error::Result;
use crate::output::BANNER;
use crate::types::TldScanError;
use crate::utils;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "tldscan",
    version,
    before_help = BANNER,
    about = "Top Level Domain Scanner",
    long_about = "tldscan resolves <domain>.<tld> for every TLD in one or more JSON lists\nand appends the names that resolve to an output file."
)]
pub struct Args {
    /// Domain to find TLDs for
    #[arg(short = 'd', long = "domain", value_name = "DOMAIN")]
    pub domain: Option<String>,

    /// JSON file(s) containing a list of TLDs (comma-separated)
    #[arg(short = 'w', long = "wordlist", value_name = "FILES")]
    pub wordlist: Option<String>,

    /// Output file to save the results (default: {domain}.txt)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output_file: Option<String>,

    /// Number of concurrent lookups
    #[arg(short = 't', long = "threads", value_name = "N")]
    pub threads: Option<usize>,

    /// Silent mode (only output found domains)
    #[arg(long = "silent")]
    pub silent: bool,

    /// Verbose mode
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short = 'c', long = "config")]
    pub config_path: Option<String>,
}

/// Validated inputs for a single scan.
#[derive(Debug, Clone)]
pub struct ScanRequest {
    pub domain: String,
    pub wordlists: Vec<PathBuf>,
}

impl Args {
    pub fn wordlist_paths(&self) -> Vec<PathBuf> {
        self.wordlist
            .as_deref()
            .map(utils::split_sources)
            .unwrap_or_default()
            .into_iter()
            .map(PathBuf::from)
            .collect()
    }

    /// Both a domain and at least one TLD list are required before scanning.
    pub fn scan_request(&self) -> Result<ScanRequest> {
        let domain = self
            .domain
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty());
        let wordlists = self.wordlist_paths();

        match domain {
            Some(domain) if !wordlists.is_empty() => Ok(ScanRequest {
                domain: domain.to_string(),
                wordlists,
            }),
            _ => Err(TldScanError::ArgumentError(
                "Domain and TLD list are required.".to_string(),
            )),
        }
    }
}
