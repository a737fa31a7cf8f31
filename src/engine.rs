use crate::cli::Args;
use crate::config;
use crate::error::Result;
use crate::loader;
use crate::output::{OutputManager, ResultSink};
use crate::resolver::{DnsLookup, HostLookup};
use crate::types::{Config, Outcome, ScanSummary, TldScanError};
use crate::utils;
use futures::stream::{FuturesUnordered, StreamExt};
use futures::FutureExt;
use log::{debug, info, warn};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;

pub struct TldScanEngine {
    config: Config,
    lookup: Arc<dyn HostLookup>,
    output_manager: OutputManager,
    args: Args,
}

impl TldScanEngine {
    pub async fn new(args: Args) -> Result<Self> {
        let config = if let Some(config_path_str) = args.config_path.as_deref() {
            config::load_config(config_path_str)?
        } else {
            Config::default()
        };

        let lookup = Arc::new(DnsLookup::from_system_conf()?);
        Self::with_lookup(args, config, lookup)
    }

    /// Build an engine around an arbitrary lookup implementation.
    pub fn with_lookup(args: Args, mut config: Config, lookup: Arc<dyn HostLookup>) -> Result<Self> {
        // Command line takes precedence over the config file
        if let Some(output_file_val) = args.output_file.clone() {
            config.output.file = Some(output_file_val);
        }
        if let Some(threads) = args.threads {
            config.scanner.threads = threads;
        }
        if args.silent {
            config.output.silent = true;
        }
        if args.verbose {
            config.output.verbose = true;
        }
        config::validate_config(&config)?;

        let output_manager = OutputManager::new(config.output.clone());

        Ok(Self {
            config,
            lookup,
            output_manager,
            args,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Validate arguments, load the TLD lists and scan them.
    ///
    /// Argument and load failures return before any lookup is made and
    /// before the output file is touched.
    pub async fn run(&self) -> Result<ScanSummary> {
        let request = self.args.scan_request()?;
        let candidates = loader::load_candidates(&request.wordlists)?;

        let output_file = self
            .config
            .output
            .file
            .clone()
            .unwrap_or_else(|| utils::default_output_file(&request.domain));
        let sink = ResultSink::new(output_file);

        self.output_manager.print_banner();
        self.output_manager.print_header(candidates.len());
        info!("Scanning {} TLDs for {}", candidates.len(), request.domain);

        let summary = scan(
            &request.domain,
            candidates,
            self.lookup.clone(),
            self.config.scanner.threads,
            &sink,
            &self.output_manager,
        )
        .await?;

        self.output_manager.print_summary(&summary);
        Ok(summary)
    }
}

/// Probe `<domain>.<candidate>` for every candidate with at most `concurrency`
/// lookups in flight, appending each hit to `sink` as it completes.
///
/// Individual failures are logged and never abort the scan.
pub async fn scan(
    domain: &str,
    candidates: Vec<String>,
    lookup: Arc<dyn HostLookup>,
    concurrency: usize,
    sink: &ResultSink,
    output: &OutputManager,
) -> Result<ScanSummary> {
    if concurrency == 0 {
        return Err(TldScanError::ConfigError("Threads must be greater than 0".to_string()));
    }

    let start_time = Instant::now();
    let semaphore = Arc::new(Semaphore::new(concurrency));
    let mut futures = FuturesUnordered::new();

    for candidate in candidates {
        let target = utils::probe_target(domain, &candidate);
        let lookup = lookup.clone();
        let semaphore = semaphore.clone();
        let hostname = target.clone();

        let handle = tokio::spawn(async move {
            let _permit = semaphore
                .acquire_owned()
                .await
                .map_err(|e| TldScanError::TaskError(format!("Failed to acquire semaphore: {}", e)))?;
            lookup.lookup(&hostname).await
        });

        futures.push(handle.map(move |joined| (target, joined)));
    }

    let dispatched = futures.len();
    debug!("Dispatched {} lookups with concurrency {}", dispatched, concurrency);

    let mut found = 0;
    while let Some((target, joined)) = futures.next().await {
        match joined {
            Ok(Ok(Outcome::Resolved)) => {
                found += 1;
                output.report_found(&target);
                if let Err(e) = sink.append(&target) {
                    warn!("{} could not be saved: {}", target, e);
                }
            }
            Ok(Ok(Outcome::Unresolved)) => {
                debug!("{} did not resolve", target);
                output.report_unresolved(&target);
            }
            Ok(Err(e)) => warn!("{} generated an exception: {}", target, e),
            Err(e) => warn!("{} generated an exception: {}", target, e),
        }
    }

    Ok(ScanSummary {
        elapsed: start_time.elapsed(),
        found,
        dispatched,
        output: utils::absolute_path(sink.path()),
    })
}
