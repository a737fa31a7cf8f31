use anyhow::Result;
use clap::Parser;
use std::process;
use tldscan::error::fatal_message;
use tldscan::{Args, TldScanEngine, TldScanError};

#[tokio::main]
async fn main() -> Result<()> {
    // Without arguments there is nothing to do
    if std::env::args_os().len() <= 1 {
        return Ok(());
    }

    let args = Args::parse();

    let level = if args.verbose {
        log::LevelFilter::Debug
    } else if args.silent {
        log::LevelFilter::Warn
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(e) = args.scan_request() {
        exit_fatal(&e);
    }

    let engine = TldScanEngine::new(args).await?;

    match engine.run().await {
        Ok(_) => Ok(()),
        Err(e @ TldScanError::ArgumentError(_)) | Err(e @ TldScanError::LoadError { .. }) => exit_fatal(&e),
        Err(e) => Err(anyhow::anyhow!("Scan failed: {}", e)),
    }
}

// Printed directly so RUST_LOG cannot hide it
fn exit_fatal(err: &TldScanError) -> ! {
    eprintln!("{}", fatal_message(err));
    process::exit(1);
}
