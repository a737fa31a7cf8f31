use crate::types::{Config, TldScanError};
use std::env;
use std::fs;
use std::path::Path;

pub const THREADS_ENV: &str = "TLDSCAN_THREADS";

pub fn load_config(config_path_str: &str) -> Result<Config, TldScanError> {
    let mut config = Config::default();

    if Path::new(config_path_str).exists() {
        let contents = fs::read_to_string(config_path_str)
            .map_err(|e| TldScanError::ConfigError(format!("Failed to read config file: {}", e)))?;
        apply_toml(&mut config, &contents)?;
    }

    apply_env_overrides(&mut config)?;
    validate_config(&config)?;

    Ok(config)
}

fn apply_toml(config: &mut Config, contents: &str) -> Result<(), TldScanError> {
    let toml_config: toml::Value = toml::from_str(contents)
        .map_err(|e| TldScanError::ConfigError(format!("Failed to parse config file: {}", e)))?;

    let Some(table) = toml_config.as_table() else {
        return Ok(());
    };

    if let Some(scanner) = table.get("scanner").and_then(|v| v.as_table()) {
        if let Some(threads) = scanner.get("threads") {
            let threads = threads
                .as_integer()
                .filter(|n| *n >= 0)
                .ok_or_else(|| TldScanError::ConfigError("scanner.threads must be a non-negative integer".to_string()))?;
            config.scanner.threads = threads as usize;
        }
    }

    if let Some(output) = table.get("output").and_then(|v| v.as_table()) {
        if let Some(file) = output.get("file").and_then(|v| v.as_str()) {
            config.output.file = Some(file.to_string());
        }
    }

    Ok(())
}

fn apply_env_overrides(config: &mut Config) -> Result<(), TldScanError> {
    apply_threads_override(config, env::var(THREADS_ENV).ok().as_deref())
}

fn apply_threads_override(config: &mut Config, threads: Option<&str>) -> Result<(), TldScanError> {
    if let Some(threads) = threads {
        config.scanner.threads = threads.trim().parse().map_err(|e| {
            TldScanError::ConfigError(format!("Invalid {} value {:?}: {}", THREADS_ENV, threads, e))
        })?;
    }
    Ok(())
}

pub fn validate_config(config: &Config) -> Result<(), TldScanError> {
    if config.scanner.threads == 0 {
        return Err(TldScanError::ConfigError("Threads must be greater than 0".to_string()));
    }
    Ok(())
}
