// src/loader.rs
use crate::error::Result;
use crate::types::TldScanError;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Load every TLD list in order and concatenate them.
///
/// Each source must be a JSON array of strings. The first source that cannot
/// be read or parsed aborts the whole load. Duplicates are kept.
pub fn load_candidates(sources: &[PathBuf]) -> Result<Vec<String>> {
    let mut candidates = Vec::new();

    for source in sources {
        let list = load_source(source)?;
        debug!("Loaded {} TLDs from {}", list.len(), source.display());
        candidates.extend(list);
    }

    Ok(candidates)
}

fn load_source(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path).map_err(|e| TldScanError::LoadError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    serde_json::from_str::<Vec<String>>(&contents).map_err(|e| TldScanError::LoadError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
