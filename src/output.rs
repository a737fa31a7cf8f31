// src/output.rs
use crate::error::{ErrorContext, Result};
use crate::types::{OutputConfig, ScanSummary, TldScanError};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub const BANNER: &str = r#"
╔╦╗╦  ╔╦╗┌─┐┌─┐┌─┐┌┐┌
 ║ ║   ║║└─┐│  ├─┤│││
 ╩ ╩═╝═╩╝└─┘└─┘┴ ┴┘└┘

Top Level Domain Scanner
"#;

/// Append-only destination for resolved names.
///
/// The file is opened on the first append, so a run that finds nothing leaves
/// the destination untouched. Every append is a single line written straight
/// to the file descriptor while holding the lock.
pub struct ResultSink {
    path: PathBuf,
    file: Mutex<Option<File>>,
}

impl ResultSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, name: &str) -> Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| TldScanError::OutputError("Result sink lock poisoned".to_string()))?;

        if guard.is_none() {
            *guard = Some(self.open()?);
        }

        let mut line = String::with_capacity(name.len() + 1);
        line.push_str(name);
        line.push('\n');

        let file = guard
            .as_mut()
            .ok_or_else(|| TldScanError::OutputError("Result sink is not open".to_string()))?;
        file.write_all(line.as_bytes())
            .output_context(|| format!("Failed to write to {}", self.path.display()))?;
        file.flush()
            .output_context(|| format!("Failed to flush {}", self.path.display()))
    }

    fn open(&self) -> Result<File> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .output_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .output_context(|| format!("Failed to open {}", self.path.display()))
    }
}

pub struct OutputManager {
    config: OutputConfig,
}

impl OutputManager {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    pub fn print_banner(&self) {
        if !self.config.silent {
            println!("{}", BANNER);
        }
    }

    pub fn print_header(&self, total: usize) {
        if !self.config.silent {
            println!("-----------------------------------------------------");
            println!("Total TLDs to scan: {}", total);
            println!("-----------------------------------------------------");
        }
    }

    pub fn report_found(&self, name: &str) {
        if self.config.silent {
            println!("{}", name);
        } else {
            println!("[FOUND] {}", name);
        }
    }

    pub fn report_unresolved(&self, name: &str) {
        if let Some(line) = self.unresolved_line(name) {
            println!("{}", line);
        }
    }

    /// Unresolved targets are only shown in verbose mode.
    pub fn unresolved_line(&self, name: &str) -> Option<String> {
        if self.config.verbose && !self.config.silent {
            Some(format!("[NOT FOUND] {}", name))
        } else {
            None
        }
    }

    pub fn print_summary(&self, summary: &ScanSummary) {
        if !self.config.silent {
            println!("{}", summary_line(summary));
        }
    }
}

pub fn summary_line(summary: &ScanSummary) -> String {
    format!(
        "Scan finished, scanner took {:.2} seconds, found {} domains, output saved to {}",
        summary.elapsed.as_secs_f64(),
        summary.found,
        summary.output.display()
    )
}
