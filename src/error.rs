pub use crate::types::TldScanError;

pub type Result<T> = std::result::Result<T, TldScanError>;

pub trait ErrorContext<T> {
    fn output_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::fmt::Display,
{
    fn output_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| TldScanError::OutputError(format!("{}: {}", f(), e)))
    }
}

/// Message shown to the user when a scan cannot start.
pub fn fatal_message(err: &TldScanError) -> String {
    format!("[ERROR] {}", err)
}
