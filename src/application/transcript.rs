use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::errors::DomainError;

/// Append-only transcript of rendered order blocks.
#[derive(Debug, Clone)]
pub struct TranscriptLog {
    path: PathBuf,
}

impl TranscriptLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `block` plus a trailing newline at the end of the file.
    pub fn append(&self, block: &str) -> Result<(), DomainError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(block.as_bytes())?;
        file.write_all(b"\n")?;
        file.flush()?;
        log::info!("Appended transcription to {}", self.path.display());
        Ok(())
    }
}
