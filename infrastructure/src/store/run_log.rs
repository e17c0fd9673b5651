//! JSONL file adapter for the run log port.
//!
//! Each [`HistoryItem`] is one JSON line appended to the log file. Listing
//! replays the file in order; clearing truncates it. Lines that no longer
//! parse (e.g. records from an older build) are skipped with a warning
//! rather than poisoning the whole log.

use council_application::{RunLog, StoreError};
use council_domain::HistoryItem;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Run log persisted as a JSONL file
pub struct JsonlRunLog {
    path: PathBuf,
}

impl JsonlRunLog {
    /// Create a log backed by the given path, creating parent directories
    /// as needed. The file itself is created lazily on first append.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(Self { path })
    }

    /// Get the path to the log file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RunLog for JsonlRunLog {
    fn append(&self, item: &HistoryItem) -> Result<(), StoreError> {
        let line = serde_json::to_string(item)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)?;
        Ok(())
    }

    fn list(&self) -> Result<Vec<HistoryItem>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let reader = BufReader::new(File::open(&self.path)?);
        let mut items = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str(&line) {
                Ok(item) => items.push(item),
                Err(e) => warn!("Skipping unreadable run log line: {}", e),
            }
        }
        Ok(items)
    }

    fn clear(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            File::create(&self.path)?;
        }
        Ok(())
    }
}
