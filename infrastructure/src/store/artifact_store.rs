//! JSONL file adapter for the saved-artifact library.

use council_application::{ArtifactStore, StoreError};
use council_domain::SavedArtifact;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Artifact library persisted as a JSONL file
pub struct JsonlArtifactStore {
    path: PathBuf,
}

impl JsonlArtifactStore {
    /// Create a store backed by the given path, creating parent
    /// directories as needed.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ArtifactStore for JsonlArtifactStore {
    fn append(&self, artifact: &SavedArtifact) -> Result<(), StoreError> {
        let line = serde_json::to_string(artifact)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)?;
        Ok(())
    }

    fn list(&self) -> Result<Vec<SavedArtifact>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let reader = BufReader::new(File::open(&self.path)?);
        let mut artifacts = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str(&line) {
                Ok(artifact) => artifacts.push(artifact),
                Err(e) => warn!("Skipping unreadable artifact line: {}", e),
            }
        }
        Ok(artifacts)
    }
}
