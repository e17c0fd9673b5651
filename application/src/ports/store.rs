//! Durable store ports - run log and saved-artifact library
//!
//! Persistence is injected into the orchestrator and the binary; the
//! pipeline stages never touch these ports. Both stores are append-mostly:
//! no update, no delete-by-id, and the run log supports only a bulk clear.

use council_domain::{HistoryItem, SavedArtifact};
use thiserror::Error;

/// Errors that can occur during store operations
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Append-only log of completed runs
pub trait RunLog: Send + Sync {
    /// Append one completed run. Called exactly once per successful run,
    /// as the orchestrator's last action before completing.
    fn append(&self, item: &HistoryItem) -> Result<(), StoreError>;

    /// All recorded runs, in creation order
    fn list(&self) -> Result<Vec<HistoryItem>, StoreError>;

    /// Remove the entire log
    fn clear(&self) -> Result<(), StoreError>;
}

/// Library of saved prompt artifacts
pub trait ArtifactStore: Send + Sync {
    fn append(&self, artifact: &SavedArtifact) -> Result<(), StoreError>;

    /// All saved artifacts, in creation order
    fn list(&self) -> Result<Vec<SavedArtifact>, StoreError>;
}
