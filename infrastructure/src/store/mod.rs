//! JSONL store adapters
//!
//! One JSON object per line, append-only. The single-active-run model
//! means the run log has one writer at a time, and the orchestrator
//! appends as its last action - no locking needed.

pub mod artifact_store;
pub mod run_log;

pub use artifact_store::JsonlArtifactStore;
pub use run_log::JsonlRunLog;
