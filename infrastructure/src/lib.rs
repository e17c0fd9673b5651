//! Infrastructure layer for prompt-council
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer, plus configuration file loading.

pub mod config;
pub mod gemini;
pub mod store;

// Re-export commonly used types
pub use config::{ConfigLoader, ExecutionSection, FileConfig, GatewaySection, StorageSection};
pub use gemini::gateway::GeminiGateway;
pub use store::{artifact_store::JsonlArtifactStore, run_log::JsonlRunLog};
