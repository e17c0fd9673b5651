//! Application layer for prompt-council
//!
//! This crate contains use cases, port definitions, and application
//! configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use config::CouncilParams;
pub use ports::{
    reasoning_gateway::{GatewayError, ReasoningGateway, ReasoningReply, ReasoningRequest},
    run_events::{NoRunObserver, RunObserver},
    store::{ArtifactStore, RunLog, StoreError},
};
pub use use_cases::backoff::{BackoffPolicy, invoke_with_backoff};
pub use use_cases::extract_profile::ExtractProfileUseCase;
pub use use_cases::run_council::{RunCouncilError, RunCouncilInput, RunCouncilUseCase};
pub use use_cases::shared::StageError;
pub use use_cases::suggest_council::{SuggestCouncilUseCase, SuggestedCouncil};
