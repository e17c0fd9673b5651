//! Domain layer for prompt-council
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Council
//!
//! A council is a set of independently-configured perspectives ("lenses")
//! that each analyze an objective, challenge each other's conclusions in a
//! debate pass, and are synthesized into one final artifact:
//!
//! - **Perspective simulation**: each active lens produces an independent draft
//! - **Debate**: each draft is revised against the other lenses' key points
//! - **Synthesis**: all post-debate drafts are combined into one result

pub mod core;
pub mod council;
pub mod orchestration;
pub mod prompt;

// Re-export commonly used types
pub use core::{error::DomainError, model::Model, objective::Objective};
pub use council::{
    draft::{Brief, Citation, Draft},
    history::{HistoryItem, SavedArtifact},
    insight::{InsightKind, InterimInsight},
    profile::PerspectiveProfile,
    reply::{
        CouncilSuggestion, DebateReply, PersonaSketch, SimulationReply, SuggestedPersona,
        SynthesisReply, parse_debate_reply, parse_persona_sketch, parse_simulation_reply,
        parse_suggestion_reply, parse_synthesis_reply, strip_code_fences,
    },
    result::{
        ARTIFACT_VERSION, CollisionPoint, ConcreteDemonstration, DemonstrationSpec,
        ResultMetadata, RunResult, Sacrifice,
    },
    task_type::TaskType,
};
pub use orchestration::run_state::RunState;
pub use prompt::PromptTemplate;
