//! Structured reply parsing for the reasoning service.
//!
//! Each pipeline stage demands a JSON reply of a fixed shape; the service
//! answers in camelCase and sometimes wraps the payload in a markdown code
//! fence. This module holds the wire DTOs and the pure parsing - no I/O,
//! just fence stripping and serde.
//!
//! A reply that fails to deserialize is a
//! [`DomainError::MalformedReply`](crate::core::error::DomainError) - fatal
//! to the run, never retried.

use crate::council::draft::Brief;
use crate::council::result::ConcreteDemonstration;
use crate::core::error::DomainError;
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Reply shape of the perspective-simulation stage
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationReply {
    pub content: String,
    pub key_point: String,
    pub friction_point: String,
    pub white_paper: String,
    pub brief: Brief,
}

/// Reply shape of the debate stage
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebateReply {
    pub debate_critique: String,
    pub white_paper: String,
    pub friction_point: String,
}

/// Reply shape of the synthesis stage
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesisReply {
    pub final_draft: String,
    pub improved_prompt: String,
    #[serde(default)]
    pub why_it_is_better: Vec<String>,
    pub generalizable_insight: String,
    #[serde(default)]
    pub simulation_tensions: Vec<String>,
    #[serde(default)]
    pub collision_map: Vec<crate::council::result::CollisionPoint>,
    #[serde(default)]
    pub sacrifice_log: Vec<crate::council::result::Sacrifice>,
    #[serde(default)]
    pub redlines: Vec<String>,
    #[serde(default)]
    pub follow_up_questions: Vec<String>,
    #[serde(default)]
    pub concrete_demonstration: Option<ConcreteDemonstration>,
}

/// One persona proposed by the council-suggestion call
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestedPersona {
    pub role: String,
    pub directive: String,
    pub heuristics: String,
    pub vibe: String,
    pub constraints: String,
    #[serde(default)]
    pub seed: String,
}

/// Reply shape of the council-suggestion call.
///
/// The task type arrives as a raw letter; callers degrade anything
/// unrecognized to analytical rather than failing the suggestion.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouncilSuggestion {
    pub task_type: String,
    #[serde(default)]
    pub profiles: Vec<SuggestedPersona>,
}

/// Reply shape of the persona-extraction call
#[derive(Debug, Clone, Deserialize)]
pub struct PersonaSketch {
    pub role: String,
    pub directive: String,
    pub heuristics: String,
    pub vibe: String,
    pub constraints: String,
}

/// Strip a wrapping markdown code fence from a reply, if present
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let stripped = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    stripped.strip_suffix("```").unwrap_or(stripped).trim()
}

fn parse<T: DeserializeOwned>(stage: &str, text: &str) -> Result<T, DomainError> {
    serde_json::from_str(strip_code_fences(text))
        .map_err(|e| DomainError::malformed(stage, e.to_string()))
}

pub fn parse_simulation_reply(text: &str) -> Result<SimulationReply, DomainError> {
    parse("simulation", text)
}

pub fn parse_debate_reply(text: &str) -> Result<DebateReply, DomainError> {
    parse("debate", text)
}

pub fn parse_synthesis_reply(text: &str) -> Result<SynthesisReply, DomainError> {
    parse("synthesis", text)
}

pub fn parse_suggestion_reply(text: &str) -> Result<CouncilSuggestion, DomainError> {
    parse("council suggestion", text)
}

pub fn parse_persona_sketch(text: &str) -> Result<PersonaSketch, DomainError> {
    parse("persona extraction", text)
}
