//! Run result value objects - the synthesized artifact

use crate::council::draft::{Citation, Draft};
use crate::council::reply::SynthesisReply;
use crate::council::task_type::TaskType;
use crate::core::model::Model;
use serde::{Deserialize, Serialize};

/// Version stamp applied to every synthesized artifact
pub const ARTIFACT_VERSION: &str = "5.1.0-QuotaOptimized";

/// One pairwise tension between two personas and how it was resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollisionPoint {
    pub persona_a: String,
    pub persona_b: String,
    pub tension: String,
    pub resolution: String,
}

/// One trade-off the synthesis accepted, with its risk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sacrifice {
    pub sacrifice: String,
    pub reason: String,
    pub risk: String,
}

/// Specification sub-object of a concrete demonstration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemonstrationSpec {
    #[serde(default)]
    pub variables: Vec<String>,
    pub references: String,
    pub tone_mood: String,
}

/// Worked-example block produced for generative (task `A`) runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConcreteDemonstration {
    pub working_example: String,
    #[serde(default)]
    pub actionable_structure: Vec<String>,
    pub specs: DemonstrationSpec,
}

/// Artifact provenance stamped onto every result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultMetadata {
    /// Fixed artifact schema version
    #[serde(rename = "promptVersion")]
    pub prompt_version: String,
    /// Backend that produced the synthesis
    pub model: String,
}

/// The synthesized artifact of one completed run (Value Object)
///
/// Created once by the synthesis stage and immutable thereafter; embedded
/// in a [`HistoryItem`](crate::council::history::HistoryItem) for
/// persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunResult {
    pub final_draft: String,
    pub improved_prompt: String,
    #[serde(default)]
    pub why_it_is_better: Vec<String>,
    pub generalizable_insight: String,
    #[serde(default)]
    pub simulation_tensions: Vec<String>,
    #[serde(default)]
    pub collision_map: Vec<CollisionPoint>,
    #[serde(default)]
    pub sacrifice_log: Vec<Sacrifice>,
    #[serde(default)]
    pub redlines: Vec<String>,
    #[serde(default)]
    pub follow_up_questions: Vec<String>,
    /// The full ordered post-debate draft list
    pub drafts: Vec<Draft>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_type: Option<TaskType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<Citation>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concrete_demonstration: Option<ConcreteDemonstration>,
    pub metadata: ResultMetadata,
}

impl RunResult {
    /// Assemble a result from a parsed synthesis reply, the post-debate
    /// drafts, and any citations the service attached.
    ///
    /// Stamps the fixed artifact version and the synthesis backend id.
    pub fn from_synthesis(
        reply: SynthesisReply,
        drafts: Vec<Draft>,
        task_type: TaskType,
        sources: Vec<Citation>,
        model: &Model,
    ) -> Self {
        Self {
            final_draft: reply.final_draft,
            improved_prompt: reply.improved_prompt,
            why_it_is_better: reply.why_it_is_better,
            generalizable_insight: reply.generalizable_insight,
            simulation_tensions: reply.simulation_tensions,
            collision_map: reply.collision_map,
            sacrifice_log: reply.sacrifice_log,
            redlines: reply.redlines,
            follow_up_questions: reply.follow_up_questions,
            drafts,
            task_type: Some(task_type),
            sources: if sources.is_empty() {
                None
            } else {
                Some(sources)
            },
            concrete_demonstration: reply.concrete_demonstration,
            metadata: ResultMetadata {
                prompt_version: ARTIFACT_VERSION.to_string(),
                model: model.to_string(),
            },
        }
    }
}
