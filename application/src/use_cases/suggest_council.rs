//! Suggest Council use case
//!
//! One fast-backend call proposes a diverse roster of lenses and an
//! inferred task type for an objective. Suggested profiles are ordinary
//! [`PerspectiveProfile`]s the caller may edit before starting a run.

use crate::config::CouncilParams;
use crate::ports::reasoning_gateway::{ReasoningGateway, ReasoningRequest};
use crate::use_cases::backoff::invoke_with_backoff;
use crate::use_cases::shared::StageError;
use council_domain::{
    Objective, PerspectiveProfile, PromptTemplate, TaskType, parse_suggestion_reply,
};
use std::sync::Arc;
use tracing::info;

/// Fidelity assigned to machine-suggested profiles
const SUGGESTED_FIDELITY: f64 = 0.8;

/// A suggested roster plus the inferred task type
#[derive(Debug, Clone)]
pub struct SuggestedCouncil {
    pub profiles: Vec<PerspectiveProfile>,
    pub task_type: TaskType,
}

/// Use case for auto-suggesting a council roster
pub struct SuggestCouncilUseCase<G: ReasoningGateway + 'static> {
    gateway: Arc<G>,
    params: CouncilParams,
}

impl<G: ReasoningGateway + 'static> SuggestCouncilUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            params: CouncilParams::default(),
        }
    }

    pub fn with_params(mut self, params: CouncilParams) -> Self {
        self.params = params;
        self
    }

    pub async fn execute(&self, objective: &Objective) -> Result<SuggestedCouncil, StageError> {
        let prompt = PromptTemplate::suggest_council(objective);
        let request = ReasoningRequest::structured(self.params.simulation_model.clone(), prompt);

        let reply =
            invoke_with_backoff(&self.params.backoff, || self.gateway.generate(&request)).await?;
        let suggestion = parse_suggestion_reply(&reply.text)?;

        // An unrecognized task-type letter degrades to analytical rather
        // than failing the suggestion.
        let task_type = suggestion
            .task_type
            .parse()
            .unwrap_or(TaskType::Analytical);

        let seed_ms = chrono::Utc::now().timestamp_millis();
        let profiles: Vec<PerspectiveProfile> = suggestion
            .profiles
            .into_iter()
            .enumerate()
            .map(|(i, p)| {
                PerspectiveProfile::new(format!("suggested-{seed_ms}-{i}"), p.role)
                    .with_directive(p.directive)
                    .with_heuristics(p.heuristics)
                    .with_vibe(p.vibe)
                    .with_constraints(p.constraints)
                    .with_seed(p.seed)
                    .with_fidelity_score(SUGGESTED_FIDELITY)
            })
            .collect();

        info!(
            "Suggested {} lenses (task type {})",
            profiles.len(),
            task_type
        );

        Ok(SuggestedCouncil {
            profiles,
            task_type,
        })
    }
}
