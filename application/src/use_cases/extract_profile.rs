//! Extract Profile use case
//!
//! Distills a persona sketch (role, directive, heuristics, vibe,
//! constraints) out of free text, for building a lens from a document the
//! user supplies.

use crate::config::CouncilParams;
use crate::ports::reasoning_gateway::{ReasoningGateway, ReasoningRequest};
use crate::use_cases::backoff::invoke_with_backoff;
use crate::use_cases::shared::StageError;
use council_domain::{PersonaSketch, PromptTemplate, parse_persona_sketch};
use std::sync::Arc;

/// Use case for extracting a persona sketch from raw text
pub struct ExtractProfileUseCase<G: ReasoningGateway + 'static> {
    gateway: Arc<G>,
    params: CouncilParams,
}

impl<G: ReasoningGateway + 'static> ExtractProfileUseCase<G> {
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

    pub async fn execute(&self, text: &str) -> Result<PersonaSketch, StageError> {
        let prompt = PromptTemplate::extract_persona(text);
        let request = ReasoningRequest::structured(self.params.simulation_model.clone(), prompt);

        let reply =
            invoke_with_backoff(&self.params.backoff, || self.gateway.generate(&request)).await?;
        Ok(parse_persona_sketch(&reply.text)?)
    }
}
