//! Debate stage
//!
//! Each draft is revised by its own persona in light of the other lenses'
//! key points. Pure Draft-in → Draft-out: only the critique, white paper,
//! and friction point change; identity and evidence carry over.

use crate::config::CouncilParams;
use crate::ports::reasoning_gateway::{ReasoningGateway, ReasoningRequest};
use crate::use_cases::backoff::invoke_with_backoff;
use crate::use_cases::shared::StageError;
use council_domain::{Draft, PromptTemplate, parse_debate_reply};
use tracing::debug;

/// Run one draft's debate pass against its peers.
///
/// A single-lens council still gets a pass with an empty peer context -
/// the persona re-examines its own write-up with no adversarial input.
pub async fn conduct_debate<G>(
    gateway: &G,
    params: &CouncilParams,
    draft: &Draft,
    peers: &[Draft],
) -> Result<Draft, StageError>
where
    G: ReasoningGateway + ?Sized,
{
    debug!(
        "Debating draft of '{}' against {} peer(s)",
        draft.perspective_role,
        peers.len()
    );

    let prompt = PromptTemplate::debate(draft, peers);
    let request = ReasoningRequest::structured(params.simulation_model.clone(), prompt);

    let reply = invoke_with_backoff(&params.backoff, || gateway.generate(&request)).await?;
    let parsed = parse_debate_reply(&reply.text)?;

    Ok(draft.clone().with_debate(parsed))
}
