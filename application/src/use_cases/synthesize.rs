//! Synthesis stage
//!
//! One call on the deep backend combines every post-debate draft into the
//! final unified artifact. The drafts it receives are embedded, in order,
//! in the result it returns.

use crate::config::CouncilParams;
use crate::ports::reasoning_gateway::{ReasoningGateway, ReasoningRequest};
use crate::use_cases::backoff::invoke_with_backoff;
use crate::use_cases::shared::StageError;
use council_domain::{Draft, Objective, PromptTemplate, RunResult, TaskType, parse_synthesis_reply};
use tracing::debug;

/// Synthesize the post-debate drafts into the run's final artifact.
///
/// Analytical (`B`) runs ask for web-grounded verification and carry any
/// returned citations on the result; generative (`A`) runs demand a
/// concrete demonstration block. The result is stamped with the artifact
/// version and the synthesis backend id.
pub async fn synthesize<G>(
    gateway: &G,
    params: &CouncilParams,
    objective: &Objective,
    drafts: &[Draft],
    task_type: TaskType,
) -> Result<RunResult, StageError>
where
    G: ReasoningGateway + ?Sized,
{
    debug!("Synthesizing {} post-debate drafts", drafts.len());

    let prompt = PromptTemplate::synthesis(objective, drafts, task_type);
    let request = ReasoningRequest::structured(params.synthesis_model.clone(), prompt)
        .with_web_grounding(task_type.wants_grounding());

    let reply = invoke_with_backoff(&params.backoff, || gateway.generate(&request)).await?;
    let parsed = parse_synthesis_reply(&reply.text)?;

    Ok(RunResult::from_synthesis(
        parsed,
        drafts.to_vec(),
        task_type,
        reply.citations,
        &params.synthesis_model,
    ))
}
