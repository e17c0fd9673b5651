//! Perspective simulation stage
//!
//! One reasoning-service call per active lens, producing that lens's
//! independent draft. A pure transform from (profile, objective, context)
//! to a new [`Draft`]; no persistence, no shared state.

use crate::config::CouncilParams;
use crate::ports::reasoning_gateway::{ReasoningGateway, ReasoningRequest};
use crate::use_cases::backoff::invoke_with_backoff;
use crate::use_cases::shared::StageError;
use council_domain::{
    Draft, Objective, PerspectiveProfile, PromptTemplate, TaskType, parse_simulation_reply,
};
use tracing::debug;

/// Produce one lens's draft for the run objective.
///
/// Analytical (`B`) objectives ask the service to ground its answer in
/// live web evidence; any citations the service attaches are carried on
/// the draft.
pub async fn simulate_perspective<G>(
    gateway: &G,
    params: &CouncilParams,
    profile: &PerspectiveProfile,
    objective: &Objective,
    context: &str,
    task_type: TaskType,
) -> Result<Draft, StageError>
where
    G: ReasoningGateway + ?Sized,
{
    debug!("Simulating perspective '{}'", profile.role);

    let prompt = PromptTemplate::simulation(profile, objective, context, task_type);
    let request = ReasoningRequest::structured(params.simulation_model.clone(), prompt)
        .with_web_grounding(task_type.wants_grounding());

    let reply = invoke_with_backoff(&params.backoff, || gateway.generate(&request)).await?;
    let parsed = parse_simulation_reply(&reply.text)?;

    Ok(Draft::from_simulation(profile, parsed, reply.citations))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::reasoning_gateway::{GatewayError, ReasoningReply};
    use crate::testing::{ScriptedGateway, simulation_reply_json};
    use council_domain::Citation;

    fn profile() -> PerspectiveProfile {
        PerspectiveProfile::new("p1", "CFO").with_directive("Guard the margins")
    }

    #[tokio::test]
    async fn test_produces_draft_bound_to_profile() {
        let gateway = ScriptedGateway::new(vec![Ok(ReasoningReply::text_only(
            simulation_reply_json("Margins decide survival", "Growth spend is unbounded"),
        ))]);
        let params = CouncilParams::default();

        let draft = simulate_perspective(
            &gateway,
            &params,
            &profile(),
            &Objective::new("Launch a newsletter"),
            "",
            TaskType::Generative,
        )
        .await
        .unwrap();

        assert_eq!(draft.perspective_id, "p1");
        assert_eq!(draft.perspective_role, "CFO");
        assert_eq!(draft.key_point, "Margins decide survival");
        assert!(draft.debate_critique.is_none());
    }

    #[tokio::test]
    async fn test_analytical_requests_grounding_and_keeps_citations() {
        let gateway = ScriptedGateway::new(vec![Ok(ReasoningReply {
            text: simulation_reply_json("k", "f"),
            citations: vec![Citation::new("Benchmarks 2025", "https://example.com/b")],
        })]);
        let params = CouncilParams::default();

        let draft = simulate_perspective(
            &gateway,
            &params,
            &profile(),
            &Objective::new("Pick a database"),
            "",
            TaskType::Analytical,
        )
        .await
        .unwrap();

        let requests = gateway.requests();
        assert!(requests[0].web_grounding);
        assert_eq!(requests[0].model, params.simulation_model);
        assert_eq!(draft.sources.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_reply_is_fatal() {
        let gateway =
            ScriptedGateway::new(vec![Ok(ReasoningReply::text_only("not json at all"))]);
        let params = CouncilParams::default();

        let err = simulate_perspective(
            &gateway,
            &params,
            &profile(),
            &Objective::new("Launch"),
            "",
            TaskType::Generative,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, StageError::Reply(_)));
    }

    #[tokio::test]
    async fn test_gateway_failure_propagates() {
        let gateway = ScriptedGateway::new(vec![Err(GatewayError::RequestFailed(
            "503".to_string(),
        ))]);
        let params = CouncilParams::default();

        let err = simulate_perspective(
            &gateway,
            &params,
            &profile(),
            &Objective::new("Launch"),
            "",
            TaskType::Generative,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, StageError::Gateway(_)));
    }
}
