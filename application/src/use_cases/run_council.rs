//! Run Council use case
//!
//! Orchestrates the full council pipeline for one objective: sequential
//! perspective simulation, sequential debate passes, one synthesis call,
//! then history persistence. Publishes state transitions and interim
//! insights to a [`RunObserver`] as the run progresses.
//!
//! The pipeline is deliberately a single thread of control - drafts are
//! produced and debated strictly in roster order, one remote call at a
//! time, with a fixed pause between calls to stay under the service's
//! request-rate ceiling.

use crate::config::CouncilParams;
use crate::ports::reasoning_gateway::ReasoningGateway;
use crate::ports::run_events::{NoRunObserver, RunObserver};
use crate::ports::store::RunLog;
use crate::use_cases::debate::conduct_debate;
use crate::use_cases::shared::{StageError, check_cancelled};
use crate::use_cases::simulate::simulate_perspective;
use crate::use_cases::synthesize::synthesize;
use council_domain::{
    Draft, HistoryItem, InterimInsight, Objective, PerspectiveProfile, RunResult, RunState,
    TaskType,
};
use std::sync::Arc;
use thiserror::Error;
use tokio::time::sleep;
use tracing::{info, warn};
use tokio_util::sync::CancellationToken;

/// Errors that can occur during a council run
#[derive(Error, Debug)]
pub enum RunCouncilError {
    #[error("No active council lenses defined")]
    NoActiveLenses,

    #[error("Perspective simulation failed for '{role}': {source}")]
    SimulationFailed {
        role: String,
        #[source]
        source: StageError,
    },

    #[error("Debate pass failed for '{role}': {source}")]
    DebateFailed {
        role: String,
        #[source]
        source: StageError,
    },

    #[error("Synthesis failed: {0}")]
    SynthesisFailed(#[source] StageError),

    #[error("Run cancelled")]
    Cancelled,
}

impl RunCouncilError {
    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, RunCouncilError::Cancelled)
    }
}

/// Input for the RunCouncil use case
#[derive(Debug, Clone)]
pub struct RunCouncilInput {
    /// The objective the council deliberates on
    pub objective: Objective,
    /// Optional free-text context supplied alongside the objective
    pub context: String,
    /// The full roster; lenses with a blank role are skipped
    pub perspectives: Vec<PerspectiveProfile>,
    pub task_type: TaskType,
}

impl RunCouncilInput {
    pub fn new(objective: impl Into<Objective>, perspectives: Vec<PerspectiveProfile>) -> Self {
        Self {
            objective: objective.into(),
            context: String::new(),
            perspectives,
            task_type: TaskType::Analytical,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    pub fn with_task_type(mut self, task_type: TaskType) -> Self {
        self.task_type = task_type;
        self
    }
}

/// Use case for running a full council deliberation
pub struct RunCouncilUseCase<G: ReasoningGateway + 'static> {
    gateway: Arc<G>,
    run_log: Arc<dyn RunLog>,
    params: CouncilParams,
    cancellation_token: Option<CancellationToken>,
}

impl<G: ReasoningGateway + 'static> RunCouncilUseCase<G> {
    pub fn new(gateway: Arc<G>, run_log: Arc<dyn RunLog>) -> Self {
        Self {
            gateway,
            run_log,
            params: CouncilParams::default(),
            cancellation_token: None,
        }
    }

    pub fn with_params(mut self, params: CouncilParams) -> Self {
        self.params = params;
        self
    }

    /// Set a cancellation token for explicit in-flight abandonment.
    ///
    /// The token is checked before every remote call; once cancelled, the
    /// run returns [`RunCouncilError::Cancelled`] and never touches the
    /// observer or the run log again.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: RunCouncilInput) -> Result<RunResult, RunCouncilError> {
        self.execute_with_observer(input, &NoRunObserver).await
    }

    /// Execute the use case, publishing progress to the observer.
    ///
    /// A validation failure (no active lenses) is rejected before any
    /// state transition or service call. Any stage failure moves the run
    /// to `Error` with nothing persisted; a cancelled run emits no
    /// further events at all.
    pub async fn execute_with_observer(
        &self,
        input: RunCouncilInput,
        observer: &dyn RunObserver,
    ) -> Result<RunResult, RunCouncilError> {
        let active: Vec<PerspectiveProfile> = input
            .perspectives
            .iter()
            .filter(|p| p.is_active())
            .cloned()
            .collect();

        if active.is_empty() {
            return Err(RunCouncilError::NoActiveLenses);
        }

        let result = self.run_pipeline(&input, &active, observer).await;

        match &result {
            Ok(_) => observer.on_state_change(&RunState::Complete),
            Err(e) if e.is_cancelled() => {}
            Err(_) => observer.on_state_change(&RunState::Error),
        }

        result
    }

    async fn run_pipeline(
        &self,
        input: &RunCouncilInput,
        active: &[PerspectiveProfile],
        observer: &dyn RunObserver,
    ) -> Result<RunResult, RunCouncilError> {
        check_cancelled(&self.cancellation_token)?;

        info!(
            "Starting council run with {} active lenses (task type {})",
            active.len(),
            input.task_type
        );

        // Stage 1: sequential simulation with progressive disclosure.
        // One lens at a time keeps the request rate under the service's
        // ceiling even before backoff kicks in.
        observer.on_state_change(&RunState::Processing);

        let mut drafts: Vec<Draft> = Vec::with_capacity(active.len());
        for (idx, profile) in active.iter().enumerate() {
            check_cancelled(&self.cancellation_token)?;

            let draft = simulate_perspective(
                self.gateway.as_ref(),
                &self.params,
                profile,
                &input.objective,
                &input.context,
                input.task_type,
            )
            .await
            .map_err(|source| RunCouncilError::SimulationFailed {
                role: profile.role.clone(),
                source,
            })?;

            observer.on_insight(&InterimInsight::identified(
                &profile.role,
                &draft.friction_point,
            ));
            drafts.push(draft);

            if idx + 1 < active.len() {
                sleep(self.params.pace).await;
            }
        }

        // Stage 2: sequential debate passes in the same roster order
        observer.on_state_change(&RunState::Debating);

        let mut debated: Vec<Draft> = Vec::with_capacity(drafts.len());
        for (idx, draft) in drafts.iter().enumerate() {
            check_cancelled(&self.cancellation_token)?;

            let peers: Vec<Draft> = drafts
                .iter()
                .filter(|d| d.perspective_id != draft.perspective_id)
                .cloned()
                .collect();

            let updated = conduct_debate(self.gateway.as_ref(), &self.params, draft, &peers)
                .await
                .map_err(|source| RunCouncilError::DebateFailed {
                    role: draft.perspective_role.clone(),
                    source,
                })?;

            // A lens with no peers gets no conflict insight - there was
            // nobody to challenge.
            if let Some(first_peer) = peers.first() {
                observer.on_insight(&InterimInsight::conflict(
                    &draft.perspective_role,
                    &first_peer.perspective_role,
                ));
            }
            debated.push(updated);

            if idx + 1 < drafts.len() {
                sleep(self.params.pace).await;
            }
        }

        // Stage 3: synthesis on the deep backend
        check_cancelled(&self.cancellation_token)?;

        let result = synthesize(
            self.gateway.as_ref(),
            &self.params,
            &input.objective,
            &debated,
            input.task_type,
        )
        .await
        .map_err(RunCouncilError::SynthesisFailed)?;

        // Persist, then complete. A store failure after a successful
        // synthesis is best-effort: logged, not surfaced.
        let timestamp_ms = chrono::Utc::now().timestamp_millis();
        let item = HistoryItem::new(
            format!("run-{timestamp_ms}"),
            timestamp_ms,
            input.objective.content(),
            active.to_vec(),
            result.clone(),
        );
        if let Err(e) = self.run_log.append(&item) {
            warn!("Failed to persist run history: {}", e);
        }

        info!("Council run complete");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::reasoning_gateway::{GatewayError, ReasoningReply};
    use crate::testing::{
        MemoryRunLog, RecordingObserver, ScriptedGateway, debate_reply_json,
        simulation_reply_json, synthesis_reply_json,
    };
    use council_domain::{Citation, InsightKind};

    fn profiles(roles: &[&str]) -> Vec<PerspectiveProfile> {
        roles
            .iter()
            .enumerate()
            .map(|(i, role)| PerspectiveProfile::new(format!("p{}", i + 1), *role))
            .collect()
    }

    fn ok(text: String) -> Result<ReasoningReply, GatewayError> {
        Ok(ReasoningReply::text_only(text))
    }

    /// Scripted happy path for N lenses: N simulations, N debates, one synthesis
    fn happy_script(n: usize, with_demo: bool) -> Vec<Result<ReasoningReply, GatewayError>> {
        let mut script = Vec::new();
        for i in 0..n {
            script.push(ok(simulation_reply_json(
                &format!("key point {i}"),
                &format!("friction {i}"),
            )));
        }
        for i in 0..n {
            script.push(ok(debate_reply_json(&format!("critique {i}"))));
        }
        script.push(ok(synthesis_reply_json(with_demo)));
        script
    }

    fn use_case(
        gateway: ScriptedGateway,
        log: Arc<MemoryRunLog>,
    ) -> RunCouncilUseCase<ScriptedGateway> {
        RunCouncilUseCase::new(Arc::new(gateway), log)
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_run_produces_one_draft_per_lens_in_order() {
        let gateway = ScriptedGateway::new(happy_script(2, false));
        let log = Arc::new(MemoryRunLog::default());
        let observer = RecordingObserver::default();

        let input = RunCouncilInput::new("Launch a newsletter", profiles(&["CFO", "Growth Lead"]));
        let result = use_case(gateway, log.clone())
            .execute_with_observer(input, &observer)
            .await
            .unwrap();

        assert_eq!(result.drafts.len(), 2);
        assert_eq!(result.drafts[0].perspective_id, "p1");
        assert_eq!(result.drafts[1].perspective_id, "p2");
        assert!(result.drafts.iter().all(|d| d.debate_critique.is_some()));

        assert_eq!(
            observer.states(),
            vec![RunState::Processing, RunState::Debating, RunState::Complete]
        );

        // One history item, carrying the run's profiles and result
        let history = log.list().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].original_goal, "Launch a newsletter");
        assert_eq!(history[0].perspectives.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_insights_accumulate_in_stage_order() {
        let gateway = ScriptedGateway::new(happy_script(2, false));
        let log = Arc::new(MemoryRunLog::default());
        let observer = RecordingObserver::default();

        let input = RunCouncilInput::new("Goal", profiles(&["CFO", "Growth Lead"]));
        use_case(gateway, log)
            .execute_with_observer(input, &observer)
            .await
            .unwrap();

        let insights = observer.insights();
        assert_eq!(insights.len(), 4);
        assert_eq!(insights[0].kind, InsightKind::Identified);
        assert_eq!(insights[0].role, "CFO");
        assert_eq!(insights[1].kind, InsightKind::Identified);
        assert_eq!(insights[1].role, "Growth Lead");
        assert_eq!(insights[2].kind, InsightKind::Conflict);
        assert_eq!(insights[2].text, "Challenged premises from Growth Lead");
        assert_eq!(insights[3].kind, InsightKind::Conflict);
        assert_eq!(insights[3].text, "Challenged premises from CFO");
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_role_lenses_are_excluded() {
        let gateway = ScriptedGateway::new(happy_script(2, false));
        let log = Arc::new(MemoryRunLog::default());

        let mut roster = profiles(&["CFO", "Growth Lead"]);
        roster.push(PerspectiveProfile::new("p3", "   "));

        let result = use_case(gateway, log)
            .execute(RunCouncilInput::new("Goal", roster))
            .await
            .unwrap();

        assert_eq!(result.drafts.len(), 2);
    }

    #[tokio::test]
    async fn test_empty_roster_rejected_before_any_call() {
        let gateway = ScriptedGateway::new(vec![]);
        let log = Arc::new(MemoryRunLog::default());
        let observer = RecordingObserver::default();

        let input = RunCouncilInput::new("Goal", vec![PerspectiveProfile::new("p1", "")]);
        let use_case = RunCouncilUseCase::new(Arc::new(gateway), log.clone());
        let err = use_case
            .execute_with_observer(input, &observer)
            .await
            .unwrap_err();

        assert!(matches!(err, RunCouncilError::NoActiveLenses));
        // state never left idle: no events, no calls, no history
        assert!(observer.states().is_empty());
        assert!(observer.insights().is_empty());
        assert_eq!(use_case.gateway.calls(), 0);
        assert!(log.list().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_lens_analytical_run_debates_without_conflict() {
        let mut script = vec![Ok(ReasoningReply {
            text: simulation_reply_json("k", "f"),
            citations: vec![Citation::new("Evidence", "https://example.com/e")],
        })];
        script.push(ok(debate_reply_json("self-review")));
        script.push(ok(synthesis_reply_json(false)));

        let gateway = ScriptedGateway::new(script);
        let log = Arc::new(MemoryRunLog::default());
        let observer = RecordingObserver::default();

        let input = RunCouncilInput::new("Pick a database", profiles(&["DBA"]))
            .with_task_type(TaskType::Analytical);
        let use_case = RunCouncilUseCase::new(Arc::new(gateway), log.clone());
        let result = use_case
            .execute_with_observer(input, &observer)
            .await
            .unwrap();

        // the lone lens still gets a debate pass
        assert_eq!(use_case.gateway.calls(), 3);
        assert!(result.drafts[0].debate_critique.is_some());

        // but no conflict insight - there was nobody to challenge
        let insights = observer.insights();
        assert!(insights.iter().all(|i| i.kind != InsightKind::Conflict));
        assert_eq!(observer.states().last(), Some(&RunState::Complete));
    }

    #[tokio::test(start_paused = true)]
    async fn test_generative_run_result_has_demonstration() {
        let gateway = ScriptedGateway::new(happy_script(1, true));
        let log = Arc::new(MemoryRunLog::default());

        let input = RunCouncilInput::new("Write a manifesto", profiles(&["Brand Poet"]))
            .with_task_type(TaskType::Generative);
        let result = use_case(gateway, log).execute(input).await.unwrap();

        assert!(result.concrete_demonstration.is_some());
        assert_eq!(result.task_type, Some(TaskType::Generative));
    }

    #[tokio::test(start_paused = true)]
    async fn test_debate_failure_leaves_error_state_and_no_history() {
        let script = vec![
            ok(simulation_reply_json("k1", "f1")),
            ok(simulation_reply_json("k2", "f2")),
            Err(GatewayError::RequestFailed("boom".to_string())),
        ];
        let gateway = ScriptedGateway::new(script);
        let log = Arc::new(MemoryRunLog::default());
        let observer = RecordingObserver::default();

        let input = RunCouncilInput::new("Goal", profiles(&["CFO", "Growth Lead"]));
        let err = use_case(gateway, log.clone())
            .execute_with_observer(input, &observer)
            .await
            .unwrap_err();

        assert!(matches!(err, RunCouncilError::DebateFailed { .. }));
        assert_eq!(observer.states().last(), Some(&RunState::Error));
        // both simulation drafts already existed, yet nothing is persisted
        assert!(log.list().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_malformed_simulation_reply_aborts_run() {
        let gateway = ScriptedGateway::new(vec![ok("no json here".to_string())]);
        let log = Arc::new(MemoryRunLog::default());
        let observer = RecordingObserver::default();

        let input = RunCouncilInput::new("Goal", profiles(&["CFO"]));
        let err = use_case(gateway, log.clone())
            .execute_with_observer(input, &observer)
            .await
            .unwrap_err();

        match err {
            RunCouncilError::SimulationFailed { role, source } => {
                assert_eq!(role, "CFO");
                assert!(matches!(source, StageError::Reply(_)));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(observer.states().last(), Some(&RunState::Error));
        assert!(log.list().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_cancelled_token_aborts_before_any_call() {
        let gateway = ScriptedGateway::new(happy_script(1, false));
        let log = Arc::new(MemoryRunLog::default());
        let observer = RecordingObserver::default();

        let token = CancellationToken::new();
        token.cancel();

        let use_case = RunCouncilUseCase::new(Arc::new(gateway), log.clone())
            .with_cancellation(token);
        let input = RunCouncilInput::new("Goal", profiles(&["CFO"]));
        let err = use_case
            .execute_with_observer(input, &observer)
            .await
            .unwrap_err();

        assert!(err.is_cancelled());
        // an abandoned run goes quiet: no events, no calls, no history
        assert!(observer.states().is_empty());
        assert_eq!(use_case.gateway.calls(), 0);
        assert!(log.list().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_failure_still_completes() {
        let gateway = ScriptedGateway::new(happy_script(1, false));
        let log = Arc::new(MemoryRunLog::failing());
        let observer = RecordingObserver::default();

        let input = RunCouncilInput::new("Goal", profiles(&["CFO"]));
        let result = use_case(gateway, log)
            .execute_with_observer(input, &observer)
            .await;

        assert!(result.is_ok());
        assert_eq!(observer.states().last(), Some(&RunState::Complete));
    }
}
