//! Test doubles shared across use-case tests.

use crate::ports::reasoning_gateway::{
    GatewayError, ReasoningGateway, ReasoningReply, ReasoningRequest,
};
use crate::ports::run_events::RunObserver;
use crate::ports::store::{RunLog, StoreError};
use council_domain::{Brief, Draft, HistoryItem, InterimInsight, RunState};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Gateway that replays a fixed script of replies in call order and
/// records every request it saw.
pub struct ScriptedGateway {
    replies: Mutex<VecDeque<Result<ReasoningReply, GatewayError>>>,
    seen: Mutex<Vec<ReasoningRequest>>,
}

impl ScriptedGateway {
    pub fn new(replies: Vec<Result<ReasoningReply, GatewayError>>) -> Self {
        Self {
            replies: Mutex::new(VecDeque::from(replies)),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Number of calls made so far
    pub fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    /// Snapshot of the requests seen so far
    pub fn requests(&self) -> Vec<ReasoningRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReasoningGateway for ScriptedGateway {
    async fn generate(&self, request: &ReasoningRequest) -> Result<ReasoningReply, GatewayError> {
        self.seen.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Other("no scripted reply left".to_string())))
    }
}

/// Observer that records every event for later assertions
#[derive(Default)]
pub struct RecordingObserver {
    states: Mutex<Vec<RunState>>,
    insights: Mutex<Vec<InterimInsight>>,
}

impl RecordingObserver {
    pub fn states(&self) -> Vec<RunState> {
        self.states.lock().unwrap().clone()
    }

    pub fn insights(&self) -> Vec<InterimInsight> {
        self.insights.lock().unwrap().clone()
    }
}

impl RunObserver for RecordingObserver {
    fn on_state_change(&self, state: &RunState) {
        self.states.lock().unwrap().push(*state);
    }

    fn on_insight(&self, insight: &InterimInsight) {
        self.insights.lock().unwrap().push(insight.clone());
    }
}

/// In-memory run log; `failing()` builds one whose appends always error
#[derive(Default)]
pub struct MemoryRunLog {
    items: Mutex<Vec<HistoryItem>>,
    fail_appends: bool,
}

impl MemoryRunLog {
    pub fn failing() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
            fail_appends: true,
        }
    }
}

impl RunLog for MemoryRunLog {
    fn append(&self, item: &HistoryItem) -> Result<(), StoreError> {
        if self.fail_appends {
            return Err(StoreError::Io(std::io::Error::other("disk full")));
        }
        self.items.lock().unwrap().push(item.clone());
        Ok(())
    }

    fn list(&self) -> Result<Vec<HistoryItem>, StoreError> {
        Ok(self.items.lock().unwrap().clone())
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.items.lock().unwrap().clear();
        Ok(())
    }
}

/// A post-simulation draft for stage tests
pub fn sample_draft(id: &str, role: &str) -> Draft {
    Draft {
        perspective_id: id.to_string(),
        perspective_role: role.to_string(),
        content: format!("{role} narrative"),
        key_point: format!("{role} key point"),
        friction_point: format!("{role} friction"),
        white_paper: format!("{role} white paper"),
        debate_critique: None,
        sources: None,
        brief: Some(Brief {
            core_thesis: format!("{role} thesis"),
            evidence_snippets: vec![],
            technical_constraints: vec![],
        }),
    }
}

/// Well-formed simulation reply JSON
pub fn simulation_reply_json(key_point: &str, friction_point: &str) -> String {
    serde_json::json!({
        "content": "Narrative content.",
        "keyPoint": key_point,
        "frictionPoint": friction_point,
        "whitePaper": "Long-form analysis.",
        "brief": {
            "coreThesis": "Thesis.",
            "evidenceSnippets": [],
            "technicalConstraints": []
        }
    })
    .to_string()
}

/// Well-formed debate reply JSON
pub fn debate_reply_json(critique: &str) -> String {
    serde_json::json!({
        "debateCritique": critique,
        "whitePaper": "Revised long-form analysis.",
        "frictionPoint": "Revised friction."
    })
    .to_string()
}

/// Well-formed synthesis reply JSON, optionally with a demonstration block
pub fn synthesis_reply_json(with_demonstration: bool) -> String {
    let mut value = serde_json::json!({
        "finalDraft": "The master plan.",
        "improvedPrompt": "The improved prompt.",
        "whyItIsBetter": ["Sharper scope", "Named trade-offs"],
        "generalizableInsight": "Constraints breed clarity.",
        "simulationTensions": ["Speed vs. rigor"],
        "collisionMap": [{
            "personaA": "CFO",
            "personaB": "Growth Lead",
            "tension": "Spend discipline vs. reach",
            "resolution": "Stage the spend behind retention gates"
        }],
        "sacrificeLog": [{
            "sacrifice": "Launch breadth",
            "reason": "Focus wins",
            "risk": "low"
        }],
        "redlines": ["Never discount the core tier"],
        "followUpQuestions": ["What is the churn ceiling?"]
    });

    if with_demonstration {
        value["concreteDemonstration"] = serde_json::json!({
            "workingExample": "A complete worked example.",
            "actionableStructure": ["Step 1", "Step 2"],
            "specs": {
                "variables": ["audience"],
                "references": "similar to X but quieter",
                "toneMood": "confident"
            }
        });
    }

    value.to_string()
}
