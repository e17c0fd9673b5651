//! Draft value objects - one perspective's work product per pipeline stage

use crate::council::profile::PerspectiveProfile;
use crate::council::reply::{DebateReply, SimulationReply};
use serde::{Deserialize, Serialize};

/// A cited piece of external evidence attached to a draft or result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub title: String,
    pub uri: String,
}

impl Citation {
    pub fn new(title: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            uri: uri.into(),
        }
    }
}

/// Structured brief accompanying a draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brief {
    pub core_thesis: String,
    #[serde(default)]
    pub evidence_snippets: Vec<String>,
    #[serde(default)]
    pub technical_constraints: Vec<String>,
}

/// One perspective's output for one run (Value Object)
///
/// Produced by the simulation stage, then replaced wholesale by the debate
/// stage via [`Draft::with_debate`] - the debate pass overwrites only the
/// critique, white paper, and friction point; identity and evidence carry
/// over unchanged. Never modified after the debate stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub perspective_id: String,
    pub perspective_role: String,
    pub content: String,
    /// The single strongest point this lens advances
    pub key_point: String,
    /// The major friction this lens sees in the objective
    pub friction_point: String,
    /// Long-form analytic write-up
    pub white_paper: String,
    /// Present only after the debate stage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debate_critique: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<Citation>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brief: Option<Brief>,
}

impl Draft {
    /// Bind a parsed simulation reply to its owning profile.
    ///
    /// An empty citation list is stored as `None` so drafts without web
    /// grounding serialize without the field.
    pub fn from_simulation(
        profile: &PerspectiveProfile,
        reply: SimulationReply,
        sources: Vec<Citation>,
    ) -> Self {
        Self {
            perspective_id: profile.id.clone(),
            perspective_role: profile.role.clone(),
            content: reply.content,
            key_point: reply.key_point,
            friction_point: reply.friction_point,
            white_paper: reply.white_paper,
            debate_critique: None,
            sources: if sources.is_empty() {
                None
            } else {
                Some(sources)
            },
            brief: Some(reply.brief),
        }
    }

    /// Apply a debate pass, producing a new draft.
    ///
    /// Overwrites exactly the critique, white paper, and friction point;
    /// all other fields (identity, content, key point, sources, brief)
    /// are carried over.
    pub fn with_debate(self, reply: DebateReply) -> Self {
        Self {
            debate_critique: Some(reply.debate_critique),
            white_paper: reply.white_paper,
            friction_point: reply.friction_point,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_reply() -> SimulationReply {
        SimulationReply {
            content: "Lead with unit economics.".to_string(),
            key_point: "Margins decide survival".to_string(),
            friction_point: "Growth spend is unbounded".to_string(),
            white_paper: "A detailed look at the cost structure...".to_string(),
            brief: Brief {
                core_thesis: "Profitability first".to_string(),
                evidence_snippets: vec!["CAC doubled YoY".to_string()],
                technical_constraints: vec![],
            },
        }
    }

    #[test]
    fn test_from_simulation_binds_identity() {
        let profile = PerspectiveProfile::new("p1", "CFO");
        let draft = Draft::from_simulation(&profile, sample_reply(), vec![]);

        assert_eq!(draft.perspective_id, "p1");
        assert_eq!(draft.perspective_role, "CFO");
        assert!(draft.debate_critique.is_none());
        assert!(draft.sources.is_none());
        assert!(draft.brief.is_some());
    }

    #[test]
    fn test_from_simulation_keeps_citations() {
        let profile = PerspectiveProfile::new("p1", "CFO");
        let sources = vec![Citation::new("SaaS benchmarks 2025", "https://example.com/b")];
        let draft = Draft::from_simulation(&profile, sample_reply(), sources.clone());
        assert_eq!(draft.sources, Some(sources));
    }

    #[test]
    fn test_with_debate_overwrites_only_volatile_fields() {
        let profile = PerspectiveProfile::new("p1", "CFO");
        let draft = Draft::from_simulation(&profile, sample_reply(), vec![]);
        let original = draft.clone();

        let debated = draft.with_debate(DebateReply {
            debate_critique: "The growth lens underweights churn.".to_string(),
            white_paper: "Revised: cost structure under churn pressure...".to_string(),
            friction_point: "Churn-adjusted payback is 19 months".to_string(),
        });

        // volatile fields replaced
        assert_eq!(
            debated.debate_critique.as_deref(),
            Some("The growth lens underweights churn.")
        );
        assert_ne!(debated.white_paper, original.white_paper);
        assert_ne!(debated.friction_point, original.friction_point);

        // non-volatile fields carried over
        assert_eq!(debated.perspective_id, original.perspective_id);
        assert_eq!(debated.perspective_role, original.perspective_role);
        assert_eq!(debated.content, original.content);
        assert_eq!(debated.key_point, original.key_point);
        assert_eq!(debated.brief, original.brief);
        assert_eq!(debated.sources, original.sources);
    }
}
