//! Perspective profile entity

use serde::{Deserialize, Serialize};

/// One configured council lens (Entity)
///
/// A profile describes the persona one reasoning agent adopts for a run:
/// its mission, rules of thumb, personality, and limits. Profiles are
/// immutable once a run starts; lenses with a blank role are kept in the
/// roster but excluded from execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerspectiveProfile {
    pub id: String,
    pub role: String,
    /// Core mission statement
    pub directive: String,
    /// Rules of thumb the persona reasons with
    pub heuristics: String,
    /// Personality / tone descriptor
    pub vibe: String,
    /// Hard limits on the persona's reasoning
    pub constraints: String,
    #[serde(default)]
    pub seed: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
    /// Free-text grounding source the profile was distilled from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted_biases: Option<Vec<String>>,
    #[serde(default)]
    pub is_high_fidelity: bool,
    pub fidelity_score: f64,
}

impl PerspectiveProfile {
    /// Create a profile with the given identity and role; all persona
    /// fields start empty and fidelity defaults to 1.0 (user-authored).
    pub fn new(id: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role: role.into(),
            directive: String::new(),
            heuristics: String::new(),
            vibe: String::new(),
            constraints: String::new(),
            seed: String::new(),
            rationale: None,
            source_text: None,
            extracted_biases: None,
            is_high_fidelity: false,
            fidelity_score: 1.0,
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_directive(mut self, directive: impl Into<String>) -> Self {
        self.directive = directive.into();
        self
    }

    pub fn with_heuristics(mut self, heuristics: impl Into<String>) -> Self {
        self.heuristics = heuristics.into();
        self
    }

    pub fn with_vibe(mut self, vibe: impl Into<String>) -> Self {
        self.vibe = vibe.into();
        self
    }

    pub fn with_constraints(mut self, constraints: impl Into<String>) -> Self {
        self.constraints = constraints.into();
        self
    }

    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = seed.into();
        self
    }

    pub fn with_source_text(mut self, source_text: impl Into<String>) -> Self {
        self.source_text = Some(source_text.into());
        self
    }

    /// Set the fidelity score, clamped to [0, 1]
    pub fn with_fidelity_score(mut self, score: f64) -> Self {
        self.fidelity_score = score.clamp(0.0, 1.0);
        self
    }

    pub fn with_high_fidelity(mut self, high: bool) -> Self {
        self.is_high_fidelity = high;
        self
    }

    /// Whether this lens participates in a run (non-blank role)
    pub fn is_active(&self) -> bool {
        !self.role.trim().is_empty()
    }
}
