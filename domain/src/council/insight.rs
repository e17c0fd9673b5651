//! Interim insight value objects - progress disclosure records

use serde::{Deserialize, Serialize};

/// Kind of an interim insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InsightKind {
    /// A lens identified its major friction point
    Identified,
    /// A lens challenged a peer's premises during debate
    Conflict,
    /// A lens grounded a claim in external evidence
    Grounded,
}

impl InsightKind {
    pub fn as_str(&self) -> &str {
        match self {
            InsightKind::Identified => "IDENTIFIED",
            InsightKind::Conflict => "CONFLICT",
            InsightKind::Grounded => "GROUNDED",
        }
    }
}

impl std::fmt::Display for InsightKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ephemeral progress record disclosed while a run is in flight (Value Object)
///
/// Insights accumulate append-only for the lifetime of one run and are
/// discarded on run start and reset; they are never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterimInsight {
    pub role: String,
    pub kind: InsightKind,
    pub text: String,
}

impl InterimInsight {
    /// Insight emitted after a lens finishes its simulation pass
    pub fn identified(role: impl Into<String>, friction_point: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            kind: InsightKind::Identified,
            text: friction_point.into(),
        }
    }

    /// Insight emitted after a debate pass that had at least one peer
    pub fn conflict(role: impl Into<String>, challenged_role: &str) -> Self {
        Self {
            role: role.into(),
            kind: InsightKind::Conflict,
            text: format!("Challenged premises from {}", challenged_role),
        }
    }

    /// Insight for a claim backed by external evidence
    pub fn grounded(role: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            kind: InsightKind::Grounded,
            text: text.into(),
        }
    }
}
