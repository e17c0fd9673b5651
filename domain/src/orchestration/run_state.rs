//! Run state machine

use serde::{Deserialize, Serialize};

/// State of a council run
///
/// A run moves `Idle → Processing → Debating → Complete`; `Error` is
/// reachable from either working state on unrecoverable failure. A reset
/// returns the run to `Idle` from anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunState {
    Idle,
    /// Simulation stage - drafts are being produced lens by lens
    Processing,
    /// Debate stage - drafts are being cross-examined
    Debating,
    Complete,
    Error,
}

impl RunState {
    pub fn as_str(&self) -> &str {
        match self {
            RunState::Idle => "IDLE",
            RunState::Processing => "PROCESSING",
            RunState::Debating => "DEBATING",
            RunState::Complete => "COMPLETE",
            RunState::Error => "ERROR",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            RunState::Idle => "Idle",
            RunState::Processing => "Simulating perspectives",
            RunState::Debating => "Debating drafts",
            RunState::Complete => "Complete",
            RunState::Error => "Error",
        }
    }

    /// Whether a new run may be started from this state.
    ///
    /// Only one run may be in flight at a time; callers must not start a
    /// run while one is processing or debating.
    pub fn can_start(&self) -> bool {
        matches!(self, RunState::Idle | RunState::Complete | RunState::Error)
    }
}

impl std::fmt::Display for RunState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_flight_states_block_start() {
        assert!(RunState::Idle.can_start());
        assert!(RunState::Complete.can_start());
        assert!(RunState::Error.can_start());
        assert!(!RunState::Processing.can_start());
        assert!(!RunState::Debating.can_start());
    }

    #[test]
    fn test_wire_form() {
        let json = serde_json::to_string(&RunState::Debating).unwrap();
        assert_eq!(json, "\"DEBATING\"");
    }
}
