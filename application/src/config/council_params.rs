//! Council parameters - pipeline pacing and backend selection.
//!
//! [`CouncilParams`] groups the static parameters that control the
//! pipeline in [`RunCouncilUseCase`](crate::use_cases::run_council::RunCouncilUseCase).
//! These are application-layer concerns, not domain policy. The pacing and
//! retry constants are configurable defaults, not contractual values.

use crate::use_cases::backoff::BackoffPolicy;
use council_domain::Model;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Pipeline control parameters.
///
/// Controls the fixed pause between sequential service calls, the
/// rate-limit retry policy, and which backend each stage uses. The
/// inter-call pause is a throttle on top of the backoff policy's retry
/// delay: it bounds the steady-state request rate, while backoff handles
/// the service actively pushing back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouncilParams {
    /// Pause between consecutive simulation/debate calls
    pub pace: Duration,
    /// Retry policy applied to every reasoning-service call
    pub backoff: BackoffPolicy,
    /// Backend for the simulation and debate stages
    pub simulation_model: Model,
    /// Backend for the synthesis stage
    pub synthesis_model: Model,
}

impl Default for CouncilParams {
    fn default() -> Self {
        Self {
            pace: Duration::from_millis(400),
            backoff: BackoffPolicy::default(),
            simulation_model: Model::default_simulation(),
            synthesis_model: Model::default_synthesis(),
        }
    }
}

impl CouncilParams {
    // ==================== Builder Methods ====================

    pub fn with_pace(mut self, pace: Duration) -> Self {
        self.pace = pace;
        self
    }

    pub fn with_backoff(mut self, backoff: BackoffPolicy) -> Self {
        self.backoff = backoff;
        self
    }

    pub fn with_simulation_model(mut self, model: Model) -> Self {
        self.simulation_model = model;
        self
    }

    pub fn with_synthesis_model(mut self, model: Model) -> Self {
        self.synthesis_model = model;
        self
    }
}
