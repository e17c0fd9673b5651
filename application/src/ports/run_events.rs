//! Run event port - the progressive-disclosure channel
//!
//! The orchestrator publishes state transitions and interim insights here;
//! the presentation layer subscribes. Purely observational: implementations
//! must not block or otherwise drive pipeline timing.

use council_domain::{InterimInsight, RunState};

/// Observer for run progress events
///
/// Implementations live in the presentation layer and can render the feed
/// in various ways (console, spinner, log).
pub trait RunObserver: Send + Sync {
    /// Called on every run state transition
    fn on_state_change(&self, state: &RunState);

    /// Called when an interim insight is appended to the run's feed.
    /// Insights only ever accumulate within a run; a new run starts a
    /// fresh feed.
    fn on_insight(&self, insight: &InterimInsight);
}

/// No-op observer for when progress reporting is not needed
pub struct NoRunObserver;

impl RunObserver for NoRunObserver {
    fn on_state_change(&self, _state: &RunState) {}
    fn on_insight(&self, _insight: &InterimInsight) {}
}
