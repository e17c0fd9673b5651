//! Persisted records - run history and saved artifacts

use crate::council::profile::PerspectiveProfile;
use crate::council::result::RunResult;
use serde::{Deserialize, Serialize};

/// One completed run, as persisted in the append-only run log
///
/// Never mutated after creation; the log supports only append, list, and
/// bulk clear. Timestamps are unix milliseconds so this crate stays free
/// of clock dependencies - the application layer stamps them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    pub id: String,
    #[serde(rename = "timestamp")]
    pub timestamp_ms: i64,
    pub original_goal: String,
    pub perspectives: Vec<PerspectiveProfile>,
    pub result: RunResult,
}

impl HistoryItem {
    pub fn new(
        id: impl Into<String>,
        timestamp_ms: i64,
        original_goal: impl Into<String>,
        perspectives: Vec<PerspectiveProfile>,
        result: RunResult,
    ) -> Self {
        Self {
            id: id.into(),
            timestamp_ms,
            original_goal: original_goal.into(),
            perspectives,
            result,
        }
    }
}

/// A saved prompt artifact in the user's library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedArtifact {
    pub id: String,
    pub label: String,
    pub content: String,
    #[serde(rename = "timestamp")]
    pub timestamp_ms: i64,
}

impl SavedArtifact {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        content: impl Into<String>,
        timestamp_ms: i64,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            content: content.into(),
            timestamp_ms,
        }
    }
}
