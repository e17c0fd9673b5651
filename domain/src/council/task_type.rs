//! Task type value object

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Classification of a run objective (Value Object)
///
/// Serialized as the single-letter wire form (`"A"` / `"B"`) used by the
/// reasoning service and the persisted history records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskType {
    /// `A` - creative / generative objectives. Synthesis must include a
    /// concrete demonstration block.
    Generative,
    /// `B` - analytical / technical objectives. Simulation and synthesis
    /// request web-grounded evidence.
    Analytical,
}

impl TaskType {
    /// Get the single-letter wire form
    pub fn as_str(&self) -> &str {
        match self {
            TaskType::Generative => "A",
            TaskType::Analytical => "B",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            TaskType::Generative => "Creative / Generative",
            TaskType::Analytical => "Analytical / Technical",
        }
    }

    /// Whether this task type asks the reasoning service for live web evidence
    pub fn wants_grounding(&self) -> bool {
        matches!(self, TaskType::Analytical)
    }
}

impl std::fmt::Display for TaskType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TaskType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" | "a" => Ok(TaskType::Generative),
            "B" | "b" => Ok(TaskType::Analytical),
            other => Err(DomainError::InvalidTaskType(other.to_string())),
        }
    }
}

impl Serialize for TaskType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TaskType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
