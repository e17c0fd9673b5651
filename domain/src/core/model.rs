//! Model value object representing a reasoning backend

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Reasoning backends available to the pipeline (Value Object)
///
/// Simulation and debate run on the fast tier for quota headroom; synthesis
/// runs on the deep tier for maximum reasoning depth.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    /// Fast tier - perspective simulation and debate passes
    Gemini3Flash,
    /// Deep tier - final synthesis
    Gemini3Pro,
    /// Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gemini3Flash => "gemini-3-flash-preview",
            Model::Gemini3Pro => "gemini-3-pro-preview",
            Model::Custom(s) => s,
        }
    }

    /// Default backend for the simulation and debate stages
    pub fn default_simulation() -> Model {
        Model::Gemini3Flash
    }

    /// Default backend for the synthesis stage
    pub fn default_synthesis() -> Model {
        Model::Gemini3Pro
    }
}

impl Default for Model {
    fn default() -> Self {
        Model::Gemini3Flash
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "gemini-3-flash-preview" => Model::Gemini3Flash,
            "gemini-3-pro-preview" => Model::Gemini3Pro,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap())
    }
}
