//! Configuration file schema

use council_application::{BackoffPolicy, CouncilParams};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// `[gateway]` section - reasoning service access
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewaySection {
    /// Environment variable holding the API key
    pub api_key_env: String,
    pub base_url: String,
    /// Override the simulation/debate backend
    pub simulation_model: Option<String>,
    /// Override the synthesis backend
    pub synthesis_model: Option<String>,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            api_key_env: "GEMINI_API_KEY".to_string(),
            base_url: crate::gemini::gateway::DEFAULT_BASE_URL.to_string(),
            simulation_model: None,
            synthesis_model: None,
        }
    }
}

/// `[execution]` section - pipeline pacing and retry policy
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutionSection {
    /// Pause between consecutive service calls (ms)
    pub pace_ms: u64,
    /// Rate-limit retries after the initial attempt
    pub max_retries: u32,
    /// Delay before the first retry (ms); doubles each retry
    pub base_delay_ms: u64,
}

impl Default for ExecutionSection {
    fn default() -> Self {
        Self {
            pace_ms: 400,
            max_retries: 3,
            base_delay_ms: 2000,
        }
    }
}

/// `[storage]` section - where the run log and artifact library live
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSection {
    pub data_dir: Option<PathBuf>,
}

/// Root configuration file schema
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub gateway: GatewaySection,
    pub execution: ExecutionSection,
    pub storage: StorageSection,
}

impl FileConfig {
    /// Map the file schema onto pipeline parameters
    pub fn council_params(&self) -> CouncilParams {
        let mut params = CouncilParams::default()
            .with_pace(Duration::from_millis(self.execution.pace_ms))
            .with_backoff(BackoffPolicy::new(
                self.execution.max_retries,
                Duration::from_millis(self.execution.base_delay_ms),
            ));

        if let Some(model) = &self.gateway.simulation_model {
            params = params.with_simulation_model(model.parse().unwrap());
        }
        if let Some(model) = &self.gateway.synthesis_model {
            params = params.with_synthesis_model(model.parse().unwrap());
        }
        params
    }

    /// Resolve the data directory, preferring the configured path and
    /// falling back to the platform data dir, then the working directory.
    pub fn resolve_data_dir(&self) -> PathBuf {
        self.storage.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|d| d.join("prompt-council"))
                .unwrap_or_else(|| PathBuf::from("."))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use council_domain::Model;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.gateway.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.execution.pace_ms, 400);
        assert_eq!(config.execution.max_retries, 3);
        assert_eq!(config.execution.base_delay_ms, 2000);
        assert!(config.storage.data_dir.is_none());
    }

    #[test]
    fn test_toml_roundtrip_with_partial_sections() {
        let config: FileConfig = toml::from_str(
            r#"
            [execution]
            pace_ms = 100

            [gateway]
            synthesis_model = "gemini-3-pro-preview"
            "#,
        )
        .unwrap();

        assert_eq!(config.execution.pace_ms, 100);
        // untouched fields keep their defaults
        assert_eq!(config.execution.max_retries, 3);
        assert_eq!(
            config.gateway.synthesis_model.as_deref(),
            Some("gemini-3-pro-preview")
        );
    }

    #[test]
    fn test_council_params_mapping() {
        let config: FileConfig = toml::from_str(
            r#"
            [execution]
            pace_ms = 50
            max_retries = 1
            base_delay_ms = 10

            [gateway]
            simulation_model = "custom-sim"
            "#,
        )
        .unwrap();

        let params = config.council_params();
        assert_eq!(params.pace, Duration::from_millis(50));
        assert_eq!(params.backoff.max_retries, 1);
        assert_eq!(params.backoff.base_delay, Duration::from_millis(10));
        assert_eq!(params.simulation_model, Model::Custom("custom-sim".into()));
        assert_eq!(params.synthesis_model, Model::Gemini3Pro);
    }
}
