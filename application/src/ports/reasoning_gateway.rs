//! Reasoning service gateway port
//!
//! Defines the interface for the external generative-reasoning service.
//! The backoff invoker in
//! [`use_cases::backoff`](crate::use_cases::backoff) is the sole call path
//! the pipeline stages use to reach this port.

use async_trait::async_trait;
use council_domain::{Citation, Model};
use thiserror::Error;

/// Errors that can occur when calling the reasoning service
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Quota-exceeded / too-many-requests signal - the only retryable error
    #[error("Rate limited by reasoning service: {0}")]
    RateLimited(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Empty reply from reasoning service")]
    EmptyReply,

    #[error("Other error: {0}")]
    Other(String),
}

impl GatewayError {
    /// Whether the backoff invoker may retry this failure
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, GatewayError::RateLimited(_))
    }
}

/// One request to the reasoning service
///
/// The prompt carries the persona fields, objective, context, and the
/// response-shape contract; the flags select structured-JSON output and
/// live web grounding.
#[derive(Debug, Clone)]
pub struct ReasoningRequest {
    pub model: Model,
    pub prompt: String,
    pub structured_json: bool,
    pub web_grounding: bool,
}

impl ReasoningRequest {
    /// A request expecting a structured JSON reply
    pub fn structured(model: Model, prompt: impl Into<String>) -> Self {
        Self {
            model,
            prompt: prompt.into(),
            structured_json: true,
            web_grounding: false,
        }
    }

    pub fn with_web_grounding(mut self, enabled: bool) -> Self {
        self.web_grounding = enabled;
        self
    }
}

/// The service's answer: raw text plus any citation metadata it attached
#[derive(Debug, Clone, Default)]
pub struct ReasoningReply {
    pub text: String,
    pub citations: Vec<Citation>,
}

impl ReasoningReply {
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            citations: Vec::new(),
        }
    }
}

/// Gateway for reasoning-service communication
///
/// This port defines how the application layer reaches the generative
/// service. Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ReasoningGateway: Send + Sync {
    /// Perform one generation call
    async fn generate(&self, request: &ReasoningRequest) -> Result<ReasoningReply, GatewayError>;
}
