//! Gemini reasoning gateway implementation

use crate::gemini::protocol::{GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use council_application::{GatewayError, ReasoningGateway, ReasoningReply, ReasoningRequest};
use reqwest::StatusCode;
use tracing::{debug, info};

/// Default API root for the Gemini generateContent surface
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Reasoning gateway backed by the Gemini HTTP API
///
/// Quota pushback (HTTP 429, or an error body naming quota exhaustion)
/// maps to [`GatewayError::RateLimited`] - the one signal the backoff
/// invoker retries. Everything else is non-retryable.
pub struct GeminiGateway {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiGateway {
    pub fn new(api_key: impl Into<String>) -> Self {
        info!("GeminiGateway initialized");
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the gateway at a different API root (proxies, test servers)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn is_quota_body(body: &str) -> bool {
        body.contains("RESOURCE_EXHAUSTED") || body.contains("quota")
    }
}

#[async_trait]
impl ReasoningGateway for GeminiGateway {
    async fn generate(&self, request: &ReasoningRequest) -> Result<ReasoningReply, GatewayError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url,
            request.model.as_str()
        );
        let body = GenerateContentRequest::from_reasoning(request);

        debug!("POST {} (grounding: {})", url, request.web_grounding);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(GatewayError::RateLimited(format!("429: {}", text.trim())));
        }
        if !status.is_success() {
            if Self::is_quota_body(&text) {
                return Err(GatewayError::RateLimited(format!(
                    "{}: {}",
                    status.as_u16(),
                    text.trim()
                )));
            }
            return Err(GatewayError::RequestFailed(format!(
                "HTTP {}: {}",
                status.as_u16(),
                text.trim()
            )));
        }

        let decoded: GenerateContentResponse = serde_json::from_str(&text)
            .map_err(|e| GatewayError::RequestFailed(format!("undecodable response: {e}")))?;

        let reply_text = decoded.text();
        if reply_text.is_empty() {
            return Err(GatewayError::EmptyReply);
        }

        Ok(ReasoningReply {
            text: reply_text,
            citations: decoded.citations(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quota_body_detection() {
        assert!(GeminiGateway::is_quota_body(
            r#"{"error": {"status": "RESOURCE_EXHAUSTED"}}"#
        ));
        assert!(GeminiGateway::is_quota_body("quota exceeded for model"));
        assert!(!GeminiGateway::is_quota_body(
            r#"{"error": {"status": "INVALID_ARGUMENT"}}"#
        ));
    }

    #[test]
    fn test_base_url_override() {
        let gateway = GeminiGateway::new("key").with_base_url("http://localhost:9999/v1beta");
        assert_eq!(gateway.base_url, "http://localhost:9999/v1beta");
    }
}
