//! Wire types for the Gemini `generateContent` endpoint.
//!
//! Only the fields this adapter reads or writes are modeled; everything
//! else in the service's responses is ignored by serde.

use council_application::ReasoningRequest;
use council_domain::Citation;
use serde::{Deserialize, Serialize};

pub const JSON_MIME: &str = "application/json";

/// Fallback title for grounding chunks the service returns untitled
const UNTITLED_EVIDENCE: &str = "External Evidence";

#[derive(Debug, Serialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
}

/// Tool declaration enabling live web grounding
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub google_search: serde_json::Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Tool>>,
}

impl GenerateContentRequest {
    /// Build the wire request for one gateway call.
    ///
    /// Structured calls pin the response MIME type to JSON; grounded calls
    /// attach the web-search tool.
    pub fn from_reasoning(request: &ReasoningRequest) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: request.prompt.clone(),
                }],
            }],
            generation_config: request.structured_json.then(|| GenerationConfig {
                response_mime_type: JSON_MIME.to_string(),
            }),
            tools: request.web_grounding.then(|| {
                vec![Tool {
                    google_search: serde_json::json!({}),
                }]
            }),
        }
    }
}

// ==================== Response types ====================

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct ResponseContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebSource {
    pub title: Option<String>,
    pub uri: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingChunk {
    pub web: Option<WebSource>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    #[serde(default)]
    pub grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<ResponseContent>,
    pub grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate's parts
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }

    /// Web citations attached to the first candidate's grounding metadata
    pub fn citations(&self) -> Vec<Citation> {
        self.candidates
            .first()
            .and_then(|c| c.grounding_metadata.as_ref())
            .map(|metadata| {
                metadata
                    .grounding_chunks
                    .iter()
                    .filter_map(|chunk| chunk.web.as_ref())
                    .map(|web| {
                        Citation::new(
                            web.title.clone().unwrap_or_else(|| UNTITLED_EVIDENCE.to_string()),
                            web.uri.clone(),
                        )
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}
