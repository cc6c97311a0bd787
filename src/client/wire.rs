//! `generateContent` request and response bodies.

use serde::{Deserialize, Serialize};

use crate::models::ModelConfig;
use crate::types::ContentPart;

pub const DEFAULT_TEMPERATURE: f32 = 0.9;
pub const DEFAULT_TOP_K: u32 = 1;
pub const DEFAULT_TOP_P: f32 = 1.0;
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 2048;

/// Sampling parameters sent with every request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            top_k: DEFAULT_TOP_K,
            top_p: DEFAULT_TOP_P,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }
}

impl GenerationConfig {
    /// Applies the model's own output cap, if it has one.
    pub fn for_model(&self, model: &ModelConfig) -> Self {
        Self {
            max_output_tokens: model.max_tokens.unwrap_or(self.max_output_tokens),
            ..*self
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// A single user turn carrying `parts` in order.
    pub fn user(parts: Vec<ContentPart>, generation_config: GenerationConfig) -> Self {
        Self {
            contents: vec![Content {
                role: "user".into(),
                parts,
            }],
            generation_config,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<ContentPart>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
    pub usage_metadata: Option<UsageMetadata>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn block_reason(&self) -> Option<&str> {
        self.prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
    }

    pub fn finish_reason(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.finish_reason.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
    pub role: Option<String>,
}

/// Response part; non-text parts deserialize with `text: None`.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
    #[serde(default)]
    pub total_token_count: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub code: u16,
    pub message: String,
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_request_shape() {
        let request = GenerateContentRequest::user(
            vec![
                ContentPart::text("hi"),
                ContentPart::inline("image/png", "iVBORw=="),
            ],
            GenerationConfig::default(),
        );
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            json!({
                "contents": [{
                    "role": "user",
                    "parts": [
                        { "text": "hi" },
                        { "inlineData": { "mimeType": "image/png", "data": "iVBORw==" } }
                    ]
                }],
                "generationConfig": {
                    "temperature": 0.9f32,
                    "topK": 1,
                    "topP": 1.0,
                    "maxOutputTokens": 2048
                }
            })
        );
    }

    #[test]
    fn test_generation_config_for_model() {
        let base = GenerationConfig::default();
        let plain = ModelConfig::new("m", "M", "");
        assert_eq!(base.for_model(&plain).max_output_tokens, 2048);

        let capped = plain.with_max_tokens(8192);
        let config = base.for_model(&capped);
        assert_eq!(config.max_output_tokens, 8192);
        assert_eq!(config.top_k, 1);
    }

    #[test]
    fn test_response_text() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{ "text": "Hello" }, { "text": ", world" }]
                },
                "finishReason": "STOP"
            }],
            "usageMetadata": { "promptTokenCount": 3, "totalTokenCount": 7 }
        }))
        .unwrap();

        assert_eq!(response.text(), "Hello, world");
        assert_eq!(response.finish_reason(), Some("STOP"));
        assert_eq!(response.usage_metadata.unwrap().total_token_count, 7);
        assert!(response.block_reason().is_none());
    }

    #[test]
    fn test_response_blocked() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        }))
        .unwrap();
        assert_eq!(response.text(), "");
        assert_eq!(response.block_reason(), Some("SAFETY"));
    }
}
