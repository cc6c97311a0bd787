//! Gemini REST adapter tests against a local mock server.
//!
//! Run: cargo test --test gemini_client_tests

use gemini_chat::{ContentPart, GeminiClient, GenerationBackend, ModelConfig, UpstreamError};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FLASH_PATH: &str = "/v1beta/models/gemini-2.0-flash:generateContent";

fn flash() -> ModelConfig {
    ModelConfig::new("gemini-2.0-flash", "Gemini 2.0 Flash", "fast")
}

fn client_for(server: &MockServer) -> GeminiClient {
    GeminiClient::builder()
        .api_key("test-key")
        .base_url(server.uri())
        .build()
        .unwrap()
}

fn text_response(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }],
        "usageMetadata": { "promptTokenCount": 4, "candidatesTokenCount": 2, "totalTokenCount": 6 }
    })
}

// =============================================================================
// Request shape
// =============================================================================

#[tokio::test]
async fn test_request_carries_key_parts_and_config() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(FLASH_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [{
                "role": "user",
                "parts": [
                    { "text": "What is this?" },
                    { "inlineData": { "mimeType": "image/png", "data": "iVBORw==" } }
                ]
            }],
            "generationConfig": { "topK": 1, "maxOutputTokens": 2048 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response("A cat.")))
        .expect(1)
        .mount(&server)
        .await;

    let parts = vec![
        ContentPart::text("What is this?"),
        ContentPart::inline("image/png", "iVBORw=="),
    ];
    let text = client_for(&server).generate(&flash(), parts).await.unwrap();
    assert_eq!(text, "A cat.");
}

#[tokio::test]
async fn test_model_max_tokens_overrides_default() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.5-pro:generateContent"))
        .and(body_partial_json(json!({ "generationConfig": { "maxOutputTokens": 8192 } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response("ok")))
        .expect(1)
        .mount(&server)
        .await;

    let model = ModelConfig::new("gemini-2.5-pro", "Gemini 2.5 Pro", "").with_max_tokens(8192);
    let text = client_for(&server)
        .generate(&model, vec![ContentPart::text("hi")])
        .await
        .unwrap();
    assert_eq!(text, "ok");
}

#[tokio::test]
async fn test_text_parts_are_concatenated() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(FLASH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "Hello, " }, { "text": "world" }] }
            }]
        })))
        .mount(&server)
        .await;

    let text = client_for(&server)
        .generate(&flash(), vec![ContentPart::text("hi")])
        .await
        .unwrap();
    assert_eq!(text, "Hello, world");
}

// =============================================================================
// Failures
// =============================================================================

#[tokio::test]
async fn test_missing_key_never_calls_upstream() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response("unused")))
        .expect(0)
        .mount(&server)
        .await;

    let client = GeminiClient::builder().base_url(server.uri()).build().unwrap();
    let err = client
        .generate(&flash(), vec![ContentPart::text("hi")])
        .await
        .unwrap_err();
    assert!(matches!(err, UpstreamError::MissingCredential));
}

#[tokio::test]
async fn test_api_error_body_is_parsed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(FLASH_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "code": 400,
                "message": "API key not valid. Please pass a valid API key.",
                "status": "INVALID_ARGUMENT"
            }
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate(&flash(), vec![ContentPart::text("hi")])
        .await
        .unwrap_err();

    match err {
        UpstreamError::Api {
            status,
            message,
            status_text,
        } => {
            assert_eq!(status, 400);
            assert!(message.contains("API key not valid"));
            assert_eq!(status_text.as_deref(), Some("INVALID_ARGUMENT"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_error_keeps_raw_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(FLASH_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate(&flash(), vec![ContentPart::text("hi")])
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(503));
    assert!(matches!(err, UpstreamError::Api { ref message, .. } if message == "upstream unavailable"));
}

#[tokio::test]
async fn test_empty_candidates_is_empty_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(FLASH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate(&flash(), vec![ContentPart::text("hi")])
        .await
        .unwrap_err();
    assert!(matches!(err, UpstreamError::EmptyResponse { ref model } if model == "gemini-2.0-flash"));
}

#[tokio::test]
async fn test_blocked_prompt() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(FLASH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate(&flash(), vec![ContentPart::text("hi")])
        .await
        .unwrap_err();
    assert!(matches!(err, UpstreamError::Blocked { ref reason } if reason == "SAFETY"));
    assert!(err.user_message().contains("SAFETY"));
}

#[tokio::test]
async fn test_malformed_success_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(FLASH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate(&flash(), vec![ContentPart::text("hi")])
        .await
        .unwrap_err();
    assert!(matches!(err, UpstreamError::Decode(_)));
}
