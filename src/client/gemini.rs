//! Gemini Generative Language API adapter.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use super::GenerationBackend;
use super::error::UpstreamError;
use super::wire::{ErrorResponse, GenerateContentRequest, GenerateContentResponse, GenerationConfig};
use crate::config::{ConfigError, ServerSettings};
use crate::models::ModelConfig;
use crate::types::ContentPart;
use crate::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: Option<SecretString>,
    generation: GenerationConfig,
}

impl fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url.as_str())
            .field("has_api_key", &self.api_key.is_some())
            .field("generation", &self.generation)
            .finish()
    }
}

impl GeminiClient {
    pub fn builder() -> GeminiClientBuilder {
        GeminiClientBuilder::default()
    }

    pub fn from_settings(settings: &ServerSettings) -> Result<Self> {
        let mut builder = Self::builder()
            .base_url(&settings.base_url)
            .timeout(settings.timeout);
        if let Some(key) = &settings.api_key {
            builder = builder.api_key(key.expose_secret());
        }
        builder.build()
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn generation_config(&self) -> &GenerationConfig {
        &self.generation
    }

    fn endpoint(&self, model_id: &str) -> std::result::Result<Url, UpstreamError> {
        let path = format!("v1beta/models/{model_id}:generateContent");
        Ok(self.base_url.join(&path)?)
    }

    async fn error_from_response(response: reqwest::Response) -> UpstreamError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        match serde_json::from_str::<ErrorResponse>(&body) {
            Ok(parsed) => UpstreamError::Api {
                status,
                message: parsed.error.message,
                status_text: parsed.error.status,
            },
            Err(_) => UpstreamError::Api {
                status,
                message: body,
                status_text: None,
            },
        }
    }
}

#[async_trait]
impl GenerationBackend for GeminiClient {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn generate(
        &self,
        model: &ModelConfig,
        parts: Vec<ContentPart>,
    ) -> std::result::Result<String, UpstreamError> {
        let api_key = self.api_key.as_ref().ok_or(UpstreamError::MissingCredential)?;

        let url = self.endpoint(&model.id)?;
        let body = GenerateContentRequest::user(parts, self.generation.for_model(model));

        tracing::debug!(
            model = %model.id,
            parts = body.contents[0].parts.len(),
            max_output_tokens = body.generation_config.max_output_tokens,
            "sending generateContent request"
        );

        let response = self
            .http
            .post(url)
            .header(API_KEY_HEADER, api_key.expose_secret())
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let bytes = response.bytes().await?;
        let parsed: GenerateContentResponse = serde_json::from_slice(&bytes)?;

        let text = parsed.text();
        if text.is_empty() {
            if let Some(reason) = parsed.block_reason() {
                return Err(UpstreamError::Blocked {
                    reason: reason.to_string(),
                });
            }
            return Err(UpstreamError::EmptyResponse {
                model: model.id.clone(),
            });
        }

        if let Some(usage) = parsed.usage_metadata {
            tracing::debug!(
                model = %model.id,
                prompt_tokens = usage.prompt_token_count,
                output_tokens = usage.candidates_token_count,
                finish_reason = parsed.finish_reason().unwrap_or("unknown"),
                "generateContent completed"
            );
        }

        Ok(text)
    }
}

#[derive(Default)]
pub struct GeminiClientBuilder {
    api_key: Option<SecretString>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    generation: Option<GenerationConfig>,
    http: Option<reqwest::Client>,
}

impl GeminiClientBuilder {
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.api_key = (!key.is_empty()).then(|| SecretString::from(key));
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn generation_config(mut self, config: GenerationConfig) -> Self {
        self.generation = Some(config);
        self
    }

    /// Uses a preconfigured HTTP client; `timeout` is then ignored.
    pub fn http(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    pub fn build(self) -> Result<GeminiClient> {
        let raw = self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.into());
        let mut base_url = Url::parse(&raw).map_err(|e| ConfigError::InvalidValue {
            key: "gemini.base.url".into(),
            message: e.to_string(),
        })?;
        // Url::join replaces the last segment unless the path ends in '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http = match self.http {
            Some(http) => http,
            None => reqwest::Client::builder()
                .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
                .build()
                .map_err(|e| Error::Upstream(UpstreamError::Network(e)))?,
        };

        Ok(GeminiClient {
            http,
            base_url,
            api_key: self.api_key,
            generation: self.generation.unwrap_or_default(),
        })
    }
}
