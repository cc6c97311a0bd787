//! Upstream generation errors.

use thiserror::Error;

/// Errors from the generation API call.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum UpstreamError {
    /// No API key configured.
    #[error("missing Google API key")]
    MissingCredential,

    /// The call succeeded but carried no text.
    #[error("model {model} returned no text")]
    EmptyResponse { model: String },

    /// The prompt was refused by the upstream safety filters.
    #[error("prompt blocked: {reason}")]
    Blocked { reason: String },

    /// API returned an error response.
    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        message: String,
        /// Canonical status name, e.g. `INVALID_ARGUMENT`.
        status_text: Option<String>,
    },

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body was not the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid endpoint URL: {0}")]
    Endpoint(#[from] url::ParseError),
}

impl UpstreamError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, UpstreamError::Network(e) if e.is_timeout())
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            UpstreamError::Api { status, .. } => Some(*status),
            UpstreamError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Message safe to show to end users.
    pub fn user_message(&self) -> String {
        match self {
            UpstreamError::MissingCredential => "Missing Google API key".into(),
            UpstreamError::EmptyResponse { .. } => "The model returned an empty response".into(),
            UpstreamError::Blocked { reason } => {
                format!("The request was blocked by the model ({reason})")
            }
            UpstreamError::Network(e) if e.is_timeout() => {
                "The model took too long to respond, please try again later".into()
            }
            _ => "Unable to process your request, please try again later".into(),
        }
    }
}
