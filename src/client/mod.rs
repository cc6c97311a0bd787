//! Generation backends.
//!
//! [`GenerationBackend`] is the only seam between the request pipeline and
//! the upstream model API; [`GeminiClient`] is the production implementation.

mod error;
mod gemini;
pub mod wire;

pub use error::UpstreamError;
pub use gemini::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, GeminiClient, GeminiClientBuilder};
pub use wire::GenerationConfig;

use std::fmt::Debug;

use async_trait::async_trait;

use crate::models::ModelConfig;
use crate::types::ContentPart;

#[async_trait]
pub trait GenerationBackend: Send + Sync + Debug {
    fn name(&self) -> &'static str;

    /// Sends one batched request and returns the generated text.
    async fn generate(
        &self,
        model: &ModelConfig,
        parts: Vec<ContentPart>,
    ) -> Result<String, UpstreamError>;
}
