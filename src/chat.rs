//! Chat request handling: resolve the model, assemble the content list and
//! dispatch it to the generation backend.

use std::sync::Arc;

use tracing::Instrument;

use crate::Result;
use crate::client::GenerationBackend;
use crate::models::ModelRegistry;
use crate::observability::SpanContext;
use crate::pipeline::Submission;
use crate::types::{ChatReply, UploadedFile};

/// One inbound chat submission.
#[derive(Debug, Clone, Default)]
pub struct ChatRequest {
    pub message: String,
    /// Empty or absent selects the default model.
    pub model_id: Option<String>,
    pub files: Vec<UploadedFile>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }

    pub fn with_file(mut self, file: UploadedFile) -> Self {
        self.files.push(file);
        self
    }

    pub fn with_files(mut self, files: impl IntoIterator<Item = UploadedFile>) -> Self {
        self.files.extend(files);
        self
    }
}

/// Stateless per-request handler; cheap to clone and share across tasks.
#[derive(Debug, Clone)]
pub struct ChatService {
    registry: &'static ModelRegistry,
    backend: Arc<dyn GenerationBackend>,
    spans: Arc<SpanContext>,
}

impl ChatService {
    pub fn new(registry: &'static ModelRegistry, backend: Arc<dyn GenerationBackend>) -> Self {
        Self {
            registry,
            backend,
            spans: Arc::new(SpanContext::new()),
        }
    }

    pub fn registry(&self) -> &'static ModelRegistry {
        self.registry
    }

    pub fn backend(&self) -> &dyn GenerationBackend {
        self.backend.as_ref()
    }

    pub async fn handle(&self, request: ChatRequest) -> Result<ChatReply> {
        let model = self.registry.resolve(request.model_id.as_deref());
        let span = self.spans.chat_request_span(&model.id, request.files.len());

        async move {
            let assembled = Submission::new(request.message, request.files).run().await?;
            let file_count = assembled.file_count();

            let dispatch = self.spans.dispatch_span(&model.id, self.backend.name());
            dispatch.record_parts(assembled.parts().len());

            let text = self
                .backend
                .generate(model, assembled.into_parts())
                .instrument(dispatch.span().clone())
                .await
                .inspect_err(|e| {
                    tracing::error!(model = %model.id, error = %e, "generation failed");
                })?;

            dispatch.record_response(text.chars().count());
            let latency_ms = dispatch.finish();
            tracing::info!(model = %model.id, file_count, latency_ms, "chat request completed");

            Ok(ChatReply::new(text, &model.name, file_count))
        }
        .instrument(span)
        .await
    }
}
