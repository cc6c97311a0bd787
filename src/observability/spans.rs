//! Structured span definitions for tracing.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use tracing::{Level, Span, field, span};

/// Hands out request ids and builds per-request spans.
#[derive(Debug, Default)]
pub struct SpanContext {
    request_id: AtomicU64,
}

impl SpanContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_request_id(&self) -> u64 {
        self.request_id.fetch_add(1, Ordering::Relaxed)
    }

    pub fn chat_request_span(&self, model: &str, files: usize) -> Span {
        let request_id = self.next_request_id();
        span!(
            Level::INFO,
            "chat.request",
            request_id = request_id,
            model = model,
            files = files,
        )
    }

    pub fn dispatch_span(&self, model: &str, backend: &str) -> DispatchSpan {
        DispatchSpan::new(model, backend)
    }
}

/// Times one generation call.
pub struct DispatchSpan {
    span: Span,
    start: Instant,
}

impl DispatchSpan {
    pub fn new(model: &str, backend: &str) -> Self {
        let span = span!(
            Level::INFO,
            "chat.dispatch",
            model = model,
            backend = backend,
            parts = field::Empty,
            response_chars = field::Empty,
            latency_ms = field::Empty,
        );
        Self {
            span,
            start: Instant::now(),
        }
    }

    pub fn record_parts(&self, parts: usize) {
        self.span.record("parts", parts);
    }

    pub fn record_response(&self, chars: usize) {
        self.span.record("response_chars", chars);
    }

    pub fn finish(self) -> u64 {
        let latency_ms = self.start.elapsed().as_millis() as u64;
        self.span.record("latency_ms", latency_ms);
        latency_ms
    }

    pub fn span(&self) -> &Span {
        &self.span
    }
}
