//! # gemini-chat
//!
//! Chat gateway that turns a user message plus uploaded files into a Gemini
//! `generateContent` call and hands back the generated text.
//!
//! The crate is split around two leaf components:
//!
//! - [`models`]: the fixed model catalog with silent fallback to the default.
//! - [`files`]: allow-list validation and conversion of uploads into
//!   [`ContentPart`]s.
//!
//! [`pipeline`] composes them per request, [`ChatService`] dispatches the
//! assembled parts through a [`GenerationBackend`], and [`server`] exposes the
//! whole thing over HTTP.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use gemini_chat::{ChatRequest, ChatService, GeminiClient, UploadedFile};
//!
//! # async fn example() -> Result<(), gemini_chat::Error> {
//! let backend = GeminiClient::builder().api_key("AIza...").build()?;
//! let service = ChatService::new(gemini_chat::model_registry(), Arc::new(backend));
//!
//! let request = ChatRequest::new("Summarize this table")
//!     .with_file(UploadedFile::from_path("sales.csv").await?);
//! let reply = service.handle(request).await?;
//! println!("{}: {}", reply.model_name, reply.text);
//! # Ok(())
//! # }
//! ```

#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod chat;
pub mod client;
pub mod config;
pub mod files;
pub mod models;
pub mod observability;
pub mod pipeline;
pub mod server;
pub mod types;

pub use chat::{ChatRequest, ChatService};
pub use client::{
    GeminiClient, GeminiClientBuilder, GenerationBackend, GenerationConfig, UpstreamError,
};
pub use config::{
    CompositeConfigProvider, ConfigError, ConfigProvider, EnvConfigProvider, MemoryConfigProvider,
    ServerSettings,
};
pub use files::{FileClass, FileKind, classify, convert, is_supported};
pub use models::{ModelConfig, ModelRegistry, registry as model_registry};
pub use pipeline::{Assembled, Converted, DEFAULT_FILE_PROMPT, Submission, Validated};
pub use types::{ChatReply, ContentPart, FileSource, InlineData, UploadedFile};

/// Error type for chat submissions.
///
/// Every variant maps to one human-readable message and an HTTP status class.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Neither a message nor any file was submitted.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A file in the batch is outside the allow-list.
    #[error("Unsupported file type for '{file}': {}", display_mime(.mime_type))]
    UnsupportedFileType { file: String, mime_type: String },

    /// A file's content could not be read.
    #[error("Failed to read file '{file}': {source}")]
    FileRead {
        file: String,
        #[source]
        source: std::io::Error,
    },

    /// The generation call failed or produced nothing usable.
    #[error("Upstream failure: {0}")]
    Upstream(#[from] UpstreamError),

    /// Invalid or missing configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

fn display_mime(mime_type: &str) -> &str {
    if mime_type.is_empty() {
        "(no type reported)"
    } else {
        mime_type
    }
}

/// HTTP-equivalent status class of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The submission itself is at fault (4xx).
    Client,
    /// The service or the upstream API is at fault (5xx).
    Server,
}

impl Error {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Error::InvalidInput(message.into())
    }

    pub fn unsupported(file: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Error::UnsupportedFileType {
            file: file.into(),
            mime_type: mime_type.into(),
        }
    }

    pub fn file_read(file: impl Into<String>, source: std::io::Error) -> Self {
        Error::FileRead {
            file: file.into(),
            source,
        }
    }

    pub fn class(&self) -> ErrorClass {
        match self {
            Error::InvalidInput(_) | Error::UnsupportedFileType { .. } | Error::FileRead { .. } => {
                ErrorClass::Client
            }
            Error::Upstream(_) | Error::Config(_) => ErrorClass::Server,
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.class() == ErrorClass::Client
    }

    pub fn status_code(&self) -> u16 {
        match self.class() {
            ErrorClass::Client => 400,
            ErrorClass::Server => 500,
        }
    }

    /// The single message shown to the end user.
    ///
    /// Client errors are shown as-is. Upstream errors collapse to a short
    /// description so raw upstream bodies stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            Error::Upstream(e) => e.user_message(),
            Error::Config(_) => "The service is misconfigured".to_string(),
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
