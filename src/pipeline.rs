//! Per-request assembly of the content list.
//!
//! Each stage consumes the previous one, so a submission moves strictly
//! forward: [`Submission`] → [`Validated`] → [`Converted`] → [`Assembled`].
//! Any failure ends the request; nothing from a failed batch is kept.

use crate::files;
use crate::types::{ContentPart, UploadedFile};
use crate::{Error, Result};

/// Leading prompt used when files arrive without a message.
pub const DEFAULT_FILE_PROMPT: &str = "please analyze the attached files";

/// A received, not yet validated, chat submission.
#[derive(Debug, Clone)]
pub struct Submission {
    message: String,
    files: Vec<UploadedFile>,
}

impl Submission {
    pub fn new(message: impl Into<String>, files: Vec<UploadedFile>) -> Self {
        Self {
            message: message.into(),
            files,
        }
    }

    /// Rejects empty submissions and any batch containing an unsupported
    /// file. No file content is read here.
    pub fn validate(self) -> Result<Validated> {
        let message = self.message.trim();
        let message = (!message.is_empty()).then(|| message.to_string());

        if message.is_none() && self.files.is_empty() {
            return Err(Error::invalid_input("a message or at least one file is required"));
        }

        self.files
            .iter()
            .try_for_each(files::ensure_supported)
            .inspect_err(|e| {
                tracing::warn!(batch = self.files.len(), error = %e, "rejecting batch");
            })?;

        Ok(Validated {
            message,
            files: self.files,
        })
    }

    /// Runs every stage through to the assembled content list.
    pub async fn run(self) -> Result<Assembled> {
        Ok(self.validate()?.convert().await?.assemble())
    }
}

/// A submission whose files all passed the allow-list.
#[derive(Debug, Clone)]
pub struct Validated {
    message: Option<String>,
    files: Vec<UploadedFile>,
}

impl Validated {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn files(&self) -> &[UploadedFile] {
        &self.files
    }

    /// Converts files one at a time in upload order, stopping at the first
    /// unreadable one.
    pub async fn convert(self) -> Result<Converted> {
        let mut file_parts = Vec::with_capacity(self.files.len());
        for file in &self.files {
            let part = files::convert(file).await.inspect_err(|e| {
                tracing::warn!(file = %file.name, error = %e, "file conversion failed");
            })?;
            file_parts.push(part);
        }

        Ok(Converted {
            message: self.message,
            file_parts,
        })
    }
}

/// Every file converted, one part per file.
#[derive(Debug, Clone)]
pub struct Converted {
    message: Option<String>,
    file_parts: Vec<ContentPart>,
}

impl Converted {
    pub fn file_parts(&self) -> &[ContentPart] {
        &self.file_parts
    }

    /// Puts the message, or the default prompt, ahead of the file parts.
    pub fn assemble(self) -> Assembled {
        let lead = match self.message {
            Some(message) => ContentPart::text(message),
            None => ContentPart::text(DEFAULT_FILE_PROMPT),
        };

        let file_count = self.file_parts.len();
        let mut parts = Vec::with_capacity(file_count + 1);
        parts.push(lead);
        parts.extend(self.file_parts);

        Assembled { parts, file_count }
    }
}

/// The ordered content list ready for dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct Assembled {
    parts: Vec<ContentPart>,
    file_count: usize,
}

impl Assembled {
    pub fn parts(&self) -> &[ContentPart] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<ContentPart> {
        self.parts
    }

    pub fn file_count(&self) -> usize {
        self.file_count
    }
}
