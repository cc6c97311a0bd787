//! Uploaded file handles.

use std::fmt;
use std::path::{Path, PathBuf};

use bytes::Bytes;

use crate::{Error, Result};

/// Where an upload's bytes live.
#[derive(Clone)]
pub enum FileSource {
    /// Already buffered, e.g. a multipart field.
    Bytes(Bytes),
    /// Read lazily from disk when converted.
    Path(PathBuf),
}

impl fmt::Debug for FileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Self::Path(path) => f.debug_tuple("Path").field(path).finish(),
        }
    }
}

/// A file submitted alongside a chat message.
///
/// `mime_type` is whatever the client reported and may be empty or wrong.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
    source: FileSource,
}

impl UploadedFile {
    /// Size is taken from buffered bytes and left at zero for paths.
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, source: FileSource) -> Self {
        let size = match &source {
            FileSource::Bytes(bytes) => bytes.len() as u64,
            FileSource::Path(_) => 0,
        };
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size,
            source,
        }
    }

    pub fn from_bytes(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        Self::new(name, mime_type, FileSource::Bytes(data.into()))
    }

    /// Builds an upload backed by a local file, guessing its MIME type from
    /// the extension. The content itself is read on conversion.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|e| Error::file_read(&name, e))?;

        let mime_type = mime_guess::from_path(path)
            .first()
            .map(|m| m.to_string())
            .unwrap_or_default();

        Ok(Self {
            name,
            mime_type,
            size: metadata.len(),
            source: FileSource::Path(path.to_path_buf()),
        })
    }

    pub fn source(&self) -> &FileSource {
        &self.source
    }

    /// Case-insensitive suffix check on the file name, e.g. `".csv"`.
    pub fn has_extension(&self, ext: &str) -> bool {
        let name = self.name.as_bytes();
        let ext = ext.as_bytes();
        name.len() >= ext.len() && name[name.len() - ext.len()..].eq_ignore_ascii_case(ext)
    }

    /// Reads the full content.
    pub async fn read(&self) -> std::io::Result<Bytes> {
        match &self.source {
            FileSource::Bytes(bytes) => Ok(bytes.clone()),
            FileSource::Path(path) => tokio::fs::read(path).await.map(Bytes::from),
        }
    }
}
