use super::allow_list::{SUPPORTED_EXTENSIONS, TEXT_MIME_TYPES, lookup};
use crate::types::{ContentPart, UploadedFile};
use crate::{Error, Result};

/// How an upload's content is forwarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileClass {
    /// Decoded as UTF-8 and sent as a text part.
    Text,
    /// Base64-encoded and sent as inline data.
    Binary,
}

pub fn classify(file: &UploadedFile) -> FileClass {
    let text_by_mime = TEXT_MIME_TYPES.contains(&file.mime_type.as_str());
    let text_by_name = file.has_extension(".txt") || file.has_extension(".csv");

    if text_by_mime || text_by_name {
        FileClass::Text
    } else {
        FileClass::Binary
    }
}

pub fn is_supported(file: &UploadedFile) -> bool {
    lookup(&file.mime_type).is_some()
        || SUPPORTED_EXTENSIONS.iter().any(|ext| file.has_extension(ext))
}

pub fn ensure_supported(file: &UploadedFile) -> Result<()> {
    if is_supported(file) {
        Ok(())
    } else {
        Err(Error::unsupported(&file.name, &file.mime_type))
    }
}

/// Reads `file` and converts it into exactly one content part.
///
/// Text files become [`ContentPart::Text`] via lossy UTF-8 decoding; every
/// other file becomes inline base64 tagged with its reported MIME type.
/// Callers validate with [`is_supported`] first.
pub async fn convert(file: &UploadedFile) -> Result<ContentPart> {
    let bytes = file
        .read()
        .await
        .map_err(|e| Error::file_read(&file.name, e))?;

    let part = match classify(file) {
        FileClass::Text => ContentPart::text(String::from_utf8_lossy(&bytes)),
        FileClass::Binary => ContentPart::from_bytes(file.mime_type.as_str(), &bytes),
    };

    tracing::debug!(
        file = %file.name,
        mime_type = %file.mime_type,
        bytes = bytes.len(),
        text = part.is_text(),
        "converted upload"
    );

    Ok(part)
}
