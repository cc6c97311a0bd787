use serde::Serialize;

use super::display::FileKind;

/// An accepted MIME type and how the UI presents it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileType {
    pub mime_type: &'static str,
    pub label: &'static str,
    pub kind: FileKind,
}

impl FileType {
    const fn new(mime_type: &'static str, label: &'static str, kind: FileKind) -> Self {
        Self {
            mime_type,
            label,
            kind,
        }
    }
}

pub const SUPPORTED_FILE_TYPES: &[FileType] = &[
    FileType::new("image/jpeg", "Image", FileKind::Image),
    FileType::new("image/png", "Image", FileKind::Image),
    FileType::new("image/gif", "Image", FileKind::Image),
    FileType::new("image/webp", "Image", FileKind::Image),
    FileType::new("text/plain", "Text file", FileKind::Document),
    FileType::new("application/pdf", "PDF", FileKind::Document),
    FileType::new("text/csv", "CSV", FileKind::Table),
    // Legacy Excel MIME that Windows browsers report for .csv files.
    FileType::new("application/vnd.ms-excel", "CSV", FileKind::Table),
];

/// Accepted regardless of the reported MIME type.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[".csv", ".txt"];

/// MIME types whose content is forwarded as decoded text.
pub const TEXT_MIME_TYPES: &[&str] = &["text/plain", "text/csv", "application/vnd.ms-excel"];

/// Exact, case-sensitive match on the reported MIME type.
pub fn lookup(mime_type: &str) -> Option<&'static FileType> {
    SUPPORTED_FILE_TYPES.iter().find(|entry| entry.mime_type == mime_type)
}
