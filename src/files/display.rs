//! Presentation helpers for the upload widget.

use serde::Serialize;

use super::allow_list::lookup;
use crate::types::UploadedFile;

/// Icon family for an upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Image,
    Document,
    Table,
}

/// Picks the icon family by MIME type, then by a `.csv` name, else document.
pub fn kind_of(file: &UploadedFile) -> FileKind {
    if let Some(entry) = lookup(&file.mime_type) {
        return entry.kind;
    }
    if file.has_extension(".csv") {
        FileKind::Table
    } else {
        FileKind::Document
    }
}

const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Human-readable size in base 1024, up to two decimals, e.g. `1.5 KB`.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut value = bytes as f64;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[unit])
}
