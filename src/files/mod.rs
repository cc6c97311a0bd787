//! Upload validation and conversion into content parts.
//!
//! Client-reported MIME types are unreliable for CSV (browsers send
//! `text/csv`, `application/vnd.ms-excel` or nothing at all), so both
//! [`classify`] and [`is_supported`] accept a file either by MIME type or by
//! its `.csv`/`.txt` extension.

mod allow_list;
mod display;
mod normalize;

pub use allow_list::{FileType, SUPPORTED_EXTENSIONS, SUPPORTED_FILE_TYPES, TEXT_MIME_TYPES, lookup};
pub use display::{FileKind, format_size, kind_of};
pub use normalize::{FileClass, classify, convert, ensure_supported, is_supported};
