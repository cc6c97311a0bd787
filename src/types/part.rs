//! Content parts sent to the generation API.

use base64::prelude::*;
use serde::{Deserialize, Serialize};

/// One unit of a `generateContent` payload.
///
/// Serializes to the Gemini REST shape: `{"text": ...}` or
/// `{"inlineData": {"mimeType": ..., "data": ...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentPart {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

/// Base64 payload tagged with the MIME type reported for the upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

impl ContentPart {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Wraps already-encoded base64 data.
    pub fn inline(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self::InlineData {
            inline_data: InlineData {
                mime_type: mime_type.into(),
                data: data.into(),
            },
        }
    }

    /// Encodes raw bytes with the standard base64 alphabet.
    pub fn from_bytes(mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self::inline(mime_type, BASE64_STANDARD.encode(bytes))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text { .. })
    }

    pub fn is_inline_data(&self) -> bool {
        matches!(self, Self::InlineData { .. })
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text } => Some(text),
            _ => None,
        }
    }

    pub fn mime_type(&self) -> Option<&str> {
        match self {
            Self::InlineData { inline_data } => Some(&inline_data.mime_type),
            _ => None,
        }
    }

    pub fn inline_data(&self) -> Option<&InlineData> {
        match self {
            Self::InlineData { inline_data } => Some(inline_data),
            _ => None,
        }
    }
}

impl From<&str> for ContentPart {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for ContentPart {
    fn from(text: String) -> Self {
        Self::Text { text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_variants() {
        let text = ContentPart::text("hello");
        assert!(text.is_text());
        assert_eq!(text.as_text(), Some("hello"));
        assert_eq!(text.mime_type(), None);

        let inline = ContentPart::from_bytes("image/png", &[0x89, 0x50, 0x4E, 0x47]);
        assert!(inline.is_inline_data());
        assert_eq!(inline.mime_type(), Some("image/png"));
        assert_eq!(inline.inline_data().unwrap().data, "iVBORw==");
    }

    #[test]
    fn test_part_serialization() {
        let json = serde_json::to_value(ContentPart::text("hi")).unwrap();
        assert_eq!(json, serde_json::json!({ "text": "hi" }));

        let json = serde_json::to_value(ContentPart::inline("application/pdf", "JVBERi0=")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "inlineData": { "mimeType": "application/pdf", "data": "JVBERi0=" }
            })
        );
    }

    #[test]
    fn test_part_deserialization() {
        let part: ContentPart =
            serde_json::from_str(r#"{"inlineData":{"mimeType":"image/gif","data":"R0lG"}}"#)
                .unwrap();
        assert_eq!(part.mime_type(), Some("image/gif"));

        let part: ContentPart = serde_json::from_str(r#"{"text":"ok"}"#).unwrap();
        assert_eq!(part.as_text(), Some("ok"));
    }
}
