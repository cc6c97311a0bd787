use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

/// Successful chat result, serialized with the field names the web UI reads.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    #[serde(rename = "response")]
    pub text: String,
    #[serde(serialize_with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "model")]
    pub model_name: String,
    pub file_count: usize,
}

impl ChatReply {
    pub fn new(text: impl Into<String>, model_name: impl Into<String>, file_count: usize) -> Self {
        Self::at(text, model_name, file_count, Utc::now())
    }

    pub fn at(
        text: impl Into<String>,
        model_name: impl Into<String>,
        file_count: usize,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            text: text.into(),
            timestamp,
            model_name: model_name.into(),
            file_count,
        }
    }

    /// ISO-8601 UTC timestamp with millisecond precision.
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

fn iso_millis<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}
