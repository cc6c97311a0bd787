//! `POST /api/chat` body extraction.

use axum::Json;
use axum::extract::multipart::Field;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::Error;
use crate::chat::ChatRequest;
use crate::types::UploadedFile;

const MESSAGE_FIELD: &str = "message";
const MODEL_FIELD: &str = "modelId";
const FILES_FIELD: &str = "files";

/// A chat submission taken from either a multipart form or a JSON body.
#[derive(Debug)]
pub struct ChatSubmission(pub ChatRequest);

/// Why a chat body could not be extracted.
#[derive(Debug)]
pub enum SubmissionRejection {
    /// The body or one of its parts was unusable.
    Invalid(Error),
    /// The body ran past the configured upload limit while being read.
    TooLarge(String),
}

impl From<Error> for SubmissionRejection {
    fn from(e: Error) -> Self {
        SubmissionRejection::Invalid(e)
    }
}

impl IntoResponse for SubmissionRejection {
    fn into_response(self) -> Response {
        match self {
            SubmissionRejection::Invalid(e) => e.into_response(),
            SubmissionRejection::TooLarge(message) => {
                debug!(error = %message, "request body over limit");
                (
                    StatusCode::PAYLOAD_TOO_LARGE,
                    Json(json!({ "error": message })),
                )
                    .into_response()
            }
        }
    }
}

/// Keeps length-limit failures apart from other read errors, which become
/// `otherwise(text)`.
fn reject(
    status: StatusCode,
    text: String,
    otherwise: impl FnOnce(String) -> Error,
) -> SubmissionRejection {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        SubmissionRejection::TooLarge(text)
    } else {
        SubmissionRejection::Invalid(otherwise(text))
    }
}

/// Text-only submission body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonSubmission {
    #[serde(default)]
    message: String,
    #[serde(default)]
    model_id: Option<String>,
}

impl From<JsonSubmission> for ChatRequest {
    fn from(body: JsonSubmission) -> Self {
        ChatRequest {
            message: body.message,
            model_id: body.model_id,
            files: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Multipart,
    Json,
}

/// Media type of the body, ignoring parameters and ASCII case.
fn body_kind(content_type: &str) -> Option<BodyKind> {
    let media_type = content_type.split(';').next().unwrap_or_default().trim();
    if media_type.eq_ignore_ascii_case("multipart/form-data") {
        Some(BodyKind::Multipart)
    } else if media_type.eq_ignore_ascii_case("application/json") {
        Some(BodyKind::Json)
    } else {
        None
    }
}

impl<S> FromRequest<S> for ChatSubmission
where
    S: Send + Sync,
{
    type Rejection = SubmissionRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let kind = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(body_kind);

        match kind {
            Some(BodyKind::Multipart) => {
                let multipart = Multipart::from_request(req, state)
                    .await
                    .map_err(|e| reject(e.status(), e.body_text(), Error::invalid_input))?;
                read_multipart(multipart).await.map(ChatSubmission)
            }
            Some(BodyKind::Json) => {
                let Json(body) = Json::<JsonSubmission>::from_request(req, state)
                    .await
                    .map_err(|e| reject(e.status(), e.body_text(), Error::invalid_input))?;
                Ok(ChatSubmission(body.into()))
            }
            None => Err(Error::invalid_input(
                "expected a multipart/form-data or application/json body",
            )
            .into()),
        }
    }
}

async fn read_multipart(mut multipart: Multipart) -> Result<ChatRequest, SubmissionRejection> {
    let mut request = ChatRequest::default();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        reject(e.status(), e.body_text(), |text| {
            Error::invalid_input(format!("malformed multipart body: {text}"))
        })
    })? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            MESSAGE_FIELD => request.message = read_text(field).await?,
            MODEL_FIELD => request.model_id = Some(read_text(field).await?),
            FILES_FIELD => {
                if let Some(file) = read_file(field).await? {
                    request.files.push(file);
                }
            }
            other => debug!(field = other, "ignoring unknown multipart field"),
        }
    }

    Ok(request)
}

async fn read_text(field: Field<'_>) -> Result<String, SubmissionRejection> {
    let name = field.name().unwrap_or_default().to_string();
    field.text().await.map_err(|e| {
        reject(e.status(), e.body_text(), |text| {
            Error::invalid_input(format!("unreadable '{name}' field: {text}"))
        })
    })
}

/// Buffers one file part. An empty part without a file name is what browsers
/// send for an untouched file input, and is skipped.
async fn read_file(field: Field<'_>) -> Result<Option<UploadedFile>, SubmissionRejection> {
    let file_name = field.file_name().unwrap_or_default().to_string();
    let mime_type = field.content_type().unwrap_or_default().to_string();

    let data = field.bytes().await.map_err(|e| {
        reject(e.status(), e.body_text(), |text| {
            Error::file_read(&file_name, std::io::Error::other(text))
        })
    })?;

    if file_name.is_empty() && data.is_empty() {
        return Ok(None);
    }

    debug!(file = %file_name, mime_type = %mime_type, size = data.len(), "received upload");
    Ok(Some(UploadedFile::from_bytes(file_name, mime_type, data)))
}
