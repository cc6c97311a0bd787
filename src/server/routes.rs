use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;
use serde_json::json;

use super::AppState;
use super::extract::ChatSubmission;
use crate::Result;
use crate::files::{FileType, SUPPORTED_EXTENSIONS, SUPPORTED_FILE_TYPES};
use crate::models::ModelConfig;
use crate::types::ChatReply;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelList {
    pub models: &'static [ModelConfig],
    pub default_id: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileTypeList {
    pub file_types: &'static [FileType],
    pub extensions: &'static [&'static str],
}

pub async fn chat(
    State(state): State<Arc<AppState>>,
    ChatSubmission(request): ChatSubmission,
) -> Result<Json<ChatReply>> {
    state.service.handle(request).await.map(Json)
}

pub async fn chat_get() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "message": "use POST to send a message" })),
    )
}

pub async fn models(State(state): State<Arc<AppState>>) -> Json<ModelList> {
    let registry = state.service.registry();
    Json(ModelList {
        models: registry.list(),
        default_id: &registry.default_model().id,
    })
}

pub async fn file_types() -> Json<FileTypeList> {
    Json(FileTypeList {
        file_types: SUPPORTED_FILE_TYPES,
        extensions: SUPPORTED_EXTENSIONS,
    })
}
