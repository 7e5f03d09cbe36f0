use std::io;

use axum::Json;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::{DateTime, Utc};
use futures::StreamExt;
use serde::Serialize;
use uuid::Uuid;

use crate::application::ports::FileLoader;
use crate::domain::{FileId, UploadedFile};
use crate::presentation::error::ApiError;
use crate::presentation::identity::CurrentUser;
use crate::presentation::state::AppState;

const FILE_FIELD: &str = "file";

#[derive(Serialize)]
pub struct FileView {
    pub id: FileId,
    pub filename: String,
    pub file_type: String,
    pub file_size: u64,
    pub uploaded_at: DateTime<Utc>,
}

impl From<UploadedFile> for FileView {
    fn from(f: UploadedFile) -> Self {
        Self {
            id: f.id,
            filename: f.filename,
            file_type: f.file_type,
            file_size: f.size_bytes,
            uploaded_at: f.uploaded_at,
        }
    }
}

#[derive(Serialize)]
pub struct FileListResponse {
    pub files: Vec<FileView>,
}

#[derive(Serialize)]
pub struct DeletedResponse {
    pub message: &'static str,
}

#[tracing::instrument(skip(state, multipart), fields(user_id = %user.0))]
pub async fn upload_file_handler<F>(
    State(state): State<AppState<F>>,
    user: CurrentUser,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError>
where
    F: FileLoader + 'static,
{
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return Err(ApiError::BadRequest("File is required".into())),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read multipart");
                return Err(ApiError::BadRequest(format!(
                    "Failed to read multipart: {e}"
                )));
            }
        };

        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        tracing::debug!(filename = %filename, "Receiving upload");

        let stream = field.map(|chunk| chunk.map_err(io::Error::other)).boxed();
        let file = state
            .document_service
            .upload(user.0, &filename, stream)
            .await?;

        return Ok((StatusCode::CREATED, Json(FileView::from(file))));
    }
}

#[tracing::instrument(skip(state), fields(user_id = %user.0))]
pub async fn list_files_handler<F>(
    State(state): State<AppState<F>>,
    user: CurrentUser,
) -> Result<Json<FileListResponse>, ApiError>
where
    F: FileLoader + 'static,
{
    let files = state.document_service.list(user.0).await?;
    Ok(Json(FileListResponse {
        files: files.into_iter().map(FileView::from).collect(),
    }))
}

#[tracing::instrument(skip(state), fields(user_id = %user.0))]
pub async fn delete_file_handler<F>(
    State(state): State<AppState<F>>,
    user: CurrentUser,
    Path(file_id): Path<Uuid>,
) -> Result<Json<DeletedResponse>, ApiError>
where
    F: FileLoader + 'static,
{
    state
        .document_service
        .delete(user.0, FileId::from_uuid(file_id))
        .await?;
    Ok(Json(DeletedResponse {
        message: "File deleted successfully",
    }))
}
