use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::StagingStoreError;
use crate::application::services::{ChatServiceError, DocumentServiceError, ProfileServiceError};

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Failure of a request, rendered as `{"error": "..."}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m),
            ApiError::Unauthorized(m) => (StatusCode::UNAUTHORIZED, m),
            ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m),
            ApiError::Conflict(m) => (StatusCode::CONFLICT, m),
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<ChatServiceError> for ApiError {
    fn from(e: ChatServiceError) -> Self {
        match e {
            ChatServiceError::EmptyMessage => ApiError::BadRequest("Message is required".into()),
            ChatServiceError::UserNotFound => ApiError::NotFound("User not found".into()),
            ChatServiceError::ChatNotFound => ApiError::NotFound("Chat not found".into()),
            ChatServiceError::Repository(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<DocumentServiceError> for ApiError {
    fn from(e: DocumentServiceError) -> Self {
        match e {
            DocumentServiceError::InvalidFilename => {
                ApiError::BadRequest("File name is missing or invalid".into())
            }
            DocumentServiceError::UserNotFound => ApiError::NotFound("User not found".into()),
            DocumentServiceError::FileNotFound => ApiError::NotFound("File not found".into()),
            DocumentServiceError::Storage(StagingStoreError::Io(e)) => {
                ApiError::BadRequest(format!("Failed to read upload: {e}"))
            }
            DocumentServiceError::Storage(e) => ApiError::Internal(e.to_string()),
            DocumentServiceError::Repository(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<ProfileServiceError> for ApiError {
    fn from(e: ProfileServiceError) -> Self {
        match e {
            ProfileServiceError::InvalidProfile(m) => ApiError::BadRequest(m),
            ProfileServiceError::UsernameTaken(name) => {
                ApiError::Conflict(format!("Username {name} is already taken"))
            }
            ProfileServiceError::UserNotFound => ApiError::NotFound("User not found".into()),
            ProfileServiceError::Repository(e) => ApiError::Internal(e.to_string()),
        }
    }
}
