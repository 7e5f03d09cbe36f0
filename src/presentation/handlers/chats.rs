use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::ports::FileLoader;
use crate::domain::{Chat, ChatId};
use crate::presentation::error::ApiError;
use crate::presentation::identity::CurrentUser;
use crate::presentation::state::AppState;

use super::files::DeletedResponse;

#[derive(Deserialize, Default)]
pub struct CreateChatRequest {
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Serialize)]
pub struct ChatView {
    pub id: ChatId,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Chat> for ChatView {
    fn from(c: Chat) -> Self {
        Self {
            id: c.id,
            title: c.title,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

#[derive(Serialize)]
pub struct ChatListResponse {
    pub chats: Vec<ChatView>,
}

/// A missing or unreadable body opens a chat with the default title.
#[tracing::instrument(skip(state, body), fields(user_id = %user.0))]
pub async fn create_chat_handler<F>(
    State(state): State<AppState<F>>,
    user: CurrentUser,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError>
where
    F: FileLoader + 'static,
{
    let request: CreateChatRequest = serde_json::from_slice(&body).unwrap_or_default();
    let chat = state.chat_service.create_chat(user.0, request.title).await?;
    Ok((StatusCode::CREATED, Json(ChatView::from(chat))))
}

#[tracing::instrument(skip(state), fields(user_id = %user.0))]
pub async fn list_chats_handler<F>(
    State(state): State<AppState<F>>,
    user: CurrentUser,
) -> Result<Json<ChatListResponse>, ApiError>
where
    F: FileLoader + 'static,
{
    let chats = state.chat_service.list_chats(user.0).await?;
    Ok(Json(ChatListResponse {
        chats: chats.into_iter().map(ChatView::from).collect(),
    }))
}

#[tracing::instrument(skip(state), fields(user_id = %user.0))]
pub async fn delete_chat_handler<F>(
    State(state): State<AppState<F>>,
    user: CurrentUser,
    Path(chat_id): Path<Uuid>,
) -> Result<Json<DeletedResponse>, ApiError>
where
    F: FileLoader + 'static,
{
    state
        .chat_service
        .delete_chat(user.0, ChatId::from_uuid(chat_id))
        .await?;
    Ok(Json(DeletedResponse {
        message: "Chat deleted successfully",
    }))
}
