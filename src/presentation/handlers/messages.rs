use axum::Json;
use axum::extract::{Path, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::ports::FileLoader;
use crate::domain::{ChatId, Message, MessageId};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::error::ApiError;
use crate::presentation::identity::CurrentUser;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct SendMessageRequest {
    pub message: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub chat_id: Option<String>,
}

#[derive(Serialize)]
pub struct MessageView {
    pub id: MessageId,
    pub chat_id: ChatId,
    pub message: String,
    pub response: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl From<Message> for MessageView {
    fn from(m: Message) -> Self {
        Self {
            id: m.id,
            chat_id: m.chat_id,
            message: m.question,
            response: m.answer,
            category: m.category,
            created_at: m.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct HistoryResponse {
    pub messages: Vec<MessageView>,
}

#[tracing::instrument(skip(state, request), fields(user_id = %user.0))]
pub async fn send_message_handler<F>(
    State(state): State<AppState<F>>,
    user: CurrentUser,
    Json(request): Json<SendMessageRequest>,
) -> Result<Json<MessageView>, ApiError>
where
    F: FileLoader + 'static,
{
    tracing::debug!(
        question = %sanitize_prompt(&request.message),
        category = ?request.category,
        "Chat message received"
    );

    // An empty id opens a new chat; an id that is not a UUID cannot name one of ours.
    let chat_id = match request.chat_id.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(
            Uuid::parse_str(raw)
                .map(ChatId::from_uuid)
                .map_err(|_| ApiError::NotFound("Chat not found".into()))?,
        ),
    };

    let message = state
        .chat_service
        .send_message(user.0, request.message, request.category, chat_id)
        .await?;

    Ok(Json(message.into()))
}

#[tracing::instrument(skip(state), fields(user_id = %user.0))]
pub async fn chat_history_handler<F>(
    State(state): State<AppState<F>>,
    user: CurrentUser,
    Path(chat_id): Path<Uuid>,
) -> Result<Json<HistoryResponse>, ApiError>
where
    F: FileLoader + 'static,
{
    let messages = state
        .chat_service
        .history(user.0, ChatId::from_uuid(chat_id))
        .await?;
    Ok(Json(HistoryResponse {
        messages: messages.into_iter().map(MessageView::from).collect(),
    }))
}
