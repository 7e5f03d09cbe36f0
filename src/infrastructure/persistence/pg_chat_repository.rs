use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::application::ports::{ChatRepository, RepositoryError};
use crate::domain::{Chat, ChatId, Message, MessageId, UserId};

use super::pg_pool::query_failed;

pub struct PgChatRepository {
    pool: PgPool,
}

impl PgChatRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ChatRow {
    id: Uuid,
    user_id: Uuid,
    title: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ChatRow> for Chat {
    fn from(r: ChatRow) -> Self {
        Self {
            id: ChatId::from_uuid(r.id),
            user_id: UserId::from_uuid(r.user_id),
            title: r.title,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct MessageRow {
    id: Uuid,
    chat_id: Uuid,
    user_id: Uuid,
    question: String,
    answer: String,
    category: String,
    created_at: DateTime<Utc>,
}

impl From<MessageRow> for Message {
    fn from(r: MessageRow) -> Self {
        Self {
            id: MessageId::from_uuid(r.id),
            chat_id: ChatId::from_uuid(r.chat_id),
            user_id: UserId::from_uuid(r.user_id),
            question: r.question,
            answer: r.answer,
            category: r.category,
            created_at: r.created_at,
        }
    }
}

#[async_trait]
impl ChatRepository for PgChatRepository {
    #[instrument(skip(self, chat), fields(chat_id = %chat.id, user_id = %chat.user_id))]
    async fn create_chat(&self, chat: &Chat) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO chats (id, user_id, title, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(chat.id.as_uuid())
        .bind(chat.user_id.as_uuid())
        .bind(&chat.title)
        .bind(chat.created_at)
        .bind(chat.updated_at)
        .execute(&self.pool)
        .await
        .map_err(query_failed)?;

        Ok(())
    }

    #[instrument(skip(self), fields(user_id = %user_id))]
    async fn list_chats(&self, user_id: UserId) -> Result<Vec<Chat>, RepositoryError> {
        let rows = sqlx::query_as::<_, ChatRow>(
            r#"
            SELECT id, user_id, title, created_at, updated_at
            FROM chats
            WHERE user_id = $1
            ORDER BY updated_at DESC
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(query_failed)?;

        Ok(rows.into_iter().map(Chat::from).collect())
    }

    #[instrument(skip(self), fields(user_id = %user_id, chat_id = %chat_id))]
    async fn get_chat(
        &self,
        user_id: UserId,
        chat_id: ChatId,
    ) -> Result<Option<Chat>, RepositoryError> {
        let row = sqlx::query_as::<_, ChatRow>(
            r#"
            SELECT id, user_id, title, created_at, updated_at
            FROM chats
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(chat_id.as_uuid())
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(query_failed)?;

        Ok(row.map(Chat::from))
    }

    #[instrument(skip(self), fields(chat_id = %chat_id))]
    async fn touch_chat(&self, chat_id: ChatId, at: DateTime<Utc>) -> Result<(), RepositoryError> {
        sqlx::query("UPDATE chats SET updated_at = $1 WHERE id = $2")
            .bind(at)
            .bind(chat_id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(query_failed)?;

        Ok(())
    }

    #[instrument(skip(self), fields(user_id = %user_id, chat_id = %chat_id))]
    async fn delete_chat(&self, user_id: UserId, chat_id: ChatId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM chats WHERE id = $1 AND user_id = $2")
            .bind(chat_id.as_uuid())
            .bind(user_id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(query_failed)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self, message), fields(message_id = %message.id, chat_id = %message.chat_id))]
    async fn append_message(&self, message: &Message) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO messages (id, chat_id, user_id, question, answer, category, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(message.id.as_uuid())
        .bind(message.chat_id.as_uuid())
        .bind(message.user_id.as_uuid())
        .bind(&message.question)
        .bind(&message.answer)
        .bind(&message.category)
        .bind(message.created_at)
        .execute(&self.pool)
        .await
        .map_err(query_failed)?;

        Ok(())
    }

    #[instrument(skip(self), fields(chat_id = %chat_id))]
    async fn get_messages(&self, chat_id: ChatId) -> Result<Vec<Message>, RepositoryError> {
        let rows = sqlx::query_as::<_, MessageRow>(
            r#"
            SELECT id, chat_id, user_id, question, answer, category, created_at
            FROM messages
            WHERE chat_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(chat_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(query_failed)?;

        Ok(rows.into_iter().map(Message::from).collect())
    }
}
