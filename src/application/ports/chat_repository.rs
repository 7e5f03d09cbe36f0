use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Chat, ChatId, Message, UserId};

use super::RepositoryError;

#[async_trait]
pub trait ChatRepository: Send + Sync {
    async fn create_chat(&self, chat: &Chat) -> Result<(), RepositoryError>;

    /// Chats owned by `user_id`, most recently updated first.
    async fn list_chats(&self, user_id: UserId) -> Result<Vec<Chat>, RepositoryError>;

    async fn get_chat(
        &self,
        user_id: UserId,
        chat_id: ChatId,
    ) -> Result<Option<Chat>, RepositoryError>;

    async fn touch_chat(&self, chat_id: ChatId, at: DateTime<Utc>) -> Result<(), RepositoryError>;

    /// Removes the chat and its messages. Returns whether a chat owned by
    /// `user_id` existed.
    async fn delete_chat(&self, user_id: UserId, chat_id: ChatId) -> Result<bool, RepositoryError>;

    async fn append_message(&self, message: &Message) -> Result<(), RepositoryError>;

    /// Messages of a chat, oldest first.
    async fn get_messages(&self, chat_id: ChatId) -> Result<Vec<Message>, RepositoryError>;
}
