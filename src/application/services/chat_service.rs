use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::application::ports::{
    ChatRepository, FileLoader, FileRepository, RepositoryError, UserRepository,
};
use crate::domain::{AdviceRequest, Chat, ChatId, Message, UserId};

use super::advisor_service::AdvisorService;

/// Chat bookkeeping around advice turns.
pub struct ChatService<F>
where
    F: FileLoader,
{
    users: Arc<dyn UserRepository>,
    files: Arc<dyn FileRepository>,
    chats: Arc<dyn ChatRepository>,
    advisor: Arc<AdvisorService<F>>,
}

impl<F> ChatService<F>
where
    F: FileLoader,
{
    pub fn new(
        users: Arc<dyn UserRepository>,
        files: Arc<dyn FileRepository>,
        chats: Arc<dyn ChatRepository>,
        advisor: Arc<AdvisorService<F>>,
    ) -> Self {
        Self {
            users,
            files,
            chats,
            advisor,
        }
    }

    /// Answers `question` and stores the turn. Without `chat_id` a new chat
    /// titled after the question is opened; an existing chat must belong to
    /// the user and is marked as updated.
    pub async fn send_message(
        &self,
        user_id: UserId,
        question: String,
        category: Option<String>,
        chat_id: Option<ChatId>,
    ) -> Result<Message, ChatServiceError> {
        if question.trim().is_empty() {
            return Err(ChatServiceError::EmptyMessage);
        }

        let profile = self
            .users
            .get_user(user_id)
            .await?
            .ok_or(ChatServiceError::UserNotFound)?;

        let chat_id = match chat_id {
            Some(id) => {
                self.chats
                    .get_chat(user_id, id)
                    .await?
                    .ok_or(ChatServiceError::ChatNotFound)?;
                self.chats.touch_chat(id, Utc::now()).await?;
                id
            }
            None => {
                let chat = Chat::from_first_question(user_id, &question);
                self.chats.create_chat(&chat).await?;
                info!(chat_id = %chat.id, "Opened chat from first question");
                chat.id
            }
        };

        let files = self.files.list_files(user_id).await?;
        let category = category.unwrap_or_default();
        let request = AdviceRequest::new(question.clone(), category.clone()).with_profile(&profile);
        let answer = self.advisor.advise(request, &files).await;

        let message = Message::new(chat_id, user_id, question, answer.text, category);
        self.chats.append_message(&message).await?;

        Ok(message)
    }

    pub async fn create_chat(
        &self,
        user_id: UserId,
        title: Option<String>,
    ) -> Result<Chat, ChatServiceError> {
        let chat = Chat::new(user_id, title);
        self.chats.create_chat(&chat).await?;
        Ok(chat)
    }

    pub async fn list_chats(&self, user_id: UserId) -> Result<Vec<Chat>, ChatServiceError> {
        Ok(self.chats.list_chats(user_id).await?)
    }

    pub async fn delete_chat(&self, user_id: UserId, chat_id: ChatId) -> Result<(), ChatServiceError> {
        if self.chats.delete_chat(user_id, chat_id).await? {
            Ok(())
        } else {
            Err(ChatServiceError::ChatNotFound)
        }
    }

    /// Messages of one of the user's chats, oldest first.
    pub async fn history(
        &self,
        user_id: UserId,
        chat_id: ChatId,
    ) -> Result<Vec<Message>, ChatServiceError> {
        self.chats
            .get_chat(user_id, chat_id)
            .await?
            .ok_or(ChatServiceError::ChatNotFound)?;
        Ok(self.chats.get_messages(chat_id).await?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ChatServiceError {
    #[error("message must not be empty")]
    EmptyMessage,
    #[error("user not found")]
    UserNotFound,
    #[error("chat not found")]
    ChatNotFound,
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
}
