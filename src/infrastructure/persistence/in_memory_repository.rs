use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::application::ports::{
    ChatRepository, FileRepository, RepositoryError, UserRepository,
};
use crate::domain::{
    Chat, ChatId, FileId, Message, UploadedFile, UserId, UserProfile, UserStats,
};

/// Process-local store backing all three repositories. Deletes cascade the
/// same way the relational schema does.
#[derive(Default)]
pub struct InMemoryRepository {
    state: RwLock<State>,
}

#[derive(Default)]
struct State {
    users: HashMap<UserId, UserProfile>,
    files: Vec<UploadedFile>,
    chats: HashMap<ChatId, Chat>,
    messages: Vec<Message>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryRepository {
    async fn create_user(&self, user: &UserProfile) -> Result<(), RepositoryError> {
        let mut state = self.state.write().await;
        if state.users.values().any(|u| u.username == user.username) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "username {} already exists",
                user.username
            )));
        }
        state.users.insert(user.id, user.clone());
        Ok(())
    }

    async fn get_user(&self, id: UserId) -> Result<Option<UserProfile>, RepositoryError> {
        Ok(self.state.read().await.users.get(&id).cloned())
    }

    async fn get_user_stats(&self, id: UserId) -> Result<UserStats, RepositoryError> {
        let state = self.state.read().await;
        Ok(UserStats {
            files_count: state.files.iter().filter(|f| f.user_id == id).count() as u64,
            messages_count: state.messages.iter().filter(|m| m.user_id == id).count() as u64,
        })
    }
}

#[async_trait]
impl FileRepository for InMemoryRepository {
    async fn insert_file(&self, file: &UploadedFile) -> Result<(), RepositoryError> {
        let mut state = self.state.write().await;
        if !state.users.contains_key(&file.user_id) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "unknown user {}",
                file.user_id
            )));
        }
        state.files.push(file.clone());
        Ok(())
    }

    async fn list_files(&self, user_id: UserId) -> Result<Vec<UploadedFile>, RepositoryError> {
        let state = self.state.read().await;
        let mut files: Vec<UploadedFile> = state
            .files
            .iter()
            .rev()
            .filter(|f| f.user_id == user_id)
            .cloned()
            .collect();
        files.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
        Ok(files)
    }

    async fn get_file(
        &self,
        user_id: UserId,
        file_id: FileId,
    ) -> Result<Option<UploadedFile>, RepositoryError> {
        let state = self.state.read().await;
        Ok(state
            .files
            .iter()
            .find(|f| f.id == file_id && f.user_id == user_id)
            .cloned())
    }

    async fn delete_file(&self, user_id: UserId, file_id: FileId) -> Result<bool, RepositoryError> {
        let mut state = self.state.write().await;
        let before = state.files.len();
        state
            .files
            .retain(|f| !(f.id == file_id && f.user_id == user_id));
        Ok(state.files.len() < before)
    }
}

#[async_trait]
impl ChatRepository for InMemoryRepository {
    async fn create_chat(&self, chat: &Chat) -> Result<(), RepositoryError> {
        let mut state = self.state.write().await;
        if !state.users.contains_key(&chat.user_id) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "unknown user {}",
                chat.user_id
            )));
        }
        state.chats.insert(chat.id, chat.clone());
        Ok(())
    }

    async fn list_chats(&self, user_id: UserId) -> Result<Vec<Chat>, RepositoryError> {
        let state = self.state.read().await;
        let mut chats: Vec<Chat> = state
            .chats
            .values()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect();
        chats.sort_by(|a, b| {
            b.updated_at
                .cmp(&a.updated_at)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        Ok(chats)
    }

    async fn get_chat(
        &self,
        user_id: UserId,
        chat_id: ChatId,
    ) -> Result<Option<Chat>, RepositoryError> {
        let state = self.state.read().await;
        Ok(state
            .chats
            .get(&chat_id)
            .filter(|c| c.user_id == user_id)
            .cloned())
    }

    async fn touch_chat(&self, chat_id: ChatId, at: DateTime<Utc>) -> Result<(), RepositoryError> {
        if let Some(chat) = self.state.write().await.chats.get_mut(&chat_id) {
            chat.updated_at = at;
        }
        Ok(())
    }

    async fn delete_chat(&self, user_id: UserId, chat_id: ChatId) -> Result<bool, RepositoryError> {
        let mut state = self.state.write().await;
        let owned = state
            .chats
            .get(&chat_id)
            .is_some_and(|c| c.user_id == user_id);
        if !owned {
            return Ok(false);
        }
        state.chats.remove(&chat_id);
        state.messages.retain(|m| m.chat_id != chat_id);
        Ok(true)
    }

    async fn append_message(&self, message: &Message) -> Result<(), RepositoryError> {
        let mut state = self.state.write().await;
        if !state.chats.contains_key(&message.chat_id) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "unknown chat {}",
                message.chat_id
            )));
        }
        state.messages.push(message.clone());
        Ok(())
    }

    async fn get_messages(&self, chat_id: ChatId) -> Result<Vec<Message>, RepositoryError> {
        let state = self.state.read().await;
        Ok(state
            .messages
            .iter()
            .filter(|m| m.chat_id == chat_id)
            .cloned()
            .collect())
    }
}
