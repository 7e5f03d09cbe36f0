use std::sync::Arc;

use crate::application::ports::FileLoader;
use crate::application::services::{ChatService, DocumentService, ProfileService};

pub struct AppState<F>
where
    F: FileLoader,
{
    pub profile_service: Arc<ProfileService>,
    pub document_service: Arc<DocumentService>,
    pub chat_service: Arc<ChatService<F>>,
}

impl<F> Clone for AppState<F>
where
    F: FileLoader,
{
    fn clone(&self) -> Self {
        Self {
            profile_service: Arc::clone(&self.profile_service),
            document_service: Arc::clone(&self.document_service),
            chat_service: Arc::clone(&self.chat_service),
        }
    }
}
