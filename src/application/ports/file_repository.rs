use async_trait::async_trait;

use crate::domain::{FileId, UploadedFile, UserId};

use super::RepositoryError;

#[async_trait]
pub trait FileRepository: Send + Sync {
    async fn insert_file(&self, file: &UploadedFile) -> Result<(), RepositoryError>;

    /// Files owned by `user_id`, newest first.
    async fn list_files(&self, user_id: UserId) -> Result<Vec<UploadedFile>, RepositoryError>;

    async fn get_file(
        &self,
        user_id: UserId,
        file_id: FileId,
    ) -> Result<Option<UploadedFile>, RepositoryError>;

    /// Returns whether a row owned by `user_id` was removed.
    async fn delete_file(&self, user_id: UserId, file_id: FileId) -> Result<bool, RepositoryError>;
}
