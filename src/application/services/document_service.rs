use std::sync::Arc;

use tracing::{info, warn};

use crate::application::ports::{
    ByteStream, FileRepository, RepositoryError, StagingStore, StagingStoreError, UserRepository,
};
use crate::domain::{FileId, UploadedFile, UserId};

/// Upload, listing and removal of reference files.
pub struct DocumentService {
    users: Arc<dyn UserRepository>,
    files: Arc<dyn FileRepository>,
    staging_store: Arc<dyn StagingStore>,
}

impl DocumentService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        files: Arc<dyn FileRepository>,
        staging_store: Arc<dyn StagingStore>,
    ) -> Self {
        Self {
            users,
            files,
            staging_store,
        }
    }

    /// Stores the bytes first, then the metadata. Stored bytes are removed
    /// again when the metadata cannot be written.
    pub async fn upload(
        &self,
        user_id: UserId,
        filename: &str,
        stream: ByteStream<'_>,
    ) -> Result<UploadedFile, DocumentServiceError> {
        let filename = display_name(filename).ok_or(DocumentServiceError::InvalidFilename)?;

        self.users
            .get_user(user_id)
            .await?
            .ok_or(DocumentServiceError::UserNotFound)?;

        let mut file = UploadedFile::new(user_id, filename.to_string());
        file.size_bytes = self.staging_store.store(&file.storage_path, stream).await?;

        if let Err(e) = self.files.insert_file(&file).await {
            if let Err(cleanup) = self.staging_store.delete(&file.storage_path).await {
                warn!(path = %file.storage_path, error = %cleanup, "Failed to remove stored bytes after metadata error");
            }
            return Err(e.into());
        }

        info!(file_id = %file.id, size_bytes = file.size_bytes, file_type = %file.file_type, "File uploaded");
        Ok(file)
    }

    pub async fn list(&self, user_id: UserId) -> Result<Vec<UploadedFile>, DocumentServiceError> {
        Ok(self.files.list_files(user_id).await?)
    }

    /// Metadata goes first. If the bytes cannot be removed afterwards they
    /// stay behind as an orphan and only a warning is logged.
    pub async fn delete(&self, user_id: UserId, file_id: FileId) -> Result<(), DocumentServiceError> {
        let file = self
            .files
            .get_file(user_id, file_id)
            .await?
            .ok_or(DocumentServiceError::FileNotFound)?;

        if !self.files.delete_file(user_id, file_id).await? {
            return Err(DocumentServiceError::FileNotFound);
        }

        if let Err(e) = self.staging_store.delete(&file.storage_path).await {
            warn!(file_id = %file_id, path = %file.storage_path, error = %e, "Stored bytes left orphaned");
        }

        Ok(())
    }
}

/// Final path component of a client-supplied filename.
fn display_name(raw: &str) -> Option<&str> {
    let name = raw.rsplit(['/', '\\']).next()?.trim();
    if name.is_empty() || name == "." || name == ".." {
        None
    } else {
        Some(name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentServiceError {
    #[error("filename is missing or invalid")]
    InvalidFilename,
    #[error("user not found")]
    UserNotFound,
    #[error("file not found")]
    FileNotFound,
    #[error("storage: {0}")]
    Storage(#[from] StagingStoreError),
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
}
