use chrono::{DateTime, Utc};

use super::content_type::extension_of;
use super::{ContentType, FileId, StoragePath, UserId};

/// Metadata of a reference document uploaded by a user. Read-only after upload.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub id: FileId,
    pub user_id: UserId,
    pub filename: String,
    pub storage_path: StoragePath,
    pub file_type: String,
    pub size_bytes: u64,
    pub uploaded_at: DateTime<Utc>,
}

impl UploadedFile {
    /// Prepares metadata for a new upload. The storage path keeps the original
    /// extension so the extractor can dispatch on it later.
    pub fn new(user_id: UserId, filename: String) -> Self {
        let id = FileId::new();
        let extension = extension_of(&filename).to_string();
        let storage_path = StoragePath::new(&user_id, &id, &extension);
        Self {
            id,
            user_id,
            filename,
            storage_path,
            file_type: extension.to_lowercase(),
            size_bytes: 0,
            uploaded_at: Utc::now(),
        }
    }

    pub fn content_type(&self) -> ContentType {
        ContentType::from_extension(&self.file_type)
    }
}
