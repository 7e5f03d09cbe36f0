use std::io;

use bytes::Bytes;
use futures::stream::BoxStream;

use crate::domain::StoragePath;

pub type ByteStream<'a> = BoxStream<'a, Result<Bytes, io::Error>>;

/// Byte-level storage for uploaded files.
#[async_trait::async_trait]
pub trait StagingStore: Send + Sync {
    /// Writes the stream to `path` and returns the number of bytes stored.
    async fn store(&self, path: &StoragePath, stream: ByteStream<'_>)
    -> Result<u64, StagingStoreError>;

    async fn fetch(&self, path: &StoragePath) -> Result<Vec<u8>, StagingStoreError>;

    async fn delete(&self, path: &StoragePath) -> Result<(), StagingStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StagingStoreError {
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("delete failed: {0}")]
    DeleteFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
