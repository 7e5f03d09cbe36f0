use std::path::PathBuf;
use std::sync::Arc;

use futures::StreamExt;
use object_store::local::LocalFileSystem;
use object_store::path::Path as ObjectPath;
use object_store::{MultipartUpload, ObjectStore, PutPayload};

use crate::application::ports::{ByteStream, StagingStore, StagingStoreError};
use crate::domain::StoragePath;

/// Uploaded files on the local disk, one directory per user below `root`.
pub struct LocalFileStore {
    inner: Arc<LocalFileSystem>,
}

impl LocalFileStore {
    pub fn new(root: PathBuf) -> Result<Self, StagingStoreError> {
        std::fs::create_dir_all(&root)?;
        let fs = LocalFileSystem::new_with_prefix(&root)
            .map_err(|e| StagingStoreError::UploadFailed(e.to_string()))?;
        tracing::info!(root = %root.display(), "Local file store ready");
        Ok(Self {
            inner: Arc::new(fs),
        })
    }
}

fn object_path(path: &StoragePath) -> ObjectPath {
    ObjectPath::from(path.as_str())
}

#[async_trait::async_trait]
impl StagingStore for LocalFileStore {
    async fn store(
        &self,
        path: &StoragePath,
        mut stream: ByteStream<'_>,
    ) -> Result<u64, StagingStoreError> {
        let mut upload = self
            .inner
            .put_multipart(&object_path(path))
            .await
            .map_err(|e| StagingStoreError::UploadFailed(e.to_string()))?;

        let mut total_bytes: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let bytes = match chunk {
                Ok(b) => b,
                Err(e) => {
                    let _ = upload.abort().await;
                    return Err(StagingStoreError::Io(e));
                }
            };
            total_bytes += bytes.len() as u64;
            if let Err(e) = upload.put_part(PutPayload::from(bytes)).await {
                let _ = upload.abort().await;
                return Err(StagingStoreError::UploadFailed(e.to_string()));
            }
        }

        upload
            .complete()
            .await
            .map_err(|e| StagingStoreError::UploadFailed(e.to_string()))?;

        Ok(total_bytes)
    }

    async fn fetch(&self, path: &StoragePath) -> Result<Vec<u8>, StagingStoreError> {
        let result = self
            .inner
            .get(&object_path(path))
            .await
            .map_err(|e| match e {
                object_store::Error::NotFound { .. } => StagingStoreError::NotFound(path.to_string()),
                other => StagingStoreError::DownloadFailed(other.to_string()),
            })?;

        let bytes = result
            .bytes()
            .await
            .map_err(|e| StagingStoreError::DownloadFailed(e.to_string()))?;

        Ok(bytes.to_vec())
    }

    async fn delete(&self, path: &StoragePath) -> Result<(), StagingStoreError> {
        self.inner
            .delete(&object_path(path))
            .await
            .map_err(|e| match e {
                object_store::Error::NotFound { .. } => StagingStoreError::NotFound(path.to_string()),
                other => StagingStoreError::DeleteFailed(other.to_string()),
            })
    }
}
