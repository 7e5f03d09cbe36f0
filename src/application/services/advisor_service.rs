use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::ports::{FileLoader, StagingStore};
use crate::domain::{AdviceRequest, UploadedFile};

use super::model_gateway::{GatewayAnswer, ModelGateway};

/// One advice turn: read the user's files, extract their text and let the
/// gateway answer.
pub struct AdvisorService<F>
where
    F: FileLoader,
{
    file_loader: Arc<F>,
    staging_store: Arc<dyn StagingStore>,
    gateway: Arc<ModelGateway>,
}

impl<F> AdvisorService<F>
where
    F: FileLoader,
{
    pub fn new(
        file_loader: Arc<F>,
        staging_store: Arc<dyn StagingStore>,
        gateway: Arc<ModelGateway>,
    ) -> Self {
        Self {
            file_loader,
            staging_store,
            gateway,
        }
    }

    /// Unreadable files are logged and left out; this never fails.
    pub async fn advise(&self, request: AdviceRequest, files: &[UploadedFile]) -> GatewayAnswer {
        let file_texts = self.extract_all(files).await;
        debug!(
            files = files.len(),
            extracted = file_texts.len(),
            "Prepared file texts for advice"
        );

        self.gateway
            .respond(&request.with_file_texts(file_texts))
            .await
    }

    async fn extract_all(&self, files: &[UploadedFile]) -> Vec<String> {
        let mut texts = Vec::with_capacity(files.len());

        for file in files {
            let data = match self.staging_store.fetch(&file.storage_path).await {
                Ok(data) => data,
                Err(e) => {
                    warn!(file_id = %file.id, path = %file.storage_path, error = %e, "Skipping unreadable file");
                    continue;
                }
            };

            match self.file_loader.extract_text(&data, file).await {
                Ok(text) if !text.is_empty() => {
                    texts.push(format!("File: {}\n{}", file.filename, text));
                }
                Ok(_) => debug!(file_id = %file.id, "File has no text"),
                Err(e) => {
                    warn!(file_id = %file.id, filename = %file.filename, error = %e, "Skipping file that failed extraction");
                }
            }
        }

        texts
    }
}
