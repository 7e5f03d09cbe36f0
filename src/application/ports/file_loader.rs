use async_trait::async_trait;

use crate::domain::UploadedFile;

/// Turns the stored bytes of an uploaded file into prompt-ready text.
///
/// Archives without recognizable text yield a bracketed placeholder rather than
/// an error; an error means the file could not be read at all and should be
/// skipped by the caller.
#[async_trait]
pub trait FileLoader: Send + Sync {
    async fn extract_text(
        &self,
        data: &[u8],
        file: &UploadedFile,
    ) -> Result<String, FileLoaderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FileLoaderError {
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
}
