use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, UploadedFile};

use super::{DocxAdapter, PlainTextAdapter, SpreadsheetAdapter};

/// Dispatches extraction to the adapter registered for the file's content type.
pub struct CompositeFileLoader {
    adapters: HashMap<ContentType, Arc<dyn FileLoader>>,
}

impl CompositeFileLoader {
    pub fn new(adapters: Vec<(ContentType, Arc<dyn FileLoader>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }

    /// Plain text, Word and spreadsheet extraction.
    pub fn standard() -> Self {
        let text: Arc<dyn FileLoader> = Arc::new(PlainTextAdapter);
        let word: Arc<dyn FileLoader> = Arc::new(DocxAdapter);
        let spreadsheet: Arc<dyn FileLoader> = Arc::new(SpreadsheetAdapter);

        Self::new(vec![
            (ContentType::Text, text),
            (ContentType::WordDocument, word),
            (ContentType::Spreadsheet, spreadsheet),
        ])
    }
}

#[async_trait]
impl FileLoader for CompositeFileLoader {
    async fn extract_text(
        &self,
        data: &[u8],
        file: &UploadedFile,
    ) -> Result<String, FileLoaderError> {
        let content_type = file.content_type();
        let adapter = self.adapters.get(&content_type).ok_or_else(|| {
            FileLoaderError::UnsupportedContentType(content_type.as_str().to_string())
        })?;

        adapter.extract_text(data, file).await
    }
}
