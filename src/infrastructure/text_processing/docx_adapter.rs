use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, UploadedFile};

use super::office_archive::{OFFICE_TEXT_CAP, cap_chars, open_archive, read_entry};
use super::xml_text_scanner::word_runs;

const DOCUMENT_ENTRY: &str = "word/document.xml";

/// Recovers the running text of a `.docx` body.
pub struct DocxAdapter;

impl DocxAdapter {
    pub fn truncation_marker() -> String {
        format!("[Text truncated, showing the first {OFFICE_TEXT_CAP} characters]")
    }

    pub fn placeholder(filename: &str) -> String {
        format!("[Word document: {filename}. Could not extract text. Try saving the file as .txt]")
    }
}

#[async_trait]
impl FileLoader for DocxAdapter {
    async fn extract_text(
        &self,
        data: &[u8],
        file: &UploadedFile,
    ) -> Result<String, FileLoaderError> {
        if file.content_type() != ContentType::WordDocument {
            return Err(FileLoaderError::UnsupportedContentType(
                file.content_type().as_str().to_string(),
            ));
        }

        let mut archive = open_archive(data, &file.filename)?;

        let text = match archive.by_name(DOCUMENT_ENTRY) {
            Ok(entry) => read_entry(entry, DOCUMENT_ENTRY)
                .map(|xml| word_runs(&xml))
                .unwrap_or_default(),
            Err(_) => {
                tracing::debug!(filename = %file.filename, "Word archive has no document body");
                String::new()
            }
        };

        if text.is_empty() {
            return Ok(Self::placeholder(&file.filename));
        }

        Ok(cap_chars(text, OFFICE_TEXT_CAP, &Self::truncation_marker()))
    }
}
