use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, UploadedFile};

/// Byte cap for plain-text files.
pub const PLAIN_TEXT_CAP: usize = 10_000;

/// Passes text files through without encoding validation.
pub struct PlainTextAdapter;

impl PlainTextAdapter {
    pub fn truncation_marker() -> String {
        format!("[File truncated, showing the first {PLAIN_TEXT_CAP} bytes]")
    }
}

#[async_trait]
impl FileLoader for PlainTextAdapter {
    async fn extract_text(
        &self,
        data: &[u8],
        file: &UploadedFile,
    ) -> Result<String, FileLoaderError> {
        if file.content_type() != ContentType::Text {
            return Err(FileLoaderError::UnsupportedContentType(
                file.content_type().as_str().to_string(),
            ));
        }

        if data.len() <= PLAIN_TEXT_CAP {
            return Ok(String::from_utf8_lossy(data).into_owned());
        }

        let kept = &data[..char_boundary_before(data, PLAIN_TEXT_CAP)];
        Ok(format!(
            "{}\n\n{}",
            String::from_utf8_lossy(kept),
            Self::truncation_marker()
        ))
    }
}

/// Moves a byte cut back so it does not split the last UTF-8 sequence of
/// otherwise valid text. Invalid input is cut exactly at `cap`.
fn char_boundary_before(data: &[u8], cap: usize) -> usize {
    match std::str::from_utf8(&data[..cap]) {
        Ok(_) => cap,
        Err(e) if e.error_len().is_none() => e.valid_up_to(),
        Err(_) => cap,
    }
}
