use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, UploadedFile};

use super::office_archive::{OFFICE_TEXT_CAP, cap_chars, open_archive, read_entry};
use super::xml_text_scanner::cell_values;

const SHARED_STRINGS_PREFIX: &str = "xl/sharedStrings.xml";
const WORKSHEET_PREFIX: &str = "xl/worksheets/sheet";

/// Recovers shared strings and cell values from an `.xlsx` workbook.
///
/// Legacy binary `.xls` files are routed here as well; they are not ZIP
/// archives and therefore fail extraction.
pub struct SpreadsheetAdapter;

impl SpreadsheetAdapter {
    pub fn truncation_marker() -> String {
        format!("[Data truncated, showing the first {OFFICE_TEXT_CAP} characters]")
    }

    pub fn placeholder(filename: &str) -> String {
        format!(
            "[Excel file: {filename}. Could not extract data. Try exporting it to .csv or .txt]"
        )
    }
}

#[async_trait]
impl FileLoader for SpreadsheetAdapter {
    async fn extract_text(
        &self,
        data: &[u8],
        file: &UploadedFile,
    ) -> Result<String, FileLoaderError> {
        if file.content_type() != ContentType::Spreadsheet {
            return Err(FileLoaderError::UnsupportedContentType(
                file.content_type().as_str().to_string(),
            ));
        }

        let mut archive = open_archive(data, &file.filename)?;
        let mut parts = Vec::new();

        for index in 0..archive.len() {
            let entry = match archive.by_index(index) {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::debug!(index, error = %e, "Skipping unreadable archive entry");
                    continue;
                }
            };

            let name = entry.name().to_string();
            if !name.starts_with(SHARED_STRINGS_PREFIX) && !name.starts_with(WORKSHEET_PREFIX) {
                continue;
            }

            if let Some(xml) = read_entry(entry, &name) {
                let values = cell_values(&xml);
                if !values.is_empty() {
                    parts.push(values);
                }
            }
        }

        if parts.is_empty() {
            return Ok(Self::placeholder(&file.filename));
        }

        Ok(cap_chars(
            parts.join("\n"),
            OFFICE_TEXT_CAP,
            &Self::truncation_marker(),
        ))
    }
}
