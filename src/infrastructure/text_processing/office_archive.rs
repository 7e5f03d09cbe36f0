use std::io::{Cursor, Read};

use zip::ZipArchive;

use crate::application::ports::FileLoaderError;

/// Character cap for text recovered from Word and Excel files.
pub const OFFICE_TEXT_CAP: usize = 15_000;

pub(crate) fn open_archive<'a>(
    data: &'a [u8],
    filename: &str,
) -> Result<ZipArchive<Cursor<&'a [u8]>>, FileLoaderError> {
    ZipArchive::new(Cursor::new(data)).map_err(|e| {
        FileLoaderError::ExtractionFailed(format!("{filename} is not a readable ZIP archive: {e}"))
    })
}

/// Reads one archive entry as text. Unreadable entries are logged and yield `None`.
pub(crate) fn read_entry<R: Read>(mut entry: R, entry_name: &str) -> Option<String> {
    let mut buf = Vec::new();
    match entry.read_to_end(&mut buf) {
        Ok(_) => Some(String::from_utf8_lossy(&buf).into_owned()),
        Err(e) => {
            tracing::debug!(entry = %entry_name, error = %e, "Skipping unreadable archive entry");
            None
        }
    }
}

/// Keeps the first `cap` characters and appends `marker` after a blank line
/// when the text is longer than that.
pub(crate) fn cap_chars(text: String, cap: usize, marker: &str) -> String {
    match text.char_indices().nth(cap) {
        Some((idx, _)) => format!("{}\n\n{}", &text[..idx], marker),
        None => text,
    }
}
