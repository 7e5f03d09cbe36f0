/// Extraction strategy for an uploaded file, chosen from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Text,
    WordDocument,
    Spreadsheet,
}

impl ContentType {
    /// Maps a bare extension (`"docx"`, `".XLSX"`, `""`) to a content type.
    /// Anything unrecognized is read as plain text.
    pub fn from_extension(extension: &str) -> Self {
        match extension.trim_start_matches('.').to_lowercase().as_str() {
            "docx" => Self::WordDocument,
            "xlsx" | "xls" => Self::Spreadsheet,
            _ => Self::Text,
        }
    }

    pub fn from_filename(filename: &str) -> Self {
        Self::from_extension(extension_of(filename))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::WordDocument => "word",
            Self::Spreadsheet => "spreadsheet",
        }
    }
}

/// Extension of `filename` without the leading dot, or `""` when there is none.
pub fn extension_of(filename: &str) -> &str {
    let name = filename.rsplit(['/', '\\']).next().unwrap_or(filename);
    match name.rfind('.') {
        Some(idx) if idx > 0 => &name[idx + 1..],
        _ => "",
    }
}
