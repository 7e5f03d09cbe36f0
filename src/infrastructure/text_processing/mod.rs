mod composite_file_loader;
mod docx_adapter;
mod office_archive;
mod plain_text_adapter;
mod spreadsheet_adapter;
mod xml_text_scanner;

pub use composite_file_loader::CompositeFileLoader;
pub use docx_adapter::DocxAdapter;
pub use office_archive::OFFICE_TEXT_CAP;
pub use plain_text_adapter::{PLAIN_TEXT_CAP, PlainTextAdapter};
pub use spreadsheet_adapter::SpreadsheetAdapter;
