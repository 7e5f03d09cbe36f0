use std::sync::Arc;

use bizadvisor::application::ports::{FileLoader, FileLoaderError};
use bizadvisor::domain::ContentType;
use bizadvisor::infrastructure::text_processing::{CompositeFileLoader, PlainTextAdapter};

use crate::helpers::fixtures::{docx_with_body, uploaded, word_paragraph};

#[tokio::test]
async fn given_word_document_when_loading_then_delegates_to_docx_adapter() {
    let loader = CompositeFileLoader::standard();
    let data = docx_with_body(&word_paragraph("Staff: 4"));

    let text = loader
        .extract_text(&data, &uploaded("team.DOCX"))
        .await
        .unwrap();

    assert_eq!(text, "Staff: 4");
}

#[tokio::test]
async fn given_unknown_extension_when_loading_then_reads_as_text() {
    let loader = CompositeFileLoader::standard();

    let text = loader
        .extract_text(b"month;profit", &uploaded("export.csv"))
        .await
        .unwrap();

    assert_eq!(text, "month;profit");
}

#[tokio::test]
async fn given_unregistered_content_type_when_loading_then_returns_unsupported() {
    let text_adapter: Arc<dyn FileLoader> = Arc::new(PlainTextAdapter);
    let loader = CompositeFileLoader::new(vec![(ContentType::Text, text_adapter)]);

    let result = loader.extract_text(b"PK", &uploaded("sheet.xlsx")).await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedContentType(_))
    ));
}
