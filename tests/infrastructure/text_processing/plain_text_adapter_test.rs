use bizadvisor::application::ports::{FileLoader, FileLoaderError};
use bizadvisor::infrastructure::text_processing::{PLAIN_TEXT_CAP, PlainTextAdapter};

use crate::helpers::fixtures::uploaded;

#[tokio::test]
async fn given_valid_utf8_bytes_when_extracting_then_returns_string() {
    let adapter = PlainTextAdapter;

    let result = adapter
        .extract_text(b"Hello, this is plain text.", &uploaded("readme.txt"))
        .await;

    assert_eq!(result.unwrap(), "Hello, this is plain text.");
}

#[tokio::test]
async fn given_invalid_utf8_bytes_when_extracting_then_replaces_them() {
    let adapter = PlainTextAdapter;
    let data: &[u8] = &[b'o', b'k', 0xFF, 0xFE];

    let result = adapter.extract_text(data, &uploaded("broken.csv")).await;

    assert_eq!(result.unwrap(), "ok\u{FFFD}\u{FFFD}");
}

#[tokio::test]
async fn given_text_at_cap_when_extracting_then_returns_it_whole() {
    let adapter = PlainTextAdapter;
    let data = vec![b'a'; PLAIN_TEXT_CAP];

    let text = adapter.extract_text(&data, &uploaded("a.txt")).await.unwrap();

    assert_eq!(text.len(), PLAIN_TEXT_CAP);
    assert!(!text.contains("[File truncated"));
}

#[tokio::test]
async fn given_text_over_cap_when_extracting_then_truncates_with_marker() {
    let adapter = PlainTextAdapter;
    let data = vec![b'a'; PLAIN_TEXT_CAP + 500];

    let text = adapter.extract_text(&data, &uploaded("a.txt")).await.unwrap();

    let expected = format!(
        "{}\n\n{}",
        "a".repeat(PLAIN_TEXT_CAP),
        PlainTextAdapter::truncation_marker()
    );
    assert_eq!(text, expected);
}

#[tokio::test]
async fn given_multibyte_char_across_cap_when_truncating_then_does_not_split_it() {
    let adapter = PlainTextAdapter;
    let data = format!("a{}", "я".repeat(PLAIN_TEXT_CAP / 2)).into_bytes();

    let text = adapter.extract_text(&data, &uploaded("ru.txt")).await.unwrap();

    assert!(!text.contains('\u{FFFD}'));
    assert!(text.starts_with(&format!("a{}", "я".repeat(PLAIN_TEXT_CAP / 2 - 1))));
    assert!(text.ends_with(&PlainTextAdapter::truncation_marker()));
}

#[tokio::test]
async fn given_word_document_when_extracting_as_plain_text_then_returns_unsupported() {
    let adapter = PlainTextAdapter;

    let result = adapter.extract_text(b"data", &uploaded("plan.docx")).await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedContentType(_))
    ));
}
