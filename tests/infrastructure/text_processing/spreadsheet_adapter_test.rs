use bizadvisor::application::ports::{FileLoader, FileLoaderError};
use bizadvisor::infrastructure::text_processing::{OFFICE_TEXT_CAP, SpreadsheetAdapter};

use crate::helpers::fixtures::{uploaded, zip_archive};

const SHARED_STRINGS: &str = r#"<sst count="2"><si><t>Month</t></si><si><t>Revenue &lt;net&gt;</t></si></sst>"#;
const SHEET: &str = r#"<worksheet><sheetData><row r="1"><c r="A1" t="s"><v>0</v></c><c r="B1"><v>5000</v></c></row></sheetData></worksheet>"#;

#[tokio::test]
async fn given_workbook_when_extracting_then_lists_strings_and_values_per_part() {
    let data = zip_archive(&[
        ("[Content_Types].xml", "<Types/>"),
        ("xl/sharedStrings.xml", SHARED_STRINGS),
        ("xl/styles.xml", "<styleSheet><t>ignored</t></styleSheet>"),
        ("xl/worksheets/sheet1.xml", SHEET),
    ]);

    let text = SpreadsheetAdapter
        .extract_text(&data, &uploaded("sales.xlsx"))
        .await
        .unwrap();

    assert_eq!(text, "Month | Revenue <net>\n0 | 5000");
}

#[tokio::test]
async fn given_workbook_without_values_when_extracting_then_returns_placeholder() {
    let data = zip_archive(&[("xl/worksheets/sheet1.xml", "<worksheet><sheetData/></worksheet>")]);

    let text = SpreadsheetAdapter
        .extract_text(&data, &uploaded("blank.xlsx"))
        .await
        .unwrap();

    assert_eq!(text, SpreadsheetAdapter::placeholder("blank.xlsx"));
}

fn shared_strings(values: &[String]) -> String {
    let items: String = values.iter().map(|v| format!("<si><t>{v}</t></si>")).collect();
    format!("<sst>{items}</sst>")
}

#[tokio::test]
async fn given_workbook_over_cap_when_extracting_then_truncates_with_marker() {
    let values: Vec<String> = (0..4000).map(|i| format!("v{i}")).collect();
    let data = zip_archive(&[("xl/sharedStrings.xml", &shared_strings(&values))]);

    let text = SpreadsheetAdapter
        .extract_text(&data, &uploaded("big.xlsx"))
        .await
        .unwrap();

    let kept: String = values.join(" | ").chars().take(OFFICE_TEXT_CAP).collect();
    assert_eq!(
        text,
        format!("{kept}\n\n{}", SpreadsheetAdapter::truncation_marker())
    );
}

#[tokio::test]
async fn given_workbook_exactly_at_cap_when_extracting_then_adds_no_marker() {
    let cell = "9".repeat(OFFICE_TEXT_CAP);
    let data = zip_archive(&[("xl/sharedStrings.xml", &shared_strings(&[cell.clone()]))]);

    let text = SpreadsheetAdapter
        .extract_text(&data, &uploaded("full.xlsx"))
        .await
        .unwrap();

    assert_eq!(text, cell);
    assert!(!text.contains(&SpreadsheetAdapter::truncation_marker()));
}

#[tokio::test]
async fn given_legacy_binary_xls_when_extracting_then_fails() {
    let data = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

    let result = SpreadsheetAdapter
        .extract_text(&data, &uploaded("old.xls"))
        .await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_text_file_when_extracting_as_spreadsheet_then_returns_unsupported() {
    let result = SpreadsheetAdapter
        .extract_text(b"a,b", &uploaded("data.csv"))
        .await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedContentType(_))
    ));
}
