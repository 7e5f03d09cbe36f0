use bizadvisor::domain::{ContentType, extension_of};

#[test]
fn given_office_extensions_when_mapping_then_ignores_case() {
    assert_eq!(ContentType::from_filename("plan.DOCX"), ContentType::WordDocument);
    assert_eq!(ContentType::from_filename("q4.xlsx"), ContentType::Spreadsheet);
    assert_eq!(ContentType::from_filename("old.Xls"), ContentType::Spreadsheet);
}

#[test]
fn given_other_or_missing_extension_when_mapping_then_reads_as_text() {
    for name in ["notes.txt", "data.csv", "README", "archive.pdf", ".env"] {
        assert_eq!(ContentType::from_filename(name), ContentType::Text, "{name}");
    }
}

#[test]
fn given_filename_when_taking_extension_then_uses_last_dot_of_base_name() {
    assert_eq!(extension_of("report.2024.xlsx"), "xlsx");
    assert_eq!(extension_of("dir.v2/README"), "");
    assert_eq!(extension_of(".hidden"), "");
}
