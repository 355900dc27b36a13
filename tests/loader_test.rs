use compat_finder::search;
use compat_finder::table::{detect_columns, list_sheets, load_table};
use std::fs;
use std::path::PathBuf;

fn write_fixture(name: &str, content: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("compat-finder-tests-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_csv_and_search() {
    let path = write_fixture(
        "phones.csv",
        "  LCD  Model ,Compatible Models,Price\n\
         X1,\"iPhone 8, iPhone 8 Plus\",10\n\
         X2,Galaxy S9 / S9+,12\n\
         X3,,9\n",
    );

    let table = load_table(&path, None).unwrap();
    assert_eq!(table.headers(), &["lcd model", "compatible models", "price"]);
    assert_eq!(table.row_count(), 3);

    let detected = detect_columns(&table);
    let model = detected.model.unwrap();
    let compat = detected.compat.unwrap();
    assert_eq!(model.name(), "lcd model");
    assert_eq!(compat.name(), "compatible models");

    let results = search(&table, &model, &compat, "s9+", true);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].model.as_deref(), Some("X2"));
}

#[test]
fn test_sheet_is_ignored_for_csv() {
    let path = write_fixture("sheetless.csv", "model,compat\nX1,A\n");
    let table = load_table(&path, Some("Sheet1")).unwrap();
    assert_eq!(table.row_count(), 1);
}

#[test]
fn test_csv_has_no_sheets() {
    let path = write_fixture("nosheets.csv", "model,compat\n");
    assert!(list_sheets(&path).is_err());
}

#[test]
fn test_unsupported_extension() {
    let path = write_fixture("phones.txt", "model,compat\n");
    let err = load_table(&path, None).unwrap_err();
    assert!(err.to_string().contains("Unsupported data file"));
}

#[test]
fn test_broken_workbook_reports_path() {
    let path = write_fixture("broken.xlsx", "not a zip archive");
    let err = load_table(&path, None).unwrap_err();
    assert!(err.to_string().contains("Failed to read data file at"));
}
