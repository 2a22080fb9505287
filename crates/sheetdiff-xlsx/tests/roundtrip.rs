//! Write workbooks with `TableWriter`/`ReportWriter`, read them back with `XlsxReader`.

use std::io::Cursor;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use sheetdiff_compare::compare;
use sheetdiff_core::{CellError, CellValue, ColumnType, SheetSet, Table};
use sheetdiff_xlsx::{ReportWriter, TableWriter, XlsxError, XlsxReader, REPORT_SHEETS};

fn write_tables(sheets: &[(&str, &Table)]) -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());
    TableWriter::write(sheets, &mut buffer).expect("write workbook");
    buffer.into_inner()
}

fn read_bytes(bytes: Vec<u8>) -> SheetSet {
    XlsxReader::read(Cursor::new(bytes)).expect("read workbook")
}

#[test]
fn test_table_roundtrip_preserves_order_and_types() {
    let sales = Table::from_rows(
        ["Region", "Units", "Price", "Active"],
        vec![
            vec!["North".into(), 10.into(), 2.5.into(), true.into()],
            vec!["South".into(), 20.into(), 3.75.into(), false.into()],
        ],
    )
    .unwrap();
    let notes = Table::from_rows(["Text"], vec![vec!["a < b & c".into()]]).unwrap();

    let sheets = read_bytes(write_tables(&[("Sales", &sales), ("Notes", &notes)]));

    assert_eq!(sheets.names().collect::<Vec<_>>(), vec!["Sales", "Notes"]);

    let read_sales = sheets.get("Sales").unwrap();
    assert_eq!(read_sales, &sales);
    assert_eq!(read_sales.column_type("Units"), Some(ColumnType::Int64));
    assert_eq!(read_sales.column_type("Price"), Some(ColumnType::Float64));
    assert_eq!(read_sales.column_type("Active"), Some(ColumnType::Bool));
    assert_eq!(read_sales.column_type("Region"), Some(ColumnType::Object));

    assert_eq!(
        sheets.get("Notes").unwrap().get(0, "Text"),
        &CellValue::string("a < b & c")
    );
}

#[test]
fn test_blank_header_and_short_rows() {
    let table = Table::from_rows(
        ["Name", "", "Score"],
        vec![
            vec!["a".into(), "x".into(), 1.into()],
            vec!["b".into(), CellValue::Empty, CellValue::Empty],
        ],
    )
    .unwrap();

    let sheets = read_bytes(write_tables(&[("Data", &table)]));
    let data = sheets.get("Data").unwrap();
    assert_eq!(data.columns(), &["Name", "Unnamed: 1", "Score"]);
    assert_eq!(data.row_count(), 2);
    assert_eq!(data.get(0, "Unnamed: 1"), &CellValue::string("x"));
    assert_eq!(data.get(1, "Unnamed: 1"), &CellValue::Empty);
    assert_eq!(data.get(1, "Score"), &CellValue::Empty);
}

#[test]
fn test_empty_sheet_is_kept() {
    let data = Table::from_rows(["a", "b"], vec![vec![1.into(), "x".into()]]).unwrap();
    let sheets = read_bytes(write_tables(&[("Blank", &Table::default()), ("Data", &data)]));

    assert_eq!(sheets.names().collect::<Vec<_>>(), vec!["Blank", "Data"]);
    let blank = sheets.get("Blank").unwrap();
    assert_eq!(blank.column_count(), 0);
    assert_eq!(blank.row_count(), 0);
    assert_eq!(sheets.get("Data").unwrap(), &data);
}

#[test]
fn test_empty_sheet_against_populated_sheet() {
    let data = Table::from_rows(
        ["a", "b"],
        vec![vec![1.into(), "x".into()], vec![2.into(), "y".into()]],
    )
    .unwrap();
    let left = read_bytes(write_tables(&[("Sales", &Table::default())]));
    let right = read_bytes(write_tables(&[("Sales", &data)]));

    let report = compare(&left, &right, 1e-9);
    let issues: Vec<(&str, &str)> = report
        .structure_issues
        .iter()
        .map(|i| (i.issue.as_str(), i.detail.as_str()))
        .collect();
    assert_eq!(
        issues,
        vec![
            ("Row count mismatch", "left=0, right=2"),
            ("Column count mismatch", "left=0, right=2"),
            ("Column order/name mismatch", "left=[], right=['a', 'b']"),
        ]
    );
    // No shared columns, so nothing to compare cell by cell
    assert!(report.dtype_issues.is_empty());
    assert!(report.value_mismatches.is_empty());
    assert!(!report.all_matched());
}

#[test]
fn test_nan_and_errors_are_written_as_text() {
    let table = Table::from_rows(
        ["a", "b"],
        vec![vec![
            CellValue::Float(f64::NAN),
            CellValue::Error(CellError::Div0),
        ]],
    )
    .unwrap();

    let sheets = read_bytes(write_tables(&[("S", &table)]));
    let read = sheets.get("S").unwrap();
    assert_eq!(read.get(0, "a"), &CellValue::string("nan"));
    assert_eq!(read.get(0, "b"), &CellValue::string("#DIV/0!"));
}

#[test]
fn test_dates_are_written_as_canonical_text() {
    let when = NaiveDate::from_ymd_opt(2024, 1, 31)
        .unwrap()
        .and_hms_opt(8, 30, 0)
        .unwrap();
    let table = Table::from_rows(["when"], vec![vec![when.into()]]).unwrap();

    let sheets = read_bytes(write_tables(&[("S", &table)]));
    assert_eq!(
        sheets.get("S").unwrap().get(0, "when"),
        &CellValue::string("2024-01-31 08:30:00")
    );
}

fn sample_report() -> sheetdiff_compare::ComparisonReport {
    let left = SheetSet::from_sheets([
        (
            "Sales",
            Table::from_rows(
                ["Region", "Amount"],
                vec![
                    vec!["North".into(), 100.into()],
                    vec!["South".into(), 200.into()],
                ],
            )
            .unwrap(),
        ),
        ("Legacy", Table::new(["x"]).unwrap()),
    ])
    .unwrap();
    let right = SheetSet::from_sheets([(
        "Sales",
        Table::from_rows(
            ["Region", "Amount"],
            vec![
                vec!["North".into(), 100.into()],
                vec!["South".into(), 250.into()],
            ],
        )
        .unwrap(),
    )])
    .unwrap();

    compare(&left, &right, 1e-9)
}

#[test]
fn test_report_workbook_layout() {
    let report = sample_report();
    let mut buffer = Cursor::new(Vec::new());
    ReportWriter::write(&report, &mut buffer).unwrap();

    let sheets = read_bytes(buffer.into_inner());
    assert_eq!(sheets.names().collect::<Vec<_>>(), REPORT_SHEETS.to_vec());

    let summary = sheets.get("Summary").unwrap();
    assert_eq!(summary.row_count(), 1);
    assert_eq!(summary.get(0, "left_only_sheets"), &CellValue::string("Legacy"));
    assert_eq!(summary.get(0, "right_only_sheets"), &CellValue::Empty);
    assert_eq!(summary.get(0, "common_sheets"), &CellValue::string("Sales"));
    assert_eq!(summary.get(0, "structure_issue_count"), &CellValue::Int(1));
    assert_eq!(summary.get(0, "value_mismatch_count"), &CellValue::Int(1));
    assert_eq!(summary.get(0, "all_matched"), &CellValue::Boolean(false));

    let structure = sheets.get("Structure_Issues").unwrap();
    assert_eq!(structure.columns(), &["sheet", "issue", "detail"]);
    assert_eq!(structure.get(0, "sheet"), &CellValue::string("Legacy"));
    assert_eq!(structure.get(0, "issue"), &CellValue::string("Missing on right"));

    let dtypes = sheets.get("Dtype_Issues").unwrap();
    assert_eq!(
        dtypes.columns(),
        &["sheet", "column", "left_dtype", "right_dtype"]
    );
    assert_eq!(dtypes.row_count(), 0);

    let values = sheets.get("Value_Mismatches").unwrap();
    assert_eq!(
        values.columns(),
        &["sheet", "row", "column", "left_value", "right_value"]
    );
    assert_eq!(values.row_count(), 1);
    assert_eq!(values.get(0, "row"), &CellValue::Int(2));
    assert_eq!(values.get(0, "column"), &CellValue::string("Amount"));
    assert_eq!(values.get(0, "left_value"), &CellValue::Int(200));
    assert_eq!(values.get(0, "right_value"), &CellValue::Int(250));
}

#[test]
fn test_report_write_file_creates_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("out").join("report.xlsx");

    ReportWriter::write_file(&sample_report(), &path).unwrap();
    assert!(path.exists());

    let sheets = XlsxReader::read_file(&path).unwrap();
    assert_eq!(sheets.len(), 4);
}

#[test]
fn test_report_write_file_rejects_directory_path() {
    let result = ReportWriter::write_file(&sample_report(), "/");
    assert!(matches!(result, Err(XlsxError::InvalidPath(_))));
}

#[test]
fn test_read_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let result = XlsxReader::read_file(dir.path().join("absent.xlsx"));
    assert!(result.is_err());
}
