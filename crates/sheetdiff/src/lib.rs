//! # sheetdiff
//!
//! Compare two spreadsheet workbooks sheet by sheet and cell by cell.
//!
//! ## Features
//!
//! - Load xlsx, xlsm, xlsb, xls and ods workbooks, or a CSV file as a single sheet
//! - Detect missing sheets, row/column count and column order differences
//! - Detect column type differences (`int64` vs `float64`, ...)
//! - Report every cell whose values disagree, with a numeric tolerance
//! - Write the result as a four-sheet XLSX report
//!
//! ## Example
//!
//! ```rust,no_run
//! use sheetdiff::prelude::*;
//!
//! let options = CompareOptions::default().labels("SSRS", "PowerBI");
//! let report = compare_files("ssrs.xlsx", "powerbi.xlsx", &options).unwrap();
//!
//! println!("{} issues", report.issue_count());
//! write_report(&report, "comparison.xlsx").unwrap();
//! ```

mod error;
pub mod prelude;

use std::path::Path;
use std::thread;

use log::debug;

pub use error::{LoadError, WriteError};

// Re-export core types
pub use sheetdiff_core::{CellError, CellValue, ColumnType, SheetSet, Table};

// Re-export comparison types
pub use sheetdiff_compare::{
    compare, compare_with_options, equivalent, CompareOptions, ComparisonReport, DtypeIssue,
    StructureIssue, StructureIssueKind, Summary, ValueMismatch, DEFAULT_TOLERANCE,
};

// Re-export I/O types
pub use sheetdiff_csv::{CsvError, CsvReadOptions, CsvReader};
pub use sheetdiff_xlsx::{ReportWriter, XlsxError, XlsxReader, REPORT_SHEETS};

/// Extensions handled by the spreadsheet backend
const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xltx", "xltm", "xlsb", "xls", "ods"];

/// Load every sheet of a workbook, dispatching on the file extension
pub fn load<P: AsRef<Path>>(path: P) -> Result<SheetSet, LoadError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    let sheets = match extension.as_deref() {
        Some(ext) if WORKBOOK_EXTENSIONS.contains(&ext) => XlsxReader::read_file(path)?,
        Some("csv") => CsvReader::read_file(path, &CsvReadOptions::default())?,
        _ => return Err(LoadError::UnsupportedFormat(path.to_path_buf())),
    };

    debug!("Loaded {} sheet(s) from '{}'", sheets.len(), path.display());
    Ok(sheets)
}

/// Load both workbooks concurrently and compare them
pub fn compare_files<L, R>(
    left: L,
    right: R,
    options: &CompareOptions,
) -> Result<ComparisonReport, LoadError>
where
    L: AsRef<Path>,
    R: AsRef<Path>,
{
    let (left, right) = (left.as_ref(), right.as_ref());

    let (left_sheets, right_sheets) = thread::scope(|s| {
        let right_handle = s.spawn(|| load(right));
        let left_sheets = load(left);
        let right_sheets = match right_handle.join() {
            Ok(result) => result,
            Err(panic) => std::panic::resume_unwind(panic),
        };
        (left_sheets, right_sheets)
    });

    Ok(compare_with_options(&left_sheets?, &right_sheets?, options))
}

/// Write a comparison report to an `.xlsx` file
pub fn write_report<P: AsRef<Path>>(report: &ComparisonReport, path: P) -> Result<(), WriteError> {
    let path = path.as_ref();
    ReportWriter::write_file(report, path).map_err(|source| WriteError {
        path: path.to_path_buf(),
        source,
    })
}
