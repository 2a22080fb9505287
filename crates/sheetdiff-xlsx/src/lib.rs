//! # sheetdiff-xlsx
//!
//! Spreadsheet loading and XLSX report writing for sheetdiff.
//!
//! - [`XlsxReader`] loads xlsx/xlsm/xlsb/xls/ods workbooks into a
//!   [`SheetSet`](sheetdiff_core::SheetSet) through `calamine`
//! - [`ReportWriter`] writes a comparison report as a four-sheet workbook

pub mod error;
pub mod reader;
pub mod writer;

pub use error::{XlsxError, XlsxResult};
pub use reader::XlsxReader;
pub use writer::{ReportWriter, TableWriter, REPORT_SHEETS};
