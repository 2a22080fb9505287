//! Facade error types

use std::path::PathBuf;

use sheetdiff_csv::CsvError;
use sheetdiff_xlsx::XlsxError;
use thiserror::Error;

/// Errors that can occur while loading a workbook
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input path does not exist
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file extension is not one of the supported formats
    #[error("Unsupported file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// Spreadsheet backend error
    #[error("Failed to read workbook: {0}")]
    Xlsx(#[from] XlsxError),

    /// CSV backend error
    #[error("Failed to read CSV: {0}")]
    Csv(#[from] CsvError),
}

/// Error writing a comparison report
#[derive(Debug, Error)]
#[error("Failed to write report to {}: {source}", .path.display())]
pub struct WriteError {
    /// Destination that could not be written
    pub path: PathBuf,
    #[source]
    pub source: XlsxError,
}
