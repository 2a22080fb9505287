//! Spreadsheet error types

use std::path::PathBuf;

use thiserror::Error;

/// Result type for spreadsheet operations
pub type XlsxResult<T> = std::result::Result<T, XlsxError>;

/// Errors that can occur while loading workbooks or writing reports
#[derive(Debug, Error)]
pub enum XlsxError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// The spreadsheet parser rejected the file
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    /// Output path has no file name or cannot hold a file
    #[error("Invalid output path: {}", .0.display())]
    InvalidPath(PathBuf),

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] sheetdiff_core::Error),
}
