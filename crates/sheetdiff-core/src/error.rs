//! Error types for sheetdiff-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building tables and sheet sets
#[derive(Debug, Error)]
pub enum Error {
    /// A row does not have one value per column
    #[error("Row {row} has {actual} values, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Two columns share the same name
    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),

    /// Two sheets share the same name
    #[error("Duplicate sheet name: {0}")]
    DuplicateSheet(String),
}
