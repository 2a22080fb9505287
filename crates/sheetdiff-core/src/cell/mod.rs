//! Cell-related types
//!
//! - [`CellValue`] - The scalar value stored in a cell
//! - [`CellError`] - Spreadsheet error codes (`#DIV/0!`, `#N/A`, ...)
//! - [`SharedString`] - Reference-counted string payload

mod value;

pub use value::{CellError, CellValue, SharedString, StringPool};
