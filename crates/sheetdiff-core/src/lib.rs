//! # sheetdiff-core
//!
//! Core data structures for the sheetdiff workbook comparator.
//!
//! - [`CellValue`] - Scalar cell values (numbers, strings, booleans, dates, errors)
//! - [`Table`] - Ordered columns and rows loaded from one sheet
//! - [`SheetSet`] - All tables of one workbook, keyed by sheet name
//! - [`ColumnType`] - Scalar type inferred for a column
//!
//! ## Example
//!
//! ```rust
//! use sheetdiff_core::{CellValue, ColumnType, SheetSet, Table};
//!
//! let table = Table::from_rows(
//!     ["Date", "Amount"],
//!     vec![vec!["2024-01-01".into(), CellValue::Float(100.0)]],
//! )
//! .unwrap();
//!
//! assert_eq!(table.column_type("Amount"), Some(ColumnType::Float64));
//!
//! let mut sheets = SheetSet::new();
//! sheets.insert("Sales", table).unwrap();
//! assert!(sheets.contains("Sales"));
//! ```

pub mod cell;
pub mod column_type;
pub mod error;
pub mod header;
pub mod sheet_set;
pub mod table;

// Re-exports for convenience
pub use cell::{CellError, CellValue, SharedString, StringPool};
pub use column_type::ColumnType;
pub use error::{Error, Result};
pub use header::column_names;
pub use sheet_set::SheetSet;
pub use table::Table;
