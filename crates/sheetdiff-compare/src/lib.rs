//! # sheetdiff-compare
//!
//! Comparison engine for sheetdiff.
//!
//! Given two [`SheetSet`](sheetdiff_core::SheetSet)s, [`compare`] produces a
//! [`ComparisonReport`] with three issue lists and a summary:
//!
//! - [`StructureIssue`] - missing sheets, row/column count and column order differences
//! - [`DtypeIssue`] - shared columns whose inferred type differs
//! - [`ValueMismatch`] - cells that fail the [`equivalent`] rule
//!
//! Rows are aligned by position. An inserted row on one side shifts every
//! later row, and each shifted row is reported.
//!
//! ## Example
//!
//! ```rust
//! use sheetdiff_compare::compare;
//! use sheetdiff_core::{SheetSet, Table};
//!
//! let left = SheetSet::from_sheets([(
//!     "Sales",
//!     Table::from_rows(["Amount"], vec![vec![100.into()]]).unwrap(),
//! )])
//! .unwrap();
//! let right = SheetSet::from_sheets([(
//!     "Sales",
//!     Table::from_rows(["Amount"], vec![vec![100.0.into()]]).unwrap(),
//! )])
//! .unwrap();
//!
//! let report = compare(&left, &right, 1e-9);
//! assert!(report.value_mismatches.is_empty());
//! assert_eq!(report.dtype_issues.len(), 1); // int64 vs float64
//! ```

mod engine;
mod equivalence;
mod options;
mod report;

pub use engine::{compare, compare_with_options};
pub use equivalence::equivalent;
pub use options::{CompareOptions, DEFAULT_TOLERANCE};
pub use report::{
    ComparisonReport, DtypeIssue, StructureIssue, StructureIssueKind, Summary, ValueMismatch,
};
