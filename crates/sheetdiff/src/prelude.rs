//! Prelude module - common imports for sheetdiff users
//!
//! ```rust
//! use sheetdiff::prelude::*;
//! ```

pub use crate::{
    // Entry points
    compare,
    compare_files,
    compare_with_options,
    load,
    write_report,

    // Data types
    CellValue,
    ColumnType,
    SheetSet,
    Table,

    // Report types
    CompareOptions,
    ComparisonReport,
    DtypeIssue,
    StructureIssue,
    StructureIssueKind,
    Summary,
    ValueMismatch,

    // Error types
    LoadError,
    WriteError,
};
