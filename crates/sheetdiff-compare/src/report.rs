//! Comparison report types

use std::fmt;

use sheetdiff_core::{CellValue, ColumnType};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Kind of shape-level disagreement between two workbooks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum StructureIssueKind {
    /// Sheet exists only in the left workbook
    #[cfg_attr(feature = "serde", serde(rename = "Missing on right"))]
    MissingOnRight,
    /// Sheet exists only in the right workbook
    #[cfg_attr(feature = "serde", serde(rename = "Missing on left"))]
    MissingOnLeft,
    #[cfg_attr(feature = "serde", serde(rename = "Row count mismatch"))]
    RowCountMismatch,
    #[cfg_attr(feature = "serde", serde(rename = "Column count mismatch"))]
    ColumnCountMismatch,
    /// Column sequences differ in membership or order
    #[cfg_attr(feature = "serde", serde(rename = "Column order/name mismatch"))]
    ColumnOrderMismatch,
}

impl StructureIssueKind {
    /// Human-readable issue name
    pub fn as_str(&self) -> &'static str {
        match self {
            StructureIssueKind::MissingOnRight => "Missing on right",
            StructureIssueKind::MissingOnLeft => "Missing on left",
            StructureIssueKind::RowCountMismatch => "Row count mismatch",
            StructureIssueKind::ColumnCountMismatch => "Column count mismatch",
            StructureIssueKind::ColumnOrderMismatch => "Column order/name mismatch",
        }
    }
}

impl fmt::Display for StructureIssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A shape-level disagreement (sheet presence, row/column counts, column order)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct StructureIssue {
    pub sheet: String,
    pub issue: StructureIssueKind,
    pub detail: String,
}

/// A shared column whose inferred type differs between the two sides
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DtypeIssue {
    pub sheet: String,
    pub column: String,
    pub left_dtype: ColumnType,
    pub right_dtype: ColumnType,
}

/// A single cell whose values disagree
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ValueMismatch {
    pub sheet: String,
    /// 1-based data row number (the header is not counted)
    pub row: usize,
    pub column: String,
    pub left_value: CellValue,
    pub right_value: CellValue,
}

/// Roll-up of a comparison
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Summary {
    /// Sheets only in the left workbook, sorted
    pub left_only_sheets: Vec<String>,
    /// Sheets only in the right workbook, sorted
    pub right_only_sheets: Vec<String>,
    /// Sheets in both workbooks, sorted
    pub common_sheets: Vec<String>,
    pub structure_issue_count: usize,
    pub dtype_issue_count: usize,
    pub value_mismatch_count: usize,
    /// True iff all three counts are zero
    pub all_matched: bool,
}

impl Summary {
    /// Build a summary; `all_matched` is derived from the counts
    pub fn new(
        left_only_sheets: Vec<String>,
        right_only_sheets: Vec<String>,
        common_sheets: Vec<String>,
        structure_issue_count: usize,
        dtype_issue_count: usize,
        value_mismatch_count: usize,
    ) -> Self {
        Self {
            left_only_sheets,
            right_only_sheets,
            common_sheets,
            structure_issue_count,
            dtype_issue_count,
            value_mismatch_count,
            all_matched: structure_issue_count == 0
                && dtype_issue_count == 0
                && value_mismatch_count == 0,
        }
    }
}

/// Full discrepancy report for two workbooks
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ComparisonReport {
    pub structure_issues: Vec<StructureIssue>,
    pub dtype_issues: Vec<DtypeIssue>,
    pub value_mismatches: Vec<ValueMismatch>,
    pub summary: Summary,
}

impl ComparisonReport {
    /// Check if the two workbooks matched completely
    pub fn all_matched(&self) -> bool {
        self.summary.all_matched
    }

    /// Total number of issues across the three lists
    pub fn issue_count(&self) -> usize {
        self.structure_issues.len() + self.dtype_issues.len() + self.value_mismatches.len()
    }
}
