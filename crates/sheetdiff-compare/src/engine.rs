//! Comparison engine

use log::debug;
use sheetdiff_core::{SheetSet, Table};

use crate::equivalence::equivalent;
use crate::options::CompareOptions;
use crate::report::{
    ComparisonReport, DtypeIssue, StructureIssue, StructureIssueKind, Summary, ValueMismatch,
};

/// Compare two sheet sets with default side labels.
pub fn compare(left: &SheetSet, right: &SheetSet, tolerance: f64) -> ComparisonReport {
    compare_with_options(left, right, &CompareOptions::with_tolerance(tolerance))
}

/// Compare two sheet sets.
///
/// Pure and total: any two sheet sets produce a report, and the same inputs
/// always produce the same report. Sheets are visited in sorted name order,
/// never in map order.
pub fn compare_with_options(
    left: &SheetSet,
    right: &SheetSet,
    options: &CompareOptions,
) -> ComparisonReport {
    let left_names = left.name_set();
    let right_names = right.name_set();

    let left_only: Vec<String> = left_names
        .difference(&right_names)
        .map(|s| s.to_string())
        .collect();
    let right_only: Vec<String> = right_names
        .difference(&left_names)
        .map(|s| s.to_string())
        .collect();
    let common: Vec<String> = left_names
        .intersection(&right_names)
        .map(|s| s.to_string())
        .collect();

    let mut diff = SheetDiff {
        options,
        structure_issues: Vec::new(),
        dtype_issues: Vec::new(),
        value_mismatches: Vec::new(),
    };

    for sheet in &left_only {
        diff.structure(
            sheet,
            StructureIssueKind::MissingOnRight,
            format!("Sheet not found in {} workbook", options.right_label),
        );
    }
    for sheet in &right_only {
        diff.structure(
            sheet,
            StructureIssueKind::MissingOnLeft,
            format!("Sheet not found in {} workbook", options.left_label),
        );
    }

    for sheet in &common {
        if let (Some(l), Some(r)) = (left.get(sheet), right.get(sheet)) {
            diff.compare_sheet(sheet, l, r);
        }
    }

    let summary = Summary::new(
        left_only,
        right_only,
        common,
        diff.structure_issues.len(),
        diff.dtype_issues.len(),
        diff.value_mismatches.len(),
    );

    ComparisonReport {
        structure_issues: diff.structure_issues,
        dtype_issues: diff.dtype_issues,
        value_mismatches: diff.value_mismatches,
        summary,
    }
}

/// Issue accumulator for one comparison
struct SheetDiff<'o> {
    options: &'o CompareOptions,
    structure_issues: Vec<StructureIssue>,
    dtype_issues: Vec<DtypeIssue>,
    value_mismatches: Vec<ValueMismatch>,
}

impl SheetDiff<'_> {
    fn structure(&mut self, sheet: &str, issue: StructureIssueKind, detail: String) {
        self.structure_issues.push(StructureIssue {
            sheet: sheet.to_string(),
            issue,
            detail,
        });
    }

    fn counts_detail(&self, left: usize, right: usize) -> String {
        format!(
            "{}={}, {}={}",
            self.options.left_label, left, self.options.right_label, right
        )
    }

    fn compare_sheet(&mut self, sheet: &str, left: &Table, right: &Table) {
        let (structure_before, dtype_before, values_before) = (
            self.structure_issues.len(),
            self.dtype_issues.len(),
            self.value_mismatches.len(),
        );

        if left.row_count() != right.row_count() {
            let detail = self.counts_detail(left.row_count(), right.row_count());
            self.structure(sheet, StructureIssueKind::RowCountMismatch, detail);
        }

        if left.column_count() != right.column_count() {
            let detail = self.counts_detail(left.column_count(), right.column_count());
            self.structure(sheet, StructureIssueKind::ColumnCountMismatch, detail);
        }

        // Order matters: same set in a different order is still flagged
        if left.columns() != right.columns() {
            let detail = format!(
                "{}={}, {}={}",
                self.options.left_label,
                list_repr(left.columns()),
                self.options.right_label,
                list_repr(right.columns())
            );
            self.structure(sheet, StructureIssueKind::ColumnOrderMismatch, detail);
        }

        let shared: Vec<&str> = left
            .columns()
            .iter()
            .map(String::as_str)
            .filter(|c| right.has_column(c))
            .collect();

        for &column in &shared {
            if let (Some(lt), Some(rt)) = (left.column_type(column), right.column_type(column)) {
                if lt != rt {
                    self.dtype_issues.push(DtypeIssue {
                        sheet: sheet.to_string(),
                        column: column.to_string(),
                        left_dtype: lt,
                        right_dtype: rt,
                    });
                }
            }
        }

        let rows = left.row_count().max(right.row_count());
        for row in 0..rows {
            for &column in &shared {
                let a = left.get(row, column);
                let b = right.get(row, column);
                if !equivalent(a, b, self.options.tolerance) {
                    self.value_mismatches.push(ValueMismatch {
                        sheet: sheet.to_string(),
                        row: row + 1,
                        column: column.to_string(),
                        left_value: a.clone(),
                        right_value: b.clone(),
                    });
                }
            }
        }

        debug!(
            "Compared sheet '{}': {} rows x {} shared columns, {} structure / {} dtype / {} value issues",
            sheet,
            rows,
            shared.len(),
            self.structure_issues.len() - structure_before,
            self.dtype_issues.len() - dtype_before,
            self.value_mismatches.len() - values_before,
        );
    }
}

/// Render a column list as `['A', 'B']`
fn list_repr(columns: &[String]) -> String {
    let items: Vec<String> = columns.iter().map(|c| format!("'{}'", c)).collect();
    format!("[{}]", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sheetdiff_core::CellValue;

    fn one_sheet(name: &str, table: Table) -> SheetSet {
        SheetSet::from_sheets([(name, table)]).unwrap()
    }

    #[test]
    fn test_list_repr() {
        assert_eq!(list_repr(&["A".into(), "B".into()]), "['A', 'B']");
        assert_eq!(list_repr(&[]), "[]");
    }

    #[test]
    fn test_column_order_only() {
        let left = one_sheet(
            "S",
            Table::from_rows(["A", "B"], vec![vec![1.into(), 2.into()]]).unwrap(),
        );
        let right = one_sheet(
            "S",
            Table::from_rows(["B", "A"], vec![vec![2.into(), 1.into()]]).unwrap(),
        );

        let report = compare(&left, &right, 1e-9);
        assert_eq!(report.structure_issues.len(), 1);
        assert_eq!(
            report.structure_issues[0].issue,
            StructureIssueKind::ColumnOrderMismatch
        );
        assert_eq!(
            report.structure_issues[0].detail,
            "left=['A', 'B'], right=['B', 'A']"
        );
        // values are matched by name, not position
        assert!(report.value_mismatches.is_empty());
    }

    #[test]
    fn test_value_mismatch_order_is_row_major() {
        let left = one_sheet(
            "S",
            Table::from_rows(
                ["A", "B"],
                vec![vec![1.into(), 1.into()], vec![1.into(), 1.into()]],
            )
            .unwrap(),
        );
        let right = one_sheet(
            "S",
            Table::from_rows(
                ["A", "B"],
                vec![vec![2.into(), 2.into()], vec![2.into(), 2.into()]],
            )
            .unwrap(),
        );

        let report = compare(&left, &right, 1e-9);
        let cells: Vec<(usize, &str)> = report
            .value_mismatches
            .iter()
            .map(|m| (m.row, m.column.as_str()))
            .collect();
        assert_eq!(cells, vec![(1, "A"), (1, "B"), (2, "A"), (2, "B")]);
    }

    #[test]
    fn test_unique_columns_are_not_value_compared() {
        let left = one_sheet(
            "S",
            Table::from_rows(["A", "OnlyLeft"], vec![vec![1.into(), "x".into()]]).unwrap(),
        );
        let right = one_sheet(
            "S",
            Table::from_rows(["A", "OnlyRight"], vec![vec![1.into(), "y".into()]]).unwrap(),
        );

        let report = compare(&left, &right, 1e-9);
        assert!(report.value_mismatches.is_empty());
        assert!(report.dtype_issues.is_empty());
        assert_eq!(report.structure_issues.len(), 1);
    }

    #[test]
    fn test_labels_in_details() {
        let left = one_sheet("S", Table::new(["A"]).unwrap());
        let right = one_sheet(
            "S",
            Table::from_rows(["A"], vec![vec![CellValue::Empty]]).unwrap(),
        );
        let options = CompareOptions::default().labels("SSRS", "PowerBI");

        let report = compare_with_options(&left, &right, &options);
        assert_eq!(report.structure_issues[0].detail, "SSRS=0, PowerBI=1");
        // an empty cell against a missing row is not a mismatch
        assert!(report.value_mismatches.is_empty());
    }
}
