//! Human-readable comparison summary

use std::fmt::Write;

use sheetdiff::{CompareOptions, ComparisonReport};

/// Render the pass/fail line, the three counts and up to `max_lines` issue
/// lines (structure issues first, then dtype issues, then value mismatches).
pub fn render_summary(
    report: &ComparisonReport,
    options: &CompareOptions,
    max_lines: usize,
) -> String {
    let (l, r) = (&options.left_label, &options.right_label);
    let summary = &report.summary;
    let mut out = String::new();

    if summary.all_matched {
        let _ = writeln!(out, "PASS: {} and {} match", l, r);
    } else {
        let _ = writeln!(out, "FAIL: {} and {} differ", l, r);
    }
    let _ = writeln!(out, "  Structure issues: {}", summary.structure_issue_count);
    let _ = writeln!(out, "  Dtype issues:     {}", summary.dtype_issue_count);
    let _ = writeln!(out, "  Value mismatches: {}", summary.value_mismatch_count);

    let structure = report
        .structure_issues
        .iter()
        .map(|i| format!("[structure] {}: {} ({})", i.sheet, i.issue, i.detail));
    let dtypes = report.dtype_issues.iter().map(|d| {
        format!(
            "[dtype] {} / {}: {}={}, {}={}",
            d.sheet, d.column, l, d.left_dtype, r, d.right_dtype
        )
    });
    let values = report.value_mismatches.iter().map(|v| {
        format!(
            "[value] {} row {} / {}: {}={}, {}={}",
            v.sheet,
            v.row,
            v.column,
            l,
            display(&v.left_value.to_string()),
            r,
            display(&v.right_value.to_string())
        )
    });

    let total = report.issue_count();
    if total > 0 {
        out.push('\n');
    }
    for line in structure.chain(dtypes).chain(values).take(max_lines) {
        out.push_str(&line);
        out.push('\n');
    }
    if total > max_lines {
        let _ = writeln!(out, "... {} more issue(s), see the report", total - max_lines);
    }

    out
}

fn display(value: &str) -> String {
    if value.is_empty() {
        "<empty>".to_string()
    } else {
        format!("{:?}", value)
    }
}
