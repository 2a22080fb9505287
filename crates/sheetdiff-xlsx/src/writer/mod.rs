//! XLSX writer
//!
//! [`TableWriter`] writes named tables as a minimal SpreadsheetML package
//! (one worksheet per table, header in row 1, no styles). [`ReportWriter`]
//! lays a [`ComparisonReport`] out as four such tables.

use std::fs::{self, File};
use std::io::{Seek, Write};
use std::path::Path;

use log::debug;
use quick_xml::escape::escape;
use sheetdiff_compare::ComparisonReport;
use sheetdiff_core::{CellValue, Table};

use crate::error::{XlsxError, XlsxResult};

/// Sheet names of a report workbook, in workbook order
pub const REPORT_SHEETS: [&str; 4] = [
    "Summary",
    "Structure_Issues",
    "Dtype_Issues",
    "Value_Mismatches",
];

/// Writes a comparison report as an XLSX workbook
pub struct ReportWriter;

impl ReportWriter {
    /// Write a report to a file path, creating parent directories as needed.
    /// An existing file is overwritten.
    pub fn write_file<P: AsRef<Path>>(report: &ComparisonReport, path: P) -> XlsxResult<()> {
        let path = path.as_ref();
        if path.file_name().is_none() {
            return Err(XlsxError::InvalidPath(path.to_path_buf()));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(path)?;
        Self::write(report, file)?;
        debug!("Wrote report to '{}'", path.display());
        Ok(())
    }

    /// Write a report to a writer
    pub fn write<W: Write + Seek>(report: &ComparisonReport, writer: W) -> XlsxResult<()> {
        let tables = Self::report_tables(report)?;
        let sheets: Vec<(&str, &Table)> = REPORT_SHEETS.iter().copied().zip(tables.iter()).collect();
        TableWriter::write(&sheets, writer)
    }

    /// Lay the report out as the four report tables, in [`REPORT_SHEETS`] order.
    /// Every table keeps its header even when it has no rows.
    pub fn report_tables(report: &ComparisonReport) -> XlsxResult<[Table; 4]> {
        let s = &report.summary;
        let summary = Table::from_rows(
            [
                "left_only_sheets",
                "right_only_sheets",
                "common_sheets",
                "structure_issue_count",
                "dtype_issue_count",
                "value_mismatch_count",
                "all_matched",
            ],
            vec![vec![
                s.left_only_sheets.join(", ").into(),
                s.right_only_sheets.join(", ").into(),
                s.common_sheets.join(", ").into(),
                count(s.structure_issue_count),
                count(s.dtype_issue_count),
                count(s.value_mismatch_count),
                s.all_matched.into(),
            ]],
        )?;

        let structure = Table::from_rows(
            ["sheet", "issue", "detail"],
            report
                .structure_issues
                .iter()
                .map(|i| {
                    vec![
                        i.sheet.as_str().into(),
                        i.issue.as_str().into(),
                        i.detail.as_str().into(),
                    ]
                })
                .collect(),
        )?;

        let dtypes = Table::from_rows(
            ["sheet", "column", "left_dtype", "right_dtype"],
            report
                .dtype_issues
                .iter()
                .map(|d| {
                    vec![
                        d.sheet.as_str().into(),
                        d.column.as_str().into(),
                        d.left_dtype.as_str().into(),
                        d.right_dtype.as_str().into(),
                    ]
                })
                .collect(),
        )?;

        let values = Table::from_rows(
            ["sheet", "row", "column", "left_value", "right_value"],
            report
                .value_mismatches
                .iter()
                .map(|v| {
                    vec![
                        v.sheet.as_str().into(),
                        count(v.row),
                        v.column.as_str().into(),
                        v.left_value.clone(),
                        v.right_value.clone(),
                    ]
                })
                .collect(),
        )?;

        Ok([summary, structure, dtypes, values])
    }
}

fn count(n: usize) -> CellValue {
    CellValue::Int(n as i64)
}

/// Writes named tables as an XLSX workbook
pub struct TableWriter;

impl TableWriter {
    /// Write (sheet name, table) pairs to a writer, in the given order
    pub fn write<W: Write + Seek>(sheets: &[(&str, &Table)], writer: W) -> XlsxResult<()> {
        let mut zip = zip::ZipWriter::new(writer);

        Self::write_content_types(&mut zip, sheets.len())?;
        Self::write_root_rels(&mut zip)?;
        Self::write_workbook_xml(&mut zip, sheets)?;
        Self::write_workbook_rels(&mut zip, sheets.len())?;

        for (i, (_, table)) in sheets.iter().enumerate() {
            Self::write_worksheet(&mut zip, i, table)?;
        }

        zip.finish()?;
        Ok(())
    }

    fn options() -> zip::write::SimpleFileOptions {
        zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated)
    }

    fn write_content_types<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        sheet_count: usize,
    ) -> XlsxResult<()> {
        zip.start_file("[Content_Types].xml", Self::options())?;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Default Extension="xml" ContentType="application/xml"/>
    <Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>"#,
        );

        for i in 0..sheet_count {
            content.push_str(&format!(
                r#"
    <Override PartName="/xl/worksheets/sheet{}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#,
                i + 1
            ));
        }

        content.push_str("\n</Types>");

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_root_rels<W: Write + Seek>(zip: &mut zip::ZipWriter<W>) -> XlsxResult<()> {
        zip.start_file("_rels/.rels", Self::options())?;

        let content = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#;

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_workbook_xml<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        sheets: &[(&str, &Table)],
    ) -> XlsxResult<()> {
        zip.start_file("xl/workbook.xml", Self::options())?;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
    <sheets>"#,
        );

        for (i, (name, _)) in sheets.iter().enumerate() {
            content.push_str(&format!(
                r#"
        <sheet name="{}" sheetId="{}" r:id="rId{}"/>"#,
                escape(*name),
                i + 1,
                i + 1
            ));
        }

        content.push_str(
            r#"
    </sheets>
</workbook>"#,
        );

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_workbook_rels<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        sheet_count: usize,
    ) -> XlsxResult<()> {
        zip.start_file("xl/_rels/workbook.xml.rels", Self::options())?;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );

        for i in 0..sheet_count {
            content.push_str(&format!(
                r#"
    <Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{}.xml"/>"#,
                i + 1,
                i + 1
            ));
        }

        content.push_str("\n</Relationships>");

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_worksheet<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        index: usize,
        table: &Table,
    ) -> XlsxResult<()> {
        zip.start_file(format!("xl/worksheets/sheet{}.xml", index + 1), Self::options())?;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
    <sheetData>"#,
        );

        // Header row
        content.push_str("\n        <row r=\"1\">");
        for (col, name) in table.columns().iter().enumerate() {
            Self::push_string_cell(&mut content, &cell_ref(0, col), name);
        }
        content.push_str("\n        </row>");

        for (i, row) in table.rows().enumerate() {
            let row_number = i + 1;
            content.push_str(&format!("\n        <row r=\"{}\">", row_number + 1));
            for (col, value) in row.iter().enumerate() {
                Self::push_cell(&mut content, &cell_ref(row_number, col), value);
            }
            content.push_str("\n        </row>");
        }

        content.push_str("\n    </sheetData>\n</worksheet>");

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn push_cell(content: &mut String, cell_ref: &str, value: &CellValue) {
        match value {
            CellValue::Empty => {}
            CellValue::Int(n) => {
                content.push_str(&format!("\n            <c r=\"{}\"><v>{}</v></c>", cell_ref, n));
            }
            CellValue::Float(n) if n.is_finite() => {
                content.push_str(&format!("\n            <c r=\"{}\"><v>{}</v></c>", cell_ref, n));
            }
            CellValue::Boolean(b) => {
                content.push_str(&format!(
                    "\n            <c r=\"{}\" t=\"b\"><v>{}</v></c>",
                    cell_ref,
                    if *b { 1 } else { 0 }
                ));
            }
            // Non-finite floats, strings, dates and errors are written as text
            other => Self::push_string_cell(content, cell_ref, &other.to_string()),
        }
    }

    fn push_string_cell(content: &mut String, cell_ref: &str, text: &str) {
        content.push_str(&format!(
            "\n            <c r=\"{}\" t=\"inlineStr\"><is><t xml:space=\"preserve\">{}</t></is></c>",
            cell_ref,
            escape(text)
        ));
    }
}

/// A1-style reference for a 0-based (row, column)
fn cell_ref(row: usize, col: usize) -> String {
    format!("{}{}", column_letters(col), row + 1)
}

/// Convert a 0-based column index to letters (0 = A, 25 = Z, 26 = AA)
fn column_letters(col: usize) -> String {
    let mut result = String::new();
    let mut n = col + 1;

    while n > 0 {
        n -= 1;
        let c = ((n % 26) as u8 + b'A') as char;
        result.insert(0, c);
        n /= 26;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_letters() {
        assert_eq!(column_letters(0), "A");
        assert_eq!(column_letters(25), "Z");
        assert_eq!(column_letters(26), "AA");
        assert_eq!(column_letters(701), "ZZ");
        assert_eq!(column_letters(702), "AAA");
        assert_eq!(cell_ref(0, 2), "C1");
    }

    #[test]
    fn test_cells_are_escaped() {
        let mut content = String::new();
        TableWriter::push_cell(&mut content, "A2", &CellValue::string("a<b & \"c\""));
        assert!(content.contains("a&lt;b &amp; &quot;c&quot;"));
        assert!(content.contains("t=\"inlineStr\""));
    }

    #[test]
    fn test_cell_kinds() {
        let mut content = String::new();
        TableWriter::push_cell(&mut content, "A1", &CellValue::Empty);
        assert!(content.is_empty());

        TableWriter::push_cell(&mut content, "B1", &CellValue::Boolean(true));
        assert!(content.contains("<c r=\"B1\" t=\"b\"><v>1</v></c>"));

        TableWriter::push_cell(&mut content, "C1", &CellValue::Float(f64::NAN));
        assert!(content.contains("<t xml:space=\"preserve\">nan</t>"));
    }
}
