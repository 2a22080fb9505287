//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;
use sheetdiff_core::{column_names, CellValue, SheetSet, StringPool, Table};

use crate::error::{CsvError, CsvResult};
use crate::options::CsvReadOptions;

/// Sheet name used when the path has no usable file stem
const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// CSV file reader
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file as a one-sheet set named after the file stem
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<SheetSet> {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SHEET_NAME);

        let file = File::open(path)?;
        let table = Self::read(file, options)?;
        debug!(
            "Loaded CSV '{}': {} rows x {} columns",
            path.display(),
            table.row_count(),
            table.column_count()
        );

        let mut sheets = SheetSet::new();
        sheets.insert(name, table)?;
        Ok(sheets)
    }

    /// Read CSV from a reader into a table
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Table> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut pool = StringPool::new();
        let mut records = csv_reader.records();

        let (columns, mut rows) = if options.has_header {
            let header: Vec<CellValue> = match records.next() {
                Some(record) => record?
                    .iter()
                    .map(|field| {
                        if field.is_empty() {
                            CellValue::Empty
                        } else {
                            pool.value(field)
                        }
                    })
                    .collect(),
                None => return Ok(Table::default()),
            };
            (column_names(&header), Vec::new())
        } else {
            (Vec::new(), Vec::new())
        };

        for (i, record) in records.enumerate() {
            let record = record?;
            let row: Vec<CellValue> = record
                .iter()
                .map(|field| {
                    if options.auto_detect_types {
                        Self::detect_type(field, &mut pool)
                    } else if field.is_empty() {
                        CellValue::Empty
                    } else {
                        pool.value(field)
                    }
                })
                .collect();

            if options.has_header && row.len() > columns.len() {
                return Err(CsvError::Parse {
                    row: i + 1,
                    column: columns.len() + 1,
                    message: format!(
                        "expected {} fields, saw {}",
                        columns.len(),
                        row.len()
                    ),
                });
            }
            rows.push(row);
        }

        let columns = if options.has_header {
            columns
        } else {
            let width = rows.iter().map(Vec::len).max().unwrap_or(0);
            (0..width).map(|i| i.to_string()).collect()
        };

        let width = columns.len();
        let mut table = Table::new(columns)?;
        for mut row in rows {
            row.resize(width, CellValue::Empty);
            table.push_row(row)?;
        }

        Ok(table)
    }

    /// Detect the type of a field value
    fn detect_type(field: &str, pool: &mut StringPool) -> CellValue {
        if field.is_empty() {
            return CellValue::Empty;
        }

        let trimmed = field.trim();

        if trimmed.eq_ignore_ascii_case("true") {
            return CellValue::Boolean(true);
        }
        if trimmed.eq_ignore_ascii_case("false") {
            return CellValue::Boolean(false);
        }

        if let Ok(n) = trimmed.parse::<i64>() {
            return CellValue::Int(n);
        }
        if let Ok(n) = trimmed.parse::<f64>() {
            return CellValue::Float(n);
        }

        pool.value(field)
    }
}
