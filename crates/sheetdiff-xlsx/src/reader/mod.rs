//! Workbook reader
//!
//! Parsing is delegated to `calamine`; this module turns each worksheet range
//! into a [`Table`]: the first row of the used range is the header, every
//! other row is data, in file order.

use std::io::{Read, Seek};
use std::path::Path;

use calamine::{
    open_workbook_auto, open_workbook_auto_from_rs, CellErrorType, Data, Range, Reader, Sheets,
};
use chrono::{NaiveDate, NaiveDateTime};
use log::{debug, warn};
use sheetdiff_core::{column_names, CellError, CellValue, SheetSet, StringPool, Table};

use crate::error::XlsxResult;

/// Largest magnitude at which every f64 is still exactly an i64
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Spreadsheet file reader
pub struct XlsxReader;

impl XlsxReader {
    /// Read every sheet of a workbook file
    pub fn read_file<P: AsRef<Path>>(path: P) -> XlsxResult<SheetSet> {
        let path = path.as_ref();
        let mut workbook = open_workbook_auto(path)?;
        debug!("Opened workbook '{}'", path.display());
        Self::read_sheets(&mut workbook)
    }

    /// Read every sheet of an in-memory workbook (format is sniffed)
    pub fn read<R: Read + Seek + Clone>(reader: R) -> XlsxResult<SheetSet> {
        let mut workbook = open_workbook_auto_from_rs(reader)?;
        Self::read_sheets(&mut workbook)
    }

    fn read_sheets<R: Read + Seek>(workbook: &mut Sheets<R>) -> XlsxResult<SheetSet> {
        let mut pool = StringPool::new();
        let mut sheets = SheetSet::new();

        for name in workbook.sheet_names() {
            let range = workbook.worksheet_range(&name)?;
            let table = Self::range_to_table(&range, &mut pool)?;
            debug!(
                "Loaded sheet '{}': {} rows x {} columns",
                name,
                table.row_count(),
                table.column_count()
            );
            sheets.insert(name, table)?;
        }

        Ok(sheets)
    }

    fn range_to_table(range: &Range<Data>, pool: &mut StringPool) -> XlsxResult<Table> {
        let mut rows = range.rows();

        let header: Vec<CellValue> = match rows.next() {
            Some(cells) => cells.iter().map(|c| Self::convert_value(c, pool)).collect(),
            None => return Ok(Table::default()),
        };
        let width = header.len();

        let mut table = Table::new(column_names(&header))?;
        for cells in rows {
            let mut row: Vec<CellValue> = cells
                .iter()
                .take(width)
                .map(|c| Self::convert_value(c, pool))
                .collect();
            row.resize(width, CellValue::Empty);
            table.push_row(row)?;
        }

        Ok(table)
    }

    fn convert_value(data: &Data, pool: &mut StringPool) -> CellValue {
        match data {
            Data::Empty => CellValue::Empty,
            // Treat empty strings as no value
            Data::String(s) if s.is_empty() => CellValue::Empty,
            Data::String(s) => pool.value(s),
            Data::Float(f) => Self::convert_number(*f),
            Data::Int(i) => CellValue::Int(*i),
            Data::Bool(b) => CellValue::Boolean(*b),
            // Durations stay as a number of days
            Data::DateTime(dt) if dt.is_duration() => CellValue::Float(dt.as_f64()),
            // Handles the 1904 date system and the 1900 leap-year bug
            Data::DateTime(dt) => match dt.as_datetime() {
                Some(value) => CellValue::DateTime(value),
                None => CellValue::Float(dt.as_f64()),
            },
            Data::DateTimeIso(s) => match parse_iso_datetime(s) {
                Some(value) => CellValue::DateTime(value),
                None => {
                    warn!("Keeping unparseable ISO date '{}' as text", s);
                    pool.value(s)
                }
            },
            Data::DurationIso(s) => pool.value(s),
            Data::Error(e) => CellValue::Error(Self::convert_error(e)),
        }
    }

    /// Integral numbers load as integers, the rest as floats
    fn convert_number(f: f64) -> CellValue {
        if f.is_finite() && f.fract() == 0.0 && f.abs() <= MAX_EXACT_INT {
            CellValue::Int(f as i64)
        } else {
            CellValue::Float(f)
        }
    }

    fn convert_error(e: &CellErrorType) -> CellError {
        match e {
            CellErrorType::Div0 => CellError::Div0,
            CellErrorType::NA => CellError::Na,
            CellErrorType::Name => CellError::Name,
            CellErrorType::Null => CellError::Null,
            CellErrorType::Num => CellError::Num,
            CellErrorType::Ref => CellError::Ref,
            CellErrorType::GettingData => CellError::GettingData,
            _ => CellError::Value,
        }
    }
}

fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}
