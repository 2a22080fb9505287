//! Table type - one sheet's worth of header + rows

use ahash::AHashMap;

use crate::cell::CellValue;
use crate::column_type::ColumnType;
use crate::error::{Error, Result};

static EMPTY: CellValue = CellValue::Empty;

/// A table loaded from one sheet
///
/// Column order and row order are exactly as they appeared in the source.
/// Every row holds one value per column.
#[derive(Debug, Clone, Default)]
pub struct Table {
    /// Column names in header order
    columns: Vec<String>,
    /// Column name -> position
    index: AHashMap<String, usize>,
    /// Row-major cell values
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Create a table with the given columns and no rows
    pub fn new<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        let mut index = AHashMap::with_capacity(columns.len());
        for (i, name) in columns.iter().enumerate() {
            if index.insert(name.clone(), i).is_some() {
                return Err(Error::DuplicateColumn(name.clone()));
            }
        }

        Ok(Self {
            columns,
            index,
            rows: Vec::new(),
        })
    }

    /// Create a table from columns and rows
    pub fn from_rows<I, S>(columns: I, rows: Vec<Vec<CellValue>>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new(columns)?;
        table.rows.reserve(rows.len());
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    /// Append a row; it must have exactly one value per column
    pub fn push_row(&mut self, row: Vec<CellValue>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(Error::RowWidth {
                row: self.rows.len(),
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Column names in header order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of data rows (the header is not a row)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Check if a column exists
    pub fn has_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Get a row by 0-based index
    pub fn row(&self, index: usize) -> Option<&[CellValue]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Iterate over rows
    pub fn rows(&self) -> impl Iterator<Item = &[CellValue]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Get the value at (row, column name).
    ///
    /// Rows past the end of the table and unknown columns read as
    /// [`CellValue::Empty`].
    pub fn get(&self, row: usize, column: &str) -> &CellValue {
        match (self.rows.get(row), self.column_index(column)) {
            (Some(values), Some(col)) => &values[col],
            _ => &EMPTY,
        }
    }

    /// Iterate over the values of one column, top to bottom
    pub fn column_values<'a>(&'a self, name: &str) -> Option<impl Iterator<Item = &'a CellValue>> {
        let col = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| &row[col]))
    }

    /// Inferred scalar type of a column
    pub fn column_type(&self, name: &str) -> Option<ColumnType> {
        self.column_values(name).map(ColumnType::infer)
    }
}

impl PartialEq for Table {
    fn eq(&self, other: &Self) -> bool {
        self.columns == other.columns && self.rows == other.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sales() -> Table {
        Table::from_rows(
            ["Region", "Amount"],
            vec![
                vec!["North".into(), 100.into()],
                vec!["South".into(), 250.5.into()],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_shape() {
        let table = sales();
        assert_eq!(table.columns(), &["Region".to_string(), "Amount".to_string()]);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_index("Amount"), Some(1));
        assert!(!table.has_column("amount"));
    }

    #[test]
    fn test_get_past_end_is_empty() {
        let table = sales();
        assert_eq!(table.get(1, "Amount"), &CellValue::Float(250.5));
        assert_eq!(table.get(2, "Amount"), &CellValue::Empty);
        assert_eq!(table.get(0, "Missing"), &CellValue::Empty);
    }

    #[test]
    fn test_column_type() {
        let table = sales();
        assert_eq!(table.column_type("Region"), Some(ColumnType::Object));
        assert_eq!(table.column_type("Amount"), Some(ColumnType::Float64));
        assert_eq!(table.column_type("Nope"), None);
    }

    #[test]
    fn test_rejects_bad_shapes() {
        assert!(matches!(
            Table::new(["A", "A"]),
            Err(Error::DuplicateColumn(name)) if name == "A"
        ));

        let mut table = Table::new(["A", "B"]).unwrap();
        assert!(matches!(
            table.push_row(vec![1.into()]),
            Err(Error::RowWidth { row: 0, expected: 2, actual: 1 })
        ));
    }
}
