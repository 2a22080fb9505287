//! Per-column scalar type inference

use std::fmt;

use crate::cell::CellValue;

/// Scalar type inferred for a whole column.
///
/// The names follow the dataframe conventions report consumers already know
/// (`int64`, `float64`, `bool`, `datetime64[ns]`, `object`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    /// Integers only, no missing cells
    Int64,
    /// Numbers (or integers with missing cells), or nothing but missing cells
    Float64,
    /// Booleans only, no missing cells
    Bool,
    /// Date/times, missing cells allowed
    DateTime,
    /// Strings, errors, mixtures, or a column with no rows
    Object,
}

impl ColumnType {
    /// Infer the type of a column from its cells.
    ///
    /// Empty cells and NaN floats count as missing. Blank strings are
    /// strings here, so they turn a column into `object`.
    pub fn infer<'a, I>(values: I) -> ColumnType
    where
        I: IntoIterator<Item = &'a CellValue>,
    {
        let mut rows = 0usize;
        let mut missing = false;
        let (mut ints, mut floats, mut bools, mut dates, mut other) =
            (false, false, false, false, false);

        for value in values {
            rows += 1;
            match value {
                CellValue::Empty => missing = true,
                CellValue::Float(f) if f.is_nan() => missing = true,
                CellValue::Int(_) => ints = true,
                CellValue::Float(_) => floats = true,
                CellValue::Boolean(_) => bools = true,
                CellValue::DateTime(_) => dates = true,
                CellValue::String(_) | CellValue::Error(_) => other = true,
            }
        }

        if rows == 0 {
            return ColumnType::Object;
        }
        if other {
            return ColumnType::Object;
        }

        match (ints || floats, bools, dates) {
            (false, false, false) => ColumnType::Float64,
            (true, false, false) if ints && !floats && !missing => ColumnType::Int64,
            (true, false, false) => ColumnType::Float64,
            (false, true, false) if !missing => ColumnType::Bool,
            (false, false, true) => ColumnType::DateTime,
            _ => ColumnType::Object,
        }
    }

    /// Get the type name
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Int64 => "int64",
            ColumnType::Float64 => "float64",
            ColumnType::Bool => "bool",
            ColumnType::DateTime => "datetime64[ns]",
            ColumnType::Object => "object",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ColumnType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
