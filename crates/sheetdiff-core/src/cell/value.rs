//! Cell value types

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use chrono::{NaiveDateTime, Timelike};

/// Represents the scalar value stored in a cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Missing value (blank cell, or a row past the end of a table)
    Empty,

    /// Boolean value (TRUE/FALSE)
    Boolean(bool),

    /// Integral numeric value
    Int(i64),

    /// Non-integral (or explicitly floating-point) numeric value
    Float(f64),

    /// String value
    String(SharedString),

    /// Date/time value
    DateTime(NaiveDateTime),

    /// Error value (#VALUE!, #REF!, etc.)
    Error(CellError),
}

impl CellValue {
    /// Create a new string value
    pub fn string<S: Into<String>>(s: S) -> Self {
        CellValue::String(SharedString::new(s.into()))
    }

    /// Check if the cell is the missing marker
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Check if the cell represents absence under any of its source
    /// representations: the missing marker, NaN, or a blank string.
    pub fn is_missing_like(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Float(f) => f.is_nan(),
            CellValue::String(s) => s.as_str().trim().is_empty(),
            _ => false,
        }
    }

    /// Interpret the value as a finite real number.
    ///
    /// Booleans count as 0/1 and strings are parsed after trimming. Returns
    /// `None` for anything that does not yield a finite number.
    pub fn as_number(&self) -> Option<f64> {
        let n = match self {
            CellValue::Int(i) => *i as f64,
            CellValue::Float(f) => *f,
            CellValue::Boolean(true) => 1.0,
            CellValue::Boolean(false) => 0.0,
            CellValue::String(s) => s.as_str().trim().parse::<f64>().ok()?,
            _ => return None,
        };
        n.is_finite().then_some(n)
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Empty
    }
}

/// Canonical string form, used for display and for the string tier of the
/// equivalence rule.
impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Boolean(b) => write!(f, "{}", if *b { "True" } else { "False" }),
            CellValue::Int(n) => write!(f, "{}", n),
            CellValue::Float(n) => fmt_float(*n, f),
            CellValue::String(s) => write!(f, "{}", s.as_str()),
            CellValue::DateTime(dt) => fmt_datetime(dt, f),
            CellValue::Error(e) => write!(f, "{}", e),
        }
    }
}

fn fmt_float(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_nan() {
        write!(f, "nan")
    } else if n.is_infinite() {
        write!(f, "{}", if n > 0.0 { "inf" } else { "-inf" })
    } else {
        // Plain decimal, never exponent notation; integral values keep ".0"
        let text = n.to_string();
        if text.contains('.') {
            f.write_str(&text)
        } else {
            write!(f, "{}.0", text)
        }
    }
}

fn fmt_datetime(dt: &NaiveDateTime, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if dt.nanosecond() == 0 {
        write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S"))
    } else {
        write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S%.f"))
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Boolean(b)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Int(n as i64)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Int(n)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Float(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::string(s)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::string(s)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(dt: NaiveDateTime) -> Self {
        CellValue::DateTime(dt)
    }
}

impl From<CellError> for CellValue {
    fn from(e: CellError) -> Self {
        CellValue::Error(e)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(CellValue::Empty, Into::into)
    }
}

/// Spreadsheet error values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellError {
    /// #NULL! - Incorrect range operator
    Null,
    /// #DIV/0! - Division by zero
    Div0,
    /// #VALUE! - Wrong type of argument or operand
    Value,
    /// #REF! - Invalid cell reference
    Ref,
    /// #NAME? - Unrecognized formula name
    Name,
    /// #NUM! - Invalid numeric value
    Num,
    /// #N/A - Value not available
    Na,
    /// #GETTING_DATA - External data is loading
    GettingData,
}

impl CellError {
    /// Get the display string for this error
    pub fn as_str(&self) -> &'static str {
        match self {
            CellError::Null => "#NULL!",
            CellError::Div0 => "#DIV/0!",
            CellError::Value => "#VALUE!",
            CellError::Ref => "#REF!",
            CellError::Name => "#NAME?",
            CellError::Num => "#NUM!",
            CellError::Na => "#N/A",
            CellError::GettingData => "#GETTING_DATA",
        }
    }
}

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Interned string for memory efficiency
///
/// Report exports repeat the same labels, codes and dates down a column.
/// Using Arc<str> allows sharing the same string data across multiple cells.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SharedString(Arc<str>);

impl SharedString {
    /// Create a new shared string
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        SharedString(Arc::from(s.as_ref()))
    }

    /// Get the string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the length of the string
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the string is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SharedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl fmt::Display for SharedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for SharedString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SharedString {
    fn from(s: &str) -> Self {
        SharedString::new(s)
    }
}

impl From<String> for SharedString {
    fn from(s: String) -> Self {
        SharedString::new(s)
    }
}

/// String pool for deduplicating strings
///
/// Loaders intern every string cell so a column of repeated labels is stored
/// once.
#[derive(Debug, Default)]
pub struct StringPool {
    strings: HashMap<Arc<str>, SharedString>,
}

impl StringPool {
    /// Create a new empty string pool
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create a shared string
    pub fn intern<S: AsRef<str>>(&mut self, s: S) -> SharedString {
        let s = s.as_ref();
        if let Some(shared) = self.strings.get(s) {
            shared.clone()
        } else {
            let arc: Arc<str> = Arc::from(s);
            let shared = SharedString(arc.clone());
            self.strings.insert(arc, shared.clone());
            shared
        }
    }

    /// Intern a string and wrap it as a cell value
    pub fn value<S: AsRef<str>>(&mut self, s: S) -> CellValue {
        CellValue::String(self.intern(s))
    }

    /// Get the number of unique strings in the pool
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Check if the pool is empty
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::{CellError, CellValue, SharedString};
    use serde::{Serialize, Serializer};

    impl Serialize for SharedString {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(self.as_str())
        }
    }

    impl Serialize for CellError {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(self.as_str())
        }
    }

    /// Cells serialize as plain JSON scalars; dates use the canonical string.
    impl Serialize for CellValue {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                CellValue::Empty => serializer.serialize_none(),
                CellValue::Boolean(b) => serializer.serialize_bool(*b),
                CellValue::Int(n) => serializer.serialize_i64(*n),
                CellValue::Float(n) if n.is_finite() => serializer.serialize_f64(*n),
                CellValue::Float(_) => serializer.serialize_str(&self.to_string()),
                CellValue::String(s) => s.serialize(serializer),
                CellValue::DateTime(_) => serializer.serialize_str(&self.to_string()),
                CellValue::Error(e) => e.serialize(serializer),
            }
        }
    }
}
