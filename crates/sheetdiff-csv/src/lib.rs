//! # sheetdiff-csv
//!
//! CSV loader for sheetdiff. A CSV file loads as a single sheet named after
//! the file stem.

mod error;
mod options;
mod reader;

pub use error::{CsvError, CsvResult};
pub use options::CsvReadOptions;
pub use reader::CsvReader;
