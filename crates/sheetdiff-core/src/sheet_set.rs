//! SheetSet type - every table loaded from one workbook

use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::table::Table;

/// All sheets of one workbook, keyed by exact sheet name
///
/// Sheets keep workbook order for display. Name lookups are exact: no
/// trimming and no case folding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetSet {
    sheets: Vec<(String, Table)>,
}

impl SheetSet {
    /// Create an empty sheet set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a sheet set from (name, table) pairs
    pub fn from_sheets<I, S>(sheets: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Table)>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for (name, table) in sheets {
            set.insert(name, table)?;
        }
        Ok(set)
    }

    /// Add a sheet; names must be unique
    pub fn insert<S: Into<String>>(&mut self, name: S, table: Table) -> Result<()> {
        let name = name.into();
        if self.contains(&name) {
            return Err(Error::DuplicateSheet(name));
        }
        self.sheets.push((name, table));
        Ok(())
    }

    /// Get a sheet by exact name
    pub fn get(&self, name: &str) -> Option<&Table> {
        self.sheets
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, table)| table)
    }

    /// Check if a sheet exists
    pub fn contains(&self, name: &str) -> bool {
        self.sheets.iter().any(|(n, _)| n == name)
    }

    /// Sheet names in workbook order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sheets.iter().map(|(n, _)| n.as_str())
    }

    /// Sheet names as a sorted set
    pub fn name_set(&self) -> BTreeSet<&str> {
        self.names().collect()
    }

    /// Iterate over (name, table) pairs in workbook order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Table)> {
        self.sheets.iter().map(|(n, t)| (n.as_str(), t))
    }

    /// Number of sheets
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    /// Check if there are no sheets
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_keeps_workbook_order() {
        let set = SheetSet::from_sheets([
            ("Tax", Table::default()),
            ("Sales", Table::default()),
        ])
        .unwrap();

        assert_eq!(set.names().collect::<Vec<_>>(), vec!["Tax", "Sales"]);
        assert_eq!(set.name_set().into_iter().collect::<Vec<_>>(), vec!["Sales", "Tax"]);
    }

    #[test]
    fn test_exact_names() {
        let mut set = SheetSet::new();
        set.insert("Sales", Table::default()).unwrap();
        set.insert("sales ", Table::default()).unwrap();

        assert!(set.contains("Sales"));
        assert!(!set.contains("SALES"));
        assert_eq!(set.len(), 2);
        assert!(matches!(
            set.insert("Sales", Table::default()),
            Err(Error::DuplicateSheet(_))
        ));
    }
}
