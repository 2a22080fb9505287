//! Header row normalization shared by the loaders

use ahash::AHashSet;

use crate::cell::CellValue;

/// Turn a raw header row into unique column names.
///
/// Every header is coerced to its canonical string. A blank header at
/// position `i` becomes `Unnamed: i`; repeated names get `.1`, `.2`, ...
/// suffixes in order of appearance, skipping names already taken.
pub fn column_names(header: &[CellValue]) -> Vec<String> {
    let mut taken: AHashSet<String> = AHashSet::with_capacity(header.len());
    let mut names = Vec::with_capacity(header.len());

    for (i, cell) in header.iter().enumerate() {
        let base = match cell {
            CellValue::Empty => format!("Unnamed: {}", i),
            CellValue::String(s) if s.is_empty() => format!("Unnamed: {}", i),
            other => other.to_string(),
        };

        let mut name = base.clone();
        let mut suffix = 1;
        while taken.contains(&name) {
            name = format!("{}.{}", base, suffix);
            suffix += 1;
        }

        taken.insert(name.clone());
        names.push(name);
    }

    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_coerces_non_string_headers() {
        let header = vec![CellValue::Int(2024), CellValue::Float(1.5), "Name".into()];
        assert_eq!(column_names(&header), vec!["2024", "1.5", "Name"]);
    }

    #[test]
    fn test_blank_headers() {
        let header = vec!["A".into(), CellValue::Empty, "".into()];
        assert_eq!(column_names(&header), vec!["A", "Unnamed: 1", "Unnamed: 2"]);
    }

    #[test]
    fn test_duplicate_headers() {
        let header = vec!["A".into(), "A".into(), "B".into(), "A".into(), "A.1".into()];
        assert_eq!(column_names(&header), vec!["A", "A.1", "B", "A.2", "A.1.1"]);
    }
}
