//! Cell equivalence rule

use sheetdiff_core::CellValue;

/// Decide whether two cells hold the same value.
///
/// Three tiers, first match wins:
///
/// 1. Missing-like cells (empty, NaN, blank string) equal each other and
///    nothing else.
/// 2. If both cells read as finite numbers, they are equal when
///    `|a - b| <= tolerance`.
/// 3. Otherwise the trimmed canonical strings must match exactly.
pub fn equivalent(a: &CellValue, b: &CellValue, tolerance: f64) -> bool {
    match (a.is_missing_like(), b.is_missing_like()) {
        (true, true) => return true,
        // keeps NaN from matching the literal string "nan" in tier 3
        (true, false) | (false, true) => return false,
        (false, false) => {}
    }

    if let (Some(x), Some(y)) = (a.as_number(), b.as_number()) {
        return (x - y).abs() <= tolerance;
    }

    a.to_string().trim() == b.to_string().trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const TOL: f64 = 1e-9;

    #[test]
    fn test_missing_forms_are_equivalent() {
        let missing = [
            CellValue::Empty,
            CellValue::Float(f64::NAN),
            CellValue::string(""),
            CellValue::string("   "),
        ];
        for a in &missing {
            for b in &missing {
                assert!(equivalent(a, b, TOL), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn test_missing_matches_nothing_else() {
        let others = [
            CellValue::Int(0),
            CellValue::Boolean(false),
            CellValue::string("None"),
            CellValue::string("nan"),
            CellValue::string("0"),
        ];
        for other in &others {
            assert!(!equivalent(&CellValue::Empty, other, TOL), "{other:?}");
            assert!(!equivalent(other, &CellValue::Float(f64::NAN), TOL), "{other:?}");
            assert!(!equivalent(&CellValue::string(" "), other, TOL), "{other:?}");
        }
    }

    #[test]
    fn test_numeric_tier() {
        assert!(equivalent(&CellValue::Int(3), &CellValue::Float(3.0), TOL));
        assert!(equivalent(&CellValue::string("3"), &CellValue::Float(3.0), TOL));
        assert!(equivalent(&CellValue::string(" 2.50 "), &CellValue::Float(2.5), TOL));
        assert!(equivalent(&CellValue::Boolean(true), &CellValue::Int(1), TOL));
        assert!(!equivalent(&CellValue::Int(3), &CellValue::Int(4), TOL));
        assert!(equivalent(&CellValue::Int(3), &CellValue::Int(4), 1.0));
    }

    #[test]
    fn test_tolerance_is_inclusive() {
        let a = CellValue::Float(1.0);
        let b = CellValue::Float(1.5);
        assert!(equivalent(&a, &b, 0.5));
        assert!(!equivalent(&a, &b, 0.5 - 1e-12));
    }

    #[test]
    fn test_string_tier() {
        assert!(equivalent(&"abc".into(), &" abc ".into(), TOL));
        assert!(!equivalent(&"abc".into(), &"ABC".into(), TOL));
        assert!(!equivalent(&"a b".into(), &"a  b".into(), TOL));
        assert!(!equivalent(&CellValue::Int(3), &"three".into(), TOL));

        let dt = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert!(equivalent(&dt.into(), &"2024-01-01 00:00:00".into(), TOL));
        assert!(!equivalent(&dt.into(), &"2024-01-01".into(), TOL));
    }

    #[test]
    fn test_non_finite_numbers_fall_through() {
        let inf = CellValue::Float(f64::INFINITY);
        assert!(equivalent(&inf, &"inf".into(), TOL));
        assert!(!equivalent(&inf, &CellValue::Float(f64::NEG_INFINITY), TOL));
    }
}
