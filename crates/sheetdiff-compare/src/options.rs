//! Comparison options

/// Default numeric tolerance
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Options for a workbook comparison
#[derive(Debug, Clone, PartialEq)]
pub struct CompareOptions {
    /// Maximum absolute difference for two numbers to count as equal (inclusive)
    pub tolerance: f64,
    /// Name of the left side in issue details (e.g. "SSRS")
    pub left_label: String,
    /// Name of the right side in issue details (e.g. "PowerBI")
    pub right_label: String,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            left_label: "left".into(),
            right_label: "right".into(),
        }
    }
}

impl CompareOptions {
    /// Default options with a custom tolerance
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            tolerance,
            ..Default::default()
        }
    }

    /// Set the side labels
    pub fn labels<L: Into<String>, R: Into<String>>(mut self, left: L, right: R) -> Self {
        self.left_label = left.into();
        self.right_label = right.into();
        self
    }
}
