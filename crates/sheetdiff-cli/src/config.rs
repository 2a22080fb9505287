//! Config file handling

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use sheetdiff::DEFAULT_TOLERANCE;

/// Config file looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "sheetdiff.json";

/// Settings read from a JSON config file. Missing keys take defaults and
/// unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub numeric_tolerance: f64,
    /// Report directory; relative paths resolve against the home directory
    pub report_dir: PathBuf,
    pub left_label: String,
    pub right_label: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            numeric_tolerance: DEFAULT_TOLERANCE,
            report_dir: PathBuf::from("Documents").join("Excel_Comparisons"),
            left_label: "left".to_string(),
            right_label: "right".to_string(),
        }
    }
}

impl Config {
    /// Load the config. An explicit path must exist and parse; otherwise
    /// `sheetdiff.json` in the working directory is used if present.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    Self::from_file(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config '{}'", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config '{}'", path.display()))?;
        tracing::debug!("Loaded config from '{}'", path.display());
        Ok(config)
    }

    /// Absolute report directory
    pub fn resolved_report_dir(&self) -> PathBuf {
        if self.report_dir.is_absolute() {
            return self.report_dir.clone();
        }
        match home_dir() {
            Some(home) => home.join(&self.report_dir),
            None => self.report_dir.clone(),
        }
    }
}

fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
}
