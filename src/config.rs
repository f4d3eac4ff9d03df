use std::path::Path;

use serde::Deserialize;

use crate::{error::FatalError, linter::TempPattern, result::Result};

pub const DEFAULT_PLACEHOLDER: char = 'x';
pub const DEFAULT_EXCLUSION_MARKER: &str = "LINTEXCLUDE";

/// How far a caller looks through the call graph when comparing its suffix
/// against the temps used by the functions it calls.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Propagation {
    /// Only functions referenced directly in the caller's own instructions
    SingleHop,

    /// Every function reachable from the caller
    Transitive,
}

impl Default for Propagation {
    fn default() -> Self {
        Propagation::SingleHop
    }
}

/// What happens when two functions are declared with the same name. The
/// later declaration always replaces the earlier one.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    Overwrite,

    /// Also report every replaced declaration as a lint finding
    Warn,
}

impl Default for DuplicatePolicy {
    fn default() -> Self {
        DuplicatePolicy::Overwrite
    }
}

/// Settings for a single lint run. Can be read from a JSON file, in which
/// case any missing field takes its default value.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct LintConfig {
    /// The temp register naming format, ex.: `zp_temp_x`
    pub temp_format: Option<String>,

    /// The character which ends `temp_format` and stands for the temp index
    pub placeholder: char,

    /// Annotation on an opening directive that removes the function from linting
    pub exclusion_marker: String,

    pub propagation: Propagation,
    pub duplicates: DuplicatePolicy,
}

impl Default for LintConfig {
    fn default() -> Self {
        LintConfig {
            temp_format: None,
            placeholder: DEFAULT_PLACEHOLDER,
            exclusion_marker: DEFAULT_EXCLUSION_MARKER.into(),
            propagation: Propagation::default(),
            duplicates: DuplicatePolicy::default(),
        }
    }
}

impl LintConfig {
    pub fn from_file(path: &Path) -> Result<LintConfig> {
        let text = std::fs::read_to_string(path).map_err(|e| FatalError::Read(path.into(), e))?;
        serde_json::from_str(&text).map_err(|e| FatalError::Config(path.into(), e))
    }

    /// Validates the configured temp format and returns the pattern the
    /// temp usage analyzer searches for.
    pub fn temp_pattern(&self) -> Result<TempPattern> {
        let format = self
            .temp_format
            .as_deref()
            .ok_or(FatalError::MissingTempFormat)?;
        TempPattern::from_format(format, self.placeholder)
    }
}
