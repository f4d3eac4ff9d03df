use serde::Serialize;

use crate::project::Location;

/// A single lint finding. Findings never abort a run; they are collected into
/// a [`Report`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Diagnostic {
    /// The function uses temps but its name does not end with the matching suffix
    SuffixMismatch {
        function: String,
        prefix: String,
        highest: u32,
        suggested: String,
    },

    /// The function carries a temp suffix but uses no temps
    UnusedSuffix { function: String },

    /// The function calls functions which use higher temps than it does
    UnderDeclaredCalls {
        function: String,
        callees: Vec<String>,
        highest: u32,
        suggested: String,
    },

    /// A declaration replaced an earlier one with the same name
    DuplicateFunction {
        function: String,
        replaced: Location,
        by: Location,
    },
}

impl Diagnostic {
    pub fn function(&self) -> &str {
        match self {
            Diagnostic::SuffixMismatch { function, .. }
            | Diagnostic::UnusedSuffix { function }
            | Diagnostic::UnderDeclaredCalls { function, .. }
            | Diagnostic::DuplicateFunction { function, .. } => function,
        }
    }

    /// The line printed for this finding. `exclusion_marker` is named as the
    /// alternative to fixing the suffix.
    pub fn message(&self, exclusion_marker: &str) -> String {
        match self {
            Diagnostic::SuffixMismatch {
                function,
                prefix,
                highest,
                suggested,
            } => format!(
                "[LINT]: function {} uses temps up to {}{}. Either change suffix to {} or use ';{}'.",
                function, prefix, highest, suggested, exclusion_marker
            ),
            Diagnostic::UnusedSuffix { function } => format!(
                "[LINT]: function {} has a suffix implying temporaries while not using any.",
                function
            ),
            Diagnostic::UnderDeclaredCalls {
                function,
                callees,
                suggested,
                ..
            } => format!(
                "[LINT]: function {} calls {}. Either change suffix to {} or use ';{}'.",
                function,
                callees.join(", "),
                suggested,
                exclusion_marker
            ),
            Diagnostic::DuplicateFunction {
                function,
                replaced,
                by,
            } => format!(
                "[LINT]: function {} is defined more than once; the definition at {} replaces the one at {}.",
                function, by, replaced
            ),
        }
    }
}

/// The outcome of linting a program that was structurally sound.
#[derive(Debug, Default)]
pub struct Report {
    functions: usize,
    diagnostics: Vec<Diagnostic>,
    exclusion_marker: String,
}

impl Report {
    pub fn new(functions: usize, exclusion_marker: &str) -> Report {
        Report {
            functions,
            diagnostics: vec![],
            exclusion_marker: exclusion_marker.into(),
        }
    }

    /// Number of functions that were linted
    pub fn functions(&self) -> usize {
        self.functions
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn exclusion_marker(&self) -> &str {
        &self.exclusion_marker
    }

    pub fn has_violations(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn messages(&self) -> Vec<String> {
        self.diagnostics
            .iter()
            .map(|d| d.message(&self.exclusion_marker))
            .collect()
    }

    pub fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, diagnostics: I) {
        self.diagnostics.extend(diagnostics)
    }
}
