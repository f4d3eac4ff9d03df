use std::{fmt::Display, path::PathBuf};

use crate::project::Location;

/// Every error which aborts a lint run.
///
/// None of these are lint findings: they mean either the tool was configured
/// incorrectly or the source is too malformed for any function's instruction
/// set to be trusted. After one of these is raised no report is produced.
#[derive(Debug)]
pub enum FatalError {
    /// A source or config file could not be read
    Read(PathBuf, std::io::Error),

    /// The config file was read but is not a valid configuration
    Config(PathBuf, serde_json::Error),

    MissingTempFormat,
    NoPlaceholder {
        format: String,
        placeholder: char,
    },
    EmptyTempPrefix(String),

    MissingIncludeFile(Location),
    IncludeCycle {
        path: PathBuf,
        at: Location,
    },

    /// An opening directive without a function name after it
    MissingName(Location),

    /// A function was closed by the closing directive of the other kind
    ScopeMismatch {
        function: String,
        expected: &'static str,
        at: Location,
        line: String,
    },

    /// A closing directive with no open function to close
    UnbalancedClose {
        at: Location,
        line: String,
    },
    /// The source ended while the function was still open
    UnterminatedScope {
        function: String,
        at: Location,
    },

    /// The temp prefix was found but is not followed by a digit
    MalformedTemp {
        function: String,
        at: Location,
        line: String,
    },
}

impl Display for FatalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use FatalError::*;
        match self {
            Read(path, e) => write!(f, "Couldn't read {}: {}", path.display(), e),
            Config(path, e) => write!(f, "Invalid config file {}: {}", path.display(), e),
            MissingTempFormat => write!(
                f,
                "No temp format given. Expected a format ending in the placeholder, ex.: zp_temp_x"
            ),
            NoPlaceholder {
                format,
                placeholder,
            } => write!(f, "TempFormat {} does not end with {}", format, placeholder),
            EmptyTempPrefix(format) => write!(
                f,
                "TempFormat {} has nothing in front of the placeholder",
                format
            ),
            MissingIncludeFile(at) => write!(f, "{}: .include is missing a file name", at),
            IncludeCycle { path, at } => write!(
                f,
                "{}: {} includes itself through its own include chain",
                at,
                path.display()
            ),
            MissingName(at) => write!(f, "{}: function declaration is missing a name", at),
            ScopeMismatch {
                function,
                expected,
                at,
                line,
            } => write!(
                f,
                "{}: scope of {} ended unexpectedly with `{}` (expected {})",
                at, function, line, expected
            ),
            UnbalancedClose { at, line } => {
                write!(f, "{}: `{}` closes a scope that was never opened", at, line)
            }
            UnterminatedScope { function, at } => write!(
                f,
                "{}: scope of {} is never closed before the end of the source",
                at, function
            ),
            MalformedTemp { function, at, line } => write!(
                f,
                "{}: failed to resolve highest temp value for {}: expected a digit after the temp prefix in `{}`",
                at, function, line
            ),
        }
    }
}

impl std::error::Error for FatalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FatalError::Read(_, e) => Some(e),
            FatalError::Config(_, e) => Some(e),
            _ => None,
        }
    }
}
