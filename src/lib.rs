#![allow(dead_code)]

pub mod result;

pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod io;
pub mod linter;
pub mod project;

use std::path::Path;

pub use cli::*;
pub use config::{DuplicatePolicy, LintConfig, Propagation};
pub use error::FatalError;
pub use io::{FsReader, MemoryReader, SourceReader};
pub use linter::{lint, Diagnostic, Report};
pub use project::{resolve_includes, Program};
pub use result::Result;

/// Lints the project whose main source file is `entry`.
///
/// The temp format is validated before any file is read. Every include is
/// resolved before analysis starts, and any fatal error aborts the run
/// without a report.
pub fn run(entry: &Path, config: &LintConfig, reader: &dyn SourceReader) -> Result<Report> {
    let pattern = config.temp_pattern()?;
    let program = resolve_includes(entry, reader, &config.exclusion_marker)?;
    lint(&program, &pattern, config)
}
