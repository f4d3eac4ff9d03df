//! Checks that the `_T<N>` suffix of every procedure and macro matches the
//! highest temp register it uses, either in its own instructions or in the
//! instructions of the functions it calls.
//!
//! The linter works on a flattened [`Program`]:
//! 1. Every `.proc`/`.macro` is found and the lines belonging directly to it
//!    are collected, excluding the bodies of functions nested inside it.
//! 2. The highest temp index each function's lines reference is measured.
//! 3. Each function's suffix is compared with its own temp usage.
//! 4. Each function's temp usage is compared with that of the functions it
//!    references.
//!
//! Malformed structure (an unbalanced scope, a temp prefix without an
//! index) aborts the run, because the instructions of every function would be
//! suspect. Suffix problems are collected into a [`Report`] instead.
use log::info;

use crate::{
    config::{DuplicatePolicy, LintConfig},
    project::Program,
    result::Result,
};

pub mod callgraph;
pub mod check;
pub mod diagnostic;
pub mod directive;
pub mod function;
pub mod scope;
pub mod temps;


pub use callgraph::CallGraph;
pub use diagnostic::{Diagnostic, Report};
pub use function::{FunctionKind, FunctionMap, FunctionRecord};
pub use temps::TempPattern;

/// Lints every function in `program`.
pub fn lint(program: &Program, pattern: &TempPattern, config: &LintConfig) -> Result<Report> {
    let mut functions = FunctionMap::extract(program, &config.exclusion_marker)?;
    functions.measure_temps(pattern, program)?;
    let graph = CallGraph::build(&functions);

    let mut report = Report::new(functions.len(), &config.exclusion_marker);
    report.extend(check::check_suffixes(&functions, pattern));
    if config.duplicates == DuplicatePolicy::Warn {
        report.extend(check::check_duplicates(&functions, program));
    }
    report.extend(check::check_calls(&functions, &graph, config.propagation));

    info!(
        "Linted {} function(s), {} finding(s)",
        report.functions(),
        report.diagnostics().len()
    );
    Ok(report)
}
