use crate::{config::Propagation, project::Program};

use super::{
    callgraph::CallGraph, diagnostic::Diagnostic, function::FunctionMap, temps::TempPattern,
};

/// The suffix a function using temps up to `highest` should end with
pub fn suggested_suffix(highest: u32) -> String {
    format!("_T{}", highest)
}

/// Returns `true` if `name` ends with `_T` followed by one or more digits.
pub fn has_temp_suffix(name: &str) -> bool {
    let head = name.trim_end_matches(|c: char| c.is_ascii_digit());
    head.len() < name.len() && head.ends_with("_T")
}

/// Compares every function's suffix against the temps its own instructions use.
pub fn check_suffixes(functions: &FunctionMap, pattern: &TempPattern) -> Vec<Diagnostic> {
    functions
        .iter()
        .filter_map(|f| match f.highest_temp() {
            Some(highest) => {
                let suggested = suggested_suffix(highest);
                if f.name().ends_with(&suggested) {
                    None
                } else {
                    Some(Diagnostic::SuffixMismatch {
                        function: f.name().into(),
                        prefix: pattern.prefix().into(),
                        highest,
                        suggested,
                    })
                }
            }
            None if has_temp_suffix(f.name()) => Some(Diagnostic::UnusedSuffix {
                function: f.name().into(),
            }),
            None => None,
        })
        .collect()
}

/// Flags every function which calls functions that use higher temps than the
/// caller does. Callers and callees which use no temps are ignored.
///
/// With [`Propagation::SingleHop`] only the functions a caller references
/// directly are compared; with [`Propagation::Transitive`] every function
/// reachable from the caller is.
pub fn check_calls(
    functions: &FunctionMap,
    graph: &CallGraph,
    propagation: Propagation,
) -> Vec<Diagnostic> {
    let mut diagnostics = vec![];

    for caller in functions.iter() {
        let own = match caller.highest_temp() {
            Some(own) => own,
            None => continue,
        };

        let callees: Vec<&str> = match propagation {
            Propagation::SingleHop => graph
                .callees(caller.name())
                .iter()
                .map(String::as_str)
                .collect(),
            Propagation::Transitive => graph.reachable(caller.name()),
        };

        let offenders: Vec<(&str, u32)> = callees
            .into_iter()
            .filter_map(|name| {
                functions
                    .get(name)
                    .and_then(|f| f.highest_temp())
                    .filter(|h| *h > own)
                    .map(|h| (name, h))
            })
            .collect();

        if let Some(highest) = offenders.iter().map(|(_, h)| *h).max() {
            diagnostics.push(Diagnostic::UnderDeclaredCalls {
                function: caller.name().into(),
                callees: offenders.iter().map(|(n, _)| n.to_string()).collect(),
                highest,
                suggested: suggested_suffix(highest),
            })
        }
    }

    diagnostics
}

/// One finding for every declaration that replaced an earlier one.
pub fn check_duplicates(functions: &FunctionMap, program: &Program) -> Vec<Diagnostic> {
    functions
        .duplicates()
        .iter()
        .map(|d| Diagnostic::DuplicateFunction {
            function: d.name.clone(),
            replaced: program.locate(&program.lines()[d.replaced]),
            by: program.locate(&program.lines()[d.by]),
        })
        .collect()
}
