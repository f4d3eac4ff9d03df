use stdext::function_name;

use crate::project::Line;

use super::{directive::Directive, function::FunctionKind};

macro_rules! trace {
    ($line:expr, $depth:expr) => {
        log::trace!("{} <- {} (depth {})", function_name!(), $line.text(), $depth)
    };
}

#[derive(Clone, Debug, PartialEq)]
pub enum ScopeError {
    /// The function was closed with the closing directive of the other kind.
    /// `at` is the index of the offending closing line.
    Mismatched {
        expected: FunctionKind,
        found: FunctionKind,
        at: usize,
    },

    /// The lines ran out before the function was closed
    Unterminated,
}

/// Collects the instructions of the function opened at `lines[start]`.
///
/// Only lines at the function's own nesting depth are returned: the bodies of
/// any procedures or macros declared inside it are skipped, however deeply
/// they nest. Opening and closing directives are never part of the result.
pub fn scan_scope(
    lines: &[Line],
    start: usize,
    kind: FunctionKind,
) -> std::result::Result<Vec<Line>, ScopeError> {
    let mut depth = 0usize;
    let mut instructions = vec![];

    for (idx, line) in lines.iter().enumerate().skip(start + 1) {
        match Directive::of(line.text()) {
            Directive::Open(_) => {
                depth += 1;
                trace!(line, depth);
            }
            Directive::Close(found) if depth == 0 => {
                return if found == kind {
                    Ok(instructions)
                } else {
                    Err(ScopeError::Mismatched {
                        expected: kind,
                        found,
                        at: idx,
                    })
                };
            }
            Directive::Close(_) => {
                depth -= 1;
                trace!(line, depth);
            }
            _ if depth == 0 => instructions.push(line.clone()),
            _ => (),
        }
    }

    Err(ScopeError::Unterminated)
}
