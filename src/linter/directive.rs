use super::function::FunctionKind;

pub const INCLUDE: &str = ".include";
pub const PROC: &str = ".proc";
pub const END_PROC: &str = ".endproc";
pub const MACRO: &str = ".macro";
pub const END_MACRO: &str = ".endmacro";

/// The structural meaning of a line, decided by its first token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Directive {
    Include,
    Open(FunctionKind),
    Close(FunctionKind),
    Other,
}

impl Directive {
    pub fn of(line: &str) -> Directive {
        if include_argument(line).is_some() {
            return Directive::Include;
        }

        match line.split_whitespace().next() {
            Some(PROC) => Directive::Open(FunctionKind::Procedure),
            Some(MACRO) => Directive::Open(FunctionKind::Macro),
            Some(END_PROC) => Directive::Close(FunctionKind::Procedure),
            Some(END_MACRO) => Directive::Close(FunctionKind::Macro),
            _ => Directive::Other,
        }
    }
}

/// Everything after the include directive on `line`, if the line is one. The
/// file name may follow the directive directly when it is quoted.
pub fn include_argument(line: &str) -> Option<&str> {
    let rest = line.trim_start().strip_prefix(INCLUDE)?;
    match rest.chars().next() {
        None => Some(rest),
        Some(c) if c.is_whitespace() || c == '"' || c == '\'' => Some(rest),
        _ => None,
    }
}
