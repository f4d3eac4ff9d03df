use std::{collections::BTreeMap, fmt::Display};

use log::{debug, info, warn};
use serde::Serialize;

use crate::{
    error::FatalError,
    project::{Line, Program},
    result::Result,
};

use super::{
    directive::{Directive, END_MACRO, END_PROC},
    scope::{scan_scope, ScopeError},
    temps::TempPattern,
};

/// Which opening directive declared a function. A function must be closed by
/// the closing directive of the same kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FunctionKind {
    Procedure,
    Macro,
}

impl FunctionKind {
    pub fn close_directive(&self) -> &'static str {
        match self {
            FunctionKind::Procedure => END_PROC,
            FunctionKind::Macro => END_MACRO,
        }
    }
}

impl Display for FunctionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FunctionKind::Procedure => f.write_str("procedure"),
            FunctionKind::Macro => f.write_str("macro"),
        }
    }
}

/// A procedure or macro along with the instructions that belong directly to it.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionRecord {
    start: usize,
    name: String,
    kind: FunctionKind,
    instructions: Vec<Line>,
    highest_temp: Option<u32>,
}

impl FunctionRecord {
    pub fn new(start: usize, name: &str, kind: FunctionKind, instructions: Vec<Line>) -> Self {
        FunctionRecord {
            start,
            name: name.into(),
            kind,
            instructions,
            highest_temp: None,
        }
    }

    /// Position of the opening directive in the flattened program
    pub fn start(&self) -> usize {
        self.start
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FunctionKind {
        self.kind
    }

    pub fn instructions(&self) -> &[Line] {
        &self.instructions
    }

    /// The highest temp index used by the function's own instructions, `None`
    /// if it uses no temps.
    pub fn highest_temp(&self) -> Option<u32> {
        self.highest_temp
    }
}

/// A function declaration that replaced an earlier one with the same name.
/// Both values are positions of the opening directives in the program.
#[derive(Clone, Debug, PartialEq)]
pub struct Duplicate {
    pub name: String,
    pub replaced: usize,
    pub by: usize,
}

/// Every linted function in the program, keyed and ordered by name.
#[derive(Debug, Default)]
pub struct FunctionMap {
    functions: BTreeMap<String, FunctionRecord>,
    duplicates: Vec<Duplicate>,
}

impl FunctionMap {
    pub fn new() -> FunctionMap {
        FunctionMap {
            functions: BTreeMap::new(),
            duplicates: vec![],
        }
    }

    /// Finds every procedure and macro in `program` and collects the
    /// instructions of each. Functions whose opening line contains
    /// `exclusion_marker` are left out; functions declared inside them are not.
    ///
    /// A later function with the same name as an earlier one replaces it.
    /// A closing directive outside of every function is fatal.
    pub fn extract(program: &Program, exclusion_marker: &str) -> Result<FunctionMap> {
        let mut map = FunctionMap::new();
        let mut depth = 0usize;

        for (idx, line) in program.lines().iter().enumerate() {
            let kind = match Directive::of(line.text()) {
                Directive::Open(kind) => kind,
                Directive::Close(_) if depth == 0 => {
                    return Err(FatalError::UnbalancedClose {
                        at: program.locate(line),
                        line: line.text().into(),
                    })
                }
                Directive::Close(_) => {
                    depth -= 1;
                    continue;
                }
                _ => continue,
            };
            depth += 1;

            if !exclusion_marker.is_empty() && line.text().contains(exclusion_marker) {
                debug!("Skipping excluded {} at {}", kind, program.locate(line));
                continue;
            }

            let name = line
                .text()
                .split_whitespace()
                .nth(1)
                .ok_or_else(|| FatalError::MissingName(program.locate(line)))?;

            let instructions = scan_scope(program.lines(), idx, kind)
                .map_err(|e| scope_failure(e, name, idx, kind, program))?;

            map.insert(FunctionRecord::new(idx, name, kind, instructions), program);
        }

        info!("Extracted {} function(s)", map.len());
        Ok(map)
    }

    /// Fills in the highest temp used by every function.
    pub fn measure_temps(&mut self, pattern: &TempPattern, program: &Program) -> Result<()> {
        for record in self.functions.values_mut() {
            let highest = pattern.highest_in(&record.instructions).map_err(|e| {
                let line = &record.instructions[e.instruction];
                FatalError::MalformedTemp {
                    function: record.name.clone(),
                    at: program.locate(line),
                    line: line.text().into(),
                }
            })?;
            debug!("{} uses temps up to {:?}", record.name, highest);
            record.highest_temp = highest;
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&FunctionRecord> {
        self.functions.get(name)
    }

    /// Functions in name order
    pub fn iter(&self) -> impl Iterator<Item = &FunctionRecord> {
        self.functions.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    pub fn duplicates(&self) -> &[Duplicate] {
        &self.duplicates
    }

    fn insert(&mut self, record: FunctionRecord, program: &Program) {
        let start = record.start;
        if let Some(previous) = self.functions.insert(record.name.clone(), record) {
            warn!(
                "Function {} at {} replaces the declaration at {}",
                previous.name,
                program.locate(&program.lines()[start]),
                program.locate(&program.lines()[previous.start]),
            );
            self.duplicates.push(Duplicate {
                name: previous.name,
                replaced: previous.start,
                by: start,
            });
        }
    }
}

fn scope_failure(
    err: ScopeError,
    name: &str,
    start: usize,
    kind: FunctionKind,
    program: &Program,
) -> FatalError {
    match err {
        ScopeError::Mismatched { at, .. } => {
            let line = &program.lines()[at];
            FatalError::ScopeMismatch {
                function: name.into(),
                expected: kind.close_directive(),
                at: program.locate(line),
                line: line.text().into(),
            }
        }
        ScopeError::Unterminated => FatalError::UnterminatedScope {
            function: name.into(),
            at: program.locate(&program.lines()[start]),
        },
    }
}
