use std::{
    fmt::Display,
    path::{Component, Path, PathBuf},
};

use serde::Serialize;

/// Index of a [`SourceFile`] within a [`Program`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileId(usize);

/// A file which contributed lines to a [`Program`], along with the file whose
/// `.include` pulled it in. The entry file has no includer.
#[derive(Debug)]
pub struct SourceFile {
    path: PathBuf,
    included_from: Option<FileId>,
}

impl SourceFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn included_from(&self) -> Option<FileId> {
        self.included_from
    }
}

/// One normalized source statement and where it was read from.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    text: String,
    file: FileId,
    number: u32,
}

impl Line {
    pub fn new(text: &str, file: FileId, number: u32) -> Line {
        Line {
            text: text.into(),
            file,
            number,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn file(&self) -> FileId {
        self.file
    }

    /// 1-based line number within the file the line came from
    pub fn number(&self) -> u32 {
        self.number
    }
}

/// A human readable reference to a line of source code
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Location {
    path: PathBuf,
    line: u32,
}

impl Location {
    pub fn new(path: &Path, line: u32) -> Location {
        Location {
            path: path.into(),
            line,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn line(&self) -> u32 {
        self.line
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.path.display(), self.line)
    }
}

/// The whole assembly project flattened into one ordered sequence of lines.
///
/// Lines keep the order in which the assembler would see them after every
/// `.include` has been replaced by the contents of the included file.
#[derive(Debug, Default)]
pub struct Program {
    files: Vec<SourceFile>,
    lines: Vec<Line>,
}

impl Program {
    pub fn new() -> Program {
        Program {
            files: vec![],
            lines: vec![],
        }
    }

    /// Builds a single file program from already normalized lines.
    pub fn from_lines(path: &Path, lines: Vec<(u32, String)>) -> Program {
        let mut program = Program::new();
        let id = program.add_file(path, None);
        program.lines = lines
            .into_iter()
            .map(|(number, text)| Line::new(&text, id, number))
            .collect();
        program
    }

    pub fn add_file(&mut self, path: &Path, included_from: Option<FileId>) -> FileId {
        self.files.push(SourceFile {
            path: lexical_path(path),
            included_from,
        });
        FileId(self.files.len() - 1)
    }

    pub fn file(&self, id: FileId) -> &SourceFile {
        &self.files[id.0]
    }

    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn locate(&self, line: &Line) -> Location {
        Location::new(self.file(line.file()).path(), line.number())
    }

    /// Returns `true` if `path` is `file` itself or any file on the chain of
    /// includes which led to `file`.
    pub fn is_on_include_chain(&self, file: FileId, path: &Path) -> bool {
        let path = lexical_path(path);
        let mut current = Some(file);
        while let Some(id) = current {
            let f = self.file(id);
            if f.path == path {
                return true;
            }
            current = f.included_from;
        }
        false
    }

    pub(crate) fn append(&mut self, lines: Vec<Line>) {
        self.lines.extend(lines);
    }

    /// Replaces the line at `idx` with `lines`.
    pub(crate) fn splice(&mut self, idx: usize, lines: Vec<Line>) {
        self.lines.splice(idx..=idx, lines);
    }
}

/// Removes `.` components and folds `..` into the preceding component, so
/// that the same file reached through different relative paths compares equal.
fn lexical_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for c in path.components() {
        match c {
            Component::CurDir => (),
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => (),
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}
