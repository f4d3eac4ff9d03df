use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

/// Source of file text for the include resolver.
pub trait SourceReader {
    fn read(&self, path: &Path) -> Result<String, std::io::Error>;
}

/// Reads source files from the file system.
pub struct FsReader;

impl SourceReader for FsReader {
    fn read(&self, path: &Path) -> Result<String, std::io::Error> {
        std::fs::read_to_string(path)
    }
}

/// Serves source files from memory. Paths are matched exactly as given.
#[derive(Debug, Default)]
pub struct MemoryReader {
    files: HashMap<PathBuf, String>,
}

impl MemoryReader {
    pub fn new() -> MemoryReader {
        MemoryReader {
            files: HashMap::new(),
        }
    }

    pub fn add_file<P: Into<PathBuf>>(&mut self, path: P, text: &str) {
        self.files.insert(path.into(), text.into());
    }

    pub fn with_file<P: Into<PathBuf>>(mut self, path: P, text: &str) -> MemoryReader {
        self.add_file(path, text);
        self
    }
}

impl SourceReader for MemoryReader {
    fn read(&self, path: &Path) -> Result<String, std::io::Error> {
        self.files.get(path).cloned().ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} is not a known source file", path.display()),
            )
        })
    }
}

/// Splits source text into the statements the linter works on. Every
/// returned entry is paired with its 1-based line number in `text`.
///
/// Comments are removed unless the comment contains `exclusion_marker`, in
/// which case the whole line is kept so an opening directive stays marked.
/// Lines are trimmed and empty lines dropped.
pub fn normalize(text: &str, exclusion_marker: &str) -> Vec<(u32, String)> {
    text.lines()
        .enumerate()
        .filter_map(|(idx, raw)| {
            let code = match raw.find(';') {
                Some(pos) if exclusion_marker.is_empty() || !raw[pos..].contains(exclusion_marker) => {
                    &raw[..pos]
                }
                _ => raw,
            };
            let code = code.trim();
            if code.is_empty() {
                None
            } else {
                Some((idx as u32 + 1, code.to_string()))
            }
        })
        .collect()
}
