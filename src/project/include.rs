use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::{
    error::FatalError,
    io::{normalize, SourceReader},
    linter::directive::{include_argument, Directive},
    result::Result,
};

use super::{FileId, Line, Program};

/// Reads `entry` and flattens it into a single [`Program`] by replacing each
/// `.include` line with the normalized lines of the file it names.
///
/// Included paths are resolved against the directory containing `entry`. The
/// scan restarts at the position of each replaced include, so includes brought
/// in by an included file are expanded in turn. Any file which cannot be read
/// aborts the whole resolution.
pub fn resolve_includes(
    entry: &Path,
    reader: &dyn SourceReader,
    exclusion_marker: &str,
) -> Result<Program> {
    let base_dir = entry.parent().map(Path::to_path_buf).unwrap_or_default();

    let mut program = Program::new();
    let entry_id = program.add_file(entry, None);
    let lines = read_lines(reader, entry, entry_id, exclusion_marker)?;
    program.append(lines);

    let mut idx = 0;
    while idx < program.len() {
        let line = &program.lines()[idx];
        if Directive::of(line.text()) != Directive::Include {
            idx += 1;
            continue;
        }

        let from = line.file();
        let at = program.locate(line);
        let target = include_target(line.text())
            .ok_or_else(|| FatalError::MissingIncludeFile(at.clone()))?
            .to_string();

        let path = if base_dir.as_os_str().is_empty() {
            PathBuf::from(&target)
        } else {
            base_dir.join(&target)
        };

        if program.is_on_include_chain(from, &path) {
            return Err(FatalError::IncludeCycle { path, at });
        }

        debug!("Resolving include {} at {}", path.display(), at);
        let id = program.add_file(&path, Some(from));
        let lines = read_lines(reader, &path, id, exclusion_marker)?;
        program.splice(idx, lines);
    }

    info!(
        "Flattened {} file(s) into {} lines",
        program.files().len(),
        program.len()
    );
    Ok(program)
}

fn read_lines(
    reader: &dyn SourceReader,
    path: &Path,
    id: FileId,
    exclusion_marker: &str,
) -> Result<Vec<Line>> {
    let text = reader
        .read(path)
        .map_err(|e| FatalError::Read(path.into(), e))?;
    Ok(normalize(&text, exclusion_marker)
        .into_iter()
        .map(|(number, text)| Line::new(&text, id, number))
        .collect())
}

/// The file name given to an include directive, without surrounding quotes.
fn include_target(line: &str) -> Option<&str> {
    let rest = include_argument(line)?;
    let rest = match rest.find(';') {
        Some(pos) => &rest[..pos],
        None => rest,
    };
    let rest = strip_quotes(rest.trim());
    if rest.is_empty() {
        None
    } else {
        Some(rest)
    }
}

fn strip_quotes(s: &str) -> &str {
    match (s.as_bytes().first(), s.as_bytes().last()) {
        (Some(b'"'), Some(b'"')) | (Some(b'\''), Some(b'\'')) if s.len() >= 2 => &s[1..s.len() - 1],
        _ => s,
    }
}
