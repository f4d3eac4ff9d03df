use crate::{error::FatalError, project::Line, result::Result};

/// The temp prefix was found in an instruction without a digit after it.
#[derive(Clone, Debug, PartialEq)]
pub struct TempError {
    /// Index of the instruction within the scanned sequence
    pub instruction: usize,

    /// Byte offset of the prefix within that instruction
    pub column: usize,
}

/// The naming pattern of temp registers: a fixed prefix followed by a one or
/// two digit index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TempPattern {
    prefix: String,
}

impl TempPattern {
    /// Builds the pattern from a format such as `zp_temp_x`, where the
    /// trailing `placeholder` stands for the index.
    pub fn from_format(format: &str, placeholder: char) -> Result<TempPattern> {
        let prefix = format
            .strip_suffix(placeholder)
            .ok_or_else(|| FatalError::NoPlaceholder {
                format: format.into(),
                placeholder,
            })?;

        if prefix.is_empty() {
            return Err(FatalError::EmptyTempPrefix(format.into()));
        }

        Ok(TempPattern {
            prefix: prefix.into(),
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Highest temp index referenced anywhere in `text`. Every occurrence of
    /// the prefix counts, not just the first. On failure the error holds the
    /// byte offset of the malformed occurrence.
    pub fn highest_in_line(&self, text: &str) -> std::result::Result<Option<u32>, usize> {
        let mut highest = None;
        for (pos, _) in text.match_indices(self.prefix.as_str()) {
            let index = temp_index(&text[pos + self.prefix.len()..]).ok_or(pos)?;
            highest = highest.max(Some(index));
        }
        Ok(highest)
    }

    /// Highest temp index referenced by any of `instructions`, or `None` if
    /// no temp is referenced at all.
    pub fn highest_in(&self, instructions: &[Line]) -> std::result::Result<Option<u32>, TempError> {
        let mut highest = None;
        for (idx, line) in instructions.iter().enumerate() {
            let found = self
                .highest_in_line(line.text())
                .map_err(|column| TempError {
                    instruction: idx,
                    column,
                })?;
            highest = highest.max(found);
        }
        Ok(highest)
    }
}

/// Reads the index at the start of `rest`: one digit, or two when the second
/// character is also a digit. Anything after the second digit is ignored.
fn temp_index(rest: &str) -> Option<u32> {
    let mut digits = rest.chars().map_while(|c| c.to_digit(10));
    let first = digits.next()?;
    Some(match digits.next() {
        Some(second) => first * 10 + second,
        None => first,
    })
}
