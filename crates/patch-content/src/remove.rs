//! Line-block removal.
//!
//! Deletes the span of lines that opens with a start marker and runs up to,
//! but not including, the next line that opens with an end marker. Typical
//! use is dropping a stray statement block up to the next top-level
//! `function ` declaration.

use serde::{Deserialize, Serialize};

use crate::edit::Edit;
use crate::error::{Error, Result};

/// Parameters for removing one block of lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockRemoval {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Prefix of the first removed line, matched after trimming whitespace.
    pub start: String,
    /// Prefix of the first kept line after the block, matched at column 0.
    pub end: String,
    /// Delete to end of file when no end line follows the start line.
    #[serde(default)]
    pub to_eof: bool,
}

impl BlockRemoval {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            name: None,
            start: start.into(),
            end: end.into(),
            to_eof: false,
        }
    }

    pub fn to_eof(mut self, to_eof: bool) -> Self {
        self.to_eof = to_eof;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.start.is_empty() {
            return Err(Error::InvalidRule("start marker must not be empty".into()));
        }
        if self.end.is_empty() {
            return Err(Error::InvalidRule("end marker must not be empty".into()));
        }
        Ok(())
    }

    /// Remove the block from `source`.
    ///
    /// Returns `Ok(None)` when no line matches the start marker; the source
    /// is then left alone. On success the result is rejoined with `\n` and
    /// ends in exactly one trailing newline.
    pub fn apply(&self, source: &str) -> Result<Option<(String, Edit)>> {
        self.validate()?;

        let lines: Vec<&str> = source.lines().collect();

        let Some(start) = lines
            .iter()
            .position(|line| line.trim().starts_with(self.start.as_str()))
        else {
            tracing::debug!(marker = %self.start, "start marker not found, nothing to remove");
            return Ok(None);
        };

        let end = match lines[start + 1..]
            .iter()
            .position(|line| line.starts_with(self.end.as_str()))
        {
            Some(offset) => start + 1 + offset,
            None if self.to_eof => lines.len(),
            None => {
                return Err(Error::EndMarkerNotFound {
                    marker: self.end.clone(),
                    start_line: start + 1,
                });
            }
        };

        let removed = join_lines(&lines[start..end]);
        let kept: Vec<&str> = lines[..start]
            .iter()
            .chain(&lines[end..])
            .copied()
            .collect();

        tracing::info!(
            first = start + 1,
            last = end,
            count = end - start,
            "removed block"
        );

        Ok(Some((
            join_lines(&kept),
            Edit::delete_lines(start..end, removed),
        )))
    }
}

/// Join lines with `\n` and terminate with a single newline.
fn join_lines(lines: &[&str]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
