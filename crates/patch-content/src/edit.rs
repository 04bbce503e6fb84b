//! Edit records for content modification.

use std::ops::Range;

use serde::Serialize;

/// The kind of edit operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EditKind {
    /// Content removed with nothing in its place.
    Delete,
    /// Content swapped for new content.
    Replace,
}

/// Where an edit landed in the source it was applied to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "unit", content = "range")]
pub enum Location {
    /// Zero-based, end-exclusive line indices.
    Lines(Range<usize>),
    /// Byte offsets.
    Bytes(Range<usize>),
}

impl Location {
    /// Human-readable form, with lines counted from one.
    pub fn describe(&self) -> String {
        match self {
            Location::Lines(range) if range.is_empty() => {
                format!("line {} (empty)", range.start + 1)
            }
            Location::Lines(range) => format!("lines {}-{}", range.start + 1, range.end),
            Location::Bytes(range) => format!("bytes {}..{}", range.start, range.end),
        }
    }
}

/// An edit applied to document content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edit {
    pub kind: EditKind,
    pub location: Location,
    pub old_content: String,
    pub new_content: String,
}

impl Edit {
    pub fn delete_lines(lines: Range<usize>, old_content: String) -> Self {
        Self {
            kind: EditKind::Delete,
            location: Location::Lines(lines),
            old_content,
            new_content: String::new(),
        }
    }

    pub fn replace_bytes(span: Range<usize>, old_content: String, new_content: String) -> Self {
        Self {
            kind: EditKind::Replace,
            location: Location::Bytes(span),
            old_content,
            new_content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_line_range_is_one_based() {
        assert_eq!(Location::Lines(2..5).describe(), "lines 3-5");
    }

    #[test]
    fn describe_empty_line_range() {
        assert_eq!(Location::Lines(4..4).describe(), "line 5 (empty)");
    }

    #[test]
    fn describe_byte_range() {
        assert_eq!(Location::Bytes(10..20).describe(), "bytes 10..20");
    }
}
