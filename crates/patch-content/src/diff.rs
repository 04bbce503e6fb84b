//! Line diff previews between the original and edited text

use serde::Serialize;
use similar::{ChangeTag, TextDiff};

/// Lines of context around each hunk in unified output
const CONTEXT_RADIUS: usize = 3;

/// A single changed line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "change")]
pub enum LineChange {
    /// Line present only in the new text, numbered from one in the new text.
    Added { line: usize, content: String },
    /// Line present only in the old text, numbered from one in the old text.
    Removed { line: usize, content: String },
}

/// Result of comparing two texts line by line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiffPreview {
    pub is_equivalent: bool,
    pub changes: Vec<LineChange>,
    /// Similarity ratio (0.0 to 1.0)
    pub similarity: f64,
    #[serde(skip)]
    unified: String,
}

impl DiffPreview {
    /// Diff with generic `a`/`b` headers.
    pub fn compute(old: &str, new: &str) -> Self {
        Self::compute_with_header(old, new, "a", "b")
    }

    /// Diff two texts, labelling the unified output with the given headers.
    pub fn compute_with_header(
        old: &str,
        new: &str,
        old_header: &str,
        new_header: &str,
    ) -> Self {
        if old == new {
            return Self {
                is_equivalent: true,
                changes: Vec::new(),
                similarity: 1.0,
                unified: String::new(),
            };
        }

        let text_diff = TextDiff::from_lines(old, new);
        let similarity = f64::from(text_diff.ratio());

        let changes = text_diff
            .iter_all_changes()
            .filter_map(|change| {
                let content = change.value().trim_end_matches(['\n', '\r']).to_string();
                match change.tag() {
                    ChangeTag::Delete => Some(LineChange::Removed {
                        line: change.old_index().map_or(0, |i| i + 1),
                        content,
                    }),
                    ChangeTag::Insert => Some(LineChange::Added {
                        line: change.new_index().map_or(0, |i| i + 1),
                        content,
                    }),
                    ChangeTag::Equal => None,
                }
            })
            .collect();

        let unified = text_diff
            .unified_diff()
            .context_radius(CONTEXT_RADIUS)
            .header(old_header, new_header)
            .to_string();

        Self {
            is_equivalent: false,
            changes,
            similarity,
            unified,
        }
    }

    pub fn insertions(&self) -> usize {
        self.changes
            .iter()
            .filter(|c| matches!(c, LineChange::Added { .. }))
            .count()
    }

    pub fn deletions(&self) -> usize {
        self.changes
            .iter()
            .filter(|c| matches!(c, LineChange::Removed { .. }))
            .count()
    }

    /// Unified diff text; empty when the texts are equal.
    pub fn unified(&self) -> &str {
        &self.unified
    }
}
