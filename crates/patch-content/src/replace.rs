//! Exact-match replacement.
//!
//! The old block doubles as a precondition: if it is not present verbatim
//! the edit fails and nothing is written. Once applied, the old block is
//! gone, so applying the same replacement again fails with
//! [`Error::LiteralNotFound`].

use serde::{Deserialize, Serialize};

use crate::edit::Edit;
use crate::error::{Error, Result};

/// Parameters for swapping one literal block for another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExactReplacement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub old: String,
    pub new: String,
    /// Fail instead of replacing the first of several occurrences.
    #[serde(default)]
    pub unique: bool,
}

impl ExactReplacement {
    pub fn new(old: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            name: None,
            old: old.into(),
            new: new.into(),
            unique: false,
        }
    }

    pub fn unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.old.is_empty() {
            return Err(Error::InvalidRule("old block must not be empty".into()));
        }
        Ok(())
    }

    /// Replace the first occurrence of the old block in `source`.
    ///
    /// Every byte outside the replaced occurrence is kept as is.
    pub fn apply(&self, source: &str) -> Result<(String, Edit)> {
        self.validate()?;

        let Some(at) = source.find(self.old.as_str()) else {
            return Err(Error::LiteralNotFound {
                preview: Error::preview(&self.old),
            });
        };

        let count = count_overlapping(source, &self.old, at);
        if count > 1 {
            if self.unique {
                return Err(Error::AmbiguousLiteral {
                    preview: Error::preview(&self.old),
                    count,
                });
            }
            tracing::warn!(count, "old block occurs more than once, replacing the first");
        }

        let end = at + self.old.len();
        let mut out = String::with_capacity(source.len() - self.old.len() + self.new.len());
        out.push_str(&source[..at]);
        out.push_str(&self.new);
        out.push_str(&source[end..]);

        tracing::info!(
            offset = at,
            removed = self.old.len(),
            inserted = self.new.len(),
            "replaced block"
        );

        Ok((
            out,
            Edit::replace_bytes(at..end, self.old.clone(), self.new.clone()),
        ))
    }
}

/// Occurrences of `needle` in `haystack`, overlapping ones included,
/// starting from the known first match at `first`.
fn count_overlapping(haystack: &str, needle: &str, first: usize) -> usize {
    let step = needle.chars().next().map_or(1, char::len_utf8);
    let mut count = 1;
    let mut from = first + step;
    while let Some(offset) = haystack[from..].find(needle) {
        count += 1;
        from += offset + step;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edit::Location;
    use pretty_assertions::assert_eq;

    const OLD: &str =
        "function runByName(name) {\n const config = configs.find(c => c.name === name);\n}\n";
    const NEW: &str =
        "function runByName(name) {\n\tconst config = getConfigByName(name);\n}\n";

    #[test]
    fn replaces_single_occurrence() {
        let source = format!("// header\n{OLD}\nfunction other() {{}}\n");
        let rule = ExactReplacement::new(OLD, NEW);

        let (out, edit) = rule.apply(&source).unwrap();

        assert_eq!(out, format!("// header\n{NEW}\nfunction other() {{}}\n"));
        assert_eq!(edit.location, Location::Bytes(10..10 + OLD.len()));
        assert_eq!(edit.old_content, OLD);
        assert_eq!(edit.new_content, NEW);
    }

    #[test]
    fn absent_block_fails() {
        let rule = ExactReplacement::new(OLD, NEW);
        let err = rule.apply("function unrelated() {}\n").unwrap_err();
        assert!(matches!(
            err,
            Error::LiteralNotFound { ref preview } if preview == "function runByName(name) {"
        ));
    }

    #[test]
    fn whitespace_differences_do_not_match() {
        let rule = ExactReplacement::new(OLD, NEW);
        let tabbed = OLD.replace(" const", "\tconst");
        assert!(matches!(rule.apply(&tabbed), Err(Error::LiteralNotFound { .. })));
    }

    #[test]
    fn second_application_fails() {
        let rule = ExactReplacement::new(OLD, NEW);
        let (once, _) = rule.apply(OLD).unwrap();
        assert!(matches!(rule.apply(&once), Err(Error::LiteralNotFound { .. })));
    }

    #[test]
    fn only_first_of_many_is_replaced() {
        let rule = ExactReplacement::new("foo", "bar");
        let (out, edit) = rule.apply("foo foo foo").unwrap();
        assert_eq!(out, "bar foo foo");
        assert_eq!(edit.location, Location::Bytes(0..3));
    }

    #[test]
    fn unique_rejects_many() {
        let rule = ExactReplacement::new("foo", "bar").unique(true);
        let err = rule.apply("foo foo").unwrap_err();
        assert!(matches!(err, Error::AmbiguousLiteral { count: 2, .. }));
    }

    #[test]
    fn unique_counts_overlapping_occurrences() {
        let rule = ExactReplacement::new("aa", "b").unique(true);
        let err = rule.apply("aaa").unwrap_err();
        assert!(matches!(err, Error::AmbiguousLiteral { count: 2, .. }));
    }

    #[test]
    fn overlapping_count_handles_multibyte_text() {
        assert_eq!(count_overlapping("ééé", "éé", 0), 2);
        assert_eq!(count_overlapping("xéy", "é", 1), 1);
        assert_eq!(count_overlapping("abab ab", "ab", 0), 3);
    }

    #[test]
    fn crlf_is_preserved_outside_the_match() {
        let rule = ExactReplacement::new("b", "B");
        let (out, _) = rule.apply("a\r\nb\r\nc").unwrap();
        assert_eq!(out, "a\r\nB\r\nc");
    }

    #[test]
    fn empty_old_block_is_invalid() {
        let rule = ExactReplacement::new("", "x");
        assert!(matches!(rule.apply("abc"), Err(Error::InvalidRule(_))));
    }
}
