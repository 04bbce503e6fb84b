//! In-memory document that rules are applied to before anything is written

use serde::Serialize;

use crate::diff::DiffPreview;
use crate::edit::Edit;
use crate::error::{Error, Result};
use crate::rule::Rule;

/// Outcome of one rule in [`Document::apply_all`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedRule {
    /// Position in the rule list, counted from one.
    pub index: usize,
    pub name: Option<String>,
    pub kind: &'static str,
    /// `None` when the rule matched nothing.
    pub edit: Option<Edit>,
}

impl AppliedRule {
    pub fn applied(&self) -> bool {
        self.edit.is_some()
    }
}

/// Text buffer that tracks its original content.
#[derive(Debug, Clone)]
pub struct Document {
    original: String,
    source: String,
}

impl Document {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        Self {
            original: source.clone(),
            source,
        }
    }

    /// Current content
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_modified(&self) -> bool {
        self.source != self.original
    }

    /// Apply a single rule to the current content.
    pub fn apply(&mut self, rule: &Rule) -> Result<Option<Edit>> {
        match rule.apply(&self.source)? {
            Some((source, edit)) => {
                self.source = source;
                Ok(Some(edit))
            }
            None => Ok(None),
        }
    }

    /// Apply rules in order.
    ///
    /// All rules are validated before any is applied. If one fails, the
    /// content is restored to what it was before the call and the error is
    /// returned wrapped in [`Error::Rule`].
    pub fn apply_all(&mut self, rules: &[Rule]) -> Result<Vec<AppliedRule>> {
        for (i, rule) in rules.iter().enumerate() {
            rule.validate().map_err(|e| wrap(i, rule, e))?;
        }

        let checkpoint = self.source.clone();
        let mut outcomes = Vec::with_capacity(rules.len());

        for (i, rule) in rules.iter().enumerate() {
            match self.apply(rule) {
                Ok(edit) => {
                    if edit.is_none() {
                        tracing::info!(index = i + 1, kind = rule.kind(), "rule matched nothing");
                    }
                    outcomes.push(AppliedRule {
                        index: i + 1,
                        name: rule.name().map(str::to_string),
                        kind: rule.kind(),
                        edit,
                    });
                }
                Err(e) => {
                    self.source = checkpoint;
                    return Err(wrap(i, rule, e));
                }
            }
        }

        Ok(outcomes)
    }

    /// Diff between the original and current content.
    pub fn diff(&self) -> DiffPreview {
        DiffPreview::compute(&self.original, &self.source)
    }

    /// Diff labelled with the target's name.
    pub fn diff_for(&self, label: &str) -> DiffPreview {
        DiffPreview::compute_with_header(
            &self.original,
            &self.source,
            label,
            &format!("{label} (patched)"),
        )
    }
}

fn wrap(index: usize, rule: &Rule, source: Error) -> Error {
    Error::Rule {
        index: index + 1,
        name: rule.name().map(str::to_string),
        source: Box::new(source),
    }
}
