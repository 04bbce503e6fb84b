//! Shared read, edit, write cycle behind every command

use patch_content::{AppliedRule, DiffPreview, Document, Rule};
use patch_fs::{NormalizedPath, TextFile};

use crate::error::Result;

/// What happened to one target file
#[derive(Debug)]
pub struct PatchReport {
    pub target: NormalizedPath,
    pub dry_run: bool,
    pub outcomes: Vec<AppliedRule>,
    pub diff: DiffPreview,
    /// Whether the file on disk was rewritten
    pub written: bool,
}

impl PatchReport {
    pub fn modified(&self) -> bool {
        !self.diff.is_equivalent
    }
}

/// Read `target` once, apply `rules` in memory, and write it back once.
///
/// Nothing is written when a rule fails, when nothing changed, or when
/// `dry_run` is set.
pub fn patch_file(target: &NormalizedPath, rules: &[Rule], dry_run: bool) -> Result<PatchReport> {
    let file = TextFile::read(target.clone())?;
    let mut doc = Document::new(file.content());

    let outcomes = doc.apply_all(rules)?;
    let diff = doc.diff_for(target.as_str());

    let written = if doc.is_modified() && !dry_run {
        file.write_back(doc.source())?;
        true
    } else {
        false
    };

    tracing::debug!(
        target = %target,
        dry_run,
        written,
        insertions = diff.insertions(),
        deletions = diff.deletions(),
        "patch finished"
    );

    Ok(PatchReport {
        target: target.clone(),
        dry_run,
        outcomes,
        diff,
        written,
    })
}
