//! replace command

use std::path::Path;

use patch_content::{ExactReplacement, Rule};
use patch_fs::{NormalizedPath, io};

use super::{output, patch_file};
use crate::error::{CliError, Result};

/// Literal text given inline or as a path to read it from
#[derive(Debug, Clone, Copy)]
pub enum TextSource<'a> {
    Inline(&'a str),
    File(&'a Path),
}

impl TextSource<'_> {
    fn resolve(self) -> Result<String> {
        match self {
            TextSource::Inline(text) => Ok(text.to_string()),
            TextSource::File(path) => Ok(io::read_text(&NormalizedPath::new(path))?),
        }
    }

    /// Pick whichever of the two clap options was given.
    pub fn from_args<'a>(
        inline: Option<&'a str>,
        file: Option<&'a Path>,
        what: &str,
    ) -> Result<TextSource<'a>> {
        match (inline, file) {
            (Some(text), None) => Ok(TextSource::Inline(text)),
            (None, Some(path)) => Ok(TextSource::File(path)),
            _ => Err(CliError::user(format!(
                "pass exactly one of --{what} or --{what}-file"
            ))),
        }
    }
}

/// Run the replace command
pub fn run_replace(
    file: &Path,
    old: TextSource<'_>,
    new: TextSource<'_>,
    unique: bool,
    dry_run: bool,
) -> Result<()> {
    let rule = Rule::from(ExactReplacement::new(old.resolve()?, new.resolve()?).unique(unique));
    let report = patch_file(&NormalizedPath::new(file), &[rule], dry_run)?;
    output::print_report(&report);
    Ok(())
}
