//! remove-block command

use std::path::Path;

use patch_content::{BlockRemoval, Rule};
use patch_fs::NormalizedPath;

use super::{output, patch_file};
use crate::error::Result;

/// Run the remove-block command
pub fn run_remove_block(
    file: &Path,
    start: &str,
    end: &str,
    to_eof: bool,
    dry_run: bool,
) -> Result<()> {
    let rule = Rule::from(BlockRemoval::new(start, end).to_eof(to_eof));
    let report = patch_file(&NormalizedPath::new(file), &[rule], dry_run)?;
    output::print_report(&report);
    Ok(())
}
