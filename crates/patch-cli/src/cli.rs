//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// textpatch - literal, fail-loud edits to text files
#[derive(Parser, Debug)]
#[command(name = "textpatch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Delete the lines from a start marker up to the next end marker
    ///
    /// The start marker is matched against each line with surrounding
    /// whitespace trimmed; the end marker only at column 0. The end line is
    /// kept. If no line matches the start marker the file is left alone.
    ///
    /// Examples:
    ///   textpatch remove-block Code.js --start 'auditConfigs.forEach(' --end 'function '
    RemoveBlock {
        /// File to edit in place
        file: PathBuf,

        /// Prefix of the first line to delete
        #[arg(long, allow_hyphen_values = true)]
        start: String,

        /// Prefix of the line that ends the block (kept)
        #[arg(long, allow_hyphen_values = true)]
        end: String,

        /// Delete to end of file when no end line follows the start line
        #[arg(long)]
        to_eof: bool,

        /// Show the diff without writing the file
        #[arg(long)]
        dry_run: bool,
    },

    /// Replace the first exact occurrence of a block of text
    ///
    /// Fails without touching the file when the old block is not present
    /// verbatim, so running the same replacement twice fails the second time.
    Replace {
        /// File to edit in place
        file: PathBuf,

        /// Exact text to replace
        #[arg(
            long,
            allow_hyphen_values = true,
            conflicts_with = "old_file",
            required_unless_present = "old_file"
        )]
        old: Option<String>,

        /// Read the exact text to replace from a file
        #[arg(long)]
        old_file: Option<PathBuf>,

        /// Replacement text
        #[arg(
            long,
            allow_hyphen_values = true,
            conflicts_with = "new_file",
            required_unless_present = "new_file"
        )]
        new: Option<String>,

        /// Read the replacement text from a file
        #[arg(long)]
        new_file: Option<PathBuf>,

        /// Fail if the old text occurs more than once
        #[arg(long)]
        unique: bool,

        /// Show the diff without writing the file
        #[arg(long)]
        dry_run: bool,
    },

    /// Apply every rule in a TOML, JSON or YAML rule file
    ///
    /// Rules run in order against an in-memory copy; the target is written
    /// only if all of them succeed.
    Apply {
        /// Rule file
        rules: PathBuf,

        /// Target file, overriding the rule file's `target`
        #[arg(short, long)]
        target: Option<PathBuf>,

        /// Show the diff without writing the file
        #[arg(long)]
        dry_run: bool,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_remove_block() {
        let cli = Cli::parse_from([
            "textpatch",
            "remove-block",
            "Code.js",
            "--start",
            "auditConfigs.forEach(",
            "--end",
            "function ",
        ]);
        assert_eq!(
            cli.command,
            Some(Commands::RemoveBlock {
                file: PathBuf::from("Code.js"),
                start: "auditConfigs.forEach(".into(),
                end: "function ".into(),
                to_eof: false,
                dry_run: false,
            })
        );
    }

    #[test]
    fn replace_requires_old_text() {
        let result = Cli::try_parse_from(["textpatch", "replace", "Code.js", "--new", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn replace_rejects_both_old_sources() {
        let result = Cli::try_parse_from([
            "textpatch", "replace", "Code.js", "--old", "a", "--old-file", "a.txt", "--new", "b",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn hyphen_leading_values_are_accepted() {
        let cli = Cli::try_parse_from([
            "textpatch", "replace", "notes.md", "--old", "- [ ] todo", "--new", "- [x] todo",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Replace { old: Some(ref old), .. }) if old == "- [ ] todo"
        ));
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::parse_from(["textpatch", "apply", "fix.toml", "-v"]);
        assert!(cli.verbose);
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
