//! textpatch CLI
//!
//! Literal, fail-loud edits to text files: remove a block of lines between
//! two markers, replace an exact block of text, or apply a rule file.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use commands::replace::TextSource;
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Warnings always reach stderr; --verbose adds the debug trail
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(cli.verbose)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| CliError::user(format!("failed to set tracing subscriber: {e}")))?;
    tracing::debug!("Verbose mode enabled");

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} literal text patching", "textpatch".green().bold());
            println!();
            println!("Run {} for available commands.", "textpatch --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::RemoveBlock {
            file,
            start,
            end,
            to_eof,
            dry_run,
        } => commands::run_remove_block(&file, &start, &end, to_eof, dry_run),
        Commands::Replace {
            file,
            old,
            old_file,
            new,
            new_file,
            unique,
            dry_run,
        } => {
            let old = TextSource::from_args(old.as_deref(), old_file.as_deref(), "old")?;
            let new = TextSource::from_args(new.as_deref(), new_file.as_deref(), "new")?;
            commands::run_replace(&file, old, new, unique, dry_run)
        }
        Commands::Apply {
            rules,
            target,
            dry_run,
            json,
        } => commands::run_apply(&rules, target.as_deref(), dry_run, json),
    }
}
