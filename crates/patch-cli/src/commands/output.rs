//! Human-readable report output

use colored::Colorize;

use super::PatchReport;

/// Print what a patch did, or would do under `--dry-run`
pub fn print_report(report: &PatchReport) {
    for outcome in &report.outcomes {
        let label = outcome
            .name
            .clone()
            .unwrap_or_else(|| format!("rule #{}", outcome.index));
        match &outcome.edit {
            Some(edit) => println!(
                "{} {} {} ({})",
                "applied".green(),
                outcome.kind.cyan(),
                label,
                edit.location.describe()
            ),
            None => println!(
                "{} {} {} (start marker not found)",
                "skipped".yellow(),
                outcome.kind.cyan(),
                label
            ),
        }
    }

    if !report.modified() {
        println!(
            "{} {} unchanged",
            "OK".green().bold(),
            report.target.as_str().yellow()
        );
        return;
    }

    if report.dry_run {
        println!();
        print_unified(report.diff.unified());
        println!(
            "{} {} not written: {} insertion(s), {} deletion(s), {:.0}% similar",
            "Dry run".blue().bold(),
            report.target.as_str().yellow(),
            report.diff.insertions(),
            report.diff.deletions(),
            report.diff.similarity * 100.0
        );
    } else {
        println!(
            "{} {}: {} insertion(s), {} deletion(s)",
            "Patched".green().bold(),
            report.target.as_str().yellow(),
            report.diff.insertions(),
            report.diff.deletions()
        );
    }
}

fn print_unified(diff: &str) {
    for line in diff.lines() {
        if line.starts_with("+++") || line.starts_with("---") {
            println!("{}", line.bold());
        } else if line.starts_with("@@") {
            println!("{}", line.cyan());
        } else if line.starts_with('+') {
            println!("{}", line.green());
        } else if line.starts_with('-') {
            println!("{}", line.red());
        } else {
            println!("{}", line);
        }
    }
}
