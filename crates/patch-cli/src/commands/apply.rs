//! apply command
//!
//! Runs every rule in a rule file against one target, all or nothing.

use std::path::Path;

use patch_content::RuleSet;
use patch_fs::NormalizedPath;
use serde_json::json;

use super::{PatchReport, output, patch_file};
use crate::error::{CliError, Result};

/// Run the apply command
pub fn run_apply(rules: &Path, target: Option<&Path>, dry_run: bool, json: bool) -> Result<()> {
    let report = apply_rule_file(rules, target, dry_run)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report_json(&report))?);
    } else {
        output::print_report(&report);
    }
    Ok(())
}

/// Load the rule file, resolve its target, and patch it.
pub fn apply_rule_file(rules: &Path, target: Option<&Path>, dry_run: bool) -> Result<PatchReport> {
    let rules_path = NormalizedPath::new(rules);
    let set = RuleSet::load(&rules_path)?;

    let target = match target {
        Some(path) => NormalizedPath::new(path),
        None => set.resolve_target(&rules_path).ok_or_else(|| {
            CliError::user(format!(
                "{} does not declare a target; pass --target",
                rules_path
            ))
        })?,
    };

    if set.rules.is_empty() {
        tracing::warn!(rules = %rules_path, "rule file has no rules");
    }

    patch_file(&target, &set.rules, dry_run)
}

fn report_json(report: &PatchReport) -> serde_json::Value {
    json!({
        "target": report.target.as_str(),
        "dry_run": report.dry_run,
        "modified": report.modified(),
        "written": report.written,
        "insertions": report.diff.insertions(),
        "deletions": report.diff.deletions(),
        "similarity": report.diff.similarity,
        "rules": report.outcomes,
        "changes": report.diff.changes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    const RULES: &str = r#"
target = "Code.js"

[[rules]]
kind = "remove-block"
name = "drop loop"
start = "configs.forEach("
end = "function "

[[rules]]
kind = "replace"
old = "return 1;"
new = "return 2;"
"#;

    fn setup() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("Code.js"),
            "configs.forEach(c => c.run());\n\nfunction f() {\n  return 1;\n}\n",
        )
        .unwrap();
        fs::write(dir.path().join("fix.toml"), RULES).unwrap();
        dir
    }

    #[test]
    fn applies_rules_to_declared_target() {
        let dir = setup();

        let report = apply_rule_file(&dir.path().join("fix.toml"), None, false).unwrap();

        assert!(report.written);
        assert_eq!(
            fs::read_to_string(dir.path().join("Code.js")).unwrap(),
            "function f() {\n  return 2;\n}\n"
        );
    }

    #[test]
    fn target_flag_overrides_rule_file() {
        let dir = setup();
        let other = dir.path().join("Other.js");
        fs::write(&other, "configs.forEach(x);\nfunction g() {\n  return 1;\n}\n").unwrap();

        apply_rule_file(&dir.path().join("fix.toml"), Some(&other), false).unwrap();

        assert_eq!(
            fs::read_to_string(&other).unwrap(),
            "function g() {\n  return 2;\n}\n"
        );
        assert!(
            fs::read_to_string(dir.path().join("Code.js"))
                .unwrap()
                .contains("return 1;")
        );
    }

    #[test]
    fn missing_target_is_a_user_error() {
        let dir = TempDir::new().unwrap();
        let rules = dir.path().join("fix.toml");
        fs::write(&rules, "[[rules]]\nkind = \"replace\"\nold = \"a\"\nnew = \"b\"\n").unwrap();

        let err = apply_rule_file(&rules, None, false).unwrap_err();

        assert!(matches!(err, CliError::User { .. }));
    }

    #[test]
    fn json_report_lists_rules() {
        let dir = setup();
        let report = apply_rule_file(&dir.path().join("fix.toml"), None, true).unwrap();

        let value = report_json(&report);

        assert_eq!(value["dry_run"], true);
        assert_eq!(value["modified"], true);
        assert_eq!(value["written"], false);
        assert_eq!(value["rules"][0]["name"], "drop loop");
        assert_eq!(value["rules"][0]["edit"]["kind"], "delete");
        assert_eq!(value["rules"][0]["edit"]["location"]["unit"], "lines");
        assert_eq!(value["rules"][0]["edit"]["location"]["range"]["start"], 0);
        assert_eq!(value["rules"][0]["edit"]["location"]["range"]["end"], 2);
        assert_eq!(value["rules"][1]["kind"], "replace");
        assert_eq!(value["rules"][1]["edit"]["new_content"], "return 2;");
        assert_eq!(value["changes"][0]["change"], "removed");
        assert_eq!(value["changes"][0]["line"], 1);
        assert!(value["similarity"].as_f64().unwrap() < 1.0);
    }
}
