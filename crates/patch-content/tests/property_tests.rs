use patch_content::{BlockRemoval, ExactReplacement};
use proptest::prelude::*;

const OLD: &str = "<<OLD>>";

fn join(lines: &[String]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

proptest! {
    #[test]
    fn test_replace_keeps_surroundings(
        prefix in "[a-z \n]{0,40}",
        suffix in "[a-z \n]{0,40}",
        new in "[A-Z\t\n]{0,20}",
    ) {
        let source = format!("{prefix}{OLD}{suffix}");
        let (out, edit) = ExactReplacement::new(OLD, new.clone()).apply(&source).unwrap();

        prop_assert_eq!(out, format!("{prefix}{new}{suffix}"));
        prop_assert_eq!(edit.old_content, OLD);
    }

    #[test]
    fn test_replace_without_old_always_fails(source in "[a-z \n]{0,80}") {
        prop_assert!(ExactReplacement::new(OLD, "x").apply(&source).is_err());
    }

    #[test]
    fn test_remove_drops_exactly_the_block(
        before in prop::collection::vec("[0-9 ]{0,10}", 0..6),
        body in prop::collection::vec("[0-9 ]{0,10}", 0..6),
        after in prop::collection::vec("[a-z ]{0,10}", 0..6),
    ) {
        let mut lines = before.clone();
        lines.push("  START marker".to_string());
        lines.extend(body.iter().cloned());
        lines.push("function next() {}".to_string());
        lines.extend(after.iter().cloned());

        let rule = BlockRemoval::new("START", "function ");
        let (out, _) = rule.apply(&join(&lines)).unwrap().unwrap();

        let mut expected = before.clone();
        expected.push("function next() {}".to_string());
        expected.extend(after.iter().cloned());
        prop_assert_eq!(out, join(&expected));
    }

    #[test]
    fn test_remove_without_start_is_none(source in "[0-9 \n]{0,80}") {
        let rule = BlockRemoval::new("START", "function ");
        prop_assert!(rule.apply(&source).unwrap().is_none());
    }
}
