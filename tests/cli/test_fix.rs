// Tests for `regexmap fix` — repaired table output

use crate::common::{run, stdout_of, write_table};

#[test]
fn test_fix_prints_repaired_document() {
    let (dir, path) = write_table(
        "map.json",
        r#"{"aceJump.finder.charRegexMap": {"a": "[aA1]", "c": "[cCk]"}}"#,
    );
    let out = run(dir.path(), &["fix", path.to_str().unwrap()]);
    assert!(out.status.success());

    let val: serde_json::Value = serde_json::from_str(&stdout_of(&out)).unwrap();
    assert_eq!(
        val,
        serde_json::json!({"aceJump.finder.charRegexMap": {"a": "[aA1]", "c": "[cC]"}})
    );
}

#[test]
fn test_fix_preserves_order_and_non_ascii() {
    let (dir, path) = write_table(
        "map.json",
        r#"{"aceJump.finder.charRegexMap": {"z": "[zZずズ]", "a": "[aAあxア]"}}"#,
    );
    let out = run(dir.path(), &["fix", path.to_str().unwrap()]);
    let stdout = stdout_of(&out);
    assert!(stdout.contains("\"[aAあア]\""), "stdout: {stdout}");
    let z = stdout.find("\"z\"").unwrap();
    let a = stdout.find("\"a\"").unwrap();
    assert!(z < a, "key order not preserved: {stdout}");
}

#[test]
fn test_fix_clean_table_prints_nothing() {
    let (dir, path) = write_table(
        "map.json",
        r#"{"aceJump.finder.charRegexMap": {"a": "[aA]"}}"#,
    );
    let out = run(dir.path(), &["fix", path.to_str().unwrap()]);
    assert!(out.status.success());
    assert!(stdout_of(&out).is_empty());
}

#[test]
fn test_fix_empty_table_prints_nothing() {
    let (dir, path) = write_table("map.json", r#"{"aceJump.finder.charRegexMap": {}}"#);
    let out = run(dir.path(), &["fix", path.to_str().unwrap()]);
    assert!(out.status.success());
    assert!(stdout_of(&out).is_empty());
}

#[test]
fn test_fix_write_rewrites_file() {
    let (dir, path) = write_table(
        "map.json",
        r#"{"aceJump.finder.charRegexMap": {"c": "[cCkK]", "k": "[kK]"}}"#,
    );
    let out = run(dir.path(), &["fix", "--write", path.to_str().unwrap()]);
    assert!(out.status.success());
    assert!(stdout_of(&out).is_empty());

    let val: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        val,
        serde_json::json!({"aceJump.finder.charRegexMap": {"c": "[cC]", "k": "[kK]"}})
    );

    // Second pass has nothing left to do.
    let out = run(dir.path(), &["check", path.to_str().unwrap()]);
    assert!(stdout_of(&out).starts_with("no contamination"));
}

#[test]
fn test_fix_write_clean_leaves_file_alone() {
    let content = r#"{"aceJump.finder.charRegexMap": {"a": "[aA]"}}"#;
    let (dir, path) = write_table("map.json", content);
    let out = run(dir.path(), &["fix", "-w", path.to_str().unwrap()]);
    assert!(out.status.success());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), content);
}

#[cfg(unix)]
#[test]
fn test_fix_write_keeps_file_mode() {
    use std::os::unix::fs::PermissionsExt;

    let (dir, path) = write_table(
        "map.json",
        r#"{"aceJump.finder.charRegexMap": {"c": "[cCk]"}}"#,
    );
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

    let out = run(dir.path(), &["fix", "--write", path.to_str().unwrap()]);
    assert!(out.status.success());

    let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o644);
    assert!(std::fs::read_to_string(&path).unwrap().contains("\"[cC]\""));
}
