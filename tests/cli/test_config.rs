// Tests for `regexmap config` — effective generator settings

use crate::common::{regexmap_bin, run, stdout_of};
use tempfile::TempDir;

#[test]
fn test_config_defaults() {
    let dir = TempDir::new().unwrap();
    let out = run(dir.path(), &["config"]);
    assert!(out.status.success());
    let val: serde_json::Value = serde_json::from_str(&stdout_of(&out)).unwrap();
    assert_eq!(val["command"], "cmigemo -q --emacs -d {dict}");
    assert!(val["dict_path"].as_str().unwrap().ends_with("migemo-dict"));
}

#[test]
fn test_config_env_override() {
    let dir = TempDir::new().unwrap();
    let out = std::process::Command::new(regexmap_bin())
        .arg("config")
        .current_dir(dir.path())
        .env("REGEXMAP_DICT", "/env/dict")
        .env_remove("REGEXMAP_COMMAND")
        .output()
        .unwrap();
    assert!(out.status.success());
    let val: serde_json::Value = serde_json::from_str(&stdout_of(&out)).unwrap();
    assert_eq!(val["dict_path"], "/env/dict");
}

#[test]
fn test_config_file_in_cwd() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("regexmap.json"),
        r#"{"command": "my-engine {dict}"}"#,
    )
    .unwrap();
    let out = run(dir.path(), &["config"]);
    let val: serde_json::Value = serde_json::from_str(&stdout_of(&out)).unwrap();
    assert_eq!(val["command"], "my-engine {dict}");
}
