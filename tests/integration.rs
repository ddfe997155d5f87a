use std::fs;
use std::path::MAIN_SEPARATOR;
use std::process::Command;
use tempfile::TempDir;

fn apidoc_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_apidoc"));
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

fn write_config(dir: &TempDir, content: &str) {
    fs::write(dir.path().join(".apidoc.json"), content).unwrap();
}

// ===========================================
// --init
// ===========================================

#[test]
fn test_init_creates_template() {
    let dir = TempDir::new().unwrap();

    let output = apidoc_cmd(&dir).arg("--init").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Created"));
    assert!(stdout.contains(".apidoc.json"));

    let content = fs::read_to_string(dir.path().join(".apidoc.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["input"]["dir"], "./");
    assert_eq!(value["input"]["recursive"], true);
    assert_eq!(value["input"]["type"], "");
    assert_eq!(value["doc"]["title"], "");
}

#[test]
fn test_init_then_load_round_trip() {
    let dir = TempDir::new().unwrap();
    apidoc_cmd(&dir).arg("--init").output().unwrap();

    let path = dir.path().join(".apidoc.json");
    let content = fs::read_to_string(&path).unwrap();
    let decoded: apidoc::Config = serde_json::from_str(&content).unwrap();
    let original: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(serde_json::to_value(&decoded).unwrap(), original);
    assert_eq!(decoded.input.dir, "./");
    assert!(decoded.input.recursive);
}

#[test]
fn test_init_overwrites_existing_config() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, r#"{"input": {"type": "go"}}"#);

    let output = apidoc_cmd(&dir).arg("--init").output().unwrap();
    assert!(output.status.success());

    let content = fs::read_to_string(dir.path().join(".apidoc.json")).unwrap();
    assert!(content.contains("\"type\": \"\""));
}

// ===========================================
// Loading
// ===========================================

#[test]
fn test_missing_config_fails() {
    let dir = TempDir::new().unwrap();

    let output = apidoc_cmd(&dir).output().unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains(".apidoc.json"));
}

#[test]
fn test_invalid_json_fails() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "{ not json");

    let output = apidoc_cmd(&dir).output().unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to parse config file"));
}

#[test]
fn test_freshly_generated_config_needs_type() {
    let dir = TempDir::new().unwrap();
    apidoc_cmd(&dir).arg("--init").output().unwrap();

    let output = apidoc_cmd(&dir).output().unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing required parameter: type"));
}

#[test]
fn test_unsupported_language_lists_supported() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, r#"{"input": {"type": "Cobol"}}"#);

    let output = apidoc_cmd(&dir).output().unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[cobol]"));
    assert!(stderr.contains("supported types:"));
    assert!(stderr.contains("rust"));
}

#[test]
fn test_summary_shows_normalized_config() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("main.go"), "package main\n").unwrap();
    write_config(
        &dir,
        r#"{"input": {"type": "GO", "exts": ["go"], "recursive": true}, "output": {"dir": "docs"}}"#,
    );

    let output = apidoc_cmd(&dir).arg("--no-color").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Language: go"));
    assert!(stdout.contains("Extensions: .go"));
    assert!(stdout.contains(&format!("Output: docs{MAIN_SEPARATOR}")));
    assert!(stdout.contains("Title: APIDOC"));
    assert!(stdout.contains("1 source files"));
}

#[test]
fn test_quiet_lists_only_sources() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("lib.rs"), "").unwrap();
    fs::write(dir.path().join("notes.md"), "").unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("nested/mod.rs"), "").unwrap();
    write_config(&dir, r#"{"input": {"type": "rust", "recursive": false}}"#);

    let output = apidoc_cmd(&dir).arg("--quiet").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("lib.rs"));
}

#[test]
fn test_verbose_lists_each_source() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.py"), "").unwrap();
    fs::write(dir.path().join("b.py"), "").unwrap();
    write_config(&dir, r#"{"input": {"type": "python"}}"#);

    let output = apidoc_cmd(&dir)
        .args(["--verbose", "--no-color"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("a.py"));
    assert!(stdout.contains("b.py"));
    assert!(stdout.contains("2 source files"));
}

#[test]
fn test_missing_source_dir_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, r#"{"input": {"type": "go", "dir": "no-such-dir"}}"#);

    let output = apidoc_cmd(&dir).output().unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Warning:"));
}
