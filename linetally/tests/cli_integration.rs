//! Integration tests for linetally CLI

use std::fs;
use std::path::Path;
use std::process::Command;

fn run_linetally(args: &[&str]) -> (String, String, bool) {
    let mut cmd_args = vec!["run", "-p", "linetally", "--"];
    cmd_args.extend(args);

    let output = Command::new("cargo")
        .args(&cmd_args)
        .current_dir(env!("CARGO_MANIFEST_DIR").to_string() + "/..")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

fn create_fixture(dir: &Path) {
    fs::create_dir_all(dir.join("sub")).unwrap();
    // 1 comment, 1 code
    fs::write(dir.join("a.m"), "% one\nx = 1;\n").unwrap();
    // 1 code, 1 blank
    fs::write(dir.join("sub/b.m"), "y = 2;\n\n").unwrap();
    // not a .m file
    fs::write(dir.join("readme.txt"), "prose\n").unwrap();
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_linetally(&["--help"]);

    assert!(success);
    assert!(stdout.contains("linetally"));
    assert!(stdout.contains("--ext"));
    assert!(stdout.contains("--ignore"));
    assert!(stdout.contains("--exclude"));
    assert!(stdout.contains("--out"));
    assert!(stdout.contains("--json"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, success) = run_linetally(&["--version"]);

    assert!(success);
    assert!(stdout.contains("linetally"));
}

#[test]
fn test_scan_writes_report() {
    let temp = tempfile::tempdir().unwrap();
    create_fixture(temp.path());
    let dir = temp.path().to_str().unwrap();

    let (stdout, _, success) = run_linetally(&[dir, "--out", dir]);

    assert!(success);
    assert!(stdout.contains("Total (2 files)"));
    assert!(stdout.contains("a.m"));
    assert!(!stdout.contains("readme.txt"));

    let report = fs::read_to_string(temp.path().join("lineCount.txt")).unwrap();
    assert_eq!(report, stdout);
    assert!(report.contains("Total (2 files)"));
}

#[test]
fn test_ignore_flag() {
    let temp = tempfile::tempdir().unwrap();
    create_fixture(temp.path());
    let dir = temp.path().to_str().unwrap();

    let (stdout, _, success) = run_linetally(&[dir, "--out", dir, "--ignore", "b.m"]);

    assert!(success);
    assert!(stdout.contains("Total (1 files)"));
    assert!(!stdout.contains("b.m"));
}

#[test]
fn test_exclude_flag() {
    let temp = tempfile::tempdir().unwrap();
    create_fixture(temp.path());
    let dir = temp.path().to_str().unwrap();

    let (stdout, _, success) = run_linetally(&[dir, "--out", dir, "--exclude", "**/sub/**"]);

    assert!(success);
    assert!(stdout.contains("Total (1 files)"));
    assert!(!stdout.contains("b.m"));
}

#[test]
fn test_multiple_extensions() {
    let temp = tempfile::tempdir().unwrap();
    create_fixture(temp.path());
    fs::write(temp.path().join("extra.c"), "int x; // note\n").unwrap();
    let dir = temp.path().to_str().unwrap();

    let (stdout, _, success) = run_linetally(&[dir, "--out", dir, "--ext", "m", "--ext", "c"]);

    assert!(success);
    assert!(stdout.contains("Total (3 files)"));
    assert!(stdout.contains("extra.c"));
}

#[test]
fn test_json_output() {
    let temp = tempfile::tempdir().unwrap();
    create_fixture(temp.path());
    let dir = temp.path().to_str().unwrap();

    let (stdout, _, success) = run_linetally(&[dir, "--out", dir, "--json"]);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");

    assert_eq!(parsed["files"].as_array().unwrap().len(), 2);
    assert_eq!(parsed["total"]["code"], 2);
    assert_eq!(parsed["total"]["comments"], 1);
    assert_eq!(parsed["total"]["blank"], 1);
    assert_eq!(parsed["total"]["total"], 4);
    assert!(parsed["warnings"].as_array().unwrap().is_empty());

    // The report file is still written in JSON mode
    assert!(temp.path().join("lineCount.txt").exists());
}

#[test]
fn test_explicit_file_argument() {
    let temp = tempfile::tempdir().unwrap();
    create_fixture(temp.path());
    let file = temp.path().join("readme.txt");
    let dir = temp.path().to_str().unwrap();

    // Naming a file directly bypasses the extension filter
    let (stdout, _, success) = run_linetally(&[file.to_str().unwrap(), "--out", dir]);

    assert!(success);
    assert!(stdout.contains("readme.txt"));
    assert!(stdout.contains("Total (1 files)"));
}

#[test]
fn test_invalid_path() {
    let (_, stderr, success) = run_linetally(&["/nonexistent/path"]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
}

#[test]
fn test_invalid_glob_fails_before_scanning() {
    let temp = tempfile::tempdir().unwrap();
    create_fixture(temp.path());
    let dir = temp.path().to_str().unwrap();

    let (_, stderr, success) = run_linetally(&[dir, "--out", dir, "--exclude", "[bad"]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
    assert!(!temp.path().join("lineCount.txt").exists());
}
