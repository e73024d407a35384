use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

/// A bulkname command running inside `dir`, isolated from any user config.
fn bulkname(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("bulkname").unwrap();
    cmd.current_dir(dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join(".xdg"))
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

#[test]
fn test_help_command() {
    let mut cmd = Command::cargo_bin("bulkname").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Batch file renaming with pluggable name transforms",
        ));
}

#[test]
fn test_version_subcommand() {
    let mut cmd = Command::cargo_bin("bulkname").unwrap();
    cmd.arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bulkname 0.1.0"));
}

#[test]
fn test_version_subcommand_json() {
    let mut cmd = Command::cargo_bin("bulkname").unwrap();
    cmd.args(["version", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r#"\{"name":"bulkname","version":"0\.1\.0"\}"#).unwrap());
}

#[test]
fn test_plan_command_missing_paths() {
    let mut cmd = Command::cargo_bin("bulkname").unwrap();
    cmd.args(["plan", "-m", "Insert"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_modules_lists_builtins() {
    let temp_dir = TempDir::new().unwrap();
    bulkname(&temp_dir)
        .arg("modules")
        .assert()
        .success()
        .stdout(predicate::str::contains("Insert"))
        .stdout(predicate::str::contains("Letter Case"))
        .stdout(predicate::str::contains("leading zeros"))
        .stdout(predicate::str::contains("Remove Characters"))
        .stdout(predicate::str::contains("regex: one of False (0), True (1)"));
}

#[test]
fn test_modules_json() {
    let temp_dir = TempDir::new().unwrap();
    let output = bulkname(&temp_dir)
        .args(["modules", "--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let modules = value.as_array().unwrap();
    assert_eq!(modules.len(), 5);
    assert_eq!(modules[0]["label"], "Insert");
}

#[test]
fn test_plan_does_not_rename() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("report.txt").write_str("x").unwrap();

    bulkname(&temp_dir)
        .args([
            "plan",
            "-m",
            "insert",
            "--set",
            "insert=2024_",
            "--preview",
            "summary",
            "report.txt",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("report.txt -> 2024_report.txt"))
        .stdout(predicate::str::contains("Renames: 1 of 1 files"));

    temp_dir.child("report.txt").assert(predicate::path::exists());
    temp_dir
        .child("2024_report.txt")
        .assert(predicate::path::missing());
}

#[test]
fn test_plan_json_output() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("a.txt").touch().unwrap();
    temp_dir.child("b.txt").touch().unwrap();

    let output = bulkname(&temp_dir)
        .args([
            "plan",
            "-m",
            "Numbering",
            "--set",
            "leading zeros=2",
            "--set",
            "start=5",
            "--set",
            "format=Text Number",
            "--set",
            "text=img_",
            "--output",
            "json",
            "a.txt",
            "b.txt",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["module"], "Numbering");
    assert_eq!(value["plan"]["proposed"][0], "img_005.txt");
    assert_eq!(value["plan"]["proposed"][1], "img_006.txt");
    assert_eq!(value["summary"]["committable"], true);
}

#[test]
fn test_rename_with_yes() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("foobar.txt").write_str("content").unwrap();

    bulkname(&temp_dir)
        .args([
            "rename",
            "-m",
            "Replace",
            "--set",
            "find=foo",
            "--set",
            "replacer=bar",
            "--yes",
            "foobar.txt",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("renamed barbar.txt"))
        .stdout(predicate::str::contains("Renamed 1 files"));

    temp_dir.child("foobar.txt").assert(predicate::path::missing());
    temp_dir.child("barbar.txt").assert("content");
}

#[test]
fn test_rename_dry_run_keeps_files() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("photo.jpg").touch().unwrap();

    bulkname(&temp_dir)
        .args([
            "rename",
            "-m",
            "Letter Case",
            "--set",
            "case=UPPER CASE",
            "--dry-run",
            "photo.jpg",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("PHOTO.jpg"));

    temp_dir.child("photo.jpg").assert(predicate::path::exists());
}

#[test]
fn test_rename_requires_yes_when_not_interactive() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("a.txt").touch().unwrap();

    bulkname(&temp_dir)
        .args(["rename", "-m", "Insert", "--set", "insert=x", "a.txt"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Apply?").not())
        .stderr(predicate::str::contains("non-interactive"));

    temp_dir.child("a.txt").assert(predicate::path::exists());
}

#[test]
fn test_rename_conflict_exits_one_and_logs() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("a.txt").write_str("a").unwrap();
    temp_dir.child("A.txt").write_str("existing").unwrap();

    bulkname(&temp_dir)
        .args([
            "rename",
            "-m",
            "Letter Case",
            "--set",
            "case=UPPER CASE",
            "--yes",
            "a.txt",
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("List of files in conflict:"))
        .stderr(predicate::str::contains(
            "Conflicts found. No file has been renamed.",
        ));

    temp_dir.child("a.txt").assert("a");
    temp_dir.child("A.txt").assert("existing");
    temp_dir
        .child("error.log")
        .assert(predicate::str::contains("List of files in conflict:"));
}

#[test]
fn test_rename_duplicates_are_refused() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("a1.txt").touch().unwrap();
    temp_dir.child("a2.txt").touch().unwrap();

    bulkname(&temp_dir)
        .args([
            "rename",
            "-m",
            "Remove Characters",
            "--set",
            "start=1",
            "--set",
            "end=2",
            "--yes",
            "a1.txt",
            "a2.txt",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("duplicate name conflict"));

    temp_dir.child("a1.txt").assert(predicate::path::exists());
    temp_dir.child("a2.txt").assert(predicate::path::exists());
}

#[test]
fn test_partial_failure_writes_error_log() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("real.txt").touch().unwrap();

    bulkname(&temp_dir)
        .args([
            "--error-log",
            "rename-errors.log",
            "rename",
            "-m",
            "Insert",
            "--set",
            "insert=new_",
            "--yes",
            "real.txt",
            "missing.txt",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Error/s found. Check error.log for info.",
        ));

    temp_dir.child("new_real.txt").assert(predicate::path::exists());
    temp_dir
        .child("rename-errors.log")
        .assert(predicate::str::contains("missing.txt"))
        .assert(predicate::str::starts_with("bulkname "));
    temp_dir.child("error.log").assert(predicate::path::missing());
}

#[test]
fn test_unknown_module_exits_two() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("a.txt").touch().unwrap();

    bulkname(&temp_dir)
        .args(["plan", "-m", "Shuffle", "a.txt"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no module registered under 'Shuffle'"));
}

#[test]
fn test_invalid_choice_exits_two() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("a.txt").touch().unwrap();

    bulkname(&temp_dir)
        .args(["plan", "-m", "Insert", "--set", "from=From the Middle", "a.txt"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not a valid choice"));
}

#[test]
fn test_config_file_supplies_module_and_options() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("a.txt").touch().unwrap();
    temp_dir
        .child(".bulkname/config.toml")
        .write_str(
            r#"
[defaults]
module = "Insert"
preview_format = "summary"

[modules.Insert]
insert = "cfg_"
"#,
        )
        .unwrap();

    bulkname(&temp_dir)
        .args(["plan", "a.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a.txt -> cfg_a.txt"));
}

#[test]
fn test_directory_flag() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("sub/a.txt").touch().unwrap();

    bulkname(&temp_dir)
        .args([
            "-C",
            "sub",
            "plan",
            "-m",
            "Letter Case",
            "--set",
            "case=2",
            "--part",
            "full",
            "--preview",
            "summary",
            "a.txt",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("a.txt -> A.TXT"));
}

#[test]
fn test_completions() {
    let mut cmd = Command::cargo_bin("bulkname").unwrap();
    cmd.args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bulkname"));
}
