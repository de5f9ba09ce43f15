use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn roster(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("ROSTER_FILE")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn add(dir: &TempDir, name: &str, roll: &str, dept: &str, gpa: &str) {
    roster(dir)
        .args(["add", name, roll, dept, gpa, "555"])
        .assert()
        .success();
}

#[test]
fn add_then_view() {
    let dir = TempDir::new().unwrap();
    roster(&dir)
        .args(["add", "Alice", "R1", "CS", "3.5", "555"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Student added (R1): Alice"));

    roster(&dir)
        .args(["view", "R1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice"))
        .stdout(predicate::str::contains("Department"));

    let on_disk = fs::read_to_string(dir.path().join(".roster/students.txt")).unwrap();
    assert_eq!(on_disk, "Alice,R1,CS,3.5,555\n");
}

#[test]
fn duplicate_roll_fails() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Alice", "R1", "CS", "3.5");

    roster(&dir)
        .args(["add", "Bob", "R1", "EE", "2.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Roll number already exists: R1"));
}

#[test]
fn missing_roll_reports_not_found() {
    let dir = TempDir::new().unwrap();
    roster(&dir)
        .args(["delete", "R9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Student not found: R9"));
}

#[test]
fn list_is_the_default_command() {
    let dir = TempDir::new().unwrap();
    roster(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("No students found."));
}

#[test]
fn sort_then_list_json() {
    let dir = TempDir::new().unwrap();
    add(&dir, "C", "R3", "CS", "2.0");
    add(&dir, "A", "R1", "CS", "3.8");
    add(&dir, "B", "R2", "CS", "3.0");

    roster(&dir)
        .args(["sort", "gpa", "--desc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sorted by GPA (descending)."));

    let output = roster(&dir).args(["list", "--json"]).output().unwrap();
    assert!(output.status.success());
    let listed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rolls: Vec<_> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["roll"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(rolls, vec!["R1", "R2", "R3"]);
}

#[test]
fn search_by_department() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Ann", "R1", "Physics", "3.1");
    add(&dir, "Ben", "R2", "Chemistry", "3.2");

    roster(&dir)
        .args(["search", "--department", "Phys"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ann"))
        .stdout(predicate::str::contains("Ben").not());
}

#[test]
fn update_changes_selected_fields() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Ann", "R1", "Physics", "3.1");

    roster(&dir)
        .args(["update", "R1", "--gpa", "3.9", "--roll", "R10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Student updated (R10): Ann"));

    let on_disk = fs::read_to_string(dir.path().join(".roster/students.txt")).unwrap();
    assert_eq!(on_disk, "Ann,R10,Physics,3.9,555\n");
}

#[test]
fn explicit_file_flag_is_used() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("class.txt");

    roster(&dir)
        .arg("--file")
        .arg(&file)
        .args(["add", "Ann", "R1", "Physics", "3.1"])
        .assert()
        .success();

    assert!(file.exists());
    assert!(!dir.path().join(".roster/students.txt").exists());
}

#[test]
fn configured_max_gpa_is_enforced() {
    let dir = TempDir::new().unwrap();
    roster(&dir)
        .args(["config", "max-gpa", "4.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("max-gpa set to 4"));

    roster(&dir)
        .args(["add", "Ann", "R1", "Physics", "4.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("GPA out of range"));
}

#[test]
fn bad_config_key_or_value_fails() {
    let dir = TempDir::new().unwrap();
    roster(&dir)
        .args(["config", "color", "red"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Api Error: Unknown config key: color"));

    roster(&dir)
        .args(["config", "color"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: color"));

    roster(&dir)
        .args(["config", "max-gpa", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid max-gpa: abc"));

    assert!(!dir.path().join(".roster/config.json").exists());
}

#[test]
fn non_finite_gpa_fails() {
    let dir = TempDir::new().unwrap();
    for gpa in ["NaN", "inf"] {
        roster(&dir)
            .args(["add", "Ann", "R1", "CS", gpa])
            .assert()
            .failure()
            .stderr(predicate::str::contains("GPA out of range"));
    }
    assert!(!dir.path().join(".roster/students.txt").exists());
}

#[test]
fn path_prints_data_file() {
    let dir = TempDir::new().unwrap();
    roster(&dir)
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("students.txt"));
}
