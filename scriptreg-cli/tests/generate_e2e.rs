//! End-to-end tests for the `scriptreg` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use predicates::prelude::*;
use tempfile::TempDir;

fn seed_sources(dir: &Path) {
    fs::write(
        dir.join("courses-db.csv"),
        "Course_Code,Course_Name,Instructor,Exam_type,Exam_Date,Semester,Session\n\
         COMP101,Intro to Computing,Dr. A,Final,2024-05-01,Spring,Morning\n",
    )
    .expect("write courses");
    fs::write(
        dir.join("student-db.csv"),
        "Sl,Name,ID,Program,COMP101\n\
         2,Alice,S-02,MSc CS,1\n\
         1,Bob,S-01,MSc CS,0\n",
    )
    .expect("write students");
}

fn scriptreg(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_scriptreg"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("run scriptreg")
}

#[test]
fn generate_writes_register_scripts_and_manifest() {
    let dir = TempDir::new().unwrap();
    seed_sources(dir.path());

    let output = scriptreg(dir.path(), &["generate"]);
    assert!(
        output.status.success(),
        "command failed: status={} stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr),
    );
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Found 1 courses, 2 students"));
    assert!(stdout.contains("COMP101_register.tex — 1 enrolled"));

    let out_dir = dir.path().join("generated_registers");
    for name in [
        "COMP101_register.tex",
        "compile_all.sh",
        "compile_all.bat",
        "test_compile.sh",
        "test_compile.bat",
        "README.txt",
    ] {
        assert!(out_dir.join(name).exists(), "missing {name}");
    }

    let doc = fs::read_to_string(out_dir.join("COMP101_register.tex")).unwrap();
    assert!(doc.contains(r"1 & Alice & S-02 & & & \\ \hline"));
    assert!(!doc.contains("Bob"));
}

#[test]
fn dry_run_reports_files_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    seed_sources(dir.path());

    let output = scriptreg(dir.path(), &["generate", "--dry-run"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("[dry-run]"), "missing dry-run prefix");
    assert!(stdout.contains("COMP101_register.tex"));
    assert!(
        !dir.path().join("generated_registers").exists(),
        "dry-run must not create files"
    );
}

#[test]
fn missing_source_table_fails_with_path() {
    let dir = TempDir::new().unwrap();

    assert_cmd::Command::new(env!("CARGO_BIN_EXE_scriptreg"))
        .current_dir(dir.path())
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("courses-db.csv"));
}

#[test]
fn custom_out_dir_and_labels_are_honoured() {
    let dir = TempDir::new().unwrap();
    seed_sources(dir.path());

    let output = scriptreg(
        dir.path(),
        &[
            "generate",
            "--out-dir",
            "registers",
            "--institution",
            "ABC University",
        ],
    );
    assert!(output.status.success());

    let doc = fs::read_to_string(dir.path().join("registers").join("COMP101_register.tex"))
        .expect("register in custom out dir");
    assert!(doc.contains("ABC University"));
}

#[test]
fn courses_listing_shows_codes_and_counts() {
    let dir = TempDir::new().unwrap();
    seed_sources(dir.path());

    let output = scriptreg(dir.path(), &["courses"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("COMP101"));
    assert!(stdout.contains("Intro to Computing"));
    assert!(stdout.contains("1 courses, 2 students on the roster"));
}
