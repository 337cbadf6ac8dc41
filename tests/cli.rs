// Copyright 2021 Peter Williams <peter@newton.cx> and collaborators
// Licensed under the MIT License.

//! End-to-end tests that exercise the CLI binary against real directory
//! trees.

use assert_cmd::Command;
use chrono::Datelike;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const PREEXISTING: &str = "using System.Reflection;\n\
    [assembly: AssemblyVersion(\"0.1.0.0\")]\n\
    [assembly: AssemblyFileVersion(\"0.1.0.0\")]\n\
    [assembly: AssemblyInformationalVersion(\"dev snapshot\")]\n";

fn verstamp() -> Command {
    Command::cargo_bin("verstamp").unwrap()
}

#[test]
fn patches_whole_tree() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("Client").join("Properties");
    fs::create_dir_all(&nested).unwrap();

    let top = dir.path().join("AssemblyInfo.cs");
    let deep = nested.join("AssemblyInfo.cs");
    fs::write(&top, PREEXISTING).unwrap();
    fs::write(&deep, PREEXISTING).unwrap();

    verstamp()
        .arg(dir.path())
        .args(&[
            "--version-string",
            "1.2.3.4",
            "--info-string",
            "beta build",
            "--company",
            "Acme",
        ])
        .assert()
        .success();

    let year = chrono::Local::now().year();

    for path in &[top, deep] {
        let text = fs::read_to_string(path).unwrap();
        assert!(text.contains("[assembly: AssemblyVersion(\"1.2.3.4\")]"));
        assert!(text.contains("[assembly: AssemblyFileVersion(\"1.2.3.4\")]"));
        assert!(text.contains("[assembly: AssemblyInformationalVersion(\"beta build\")]"));
        assert!(text.contains("//added by verstamp\n[assembly: AssemblyCompany(\"Acme\")]"));
        assert!(text.contains(&format!(
            "[assembly: AssemblyCopyright(\"Copyright ©Acme {}\")]",
            year
        )));
    }

    dir.close().unwrap();
}

#[test]
fn reads_version_from_file() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("AssemblyInfo.cs");
    fs::write(&target, PREEXISTING).unwrap();

    // Trailing whitespace in the sources must be tolerated.
    let version_file = dir.path().join("version.txt");
    let info_file = dir.path().join("info.txt");
    fs::write(&version_file, "9.8.7.6\n").unwrap();
    fs::write(&info_file, "release candidate 1\r\n").unwrap();

    verstamp()
        .arg(dir.path())
        .arg("--version-file")
        .arg(&version_file)
        .arg("--info-file")
        .arg(&info_file)
        .assert()
        .success();

    let text = fs::read_to_string(&target).unwrap();
    assert!(text.contains("[assembly: AssemblyVersion(\"9.8.7.6\")]"));
    assert!(text.contains("[assembly: AssemblyInformationalVersion(\"release candidate 1\")]"));
    assert!(!text.contains("AssemblyCompany"));
}

#[test]
fn second_run_is_idempotent() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("AssemblyInfo.cs");
    fs::write(&target, PREEXISTING).unwrap();

    let args = ["--version-string", "2.0.0.0", "--info-string", "stable", "--company", "Acme"];

    verstamp().arg(dir.path()).args(&args).assert().success();
    let first = fs::read_to_string(&target).unwrap();

    verstamp().arg(dir.path()).args(&args).assert().success();
    let second = fs::read_to_string(&target).unwrap();

    assert_eq!(first, second);
}

#[test]
fn missing_version_source_is_fatal() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("AssemblyInfo.cs");
    fs::write(&target, PREEXISTING).unwrap();

    verstamp()
        .arg(dir.path())
        .args(&["--info-string", "beta"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no version given"));

    // Configuration errors must fire before any file is touched.
    assert_eq!(fs::read_to_string(&target).unwrap(), PREEXISTING);
}

#[test]
fn malformed_version_is_fatal() {
    let dir = tempdir().unwrap();

    verstamp()
        .arg(dir.path())
        .args(&["--version-string", "1.2.3", "--info-string", "beta"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("four dot-separated integers"));
}

#[test]
fn nonexistent_root_is_fatal() {
    let dir = tempdir().unwrap();
    let bogus = dir.path().join("no-such-subdir");

    verstamp()
        .arg(&bogus)
        .args(&["--version-string", "1.2.3.4", "--info-string", "beta"])
        .assert()
        .failure()
        .code(1);
}
