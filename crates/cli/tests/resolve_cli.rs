#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

fn write_lookup_script(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("pkgfind");
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write script");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod script");
    path
}

fn irimap() -> Command {
    Command::cargo_bin("irimap").expect("binary")
}

#[test]
fn resolves_package_iri_through_lookup_script() {
    let dir = tempfile::TempDir::new().expect("tempdir");
    let script = write_lookup_script(dir.path(), "echo /home/user/ros/turtlebot_description");

    irimap()
        .args([
            "resolve",
            "package://turtlebot_description/urdf/turtlebot.urdf",
            "--lookup-cmd",
            &script.to_string_lossy(),
            "--non-interactive",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "/home/user/ros/turtlebot_description/urdf/turtlebot.urdf",
        ));
}

#[test]
fn unresolved_import_exits_nonzero() {
    irimap()
        .args([
            "resolve",
            "http://example.org/ontology/missing.owl",
            "--non-interactive",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unresolved"));
}

#[test]
fn failed_lookup_falls_through_to_scripted_pick() {
    irimap()
        .args([
            "resolve",
            "package://nowhere/model.owl",
            "--lookup-cmd",
            "false",
            "--pick",
            "/tmp/model.owl",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("/tmp/model.owl"));
}

#[test]
fn pick_with_catalog_records_an_entry() {
    let dir = tempfile::TempDir::new().expect("tempdir");
    let catalog_path = dir.path().join("catalog.json");
    let picked = dir.path().join("missing.owl");

    irimap()
        .args([
            "resolve",
            "http://example.org/ontology/missing.owl",
            "--pick",
            &picked.to_string_lossy(),
            "--catalog",
            &catalog_path.to_string_lossy(),
            "--lookup-cmd",
            "false",
        ])
        .assert()
        .success();

    let recorded = fs::read_to_string(&catalog_path).expect("catalog");
    assert!(recorded.contains("http://example.org/ontology/missing.owl"));
    // Picked inside the catalog directory, so the stored location is relative.
    assert!(recorded.contains("\"missing.owl\""));

    irimap()
        .args(["catalog", &catalog_path.to_string_lossy()])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "http://example.org/ontology/missing.owl",
        ));
}

#[test]
fn use_iri_prints_the_identifier_itself() {
    irimap()
        .args([
            "resolve",
            "http://example.org/ontology/missing.owl",
            "--use-iri",
            "--lookup-cmd",
            "false",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "http://example.org/ontology/missing.owl",
        ));
}

#[test]
fn json_output_names_the_outcome() {
    let dir = tempfile::TempDir::new().expect("tempdir");
    let script = write_lookup_script(dir.path(), "echo /opt/pkgs/demo");

    irimap()
        .args([
            "resolve",
            "package://demo/model.owl",
            "--lookup-cmd",
            &script.to_string_lossy(),
            "--non-interactive",
            "--json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"outcome\": \"resolved\""))
        .stdout(predicate::str::contains("/opt/pkgs/demo/model.owl"));
}
