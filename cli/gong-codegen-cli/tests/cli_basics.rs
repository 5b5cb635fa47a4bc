// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Basic CLI tests - help, version, exit codes

// Allow deprecated - cargo_bin is standard for CLI testing
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn gong_codegen_cmd() -> Command {
    Command::cargo_bin("gong-codegen").expect("Failed to find gong-codegen binary")
}

#[test]
fn test_version() {
    gong_codegen_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gong-codegen"));
}

#[test]
fn test_help() {
    gong_codegen_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("fetch"))
        .stdout(predicate::str::contains("generate"));
}

#[test]
fn test_generate_help() {
    gong_codegen_cmd()
        .args(["generate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SPEC_FILE"))
        .stdout(predicate::str::contains("OUTPUT_DIR"));
}

#[test]
fn test_unknown_subcommand_fails() {
    gong_codegen_cmd().arg("frobnicate").assert().failure();
}

#[test]
fn test_generate_malformed_spec_exits_nonzero() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let spec = dir.path().join("spec.json");
    std::fs::write(&spec, "not json").expect("Failed to write spec file");
    let out = dir.path().join("generated");

    gong_codegen_cmd()
        .env_remove("GONG_SPEC_FILE")
        .env_remove("GONG_OUTPUT_DIR")
        .args([
            "generate",
            spec.to_str().expect("Temp path is not UTF-8"),
            out.to_str().expect("Temp path is not UTF-8"),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error parsing API spec"));
}
