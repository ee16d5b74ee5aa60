//! CLI argument validation tests.
//!
//! These tests verify that the CLI properly validates arguments and provides
//! helpful error messages without requiring network access.

use predicates::prelude::*;

use super::helpers::{superform_cmd, FACTORY};

#[test]
fn test_help_output() {
    superform_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("superform"))
        .stdout(predicate::str::contains("abi"))
        .stdout(predicate::str::contains("contracts"))
        .stdout(predicate::str::contains("factory"))
        .stdout(predicate::str::contains("registry"))
        .stdout(predicate::str::contains("positions"))
        .stdout(predicate::str::contains("events"))
        .stdout(predicate::str::contains("watch"));
}

#[test]
fn test_factory_help_output() {
    superform_cmd()
        .args(["factory", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("superform"))
        .stdout(predicate::str::contains("count"));
}

#[test]
fn test_invalid_command() {
    superform_cmd()
        .arg("invalid_command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_abi_missing_contract() {
    superform_cmd()
        .arg("abi")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_factory_count_missing_rpc_url() {
    superform_cmd()
        .args(["factory", "count", "--factory", FACTORY])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--rpc-url"));
}

#[test]
fn test_factory_count_missing_factory() {
    superform_cmd()
        .args(["factory", "count", "--rpc-url", "http://localhost:8545"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--factory"));
}

#[test]
fn test_invalid_factory_address() {
    superform_cmd()
        .args([
            "factory",
            "count",
            "--rpc-url",
            "http://localhost:8545",
            "--factory",
            "0x1234",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid factory address"));
}

#[test]
fn test_invalid_superform_id() {
    superform_cmd()
        .args([
            "factory",
            "superform",
            "not-a-number",
            "--rpc-url",
            "http://localhost:8545",
            "--factory",
            FACTORY,
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid id"));
}

#[test]
fn test_invalid_rpc_url() {
    superform_cmd()
        .args(["factory", "count", "--rpc-url", "not a url", "--factory", FACTORY])
        .assert()
        .failure()
        .stderr(predicate::str::contains("RPC connection failed"));
}

#[test]
fn test_invalid_output_format() {
    superform_cmd()
        .args(["contracts", "--format", "invalid_format"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_events_help() {
    superform_cmd()
        .args(["events", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--address"))
        .stdout(predicate::str::contains("--from-block"))
        .stdout(predicate::str::contains("--to-block"));
}

#[test]
fn test_watch_help() {
    superform_cmd()
        .args(["watch", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--address"))
        .stdout(predicate::str::contains("--poll-interval-ms"));
}

#[test]
fn test_watch_unknown_contract() {
    superform_cmd()
        .args([
            "watch",
            "nope",
            "--address",
            FACTORY,
            "--rpc-url",
            "http://localhost:8545",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown contract: nope"));
}

#[test]
fn test_invalid_log_level() {
    superform_cmd()
        .args(["contracts", "--log-level", "superform=loud"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid log filter"));
}

#[test]
fn test_log_level_accepts_directives() {
    superform_cmd()
        .args(["contracts", "--log-level", "info,superform_rs_contracts=debug"])
        .assert()
        .success();
}
