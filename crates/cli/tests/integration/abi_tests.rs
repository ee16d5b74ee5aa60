//! Integration tests for the offline ABI commands.

use predicates::prelude::*;

use super::helpers::superform_cmd;

#[test]
fn test_contracts_lists_every_contract() {
    superform_cmd()
        .arg("contracts")
        .assert()
        .success()
        .stdout(predicate::str::contains("CoreStateRegistry"))
        .stdout(predicate::str::contains("ERC4626Form"))
        .stdout(predicate::str::contains("paymaster"))
        .stdout(predicate::str::contains("SuperformRouterPlusAsync"))
        .stdout(predicate::str::contains("VaultClaimer"));
}

#[test]
fn test_contracts_json_output() {
    let output = superform_cmd()
        .args(["contracts", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let contracts = value.as_array().unwrap();
    assert_eq!(contracts.len(), 10);

    let router = contracts
        .iter()
        .find(|c| c["name"] == "SuperformRouter")
        .unwrap();
    assert_eq!(router["alias"], "superform-router");
    assert_eq!(router["functions"], 16);
    assert_eq!(router["events"], 6);
    assert_eq!(router["errors"], 17);
}

#[test]
fn test_abi_by_alias() {
    superform_cmd()
        .args(["abi", "vault-claimer"])
        .assert()
        .success()
        .stdout(predicate::str::contains("VaultClaimer"))
        .stdout(predicate::str::contains("0xb3bad39b"))
        .stdout(predicate::str::contains("claimProtocolOwnership(string)"))
        .stdout(predicate::str::contains("Claimed(address,string)"));
}

#[test]
fn test_abi_json_contains_selectors() {
    let output = superform_cmd()
        .args(["abi", "SuperformFactory", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["name"], "SuperformFactory");

    let functions = value["functions"].as_array().unwrap();
    let create = functions
        .iter()
        .find(|f| f["signature"] == "createSuperform(uint32,address)")
        .unwrap();
    assert_eq!(create["id"], "0xc4d6e6b2");
    assert_eq!(create["kind"], "nonpayable");

    let events = value["events"].as_array().unwrap();
    assert!(events.iter().any(|e| e["id"]
        == "0xf40fe66c44bcbe514dc449b1c700989fe0ace6e4e6c48a118cc9b452c285c72b"));
}

#[test]
fn test_abi_unknown_contract() {
    superform_cmd()
        .args(["abi", "router"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown contract: router"))
        .stderr(predicate::str::contains("superform-router"));
}
