//! Integration tests for commands that query a node.

use predicates::prelude::*;

use super::helpers::{
    address_word, dynamic_bytes, rpc_log, start_rpc_node, superform_cmd_with_mock, word, RpcNode,
    BALANCE_OF, CLAIMED_TOPIC, CLAIMER, FACTORY, GET_FORM_COUNT, GET_MESSAGE_AMB, GET_SUPERFORM,
    GET_SUPERFORM_COUNT, IS_FORM_IMPLEMENTATION_PAUSED, IS_SUPERFORM, PAYLOADS_COUNT,
    PAYLOAD_BODY, PAYLOAD_HEADER, PAYLOAD_TRACKING, POSITIONS, REGISTRY, TOTAL_SUPPLY,
};

const SUPERFORM: &str = "0x5b6e4bf3c2b5a0e3fe0fc8d7a9d7e61f2b27c9e1";
const OWNER: &str = "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045";

fn factory_node() -> RpcNode {
    RpcNode::new()
        .with_return(GET_SUPERFORM_COUNT, word(42))
        .with_return(GET_FORM_COUNT, word(3))
        .with_return(
            GET_SUPERFORM,
            format!("{}{}{}", address_word(SUPERFORM), word(1), word(137)),
        )
        .with_return(IS_SUPERFORM, word(1))
        .with_return(IS_FORM_IMPLEMENTATION_PAUSED, word(0))
}

// ============================================================================
// factory
// ============================================================================

#[tokio::test]
async fn test_factory_count() {
    let server = start_rpc_node(factory_node()).await;

    superform_cmd_with_mock(&server)
        .args(["factory", "count", "--factory", FACTORY])
        .assert()
        .success()
        .stdout(predicate::str::contains("Superforms:           42"))
        .stdout(predicate::str::contains("Form implementations: 3"));
}

#[tokio::test]
async fn test_factory_count_from_env() {
    let server = start_rpc_node(factory_node()).await;

    superform_cmd_with_mock(&server)
        .env("SUPERFORM_FACTORY", FACTORY)
        .args(["factory", "count", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"superforms\": \"42\""));
}

#[tokio::test]
async fn test_factory_count_debug_logs_to_stderr() {
    let server = start_rpc_node(factory_node()).await;

    superform_cmd_with_mock(&server)
        .args(["factory", "count", "--factory", FACTORY, "--log-level", "debug"])
        .assert()
        .success()
        .stderr(predicate::str::contains("connecting to SuperformFactory"))
        .stdout(predicate::str::contains("connecting to SuperformFactory").not());
}

#[tokio::test]
async fn test_factory_superform_detail() {
    let server = start_rpc_node(factory_node()).await;

    superform_cmd_with_mock(&server)
        .args(["factory", "superform", "7", "--factory", FACTORY])
        .assert()
        .success()
        .stdout(predicate::str::contains("Superform 7"))
        .stdout(predicate::str::contains("(137)"))
        .stdout(predicate::str::contains("Registered:     Yes"))
        .stdout(predicate::str::contains("Paused:         No"));
}

#[tokio::test]
async fn test_factory_superform_json() {
    let server = start_rpc_node(factory_node()).await;

    let output = superform_cmd_with_mock(&server)
        .args(["factory", "superform", "0x7", "--factory", FACTORY, "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["id"], "7");
    assert_eq!(value["formImplementationId"], 1);
    assert_eq!(value["chainId"], 137);
    assert_eq!(
        value["superform"].as_str().unwrap().to_lowercase(),
        SUPERFORM
    );
}

#[tokio::test]
async fn test_factory_call_revert_fails() {
    // Node knows no selectors, so every call reverts.
    let server = start_rpc_node(RpcNode::new()).await;

    superform_cmd_with_mock(&server)
        .args(["factory", "superform", "7", "--factory", FACTORY])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to fetch superform 7"));
}

// ============================================================================
// registry
// ============================================================================

fn registry_node() -> RpcNode {
    RpcNode::new()
        .with_return(PAYLOADS_COUNT, word(10))
        .with_return(PAYLOAD_HEADER, word(0x0101))
        .with_return(PAYLOAD_TRACKING, word(2))
        .with_return(
            GET_MESSAGE_AMB,
            format!("{}{}{}{}", word(0x20), word(2), word(1), word(3)),
        )
        .with_return(PAYLOAD_BODY, dynamic_bytes(&[0xde, 0xad, 0xbe]))
}

#[tokio::test]
async fn test_registry_payload() {
    let server = start_rpc_node(registry_node()).await;

    superform_cmd_with_mock(&server)
        .args(["registry", "payload", "5", "--registry", REGISTRY])
        .assert()
        .success()
        .stdout(predicate::str::contains("Payload 5"))
        .stdout(predicate::str::contains("0x101"))
        .stdout(predicate::str::contains("1, 3"))
        .stdout(predicate::str::contains("3 bytes"));
}

#[tokio::test]
async fn test_registry_payload_json() {
    let server = start_rpc_node(registry_node()).await;

    let output = superform_cmd_with_mock(&server)
        .args(["registry", "payload", "5", "--registry", REGISTRY, "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["tracking"], 2);
    assert_eq!(value["ambIds"], serde_json::json!([1, 3]));
    assert_eq!(value["body"], "0xdeadbe");
}

#[tokio::test]
async fn test_registry_payload_out_of_range() {
    let server = start_rpc_node(registry_node()).await;

    superform_cmd_with_mock(&server)
        .args(["registry", "payload", "11", "--registry", REGISTRY])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Payload 11 does not exist"));
}

// ============================================================================
// positions
// ============================================================================

#[tokio::test]
async fn test_positions_balance() {
    let node = RpcNode::new()
        .with_return(BALANCE_OF, word(250))
        .with_return(TOTAL_SUPPLY, word(1000));
    let server = start_rpc_node(node).await;

    superform_cmd_with_mock(&server)
        .args(["positions", "balance", OWNER, "1", "--positions", POSITIONS])
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance:       250"))
        .stdout(predicate::str::contains("Total Supply:  1000"));
}

// ============================================================================
// events
// ============================================================================

fn claimed_log(block: u64) -> serde_json::Value {
    rpc_log(
        CLAIMER,
        &[CLAIMED_TOPIC.to_string(), format!("0x{}", address_word(OWNER))],
        &dynamic_bytes(b"superform"),
        block,
    )
}

#[tokio::test]
async fn test_events_table() {
    let node = RpcNode::new().with_logs(vec![claimed_log(100), claimed_log(101)]);
    let server = start_rpc_node(node).await;

    superform_cmd_with_mock(&server)
        .args(["events", "vault-claimer", "--address", CLAIMER, "--from-block", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Claimed"))
        .stdout(predicate::str::contains("protocolId: \"superform\""))
        .stdout(predicate::str::contains("101"));
}

#[tokio::test]
async fn test_events_json() {
    let node = RpcNode::new().with_logs(vec![claimed_log(100)]);
    let server = start_rpc_node(node).await;

    let output = superform_cmd_with_mock(&server)
        .args([
            "events",
            "VaultClaimer",
            "--address",
            CLAIMER,
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let events = value.as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["event"], "Claimed");
    assert_eq!(events[0]["block"], 100);
    assert_eq!(events[0]["logIndex"], 1);
    assert_eq!(events[0]["fields"]["protocolId"], "superform");
    assert_eq!(
        events[0]["fields"]["claimer"],
        "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045"
    );
}

#[tokio::test]
async fn test_events_skips_unknown_logs() {
    let unknown = rpc_log(CLAIMER, &[format!("0x{}", "11".repeat(32))], "", 99);
    let node = RpcNode::new().with_logs(vec![unknown]);
    let server = start_rpc_node(node).await;

    superform_cmd_with_mock(&server)
        .args(["events", "vault-claimer", "--address", CLAIMER])
        .assert()
        .success()
        .stdout(predicate::str::contains("No events found."));
}

#[tokio::test]
async fn test_events_rejects_inverted_range() {
    let server = start_rpc_node(RpcNode::new()).await;

    superform_cmd_with_mock(&server)
        .args([
            "events",
            "vault-claimer",
            "--address",
            CLAIMER,
            "--from-block",
            "10",
            "--to-block",
            "5",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is before --from-block"));
}

// ============================================================================
// watch
// ============================================================================

#[tokio::test]
async fn test_watch_prints_events_until_unknown_log() {
    let unknown = rpc_log(CLAIMER, &[format!("0x{}", "11".repeat(32))], "", 101);
    let node = RpcNode::new().with_filter_batch(vec![claimed_log(100), unknown]);
    let server = start_rpc_node(node).await;

    superform_cmd_with_mock(&server)
        .args([
            "watch",
            "vault-claimer",
            "--address",
            CLAIMER,
            "--poll-interval-ms",
            "20",
        ])
        .timeout(std::time::Duration::from_secs(10))
        .assert()
        .failure()
        .stdout(predicate::str::contains("Claimed"))
        .stdout(predicate::str::contains("protocolId: \"superform\""))
        .stderr(predicate::str::contains("Failed to decode event log"));
}
