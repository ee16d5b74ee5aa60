//! Test helper utilities for CLI integration tests.

#![allow(deprecated)] // Command::cargo_bin deprecation
#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use assert_cmd::Command;
use serde_json::{json, Value};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

pub const FACTORY: &str = "0xD85ec15A9F814D6173bF1a89273bFB3964aAdaEC";
pub const REGISTRY: &str = "0x3721B0E122768CedDFB3Dec810E64c361177826C";
pub const POSITIONS: &str = "0x01dF6fb6a28a89d6bFa53b2b3F20644AbF417678";
pub const CLAIMER: &str = "0xf1e1a1b1c1d1e1f1a1b1c1d1e1f1a1b1c1d1e1f1";

pub const GET_SUPERFORM_COUNT: &str = "1547665d";
pub const GET_FORM_COUNT: &str = "589434ca";
pub const GET_SUPERFORM: &str = "6fb86dd3";
pub const IS_SUPERFORM: &str = "b5c75697";
pub const IS_FORM_IMPLEMENTATION_PAUSED: &str = "596db717";
pub const PAYLOADS_COUNT: &str = "13c02a59";
pub const PAYLOAD_HEADER: &str = "36445ffd";
pub const PAYLOAD_TRACKING: &str = "b63d36a5";
pub const GET_MESSAGE_AMB: &str = "d830364e";
pub const PAYLOAD_BODY: &str = "361ad42b";
pub const BALANCE_OF: &str = "00fdd58e";
pub const TOTAL_SUPPLY: &str = "bd85b039";

pub const CLAIMED_TOPIC: &str =
    "0x4ef887714b6ae4b4e5b624f78fb37bc493b148ca911452610d6ef8bffc0704e2";

/// ABI word holding an unsigned integer.
pub fn word(value: u128) -> String {
    format!("{:064x}", value)
}

/// ABI word holding an address.
pub fn address_word(address: &str) -> String {
    format!("{:0>64}", address.trim_start_matches("0x").to_lowercase())
}

/// ABI encoding of a single dynamic `bytes`/`string` return value.
pub fn dynamic_bytes(data: &[u8]) -> String {
    let mut hex: String = data.iter().map(|b| format!("{:02x}", b)).collect();
    let padded_len = data.len().div_ceil(32) * 32;
    hex.push_str(&"00".repeat(padded_len - data.len()));
    format!("{}{}{}", word(0x20), word(data.len() as u128), hex)
}

/// Scripted JSON-RPC node: `eth_call` answers by selector, `eth_getLogs` by
/// list and each `eth_getFilterChanges` pops the next batch.
#[derive(Default)]
pub struct RpcNode {
    calls: HashMap<String, String>,
    logs: Vec<Value>,
    filter_batches: Mutex<VecDeque<Vec<Value>>>,
}

impl RpcNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer calls to `selector` with the hex-encoded `output` (no `0x`).
    pub fn with_return(mut self, selector: &str, output: String) -> Self {
        self.calls.insert(selector.to_string(), output);
        self
    }

    pub fn with_logs(mut self, logs: Vec<Value>) -> Self {
        self.logs = logs;
        self
    }

    pub fn with_filter_batch(self, logs: Vec<Value>) -> Self {
        self.filter_batches.lock().unwrap().push_back(logs);
        self
    }

    fn answer(&self, request: &Value) -> Value {
        let id = request["id"].clone();
        let result = match request["method"].as_str().unwrap_or_default() {
            "eth_chainId" => json!("0x1"),
            "eth_blockNumber" => json!("0x100"),
            "eth_getLogs" => Value::Array(self.logs.clone()),
            "eth_newFilter" => json!("0x1"),
            "eth_uninstallFilter" => json!(true),
            "eth_getFilterChanges" => {
                let batch = self.filter_batches.lock().unwrap().pop_front();
                Value::Array(batch.unwrap_or_default())
            }
            "eth_call" => {
                let tx = &request["params"][0];
                let input = tx["input"]
                    .as_str()
                    .or_else(|| tx["data"].as_str())
                    .unwrap_or_default();
                let selector = input.trim_start_matches("0x").get(..8).unwrap_or_default();
                match self.calls.get(selector) {
                    Some(output) => json!(format!("0x{}", output)),
                    None => {
                        return json!({
                            "jsonrpc": "2.0",
                            "id": id,
                            "error": { "code": 3, "message": "execution reverted", "data": "0x" }
                        });
                    }
                }
            }
            other => {
                return json!({
                    "jsonrpc": "2.0",
                    "id": id,
                    "error": { "code": -32601, "message": format!("method {other} not found") }
                });
            }
        };
        json!({ "jsonrpc": "2.0", "id": id, "result": result })
    }
}

impl Respond for RpcNode {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body: Value = serde_json::from_slice(&request.body).unwrap_or(Value::Null);
        let response = match body {
            Value::Array(batch) => Value::Array(batch.iter().map(|r| self.answer(r)).collect()),
            single => self.answer(&single),
        };
        ResponseTemplate::new(200).set_body_json(response)
    }
}

/// Start a mock node answering every POST with `node`.
pub async fn start_rpc_node(node: RpcNode) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(node)
        .mount(&server)
        .await;
    server
}

/// Create a CLI command pointing to a mock node.
pub fn superform_cmd_with_mock(mock: &MockServer) -> Command {
    let mut cmd = superform_cmd();
    cmd.env("ETH_RPC_URL", mock.uri());
    cmd
}

/// Create a CLI command without mock server (for validation tests).
pub fn superform_cmd() -> Command {
    let mut cmd = Command::cargo_bin("superform").unwrap();
    cmd.env_remove("ETH_RPC_URL")
        .env_remove("SUPERFORM_FACTORY")
        .env_remove("SUPERFORM_CORE_STATE_REGISTRY")
        .env_remove("SUPERFORM_SUPER_POSITIONS")
        .env("NO_COLOR", "1");
    cmd
}

/// Build a JSON-RPC log object.
pub fn rpc_log(address: &str, topics: &[String], data: &str, block: u64) -> Value {
    json!({
        "address": address,
        "topics": topics,
        "data": format!("0x{}", data),
        "blockNumber": format!("{:#x}", block),
        "blockHash": format!("0x{}", "bb".repeat(32)),
        "transactionHash": format!("0x{}", "cc".repeat(32)),
        "transactionIndex": "0x0",
        "logIndex": "0x1",
        "removed": false,
    })
}
