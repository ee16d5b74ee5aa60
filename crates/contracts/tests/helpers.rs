//! Test helper utilities for contracts crate RPC tests.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use alloy::hex;
use alloy::primitives::{Address, Bytes, B256};
use serde_json::{json, Value};
use superform_rs_contracts::{connect, HttpProvider};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Canned answer for one `eth_call` selector.
#[derive(Clone)]
pub enum CallOutcome {
    Return(Vec<u8>),
    Revert(Vec<u8>),
}

/// A scripted JSON-RPC node.
///
/// `eth_call` is answered by selector, `eth_getLogs` returns the configured
/// logs and each `eth_getFilterChanges` pops the next batch of filter logs.
#[derive(Default)]
pub struct RpcNode {
    calls: HashMap<[u8; 4], CallOutcome>,
    logs: Vec<Value>,
    filter_batches: Mutex<VecDeque<Vec<Value>>>,
}

impl RpcNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_return(mut self, selector: [u8; 4], output: Vec<u8>) -> Self {
        self.calls.insert(selector, CallOutcome::Return(output));
        self
    }

    pub fn with_revert(mut self, selector: [u8; 4], data: Vec<u8>) -> Self {
        self.calls.insert(selector, CallOutcome::Revert(data));
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
        let params = &request["params"];

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
                let input = params[0]["input"]
                    .as_str()
                    .or_else(|| params[0]["data"].as_str())
                    .unwrap_or_default();
                let bytes = hex::decode(input).unwrap_or_default();
                let selector: [u8; 4] = bytes
                    .get(..4)
                    .and_then(|s| s.try_into().ok())
                    .unwrap_or_default();

                match self.calls.get(&selector) {
                    Some(CallOutcome::Return(output)) => json!(hex::encode_prefixed(output)),
                    Some(CallOutcome::Revert(data)) => {
                        return json!({
                            "jsonrpc": "2.0",
                            "id": id,
                            "error": {
                                "code": 3,
                                "message": "execution reverted",
                                "data": hex::encode_prefixed(data),
                            }
                        });
                    }
                    None => {
                        return json!({
                            "jsonrpc": "2.0",
                            "id": id,
                            "error": { "code": -32601, "message": "unknown selector" }
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

/// Read-only provider pointed at a mock node.
pub fn provider_for(server: &MockServer) -> HttpProvider {
    connect(&server.uri()).unwrap()
}

/// Build a JSON-RPC log object.
pub fn rpc_log(address: Address, topics: &[B256], data: &[u8], block: u64) -> Value {
    json!({
        "address": address,
        "topics": topics,
        "data": Bytes::copy_from_slice(data),
        "blockNumber": format!("{block:#x}"),
        "blockHash": B256::repeat_byte(0xbb),
        "transactionHash": B256::repeat_byte(0xcc),
        "transactionIndex": "0x0",
        "logIndex": "0x0",
        "removed": false,
    })
}
