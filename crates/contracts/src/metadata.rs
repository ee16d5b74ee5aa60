//! Embedded compiler ABI for each bound contract.

use alloy::dyn_abi::{DynSolValue, EventExt};
pub use alloy::json_abi::JsonAbi;
use alloy::primitives::{LogData, Selector, B256};
use serde_json::Value;

use crate::error::{ContractError, Result};

/// Name and verbatim compiler ABI of one contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractMetadata {
    /// Compiler contract name, e.g. `SuperformRouter`.
    pub name: &'static str,
    /// Kebab-case alias used on the command line, e.g. `superform-router`.
    pub alias: &'static str,
    /// ABI JSON as emitted by the compiler.
    pub abi: &'static str,
}

impl ContractMetadata {
    /// Parse the embedded ABI.
    pub fn json_abi(&self) -> Result<JsonAbi> {
        serde_json::from_str(self.abi)
            .map_err(|e| ContractError::Abi(format!("{}: {}", self.name, e)))
    }

    /// Sorted 4-byte selectors of every function.
    pub fn function_selectors(&self) -> Result<Vec<Selector>> {
        let mut selectors: Vec<Selector> =
            self.json_abi()?.functions().map(|f| f.selector()).collect();
        selectors.sort_unstable();
        Ok(selectors)
    }

    /// Sorted topic0 hashes of every non-anonymous event.
    pub fn event_topics(&self) -> Result<Vec<B256>> {
        let mut topics: Vec<B256> = self
            .json_abi()?
            .events()
            .filter(|e| !e.anonymous)
            .map(|e| e.selector())
            .collect();
        topics.sort_unstable();
        Ok(topics)
    }

    /// Sorted 4-byte selectors of every custom error.
    pub fn error_selectors(&self) -> Result<Vec<Selector>> {
        let mut selectors: Vec<Selector> =
            self.json_abi()?.errors().map(|e| e.selector()).collect();
        selectors.sort_unstable();
        Ok(selectors)
    }

    fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name) || self.alias.eq_ignore_ascii_case(name)
    }
}

macro_rules! contract_metadata {
    ($($ident:ident => $name:literal, $alias:literal;)*) => {
        $(
            pub const $ident: ContractMetadata = ContractMetadata {
                name: $name,
                alias: $alias,
                abi: include_str!(concat!("../abi/", $name, ".json")),
            };
        )*

        /// Every embedded contract, in alphabetical order.
        pub const ALL_CONTRACTS: &[ContractMetadata] = &[$($ident),*];
    };
}

contract_metadata! {
    CORE_STATE_REGISTRY => "CoreStateRegistry", "core-state-registry";
    ERC4626_FORM => "ERC4626Form", "erc4626-form";
    PAY_MASTER => "PayMaster", "paymaster";
    PAYMENT_HELPER => "PaymentHelper", "payment-helper";
    SUPERFORM_FACTORY => "SuperformFactory", "superform-factory";
    SUPERFORM_ROUTER => "SuperformRouter", "superform-router";
    SUPERFORM_ROUTER_PLUS => "SuperformRouterPlus", "superform-router-plus";
    SUPERFORM_ROUTER_PLUS_ASYNC => "SuperformRouterPlusAsync", "superform-router-plus-async";
    SUPER_POSITIONS => "SuperPositions", "super-positions";
    VAULT_CLAIMER => "VaultClaimer", "vault-claimer";
}

/// Arguments of one log, decoded against a contract's JSON ABI.
#[derive(Debug, Clone, PartialEq)]
pub struct EventFields {
    pub name: String,
    /// `(parameter name, value)` pairs in declaration order.
    pub fields: Vec<(String, Value)>,
}

/// Decode `log` against the non-anonymous events of `abi`.
///
/// Returns `None` when topic0 matches no event. Indexed dynamic arguments
/// (strings, bytes, arrays) only carry their keccak hash in the log.
pub fn decode_event_fields(abi: &JsonAbi, log: &LogData) -> Result<Option<EventFields>> {
    let Some(topic0) = log.topics().first() else {
        return Ok(None);
    };
    let Some(event) = abi
        .events()
        .find(|e| !e.anonymous && e.selector() == *topic0)
    else {
        return Ok(None);
    };

    let decoded = event
        .decode_log(log)
        .map_err(|e| ContractError::EventDecode(format!("{}: {}", event.name, e)))?;

    let mut indexed = decoded.indexed.iter();
    let mut body = decoded.body.iter();
    let mut fields = Vec::with_capacity(event.inputs.len());
    for (i, param) in event.inputs.iter().enumerate() {
        let value = if param.indexed { indexed.next() } else { body.next() };
        let key = if param.name.is_empty() {
            format!("arg{}", i)
        } else {
            param.name.clone()
        };
        fields.push((key, value.map_or(Value::Null, value_json)));
    }

    Ok(Some(EventFields {
        name: event.name.clone(),
        fields,
    }))
}

/// JSON form of a decoded ABI value. Integers become decimal strings.
fn value_json(value: &DynSolValue) -> Value {
    match value {
        DynSolValue::Bool(b) => Value::Bool(*b),
        DynSolValue::Int(i, _) => Value::String(i.to_string()),
        DynSolValue::Uint(u, _) => Value::String(u.to_string()),
        DynSolValue::FixedBytes(word, size) => {
            Value::String(alloy::hex::encode_prefixed(&word[..*size]))
        }
        DynSolValue::Address(address) => Value::String(address.to_checksum(None)),
        DynSolValue::Function(function) => Value::String(function.to_string()),
        DynSolValue::Bytes(bytes) => Value::String(alloy::hex::encode_prefixed(bytes)),
        DynSolValue::String(s) => Value::String(s.clone()),
        DynSolValue::Array(values) | DynSolValue::FixedArray(values) | DynSolValue::Tuple(values) => {
            Value::Array(values.iter().map(value_json).collect())
        }
        #[allow(unreachable_patterns)]
        other => Value::String(format!("{:?}", other)),
    }
}

/// Look up a contract by compiler name or alias, ignoring case.
pub fn find(name: &str) -> Option<&'static ContractMetadata> {
    ALL_CONTRACTS.iter().find(|m| m.matches(name))
}
