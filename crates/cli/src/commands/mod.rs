//! Command implementations.

pub mod abi;
pub mod events;
pub mod factory;
pub mod positions;
pub mod registry;

pub use abi::{run_abi, run_contracts};
pub use events::{run_events, run_watch};
pub use factory::{run_factory_count, run_superform};
pub use positions::run_balance;
pub use registry::run_payload;

use alloy_primitives::{Address, U256};
use anyhow::{Context, Result};
use superform_rs_contracts::metadata::{self, ContractMetadata};

/// Parse a hex address argument.
pub(crate) fn parse_address(value: &str, what: &str) -> Result<Address> {
    value
        .parse()
        .with_context(|| format!("Invalid {} address: {}", what, value))
}

/// Parse a decimal or `0x`-prefixed id argument.
pub(crate) fn parse_id(value: &str) -> Result<U256> {
    let parsed = match value.strip_prefix("0x") {
        Some(hex) => U256::from_str_radix(hex, 16),
        None => U256::from_str_radix(value, 10),
    };
    parsed.with_context(|| format!("Invalid id: {}", value))
}

/// Resolve a contract name or alias to its embedded metadata.
pub(crate) fn find_contract(name: &str) -> Result<&'static ContractMetadata> {
    metadata::find(name).with_context(|| {
        let known: Vec<&str> = metadata::ALL_CONTRACTS.iter().map(|m| m.alias).collect();
        format!("Unknown contract: {} (expected one of: {})", name, known.join(", "))
    })
}
