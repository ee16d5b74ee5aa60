//! Error types for the contracts crate.

use alloy::primitives::Bytes;
use alloy::sol_types::SolInterface;
use thiserror::Error;

/// Errors that can occur when using contract clients.
#[derive(Debug, Error)]
pub enum ContractError {
    /// RPC connection failed.
    #[error("RPC connection failed: {0}")]
    RpcConnection(String),

    /// Invalid private key.
    #[error("Invalid private key")]
    InvalidPrivateKey,

    /// A read (`eth_call`) or gas estimate failed.
    ///
    /// `revert_data` holds the raw revert payload when the node returned one.
    #[error("Call to {method} failed: {message}")]
    Call {
        method: &'static str,
        message: String,
        revert_data: Option<Bytes>,
    },

    /// Transaction failed.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// Fetching logs from the node failed.
    #[error("Event query failed: {0}")]
    EventQuery(String),

    /// A log could not be decoded as the requested event.
    #[error("Failed to decode event log: {0}")]
    EventDecode(String),

    /// Installing or running a log subscription failed.
    #[error("Event subscription failed: {0}")]
    Subscription(String),

    /// Embedded contract metadata could not be parsed.
    #[error("Invalid contract ABI: {0}")]
    Abi(String),
}

impl ContractError {
    /// Wrap a contract call failure, keeping the revert payload if there is one.
    pub(crate) fn call(method: &'static str, err: alloy::contract::Error) -> Self {
        let revert_data = err.as_revert_data();
        Self::Call {
            method,
            message: err.to_string(),
            revert_data,
        }
    }

    /// Raw revert payload returned by the node, if any.
    pub fn revert_data(&self) -> Option<&Bytes> {
        match self {
            Self::Call { revert_data, .. } => revert_data.as_ref(),
            _ => None,
        }
    }

    /// Decode the revert payload against a generated error enum such as
    /// `ISuperformRouter::ISuperformRouterErrors`.
    ///
    /// Returns `None` when there is no payload or it matches none of the
    /// contract's custom errors.
    pub fn decode_revert<E: SolInterface>(&self) -> Option<E> {
        let data = self.revert_data()?;
        E::abi_decode(data).ok()
    }
}

/// Result type alias for contract operations.
pub type Result<T> = std::result::Result<T, ContractError>;
