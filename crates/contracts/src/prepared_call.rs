//! Prepared call types for deferred transaction execution.
//!
//! Every state-mutating contract function is exposed as a `PreparedCall`: the
//! typed call and its target are built up front, and the caller decides
//! whether to simulate it, estimate it, send it or hand it to a batching
//! layer.

use alloy::primitives::{Address, Bytes, U256};
use alloy::providers::Provider;
use alloy::rpc::types::{TransactionReceipt, TransactionRequest};
use alloy::sol_types::SolCall;
use tracing::debug;

use crate::error::{ContractError, Result};
use crate::provider::HttpProvider;

/// A prepared transaction that can be inspected, simulated or sent.
///
/// # Example
///
/// ```rust,ignore
/// // Simulate, then submit
/// let call = router.single_direct_single_vault_deposit(req, fee);
/// call.call().await?;
/// let receipt = call.send().await?;
///
/// // Hand off to a batching layer
/// let (addr, call) = router.single_direct_single_vault_deposit(req, fee).prepare();
/// ```
pub struct PreparedCall<'a, C: SolCall> {
    to: Address,
    call: C,
    value: U256,
    provider: &'a HttpProvider,
}

impl<'a, C: SolCall> PreparedCall<'a, C> {
    /// Create a new prepared call.
    pub fn new(to: Address, call: C, value: U256, provider: &'a HttpProvider) -> Self {
        Self {
            to,
            call,
            value,
            provider,
        }
    }

    /// Consumes self and returns `(address, call)`.
    pub fn prepare(self) -> (Address, C) {
        (self.to, self.call)
    }

    /// Returns the target address for this call.
    pub fn to(&self) -> Address {
        self.to
    }

    /// Returns the native value sent with this call.
    pub fn value(&self) -> U256 {
        self.value
    }

    /// ABI-encoded calldata, selector included.
    pub fn calldata(&self) -> Bytes {
        self.call.abi_encode().into()
    }

    /// Consumes self and returns the unsigned transaction request.
    pub fn into_request(self) -> TransactionRequest {
        self.request()
    }

    fn request(&self) -> TransactionRequest {
        TransactionRequest::default()
            .to(self.to)
            .input(self.calldata().into())
            .value(self.value)
    }

    /// Simulates the call with `eth_call` and decodes its return values.
    pub async fn call(&self) -> Result<C::Return> {
        debug!(to = %self.to, method = C::SIGNATURE, "simulating call");
        let output = self
            .provider
            .call(self.request())
            .await
            .map_err(|e| ContractError::call(C::SIGNATURE, e.into()))?;

        C::abi_decode_returns(&output).map_err(|e| ContractError::Call {
            method: C::SIGNATURE,
            message: format!("Failed to decode return data: {}", e),
            revert_data: None,
        })
    }

    /// Estimates the gas needed to execute this call.
    pub async fn estimate_gas(&self) -> Result<u64> {
        self.provider
            .estimate_gas(self.request())
            .await
            .map_err(|e| ContractError::call(C::SIGNATURE, e.into()))
    }

    /// Sends the transaction and waits for the receipt.
    pub async fn send(self) -> Result<TransactionReceipt> {
        debug!(to = %self.to, method = C::SIGNATURE, value = %self.value, "sending transaction");

        let pending = self
            .provider
            .send_transaction(self.request())
            .await
            .map_err(|e| {
                ContractError::TransactionFailed(format!("Failed to send transaction: {}", e))
            })?;

        let receipt = pending.get_receipt().await.map_err(|e| {
            ContractError::TransactionFailed(format!("Failed to get receipt: {}", e))
        })?;

        debug!(tx = %receipt.transaction_hash, status = receipt.status(), "transaction mined");
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::{IPayMaster, ISuperformFactory};
    use crate::provider::connect;

    fn create_test_provider() -> HttpProvider {
        connect("http://localhost:8545").unwrap()
    }

    fn withdraw_call() -> IPayMaster::withdrawNativeToCall {
        IPayMaster::withdrawNativeToCall {
            superRegistryId_: alloy::primitives::B256::repeat_byte(0x11),
            nativeAmount_: U256::from(100),
        }
    }

    #[test]
    fn test_to_returns_target_address() {
        let provider = create_test_provider();
        let target = Address::repeat_byte(0x42);

        let prepared = PreparedCall::new(target, withdraw_call(), U256::ZERO, &provider);

        assert_eq!(prepared.to(), target);
    }

    #[test]
    fn test_value_returns_native_amount() {
        let provider = create_test_provider();
        let value = U256::from(1_000_000_000_000_000_000u64); // 1 ETH

        let prepared = PreparedCall::new(
            Address::repeat_byte(0x42),
            withdraw_call(),
            value,
            &provider,
        );

        assert_eq!(prepared.value(), value);
    }

    #[test]
    fn test_calldata_starts_with_selector() {
        let provider = create_test_provider();
        let prepared = PreparedCall::new(
            Address::repeat_byte(0x42),
            withdraw_call(),
            U256::ZERO,
            &provider,
        );

        let calldata = prepared.calldata();
        assert_eq!(&calldata[..4], IPayMaster::withdrawNativeToCall::SELECTOR.as_slice());
        // selector + bytes32 + uint256
        assert_eq!(calldata.len(), 4 + 32 + 32);
    }

    #[test]
    fn test_prepare_returns_address_and_call_tuple() {
        let provider = create_test_provider();
        let target = Address::repeat_byte(0x42);
        let vault = Address::repeat_byte(0x01);
        let call = ISuperformFactory::createSuperformCall {
            formImplementationId_: 1,
            vault_: vault,
        };

        let prepared = PreparedCall::new(target, call, U256::ZERO, &provider);
        let (addr, returned_call) = prepared.prepare();

        assert_eq!(addr, target);
        assert_eq!(returned_call.formImplementationId_, 1);
        assert_eq!(returned_call.vault_, vault);
    }

    #[test]
    fn test_into_request_carries_all_fields() {
        let provider = create_test_provider();
        let target = Address::repeat_byte(0x42);
        let value = U256::from(500);

        let prepared = PreparedCall::new(target, withdraw_call(), value, &provider);
        let calldata = prepared.calldata();
        let request = prepared.into_request();

        assert_eq!(request.to, Some(target.into()));
        assert_eq!(request.value, Some(value));
        assert_eq!(request.input.input(), Some(&calldata));
    }
}
