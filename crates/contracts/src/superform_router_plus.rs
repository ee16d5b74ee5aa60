//! Client for the router plus.

use alloy::primitives::{Address, Bytes, FixedBytes, U256};

use crate::bindings::{
    Deposit4626Args, ISuperformRouterPlus, InitiateXChainRebalanceArgs,
    InitiateXChainRebalanceMultiArgs, RebalanceMultiPositionsSyncArgs,
    RebalanceSinglePositionSyncArgs,
};
use crate::contract::{define_contract_client, event_accessors};
use crate::error::{ContractError, Result};
use crate::prepared_call::PreparedCall;

define_contract_client!(
    /// Client for `SuperformRouterPlus`.
    SuperformRouterPlus,
    ISuperformRouterPlus::ISuperformRouterPlusInstance,
    ISuperformRouterPlus::ISuperformRouterPlusEvents,
    SUPERFORM_ROUTER_PLUS
);

impl SuperformRouterPlus {
    /// Chain id the contract was deployed on.
    pub async fn chain_id(&self) -> Result<u64> {
        self.contract
            .CHAIN_ID()
            .call()
            .await
            .map_err(|e| ContractError::call("CHAIN_ID", e))
    }

    pub async fn router_plus_payload_id(&self) -> Result<U256> {
        self.contract
            .ROUTER_PLUS_PAYLOAD_ID()
            .call()
            .await
            .map_err(|e| ContractError::call("ROUTER_PLUS_PAYLOAD_ID", e))
    }

    pub async fn on_erc1155_batch_received(
        &self,
        operator: Address,
        from: Address,
        ids: Vec<U256>,
        values: Vec<U256>,
        data: Bytes,
    ) -> Result<FixedBytes<4>> {
        self.contract
            .onERC1155BatchReceived(operator, from, ids, values, data)
            .call()
            .await
            .map_err(|e| ContractError::call("onERC1155BatchReceived", e))
    }

    pub async fn on_erc1155_received(
        &self,
        operator: Address,
        from: Address,
        id: U256,
        value: U256,
        data: Bytes,
    ) -> Result<FixedBytes<4>> {
        self.contract
            .onERC1155Received(operator, from, id, value, data)
            .call()
            .await
            .map_err(|e| ContractError::call("onERC1155Received", e))
    }

    /// Address of the protocol-wide `SuperRegistry`.
    pub async fn super_registry(&self) -> Result<Address> {
        self.contract
            .superRegistry()
            .call()
            .await
            .map_err(|e| ContractError::call("superRegistry", e))
    }

    pub async fn supports_interface(&self, interface_id: FixedBytes<4>) -> Result<bool> {
        self.contract
            .supportsInterface(interface_id)
            .call()
            .await
            .map_err(|e| ContractError::call("supportsInterface", e))
    }

    /// Whether `selector` is allowed for a rebalance action.
    pub async fn whitelisted_selectors(&self, action: u8, selector: FixedBytes<4>) -> Result<bool> {
        self.contract
            .whitelistedSelectors(action, selector)
            .call()
            .await
            .map_err(|e| ContractError::call("whitelistedSelectors", e))
    }

    /// Redeem an ERC-4626 position and deposit the proceeds into a superform.
    pub fn deposit4626(
        &self,
        vault: Address,
        args: Deposit4626Args,
        value: U256,
    ) -> PreparedCall<'_, ISuperformRouterPlus::deposit4626Call> {
        let call = ISuperformRouterPlus::deposit4626Call { vault_: vault, args };
        PreparedCall::new(self.address(), call, value, self.contract.provider())
    }

    /// Send leftover token balance to the paymaster.
    pub fn forward_dust_to_paymaster(
        &self,
        token: Address,
    ) -> PreparedCall<'_, ISuperformRouterPlus::forwardDustToPaymasterCall> {
        let call = ISuperformRouterPlus::forwardDustToPaymasterCall { token_: token };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    /// Move several positions into new superforms in a single transaction.
    pub fn rebalance_multi_positions(
        &self,
        args: RebalanceMultiPositionsSyncArgs,
        value: U256,
    ) -> PreparedCall<'_, ISuperformRouterPlus::rebalanceMultiPositionsCall> {
        let call = ISuperformRouterPlus::rebalanceMultiPositionsCall { args };
        PreparedCall::new(self.address(), call, value, self.contract.provider())
    }

    /// Move one position into new superforms in a single transaction.
    pub fn rebalance_single_position(
        &self,
        args: RebalanceSinglePositionSyncArgs,
        value: U256,
    ) -> PreparedCall<'_, ISuperformRouterPlus::rebalanceSinglePositionCall> {
        let call = ISuperformRouterPlus::rebalanceSinglePositionCall { args };
        PreparedCall::new(self.address(), call, value, self.contract.provider())
    }

    /// Withdraw one position cross-chain and record how to re-deposit it.
    pub fn start_cross_chain_rebalance(
        &self,
        args: InitiateXChainRebalanceArgs,
        value: U256,
    ) -> PreparedCall<'_, ISuperformRouterPlus::startCrossChainRebalanceCall> {
        let call = ISuperformRouterPlus::startCrossChainRebalanceCall { args };
        PreparedCall::new(self.address(), call, value, self.contract.provider())
    }

    /// Withdraw several positions cross-chain and record how to re-deposit them.
    pub fn start_cross_chain_rebalance_multi(
        &self,
        args: InitiateXChainRebalanceMultiArgs,
        value: U256,
    ) -> PreparedCall<'_, ISuperformRouterPlus::startCrossChainRebalanceMultiCall> {
        let call = ISuperformRouterPlus::startCrossChainRebalanceMultiCall { args };
        PreparedCall::new(self.address(), call, value, self.contract.provider())
    }

    event_accessors! {
        ISuperformRouterPlus {
            Deposit4626Completed =>
                filter_deposit4626_completed,
                watch_deposit4626_completed,
                parse_deposit4626_completed(receiver: Address, vault: Address);
            RebalanceMultiSyncCompleted =>
                filter_rebalance_multi_sync_completed,
                watch_rebalance_multi_sync_completed,
                parse_rebalance_multi_sync_completed(receiver: Address);
            RebalanceSyncCompleted =>
                filter_rebalance_sync_completed,
                watch_rebalance_sync_completed,
                parse_rebalance_sync_completed(receiver: Address, id: U256);
            RouterPlusDustForwardedToPaymaster =>
                filter_router_plus_dust_forwarded_to_paymaster,
                watch_router_plus_dust_forwarded_to_paymaster,
                parse_router_plus_dust_forwarded_to_paymaster(token: Address);
            XChainRebalanceInitiated =>
                filter_xchain_rebalance_initiated,
                watch_xchain_rebalance_initiated,
                parse_xchain_rebalance_initiated(receiver: Address, router_plus_payload_id: U256);
            XChainRebalanceMultiInitiated =>
                filter_xchain_rebalance_multi_initiated,
                watch_xchain_rebalance_multi_initiated,
                parse_xchain_rebalance_multi_initiated(
                    receiver: Address,
                    router_plus_payload_id: U256
                );
        }
    }
}
