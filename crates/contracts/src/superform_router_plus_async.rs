//! Client for the router plus async.

use alloy::primitives::{Address, Bytes, FixedBytes, U256};

use crate::bindings::{
    CompleteCrossChainRebalanceArgs, DecodedRouterPlusRebalanceCallData, ISuperformRouterPlusAsync,
    XChainRebalanceData,
};
use crate::contract::{define_contract_client, event_accessors};
use crate::error::{ContractError, Result};
use crate::prepared_call::PreparedCall;

define_contract_client!(
    /// Client for `SuperformRouterPlusAsync`.
    SuperformRouterPlusAsync,
    ISuperformRouterPlusAsync::ISuperformRouterPlusAsyncInstance,
    ISuperformRouterPlusAsync::ISuperformRouterPlusAsyncEvents,
    SUPERFORM_ROUTER_PLUS_ASYNC
);

impl SuperformRouterPlusAsync {
    /// Chain id the contract was deployed on.
    pub async fn chain_id(&self) -> Result<u64> {
        self.contract
            .CHAIN_ID()
            .call()
            .await
            .map_err(|e| ContractError::call("CHAIN_ID", e))
    }

    /// Decoded rebalance instructions stored for a receiver and payload.
    pub async fn decode_xchain_rebalance_call_data(
        &self,
        receiver_address_sp: Address,
        router_plus_payload_id: U256,
    ) -> Result<DecodedRouterPlusRebalanceCallData> {
        self.contract
            .decodeXChainRebalanceCallData(receiver_address_sp, router_plus_payload_id)
            .call()
            .await
            .map_err(|e| ContractError::call("decodeXChainRebalanceCallData", e))
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

    /// Whether a router-plus payload has been completed.
    pub async fn processed_rebalance_payload(&self, router_plus_payload_id: U256) -> Result<bool> {
        self.contract
            .processedRebalancePayload(router_plus_payload_id)
            .call()
            .await
            .map_err(|e| ContractError::call("processedRebalancePayload", e))
    }

    /// Pending refund for a router-plus payload.
    pub async fn refunds(
        &self,
        router_plus_payload_id: U256,
    ) -> Result<ISuperformRouterPlusAsync::refundsReturn> {
        self.contract
            .refunds(router_plus_payload_id)
            .call()
            .await
            .map_err(|e| ContractError::call("refunds", e))
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

    /// Raw rebalance instructions stored for a receiver and payload.
    pub async fn xchain_rebalance_call_data(
        &self,
        receiver_address_sp: Address,
        router_plus_payload_id: U256,
    ) -> Result<ISuperformRouterPlusAsync::xChainRebalanceCallDataReturn> {
        self.contract
            .xChainRebalanceCallData(receiver_address_sp, router_plus_payload_id)
            .call()
            .await
            .map_err(|e| ContractError::call("xChainRebalanceCallData", e))
    }

    /// Finish a cross-chain rebalance with the amounts actually received.
    pub fn complete_cross_chain_rebalance(
        &self,
        args: CompleteCrossChainRebalanceArgs,
        value: U256,
    ) -> PreparedCall<'_, ISuperformRouterPlusAsync::completeCrossChainRebalanceCall> {
        let call = ISuperformRouterPlusAsync::completeCrossChainRebalanceCall { args_: args };
        PreparedCall::new(self.address(), call, value, self.contract.provider())
    }

    /// Dispute a proposed refund.
    pub fn dispute_refund(
        &self,
        router_plus_payload_id: U256,
    ) -> PreparedCall<'_, ISuperformRouterPlusAsync::disputeRefundCall> {
        let call = ISuperformRouterPlusAsync::disputeRefundCall {
            routerPlusPayloadId_: router_plus_payload_id,
        };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    /// Pay out a refund after the dispute window.
    pub fn finalize_refund(
        &self,
        router_plus_payload_id: U256,
    ) -> PreparedCall<'_, ISuperformRouterPlusAsync::finalizeRefundCall> {
        let call = ISuperformRouterPlusAsync::finalizeRefundCall {
            routerPlusPayloadId_: router_plus_payload_id,
        };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    /// Propose refunding a failed rebalance.
    pub fn propose_refund(
        &self,
        router_plus_payload_id: U256,
        refund_amount: U256,
    ) -> PreparedCall<'_, ISuperformRouterPlusAsync::proposeRefundCall> {
        let call = ISuperformRouterPlusAsync::proposeRefundCall {
            routerPlusPayloadId_: router_plus_payload_id,
            refundAmount_: refund_amount,
        };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    pub fn set_xchain_rebalance_call_data(
        &self,
        receiver_address_sp: Address,
        router_plus_payload_id: U256,
        data: XChainRebalanceData,
    ) -> PreparedCall<'_, ISuperformRouterPlusAsync::setXChainRebalanceCallDataCall> {
        let call = ISuperformRouterPlusAsync::setXChainRebalanceCallDataCall {
            receiverAddressSP_: receiver_address_sp,
            routerPlusPayloadId_: router_plus_payload_id,
            data_: data,
        };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    event_accessors! {
        ISuperformRouterPlusAsync {
            NewRefundAmountProposed =>
                filter_new_refund_amount_proposed,
                watch_new_refund_amount_proposed,
                parse_new_refund_amount_proposed(
                    router_plus_payload_id: U256,
                    new_refund_amount: U256
                );
            RefundCompleted =>
                filter_refund_completed,
                watch_refund_completed,
                parse_refund_completed(router_plus_payload_id: U256, caller: Address);
            RefundDisputed =>
                filter_refund_disputed,
                watch_refund_disputed,
                parse_refund_disputed(router_plus_payload_id: U256, disputer: Address);
            RefundInitiated =>
                filter_refund_initiated,
                watch_refund_initiated,
                parse_refund_initiated(router_plus_payload_id: U256, refund_receiver: Address);
            XChainRebalanceComplete =>
                filter_xchain_rebalance_complete,
                watch_xchain_rebalance_complete,
                parse_xchain_rebalance_complete(receiver: Address, router_plus_payload_id: U256);
        }
    }
}
