//! Client for the core state registry.
//!
//! Tracks cross-chain payloads from receipt through update and processing,
//! plus the failed-deposit rescue flow.

use alloy::primitives::{Address, B256, Bytes, U256};

use crate::bindings::ICoreStateRegistry;
use crate::contract::{define_contract_client, event_accessors};
use crate::error::{ContractError, Result};
use crate::prepared_call::PreparedCall;

define_contract_client!(
    /// Client for `CoreStateRegistry`.
    CoreStateRegistry,
    ICoreStateRegistry::ICoreStateRegistryInstance,
    ICoreStateRegistry::ICoreStateRegistryEvents,
    CORE_STATE_REGISTRY
);

impl CoreStateRegistry {
    /// Chain id the contract was deployed on.
    pub async fn chain_id(&self) -> Result<u64> {
        self.contract
            .CHAIN_ID()
            .call()
            .await
            .map_err(|e| ContractError::call("CHAIN_ID", e))
    }

    /// Superform ids, amounts and proposal time of a payload's failed deposits.
    pub async fn get_failed_deposits(
        &self,
        payload_id: U256,
    ) -> Result<ICoreStateRegistry::getFailedDepositsReturn> {
        self.contract
            .getFailedDeposits(payload_id)
            .call()
            .await
            .map_err(|e| ContractError::call("getFailedDeposits", e))
    }

    /// AMB ids that delivered a payload.
    pub async fn get_message_amb(&self, payload_id: U256) -> Result<Vec<u8>> {
        self.contract
            .getMessageAMB(payload_id)
            .call()
            .await
            .map_err(|e| ContractError::call("getMessageAMB", e))
    }

    /// Number of proofs received for a message hash.
    pub async fn message_quorum(&self, proof: B256) -> Result<U256> {
        self.contract
            .messageQuorum(proof)
            .call()
            .await
            .map_err(|e| ContractError::call("messageQuorum", e))
    }

    /// Encoded body of a received payload.
    pub async fn payload_body(&self, payload_id: U256) -> Result<Bytes> {
        self.contract
            .payloadBody(payload_id)
            .call()
            .await
            .map_err(|e| ContractError::call("payloadBody", e))
    }

    /// Packed header (tx type, callback type, multi flag, sender, src chain) of a payload.
    pub async fn payload_header(&self, payload_id: U256) -> Result<U256> {
        self.contract
            .payloadHeader(payload_id)
            .call()
            .await
            .map_err(|e| ContractError::call("payloadHeader", e))
    }

    /// Processing status of a payload: 0 none, 1 stored, 2 updated, 3 processed.
    pub async fn payload_tracking(&self, payload_id: U256) -> Result<u8> {
        self.contract
            .payloadTracking(payload_id)
            .call()
            .await
            .map_err(|e| ContractError::call("payloadTracking", e))
    }

    /// Number of payloads received so far; ids start at 1.
    pub async fn payloads_count(&self) -> Result<U256> {
        self.contract
            .payloadsCount()
            .call()
            .await
            .map_err(|e| ContractError::call("payloadsCount", e))
    }

    /// Address of the protocol-wide `SuperRegistry`.
    pub async fn super_registry(&self) -> Result<Address> {
        self.contract
            .superRegistry()
            .call()
            .await
            .map_err(|e| ContractError::call("superRegistry", e))
    }

    /// Whether `final_amount` is within `max_slippage` of `amount`.
    pub async fn validate_slippage(
        &self,
        final_amount: U256,
        amount: U256,
        max_slippage: U256,
    ) -> Result<bool> {
        self.contract
            .validateSlippage(final_amount, amount, max_slippage)
            .call()
            .await
            .map_err(|e| ContractError::call("validateSlippage", e))
    }

    /// Send a cross-chain message through the given AMBs. Router only.
    pub fn dispatch_payload(
        &self,
        src_sender: Address,
        amb_ids: Vec<u8>,
        dst_chain_id: u64,
        message: Bytes,
        extra_data: Bytes,
        value: U256,
    ) -> PreparedCall<'_, ICoreStateRegistry::dispatchPayloadCall> {
        let call = ICoreStateRegistry::dispatchPayloadCall {
            srcSender_: src_sender,
            ambIds_: amb_ids,
            dstChainId_: dst_chain_id,
            message_: message,
            extraData_: extra_data,
        };
        PreparedCall::new(self.address(), call, value, self.contract.provider())
    }

    /// Dispute a proposed rescue while the dispute window is open.
    pub fn dispute_rescue_failed_deposits(
        &self,
        payload_id: U256,
    ) -> PreparedCall<'_, ICoreStateRegistry::disputeRescueFailedDepositsCall> {
        let call = ICoreStateRegistry::disputeRescueFailedDepositsCall { payloadId_: payload_id };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    /// Pay out a rescue once its dispute window has elapsed.
    pub fn finalize_rescue_failed_deposits(
        &self,
        payload_id: U256,
    ) -> PreparedCall<'_, ICoreStateRegistry::finalizeRescueFailedDepositsCall> {
        let call = ICoreStateRegistry::finalizeRescueFailedDepositsCall { payloadId_: payload_id };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    /// Process a stored payload once quorum is reached.
    pub fn process_payload(
        &self,
        payload_id: U256,
        value: U256,
    ) -> PreparedCall<'_, ICoreStateRegistry::processPayloadCall> {
        let call = ICoreStateRegistry::processPayloadCall { payloadId_: payload_id };
        PreparedCall::new(self.address(), call, value, self.contract.provider())
    }

    /// Propose refund amounts for the failed deposits of a payload.
    pub fn propose_rescue_failed_deposits(
        &self,
        payload_id: U256,
        proposed_amounts: Vec<U256>,
    ) -> PreparedCall<'_, ICoreStateRegistry::proposeRescueFailedDepositsCall> {
        let call = ICoreStateRegistry::proposeRescueFailedDepositsCall {
            payloadId_: payload_id,
            proposedAmounts_: proposed_amounts,
        };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    /// Deliver a message from an AMB implementation.
    pub fn receive_payload(
        &self,
        src_chain_id: u64,
        message: Bytes,
    ) -> PreparedCall<'_, ICoreStateRegistry::receivePayloadCall> {
        let call = ICoreStateRegistry::receivePayloadCall {
            srcChainId_: src_chain_id,
            message_: message,
        };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    /// Set the final tokens and amounts a deposit payload received after bridging.
    pub fn update_deposit_payload(
        &self,
        payload_id: U256,
        final_tokens: Vec<Address>,
        final_amounts: Vec<U256>,
    ) -> PreparedCall<'_, ICoreStateRegistry::updateDepositPayloadCall> {
        let call = ICoreStateRegistry::updateDepositPayloadCall {
            payloadId_: payload_id,
            finalTokens_: final_tokens,
            finalAmounts_: final_amounts,
        };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    /// Attach liquidity tx data to a withdraw payload.
    pub fn update_withdraw_payload(
        &self,
        payload_id: U256,
        tx_data: Vec<Bytes>,
    ) -> PreparedCall<'_, ICoreStateRegistry::updateWithdrawPayloadCall> {
        let call = ICoreStateRegistry::updateWithdrawPayloadCall {
            payloadId_: payload_id,
            txData_: tx_data,
        };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    event_accessors! {
        ICoreStateRegistry {
            FailedXChainDeposits =>
                filter_failed_xchain_deposits,
                watch_failed_xchain_deposits,
                parse_failed_xchain_deposits(payload_id: U256);
            PayloadProcessed =>
                filter_payload_processed,
                watch_payload_processed,
                parse_payload_processed(payload_id: U256);
            PayloadReceived =>
                filter_payload_received,
                watch_payload_received,
                parse_payload_received(src_chain_id: u64, dst_chain_id: u64, payload_id: U256);
            PayloadUpdated =>
                filter_payload_updated,
                watch_payload_updated,
                parse_payload_updated(payload_id: U256);
            ProofReceived =>
                filter_proof_received,
                watch_proof_received,
                parse_proof_received(proof: B256);
            RescueDisputed =>
                filter_rescue_disputed,
                watch_rescue_disputed,
                parse_rescue_disputed(payload_id: U256);
            RescueFinalized =>
                filter_rescue_finalized,
                watch_rescue_finalized,
                parse_rescue_finalized(payload_id: U256);
            RescueProposed =>
                filter_rescue_proposed,
                watch_rescue_proposed,
                parse_rescue_proposed(payload_id: U256);
            SuperRegistryUpdated =>
                filter_super_registry_updated,
                watch_super_registry_updated,
                parse_super_registry_updated(super_registry: Address);
        }
    }
}
