//! Client for SuperPositions, the ERC-1155A share ledger.

use alloy::primitives::{Address, B256, Bytes, FixedBytes, U256};

use crate::bindings::{AMBMessage, ISuperPositions};
use crate::contract::{define_contract_client, event_accessors};
use crate::error::{ContractError, Result};
use crate::prepared_call::PreparedCall;

define_contract_client!(
    /// Client for `SuperPositions`.
    SuperPositions,
    ISuperPositions::ISuperPositionsInstance,
    ISuperPositions::ISuperPositionsEvents,
    SUPER_POSITIONS
);

impl SuperPositions {
    /// Chain id the contract was deployed on.
    pub async fn chain_id(&self) -> Result<u64> {
        self.contract
            .CHAIN_ID()
            .call()
            .await
            .map_err(|e| ContractError::call("CHAIN_ID", e))
    }

    /// Whether an ERC-20 representation is registered for `id`.
    pub async fn aerc20_exists(&self, id: U256) -> Result<bool> {
        self.contract
            .aERC20Exists(id)
            .call()
            .await
            .map_err(|e| ContractError::call("aERC20Exists", e))
    }

    pub async fn aerc20_token_id(&self, id: U256) -> Result<Address> {
        self.contract
            .aErc20TokenId(id)
            .call()
            .await
            .map_err(|e| ContractError::call("aErc20TokenId", e))
    }

    pub async fn allowance(&self, owner: Address, operator: Address, id: U256) -> Result<U256> {
        self.contract
            .allowance(owner, operator, id)
            .call()
            .await
            .map_err(|e| ContractError::call("allowance", e))
    }

    /// SuperPositions of `id` held by `owner`.
    pub async fn balance_of(&self, owner: Address, id: U256) -> Result<U256> {
        self.contract
            .balanceOf(owner, id)
            .call()
            .await
            .map_err(|e| ContractError::call("balanceOf", e))
    }

    /// Balances for each `(owner, id)` pair.
    pub async fn balance_of_batch(
        &self,
        owners: Vec<Address>,
        ids: Vec<U256>,
    ) -> Result<Vec<U256>> {
        self.contract
            .balanceOfBatch(owners, ids)
            .call()
            .await
            .map_err(|e| ContractError::call("balanceOfBatch", e))
    }

    pub async fn dynamic_uri(&self) -> Result<String> {
        self.contract
            .dynamicURI()
            .call()
            .await
            .map_err(|e| ContractError::call("dynamicURI", e))
    }

    pub async fn dynamic_uri_frozen(&self) -> Result<bool> {
        self.contract
            .dynamicURIFrozen()
            .call()
            .await
            .map_err(|e| ContractError::call("dynamicURIFrozen", e))
    }

    /// Whether `id` has ever been minted.
    pub async fn exists(&self, id: U256) -> Result<bool> {
        self.contract
            .exists(id)
            .call()
            .await
            .map_err(|e| ContractError::call("exists", e))
    }

    /// ERC-20 representation of `id`, zero if unregistered.
    pub async fn get_erc20_token_address(&self, id: U256) -> Result<Address> {
        self.contract
            .getERC20TokenAddress(id)
            .call()
            .await
            .map_err(|e| ContractError::call("getERC20TokenAddress", e))
    }

    pub async fn is_approved_for_all(&self, account: Address, operator: Address) -> Result<bool> {
        self.contract
            .isApprovedForAll(account, operator)
            .call()
            .await
            .map_err(|e| ContractError::call("isApprovedForAll", e))
    }

    pub async fn name(&self) -> Result<String> {
        self.contract
            .name()
            .call()
            .await
            .map_err(|e| ContractError::call("name", e))
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

    pub async fn symbol(&self) -> Result<String> {
        self.contract
            .symbol()
            .call()
            .await
            .map_err(|e| ContractError::call("symbol", e))
    }

    /// Total supply of `id`.
    pub async fn total_supply(&self, id: U256) -> Result<U256> {
        self.contract
            .totalSupply(id)
            .call()
            .await
            .map_err(|e| ContractError::call("totalSupply", e))
    }

    /// Packed tx info and receiver recorded for a cross-chain payload.
    pub async fn tx_history(
        &self,
        transaction_id: U256,
    ) -> Result<ISuperPositions::txHistoryReturn> {
        self.contract
            .txHistory(transaction_id)
            .call()
            .await
            .map_err(|e| ContractError::call("txHistory", e))
    }

    /// Metadata URI of `id`.
    pub async fn uri(&self, id: U256) -> Result<String> {
        self.contract
            .uri(id)
            .call()
            .await
            .map_err(|e| ContractError::call("uri", e))
    }

    /// Broadcast payload counter.
    pub async fn xchain_payload_counter(&self) -> Result<U256> {
        self.contract
            .xChainPayloadCounter()
            .call()
            .await
            .map_err(|e| ContractError::call("xChainPayloadCounter", e))
    }

    /// Burn several positions. Router only.
    pub fn burn_batch(
        &self,
        src_sender: Address,
        ids: Vec<U256>,
        amounts: Vec<U256>,
    ) -> PreparedCall<'_, ISuperPositions::burnBatchCall> {
        let call = ISuperPositions::burnBatchCall {
            srcSender_: src_sender,
            ids_: ids,
            amounts_: amounts,
        };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    /// Burn one position. Router only.
    pub fn burn_single(
        &self,
        src_sender: Address,
        id: U256,
        amount: U256,
    ) -> PreparedCall<'_, ISuperPositions::burnSingleCall> {
        let call = ISuperPositions::burnSingleCall {
            srcSender_: src_sender,
            id_: id,
            amount_: amount,
        };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    pub fn decrease_allowance(
        &self,
        operator: Address,
        id: U256,
        subtracted_value: U256,
    ) -> PreparedCall<'_, ISuperPositions::decreaseAllowanceCall> {
        let call = ISuperPositions::decreaseAllowanceCall {
            operator,
            id,
            subtractedValue: subtracted_value,
        };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    pub fn decrease_allowance_for_many(
        &self,
        operator: Address,
        ids: Vec<U256>,
        subtracted_values: Vec<U256>,
    ) -> PreparedCall<'_, ISuperPositions::decreaseAllowanceForManyCall> {
        let call = ISuperPositions::decreaseAllowanceForManyCall {
            operator,
            ids,
            subtractedValues: subtracted_values,
        };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    pub fn increase_allowance(
        &self,
        operator: Address,
        id: U256,
        added_value: U256,
    ) -> PreparedCall<'_, ISuperPositions::increaseAllowanceCall> {
        let call = ISuperPositions::increaseAllowanceCall { operator, id, addedValue: added_value };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    pub fn increase_allowance_for_many(
        &self,
        operator: Address,
        ids: Vec<U256>,
        added_values: Vec<U256>,
    ) -> PreparedCall<'_, ISuperPositions::increaseAllowanceForManyCall> {
        let call = ISuperPositions::increaseAllowanceForManyCall {
            operator,
            ids,
            addedValues: added_values,
        };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    /// Mint several positions. Router or state registry only.
    pub fn mint_batch(
        &self,
        receiver_address_sp: Address,
        ids: Vec<U256>,
        amounts: Vec<U256>,
    ) -> PreparedCall<'_, ISuperPositions::mintBatchCall> {
        let call = ISuperPositions::mintBatchCall {
            receiverAddressSP_: receiver_address_sp,
            ids_: ids,
            amounts_: amounts,
        };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    /// Mint one position. Router or state registry only.
    pub fn mint_single(
        &self,
        receiver_address_sp: Address,
        id: U256,
        amount: U256,
    ) -> PreparedCall<'_, ISuperPositions::mintSingleCall> {
        let call = ISuperPositions::mintSingleCall {
            receiverAddressSP_: receiver_address_sp,
            id_: id,
            amount_: amount,
        };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    /// Deploy the ERC-20 representation of `id`; the broadcast fee is the attached value.
    pub fn register_aerc20(
        &self,
        id: U256,
        value: U256,
    ) -> PreparedCall<'_, ISuperPositions::registerAERC20Call> {
        let call = ISuperPositions::registerAERC20Call { id };
        PreparedCall::new(self.address(), call, value, self.contract.provider())
    }

    /// ERC-1155 batch transfer.
    pub fn safe_batch_transfer_from(
        &self,
        from: Address,
        to: Address,
        ids: Vec<U256>,
        amounts: Vec<U256>,
        data: Bytes,
    ) -> PreparedCall<'_, ISuperPositions::safeBatchTransferFromCall> {
        let call = ISuperPositions::safeBatchTransferFromCall { from, to, ids, amounts, data };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    /// ERC-1155 single transfer.
    pub fn safe_transfer_from(
        &self,
        from: Address,
        to: Address,
        id: U256,
        amount: U256,
        data: Bytes,
    ) -> PreparedCall<'_, ISuperPositions::safeTransferFromCall> {
        let call = ISuperPositions::safeTransferFromCall { from, to, id, amount, data };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    pub fn set_approval_for_all(
        &self,
        operator: Address,
        approved: bool,
    ) -> PreparedCall<'_, ISuperPositions::setApprovalForAllCall> {
        let call = ISuperPositions::setApprovalForAllCall { operator, approved };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    pub fn set_approval_for_many(
        &self,
        operator: Address,
        ids: Vec<U256>,
        amounts: Vec<U256>,
    ) -> PreparedCall<'_, ISuperPositions::setApprovalForManyCall> {
        let call = ISuperPositions::setApprovalForManyCall { operator, ids, amounts };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    /// Approve `operator` for `amount` of a single `id`.
    pub fn set_approval_for_one(
        &self,
        operator: Address,
        id: U256,
        amount: U256,
    ) -> PreparedCall<'_, ISuperPositions::setApprovalForOneCall> {
        let call = ISuperPositions::setApprovalForOneCall { operator, id, amount };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    pub fn set_dynamic_uri(
        &self,
        dynamic_uri: String,
        freeze: bool,
    ) -> PreparedCall<'_, ISuperPositions::setDynamicURICall> {
        let call = ISuperPositions::setDynamicURICall { dynamicURI_: dynamic_uri, freeze_: freeze };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    /// Mint or burn positions from a multi-vault acknowledgement.
    pub fn state_multi_sync(
        &self,
        data: AMBMessage,
    ) -> PreparedCall<'_, ISuperPositions::stateMultiSyncCall> {
        let call = ISuperPositions::stateMultiSyncCall { data_: data };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    /// Mint or burn positions from a single-vault acknowledgement.
    pub fn state_sync(&self, data: AMBMessage) -> PreparedCall<'_, ISuperPositions::stateSyncCall> {
        let call = ISuperPositions::stateSyncCall { data_: data };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    pub fn state_sync_broadcast(
        &self,
        data: Bytes,
        value: U256,
    ) -> PreparedCall<'_, ISuperPositions::stateSyncBroadcastCall> {
        let call = ISuperPositions::stateSyncBroadcastCall { data_: data };
        PreparedCall::new(self.address(), call, value, self.contract.provider())
    }

    pub fn transmute_batch_to_erc1155a(
        &self,
        owner: Address,
        ids: Vec<U256>,
        amounts: Vec<U256>,
        receiver: Address,
    ) -> PreparedCall<'_, ISuperPositions::transmuteBatchToERC1155ACall> {
        let call = ISuperPositions::transmuteBatchToERC1155ACall { owner, ids, amounts, receiver };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    pub fn transmute_batch_to_erc20(
        &self,
        owner: Address,
        ids: Vec<U256>,
        amounts: Vec<U256>,
        receiver: Address,
    ) -> PreparedCall<'_, ISuperPositions::transmuteBatchToERC20Call> {
        let call = ISuperPositions::transmuteBatchToERC20Call { owner, ids, amounts, receiver };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    /// Convert ERC-20 representation back into ERC-1155 positions.
    pub fn transmute_to_erc1155a(
        &self,
        owner: Address,
        id: U256,
        amount: U256,
        receiver: Address,
    ) -> PreparedCall<'_, ISuperPositions::transmuteToERC1155ACall> {
        let call = ISuperPositions::transmuteToERC1155ACall { owner, id, amount, receiver };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    /// Convert ERC-1155 positions into their ERC-20 representation.
    pub fn transmute_to_erc20(
        &self,
        owner: Address,
        id: U256,
        amount: U256,
        receiver: Address,
    ) -> PreparedCall<'_, ISuperPositions::transmuteToERC20Call> {
        let call = ISuperPositions::transmuteToERC20Call { owner, id, amount, receiver };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    pub fn update_tx_history(
        &self,
        payload_id: U256,
        tx_info: U256,
        receiver_address_sp: Address,
    ) -> PreparedCall<'_, ISuperPositions::updateTxHistoryCall> {
        let call = ISuperPositions::updateTxHistoryCall {
            payloadId_: payload_id,
            txInfo_: tx_info,
            receiverAddressSP_: receiver_address_sp,
        };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    event_accessors! {
        ISuperPositions {
            AERC20TokenRegistered =>
                filter_aerc20_token_registered,
                watch_aerc20_token_registered,
                parse_aerc20_token_registered(token_id: U256, token_address: Address);
            ApprovalForAll =>
                filter_approval_for_all,
                watch_approval_for_all,
                parse_approval_for_all(account: Address, operator: Address);
            ApprovalForOne =>
                filter_approval_for_one,
                watch_approval_for_one,
                parse_approval_for_one(owner: Address, spender: Address);
            Completed => filter_completed, watch_completed, parse_completed(tx_id: U256);
            DynamicURIUpdated =>
                filter_dynamic_uri_updated,
                watch_dynamic_uri_updated,
                parse_dynamic_uri_updated(old_uri: B256, new_uri: B256, frozen: bool);
            TransferBatch =>
                filter_transfer_batch,
                watch_transfer_batch,
                parse_transfer_batch(operator: Address, from: Address, to: Address);
            TransferSingle =>
                filter_transfer_single,
                watch_transfer_single,
                parse_transfer_single(operator: Address, from: Address, to: Address);
            TransmutedBatchToERC1155A =>
                filter_transmuted_batch_to_erc1155a,
                watch_transmuted_batch_to_erc1155a,
                parse_transmuted_batch_to_erc1155a(user: Address, receiver: Address);
            TransmutedBatchToERC20 =>
                filter_transmuted_batch_to_erc20,
                watch_transmuted_batch_to_erc20,
                parse_transmuted_batch_to_erc20(user: Address, receiver: Address);
            TransmutedToERC1155A =>
                filter_transmuted_to_erc1155a,
                watch_transmuted_to_erc1155a,
                parse_transmuted_to_erc1155a(user: Address, receiver: Address);
            TransmutedToERC20 =>
                filter_transmuted_to_erc20,
                watch_transmuted_to_erc20,
                parse_transmuted_to_erc20(user: Address, receiver: Address);
            TxHistorySet =>
                filter_tx_history_set,
                watch_tx_history_set,
                parse_tx_history_set(payload_id: U256, receiver_address: Address);
            URI => filter_uri, watch_uri, parse_uri(id: U256);
        }
    }
}
