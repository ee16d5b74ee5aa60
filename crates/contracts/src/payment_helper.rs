//! Client for the payment helper.
//!
//! Read-side fee estimation for every router request shape, and the admin
//! setters for per-chain gas configuration.

use alloy::primitives::{Address, Bytes, U256};

use crate::bindings::{
    IPaymentHelper, MultiDstMultiVaultStateReq, MultiDstSingleVaultStateReq, PaymentHelperConfig,
    SingleDirectMultiVaultStateReq, SingleDirectSingleVaultStateReq, SingleXChainMultiVaultStateReq,
    SingleXChainSingleVaultStateReq,
};
use crate::contract::{define_contract_client, event_accessors};
use crate::error::{ContractError, Result};
use crate::prepared_call::PreparedCall;

define_contract_client!(
    /// Client for `PaymentHelper`.
    PaymentHelper,
    IPaymentHelper::IPaymentHelperInstance,
    IPaymentHelper::IPaymentHelperEvents,
    PAYMENT_HELPER
);

impl PaymentHelper {
    /// Chain id the contract was deployed on.
    pub async fn chain_id(&self) -> Result<u64> {
        self.contract
            .CHAIN_ID()
            .call()
            .await
            .map_err(|e| ContractError::call("CHAIN_ID", e))
    }

    pub async fn ack_gas_cost(&self, chain_id: u64) -> Result<U256> {
        self.contract
            .ackGasCost(chain_id)
            .call()
            .await
            .map_err(|e| ContractError::call("ackGasCost", e))
    }

    /// Fees and encoded extra data needed to send `message` through `amb_ids`.
    pub async fn calculate_amb_data(
        &self,
        dst_chain_id: u64,
        amb_ids: Vec<u8>,
        message: Bytes,
    ) -> Result<IPaymentHelper::calculateAMBDataReturn> {
        self.contract
            .calculateAMBData(dst_chain_id, amb_ids, message)
            .call()
            .await
            .map_err(|e| ContractError::call("calculateAMBData", e))
    }

    pub async fn deposit_gas_used(&self, chain_id: u64) -> Result<U256> {
        self.contract
            .depositGasUsed(chain_id)
            .call()
            .await
            .map_err(|e| ContractError::call("depositGasUsed", e))
    }

    pub async fn emergency_cost(&self, chain_id: u64) -> Result<U256> {
        self.contract
            .emergencyCost(chain_id)
            .call()
            .await
            .map_err(|e| ContractError::call("emergencyCost", e))
    }

    /// Per-AMB fees for sending `message` to `dst_chain_id`.
    pub async fn estimate_amb_fees(
        &self,
        amb_ids: Vec<u8>,
        dst_chain_id: u64,
        message: Bytes,
        extra_data: Vec<Bytes>,
    ) -> Result<IPaymentHelper::estimateAMBFeesReturn> {
        self.contract
            .estimateAMBFees(amb_ids, dst_chain_id, message, extra_data)
            .call()
            .await
            .map_err(|e| ContractError::call("estimateAMBFees", e))
    }

    /// Native cost of acknowledging a payload back to its source chain.
    pub async fn estimate_ack_cost(&self, payload_id: U256) -> Result<U256> {
        self.contract
            .estimateAckCost(payload_id)
            .call()
            .await
            .map_err(|e| ContractError::call("estimateAckCost", e))
    }

    pub async fn estimate_ack_cost_default(
        &self,
        multi: bool,
        ack_amb_ids: Vec<u8>,
        src_chain_id: u64,
    ) -> Result<U256> {
        self.contract
            .estimateAckCostDefault(multi, ack_amb_ids, src_chain_id)
            .call()
            .await
            .map_err(|e| ContractError::call("estimateAckCostDefault", e))
    }

    pub async fn estimate_ack_cost_default_native_source(
        &self,
        multi: bool,
        ack_amb_ids: Vec<u8>,
        src_chain_id: u64,
    ) -> Result<U256> {
        self.contract
            .estimateAckCostDefaultNativeSource(multi, ack_amb_ids, src_chain_id)
            .call()
            .await
            .map_err(|e| ContractError::call("estimateAckCostDefaultNativeSource", e))
    }

    /// Liquidity, source, destination and total cost of a multi-destination multi-vault request.
    pub async fn estimate_multi_dst_multi_vault(
        &self,
        req: MultiDstMultiVaultStateReq,
        is_deposit: bool,
    ) -> Result<IPaymentHelper::estimateMultiDstMultiVaultReturn> {
        self.contract
            .estimateMultiDstMultiVault(req, is_deposit)
            .call()
            .await
            .map_err(|e| ContractError::call("estimateMultiDstMultiVault", e))
    }

    /// Liquidity, source, destination and total cost of a multi-destination single-vault request.
    pub async fn estimate_multi_dst_single_vault(
        &self,
        req: MultiDstSingleVaultStateReq,
        is_deposit: bool,
    ) -> Result<IPaymentHelper::estimateMultiDstSingleVaultReturn> {
        self.contract
            .estimateMultiDstSingleVault(req, is_deposit)
            .call()
            .await
            .map_err(|e| ContractError::call("estimateMultiDstSingleVault", e))
    }

    /// Liquidity and total cost of a same-chain multi-vault request.
    pub async fn estimate_single_direct_multi_vault(
        &self,
        req: SingleDirectMultiVaultStateReq,
        is_deposit: bool,
    ) -> Result<IPaymentHelper::estimateSingleDirectMultiVaultReturn> {
        self.contract
            .estimateSingleDirectMultiVault(req, is_deposit)
            .call()
            .await
            .map_err(|e| ContractError::call("estimateSingleDirectMultiVault", e))
    }

    /// Liquidity and total cost of a same-chain single-vault request.
    pub async fn estimate_single_direct_single_vault(
        &self,
        req: SingleDirectSingleVaultStateReq,
        is_deposit: bool,
    ) -> Result<IPaymentHelper::estimateSingleDirectSingleVaultReturn> {
        self.contract
            .estimateSingleDirectSingleVault(req, is_deposit)
            .call()
            .await
            .map_err(|e| ContractError::call("estimateSingleDirectSingleVault", e))
    }

    /// Liquidity, source, destination and total cost of a cross-chain multi-vault request.
    pub async fn estimate_single_xchain_multi_vault(
        &self,
        req: SingleXChainMultiVaultStateReq,
        is_deposit: bool,
    ) -> Result<IPaymentHelper::estimateSingleXChainMultiVaultReturn> {
        self.contract
            .estimateSingleXChainMultiVault(req, is_deposit)
            .call()
            .await
            .map_err(|e| ContractError::call("estimateSingleXChainMultiVault", e))
    }

    /// Liquidity, source, destination and total cost of a cross-chain single-vault request.
    pub async fn estimate_single_xchain_single_vault(
        &self,
        req: SingleXChainSingleVaultStateReq,
        is_deposit: bool,
    ) -> Result<IPaymentHelper::estimateSingleXChainSingleVaultReturn> {
        self.contract
            .estimateSingleXChainSingleVault(req, is_deposit)
            .call()
            .await
            .map_err(|e| ContractError::call("estimateSingleXChainSingleVault", e))
    }

    pub async fn extra_data_for_transmuter(&self) -> Result<Bytes> {
        self.contract
            .extraDataForTransmuter()
            .call()
            .await
            .map_err(|e| ContractError::call("extraDataForTransmuter", e))
    }

    pub async fn gas_per_byte(&self, chain_id: u64) -> Result<U256> {
        self.contract
            .gasPerByte(chain_id)
            .call()
            .await
            .map_err(|e| ContractError::call("gasPerByte", e))
    }

    /// Fallback gas price configured for a chain.
    pub async fn gas_price(&self, chain_id: u64) -> Result<U256> {
        self.contract
            .gasPrice(chain_id)
            .call()
            .await
            .map_err(|e| ContractError::call("gasPrice", e))
    }

    pub async fn gas_price_oracle(&self, chain_id: u64) -> Result<Address> {
        self.contract
            .gasPriceOracle(chain_id)
            .call()
            .await
            .map_err(|e| ContractError::call("gasPriceOracle", e))
    }

    pub async fn get_register_transmuter_amb_data(&self) -> Result<Bytes> {
        self.contract
            .getRegisterTransmuterAMBData()
            .call()
            .await
            .map_err(|e| ContractError::call("getRegisterTransmuterAMBData", e))
    }

    pub async fn native_feed_oracle(&self, chain_id: u64) -> Result<Address> {
        self.contract
            .nativeFeedOracle(chain_id)
            .call()
            .await
            .map_err(|e| ContractError::call("nativeFeedOracle", e))
    }

    /// Fallback native token price configured for a chain.
    pub async fn native_price(&self, chain_id: u64) -> Result<U256> {
        self.contract
            .nativePrice(chain_id)
            .call()
            .await
            .map_err(|e| ContractError::call("nativePrice", e))
    }

    /// Address of the protocol-wide `SuperRegistry`.
    pub async fn super_registry(&self) -> Result<Address> {
        self.contract
            .superRegistry()
            .call()
            .await
            .map_err(|e| ContractError::call("superRegistry", e))
    }

    pub async fn swap_gas_used(&self, chain_id: u64) -> Result<U256> {
        self.contract
            .swapGasUsed(chain_id)
            .call()
            .await
            .map_err(|e| ContractError::call("swapGasUsed", e))
    }

    pub async fn timelock_cost(&self, chain_id: u64) -> Result<U256> {
        self.contract
            .timelockCost(chain_id)
            .call()
            .await
            .map_err(|e| ContractError::call("timelockCost", e))
    }

    pub async fn update_deposit_gas_used(&self, chain_id: u64) -> Result<U256> {
        self.contract
            .updateDepositGasUsed(chain_id)
            .call()
            .await
            .map_err(|e| ContractError::call("updateDepositGasUsed", e))
    }

    pub async fn update_withdraw_gas_used(&self, chain_id: u64) -> Result<U256> {
        self.contract
            .updateWithdrawGasUsed(chain_id)
            .call()
            .await
            .map_err(|e| ContractError::call("updateWithdrawGasUsed", e))
    }

    pub async fn withdraw_gas_used(&self, chain_id: u64) -> Result<U256> {
        self.contract
            .withdrawGasUsed(chain_id)
            .call()
            .await
            .map_err(|e| ContractError::call("withdrawGasUsed", e))
    }

    /// Register gas and price configuration for a remote chain.
    pub fn add_remote_chain(
        &self,
        chain_id: u64,
        config: PaymentHelperConfig,
    ) -> PreparedCall<'_, IPaymentHelper::addRemoteChainCall> {
        let call = IPaymentHelper::addRemoteChainCall { chainId_: chain_id, config_: config };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    /// Register configuration for several remote chains.
    pub fn add_remote_chains(
        &self,
        chain_ids: Vec<u64>,
        configs: Vec<PaymentHelperConfig>,
    ) -> PreparedCall<'_, IPaymentHelper::addRemoteChainsCall> {
        let call = IPaymentHelper::addRemoteChainsCall { chainIds_: chain_ids, configs_: configs };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    /// Update several configuration entries of one remote chain.
    pub fn batch_update_remote_chain(
        &self,
        chain_id: u64,
        config_types: Vec<U256>,
        configs: Vec<Bytes>,
    ) -> PreparedCall<'_, IPaymentHelper::batchUpdateRemoteChainCall> {
        let call = IPaymentHelper::batchUpdateRemoteChainCall {
            chainId_: chain_id,
            configTypes_: config_types,
            configs_: configs,
        };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    /// Update configuration entries across several remote chains.
    pub fn batch_update_remote_chains(
        &self,
        chain_ids: Vec<u64>,
        config_types: Vec<Vec<U256>>,
        configs: Vec<Vec<Bytes>>,
    ) -> PreparedCall<'_, IPaymentHelper::batchUpdateRemoteChainsCall> {
        let call = IPaymentHelper::batchUpdateRemoteChainsCall {
            chainIds_: chain_ids,
            configTypes_: config_types,
            configs_: configs,
        };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    pub fn update_register_aerc20_params(
        &self,
        extra_data_for_transmuter: Bytes,
    ) -> PreparedCall<'_, IPaymentHelper::updateRegisterAERC20ParamsCall> {
        let call = IPaymentHelper::updateRegisterAERC20ParamsCall {
            extraDataForTransmuter_: extra_data_for_transmuter,
        };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    /// Update one configuration entry of a remote chain.
    pub fn update_remote_chain(
        &self,
        chain_id: u64,
        config_type: U256,
        config: Bytes,
    ) -> PreparedCall<'_, IPaymentHelper::updateRemoteChainCall> {
        let call = IPaymentHelper::updateRemoteChainCall {
            chainId_: chain_id,
            configType_: config_type,
            config_: config,
        };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    event_accessors! {
        IPaymentHelper {
            ChainConfigAdded =>
                filter_chain_config_added,
                watch_chain_config_added,
                parse_chain_config_added();
            ChainConfigUpdated =>
                filter_chain_config_updated,
                watch_chain_config_updated,
                parse_chain_config_updated(chain_id: u64, config_type: U256);
        }
    }
}
