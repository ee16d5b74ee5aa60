//! Client for an ERC-4626 form.

use alloy::primitives::{Address, FixedBytes, U256};

use crate::bindings::{IERC4626Form, InitSingleVaultData};
use crate::contract::{define_contract_client, event_accessors};
use crate::error::{ContractError, Result};
use crate::prepared_call::PreparedCall;

define_contract_client!(
    /// Client for an `ERC4626Form` instance.
    Erc4626Form,
    IERC4626Form::IERC4626FormInstance,
    IERC4626Form::IERC4626FormEvents,
    ERC4626_FORM
);

impl Erc4626Form {
    /// Chain id the contract was deployed on.
    pub async fn chain_id(&self) -> Result<u64> {
        self.contract
            .CHAIN_ID()
            .call()
            .await
            .map_err(|e| ContractError::call("CHAIN_ID", e))
    }

    /// Underlying asset of the wrapped vault.
    pub async fn asset(&self) -> Result<Address> {
        self.contract
            .asset()
            .call()
            .await
            .map_err(|e| ContractError::call("asset", e))
    }

    /// Assets per vault share as previewed by `previewRedeem`.
    pub async fn get_preview_price_per_vault_share(&self) -> Result<U256> {
        self.contract
            .getPreviewPricePerVaultShare()
            .call()
            .await
            .map_err(|e| ContractError::call("getPreviewPricePerVaultShare", e))
    }

    /// Assets per vault share, scaled by the vault decimals.
    pub async fn get_price_per_vault_share(&self) -> Result<U256> {
        self.contract
            .getPricePerVaultShare()
            .call()
            .await
            .map_err(|e| ContractError::call("getPricePerVaultShare", e))
    }

    pub async fn get_state_registry_id(&self) -> Result<u8> {
        self.contract
            .getStateRegistryId()
            .call()
            .await
            .map_err(|e| ContractError::call("getStateRegistryId", e))
    }

    /// Total assets managed by the wrapped vault.
    pub async fn get_total_assets(&self) -> Result<U256> {
        self.contract
            .getTotalAssets()
            .call()
            .await
            .map_err(|e| ContractError::call("getTotalAssets", e))
    }

    pub async fn get_total_supply(&self) -> Result<U256> {
        self.contract
            .getTotalSupply()
            .call()
            .await
            .map_err(|e| ContractError::call("getTotalSupply", e))
    }

    pub async fn get_vault_address(&self) -> Result<Address> {
        self.contract
            .getVaultAddress()
            .call()
            .await
            .map_err(|e| ContractError::call("getVaultAddress", e))
    }

    pub async fn get_vault_asset(&self) -> Result<Address> {
        self.contract
            .getVaultAsset()
            .call()
            .await
            .map_err(|e| ContractError::call("getVaultAsset", e))
    }

    pub async fn get_vault_decimals(&self) -> Result<U256> {
        self.contract
            .getVaultDecimals()
            .call()
            .await
            .map_err(|e| ContractError::call("getVaultDecimals", e))
    }

    pub async fn get_vault_name(&self) -> Result<String> {
        self.contract
            .getVaultName()
            .call()
            .await
            .map_err(|e| ContractError::call("getVaultName", e))
    }

    /// Vault shares held by the form.
    pub async fn get_vault_share_balance(&self) -> Result<U256> {
        self.contract
            .getVaultShareBalance()
            .call()
            .await
            .map_err(|e| ContractError::call("getVaultShareBalance", e))
    }

    pub async fn get_vault_symbol(&self) -> Result<String> {
        self.contract
            .getVaultSymbol()
            .call()
            .await
            .map_err(|e| ContractError::call("getVaultSymbol", e))
    }

    /// Shares the vault would mint for `assets`.
    pub async fn preview_deposit_to(&self, assets: U256) -> Result<U256> {
        self.contract
            .previewDepositTo(assets)
            .call()
            .await
            .map_err(|e| ContractError::call("previewDepositTo", e))
    }

    /// Assets the vault would return for `shares`.
    pub async fn preview_redeem_from(&self, shares: U256) -> Result<U256> {
        self.contract
            .previewRedeemFrom(shares)
            .call()
            .await
            .map_err(|e| ContractError::call("previewRedeemFrom", e))
    }

    /// Shares the vault would burn to release `assets`.
    pub async fn preview_withdraw_from(&self, assets: U256) -> Result<U256> {
        self.contract
            .previewWithdrawFrom(assets)
            .call()
            .await
            .map_err(|e| ContractError::call("previewWithdrawFrom", e))
    }

    /// Address of the protocol-wide `SuperRegistry`.
    pub async fn super_registry(&self) -> Result<Address> {
        self.contract
            .superRegistry()
            .call()
            .await
            .map_err(|e| ContractError::call("superRegistry", e))
    }

    pub async fn superform_yield_token_name(&self) -> Result<String> {
        self.contract
            .superformYieldTokenName()
            .call()
            .await
            .map_err(|e| ContractError::call("superformYieldTokenName", e))
    }

    pub async fn superform_yield_token_symbol(&self) -> Result<String> {
        self.contract
            .superformYieldTokenSymbol()
            .call()
            .await
            .map_err(|e| ContractError::call("superformYieldTokenSymbol", e))
    }

    pub async fn supports_interface(&self, interface_id: FixedBytes<4>) -> Result<bool> {
        self.contract
            .supportsInterface(interface_id)
            .call()
            .await
            .map_err(|e| ContractError::call("supportsInterface", e))
    }

    /// Address of the wrapped ERC-4626 vault.
    pub async fn vault(&self) -> Result<Address> {
        self.contract
            .vault()
            .call()
            .await
            .map_err(|e| ContractError::call("vault", e))
    }

    /// Same-chain deposit. Router only.
    pub fn direct_deposit_into_vault(
        &self,
        single_vault_data: InitSingleVaultData,
        src_sender: Address,
        value: U256,
    ) -> PreparedCall<'_, IERC4626Form::directDepositIntoVaultCall> {
        let call = IERC4626Form::directDepositIntoVaultCall {
            singleVaultData_: single_vault_data,
            srcSender_: src_sender,
        };
        PreparedCall::new(self.address(), call, value, self.contract.provider())
    }

    /// Same-chain withdrawal. Router only.
    pub fn direct_withdraw_from_vault(
        &self,
        single_vault_data: InitSingleVaultData,
        src_sender: Address,
    ) -> PreparedCall<'_, IERC4626Form::directWithdrawFromVaultCall> {
        let call = IERC4626Form::directWithdrawFromVaultCall {
            singleVaultData_: single_vault_data,
            srcSender_: src_sender,
        };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    /// Release funds held by the form after an emergency queue request.
    pub fn emergency_withdraw(
        &self,
        receiver_address: Address,
        amount: U256,
    ) -> PreparedCall<'_, IERC4626Form::emergencyWithdrawCall> {
        let call = IERC4626Form::emergencyWithdrawCall {
            receiverAddress_: receiver_address,
            amount_: amount,
        };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    /// Send leftover token balance to the paymaster.
    pub fn forward_dust_to_paymaster(
        &self,
        token: Address,
    ) -> PreparedCall<'_, IERC4626Form::forwardDustToPaymasterCall> {
        let call = IERC4626Form::forwardDustToPaymasterCall { token_: token };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    /// One-time initialiser called by the factory when cloning the form.
    pub fn initialize(
        &self,
        super_registry: Address,
        vault: Address,
        asset: Address,
    ) -> PreparedCall<'_, IERC4626Form::initializeCall> {
        let call = IERC4626Form::initializeCall {
            superRegistry_: super_registry,
            vault_: vault,
            asset_: asset,
        };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    /// Cross-chain deposit. Core state registry only.
    pub fn xchain_deposit_into_vault(
        &self,
        single_vault_data: InitSingleVaultData,
        src_sender: Address,
        src_chain_id: u64,
    ) -> PreparedCall<'_, IERC4626Form::xChainDepositIntoVaultCall> {
        let call = IERC4626Form::xChainDepositIntoVaultCall {
            singleVaultData_: single_vault_data,
            srcSender_: src_sender,
            srcChainId_: src_chain_id,
        };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    /// Cross-chain withdrawal. Core state registry only.
    pub fn xchain_withdraw_from_vault(
        &self,
        single_vault_data: InitSingleVaultData,
        src_sender: Address,
        src_chain_id: u64,
    ) -> PreparedCall<'_, IERC4626Form::xChainWithdrawFromVaultCall> {
        let call = IERC4626Form::xChainWithdrawFromVaultCall {
            singleVaultData_: single_vault_data,
            srcSender_: src_sender,
            srcChainId_: src_chain_id,
        };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    event_accessors! {
        IERC4626Form {
            EmergencyWithdrawalProcessed =>
                filter_emergency_withdrawal_processed,
                watch_emergency_withdrawal_processed,
                parse_emergency_withdrawal_processed(refund_address: Address, amount: U256);
            FormDustForwardedToPaymaster =>
                filter_form_dust_forwarded_to_paymaster,
                watch_form_dust_forwarded_to_paymaster,
                parse_form_dust_forwarded_to_paymaster(token: Address, amount: U256);
            Initialized => filter_initialized, watch_initialized, parse_initialized();
            Processed =>
                filter_processed,
                watch_processed,
                parse_processed(src_chain_id: u64, dst_chain_id: u64, src_payload_id: U256);
            VaultAdded =>
                filter_vault_added,
                watch_vault_added,
                parse_vault_added(id: U256, vault: Address);
        }
    }
}
