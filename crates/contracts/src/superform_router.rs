//! Client for the superform router.
//!
//! Deposits and withdrawals each come in six request shapes (`SingleDirect*`,
//! `SingleXChain*` and `MultiDst*`, in single- and multi-vault variants). All of
//! them are payable; the attached value covers AMB and bridge fees, which
//! `PaymentHelper::estimate_*` can quote.

use alloy::primitives::{Address, U256};

use crate::bindings::{
    ISuperformRouter, IERC20, MultiDstMultiVaultStateReq, MultiDstSingleVaultStateReq,
    SingleDirectMultiVaultStateReq, SingleDirectSingleVaultStateReq, SingleXChainMultiVaultStateReq,
    SingleXChainSingleVaultStateReq,
};
use crate::contract::{define_contract_client, event_accessors};
use crate::error::{ContractError, Result};
use crate::prepared_call::PreparedCall;

define_contract_client!(
    /// Client for `SuperformRouter`.
    SuperformRouter,
    ISuperformRouter::ISuperformRouterInstance,
    ISuperformRouter::ISuperformRouterEvents,
    SUPERFORM_ROUTER
);

impl SuperformRouter {
    /// Chain id the contract was deployed on.
    pub async fn chain_id(&self) -> Result<u64> {
        self.contract
            .CHAIN_ID()
            .call()
            .await
            .map_err(|e| ContractError::call("CHAIN_ID", e))
    }

    /// Last cross-chain payload id issued by the router.
    pub async fn payload_ids(&self) -> Result<U256> {
        self.contract
            .payloadIds()
            .call()
            .await
            .map_err(|e| ContractError::call("payloadIds", e))
    }

    /// Address of the protocol-wide `SuperRegistry`.
    pub async fn super_registry(&self) -> Result<Address> {
        self.contract
            .superRegistry()
            .call()
            .await
            .map_err(|e| ContractError::call("superRegistry", e))
    }

    /// Send leftover token balance to the paymaster.
    pub fn forward_dust_to_paymaster(
        &self,
        token: Address,
    ) -> PreparedCall<'_, ISuperformRouter::forwardDustToPaymasterCall> {
        let call = ISuperformRouter::forwardDustToPaymasterCall { token_: token };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    /// Deposit into several vaults on each of several chains.
    pub fn multi_dst_multi_vault_deposit(
        &self,
        req: MultiDstMultiVaultStateReq,
        value: U256,
    ) -> PreparedCall<'_, ISuperformRouter::multiDstMultiVaultDepositCall> {
        let call = ISuperformRouter::multiDstMultiVaultDepositCall { req_: req };
        PreparedCall::new(self.address(), call, value, self.contract.provider())
    }

    /// Withdraw from several vaults on each of several chains.
    pub fn multi_dst_multi_vault_withdraw(
        &self,
        req: MultiDstMultiVaultStateReq,
        value: U256,
    ) -> PreparedCall<'_, ISuperformRouter::multiDstMultiVaultWithdrawCall> {
        let call = ISuperformRouter::multiDstMultiVaultWithdrawCall { req_: req };
        PreparedCall::new(self.address(), call, value, self.contract.provider())
    }

    /// Deposit into one vault on each of several chains.
    pub fn multi_dst_single_vault_deposit(
        &self,
        req: MultiDstSingleVaultStateReq,
        value: U256,
    ) -> PreparedCall<'_, ISuperformRouter::multiDstSingleVaultDepositCall> {
        let call = ISuperformRouter::multiDstSingleVaultDepositCall { req_: req };
        PreparedCall::new(self.address(), call, value, self.contract.provider())
    }

    /// Withdraw from one vault on each of several chains.
    pub fn multi_dst_single_vault_withdraw(
        &self,
        req: MultiDstSingleVaultStateReq,
        value: U256,
    ) -> PreparedCall<'_, ISuperformRouter::multiDstSingleVaultWithdrawCall> {
        let call = ISuperformRouter::multiDstSingleVaultWithdrawCall { req_: req };
        PreparedCall::new(self.address(), call, value, self.contract.provider())
    }

    /// Deposit into several vaults on this chain.
    pub fn single_direct_multi_vault_deposit(
        &self,
        req: SingleDirectMultiVaultStateReq,
        value: U256,
    ) -> PreparedCall<'_, ISuperformRouter::singleDirectMultiVaultDepositCall> {
        let call = ISuperformRouter::singleDirectMultiVaultDepositCall { req_: req };
        PreparedCall::new(self.address(), call, value, self.contract.provider())
    }

    /// Withdraw from several vaults on this chain.
    pub fn single_direct_multi_vault_withdraw(
        &self,
        req: SingleDirectMultiVaultStateReq,
        value: U256,
    ) -> PreparedCall<'_, ISuperformRouter::singleDirectMultiVaultWithdrawCall> {
        let call = ISuperformRouter::singleDirectMultiVaultWithdrawCall { req_: req };
        PreparedCall::new(self.address(), call, value, self.contract.provider())
    }

    /// Deposit into one vault on this chain.
    pub fn single_direct_single_vault_deposit(
        &self,
        req: SingleDirectSingleVaultStateReq,
        value: U256,
    ) -> PreparedCall<'_, ISuperformRouter::singleDirectSingleVaultDepositCall> {
        let call = ISuperformRouter::singleDirectSingleVaultDepositCall { req_: req };
        PreparedCall::new(self.address(), call, value, self.contract.provider())
    }

    /// Withdraw from one vault on this chain.
    pub fn single_direct_single_vault_withdraw(
        &self,
        req: SingleDirectSingleVaultStateReq,
        value: U256,
    ) -> PreparedCall<'_, ISuperformRouter::singleDirectSingleVaultWithdrawCall> {
        let call = ISuperformRouter::singleDirectSingleVaultWithdrawCall { req_: req };
        PreparedCall::new(self.address(), call, value, self.contract.provider())
    }

    /// Deposit into several vaults on another chain.
    pub fn single_xchain_multi_vault_deposit(
        &self,
        req: SingleXChainMultiVaultStateReq,
        value: U256,
    ) -> PreparedCall<'_, ISuperformRouter::singleXChainMultiVaultDepositCall> {
        let call = ISuperformRouter::singleXChainMultiVaultDepositCall { req_: req };
        PreparedCall::new(self.address(), call, value, self.contract.provider())
    }

    /// Withdraw from several vaults on another chain.
    pub fn single_xchain_multi_vault_withdraw(
        &self,
        req: SingleXChainMultiVaultStateReq,
        value: U256,
    ) -> PreparedCall<'_, ISuperformRouter::singleXChainMultiVaultWithdrawCall> {
        let call = ISuperformRouter::singleXChainMultiVaultWithdrawCall { req_: req };
        PreparedCall::new(self.address(), call, value, self.contract.provider())
    }

    /// Deposit into one vault on another chain.
    pub fn single_xchain_single_vault_deposit(
        &self,
        req: SingleXChainSingleVaultStateReq,
        value: U256,
    ) -> PreparedCall<'_, ISuperformRouter::singleXChainSingleVaultDepositCall> {
        let call = ISuperformRouter::singleXChainSingleVaultDepositCall { req_: req };
        PreparedCall::new(self.address(), call, value, self.contract.provider())
    }

    /// Withdraw from one vault on another chain.
    pub fn single_xchain_single_vault_withdraw(
        &self,
        req: SingleXChainSingleVaultStateReq,
        value: U256,
    ) -> PreparedCall<'_, ISuperformRouter::singleXChainSingleVaultWithdrawCall> {
        let call = ISuperformRouter::singleXChainSingleVaultWithdrawCall { req_: req };
        PreparedCall::new(self.address(), call, value, self.contract.provider())
    }

    event_accessors! {
        ISuperformRouter {
            Completed => filter_completed, watch_completed, parse_completed();
            CrossChainInitiatedDepositMulti =>
                filter_cross_chain_initiated_deposit_multi,
                watch_cross_chain_initiated_deposit_multi,
                parse_cross_chain_initiated_deposit_multi(payload_id: U256, dst_chain_id: u64);
            CrossChainInitiatedDepositSingle =>
                filter_cross_chain_initiated_deposit_single,
                watch_cross_chain_initiated_deposit_single,
                parse_cross_chain_initiated_deposit_single(payload_id: U256, dst_chain_id: u64);
            CrossChainInitiatedWithdrawMulti =>
                filter_cross_chain_initiated_withdraw_multi,
                watch_cross_chain_initiated_withdraw_multi,
                parse_cross_chain_initiated_withdraw_multi(payload_id: U256, dst_chain_id: u64);
            CrossChainInitiatedWithdrawSingle =>
                filter_cross_chain_initiated_withdraw_single,
                watch_cross_chain_initiated_withdraw_single,
                parse_cross_chain_initiated_withdraw_single(payload_id: U256, dst_chain_id: u64);
            RouterDustForwardedToPaymaster =>
                filter_router_dust_forwarded_to_paymaster,
                watch_router_dust_forwarded_to_paymaster,
                parse_router_dust_forwarded_to_paymaster(token: Address, amount: U256);
        }
    }
}

impl SuperformRouter {
    /// ERC-20 allowance `owner` has granted the router for `token`.
    pub async fn allowance(&self, token: Address, owner: Address) -> Result<U256> {
        let contract = IERC20::new(token, self.contract.provider().clone());
        contract
            .allowance(owner, self.address())
            .call()
            .await
            .map_err(|e| ContractError::call("allowance", e))
    }

    /// Create a prepared approval letting the router pull `amount` of `token`.
    pub fn approve(&self, token: Address, amount: U256) -> PreparedCall<'_, IERC20::approveCall> {
        let call = IERC20::approveCall {
            spender: self.address(),
            amount,
        };
        PreparedCall::new(token, call, U256::ZERO, self.contract.provider())
    }

    /// Approve the router if `owner`'s current allowance is below `amount`.
    /// Returns `None` when no approval is needed.
    pub async fn approve_if_needed(
        &self,
        token: Address,
        owner: Address,
        amount: U256,
    ) -> Result<Option<PreparedCall<'_, IERC20::approveCall>>> {
        let current_allowance = self.allowance(token, owner).await?;

        if current_allowance >= amount {
            return Ok(None);
        }

        Ok(Some(self.approve(token, amount)))
    }
}
