//! Client for the paymaster.

use alloy::primitives::{Address, B256, Bytes, U256};

use crate::bindings::{IPayMaster, LiqRequest};
use crate::contract::{define_contract_client, event_accessors};
use crate::error::{ContractError, Result};
use crate::prepared_call::PreparedCall;

define_contract_client!(
    /// Client for `PayMaster`.
    PayMaster,
    IPayMaster::IPayMasterInstance,
    IPayMaster::IPayMasterEvents,
    PAY_MASTER
);

impl PayMaster {
    /// Address of the protocol-wide `SuperRegistry`.
    pub async fn super_registry(&self) -> Result<Address> {
        self.contract
            .superRegistry()
            .call()
            .await
            .map_err(|e| ContractError::call("superRegistry", e))
    }

    /// Total native fees paid by `user`.
    pub async fn total_fees_paid(&self, user: Address) -> Result<U256> {
        self.contract
            .totalFeesPaid(user)
            .call()
            .await
            .map_err(|e| ContractError::call("totalFeesPaid", e))
    }

    /// Pay the protocol fee for `user`; the fee is the attached value.
    pub fn make_payment(
        &self,
        user: Address,
        value: U256,
    ) -> PreparedCall<'_, IPayMaster::makePaymentCall> {
        let call = IPayMaster::makePaymentCall { user_: user };
        PreparedCall::new(self.address(), call, value, self.contract.provider())
    }

    /// Bridge collected fees to another chain.
    pub fn rebalance_to(
        &self,
        super_registry_id: B256,
        req: LiqRequest,
        dst_chain_id: u64,
    ) -> PreparedCall<'_, IPayMaster::rebalanceToCall> {
        let call = IPayMaster::rebalanceToCall {
            superRegistryId_: super_registry_id,
            req_: req,
            dstChainId_: dst_chain_id,
        };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    /// Top up an AMB with native value for relayer gas.
    pub fn treat_amb(
        &self,
        amb_id: u8,
        native_value: U256,
        data: Bytes,
    ) -> PreparedCall<'_, IPayMaster::treatAMBCall> {
        let call = IPayMaster::treatAMBCall {
            ambId_: amb_id,
            nativeValue_: native_value,
            data_: data,
        };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    /// Withdraw collected native fees to a registry-defined receiver.
    pub fn withdraw_native_to(
        &self,
        super_registry_id: B256,
        native_amount: U256,
    ) -> PreparedCall<'_, IPayMaster::withdrawNativeToCall> {
        let call = IPayMaster::withdrawNativeToCall {
            superRegistryId_: super_registry_id,
            nativeAmount_: native_amount,
        };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    /// Withdraw collected token fees to a registry-defined receiver.
    pub fn withdraw_to(
        &self,
        super_registry_id: B256,
        token: Address,
        amount: U256,
    ) -> PreparedCall<'_, IPayMaster::withdrawToCall> {
        let call = IPayMaster::withdrawToCall {
            superRegistryId_: super_registry_id,
            token_: token,
            amount_: amount,
        };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    event_accessors! {
        IPayMaster {
            NativeWithdrawn =>
                filter_native_withdrawn,
                watch_native_withdrawn,
                parse_native_withdrawn(receiver: Address, amount: U256);
            Payment => filter_payment, watch_payment, parse_payment(user: Address, amount: U256);
            TokenWithdrawn =>
                filter_token_withdrawn,
                watch_token_withdrawn,
                parse_token_withdrawn(receiver: Address, token: Address, amount: U256);
        }
    }
}
