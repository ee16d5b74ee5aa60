//! Client for the superform factory.

use alloy::primitives::{Address, B256, Bytes, U256};

use crate::bindings::ISuperformFactory;
use crate::contract::{define_contract_client, event_accessors};
use crate::error::{ContractError, Result};
use crate::prepared_call::PreparedCall;

define_contract_client!(
    /// Client for `SuperformFactory`.
    SuperformFactory,
    ISuperformFactory::ISuperformFactoryInstance,
    ISuperformFactory::ISuperformFactoryEvents,
    SUPERFORM_FACTORY
);

impl SuperformFactory {
    /// Chain id the contract was deployed on.
    pub async fn chain_id(&self) -> Result<u64> {
        self.contract
            .CHAIN_ID()
            .call()
            .await
            .map_err(|e| ContractError::call("CHAIN_ID", e))
    }

    pub async fn form_implementation(&self, form_implementation_id: u32) -> Result<Address> {
        self.contract
            .formImplementation(form_implementation_id)
            .call()
            .await
            .map_err(|e| ContractError::call("formImplementation", e))
    }

    pub async fn form_implementation_ids(
        &self,
        form_implementation_address: Address,
    ) -> Result<u32> {
        self.contract
            .formImplementationIds(form_implementation_address)
            .call()
            .await
            .map_err(|e| ContractError::call("formImplementationIds", e))
    }

    pub async fn form_implementation_paused(&self, form_implementation_id: u32) -> Result<u8> {
        self.contract
            .formImplementationPaused(form_implementation_id)
            .call()
            .await
            .map_err(|e| ContractError::call("formImplementationPaused", e))
    }

    pub async fn form_implementations(&self, index: U256) -> Result<Address> {
        self.contract
            .formImplementations(index)
            .call()
            .await
            .map_err(|e| ContractError::call("formImplementations", e))
    }

    pub async fn form_state_registry_id(&self, form_implementation_id: u32) -> Result<u8> {
        self.contract
            .formStateRegistryId(form_implementation_id)
            .call()
            .await
            .map_err(|e| ContractError::call("formStateRegistryId", e))
    }

    /// All superform ids and addresses created for `vault`.
    pub async fn get_all_superforms_from_vault(
        &self,
        vault: Address,
    ) -> Result<ISuperformFactory::getAllSuperformsFromVaultReturn> {
        self.contract
            .getAllSuperformsFromVault(vault)
            .call()
            .await
            .map_err(|e| ContractError::call("getAllSuperformsFromVault", e))
    }

    /// Number of registered form implementations.
    pub async fn get_form_count(&self) -> Result<U256> {
        self.contract
            .getFormCount()
            .call()
            .await
            .map_err(|e| ContractError::call("getFormCount", e))
    }

    pub async fn get_form_implementation(&self, form_implementation_id: u32) -> Result<Address> {
        self.contract
            .getFormImplementation(form_implementation_id)
            .call()
            .await
            .map_err(|e| ContractError::call("getFormImplementation", e))
    }

    pub async fn get_form_state_registry_id(&self, form_implementation_id: u32) -> Result<u8> {
        self.contract
            .getFormStateRegistryId(form_implementation_id)
            .call()
            .await
            .map_err(|e| ContractError::call("getFormStateRegistryId", e))
    }

    /// Unpack a superform id into its address, form implementation id and chain id.
    pub async fn get_superform(
        &self,
        superform_id: U256,
    ) -> Result<ISuperformFactory::getSuperformReturn> {
        self.contract
            .getSuperform(superform_id)
            .call()
            .await
            .map_err(|e| ContractError::call("getSuperform", e))
    }

    /// Number of superforms created on this chain.
    pub async fn get_superform_count(&self) -> Result<U256> {
        self.contract
            .getSuperformCount()
            .call()
            .await
            .map_err(|e| ContractError::call("getSuperformCount", e))
    }

    /// Whether a form implementation is paused.
    pub async fn is_form_implementation_paused(&self, form_implementation_id: u32) -> Result<bool> {
        self.contract
            .isFormImplementationPaused(form_implementation_id)
            .call()
            .await
            .map_err(|e| ContractError::call("isFormImplementationPaused", e))
    }

    /// Whether `superform_id` was created by this factory.
    pub async fn is_superform(&self, superform_id: U256) -> Result<bool> {
        self.contract
            .isSuperform(superform_id)
            .call()
            .await
            .map_err(|e| ContractError::call("isSuperform", e))
    }

    /// Address of the protocol-wide `SuperRegistry`.
    pub async fn super_registry(&self) -> Result<Address> {
        self.contract
            .superRegistry()
            .call()
            .await
            .map_err(|e| ContractError::call("superRegistry", e))
    }

    pub async fn superforms(&self, index: U256) -> Result<U256> {
        self.contract
            .superforms(index)
            .call()
            .await
            .map_err(|e| ContractError::call("superforms", e))
    }

    pub async fn vault_form_impl_combination_to_superforms(
        &self,
        vault_form_implementation_combination: B256,
    ) -> Result<U256> {
        self.contract
            .vaultFormImplCombinationToSuperforms(vault_form_implementation_combination)
            .call()
            .await
            .map_err(|e| ContractError::call("vaultFormImplCombinationToSuperforms", e))
    }

    pub async fn vault_to_form_implementation_id(
        &self,
        vault: Address,
        index: U256,
    ) -> Result<U256> {
        self.contract
            .vaultToFormImplementationId(vault, index)
            .call()
            .await
            .map_err(|e| ContractError::call("vaultToFormImplementationId", e))
    }

    pub async fn vault_to_superforms(&self, vault: Address, index: U256) -> Result<U256> {
        self.contract
            .vaultToSuperforms(vault, index)
            .call()
            .await
            .map_err(|e| ContractError::call("vaultToSuperforms", e))
    }

    /// Broadcast payload counter.
    pub async fn xchain_payload_counter(&self) -> Result<U256> {
        self.contract
            .xChainPayloadCounter()
            .call()
            .await
            .map_err(|e| ContractError::call("xChainPayloadCounter", e))
    }

    /// Register a new form implementation. Protocol admin only.
    pub fn add_form_implementation(
        &self,
        form_implementation: Address,
        form_implementation_id: u32,
        form_state_registry_id: u8,
    ) -> PreparedCall<'_, ISuperformFactory::addFormImplementationCall> {
        let call = ISuperformFactory::addFormImplementationCall {
            formImplementation_: form_implementation,
            formImplementationId_: form_implementation_id,
            formStateRegistryId_: form_state_registry_id,
        };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    /// Pause or unpause a form implementation; broadcast fee is the attached value.
    pub fn change_form_implementation_pause_status(
        &self,
        form_implementation_id: u32,
        status: u8,
        extra_data: Bytes,
        value: U256,
    ) -> PreparedCall<'_, ISuperformFactory::changeFormImplementationPauseStatusCall> {
        let call = ISuperformFactory::changeFormImplementationPauseStatusCall {
            formImplementationId_: form_implementation_id,
            status_: status,
            extraData_: extra_data,
        };
        PreparedCall::new(self.address(), call, value, self.contract.provider())
    }

    /// Create a superform for `vault` using form implementation `form_implementation_id`.
    pub fn create_superform(
        &self,
        form_implementation_id: u32,
        vault: Address,
    ) -> PreparedCall<'_, ISuperformFactory::createSuperformCall> {
        let call = ISuperformFactory::createSuperformCall {
            formImplementationId_: form_implementation_id,
            vault_: vault,
        };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    pub fn state_sync_broadcast(
        &self,
        data: Bytes,
        value: U256,
    ) -> PreparedCall<'_, ISuperformFactory::stateSyncBroadcastCall> {
        let call = ISuperformFactory::stateSyncBroadcastCall { data_: data };
        PreparedCall::new(self.address(), call, value, self.contract.provider())
    }

    event_accessors! {
        ISuperformFactory {
            FormImplementationAdded =>
                filter_form_implementation_added,
                watch_form_implementation_added,
                parse_form_implementation_added(
                    form_implementation: Address,
                    form_implementation_id: U256,
                    form_state_registry_id: u8
                );
            FormImplementationPaused =>
                filter_form_implementation_paused,
                watch_form_implementation_paused,
                parse_form_implementation_paused(form_implementation_id: U256, paused: u8);
            SuperRegistrySet =>
                filter_super_registry_set,
                watch_super_registry_set,
                parse_super_registry_set(super_registry: Address);
            SuperformCreated =>
                filter_superform_created,
                watch_superform_created,
                parse_superform_created(
                    form_implementation_id: U256,
                    vault: Address,
                    superform_id: U256
                );
        }
    }
}
