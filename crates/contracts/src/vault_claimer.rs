//! Client for the vault claimer.

use alloy::primitives::{Address, U256};

use crate::bindings::IVaultClaimer;
use crate::contract::{define_contract_client, event_accessors};
use crate::prepared_call::PreparedCall;

define_contract_client!(
    /// Client for `VaultClaimer`.
    VaultClaimer,
    IVaultClaimer::IVaultClaimerInstance,
    IVaultClaimer::IVaultClaimerEvents,
    VAULT_CLAIMER
);

impl VaultClaimer {
    /// Emit a `Claimed` event binding the caller to `protocol_id`.
    pub fn claim_protocol_ownership(
        &self,
        protocol_id: String,
    ) -> PreparedCall<'_, IVaultClaimer::claimProtocolOwnershipCall> {
        let call = IVaultClaimer::claimProtocolOwnershipCall { protocolId_: protocol_id };
        PreparedCall::new(self.address(), call, U256::ZERO, self.contract.provider())
    }

    event_accessors! {
        IVaultClaimer {
            Claimed => filter_claimed, watch_claimed, parse_claimed(claimer: Address);
        }
    }
}
