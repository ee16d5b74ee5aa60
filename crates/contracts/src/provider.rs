//! Provider construction for contract clients.

use alloy::{
    network::EthereumWallet,
    primitives::Address,
    providers::{DynProvider, Provider, ProviderBuilder, RootProvider},
    signers::local::PrivateKeySigner,
};
use tracing::debug;

use crate::error::{ContractError, Result};

/// The provider type shared by every client.
///
/// Type-erased so read-only and wallet-filled providers are interchangeable.
pub type HttpProvider = DynProvider;

fn parse_url(rpc_url: &str) -> Result<url::Url> {
    rpc_url
        .parse()
        .map_err(|e| ContractError::RpcConnection(format!("{}", e)))
}

/// Build a read-only HTTP provider.
pub fn connect(rpc_url: &str) -> Result<HttpProvider> {
    let url = parse_url(rpc_url)?;
    debug!(%url, "connecting read-only provider");
    Ok(RootProvider::new_http(url).erased())
}

/// Build an HTTP provider that signs and fills transactions with `private_key`.
///
/// Returns the provider together with the signer's address.
pub fn connect_with_signer(rpc_url: &str, private_key: &str) -> Result<(HttpProvider, Address)> {
    let signer: PrivateKeySigner = private_key
        .parse()
        .map_err(|_| ContractError::InvalidPrivateKey)?;
    let signer_address = signer.address();
    let wallet = EthereumWallet::from(signer);

    let url = parse_url(rpc_url)?;
    debug!(%url, signer = %signer_address, "connecting signing provider");

    let provider = ProviderBuilder::new()
        .wallet(wallet)
        .connect_http(url)
        .erased();

    Ok((provider, signer_address))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Anvil's default account 0
    const TEST_PRIVATE_KEY: &str =
        "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[test]
    fn test_invalid_private_key() {
        let result = connect_with_signer("http://localhost:8545", "invalid_key");
        assert!(matches!(result, Err(ContractError::InvalidPrivateKey)));
    }

    #[test]
    fn test_invalid_rpc_url() {
        let result = connect_with_signer("not a valid url", TEST_PRIVATE_KEY);
        assert!(matches!(result, Err(ContractError::RpcConnection(_))));

        let result = connect("not a valid url");
        assert!(matches!(result, Err(ContractError::RpcConnection(_))));
    }

    #[test]
    fn test_signer_address_derived_from_key() {
        let (_, address) =
            connect_with_signer("http://localhost:8545", TEST_PRIVATE_KEY).unwrap();
        assert_eq!(
            address,
            "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
                .parse::<Address>()
                .unwrap()
        );
    }

    #[test]
    fn test_read_only_construction() {
        assert!(connect("http://localhost:8545").is_ok());
    }
}
