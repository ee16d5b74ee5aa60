//! Integration tests for the contracts crate.

use alloy::primitives::{address, Address};
use superform_rs_contracts::{
    connect, connect_with_signer, ContractError, CoreStateRegistry, Erc4626Form, PayMaster,
    PaymentHelper, SuperPositions, SuperformContract, SuperformFactory, SuperformRouter,
    SuperformRouterPlus, SuperformRouterPlusAsync, VaultClaimer,
};

const TEST_ADDRESS: Address = address!("17A332dC7B40aE701485023b219E9D6f493a2514");

#[test]
fn test_client_construction_with_valid_inputs() {
    let private_key = "0x0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";
    let result = connect_with_signer("http://localhost:8545", private_key);
    assert!(result.is_ok());

    let (provider, signer) = result.unwrap();
    // Verify signer address is derived correctly
    assert!(!signer.is_zero());

    let router = SuperformRouter::new(TEST_ADDRESS, provider);
    assert_eq!(router.address(), TEST_ADDRESS);
}

#[test]
fn test_invalid_private_key() {
    let result = connect_with_signer("http://localhost:8545", "not-a-valid-key");
    assert!(matches!(result, Err(ContractError::InvalidPrivateKey)));
}

#[test]
fn test_invalid_rpc_url() {
    assert!(matches!(
        connect("not a url"),
        Err(ContractError::RpcConnection(_))
    ));

    let private_key = "0x0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";
    assert!(matches!(
        connect_with_signer("not a url", private_key),
        Err(ContractError::RpcConnection(_))
    ));
}

#[test]
fn test_error_conversion() {
    // Test that errors can be used with ? operator
    fn fallible() -> superform_rs_contracts::Result<()> {
        let _provider = connect_with_signer("http://localhost:8545", "invalid")?;
        Ok(())
    }

    let result = fallible();
    assert!(result.is_err());
}

fn metadata_name<C: SuperformContract>(_: &C) -> &'static str {
    C::METADATA.name
}

#[test]
fn test_every_client_reports_its_abi() {
    let provider = connect("http://localhost:8545").unwrap();

    let names = [
        metadata_name(&CoreStateRegistry::new(TEST_ADDRESS, provider.clone())),
        metadata_name(&Erc4626Form::new(TEST_ADDRESS, provider.clone())),
        metadata_name(&PayMaster::new(TEST_ADDRESS, provider.clone())),
        metadata_name(&PaymentHelper::new(TEST_ADDRESS, provider.clone())),
        metadata_name(&SuperformFactory::new(TEST_ADDRESS, provider.clone())),
        metadata_name(&SuperformRouter::new(TEST_ADDRESS, provider.clone())),
        metadata_name(&SuperformRouterPlus::new(TEST_ADDRESS, provider.clone())),
        metadata_name(&SuperformRouterPlusAsync::new(TEST_ADDRESS, provider.clone())),
        metadata_name(&SuperPositions::new(TEST_ADDRESS, provider.clone())),
        metadata_name(&VaultClaimer::new(TEST_ADDRESS, provider)),
    ];

    let expected: Vec<&str> = superform_rs_contracts::metadata::ALL_CONTRACTS
        .iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(names.to_vec(), expected);
}

#[test]
fn test_clients_share_a_provider() {
    let provider = connect("http://localhost:8545").unwrap();
    let factory = SuperformFactory::new(TEST_ADDRESS, provider.clone());
    let positions = SuperPositions::new(address!("01dF6fb6a28a89d6bFa53b2b3F20644AbF417678"), provider);

    assert_ne!(factory.address(), positions.address());
    assert_eq!(
        SuperformContract::address(&factory),
        factory.instance().address().to_owned()
    );
}

#[test]
fn test_debug_shows_address_only() {
    let provider = connect("http://localhost:8545").unwrap();
    let registry = CoreStateRegistry::new(TEST_ADDRESS, provider);

    let debug = format!("{registry:?}");
    assert!(debug.starts_with("CoreStateRegistry"));
    assert!(debug.contains(&format!("{:?}", TEST_ADDRESS)));
    assert!(debug.contains("0x17a332dc7b40ae701485023b219e9d6f493a2514"));
}

#[test]
fn test_event_query_is_scoped_to_contract() {
    use superform_rs_contracts::bindings::ISuperformFactory;

    let provider = connect("http://localhost:8545").unwrap();
    let factory = SuperformFactory::new(TEST_ADDRESS, provider);

    let filter = factory
        .events::<ISuperformFactory::SuperformCreated>()
        .filter();
    assert!(filter.address.matches(&TEST_ADDRESS));
}
