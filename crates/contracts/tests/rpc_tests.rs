//! Client tests against a scripted JSON-RPC node.

mod helpers;

use std::time::Duration;

use alloy::primitives::{address, Address, B256, U256};
use alloy::sol_types::{SolCall, SolError, SolEvent, SolValue};
use helpers::{provider_for, rpc_log, start_rpc_node, RpcNode};
use superform_rs_contracts::bindings::{ICoreStateRegistry, ISuperformFactory};
use superform_rs_contracts::{
    BlockRange, ContractError, CoreStateRegistry, SuperformContract, SuperformFactory,
};
use tokio::sync::mpsc;

const FACTORY: Address = address!("D85ec15A9F814D6173bF1a89273bFB3964aAdaEC");
const REGISTRY: Address = address!("3721B0E122768CedDFB3Dec810E64c361177826C");
const VAULT: Address = address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");
const SUPERFORM: Address = address!("5b6E4bF3c2b5a0e3fE0fC8d7a9D7E61F2b27c9E1");

fn superform_created_log(form_id: u64, superform_id: u64, block: u64) -> serde_json::Value {
    rpc_log(
        FACTORY,
        &[
            ISuperformFactory::SuperformCreated::SIGNATURE_HASH,
            B256::from(U256::from(form_id)),
            VAULT.into_word(),
            B256::from(U256::from(superform_id)),
        ],
        &SUPERFORM.abi_encode(),
        block,
    )
}

// ============================================================================
// Reads
// ============================================================================

#[tokio::test]
async fn test_view_call_decodes_single_return() {
    let node = RpcNode::new().with_return(
        ISuperformFactory::getSuperformCountCall::SELECTOR,
        U256::from(42).abi_encode(),
    );
    let server = start_rpc_node(node).await;
    let factory = SuperformFactory::new(FACTORY, provider_for(&server));

    let count = factory.get_superform_count().await.unwrap();
    assert_eq!(count, U256::from(42));
}

#[tokio::test]
async fn test_view_call_decodes_named_returns() {
    let node = RpcNode::new().with_return(
        ISuperformFactory::getSuperformCall::SELECTOR,
        (SUPERFORM, 1u32, 137u64).abi_encode_params(),
    );
    let server = start_rpc_node(node).await;
    let factory = SuperformFactory::new(FACTORY, provider_for(&server));

    let superform = factory.get_superform(U256::from(7)).await.unwrap();
    assert_eq!(superform.superform_, SUPERFORM);
    assert_eq!(superform.formImplementationId_, 1);
    assert_eq!(superform.chainId_, 137);
}

#[tokio::test]
async fn test_revert_carries_decodable_custom_error() {
    let node = RpcNode::new().with_revert(
        ISuperformFactory::getSuperformCountCall::SELECTOR,
        ISuperformFactory::FORM_DOES_NOT_EXIST {}.abi_encode(),
    );
    let server = start_rpc_node(node).await;
    let factory = SuperformFactory::new(FACTORY, provider_for(&server));

    let err = factory.get_superform_count().await.unwrap_err();
    assert!(matches!(
        err,
        ContractError::Call {
            method: "getSuperformCount",
            ..
        }
    ));
    assert!(err.revert_data().is_some());
    assert!(matches!(
        err.decode_revert::<ISuperformFactory::ISuperformFactoryErrors>(),
        Some(ISuperformFactory::ISuperformFactoryErrors::FORM_DOES_NOT_EXIST(_))
    ));
}

#[tokio::test]
async fn test_prepared_call_simulates_transaction() {
    let node = RpcNode::new().with_return(
        ISuperformFactory::createSuperformCall::SELECTOR,
        (U256::from(99), SUPERFORM).abi_encode_params(),
    );
    let server = start_rpc_node(node).await;
    let factory = SuperformFactory::new(FACTORY, provider_for(&server));

    let created = factory.create_superform(1, VAULT).call().await.unwrap();
    assert_eq!(created.superformId_, U256::from(99));
    assert_eq!(created.superform_, SUPERFORM);
}

#[tokio::test]
async fn test_unreachable_node_is_call_error() {
    let factory = SuperformFactory::new(
        FACTORY,
        superform_rs_contracts::connect("http://127.0.0.1:1").unwrap(),
    );

    let err = factory.get_superform_count().await.unwrap_err();
    assert!(err.revert_data().is_none());
    assert!(err.to_string().contains("getSuperformCount"));
}

// ============================================================================
// Event queries
// ============================================================================

#[tokio::test]
async fn test_filter_decodes_logs_in_order() {
    let node = RpcNode::new().with_logs(vec![
        superform_created_log(1, 100, 10),
        superform_created_log(2, 200, 11),
    ]);
    let server = start_rpc_node(node).await;
    let factory = SuperformFactory::new(FACTORY, provider_for(&server));

    let events = factory
        .filter_superform_created(BlockRange::between(10, 11), &[], &[VAULT], &[])
        .await
        .unwrap();

    assert_eq!(events.len(), 2);
    let (first, log) = &events[0];
    assert_eq!(first.formImplementationId, U256::from(1));
    assert_eq!(first.vault, VAULT);
    assert_eq!(first.superformId, U256::from(100));
    assert_eq!(first.superform, SUPERFORM);
    assert_eq!(log.block_number, Some(10));
    assert_eq!(events[1].0.superformId, U256::from(200));
}

#[tokio::test]
async fn test_filter_rejects_foreign_log() {
    let foreign = rpc_log(
        FACTORY,
        &[
            ICoreStateRegistry::PayloadProcessed::SIGNATURE_HASH,
            B256::from(U256::from(1)),
        ],
        &[],
        5,
    );
    let server = start_rpc_node(RpcNode::new().with_logs(vec![foreign])).await;
    let factory = SuperformFactory::new(FACTORY, provider_for(&server));

    let result = factory
        .filter_superform_created(BlockRange::all(), &[], &[], &[])
        .await;
    assert!(matches!(result, Err(ContractError::EventDecode(_))));
}

#[tokio::test]
async fn test_parse_accessor_decodes_raw_log() {
    let server = start_rpc_node(RpcNode::new()).await;
    let registry = CoreStateRegistry::new(REGISTRY, provider_for(&server));

    let log: alloy::rpc::types::Log = serde_json::from_value(rpc_log(
        REGISTRY,
        &[
            ICoreStateRegistry::PayloadProcessed::SIGNATURE_HASH,
            B256::from(U256::from(77)),
        ],
        &[],
        5,
    ))
    .unwrap();

    let event = registry.parse_payload_processed(&log).unwrap();
    assert_eq!(event.payloadId, U256::from(77));
    assert!(registry.parse_payload_received(&log).is_err());
}

// ============================================================================
// Subscriptions
// ============================================================================

#[tokio::test]
async fn test_watch_forwards_new_logs() {
    let node = RpcNode::new()
        .with_filter_batch(vec![
            superform_created_log(1, 100, 20),
            superform_created_log(1, 101, 20),
        ])
        .with_filter_batch(vec![superform_created_log(3, 300, 21)]);
    let server = start_rpc_node(node).await;
    let factory = SuperformFactory::new(FACTORY, provider_for(&server));

    let (tx, mut rx) = mpsc::channel(8);
    let subscription = factory
        .events::<ISuperformFactory::SuperformCreated>()
        .poll_interval(Duration::from_millis(20))
        .watch(tx)
        .await
        .unwrap();

    let mut ids = Vec::new();
    for _ in 0..3 {
        let (event, _log) = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("timed out waiting for event")
            .expect("channel closed");
        ids.push(event.superformId);
    }
    assert_eq!(
        ids,
        vec![U256::from(100), U256::from(101), U256::from(300)]
    );

    subscription.unsubscribe();
    assert!(subscription.is_cancelled());
    subscription.join().await.unwrap();
}

#[tokio::test]
async fn test_contract_watch_stops_on_unknown_log() {
    let unknown = rpc_log(FACTORY, &[B256::repeat_byte(0x11)], &[], 20);
    let node = RpcNode::new().with_filter_batch(vec![
        superform_created_log(1, 100, 20),
        unknown,
        superform_created_log(1, 101, 20),
    ]);
    let server = start_rpc_node(node).await;
    let factory = SuperformFactory::new(FACTORY, provider_for(&server));

    let (tx, mut rx) = mpsc::channel(8);
    let subscription = factory
        .all_events()
        .poll_interval(Duration::from_millis(20))
        .watch(tx)
        .await
        .unwrap();

    let (first, log) = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("timed out waiting for event")
        .expect("channel closed");
    match first {
        ISuperformFactory::ISuperformFactoryEvents::SuperformCreated(event) => {
            assert_eq!(event.superformId, U256::from(100));
        }
        other => panic!("unexpected event: {other:?}"),
    }
    assert_eq!(log.block_number, Some(20));

    let outcome = tokio::time::timeout(Duration::from_secs(5), subscription.join())
        .await
        .expect("timed out waiting for subscription");
    assert!(matches!(outcome, Err(ContractError::EventDecode(_))));

    assert!(rx.recv().await.is_none());
}

#[tokio::test]
async fn test_watch_stops_when_receiver_dropped() {
    let node = RpcNode::new().with_filter_batch(vec![superform_created_log(1, 100, 20)]);
    let server = start_rpc_node(node).await;
    let factory = SuperformFactory::new(FACTORY, provider_for(&server));

    let (tx, rx) = mpsc::channel(1);
    drop(rx);
    let subscription = factory.watch_superform_created(&[], &[], &[], tx).await.unwrap();

    let outcome = tokio::time::timeout(Duration::from_secs(5), subscription.join()).await;
    assert!(matches!(outcome, Ok(Ok(()))));
}

#[tokio::test]
async fn test_watch_fails_when_filter_install_fails() {
    let factory = SuperformFactory::new(
        FACTORY,
        superform_rs_contracts::connect("http://127.0.0.1:1").unwrap(),
    );

    let (tx, _rx) = mpsc::channel(1);
    let result = factory.watch_superform_created(&[], &[], &[], tx).await;
    assert!(matches!(result, Err(ContractError::Subscription(_))));
}
