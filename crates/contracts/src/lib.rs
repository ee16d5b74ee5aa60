//! Typed contract bindings for the Superform cross-chain vault protocol.
//!
//! Each protocol contract gets a client that binds a deployed address to an
//! RPC provider. Clients expose one async method per view function, one
//! `PreparedCall` builder per state-mutating function, and a
//! `filter_*` / `watch_*` / `parse_*` triple per event. The compiler ABI of
//! every contract is embedded in [`metadata`].
//!
//! # Example
//!
//! ```no_run
//! use superform_rs_contracts::{connect, BlockRange, SuperformFactory};
//! use alloy::primitives::{Address, U256};
//!
//! #[tokio::main]
//! async fn main() -> superform_rs_contracts::Result<()> {
//!     let provider = connect("https://eth.llamarpc.com")?;
//!     let factory: Address = "0x...".parse().unwrap();
//!     let factory = SuperformFactory::new(factory, provider);
//!
//!     let count = factory.get_superform_count().await?;
//!     let created = factory
//!         .filter_superform_created(BlockRange::from(19_000_000), &[], &[], &[])
//!         .await?;
//!     println!("{count} superforms, {} created since block 19M", created.len());
//!
//!     let sf = factory.get_superform(U256::from(1)).await?;
//!     println!("form {} on chain {}", sf.formImplementationId_, sf.chainId_);
//!     Ok(())
//! }
//! ```

pub mod bindings;
pub mod contract;
pub mod error;
pub mod events;
pub mod metadata;
pub mod prepared_call;
pub mod provider;

pub mod core_state_registry;
pub mod erc4626_form;
pub mod payment_helper;
pub mod paymaster;
pub mod super_positions;
pub mod superform_factory;
pub mod superform_router;
pub mod superform_router_plus;
pub mod superform_router_plus_async;
pub mod vault_claimer;

pub use contract::SuperformContract;
pub use error::{ContractError, Result};
pub use events::{BlockRange, ContractEventQuery, EventQuery, EventSubscription, Log, TopicValue};
pub use metadata::{decode_event_fields, ContractMetadata, EventFields};
pub use prepared_call::PreparedCall;
pub use provider::{connect, connect_with_signer, HttpProvider};

pub use core_state_registry::CoreStateRegistry;
pub use erc4626_form::Erc4626Form;
pub use payment_helper::PaymentHelper;
pub use paymaster::PayMaster;
pub use super_positions::SuperPositions;
pub use superform_factory::SuperformFactory;
pub use superform_router::SuperformRouter;
pub use superform_router_plus::SuperformRouterPlus;
pub use superform_router_plus_async::SuperformRouterPlusAsync;
pub use vault_claimer::VaultClaimer;
