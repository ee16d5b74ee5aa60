//! Shared bound-contract trait and the macros that generate client boilerplate.
//!
//! A client pairs a deployed address with a provider. Reads return decoded
//! values, writes return a `PreparedCall`, and every event gets a
//! `filter_*` / `watch_*` / `parse_*` triple.

use alloy::primitives::Address;
use alloy::sol_types::{SolEvent, SolEventInterface};

use crate::events::{ContractEventQuery, EventQuery};
use crate::metadata::ContractMetadata;
use crate::provider::HttpProvider;

/// Behaviour common to every Superform contract client.
pub trait SuperformContract {
    /// Compiler ABI of the bound contract.
    const METADATA: &'static ContractMetadata;

    /// Generated enum over every event the contract declares.
    type Events: SolEventInterface + std::fmt::Debug + Send + 'static;

    /// Address of the bound contract.
    fn address(&self) -> Address;

    /// Provider used for calls, transactions and log queries.
    fn provider(&self) -> &HttpProvider;

    /// Start a log query for any event type emitted by this contract.
    fn events<E: SolEvent>(&self) -> EventQuery<'_, E> {
        EventQuery::new(self.address(), self.provider())
    }

    /// Start a log query decoding every event this contract declares.
    fn all_events(&self) -> ContractEventQuery<'_, Self::Events> {
        ContractEventQuery::new(self.address(), self.provider())
    }
}

/// Declare a client struct around a generated `sol!` instance type.
///
/// ```rust,ignore
/// define_contract_client!(
///     /// Client for the factory.
///     SuperformFactory,
///     ISuperformFactory::ISuperformFactoryInstance,
///     ISuperformFactory::ISuperformFactoryEvents,
///     SUPERFORM_FACTORY
/// );
/// ```
macro_rules! define_contract_client {
    (
        $(#[$meta:meta])*
        $client:ident,
        $iface:ident :: $instance:ident,
        $events_iface:ident :: $events:ident,
        $metadata:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $client {
            contract: $iface::$instance<$crate::provider::HttpProvider>,
        }

        impl $client {
            /// Bind the contract deployed at `address` to `provider`.
            pub fn new(
                address: alloy::primitives::Address,
                provider: $crate::provider::HttpProvider,
            ) -> Self {
                Self {
                    contract: $iface::$instance::new(address, provider),
                }
            }

            /// Address of the bound contract.
            pub fn address(&self) -> alloy::primitives::Address {
                *self.contract.address()
            }

            /// The underlying `sol!` instance, for raw call builders.
            pub fn instance(&self) -> &$iface::$instance<$crate::provider::HttpProvider> {
                &self.contract
            }
        }

        impl $crate::contract::SuperformContract for $client {
            const METADATA: &'static $crate::metadata::ContractMetadata =
                &$crate::metadata::$metadata;

            type Events = $events_iface::$events;

            fn address(&self) -> alloy::primitives::Address {
                *self.contract.address()
            }

            fn provider(&self) -> &$crate::provider::HttpProvider {
                self.contract.provider()
            }
        }

        impl std::fmt::Debug for $client {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($client))
                    .field("address", self.contract.address())
                    .finish()
            }
        }
    };
}

/// Generate the `filter_*`, `watch_*` and `parse_*` methods for a list of events.
///
/// Each event lists its indexed arguments in declaration order; they become
/// slice parameters where an empty slice matches any value.
macro_rules! event_accessors {
    (
        $iface:ident {
            $(
                $event:ident => $filter:ident, $watch:ident, $parse:ident
                    ( $($topic:ident : $ty:ty),* );
            )*
        }
    ) => {
        $(
            #[doc = concat!("Fetch `", stringify!($event), "` logs emitted in `range`.")]
            pub async fn $filter(
                &self,
                range: $crate::events::BlockRange,
                $($topic: &[$ty],)*
            ) -> $crate::error::Result<Vec<($iface::$event, alloy::rpc::types::Log)>> {
                $crate::contract::SuperformContract::events::<$iface::$event>(self)
                    .range(range)
                    .indexed(vec![$($crate::events::topic_values($topic)),*])
                    .query()
                    .await
            }

            #[doc = concat!("Forward every new `", stringify!($event), "` log to `sink`.")]
            pub async fn $watch(
                &self,
                $($topic: &[$ty],)*
                sink: tokio::sync::mpsc::Sender<($iface::$event, alloy::rpc::types::Log)>,
            ) -> $crate::error::Result<$crate::events::EventSubscription> {
                $crate::contract::SuperformContract::events::<$iface::$event>(self)
                    .indexed(vec![$($crate::events::topic_values($topic)),*])
                    .watch(sink)
                    .await
            }

            #[doc = concat!("Decode a raw log as `", stringify!($event), "`.")]
            pub fn $parse(
                &self,
                log: &alloy::rpc::types::Log,
            ) -> $crate::error::Result<$iface::$event> {
                $crate::events::parse_log(log)
            }
        )*
    };
}

pub(crate) use {define_contract_client, event_accessors};
