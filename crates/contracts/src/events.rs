//! Event log querying, decoding and subscriptions.
//!
//! Every contract client exposes its events through `EventQuery`, which turns
//! a block range and per-position indexed values into an `eth_getLogs` filter
//! or a polling subscription. Indexed arguments are given as slices: an empty
//! slice matches any value, several values match any of them.

use std::marker::PhantomData;
use std::time::Duration;

use alloy::primitives::{Address, B256, U256};
use alloy::providers::Provider;
use alloy::rpc::types::{BlockNumberOrTag, Filter};
pub use alloy::rpc::types::Log;
use alloy::sol_types::{SolEvent, SolEventInterface};
use futures::{Stream, StreamExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::error::{ContractError, Result};
use crate::provider::HttpProvider;

/// Default interval between `eth_getFilterChanges` polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(4);

/// Inclusive block range for historical queries.
///
/// `to: None` means up to the latest block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlockRange {
    pub from: u64,
    pub to: Option<u64>,
}

impl BlockRange {
    /// Genesis to latest.
    pub const fn all() -> Self {
        Self { from: 0, to: None }
    }

    /// `from` to latest.
    pub const fn from(from: u64) -> Self {
        Self { from, to: None }
    }

    /// `from` to `to`, both inclusive.
    pub const fn between(from: u64, to: u64) -> Self {
        Self { from, to: Some(to) }
    }

    fn apply(self, filter: Filter) -> Filter {
        let to = self.to.map_or(BlockNumberOrTag::Latest, BlockNumberOrTag::Number);
        filter.from_block(self.from).to_block(to)
    }
}

/// A value usable as an indexed event argument.
pub trait TopicValue {
    /// The 32-byte topic word for this value.
    fn to_topic(&self) -> B256;
}

macro_rules! impl_uint_topic {
    ($($ty:ty),*) => {
        $(
            impl TopicValue for $ty {
                fn to_topic(&self) -> B256 {
                    B256::from(U256::from(*self).to_be_bytes::<32>())
                }
            }
        )*
    };
}

impl_uint_topic!(u8, u32, u64);

impl TopicValue for U256 {
    fn to_topic(&self) -> B256 {
        B256::from(self.to_be_bytes::<32>())
    }
}

impl TopicValue for Address {
    fn to_topic(&self) -> B256 {
        self.into_word()
    }
}

/// Indexed dynamic values (`string`, `bytes`) are matched by their keccak hash.
impl TopicValue for B256 {
    fn to_topic(&self) -> B256 {
        *self
    }
}

impl TopicValue for bool {
    fn to_topic(&self) -> B256 {
        B256::with_last_byte(u8::from(*self))
    }
}

/// Encode a set of indexed values for one topic position.
pub fn topic_values<T: TopicValue>(values: &[T]) -> Vec<B256> {
    values.iter().map(TopicValue::to_topic).collect()
}

/// Decode a raw log as event `E`.
///
/// Logs carrying a different event signature are rejected.
pub fn parse_log<E: SolEvent>(log: &Log) -> Result<E> {
    if !E::ANONYMOUS && log.topic0() != Some(&E::SIGNATURE_HASH) {
        return Err(ContractError::EventDecode(format!(
            "log is not a {} event (topic0 = {:?})",
            E::SIGNATURE,
            log.topic0()
        )));
    }

    E::decode_log_data(log.data())
        .map_err(|e| ContractError::EventDecode(format!("{}: {}", E::SIGNATURE, e)))
}

/// Builder for a log query or subscription on one contract event.
pub struct EventQuery<'a, E: SolEvent> {
    address: Address,
    provider: &'a HttpProvider,
    range: Option<BlockRange>,
    topics: Vec<Vec<B256>>,
    poll_interval: Duration,
    _event: PhantomData<E>,
}

impl<'a, E: SolEvent> EventQuery<'a, E> {
    pub fn new(address: Address, provider: &'a HttpProvider) -> Self {
        Self {
            address,
            provider,
            range: None,
            topics: Vec::new(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            _event: PhantomData,
        }
    }

    /// Restrict the blocks searched. For subscriptions only `from` is used.
    pub fn range(mut self, range: BlockRange) -> Self {
        self.range = Some(range);
        self
    }

    /// Indexed argument values, in declaration order (topic1, topic2, topic3).
    pub fn indexed(mut self, topics: Vec<Vec<B256>>) -> Self {
        self.topics = topics;
        self
    }

    /// Interval between polls when watching.
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    fn base_filter(&self) -> Filter {
        let mut filter = Filter::new()
            .address(self.address)
            .event_signature(E::SIGNATURE_HASH);

        for (position, values) in self.topics.iter().enumerate() {
            let values = values.clone();
            filter = match position {
                0 => filter.topic1(values),
                1 => filter.topic2(values),
                2 => filter.topic3(values),
                _ => filter,
            };
        }
        filter
    }

    /// The `eth_getLogs` filter this query sends.
    pub fn filter(&self) -> Filter {
        self.range
            .unwrap_or_default()
            .apply(self.base_filter())
    }

    /// Fetch and decode all matching logs.
    pub async fn query(&self) -> Result<Vec<(E, Log)>> {
        let filter = self.filter();
        debug!(event = E::SIGNATURE, address = %self.address, ?filter, "querying logs");

        let logs = self
            .provider
            .get_logs(&filter)
            .await
            .map_err(|e| ContractError::EventQuery(e.to_string()))?;

        debug!(event = E::SIGNATURE, count = logs.len(), "logs fetched");
        logs.into_iter()
            .map(|log| parse_log::<E>(&log).map(|event| (event, log)))
            .collect()
    }

    /// Install a log filter on the node and forward each decoded event to `sink`.
    ///
    /// The subscription keeps polling until it is cancelled, the receiver is
    /// dropped, the node stream ends or a log fails to decode.
    pub async fn watch(self, sink: mpsc::Sender<(E, Log)>) -> Result<EventSubscription>
    where
        E: Send + 'static,
    {
        let mut filter = self.base_filter();
        if let Some(range) = self.range {
            filter = filter.from_block(range.from);
        }

        let poller = self
            .provider
            .watch_logs(&filter)
            .await
            .map_err(|e| ContractError::Subscription(e.to_string()))?;
        info!(event = E::SIGNATURE, address = %self.address, "log subscription installed");

        let stream = poller
            .with_poll_interval(self.poll_interval)
            .into_stream()
            .flat_map(futures::stream::iter);

        Ok(EventSubscription::spawn(stream, sink, parse_log::<E>, E::SIGNATURE))
    }
}

/// Decode a raw log as any event declared by one contract.
///
/// `I` is a generated events enum such as `ISuperformFactory::ISuperformFactoryEvents`.
pub fn parse_any_log<I: SolEventInterface>(log: &Log) -> Result<I> {
    I::decode_raw_log(log.topics(), &log.data().data)
        .map_err(|e| ContractError::EventDecode(format!("{}: {}", I::NAME, e)))
}

/// Log query or subscription covering every event of one contract.
pub struct ContractEventQuery<'a, I: SolEventInterface> {
    address: Address,
    provider: &'a HttpProvider,
    range: Option<BlockRange>,
    poll_interval: Duration,
    _events: PhantomData<I>,
}

impl<'a, I: SolEventInterface> ContractEventQuery<'a, I> {
    pub fn new(address: Address, provider: &'a HttpProvider) -> Self {
        Self {
            address,
            provider,
            range: None,
            poll_interval: DEFAULT_POLL_INTERVAL,
            _events: PhantomData,
        }
    }

    /// Restrict the blocks searched. For subscriptions only `from` is used.
    pub fn range(mut self, range: BlockRange) -> Self {
        self.range = Some(range);
        self
    }

    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// The `eth_getLogs` filter this query sends.
    pub fn filter(&self) -> Filter {
        self.range
            .unwrap_or_default()
            .apply(Filter::new().address(self.address))
    }

    /// Fetch every log the contract emitted in the range and decode it.
    ///
    /// Logs matching none of the contract's events are skipped.
    pub async fn query(&self) -> Result<Vec<(I, Log)>> {
        let filter = self.filter();
        debug!(contract = I::NAME, address = %self.address, ?filter, "querying contract logs");

        let logs = self
            .provider
            .get_logs(&filter)
            .await
            .map_err(|e| ContractError::EventQuery(e.to_string()))?;

        let total = logs.len();
        let decoded: Vec<(I, Log)> = logs
            .into_iter()
            .filter_map(|log| match parse_any_log::<I>(&log) {
                Ok(event) => Some((event, log)),
                Err(e) => {
                    debug!(error = %e, tx = ?log.transaction_hash, "skipping unknown log");
                    None
                }
            })
            .collect();

        debug!(contract = I::NAME, total, decoded = decoded.len(), "contract logs fetched");
        Ok(decoded)
    }

    /// Forward every new log of the contract to `sink`, decoded.
    ///
    /// A log matching none of the contract's events ends the subscription
    /// with an error.
    pub async fn watch(self, sink: mpsc::Sender<(I, Log)>) -> Result<EventSubscription>
    where
        I: Send + 'static,
    {
        let mut filter = Filter::new().address(self.address);
        if let Some(range) = self.range {
            filter = filter.from_block(range.from);
        }

        let poller = self
            .provider
            .watch_logs(&filter)
            .await
            .map_err(|e| ContractError::Subscription(e.to_string()))?;
        info!(contract = I::NAME, address = %self.address, "contract log subscription installed");

        let stream = poller
            .with_poll_interval(self.poll_interval)
            .into_stream()
            .flat_map(futures::stream::iter);

        Ok(EventSubscription::spawn(stream, sink, parse_any_log::<I>, I::NAME))
    }
}

/// Handle to a running log subscription.
///
/// Dropping the handle cancels the subscription.
pub struct EventSubscription {
    cancel: CancellationToken,
    handle: Option<JoinHandle<Result<()>>>,
}

impl EventSubscription {
    pub(crate) fn spawn<T, S>(
        stream: S,
        sink: mpsc::Sender<(T, Log)>,
        decode: fn(&Log) -> Result<T>,
        label: &'static str,
    ) -> Self
    where
        T: Send + 'static,
        S: Stream<Item = Log> + Send + 'static,
    {
        let cancel = CancellationToken::new();
        let handle = tokio::spawn(forward_logs(stream, sink, decode, label, cancel.clone()));
        Self {
            cancel,
            handle: Some(handle),
        }
    }

    /// Stop forwarding events.
    pub fn unsubscribe(&self) {
        self.cancel.cancel();
    }

    /// Whether `unsubscribe` has been called.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Wait for the forwarding task to finish and return its outcome.
    ///
    /// Resolves to the decode error that stopped the subscription, if any.
    pub async fn join(mut self) -> Result<()> {
        let Some(handle) = self.handle.take() else {
            return Ok(());
        };
        handle
            .await
            .map_err(|e| ContractError::Subscription(format!("subscription task failed: {}", e)))?
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn forward_logs<T, S>(
    stream: S,
    sink: mpsc::Sender<(T, Log)>,
    decode: fn(&Log) -> Result<T>,
    label: &'static str,
    cancel: CancellationToken,
) -> Result<()>
where
    S: Stream<Item = Log>,
{
    let mut stream = std::pin::pin!(stream);
    loop {
        let log = tokio::select! {
            () = cancel.cancelled() => {
                debug!(event = label, "subscription cancelled");
                return Ok(());
            }
            () = sink.closed() => {
                debug!(event = label, "receiver dropped, stopping subscription");
                return Ok(());
            }
            next = stream.next() => match next {
                Some(log) => log,
                None => {
                    warn!(event = label, "log stream ended");
                    return Ok(());
                }
            },
        };

        let event = decode(&log).inspect_err(|e| {
            warn!(event = label, error = %e, "stopping subscription on undecodable log");
        })?;

        tokio::select! {
            () = cancel.cancelled() => return Ok(()),
            sent = sink.send((event, log)) => {
                if sent.is_err() {
                    debug!(event = label, "receiver dropped, stopping subscription");
                    return Ok(());
                }
            }
        }
    }
}
