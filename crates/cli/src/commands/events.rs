//! Event query and watch commands.

use std::time::Duration;

use anyhow::{Context, Result};
use superform_rs_contracts::metadata::JsonAbi;
use superform_rs_contracts::{
    connect, decode_event_fields, BlockRange, CoreStateRegistry, Erc4626Form, Log, PayMaster,
    PaymentHelper, SuperPositions, SuperformContract, SuperformFactory, SuperformRouter,
    SuperformRouterPlus, SuperformRouterPlusAsync, VaultClaimer,
};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::cli::{EventsArgs, OutputFormat, WatchArgs};
use crate::commands::{find_contract, parse_address};
use crate::output::{event_json, format_event_line, format_events_table, EventRecord};

/// Bind `$client` to the typed client matching `$metadata` and evaluate `$body`.
macro_rules! with_client {
    ($metadata:expr, $address:expr, $provider:expr, |$client:ident| $body:expr) => {
        match $metadata.name {
            "CoreStateRegistry" => {
                let $client = CoreStateRegistry::new($address, $provider);
                $body
            }
            "ERC4626Form" => {
                let $client = Erc4626Form::new($address, $provider);
                $body
            }
            "PayMaster" => {
                let $client = PayMaster::new($address, $provider);
                $body
            }
            "PaymentHelper" => {
                let $client = PaymentHelper::new($address, $provider);
                $body
            }
            "SuperPositions" => {
                let $client = SuperPositions::new($address, $provider);
                $body
            }
            "SuperformFactory" => {
                let $client = SuperformFactory::new($address, $provider);
                $body
            }
            "SuperformRouter" => {
                let $client = SuperformRouter::new($address, $provider);
                $body
            }
            "SuperformRouterPlus" => {
                let $client = SuperformRouterPlus::new($address, $provider);
                $body
            }
            "SuperformRouterPlusAsync" => {
                let $client = SuperformRouterPlusAsync::new($address, $provider);
                $body
            }
            "VaultClaimer" => {
                let $client = VaultClaimer::new($address, $provider);
                $body
            }
            other => anyhow::bail!("No client for contract {}", other),
        }
    };
}

/// Decode a log's arguments against the contract's embedded ABI.
fn record(abi: &JsonAbi, log: &Log) -> Result<EventRecord> {
    let (name, fields) = match decode_event_fields(abi, log.data())? {
        Some(decoded) => (decoded.name, decoded.fields),
        None => ("Unknown".to_string(), Vec::new()),
    };

    Ok(EventRecord {
        block: log.block_number,
        tx: log.transaction_hash,
        log_index: log.log_index,
        name,
        fields,
    })
}

async fn fetch_events<C: SuperformContract>(
    client: &C,
    range: BlockRange,
) -> Result<Vec<EventRecord>> {
    let abi = C::METADATA.json_abi()?;
    debug!(
        contract = C::METADATA.name,
        address = %client.address(),
        ?range,
        "fetching events"
    );
    let events = client
        .all_events()
        .range(range)
        .query()
        .await
        .with_context(|| format!("Failed to fetch {} events", C::METADATA.name))?;

    events.iter().map(|(_, log)| record(&abi, log)).collect()
}

pub async fn run_events(args: &EventsArgs, format: OutputFormat) -> Result<()> {
    let metadata = find_contract(&args.contract)?;
    let address = parse_address(&args.address, "contract")?;
    let provider = connect(&args.rpc.rpc_url)?;

    let range = match args.to_block {
        Some(to) if to < args.from_block => {
            anyhow::bail!("--to-block {} is before --from-block {}", to, args.from_block)
        }
        Some(to) => BlockRange::between(args.from_block, to),
        None => BlockRange::from(args.from_block),
    };

    let records = with_client!(metadata, address, provider, |client| {
        fetch_events(&client, range).await?
    });

    match format {
        OutputFormat::Table => {
            println!("{}", format_events_table(&records));
        }
        OutputFormat::Json => {
            let value: Vec<serde_json::Value> = records.iter().map(event_json).collect();
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }

    Ok(())
}

async fn stream_events<C: SuperformContract>(
    client: &C,
    poll_interval: Duration,
    format: OutputFormat,
) -> Result<()> {
    let abi = C::METADATA.json_abi()?;
    let (tx, mut rx) = mpsc::channel(64);

    let subscription = client
        .all_events()
        .poll_interval(poll_interval)
        .watch(tx)
        .await
        .with_context(|| format!("Failed to watch {} events", C::METADATA.name))?;

    eprintln!(
        "Watching {} at {} (Ctrl-C to stop)",
        C::METADATA.name,
        client.address()
    );

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!(contract = C::METADATA.name, "interrupted, stopping watch");
                subscription.unsubscribe();
                break;
            }
            next = rx.recv() => match next {
                Some((_, log)) => {
                    let record = record(&abi, &log)?;
                    match format {
                        OutputFormat::Table => println!("{}", format_event_line(&record)),
                        OutputFormat::Json => println!("{}", event_json(&record)),
                    }
                }
                None => {
                    info!(contract = C::METADATA.name, "subscription closed");
                    break;
                }
            },
        }
    }

    subscription.join().await?;
    Ok(())
}

pub async fn run_watch(args: &WatchArgs, format: OutputFormat) -> Result<()> {
    let metadata = find_contract(&args.contract)?;
    let address = parse_address(&args.address, "contract")?;
    let provider = connect(&args.rpc.rpc_url)?;
    let poll_interval = Duration::from_millis(args.poll_interval_ms);

    with_client!(metadata, address, provider, |client| {
        stream_events(&client, poll_interval, format).await?
    });

    Ok(())
}
