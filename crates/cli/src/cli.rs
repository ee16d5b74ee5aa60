//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};

/// Superform CLI - Inspect Superform protocol contracts
#[derive(Parser, Debug)]
#[command(name = "superform")]
#[command(about = "CLI tool for inspecting Superform protocol contracts", long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Log filter (e.g. "info", "superform_rs_contracts=debug")
    #[arg(long, global = true, default_value = "warn", value_parser = parse_log_filter)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Reject filters `EnvFilter` cannot parse instead of dropping them.
fn parse_log_filter(value: &str) -> Result<String, String> {
    tracing_subscriber::EnvFilter::try_new(value)
        .map(|_| value.to_string())
        .map_err(|e| format!("invalid log filter: {}", e))
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the embedded ABI of a contract (offline)
    Abi(AbiArgs),
    /// List the contracts with embedded ABIs (offline)
    Contracts,
    /// Query the SuperformFactory
    Factory {
        #[command(subcommand)]
        subcommand: FactorySubcommand,
    },
    /// Query the CoreStateRegistry
    Registry {
        #[command(subcommand)]
        subcommand: RegistrySubcommand,
    },
    /// Query SuperPositions balances
    Positions {
        #[command(subcommand)]
        subcommand: PositionsSubcommand,
    },
    /// Decode past events emitted by a contract
    Events(EventsArgs),
    /// Stream new events emitted by a contract until Ctrl-C
    Watch(WatchArgs),
}

#[derive(Subcommand, Debug)]
pub enum FactorySubcommand {
    /// Look up a superform by id
    Superform(SuperformArgs),
    /// Number of superforms created
    Count(FactoryArgs),
}

#[derive(Subcommand, Debug)]
pub enum RegistrySubcommand {
    /// Show a cross-chain payload
    Payload(PayloadArgs),
}

#[derive(Subcommand, Debug)]
pub enum PositionsSubcommand {
    /// SuperPosition balance of an owner for one superform id
    Balance(BalanceArgs),
}

#[derive(Parser, Debug)]
pub struct RpcArgs {
    /// RPC URL (can also use ETH_RPC_URL env var)
    #[arg(long, env = "ETH_RPC_URL")]
    pub rpc_url: String,
}

#[derive(Parser, Debug)]
pub struct AbiArgs {
    /// Contract name or alias (e.g. SuperformRouter, superform-router)
    pub contract: String,
}

#[derive(Parser, Debug)]
pub struct FactoryArgs {
    #[command(flatten)]
    pub rpc: RpcArgs,

    /// SuperformFactory address (can also use SUPERFORM_FACTORY env var)
    #[arg(long, env = "SUPERFORM_FACTORY")]
    pub factory: String,
}

#[derive(Parser, Debug)]
pub struct SuperformArgs {
    /// Superform id
    pub id: String,

    #[command(flatten)]
    pub factory: FactoryArgs,
}

#[derive(Parser, Debug)]
pub struct PayloadArgs {
    /// Payload id
    pub id: String,

    #[command(flatten)]
    pub rpc: RpcArgs,

    /// CoreStateRegistry address (can also use SUPERFORM_CORE_STATE_REGISTRY env var)
    #[arg(long, env = "SUPERFORM_CORE_STATE_REGISTRY")]
    pub registry: String,
}

#[derive(Parser, Debug)]
pub struct BalanceArgs {
    /// Owner address
    pub owner: String,

    /// Superform id
    pub id: String,

    #[command(flatten)]
    pub rpc: RpcArgs,

    /// SuperPositions address (can also use SUPERFORM_SUPER_POSITIONS env var)
    #[arg(long, env = "SUPERFORM_SUPER_POSITIONS")]
    pub positions: String,
}

#[derive(Parser, Debug)]
pub struct EventsArgs {
    /// Contract name or alias
    pub contract: String,

    /// Deployed contract address
    #[arg(long)]
    pub address: String,

    /// First block to search
    #[arg(long, default_value = "0")]
    pub from_block: u64,

    /// Last block to search (default: latest)
    #[arg(long)]
    pub to_block: Option<u64>,

    #[command(flatten)]
    pub rpc: RpcArgs,
}

#[derive(Parser, Debug)]
pub struct WatchArgs {
    /// Contract name or alias
    pub contract: String,

    /// Deployed contract address
    #[arg(long)]
    pub address: String,

    /// Polling interval in milliseconds
    #[arg(long, default_value = "4000")]
    pub poll_interval_ms: u64,

    #[command(flatten)]
    pub rpc: RpcArgs,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}
