//! Superform CLI - Inspect Superform protocol contracts.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands, FactorySubcommand, PositionsSubcommand, RegistrySubcommand};
use commands::{
    run_abi, run_balance, run_contracts, run_events, run_factory_count, run_payload,
    run_superform, run_watch,
};

fn setup_log(log_level: &str) {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::new(log_level);
    if tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()
        .is_err()
    {}
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_log(&cli.log_level);

    match cli.command {
        Commands::Abi(args) => run_abi(&args, cli.format)?,
        Commands::Contracts => run_contracts(cli.format)?,
        Commands::Factory { subcommand } => match subcommand {
            FactorySubcommand::Superform(args) => {
                run_superform(&args, cli.format).await?;
            }
            FactorySubcommand::Count(args) => {
                run_factory_count(&args, cli.format).await?;
            }
        },
        Commands::Registry { subcommand } => match subcommand {
            RegistrySubcommand::Payload(args) => {
                run_payload(&args, cli.format).await?;
            }
        },
        Commands::Positions { subcommand } => match subcommand {
            PositionsSubcommand::Balance(args) => {
                run_balance(&args, cli.format).await?;
            }
        },
        Commands::Events(args) => run_events(&args, cli.format).await?,
        Commands::Watch(args) => run_watch(&args, cli.format).await?,
    }

    Ok(())
}
