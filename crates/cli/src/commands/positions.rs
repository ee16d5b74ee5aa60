//! SuperPositions query commands.

use anyhow::Result;
use serde_json::json;
use superform_rs_contracts::{connect, SuperPositions};
use tracing::debug;

use crate::cli::{BalanceArgs, OutputFormat};
use crate::commands::{parse_address, parse_id};
use crate::output::{format_balance_detail, BalanceDetail};

pub async fn run_balance(args: &BalanceArgs, format: OutputFormat) -> Result<()> {
    let owner = parse_address(&args.owner, "owner")?;
    let id = parse_id(&args.id)?;
    let address = parse_address(&args.positions, "SuperPositions")?;
    let positions = SuperPositions::new(address, connect(&args.rpc.rpc_url)?);

    debug!(positions = %address, %owner, %id, "fetching SuperPositions balance");
    let balance = positions.balance_of(owner, id).await?;
    let total_supply = positions.total_supply(id).await?;

    let detail = BalanceDetail {
        owner,
        id,
        balance,
        total_supply,
    };

    match format {
        OutputFormat::Table => {
            println!("{}", format_balance_detail(&detail));
        }
        OutputFormat::Json => {
            let value = json!({
                "owner": detail.owner,
                "id": detail.id.to_string(),
                "balance": detail.balance.to_string(),
                "totalSupply": detail.total_supply.to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }

    Ok(())
}
