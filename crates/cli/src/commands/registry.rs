//! CoreStateRegistry query commands.

use anyhow::{Context, Result};
use serde_json::json;
use superform_rs_contracts::{connect, CoreStateRegistry};
use tracing::debug;

use crate::cli::{OutputFormat, PayloadArgs};
use crate::commands::{parse_address, parse_id};
use crate::output::{format_payload_detail, PayloadDetail};

pub async fn run_payload(args: &PayloadArgs, format: OutputFormat) -> Result<()> {
    let id = parse_id(&args.id)?;
    let address = parse_address(&args.registry, "registry")?;
    let registry = CoreStateRegistry::new(address, connect(&args.rpc.rpc_url)?);

    let count = registry.payloads_count().await?;
    debug!(registry = %address, %id, %count, "fetching payload");
    if id == alloy_primitives::U256::ZERO || id > count {
        anyhow::bail!("Payload {} does not exist ({} payloads received)", id, count);
    }

    let header = registry
        .payload_header(id)
        .await
        .with_context(|| format!("Failed to fetch payload {}", id))?;
    let tracking = registry.payload_tracking(id).await?;
    let amb_ids = registry.get_message_amb(id).await?;
    let body = registry.payload_body(id).await?;

    let detail = PayloadDetail {
        id,
        header,
        tracking,
        amb_ids,
        body_len: body.len(),
    };

    match format {
        OutputFormat::Table => {
            println!("{}", format_payload_detail(&detail));
        }
        OutputFormat::Json => {
            let value = json!({
                "id": detail.id.to_string(),
                "header": format!("{:#x}", detail.header),
                "tracking": detail.tracking,
                "ambIds": detail.amb_ids,
                "body": body,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }

    Ok(())
}
