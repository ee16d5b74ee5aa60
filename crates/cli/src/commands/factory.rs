//! SuperformFactory query commands.

use anyhow::{Context, Result};
use serde_json::json;
use superform_rs_contracts::{connect, SuperformFactory};
use tracing::debug;

use crate::cli::{FactoryArgs, OutputFormat, SuperformArgs};
use crate::commands::{parse_address, parse_id};
use crate::output::{format_superform_detail, SuperformDetail};

fn factory_client(args: &FactoryArgs) -> Result<SuperformFactory> {
    let address = parse_address(&args.factory, "factory")?;
    let provider = connect(&args.rpc.rpc_url)?;
    debug!(factory = %address, rpc_url = %args.rpc.rpc_url, "connecting to SuperformFactory");
    Ok(SuperformFactory::new(address, provider))
}

pub async fn run_superform(args: &SuperformArgs, format: OutputFormat) -> Result<()> {
    let id = parse_id(&args.id)?;
    let factory = factory_client(&args.factory)?;

    let superform = factory
        .get_superform(id)
        .await
        .with_context(|| format!("Failed to fetch superform {}", id))?;
    let is_superform = factory.is_superform(id).await?;
    let form_paused = factory
        .is_form_implementation_paused(superform.formImplementationId_)
        .await?;

    let detail = SuperformDetail {
        id,
        superform: superform.superform_,
        form_implementation_id: superform.formImplementationId_,
        chain_id: superform.chainId_,
        registered: is_superform,
        form_paused,
    };

    match format {
        OutputFormat::Table => {
            println!("{}", format_superform_detail(&detail));
        }
        OutputFormat::Json => {
            let value = json!({
                "id": detail.id.to_string(),
                "superform": detail.superform,
                "formImplementationId": detail.form_implementation_id,
                "chainId": detail.chain_id,
                "registered": detail.registered,
                "formPaused": detail.form_paused,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }

    Ok(())
}

pub async fn run_factory_count(args: &FactoryArgs, format: OutputFormat) -> Result<()> {
    let factory = factory_client(args)?;

    let superforms = factory.get_superform_count().await?;
    let forms = factory.get_form_count().await?;

    match format {
        OutputFormat::Table => {
            println!("Superforms:           {}", superforms);
            println!("Form implementations: {}", forms);
        }
        OutputFormat::Json => {
            let value = json!({
                "superforms": superforms.to_string(),
                "formImplementations": forms.to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }

    Ok(())
}
