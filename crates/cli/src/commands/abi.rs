//! Offline ABI inspection commands.

use anyhow::Result;
use serde_json::json;
use superform_rs_contracts::metadata::ALL_CONTRACTS;

use crate::cli::{AbiArgs, OutputFormat};
use crate::commands::find_contract;
use crate::output::{format_abi, format_contracts_table, AbiEntry, AbiSummary, ContractSummary};

pub fn run_abi(args: &AbiArgs, format: OutputFormat) -> Result<()> {
    let metadata = find_contract(&args.contract)?;
    let abi = metadata.json_abi()?;

    let summary = AbiSummary {
        name: metadata.name,
        functions: abi
            .functions()
            .map(|f| AbiEntry {
                id: f.selector().to_string(),
                signature: f.signature(),
                kind: f.state_mutability.as_json_str().to_string(),
            })
            .collect(),
        events: abi
            .events()
            .map(|e| AbiEntry {
                id: e.selector().to_string(),
                signature: e.signature(),
                kind: if e.anonymous { "anonymous" } else { "" }.to_string(),
            })
            .collect(),
        errors: abi
            .errors()
            .map(|e| AbiEntry {
                id: e.selector().to_string(),
                signature: e.signature(),
                kind: String::new(),
            })
            .collect(),
    };

    match format {
        OutputFormat::Table => {
            println!("{}", format_abi(&summary));
        }
        OutputFormat::Json => {
            let entries = |list: &[AbiEntry]| -> Vec<serde_json::Value> {
                list.iter()
                    .map(|e| json!({ "id": e.id, "signature": e.signature, "kind": e.kind }))
                    .collect()
            };
            let value = json!({
                "name": summary.name,
                "functions": entries(&summary.functions),
                "events": entries(&summary.events),
                "errors": entries(&summary.errors),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }

    Ok(())
}

pub fn run_contracts(format: OutputFormat) -> Result<()> {
    let mut contracts = Vec::with_capacity(ALL_CONTRACTS.len());
    for metadata in ALL_CONTRACTS {
        let abi = metadata.json_abi()?;
        contracts.push(ContractSummary {
            name: metadata.name,
            alias: metadata.alias,
            functions: abi.functions().count(),
            events: abi.events().count(),
            errors: abi.errors().count(),
        });
    }

    match format {
        OutputFormat::Table => {
            println!("{}", format_contracts_table(&contracts));
        }
        OutputFormat::Json => {
            let value: Vec<serde_json::Value> = contracts
                .iter()
                .map(|c| {
                    json!({
                        "name": c.name,
                        "alias": c.alias,
                        "functions": c.functions,
                        "events": c.events,
                        "errors": c.errors,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }

    Ok(())
}
