//! Table formatting for embedded ABIs.

use colored::Colorize;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

/// One function, event or error of a contract ABI.
pub struct AbiEntry {
    /// Selector or topic hash.
    pub id: String,
    pub signature: String,
    /// State mutability for functions, `anonymous` for anonymous events.
    pub kind: String,
}

pub struct AbiSummary {
    pub name: &'static str,
    pub functions: Vec<AbiEntry>,
    pub events: Vec<AbiEntry>,
    pub errors: Vec<AbiEntry>,
}

pub struct ContractSummary {
    pub name: &'static str,
    pub alias: &'static str,
    pub functions: usize,
    pub events: usize,
    pub errors: usize,
}

#[derive(Tabled)]
struct FunctionRow {
    #[tabled(rename = "Selector")]
    selector: String,
    #[tabled(rename = "Signature")]
    signature: String,
    #[tabled(rename = "Mutability")]
    mutability: String,
}

#[derive(Tabled)]
struct IdRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Signature")]
    signature: String,
}

#[derive(Tabled)]
struct ContractRow {
    #[tabled(rename = "Contract")]
    name: String,
    #[tabled(rename = "Alias")]
    alias: String,
    #[tabled(rename = "Functions")]
    functions: usize,
    #[tabled(rename = "Events")]
    events: usize,
    #[tabled(rename = "Errors")]
    errors: usize,
}

fn render<T: Tabled>(rows: Vec<T>) -> String {
    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::left()));
    table.to_string()
}

fn id_rows(entries: &[AbiEntry]) -> Vec<IdRow> {
    entries
        .iter()
        .map(|e| IdRow {
            id: e.id.clone(),
            signature: if e.kind.is_empty() {
                e.signature.clone()
            } else {
                format!("{} ({})", e.signature, e.kind)
            },
        })
        .collect()
}

pub fn format_abi(summary: &AbiSummary) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", "=".repeat(60)));
    output.push_str(&format!("{}\n", summary.name.bold()));
    output.push_str(&format!("{}\n\n", "=".repeat(60)));

    output.push_str(&format!(
        "{}\n",
        format!("Functions ({})", summary.functions.len()).cyan().bold()
    ));
    let functions: Vec<FunctionRow> = summary
        .functions
        .iter()
        .map(|f| FunctionRow {
            selector: f.id.clone(),
            signature: f.signature.clone(),
            mutability: f.kind.clone(),
        })
        .collect();
    output.push_str(&render(functions));
    output.push_str("\n\n");

    output.push_str(&format!(
        "{}\n",
        format!("Events ({})", summary.events.len()).cyan().bold()
    ));
    if summary.events.is_empty() {
        output.push_str("  None\n");
    } else {
        output.push_str(&render(id_rows(&summary.events)));
        output.push('\n');
    }
    output.push('\n');

    output.push_str(&format!(
        "{}\n",
        format!("Errors ({})", summary.errors.len()).cyan().bold()
    ));
    if summary.errors.is_empty() {
        output.push_str("  None\n");
    } else {
        output.push_str(&render(id_rows(&summary.errors)));
        output.push('\n');
    }

    output
}

pub fn format_contracts_table(contracts: &[ContractSummary]) -> String {
    let rows: Vec<ContractRow> = contracts
        .iter()
        .map(|c| ContractRow {
            name: c.name.to_string(),
            alias: c.alias.to_string(),
            functions: c.functions,
            events: c.events,
            errors: c.errors,
        })
        .collect();
    render(rows)
}
