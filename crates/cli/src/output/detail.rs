//! Detailed output formatting for single-item queries.

use alloy_chains::Chain;
use alloy_primitives::{Address, U256};
use colored::Colorize;

pub struct SuperformDetail {
    pub id: U256,
    pub superform: Address,
    pub form_implementation_id: u32,
    pub chain_id: u64,
    pub registered: bool,
    pub form_paused: bool,
}

pub struct PayloadDetail {
    pub id: U256,
    pub header: U256,
    pub tracking: u8,
    pub amb_ids: Vec<u8>,
    pub body_len: usize,
}

pub struct BalanceDetail {
    pub owner: Address,
    pub id: U256,
    pub balance: U256,
    pub total_supply: U256,
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Chain name when known, otherwise the bare id.
pub(crate) fn format_chain(chain_id: u64) -> String {
    let chain = Chain::from_id(chain_id);
    match chain.named() {
        Some(named) => format!("{} ({})", named, chain_id),
        None => chain_id.to_string(),
    }
}

fn header(output: &mut String, title: &str) {
    output.push_str(&format!("{}\n", "=".repeat(60)));
    output.push_str(&format!("{}\n", title.bold()));
    output.push_str(&format!("{}\n\n", "=".repeat(60)));
}

pub fn format_superform_detail(detail: &SuperformDetail) -> String {
    let mut output = String::new();
    header(&mut output, &format!("Superform {}", detail.id));

    output.push_str(&format!("{}\n", "Superform".cyan().bold()));
    output.push_str(&format!("  Address:        {}\n", detail.superform));
    output.push_str(&format!("  Chain:          {}\n", format_chain(detail.chain_id)));
    output.push_str(&format!("  Registered:     {}\n\n", yes_no(detail.registered)));

    output.push_str(&format!("{}\n", "Form Implementation".cyan().bold()));
    output.push_str(&format!("  Id:             {}\n", detail.form_implementation_id));
    output.push_str(&format!("  Paused:         {}\n", yes_no(detail.form_paused)));

    output
}

pub fn format_payload_detail(detail: &PayloadDetail) -> String {
    let mut output = String::new();
    header(&mut output, &format!("Payload {}", detail.id));

    let ambs = if detail.amb_ids.is_empty() {
        "-".to_string()
    } else {
        detail
            .amb_ids
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };

    output.push_str(&format!("{}\n", "Payload".cyan().bold()));
    output.push_str(&format!("  Header:    {:#x}\n", detail.header));
    output.push_str(&format!("  Tracking:  {}\n", detail.tracking));
    output.push_str(&format!("  AMB Ids:   {}\n", ambs));
    output.push_str(&format!("  Body:      {} bytes\n", detail.body_len));

    output
}

pub fn format_balance_detail(detail: &BalanceDetail) -> String {
    let mut output = String::new();
    header(&mut output, &format!("SuperPosition {}", detail.id));

    output.push_str(&format!("{}\n", "Balance".cyan().bold()));
    output.push_str(&format!("  Owner:         {}\n", detail.owner));
    output.push_str(&format!("  Balance:       {}\n", detail.balance));
    output.push_str(&format!("  Total Supply:  {}\n", detail.total_supply));

    output
}
