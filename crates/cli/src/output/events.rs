//! Formatting for decoded event logs.

use alloy_primitives::B256;
use colored::Colorize;
use serde_json::{json, Map, Value};
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

/// A decoded log ready for display.
pub struct EventRecord {
    pub block: Option<u64>,
    pub tx: Option<B256>,
    pub log_index: Option<u64>,
    pub name: String,
    /// Decoded `(parameter name, value)` pairs in declaration order.
    pub fields: Vec<(String, Value)>,
}

/// `name: value` pairs for the table and line views.
fn fields_text(fields: &[(String, Value)]) -> String {
    fields
        .iter()
        .map(|(name, value)| format!("{}: {}", name, value))
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Tabled)]
struct EventRow {
    #[tabled(rename = "Block")]
    block: String,
    #[tabled(rename = "Tx")]
    tx: String,
    #[tabled(rename = "Log")]
    log_index: String,
    #[tabled(rename = "Event")]
    name: String,
    #[tabled(rename = "Fields")]
    fields: String,
}

fn truncate_hash(hash: &str) -> String {
    if hash.len() > 14 {
        format!("{}...{}", &hash[..8], &hash[hash.len() - 6..])
    } else {
        hash.to_string()
    }
}

fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

pub fn format_events_table(records: &[EventRecord]) -> String {
    if records.is_empty() {
        return "No events found.".to_string();
    }

    let rows: Vec<EventRow> = records
        .iter()
        .map(|r| EventRow {
            block: or_dash(r.block),
            tx: r
                .tx
                .map(|tx| truncate_hash(&tx.to_string()))
                .unwrap_or_else(|| "-".to_string()),
            log_index: or_dash(r.log_index),
            name: r.name.clone(),
            fields: fields_text(&r.fields),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::left()));

    table.to_string()
}

/// Single-line rendering used while watching.
pub fn format_event_line(record: &EventRecord) -> String {
    format!(
        "[{}] {} {}",
        or_dash(record.block).dimmed(),
        record.name.cyan().bold(),
        fields_text(&record.fields)
    )
}

pub fn event_json(record: &EventRecord) -> serde_json::Value {
    json!({
        "block": record.block,
        "tx": record.tx,
        "logIndex": record.log_index,
        "event": record.name,
        "fields": record.fields.iter().cloned().collect::<Map<String, Value>>(),
    })
}
