//! Output formatting for CLI results.

pub mod abi;
pub mod detail;
pub mod events;

pub use abi::{format_abi, format_contracts_table, AbiEntry, AbiSummary, ContractSummary};
pub use detail::{
    format_balance_detail, format_payload_detail, format_superform_detail, BalanceDetail,
    PayloadDetail, SuperformDetail,
};
pub use events::{event_json, format_event_line, format_events_table, EventRecord};
