//! Request DTOs.
//!
//! Amounts and rates arrive as decimal strings ("1200.00") and are parsed
//! into exact values at this boundary; binary floats never reach the
//! engine. Response bodies are the engine's own serializable types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use finbooks_core::{CompanyId, Money};
use finbooks_ledger::EntryInput;

#[derive(Debug, Deserialize)]
pub struct AddCompanyRequest {
    pub id: CompanyId,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct RenameCompanyRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct EntryRequest {
    pub account_code: String,
    #[serde(default)]
    pub debit: Option<Money>,
    #[serde(default)]
    pub credit: Option<Money>,
}

#[derive(Debug, Deserialize)]
pub struct PostTransactionRequest {
    pub date: NaiveDate,
    pub description: String,
    /// Stored on the transaction as-is; defaults to the standard rate.
    #[serde(default)]
    pub vat_rate: Option<Decimal>,
    pub entries: Vec<EntryRequest>,
}

pub fn to_entry_inputs(entries: Vec<EntryRequest>) -> Vec<EntryInput> {
    entries
        .into_iter()
        .map(|entry| EntryInput {
            account_code: entry.account_code,
            debit: entry.debit,
            credit: entry.credit,
        })
        .collect()
}
