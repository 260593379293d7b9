//! Flattened journal history.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use finbooks_core::Money;
use finbooks_ledger::{CompanyRegistry, Ledger};

/// One entry of one transaction, flattened for tabular display/export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalRow {
    /// Company display name (the history table is shared across views).
    pub company: String,
    pub date: NaiveDate,
    pub description: String,
    pub account_code: String,
    pub account_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debit: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit: Option<Money>,
}

/// One row per entry, oldest transaction first, entries in original order.
pub fn transaction_history(ledger: &Ledger) -> Vec<JournalRow> {
    ledger
        .transactions()
        .iter()
        .flat_map(|tx| {
            tx.entries.iter().map(|entry| JournalRow {
                company: ledger.name().to_string(),
                date: tx.date,
                description: tx.description.clone(),
                account_code: entry.account_code.clone(),
                account_name: ledger
                    .account(&entry.account_code)
                    .map(|account| account.name.clone())
                    .unwrap_or_else(|| entry.account_code.clone()),
                debit: entry.debit_amount(),
                credit: entry.credit_amount(),
            })
        })
        .collect()
}

/// Every company's history concatenated, registry order.
pub fn combined_history(registry: &CompanyRegistry) -> Vec<JournalRow> {
    registry.ledgers().flat_map(transaction_history).collect()
}
