//! Serializable snapshot of the whole registry.
//!
//! This is the contract the external JSON/CSV/spreadsheet exporters
//! consume; they perform no accounting logic themselves. Every money value
//! serializes as a decimal string, never a binary float, and
//! [`CompanyRegistry::restore`] makes the round trip lossless.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use finbooks_core::CompanyId;

use crate::account::Account;
use crate::error::LedgerResult;
use crate::ledger::Ledger;
use crate::registry::CompanyRegistry;
use crate::transaction::Transaction;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanySnapshot {
    pub company_id: CompanyId,
    pub name: String,
    /// Chart-definition order, current balances included.
    pub accounts: Vec<Account>,
    /// Full log, oldest first.
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    pub exported_at: DateTime<Utc>,
    pub companies: Vec<CompanySnapshot>,
}

impl RegistrySnapshot {
    /// Capture every company's name, chart, and log as of now.
    pub fn capture(registry: &CompanyRegistry) -> Self {
        Self {
            exported_at: Utc::now(),
            companies: registry
                .ledgers()
                .map(|ledger| CompanySnapshot {
                    company_id: ledger.company_id().clone(),
                    name: ledger.name().to_string(),
                    accounts: ledger.accounts().cloned().collect(),
                    transactions: ledger.transactions().to_vec(),
                })
                .collect(),
        }
    }
}

impl CompanyRegistry {
    /// Rebuild a registry from an exported snapshot.
    pub fn restore(snapshot: RegistrySnapshot) -> LedgerResult<Self> {
        let mut registry = CompanyRegistry::new();
        for company in snapshot.companies {
            let ledger = Ledger {
                company_id: company.company_id,
                name: company.name,
                accounts: company
                    .accounts
                    .into_iter()
                    .map(|account| (account.code.clone(), account))
                    .collect(),
                transactions: company.transactions,
            };
            registry.insert(ledger)?;
        }
        Ok(registry)
    }
}
