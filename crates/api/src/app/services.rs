//! Shared application state.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use finbooks_core::CompanyId;
use finbooks_ledger::{
    Account, CompanyRegistry, EntryInput, LedgerResult, RegistrySnapshot,
};
use finbooks_reports::{BalanceSheet, IncomeStatement, JournalRow};

/// One row of the company listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyInfo {
    pub id: CompanyId,
    pub name: String,
    pub transaction_count: usize,
}

/// The registry behind one lock.
///
/// Mutations (postings, resets, renames) take the write lock, which
/// serializes all writers and therefore the required single writer per
/// company. Reads take the read lock and observe the registry consistent
/// at one point in every transaction log, including consolidated reports,
/// which need all companies under one guard.
pub struct AppServices {
    registry: RwLock<CompanyRegistry>,
}

impl AppServices {
    pub fn new(registry: CompanyRegistry) -> Self {
        Self {
            registry: RwLock::new(registry),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, CompanyRegistry> {
        self.registry.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, CompanyRegistry> {
        self.registry.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn companies(&self) -> Vec<CompanyInfo> {
        self.read()
            .ledgers()
            .map(|ledger| CompanyInfo {
                id: ledger.company_id().clone(),
                name: ledger.name().to_string(),
                transaction_count: ledger.transactions().len(),
            })
            .collect()
    }

    pub fn add_company(&self, id: CompanyId, name: &str) -> LedgerResult<()> {
        self.write().add_company(id, name)
    }

    pub fn chart(&self, id: &CompanyId) -> LedgerResult<Vec<Account>> {
        Ok(self.read().ledger(id)?.accounts().cloned().collect())
    }

    pub fn post_transaction(
        &self,
        id: &CompanyId,
        date: NaiveDate,
        description: &str,
        entries: &[EntryInput],
        vat_rate: Decimal,
    ) -> LedgerResult<u64> {
        self.write()
            .post_transaction(id, date, description, entries, vat_rate)
    }

    pub fn history(&self, id: &CompanyId) -> LedgerResult<Vec<JournalRow>> {
        Ok(finbooks_reports::transaction_history(
            self.read().ledger(id)?,
        ))
    }

    pub fn combined_history(&self) -> Vec<JournalRow> {
        finbooks_reports::combined_history(&self.read())
    }

    pub fn balance_sheet(&self, id: &CompanyId) -> LedgerResult<BalanceSheet> {
        Ok(finbooks_reports::balance_sheet(self.read().ledger(id)?))
    }

    pub fn income_statement(&self, id: &CompanyId) -> LedgerResult<IncomeStatement> {
        Ok(finbooks_reports::income_statement(self.read().ledger(id)?))
    }

    pub fn consolidated_balance_sheet(&self) -> BalanceSheet {
        finbooks_reports::consolidated_balance_sheet(&self.read())
    }

    pub fn consolidated_income_statement(&self) -> IncomeStatement {
        finbooks_reports::consolidated_income_statement(&self.read())
    }

    pub fn reset_company(&self, id: &CompanyId) -> LedgerResult<()> {
        self.write().reset_company(id)
    }

    pub fn rename_company(&self, id: &CompanyId, name: &str) -> LedgerResult<()> {
        self.write().rename_company(id, name)
    }

    pub fn export_snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot::capture(&self.read())
    }
}
