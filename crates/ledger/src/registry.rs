//! Registry of company ledgers.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use finbooks_core::CompanyId;

use crate::error::{LedgerError, LedgerResult};
use crate::ledger::Ledger;
use crate::transaction::EntryInput;

/// Owns every company's [`Ledger`]. Nothing else holds a ledger beyond a
/// borrow for the duration of one operation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompanyRegistry {
    ledgers: BTreeMap<CompanyId, Ledger>,
}

impl CompanyRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with the standard demo pair of companies.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for (id, name) in [
            ("tech-solutions", "Tech Solutions Ltd"),
            ("consulting-partners", "Consulting Partners Ltd"),
        ] {
            let id = CompanyId::new(id).expect("seed company ids are valid slugs");
            registry.ledgers.insert(id.clone(), Ledger::new(id, name));
        }
        registry
    }

    /// Register a new company with a fresh standard chart.
    pub fn add_company(&mut self, id: CompanyId, name: &str) -> LedgerResult<()> {
        if name.trim().is_empty() {
            return Err(LedgerError::EmptyCompanyName);
        }
        if self.ledgers.contains_key(&id) {
            return Err(LedgerError::DuplicateCompany(id));
        }
        self.ledgers.insert(id.clone(), Ledger::new(id, name));
        Ok(())
    }

    pub fn ledger(&self, id: &CompanyId) -> LedgerResult<&Ledger> {
        self.ledgers
            .get(id)
            .ok_or_else(|| LedgerError::UnknownCompany(id.clone()))
    }

    pub fn ledger_mut(&mut self, id: &CompanyId) -> LedgerResult<&mut Ledger> {
        self.ledgers
            .get_mut(id)
            .ok_or_else(|| LedgerError::UnknownCompany(id.clone()))
    }

    /// Ledgers in stable (id) order.
    pub fn ledgers(&self) -> impl Iterator<Item = &Ledger> {
        self.ledgers.values()
    }

    pub fn len(&self) -> usize {
        self.ledgers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ledgers.is_empty()
    }

    /// Post against one company. Other companies are unaffected.
    pub fn post_transaction(
        &mut self,
        id: &CompanyId,
        date: NaiveDate,
        description: &str,
        entries: &[EntryInput],
        vat_rate: Decimal,
    ) -> LedgerResult<u64> {
        self.ledger_mut(id)?.post(date, description, entries, vat_rate)
    }

    /// Fresh standard chart and empty log; the name stays.
    pub fn reset_company(&mut self, id: &CompanyId) -> LedgerResult<()> {
        self.ledger_mut(id)?.reset();
        tracing::info!(company = %id, "company data reset");
        Ok(())
    }

    pub fn rename_company(&mut self, id: &CompanyId, new_name: &str) -> LedgerResult<()> {
        self.ledger_mut(id)?.set_name(new_name)?;
        tracing::info!(company = %id, name = new_name, "company renamed");
        Ok(())
    }

    pub(crate) fn insert(&mut self, ledger: Ledger) -> LedgerResult<()> {
        let id = ledger.company_id().clone();
        if self.ledgers.contains_key(&id) {
            return Err(LedgerError::DuplicateCompany(id));
        }
        self.ledgers.insert(id, ledger);
        Ok(())
    }
}
