//! `finbooks-ledger` — the double-entry engine.
//!
//! Chart of accounts, atomic transaction posting, the company registry,
//! and snapshot export/restore. The invariant protected here is the
//! accounting equation: after every successful posting,
//! assets == liabilities + equity + (income - expenses), exactly.

pub mod account;
pub mod chart;
pub mod error;
pub mod ledger;
pub mod registry;
pub mod snapshot;
pub mod transaction;

pub use account::{Account, AccountClass};
pub use chart::standard_chart;
pub use error::{EntryFault, LedgerError, LedgerResult};
pub use ledger::Ledger;
pub use registry::CompanyRegistry;
pub use snapshot::{CompanySnapshot, RegistrySnapshot};
pub use transaction::{vat, Entry, EntryInput, Side, Transaction};
