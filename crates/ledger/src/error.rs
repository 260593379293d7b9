//! Typed failures of ledger and registry operations.

use core::fmt;

use thiserror::Error;

use finbooks_core::{CompanyId, Money};

/// Result type used across the engine.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// What exactly is wrong with a rejected entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryFault {
    /// Neither debit nor credit was given.
    MissingSide,
    /// Both debit and credit were given.
    BothSides,
    /// The amount is zero or negative.
    NonPositiveAmount,
}

impl fmt::Display for EntryFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            EntryFault::MissingSide => "neither debit nor credit set",
            EntryFault::BothSides => "both debit and credit set",
            EntryFault::NonPositiveAmount => "amount must be positive",
        };
        f.write_str(msg)
    }
}

/// Every failure is surfaced to the caller as a typed value; nothing is
/// logged-and-swallowed. A rejected operation leaves all ledger state
/// exactly as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// An entry references an account code missing from the chart.
    #[error("unknown account code {code}")]
    UnknownAccount { code: String },

    /// An entry has neither or both sides set, or a non-positive amount.
    #[error("invalid entry for account {code}: {fault}")]
    InvalidEntry { code: String, fault: EntryFault },

    /// Debit and credit totals differ; both are reported to aid correction.
    #[error("unbalanced transaction: debits ({debits}) != credits ({credits})")]
    UnbalancedTransaction { debits: Money, credits: Money },

    /// Zero entries supplied.
    #[error("transaction must have at least one entry")]
    EmptyTransaction,

    /// The description was empty or whitespace.
    #[error("transaction description must not be empty")]
    EmptyDescription,

    /// The registry has no company under this id.
    #[error("unknown company {0}")]
    UnknownCompany(CompanyId),

    /// A company with this id is already registered.
    #[error("company {0} already exists")]
    DuplicateCompany(CompanyId),

    /// A company name must be non-empty.
    #[error("company name must not be empty")]
    EmptyCompanyName,
}

impl LedgerError {
    /// Absolute debit/credit discrepancy, for unbalanced transactions.
    pub fn imbalance(&self) -> Option<Money> {
        match self {
            LedgerError::UnbalancedTransaction { debits, credits } => {
                Some((*debits - *credits).abs())
            }
            _ => None,
        }
    }
}
