use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use finbooks_core::Money;

/// Side of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Debit,
    Credit,
}

/// Raw entry request as supplied by the caller.
///
/// Exactly one of `debit`/`credit` must be set, with a strictly positive
/// amount; [`crate::Ledger::post`] turns accepted inputs into [`Entry`]
/// values and rejects everything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryInput {
    pub account_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debit: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit: Option<Money>,
}

impl EntryInput {
    pub fn debit(account_code: impl Into<String>, amount: Money) -> Self {
        Self {
            account_code: account_code.into(),
            debit: Some(amount),
            credit: None,
        }
    }

    pub fn credit(account_code: impl Into<String>, amount: Money) -> Self {
        Self {
            account_code: account_code.into(),
            debit: None,
            credit: Some(amount),
        }
    }
}

/// One validated, immutable line of a posted transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub account_code: String,
    pub side: Side,
    /// Strictly positive.
    pub amount: Money,
}

impl Entry {
    pub fn debit_amount(&self) -> Option<Money> {
        (self.side == Side::Debit).then_some(self.amount)
    }

    pub fn credit_amount(&self) -> Option<Money> {
        (self.side == Side::Credit).then_some(self.amount)
    }

    /// Signed effect on the account balance: debit adds, credit subtracts,
    /// uniformly across all account classes.
    pub fn signed_amount(&self) -> Money {
        match self.side {
            Side::Debit => self.amount,
            Side::Credit => -self.amount,
        }
    }
}

/// A posted transaction. Immutable once appended: the log supports no
/// edit or delete, only a full company reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// 1-based, strictly increasing per company.
    pub id: u64,
    pub date: NaiveDate,
    pub description: String,
    pub entries: Vec<Entry>,
    /// Inert metadata: stored and round-tripped, never applied to any
    /// balance or report.
    pub vat_rate: Decimal,
}

/// UK VAT rates as offered by the original posting form.
pub mod vat {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    pub const ZERO: Decimal = dec!(0);
    /// Reduced rate (5%).
    pub const REDUCED: Decimal = dec!(0.05);
    /// Standard rate (20%).
    pub const STANDARD: Decimal = dec!(0.20);
    /// Applied when a posting does not specify a rate.
    pub const DEFAULT: Decimal = STANDARD;
}
