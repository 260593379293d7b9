use serde::{Deserialize, Serialize};

use finbooks_core::Money;

use crate::transaction::Side;

/// High-level account class (determines report placement).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountClass {
    Asset,
    Liability,
    Equity,
    Income,
    Expense,
}

impl AccountClass {
    pub const ALL: [AccountClass; 5] = [
        AccountClass::Asset,
        AccountClass::Liability,
        AccountClass::Equity,
        AccountClass::Income,
        AccountClass::Expense,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountClass::Asset => "asset",
            AccountClass::Liability => "liability",
            AccountClass::Equity => "equity",
            AccountClass::Income => "income",
            AccountClass::Expense => "expense",
        }
    }

    /// The side on which this class conventionally increases.
    ///
    /// Stored balances are plain signed values (debit-positive); reports
    /// use the normal side to present each class in its natural sign.
    pub fn normal_side(&self) -> Side {
        match self {
            AccountClass::Asset | AccountClass::Expense => Side::Debit,
            AccountClass::Liability | AccountClass::Equity | AccountClass::Income => Side::Credit,
        }
    }
}

/// One account in a company's chart.
///
/// Accounts are created by the chart seed and live for the ledger's
/// lifetime; only posting mutates the balance, and only a company reset
/// returns it to zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub code: String, // e.g. "1000"
    pub name: String, // e.g. "Cash"
    pub class: AccountClass,
    /// Signed balance, debit-positive convention.
    pub balance: Money,
}
