//! `finbooks-reports` — pure report derivation.
//!
//! Balance sheets, income statements, journal history, and consolidated
//! views, all computed from ledger state without mutating it.

pub mod engine;
pub mod history;
pub mod types;

pub use engine::{
    balance_sheet, class_total, consolidated_balance_sheet, consolidated_income_statement,
    income_statement, net_income,
};
pub use history::{combined_history, transaction_history, JournalRow};
pub use types::{BalanceSheet, IncomeStatement, ReportLine};
