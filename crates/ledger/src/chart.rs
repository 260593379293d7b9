//! The standard chart of accounts.
//!
//! Every company is seeded with the same fixed catalog; ascending code
//! order is the chart-definition order used by listings and reports.

use std::collections::BTreeMap;

use finbooks_core::Money;

use crate::account::{Account, AccountClass};

/// Code, display name, class. Codes are grouped by thousand: 1xxx assets,
/// 2xxx liabilities, 3xxx equity, 4xxx income, 5xxx expenses.
const STANDARD_ACCOUNTS: &[(&str, &str, AccountClass)] = &[
    ("1000", "Cash", AccountClass::Asset),
    ("1100", "Accounts Receivable", AccountClass::Asset),
    ("1200", "Inventory", AccountClass::Asset),
    ("1500", "Equipment", AccountClass::Asset),
    ("1600", "Vehicles", AccountClass::Asset),
    ("2000", "Accounts Payable", AccountClass::Liability),
    ("2100", "VAT Payable", AccountClass::Liability),
    ("2500", "Bank Loan", AccountClass::Liability),
    ("2600", "Credit Card", AccountClass::Liability),
    ("3000", "Owner's Capital", AccountClass::Equity),
    ("3900", "Retained Earnings", AccountClass::Equity),
    // Only ever posted explicitly; current-period earnings are derived on
    // the fly by reports, never written into this balance.
    ("3950", "Current Year Earnings", AccountClass::Equity),
    ("4000", "Product Sales", AccountClass::Income),
    ("4100", "Service Revenue", AccountClass::Income),
    ("4200", "Consulting Income", AccountClass::Income),
    ("5000", "Cost of Goods Sold", AccountClass::Expense),
    ("5100", "Salary Expense", AccountClass::Expense),
    ("5200", "Rent Expense", AccountClass::Expense),
    ("5300", "Utilities Expense", AccountClass::Expense),
    ("5400", "Marketing Expense", AccountClass::Expense),
    ("5500", "Office Supplies", AccountClass::Expense),
    ("5600", "Travel Expense", AccountClass::Expense),
    ("5700", "Professional Fees", AccountClass::Expense),
];

/// Build the standard chart with zero balances.
///
/// Deterministic and side-effect free; called at ledger creation and at
/// company reset.
pub fn standard_chart() -> BTreeMap<String, Account> {
    STANDARD_ACCOUNTS
        .iter()
        .map(|&(code, name, class)| {
            (
                code.to_string(),
                Account {
                    code: code.to_string(),
                    name: name.to_string(),
                    class,
                    balance: Money::ZERO,
                },
            )
        })
        .collect()
}
