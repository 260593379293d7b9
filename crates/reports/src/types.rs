//! Report data types.

use serde::{Deserialize, Serialize};

use finbooks_core::Money;

/// One nonzero account line of a statement, in chart-definition order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLine {
    pub account_code: String,
    pub account_name: String,
    /// Presented on the account class's normal side.
    pub amount: Money,
}

/// Balance sheet as of the current position of the transaction log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheet {
    pub assets: Money,
    pub liabilities: Money,
    /// Stored equity plus derived net income (undistributed current-period
    /// earnings). Never written back into any account.
    pub equity: Money,
    /// `assets == liabilities + equity`, exact money equality.
    pub check: bool,
}

/// Income statement over the whole log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeStatement {
    pub revenue_lines: Vec<ReportLine>,
    pub expense_lines: Vec<ReportLine>,
    pub total_revenue: Money,
    pub total_expenses: Money,
    pub net_income: Money,
}
