//! Pure report derivation over ledger state.
//!
//! Every function here takes `&Ledger` or `&CompanyRegistry` and writes
//! nothing back: repeated calls are guaranteed to return identical output
//! for unchanged input. Net income in particular is computed on the fly
//! and never persisted into an equity account.

use std::collections::BTreeMap;

use finbooks_core::Money;
use finbooks_ledger::{Account, AccountClass, CompanyRegistry, Ledger, Side};

use crate::types::{BalanceSheet, IncomeStatement, ReportLine};

/// An account's balance presented on its class's normal side.
fn natural_balance(account: &Account) -> Money {
    match account.class.normal_side() {
        Side::Debit => account.balance,
        Side::Credit => -account.balance,
    }
}

/// Total of one account class, natural sign, O(number of accounts).
pub fn class_total(ledger: &Ledger, class: AccountClass) -> Money {
    ledger
        .accounts()
        .filter(|account| account.class == class)
        .map(natural_balance)
        .sum()
}

/// Income minus expenses over the whole log.
pub fn net_income(ledger: &Ledger) -> Money {
    class_total(ledger, AccountClass::Income) - class_total(ledger, AccountClass::Expense)
}

/// Derive the balance sheet. Idempotent: no account is touched.
pub fn balance_sheet(ledger: &Ledger) -> BalanceSheet {
    let assets = class_total(ledger, AccountClass::Asset);
    let liabilities = class_total(ledger, AccountClass::Liability);
    let equity = class_total(ledger, AccountClass::Equity) + net_income(ledger);
    BalanceSheet {
        assets,
        liabilities,
        equity,
        check: assets == liabilities + equity,
    }
}

fn class_lines(ledger: &Ledger, class: AccountClass) -> Vec<ReportLine> {
    ledger
        .accounts()
        .filter(|account| account.class == class && !account.balance.is_zero())
        .map(|account| ReportLine {
            account_code: account.code.clone(),
            account_name: account.name.clone(),
            amount: natural_balance(account),
        })
        .collect()
}

/// Derive the income statement: nonzero revenue and expense lines in
/// chart order, plus class totals. Pure.
pub fn income_statement(ledger: &Ledger) -> IncomeStatement {
    let total_revenue = class_total(ledger, AccountClass::Income);
    let total_expenses = class_total(ledger, AccountClass::Expense);
    IncomeStatement {
        revenue_lines: class_lines(ledger, AccountClass::Income),
        expense_lines: class_lines(ledger, AccountClass::Expense),
        total_revenue,
        total_expenses,
        net_income: total_revenue - total_expenses,
    }
}

/// Field-wise sum of every company's balance sheet, with the equation
/// check recomputed on the summed totals. No intercompany elimination.
pub fn consolidated_balance_sheet(registry: &CompanyRegistry) -> BalanceSheet {
    let mut assets = Money::ZERO;
    let mut liabilities = Money::ZERO;
    let mut equity = Money::ZERO;
    for ledger in registry.ledgers() {
        let sheet = balance_sheet(ledger);
        assets += sheet.assets;
        liabilities += sheet.liabilities;
        equity += sheet.equity;
    }
    BalanceSheet {
        assets,
        liabilities,
        equity,
        check: assets == liabilities + equity,
    }
}

fn merge_lines(merged: &mut BTreeMap<String, ReportLine>, lines: Vec<ReportLine>) {
    for line in lines {
        merged
            .entry(line.account_code.clone())
            .and_modify(|existing| existing.amount += line.amount)
            .or_insert(line);
    }
}

/// Field-wise sum of every company's income statement. Lines are merged
/// per account code (every company shares the standard chart) and the
/// nonzero filter is applied after summing.
pub fn consolidated_income_statement(registry: &CompanyRegistry) -> IncomeStatement {
    let mut revenue: BTreeMap<String, ReportLine> = BTreeMap::new();
    let mut expenses: BTreeMap<String, ReportLine> = BTreeMap::new();
    let mut total_revenue = Money::ZERO;
    let mut total_expenses = Money::ZERO;

    for ledger in registry.ledgers() {
        let statement = income_statement(ledger);
        total_revenue += statement.total_revenue;
        total_expenses += statement.total_expenses;
        merge_lines(&mut revenue, statement.revenue_lines);
        merge_lines(&mut expenses, statement.expense_lines);
    }

    let keep_nonzero =
        |lines: BTreeMap<String, ReportLine>| -> Vec<ReportLine> {
            lines
                .into_values()
                .filter(|line| !line.amount.is_zero())
                .collect()
        };

    IncomeStatement {
        revenue_lines: keep_nonzero(revenue),
        expense_lines: keep_nonzero(expenses),
        total_revenue,
        total_expenses,
        net_income: total_revenue - total_expenses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use finbooks_core::CompanyId;
    use finbooks_ledger::{vat, EntryInput};

    fn id(s: &str) -> CompanyId {
        CompanyId::new(s).unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    fn money(s: &str) -> Money {
        s.parse().unwrap()
    }

    /// A cash sale of 1000 + 200 VAT into tech-solutions, and a salary
    /// payment of 300 into consulting-partners.
    fn populated_registry() -> CompanyRegistry {
        let mut registry = CompanyRegistry::standard();
        registry
            .post_transaction(
                &id("tech-solutions"),
                date(),
                "Cash sale",
                &[
                    EntryInput::debit("1000", money("1200.00")),
                    EntryInput::credit("4000", money("1000.00")),
                    EntryInput::credit("2100", money("200.00")),
                ],
                vat::STANDARD,
            )
            .unwrap();
        registry
            .post_transaction(
                &id("consulting-partners"),
                date(),
                "March salaries",
                &[
                    EntryInput::debit("5100", money("300.00")),
                    EntryInput::credit("1000", money("300.00")),
                ],
                vat::ZERO,
            )
            .unwrap();
        registry
    }

    #[test]
    fn class_totals_use_natural_signs() {
        let registry = populated_registry();
        let ledger = registry.ledger(&id("tech-solutions")).unwrap();

        assert_eq!(class_total(ledger, AccountClass::Asset), money("1200.00"));
        assert_eq!(class_total(ledger, AccountClass::Income), money("1000.00"));
        assert_eq!(
            class_total(ledger, AccountClass::Liability),
            money("200.00")
        );
        assert_eq!(net_income(ledger), money("1000.00"));
    }

    #[test]
    fn balance_sheet_checks_out_and_is_idempotent() {
        let registry = populated_registry();
        let ledger = registry.ledger(&id("tech-solutions")).unwrap();
        let before = ledger.clone();

        let first = balance_sheet(ledger);
        assert_eq!(first.assets, money("1200.00"));
        assert_eq!(first.liabilities, money("200.00"));
        assert_eq!(first.equity, money("1000.00"));
        assert!(first.check);

        // Repeated calls return identical output and leave the ledger
        // untouched (no hidden net-income write).
        for _ in 0..5 {
            assert_eq!(balance_sheet(ledger), first);
        }
        assert_eq!(*ledger, before);
        assert!(ledger.account("3950").unwrap().balance.is_zero());
    }

    #[test]
    fn income_statement_lists_nonzero_lines_in_chart_order() {
        let registry = populated_registry();
        let ledger = registry.ledger(&id("consulting-partners")).unwrap();

        let statement = income_statement(ledger);
        assert!(statement.revenue_lines.is_empty());
        assert_eq!(statement.expense_lines.len(), 1);
        assert_eq!(statement.expense_lines[0].account_code, "5100");
        assert_eq!(statement.expense_lines[0].account_name, "Salary Expense");
        assert_eq!(statement.expense_lines[0].amount, money("300.00"));
        assert_eq!(statement.total_expenses, money("300.00"));
        assert_eq!(statement.net_income, money("-300.00"));
    }

    #[test]
    fn expense_lines_follow_chart_order_with_multiple_accounts() {
        let mut registry = populated_registry();
        registry
            .post_transaction(
                &id("consulting-partners"),
                date(),
                "Office rent",
                &[
                    EntryInput::debit("5200", money("80.00")),
                    EntryInput::credit("1000", money("80.00")),
                ],
                vat::ZERO,
            )
            .unwrap();
        let ledger = registry.ledger(&id("consulting-partners")).unwrap();

        let statement = income_statement(ledger);
        let codes: Vec<&str> = statement
            .expense_lines
            .iter()
            .map(|l| l.account_code.as_str())
            .collect();
        assert_eq!(codes, vec!["5100", "5200"]);
    }

    #[test]
    fn consolidated_reports_are_field_wise_sums() {
        let registry = populated_registry();
        let tech = balance_sheet(registry.ledger(&id("tech-solutions")).unwrap());
        let consulting =
            balance_sheet(registry.ledger(&id("consulting-partners")).unwrap());

        let combined = consolidated_balance_sheet(&registry);
        assert_eq!(combined.assets, tech.assets + consulting.assets);
        assert_eq!(
            combined.liabilities,
            tech.liabilities + consulting.liabilities
        );
        assert_eq!(combined.equity, tech.equity + consulting.equity);
        assert!(combined.check);

        let statement = consolidated_income_statement(&registry);
        assert_eq!(statement.total_revenue, money("1000.00"));
        assert_eq!(statement.total_expenses, money("300.00"));
        assert_eq!(statement.net_income, money("700.00"));
        // Lines come from both companies, merged per account code.
        assert_eq!(statement.revenue_lines.len(), 1);
        assert_eq!(statement.expense_lines.len(), 1);
    }

    #[test]
    fn consolidation_merges_shared_accounts_and_drops_zero_sums() {
        let mut registry = CompanyRegistry::standard();
        // Both companies sell through 4000; the amounts must merge.
        for company in ["tech-solutions", "consulting-partners"] {
            registry
                .post_transaction(
                    &id(company),
                    date(),
                    "Cash sale",
                    &[
                        EntryInput::debit("1000", money("100.00")),
                        EntryInput::credit("4000", money("100.00")),
                    ],
                    vat::ZERO,
                )
                .unwrap();
        }

        let statement = consolidated_income_statement(&registry);
        assert_eq!(statement.revenue_lines.len(), 1);
        assert_eq!(statement.revenue_lines[0].account_code, "4000");
        assert_eq!(statement.revenue_lines[0].amount, money("200.00"));
    }

    #[test]
    fn empty_registry_consolidates_to_zero() {
        let registry = CompanyRegistry::new();
        let sheet = consolidated_balance_sheet(&registry);
        assert_eq!(sheet.assets, Money::ZERO);
        assert!(sheet.check);
        let statement = consolidated_income_statement(&registry);
        assert!(statement.revenue_lines.is_empty());
        assert_eq!(statement.net_income, Money::ZERO);
    }
}
