//! Per-company ledger: chart, balances, and the append-only log.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use finbooks_core::{CompanyId, Money};

use crate::account::Account;
use crate::chart::standard_chart;
use crate::error::{EntryFault, LedgerError, LedgerResult};
use crate::transaction::{Entry, EntryInput, Side, Transaction};

/// A single company's books.
///
/// Owns the chart of accounts and the transaction log. Posting is the only
/// operation that mutates balances, and it is atomic: validation completes
/// in full before any balance changes, so a rejected posting leaves the
/// ledger exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    pub(crate) company_id: CompanyId,
    pub(crate) name: String,
    pub(crate) accounts: BTreeMap<String, Account>,
    pub(crate) transactions: Vec<Transaction>,
}

impl Ledger {
    /// New ledger with the standard chart and an empty log.
    pub fn new(company_id: CompanyId, name: impl Into<String>) -> Self {
        Self {
            company_id,
            name: name.into(),
            accounts: standard_chart(),
            transactions: Vec::new(),
        }
    }

    pub fn company_id(&self) -> &CompanyId {
        &self.company_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Accounts in chart-definition (ascending code) order.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    pub fn account(&self, code: &str) -> Option<&Account> {
        self.accounts.get(code)
    }

    /// Oldest first; ids are 1-based and strictly increasing.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Validate and post a balanced transaction, returning its id.
    ///
    /// Checks run in a fixed order, each a distinct failure: entries
    /// present, description non-empty, every account code known, every
    /// entry single-sided and positive, debit total equal to credit total
    /// (exact, no tolerance). Only then are balances updated and the
    /// transaction appended.
    pub fn post(
        &mut self,
        date: NaiveDate,
        description: &str,
        entries: &[EntryInput],
        vat_rate: Decimal,
    ) -> LedgerResult<u64> {
        let entries = self.validate(description, entries).inspect_err(|err| {
            tracing::warn!(company = %self.company_id, %err, "posting rejected");
        })?;

        for entry in &entries {
            // Account existence was established above.
            if let Some(account) = self.accounts.get_mut(&entry.account_code) {
                account.balance += entry.signed_amount();
            }
        }

        let id = self.transactions.last().map(|t| t.id + 1).unwrap_or(1);
        self.transactions.push(Transaction {
            id,
            date,
            description: description.to_string(),
            entries,
            vat_rate,
        });
        tracing::debug!(company = %self.company_id, transaction = id, "transaction posted");
        Ok(id)
    }

    fn validate(&self, description: &str, entries: &[EntryInput]) -> LedgerResult<Vec<Entry>> {
        if entries.is_empty() {
            return Err(LedgerError::EmptyTransaction);
        }
        if description.trim().is_empty() {
            return Err(LedgerError::EmptyDescription);
        }

        for input in entries {
            if !self.accounts.contains_key(&input.account_code) {
                return Err(LedgerError::UnknownAccount {
                    code: input.account_code.clone(),
                });
            }
        }

        let mut validated = Vec::with_capacity(entries.len());
        let mut debits = Money::ZERO;
        let mut credits = Money::ZERO;
        for input in entries {
            let (side, amount) = match (input.debit, input.credit) {
                (Some(amount), None) => (Side::Debit, amount),
                (None, Some(amount)) => (Side::Credit, amount),
                (None, None) => {
                    return Err(LedgerError::InvalidEntry {
                        code: input.account_code.clone(),
                        fault: EntryFault::MissingSide,
                    });
                }
                (Some(_), Some(_)) => {
                    return Err(LedgerError::InvalidEntry {
                        code: input.account_code.clone(),
                        fault: EntryFault::BothSides,
                    });
                }
            };
            if !amount.is_positive() {
                return Err(LedgerError::InvalidEntry {
                    code: input.account_code.clone(),
                    fault: EntryFault::NonPositiveAmount,
                });
            }
            match side {
                Side::Debit => debits += amount,
                Side::Credit => credits += amount,
            }
            validated.push(Entry {
                account_code: input.account_code.clone(),
                side,
                amount,
            });
        }

        if debits != credits {
            return Err(LedgerError::UnbalancedTransaction { debits, credits });
        }

        Ok(validated)
    }

    /// Re-seed the chart and clear the log. The company name is unaffected.
    pub fn reset(&mut self) {
        self.accounts = standard_chart();
        self.transactions.clear();
    }

    pub(crate) fn set_name(&mut self, name: &str) -> LedgerResult<()> {
        if name.trim().is_empty() {
            return Err(LedgerError::EmptyCompanyName);
        }
        self.name = name.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::AccountClass;
    use crate::transaction::vat;
    use proptest::prelude::*;

    fn test_ledger() -> Ledger {
        Ledger::new(
            CompanyId::new("tech-solutions").unwrap(),
            "Tech Solutions Ltd",
        )
    }

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    fn money(s: &str) -> Money {
        s.parse().unwrap()
    }

    fn class_total(ledger: &Ledger, class: AccountClass) -> Money {
        ledger
            .accounts()
            .filter(|a| a.class == class)
            .map(|a| a.balance)
            .sum()
    }

    /// Assets == Liabilities + Equity + (Income - Expenses), exactly.
    fn assert_accounting_equation(ledger: &Ledger) {
        let assets = class_total(ledger, AccountClass::Asset);
        let liabilities = class_total(ledger, AccountClass::Liability);
        let equity = class_total(ledger, AccountClass::Equity);
        let net_income =
            class_total(ledger, AccountClass::Income) - class_total(ledger, AccountClass::Expense);
        assert_eq!(assets, liabilities + equity + net_income);
    }

    #[test]
    fn cash_sale_with_vat_updates_class_totals() {
        let mut ledger = test_ledger();
        let id = ledger
            .post(
                test_date(),
                "Cash sale",
                &[
                    EntryInput::debit("1000", money("1200.00")),
                    EntryInput::credit("4000", money("1000.00")),
                    EntryInput::credit("2100", money("200.00")),
                ],
                vat::STANDARD,
            )
            .unwrap();

        assert_eq!(id, 1);
        assert_eq!(class_total(&ledger, AccountClass::Asset), money("1200.00"));
        assert_eq!(class_total(&ledger, AccountClass::Income), money("-1000.00"));
        assert_eq!(ledger.account("1000").unwrap().balance, money("1200.00"));
        assert_eq!(ledger.account("4000").unwrap().balance, money("-1000.00"));
        assert_eq!(ledger.account("2100").unwrap().balance, money("-200.00"));
        assert_accounting_equation(&ledger);
    }

    #[test]
    fn transaction_ids_are_sequential_from_one() {
        let mut ledger = test_ledger();
        for expected in 1..=3u64 {
            let id = ledger
                .post(
                    test_date(),
                    "Owner investment",
                    &[
                        EntryInput::debit("1000", money("100.00")),
                        EntryInput::credit("3000", money("100.00")),
                    ],
                    vat::ZERO,
                )
                .unwrap();
            assert_eq!(id, expected);
        }
        let ids: Vec<u64> = ledger.transactions().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn unbalanced_posting_is_rejected_and_mutates_nothing() {
        let mut ledger = test_ledger();
        let before = ledger.clone();

        let err = ledger
            .post(
                test_date(),
                "Broken sale",
                &[
                    EntryInput::debit("1000", money("500.00")),
                    EntryInput::credit("4000", money("400.00")),
                ],
                vat::ZERO,
            )
            .unwrap_err();

        assert_eq!(
            err,
            LedgerError::UnbalancedTransaction {
                debits: money("500.00"),
                credits: money("400.00"),
            }
        );
        assert_eq!(err.imbalance(), Some(money("100.00")));
        assert_eq!(ledger, before);
    }

    #[test]
    fn unknown_account_is_rejected_before_any_balance_update() {
        let mut ledger = test_ledger();
        let before = ledger.clone();

        let err = ledger
            .post(
                test_date(),
                "Typo in account",
                &[
                    EntryInput::debit("1000", money("50.00")),
                    EntryInput::credit("9999", money("50.00")),
                ],
                vat::ZERO,
            )
            .unwrap_err();

        assert_eq!(err, LedgerError::UnknownAccount { code: "9999".into() });
        assert_eq!(ledger.transactions().len(), 0);
        assert_eq!(ledger, before);
    }

    #[test]
    fn entry_shape_faults_are_distinct() {
        let mut ledger = test_ledger();

        let neither = EntryInput {
            account_code: "1000".into(),
            debit: None,
            credit: None,
        };
        assert_eq!(
            ledger
                .post(test_date(), "x", &[neither], vat::ZERO)
                .unwrap_err(),
            LedgerError::InvalidEntry {
                code: "1000".into(),
                fault: EntryFault::MissingSide,
            }
        );

        let both = EntryInput {
            account_code: "1000".into(),
            debit: Some(money("10.00")),
            credit: Some(money("10.00")),
        };
        assert_eq!(
            ledger
                .post(test_date(), "x", &[both], vat::ZERO)
                .unwrap_err(),
            LedgerError::InvalidEntry {
                code: "1000".into(),
                fault: EntryFault::BothSides,
            }
        );

        let zero = EntryInput::debit("1000", Money::ZERO);
        assert_eq!(
            ledger
                .post(test_date(), "x", &[zero], vat::ZERO)
                .unwrap_err(),
            LedgerError::InvalidEntry {
                code: "1000".into(),
                fault: EntryFault::NonPositiveAmount,
            }
        );
    }

    #[test]
    fn empty_entries_and_description_are_rejected() {
        let mut ledger = test_ledger();
        assert_eq!(
            ledger
                .post(test_date(), "no entries", &[], vat::ZERO)
                .unwrap_err(),
            LedgerError::EmptyTransaction
        );
        assert_eq!(
            ledger
                .post(
                    test_date(),
                    "   ",
                    &[EntryInput::debit("1000", money("1.00"))],
                    vat::ZERO,
                )
                .unwrap_err(),
            LedgerError::EmptyDescription
        );
    }

    #[test]
    fn vat_rate_is_stored_but_never_applied() {
        let mut ledger = test_ledger();
        ledger
            .post(
                test_date(),
                "Consulting invoice",
                &[
                    EntryInput::debit("1100", money("100.00")),
                    EntryInput::credit("4200", money("100.00")),
                ],
                vat::REDUCED,
            )
            .unwrap();

        assert_eq!(ledger.transactions()[0].vat_rate, vat::REDUCED);
        // No VAT side effect: the VAT Payable account is untouched.
        assert!(ledger.account("2100").unwrap().balance.is_zero());
    }

    #[test]
    fn reset_restores_the_standard_seed_and_keeps_the_name() {
        let mut ledger = test_ledger();
        ledger
            .post(
                test_date(),
                "Cash sale",
                &[
                    EntryInput::debit("1000", money("250.00")),
                    EntryInput::credit("4000", money("250.00")),
                ],
                vat::ZERO,
            )
            .unwrap();
        ledger.set_name("Renamed Ltd").unwrap();

        ledger.reset();

        assert_eq!(ledger.name(), "Renamed Ltd");
        assert!(ledger.transactions().is_empty());
        assert_eq!(ledger.accounts, standard_chart());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// The accounting equation holds after any sequence of balanced
        /// postings that debit one random account and credit another.
        #[test]
        fn accounting_equation_holds_after_balanced_postings(
            postings in prop::collection::vec(
                (0usize..23, 0usize..23, 1i64..1_000_000i64),
                1..20,
            )
        ) {
            let mut ledger = test_ledger();
            let codes: Vec<String> =
                ledger.accounts().map(|a| a.code.clone()).collect();

            for (debit_ix, credit_ix, minor) in postings {
                let amount = Money::from_minor(minor);
                ledger
                    .post(
                        test_date(),
                        "generated posting",
                        &[
                            EntryInput::debit(codes[debit_ix].clone(), amount),
                            EntryInput::credit(codes[credit_ix].clone(), amount),
                        ],
                        vat::DEFAULT,
                    )
                    .unwrap();
                assert_accounting_equation(&ledger);
            }

            // Every stored transaction is individually balanced.
            for tx in ledger.transactions() {
                let debits: Money =
                    tx.entries.iter().filter_map(Entry::debit_amount).sum();
                let credits: Money =
                    tx.entries.iter().filter_map(Entry::credit_amount).sum();
                prop_assert_eq!(debits, credits);
            }
        }

        /// Rejected postings never change balances or the log, whatever
        /// the imbalance.
        #[test]
        fn rejected_postings_leave_the_ledger_untouched(
            debit_minor in 1i64..1_000_000i64,
            skew in 1i64..1_000i64,
        ) {
            let mut ledger = test_ledger();
            let before = ledger.clone();

            let result = ledger.post(
                test_date(),
                "skewed posting",
                &[
                    EntryInput::debit("1000", Money::from_minor(debit_minor)),
                    EntryInput::credit("4000", Money::from_minor(debit_minor + skew)),
                ],
                vat::DEFAULT,
            );

            let is_unbalanced = matches!(
                result,
                Err(LedgerError::UnbalancedTransaction { .. })
            );
            prop_assert!(is_unbalanced);
            prop_assert_eq!(ledger, before);
        }
    }
}
