//! `finbooks-core` — shared value objects of the bookkeeping engine.
//!
//! This crate contains **pure values** (no engine logic, no I/O): exact
//! money and the company identifier every other crate keys on.

pub mod id;
pub mod money;

pub use id::{CompanyId, IdError};
pub use money::{Money, MoneyError, MONEY_SCALE};
