//! Exact money arithmetic.
//!
//! Every balance and entry amount in the engine is a [`Money`] value: a
//! decimal fixed at pence scale. Binary floats never enter balance
//! arithmetic; external inputs are parsed into `Money` at the boundary.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of decimal places carried by every amount (smallest subunit).
pub const MONEY_SCALE: u32 = 2;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// The value has sub-pence precision. Amounts are rejected rather than
    /// silently rounded.
    #[error("amount {0} has more than {MONEY_SCALE} decimal places")]
    ScaleTooFine(Decimal),

    /// The string is not a decimal number.
    #[error("not a decimal amount: {0}")]
    Parse(String),
}

/// A signed, exact decimal amount at pence scale.
///
/// Balances are signed (debit-positive convention); positivity of entry
/// amounts is enforced by the ledger, not here. Equality and ordering are
/// numeric and exact: no epsilon anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    /// Zero at pence scale, so it displays and serializes as "0.00".
    pub const ZERO: Self = Self(Decimal::from_parts(0, 0, 0, false, MONEY_SCALE));

    /// Create a `Money` from a decimal, rejecting sub-pence precision.
    ///
    /// Accepted values are rescaled so that `1200` and `1200.00` are the
    /// same stored value with the same display form.
    pub fn new(value: Decimal) -> Result<Self, MoneyError> {
        if value.normalize().scale() > MONEY_SCALE {
            return Err(MoneyError::ScaleTooFine(value));
        }
        let mut scaled = value;
        scaled.rescale(MONEY_SCALE);
        Ok(Self(scaled))
    }

    /// Construct from a count of minor units (pence): `from_minor(1_050)` is 10.50.
    pub fn from_minor(minor: i64) -> Self {
        Self(Decimal::new(minor, MONEY_SCALE))
    }

    /// Construct from a whole number of major units.
    pub fn from_major(major: i64) -> Self {
        Self::from_minor(major.saturating_mul(100))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

impl TryFrom<Decimal> for Money {
    type Error = MoneyError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Decimal {
        money.0
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str_exact(s.trim())
            .map_err(|_| MoneyError::Parse(s.to_string()))?;
        Self::new(value)
    }
}
