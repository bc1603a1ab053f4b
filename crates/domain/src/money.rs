// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Monetary amounts.
//!
//! Prices and totals are exact decimals with two fractional digits.
//! They are persisted as integer minor units (cents) and exposed over
//! the API as decimal strings.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of fractional digits carried by every amount.
pub const MONEY_SCALE: u32 = 2;

/// Largest difference tolerated between a client-declared total and the
/// server-computed total before the two are considered different (0.01).
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, MONEY_SCALE);

/// Errors raised while constructing or combining amounts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// The amount is below zero.
    #[error("amount must not be negative, got {0}")]
    Negative(Decimal),

    /// The amount has more than two fractional digits.
    #[error("amount must have at most 2 decimal places, got {0}")]
    TooPrecise(Decimal),

    /// The amount cannot be represented in minor units.
    #[error("amount {0} is out of range")]
    OutOfRange(Decimal),
}

/// A non-negative monetary amount with two fractional digits.
///
/// Deserialization goes through [`Money::new`], so stored or wire values
/// are held to the same rules as constructed ones.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    /// Zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates an amount from a decimal value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or has more than two
    /// fractional digits.
    pub fn new(amount: Decimal) -> Result<Self, MoneyError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(MoneyError::Negative(amount));
        }
        if amount.normalize().scale() > MONEY_SCALE {
            return Err(MoneyError::TooPrecise(amount));
        }
        let mut scaled: Decimal = amount;
        scaled.rescale(MONEY_SCALE);
        Ok(Self(scaled))
    }

    /// Creates an amount from integer minor units.
    ///
    /// # Errors
    ///
    /// Returns an error if `cents` is negative.
    pub fn from_cents(cents: i64) -> Result<Self, MoneyError> {
        let amount: Decimal = Decimal::new(cents, MONEY_SCALE);
        if cents < 0 {
            return Err(MoneyError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// Returns the amount in integer minor units.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount does not fit in an `i64`.
    pub fn cents(&self) -> Result<i64, MoneyError> {
        self.0
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|v| v.round().to_i64())
            .ok_or(MoneyError::OutOfRange(self.0))
    }

    /// Returns the underlying decimal value.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Multiplies a unit price by a line quantity.
    ///
    /// # Errors
    ///
    /// Returns an error on overflow.
    pub fn times(&self, quantity: u32) -> Result<Self, MoneyError> {
        self.0
            .checked_mul(Decimal::from(quantity))
            .map(Self)
            .ok_or(MoneyError::OutOfRange(self.0))
    }

    /// Adds two amounts.
    ///
    /// # Errors
    ///
    /// Returns an error on overflow.
    pub fn checked_add(&self, other: Self) -> Result<Self, MoneyError> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or(MoneyError::OutOfRange(self.0))
    }

    /// Returns whether `other` is within [`MONEY_TOLERANCE`] of this amount.
    #[must_use]
    pub fn matches(&self, other: Decimal) -> bool {
        (self.0 - other).abs() <= MONEY_TOLERANCE
    }
}

impl TryFrom<Decimal> for Money {
    type Error = MoneyError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
