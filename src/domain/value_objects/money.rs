//! # Money
//!
//! Non-negative currency amounts in whole units (Colombian pesos) backed by
//! [`rust_decimal::Decimal`], with checked arithmetic.
//!
//! Cart lines carry prices in minor units (cents); [`Money::from_minor_units`]
//! converts them. Amounts serialize as JSON numbers.
//!
//! # Examples
//!
//! ```
//! use shipping_quote::domain::value_objects::money::Money;
//!
//! let unit = Money::from_minor_units(20_000).unwrap();
//! assert_eq!(unit, Money::from_units(200));
//!
//! let line = unit.checked_mul_quantity(2).unwrap();
//! assert_eq!(line, Money::from_units(400));
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Minor units per whole currency unit.
const MINOR_UNITS_SCALE: u32 = 2;

/// Error type for money arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ArithmeticError {
    /// Result does not fit in a decimal.
    #[error("arithmetic overflow")]
    Overflow,
}

/// Result type for money arithmetic.
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

/// A non-negative monetary amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Money {
    /// Zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates an amount from a decimal value.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidAmount`] if `value` is negative.
    pub fn new(value: Decimal) -> DomainResult<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(DomainError::InvalidAmount(value.to_string()));
        }
        Ok(Self(value))
    }

    /// Creates an amount from whole currency units.
    #[must_use]
    pub fn from_units(units: u64) -> Self {
        Self(Decimal::from(units))
    }

    /// Converts an amount given in minor units (cents).
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidAmount`] if `minor` is negative.
    pub fn from_minor_units(minor: i64) -> DomainResult<Self> {
        Self::new(Decimal::new(minor, MINOR_UNITS_SCALE).normalize())
    }

    /// Returns the decimal value.
    #[inline]
    #[must_use]
    pub fn get(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is strictly greater than zero.
    #[inline]
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Adds two amounts.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::Overflow`] if the sum overflows.
    pub fn checked_add(self, rhs: Self) -> ArithmeticResult<Self> {
        self.0
            .checked_add(rhs.0)
            .map(Self)
            .ok_or(ArithmeticError::Overflow)
    }

    /// Multiplies a unit amount by a quantity.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::Overflow`] if the product overflows.
    pub fn checked_mul_quantity(self, quantity: u32) -> ArithmeticResult<Self> {
        self.0
            .checked_mul(Decimal::from(quantity))
            .map(Self)
            .ok_or(ArithmeticError::Overflow)
    }

    /// Sums amounts with overflow checking.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::Overflow`] if the total overflows.
    pub fn checked_sum<I>(amounts: I) -> ArithmeticResult<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        amounts
            .into_iter()
            .try_fold(Self::ZERO, |acc, amount| acc.checked_add(amount))
    }

    /// Returns `self`, raised to `floor` when below it.
    #[must_use]
    pub fn at_least(self, floor: Self) -> Self {
        if self < floor { floor } else { self }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
