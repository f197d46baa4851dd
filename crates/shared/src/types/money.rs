//! Money type holding an amount in minor currency units.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` so the division by 100 is exact.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::currency::CurrencyCode;

/// Represents a monetary amount with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount in the smallest currency unit (e.g., cents).
    pub amount: Decimal,
    /// ISO 4217 currency code (e.g., "EUR", "USD").
    pub currency: CurrencyCode,
}

impl Money {
    /// Creates a new Money instance from an amount in minor units.
    #[must_use]
    pub fn new(amount: impl Into<Decimal>, currency: CurrencyCode) -> Self {
        Self {
            amount: amount.into(),
            currency,
        }
    }

    /// Returns the amount in major units.
    ///
    /// Always divides by 100, whatever the currency's ISO minor-unit
    /// exponent: JPY 12345 becomes 123.45, not 12345.
    #[must_use]
    pub fn to_major(&self) -> Decimal {
        self.amount / Decimal::ONE_HUNDRED
    }

    /// Returns true if the amount is negative.
    ///
    /// Negative zero counts as zero, so `-0.0` formats as `$0.00`. Platform
    /// formatters with default sign display print `-$0.00` instead.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }
}
