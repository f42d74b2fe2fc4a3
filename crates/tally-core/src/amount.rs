//! Amount type pairing a decimal quantity with its unit.
//!
//! An [`Amount`] combines a signed decimal with the unit it is denominated
//! in, either a currency symbol (`$`, `€`) or a commodity label (`FOO`).
//! The pair is a single type so a transfer carries either a whole amount
//! or none at all; the two halves cannot go missing independently.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A signed decimal quantity with a currency or commodity unit.
///
/// # Examples
///
/// ```
/// use tally_core::Amount;
/// use rust_decimal_macros::dec;
///
/// let cash = Amount::new(dec!(123.45), "$");
/// assert_eq!(cash.number, dec!(123.45));
/// assert_eq!(cash.unit, "$");
/// assert_eq!(cash.to_string(), "$123.45");
///
/// let shares = Amount::new(dec!(-2), "FOO");
/// assert!(shares.is_negative());
/// assert_eq!(shares.to_string(), "-2 FOO");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Amount {
    /// The decimal quantity
    pub number: Decimal,
    /// The currency symbol or commodity label (e.g., "$", "€", "FOO")
    pub unit: String,
}

impl Amount {
    /// Create a new amount.
    #[must_use]
    pub fn new(number: Decimal, unit: impl Into<String>) -> Self {
        Self {
            number,
            unit: unit.into(),
        }
    }

    /// Check if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.number.is_zero()
    }

    /// Check if the amount is negative.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.number.is_sign_negative() && !self.number.is_zero()
    }

    /// Get the absolute value of this amount.
    ///
    /// Reconciliation tooling matches ledger transfers against bank rows
    /// by absolute value, since the two record opposite signs.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            number: self.number.abs(),
            unit: self.unit.clone(),
        }
    }

    /// Whether the unit is a currency symbol rather than a commodity label.
    #[must_use]
    pub fn is_cash(&self) -> bool {
        matches!(self.unit.as_str(), "$" | "€")
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_cash() {
            // symbol-prefixed, sign after the symbol: $-42.00
            write!(f, "{}{}", self.unit, self.number)
        } else {
            write!(f, "{} {}", self.number, self.unit)
        }
    }
}
