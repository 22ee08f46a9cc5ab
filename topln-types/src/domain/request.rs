//! A parsed conversion request.

use rust_decimal::Decimal;
use std::fmt;

use crate::CurrencyCode;

/// Amount of a foreign currency the user wants expressed in PLN.
///
/// Built by the input parser and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionRequest {
    amount: Decimal,
    currency: CurrencyCode,
}

impl ConversionRequest {
    pub fn new(amount: Decimal, currency: CurrencyCode) -> Self {
        Self { amount, currency }
    }

    /// Returns the requested amount in units of `currency`.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the source currency.
    pub fn currency(&self) -> CurrencyCode {
        self.currency
    }

    /// Value of the requested amount in PLN at the given unit rate, or `None`
    /// when the product does not fit in a `Decimal`.
    pub fn total_at(&self, unit_rate: Decimal) -> Option<Decimal> {
        self.amount.checked_mul(unit_rate)
    }
}

impl fmt::Display for ConversionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
