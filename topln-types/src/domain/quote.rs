//! Exchange rate quotes returned by a rate provider.

use rust_decimal::Decimal;

use crate::error::ProviderError;

/// Mid rate of one unit of a foreign currency in PLN on a given day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateQuote {
    /// Effective date of the rate, `YYYY-MM-DD`.
    pub as_of: String,
    pub unit_rate: Decimal,
    pub currency_code: String,
    /// Provider-specific display name, e.g. "dolar amerykański".
    pub currency_name: Option<String>,
}

impl RateQuote {
    /// Creates a quote, rejecting non-positive rates.
    pub fn new(
        as_of: impl Into<String>,
        unit_rate: Decimal,
        currency_code: impl Into<String>,
    ) -> Result<Self, ProviderError> {
        if unit_rate <= Decimal::ZERO {
            return Err(ProviderError::InvalidRate(unit_rate));
        }
        Ok(Self {
            as_of: as_of.into(),
            unit_rate,
            currency_code: currency_code.into(),
            currency_name: None,
        })
    }

    pub fn with_currency_name(mut self, name: impl Into<String>) -> Self {
        self.currency_name = Some(name.into());
        self
    }
}

/// A freshly fetched quote together with the raw response body it was
/// decoded from. The body is what gets written to the cache.
#[derive(Debug, Clone)]
pub struct FetchedRate {
    pub quote: RateQuote,
    pub payload: Vec<u8>,
}
