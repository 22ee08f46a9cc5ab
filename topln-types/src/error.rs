//! Error types for the converter.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::time::Duration;

use crate::CurrencyCode;

/// Input parsing errors (user typed something we cannot read).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("No amount found in input")]
    NoAmount,

    #[error("Malformed amount: {0}")]
    MalformedAmount(String),
}

/// Cache read/write errors. Never fatal for a conversion.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cache file has no date line")]
    MissingDate,

    #[error("Invalid cache date: {0}")]
    InvalidDate(String),

    #[error("Cache saved on {saved} is stale (today is {today})")]
    Stale { saved: NaiveDate, today: NaiveDate },
}

/// Rate provider errors (remote service failures).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Rate service returned HTTP {0}")]
    BadStatus(u16),

    #[error("Cannot decode rate data: {0}")]
    Decode(String),

    #[error("Rate service returned an empty rate list")]
    EmptyRates,

    #[error("Invalid rate: {0}")]
    InvalidRate(Decimal),

    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),

    #[error("Rate request timed out after {0:?}")]
    Timeout(Duration),
}

/// Errors surfaced to the user-facing layer.
///
/// Cache errors are absorbed below this level and never appear here.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Amount too large: {amount} {currency} at {rate} PLN cannot be represented")]
    AmountTooLarge {
        amount: Decimal,
        currency: CurrencyCode,
        rate: Decimal,
    },
}
