//! Exchange rate provider port.
//!
//! Implementations can be HTTP clients, mock providers, etc.

use crate::CurrencyCode;
use crate::domain::{FetchedRate, RateQuote};
use crate::error::ProviderError;

/// Port trait for services publishing PLN rates.
///
/// The `'static` bound lets the conversion service move a shared handle into
/// a spawned task so the fetch can be raced against a deadline.
#[async_trait::async_trait]
pub trait RateProvider: Send + Sync + 'static {
    /// Get the provider name.
    fn name(&self) -> &str;

    /// Fetch the current rate of `currency` in PLN.
    ///
    /// Returns the decoded quote and the raw body it came from.
    async fn fetch_rate(&self, currency: CurrencyCode) -> Result<FetchedRate, ProviderError>;

    /// Decode a raw body previously returned by `fetch_rate`.
    fn decode(&self, payload: &[u8]) -> Result<RateQuote, ProviderError>;
}
