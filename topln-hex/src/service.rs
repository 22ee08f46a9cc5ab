//! Conversion Service
//!
//! Orchestrates one conversion: parse the input, try the cache, fall back to
//! the rate provider under a deadline, format the report, then refresh the
//! cache. Contains NO infrastructure logic - adapters are injected.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use topln_types::{
    ConversionRequest, ConvertError, CurrencyCode, FetchedRate, ProviderError, RateCache,
    RateProvider, RateQuote,
};

use crate::parser::parse;
use crate::report::format_report;

/// Deadline for a live rate fetch when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Application service for PLN conversions.
///
/// Generic over `P: RateProvider` and `C: RateCache` - adapters are injected
/// at compile time, so tests can substitute in-memory doubles.
pub struct ConversionService<P: RateProvider, C: RateCache> {
    provider: Arc<P>,
    cache: C,
    timeout: Duration,
}

impl<P: RateProvider, C: RateCache> ConversionService<P, C> {
    /// Creates a service with the default fetch timeout.
    pub fn new(provider: P, cache: C) -> Self {
        Self {
            provider: Arc::new(provider),
            cache,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the deadline for live fetches.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns a reference to the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Returns a reference to the underlying cache.
    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Converts raw user text into a report line.
    pub async fn convert(&self, raw: &str) -> Result<String, ConvertError> {
        let request = parse(raw)?;
        debug!(request = %request, "Parsed input");
        self.convert_request(&request).await
    }

    /// Converts an already parsed request into a report line.
    ///
    /// A cache hit skips the network entirely. On a live fetch the cache is
    /// written after the report is built; a failed write is only logged.
    pub async fn convert_request(
        &self,
        request: &ConversionRequest,
    ) -> Result<String, ConvertError> {
        let currency = request.currency();

        if let Some(quote) = self.cached_quote(currency).await {
            debug!(currency = %currency, as_of = %quote.as_of, "Using cached rate");
            return build_report(request, &quote);
        }

        let fetched = self.fetch_live(currency).await?;
        debug!(
            provider = self.provider.name(),
            currency = %currency,
            as_of = %fetched.quote.as_of,
            rate = %fetched.quote.unit_rate,
            "Fetched live rate"
        );
        let report = build_report(request, &fetched.quote)?;

        if let Err(e) = self.cache.save(&fetched.payload).await {
            warn!(error = %e, "Failed to update rate cache");
        }

        Ok(report)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Rate sources
    // ─────────────────────────────────────────────────────────────────────────────

    /// Today's cached quote, if the slot holds one for `currency`.
    async fn cached_quote(&self, currency: CurrencyCode) -> Option<RateQuote> {
        let record = self.cache.load().await?;

        match self.provider.decode(&record.payload) {
            Ok(quote) if quote.currency_code == currency.code() => Some(quote),
            Ok(quote) => {
                debug!(
                    cached = %quote.currency_code,
                    requested = %currency,
                    "Cached rate is for another currency"
                );
                None
            }
            Err(e) => {
                debug!(error = %e, "Cached payload unreadable");
                None
            }
        }
    }

    /// Runs the provider call on its own task and races it against the
    /// deadline. The task is aborted if the deadline wins.
    async fn fetch_live(&self, currency: CurrencyCode) -> Result<FetchedRate, ProviderError> {
        let provider = Arc::clone(&self.provider);
        let mut task = tokio::spawn(async move { provider.fetch_rate(currency).await });

        match tokio::time::timeout(self.timeout, &mut task).await {
            Ok(Ok(result)) => result,
            Ok(Err(e)) => Err(ProviderError::Transport(format!("rate fetch task failed: {}", e))),
            Err(_) => {
                task.abort();
                Err(ProviderError::Timeout(self.timeout))
            }
        }
    }
}

/// Formats the report, rejecting amounts whose PLN total overflows.
fn build_report(
    request: &ConversionRequest,
    quote: &RateQuote,
) -> Result<String, ConvertError> {
    let total = request
        .total_at(quote.unit_rate)
        .ok_or(ConvertError::AmountTooLarge {
            amount: request.amount(),
            currency: request.currency(),
            rate: quote.unit_rate,
        })?;
    Ok(format_report(request, quote, total))
}
