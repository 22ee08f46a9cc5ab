//! # NBP Rate Client
//!
//! A typed client for the National Bank of Poland exchange rate API.
//!
//! Rates come from table A (average mid rates), one currency per request:
//! `GET {base}/a/{code}?format=json`.

use reqwest::Client;
use reqwest::header::ACCEPT;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use topln_types::{CurrencyCode, FetchedRate, ProviderError, RateProvider, RateQuote};

/// Public NBP endpoint for single-currency rates.
pub const DEFAULT_BASE_URL: &str = "https://api.nbp.pl/api/exchangerates/rates";

/// Table of average mid rates.
const TABLE_CODE: &str = "a";

/// Response body for a single-currency query.
///
/// Example:
/// `{"table":"A","currency":"dolar amerykański","code":"USD","rates":[{"no":"219/A/NBP/2021","effectiveDate":"2021-11-12","mid":4.0559}]}`
#[derive(Debug, Deserialize)]
struct NbpResponse {
    #[serde(rename = "currency", default)]
    name: String,
    code: String,
    rates: Vec<NbpRate>,
}

#[derive(Debug, Deserialize)]
struct NbpRate {
    #[serde(rename = "effectiveDate")]
    effective_date: String,
    mid: Decimal,
}

/// NBP API client.
pub struct NbpClient {
    base_url: String,
    http: Client,
}

impl NbpClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Builds the query URL for one currency.
    pub fn rate_url(&self, currency: CurrencyCode) -> String {
        format!(
            "{}/{}/{}?format=json",
            self.base_url,
            TABLE_CODE,
            currency.code().to_lowercase()
        )
    }
}

impl Default for NbpClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait::async_trait]
impl RateProvider for NbpClient {
    fn name(&self) -> &str {
        "NBP"
    }

    async fn fetch_rate(&self, currency: CurrencyCode) -> Result<FetchedRate, ProviderError> {
        let url = self.rate_url(currency);
        debug!(url = %url, "Requesting rate");

        let resp = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ProviderError::BadStatus(status.as_u16()));
        }

        let payload = resp
            .bytes()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?
            .to_vec();
        let quote = self.decode(&payload)?;

        Ok(FetchedRate { quote, payload })
    }

    fn decode(&self, payload: &[u8]) -> Result<RateQuote, ProviderError> {
        let resp: NbpResponse =
            serde_json::from_slice(payload).map_err(|e| ProviderError::Decode(e.to_string()))?;

        let currency: CurrencyCode = resp
            .code
            .parse()
            .map_err(|_| ProviderError::UnsupportedCurrency(resp.code.clone()))?;

        // The first entry is authoritative.
        let rate = resp.rates.first().ok_or(ProviderError::EmptyRates)?;

        let quote = RateQuote::new(rate.effective_date.as_str(), rate.mid, currency.code())?;
        if resp.name.is_empty() {
            Ok(quote)
        } else {
            Ok(quote.with_currency_name(resp.name))
        }
    }
}
