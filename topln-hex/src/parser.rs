//! Lenient parser for user-typed conversion requests.
//!
//! Accepts inputs such as `10 eur`, `10,50 USD`, `9 9 99 9 ,00 eur` or
//! `.1usd`: commas act as decimal points, whitespace is ignored everywhere and
//! case does not matter. A missing currency code means EUR.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;

use topln_types::{ConversionRequest, CurrencyCode, ParseError};

/// Leading amount: digits, at most one separator, more digits.
static AMOUNT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]*\.?[0-9]*").expect("Invalid amount pattern regex"));

/// Any supported code anywhere in the text, no word boundaries.
static CURRENCY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let alternatives = CurrencyCode::all()
        .iter()
        .map(|c| regex::escape(c.code()))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&alternatives).expect("Invalid currency pattern regex")
});

/// Parses free text into a conversion request.
pub fn parse(raw: &str) -> Result<ConversionRequest, ParseError> {
    let text = normalize(raw);

    let token = AMOUNT_PATTERN
        .find(&text)
        .map(|m| m.as_str())
        .unwrap_or_default();
    let amount = parse_amount(token)?;

    let currency = CURRENCY_PATTERN
        .find(&text)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or_default();

    Ok(ConversionRequest::new(amount, currency))
}

fn normalize(raw: &str) -> String {
    raw.replace(',', ".")
        .to_uppercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

fn parse_amount(token: &str) -> Result<Decimal, ParseError> {
    // "99999." means 99999
    let digits = token.strip_suffix('.').unwrap_or(token);
    if digits.is_empty() {
        return Err(ParseError::NoAmount);
    }

    let canonical = if digits.starts_with('.') {
        format!("0{}", digits)
    } else {
        digits.to_string()
    };

    Decimal::from_str(&canonical).map_err(|_| ParseError::MalformedAmount(token.to_string()))
}
