//! # Converter Types
//!
//! Domain types and port traits for the PLN currency converter.
//! This crate has ZERO external IO dependencies - only data structures,
//! invariants, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (ConversionRequest, RateQuote, CacheRecord)
//! - `ports/` - Trait definitions that adapters must implement
//! - `error/` - Parse, cache, provider and conversion error types

pub mod domain;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use currencies::{CurrencyCode, UnknownCurrency};
pub use domain::{CacheRecord, ConversionRequest, FetchedRate, RateQuote};
pub use error::{CacheError, ConvertError, ParseError, ProviderError};
pub use ports::{NoCache, RateCache, RateProvider};
