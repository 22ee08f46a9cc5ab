//! Domain models for the converter.

pub mod cache;
pub mod quote;
pub mod request;

pub use cache::CacheRecord;
pub use quote::{FetchedRate, RateQuote};
pub use request::ConversionRequest;
