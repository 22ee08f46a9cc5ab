//! # Converter Hex
//!
//! Application layer of the PLN converter.
//!
//! ## Architecture
//!
//! - `parser` - lenient free-text input parser
//! - `report` - output line formatting
//! - `service` - conversion service (orchestrates cache, provider and report)
//!
//! The service is generic over `P: RateProvider` and `C: RateCache`, allowing
//! different adapters to be injected.

pub mod parser;
pub mod report;
pub mod service;


pub use parser::parse;
pub use report::format_report;
pub use service::{ConversionService, DEFAULT_TIMEOUT};
