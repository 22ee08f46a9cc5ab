//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The conversion service depends on these traits, not concrete implementations.

mod cache;
mod provider;

pub use cache::{NoCache, RateCache};
pub use provider::RateProvider;
