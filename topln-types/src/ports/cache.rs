//! Rate cache port.
//!
//! A single slot holding the last fetched payload for the current day.

use crate::domain::CacheRecord;
use crate::error::CacheError;

#[async_trait::async_trait]
pub trait RateCache: Send + Sync {
    /// Returns today's record, or `None` on miss, staleness or any read failure.
    async fn load(&self) -> Option<CacheRecord>;

    /// Replaces the slot with `payload`, stamped with today's date.
    async fn save(&self, payload: &[u8]) -> Result<(), CacheError>;
}

/// Cache adapter that never holds anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCache;

#[async_trait::async_trait]
impl RateCache for NoCache {
    async fn load(&self) -> Option<CacheRecord> {
        None
    }

    async fn save(&self, _payload: &[u8]) -> Result<(), CacheError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_no_cache_always_misses() {
        let cache = NoCache;
        cache.save(b"payload").await.unwrap();
        assert!(cache.load().await.is_none());
    }
}
