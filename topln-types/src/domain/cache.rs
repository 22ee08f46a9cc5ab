//! Snapshot held by the cache slot.

use chrono::NaiveDate;

/// Raw rate payload together with the local date it was saved on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheRecord {
    pub saved_date: NaiveDate,
    pub payload: Vec<u8>,
}

impl CacheRecord {
    pub fn new(saved_date: NaiveDate, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            saved_date,
            payload: payload.into(),
        }
    }

    /// A record is only trusted on the calendar day it was saved.
    pub fn is_fresh_on(&self, today: NaiveDate) -> bool {
        self.saved_date == today
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_fresh_only_on_same_day() {
        let record = CacheRecord::new(date(2022, 1, 28), b"{}".to_vec());
        assert!(record.is_fresh_on(date(2022, 1, 28)));
        assert!(!record.is_fresh_on(date(2022, 1, 29)));
        assert!(!record.is_fresh_on(date(2022, 1, 27)));
    }
}
