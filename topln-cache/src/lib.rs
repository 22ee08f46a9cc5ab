//! # Converter Cache
//!
//! File-backed adapter for the `RateCache` port.
//!
//! The cache is a single plain-text slot: the first line holds the save date
//! (`YYYY-MM-DD`), everything after it is the raw rate payload stored verbatim.
//! A record is only trusted on the local calendar day it was written.
//!
//! There is no cross-process locking; concurrent writers race and the last
//! one wins.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use tracing::debug;

use topln_types::{CacheError, CacheRecord, RateCache};

/// File name of the cache inside the temp directory.
pub const CACHE_FILE_NAME: &str = "2pln_cache.txt";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Single-slot cache stored in one file.
#[derive(Debug, Clone)]
pub struct FileCache {
    path: PathBuf,
}

impl FileCache {
    /// Creates a cache backed by `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<temp dir>/2pln_cache.txt`
    pub fn default_path() -> PathBuf {
        std::env::temp_dir().join(CACHE_FILE_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the slot and returns it only if it was saved on `today`.
    pub async fn load_on(&self, today: NaiveDate) -> Result<CacheRecord, CacheError> {
        let bytes = tokio::fs::read(&self.path).await?;
        let record = decode_record(&bytes)?;

        if !record.is_fresh_on(today) {
            return Err(CacheError::Stale {
                saved: record.saved_date,
                today,
            });
        }
        Ok(record)
    }

    /// Overwrites the slot with `payload` stamped with `date`.
    pub async fn save_on(&self, date: NaiveDate, payload: &[u8]) -> Result<(), CacheError> {
        tokio::fs::write(&self.path, encode_record(date, payload)).await?;
        debug!(path = %self.path.display(), bytes = payload.len(), "Cache updated");
        Ok(())
    }
}

#[async_trait]
impl RateCache for FileCache {
    async fn load(&self) -> Option<CacheRecord> {
        match self.load_on(today()).await {
            Ok(record) => {
                debug!(path = %self.path.display(), "Cache hit");
                Some(record)
            }
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "Cache miss");
                None
            }
        }
    }

    async fn save(&self, payload: &[u8]) -> Result<(), CacheError> {
        self.save_on(today(), payload).await
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn encode_record(date: NaiveDate, payload: &[u8]) -> Vec<u8> {
    let mut buf = format!("{}\n", date.format(DATE_FORMAT)).into_bytes();
    buf.extend_from_slice(payload);
    buf
}

fn decode_record(bytes: &[u8]) -> Result<CacheRecord, CacheError> {
    let newline = bytes
        .iter()
        .position(|&b| b == b'\n')
        .ok_or(CacheError::MissingDate)?;

    let line = std::str::from_utf8(&bytes[..newline])
        .map_err(|_| CacheError::InvalidDate("date line is not UTF-8".into()))?
        .trim_matches(|c: char| c == '\r' || c == ' ');

    let saved_date = NaiveDate::parse_from_str(line, DATE_FORMAT)
        .map_err(|e| CacheError::InvalidDate(format!("{:?}: {}", line, e)))?;

    Ok(CacheRecord::new(saved_date, &bytes[newline + 1..]))
}
