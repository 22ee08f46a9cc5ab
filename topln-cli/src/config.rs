//! Runtime configuration collected from arguments and environment.

use std::path::PathBuf;
use std::time::Duration;

use topln_cache::FileCache;

use crate::Cli;

/// Values injected into the conversion service and its adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub cache_file: PathBuf,
    pub cache_enabled: bool,
    pub timeout: Duration,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            api_url: cli.api_url.clone(),
            cache_file: cli.cache_file.clone().unwrap_or_else(FileCache::default_path),
            cache_enabled: !cli.no_cache,
            timeout: Duration::from_secs(cli.timeout),
        }
    }
}
