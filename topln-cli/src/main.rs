//! PLN Converter CLI
//!
//! Converts an amount of a foreign currency to Polish złoty using the daily
//! NBP mid rate:
//! - Parse arguments and load configuration
//! - Initialize logging on stderr
//! - Wire the NBP client and the rate cache into the conversion service
//! - Print one report line on stdout

mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use topln_cache::FileCache;
use topln_client::{DEFAULT_BASE_URL, NbpClient};
use topln_hex::ConversionService;
use topln_types::{NoCache, RateCache};

use crate::config::Config;

const EXAMPLES: &str = "\
AMOUNT is digits with an optional comma or dot, e.g. 10, 10,0 or 10.0.
CURRENCY is one of EUR (default), USD, GBP, CHF.

Examples:
  topln 10 EUR
  topln 12 usd --timeout 1
  topln \"99 999,50 chf\"

Sample output:
  2022-01-28; 1 EUR = 4.5697 PLN; 10.0000 EUR = 45.6970 PLN";

#[derive(Parser)]
#[command(name = "topln")]
#[command(author, version, about = "Convert foreign currency to Polish złoty (PLN) at the NBP daily rate", long_about = None)]
#[command(after_help = EXAMPLES)]
struct Cli {
    /// Amount followed by an optional currency code
    #[arg(value_name = "AMOUNT [CURRENCY]")]
    input: Vec<String>,

    /// Timeout for the rate request, in seconds
    #[arg(short, long, env = "TOPLN_TIMEOUT", default_value_t = 5)]
    timeout: u64,

    /// Base URL of the NBP rates API
    #[arg(long, env = "TOPLN_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Cache file (defaults to a file in the system temp directory)
    #[arg(long, env = "TOPLN_CACHE_FILE")]
    cache_file: Option<PathBuf>,

    /// Skip the cache and always fetch a live rate
    #[arg(long, env = "TOPLN_NO_CACHE")]
    no_cache: bool,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn convert<C: RateCache>(config: &Config, cache: C, input: &str) -> Result<String> {
    let service = ConversionService::new(NbpClient::new(config.api_url.as_str()), cache)
        .with_timeout(config.timeout);

    service
        .convert(input)
        .await
        .with_context(|| format!("cannot convert {:?}", input))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    if cli.input.is_empty() {
        Cli::command().print_help()?;
        return Ok(());
    }

    let config = Config::from_cli(&cli);
    let input = cli.input.join(" ");
    tracing::debug!(input = %input, api_url = %config.api_url, "Starting conversion");

    let report = if config.cache_enabled {
        convert(&config, FileCache::new(&config.cache_file), &input).await?
    } else {
        convert(&config, NoCache, &input).await?
    };

    println!("{}", report);
    Ok(())
}
