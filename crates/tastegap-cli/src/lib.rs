use anyhow::Result;
use clap::Parser;
use std::time::Duration;
use tastegap::{Config, Report, RetryConfig};

/// Finds where the city's most popular cuisine is under-served, and the best
/// places to eat it there.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "tastegap")]
#[command(version)]
pub struct Cli {
    /// Database holding the restaurant collection
    #[arg(default_value = "test")]
    pub database: String,

    /// Restaurant collection
    #[arg(default_value = "restaurants")]
    pub collection: String,

    /// Data store URL (`mongodb://...` or `memory:<path to JSON>`)
    #[arg(long, env = "TASTEGAP_URL", default_value = "mongodb://localhost:27017")]
    pub url: String,

    /// Per-query timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Retries per stage after the first attempt fails with a connection
    /// error or timeout
    #[arg(long, default_value_t = 2)]
    pub retries: u32,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config::new()
            .url(&self.url)
            .database(&self.database)
            .collection(&self.collection)
            .query_timeout(Duration::from_secs(self.timeout_secs))
            .retry(RetryConfig::default().max_attempts(self.retries.saturating_add(1)))
    }

    pub async fn run(&self) -> Result<Report> {
        let config = self.config();
        tracing::debug!(
            url = %config.url,
            database = %config.database,
            collection = %config.collection,
            "starting analysis"
        );
        Ok(tastegap::analyze(&config).await?)
    }
}
