use std::time::Duration;

/// Configuration for an analysis run
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the collection lives: `mongodb://...` or `memory:<path>`
    pub url: String,

    /// Database holding the collection (ignored by the memory driver)
    pub database: String,

    /// Collection of restaurant records
    pub collection: String,

    /// Time allowed for each stage's queries, per attempt
    pub query_timeout: Duration,

    /// Retry policy for timeouts and connection errors
    pub retry: RetryConfig,
}

/// Bounded exponential backoff between stage attempts
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Total attempts per stage, including the first
    pub max_attempts: u32,

    /// Delay before the second attempt
    pub initial_backoff: Duration,

    /// Factor applied to the delay after each retry
    pub multiplier: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: "mongodb://localhost:27017".to_string(),
            database: "test".to_string(),
            collection: "restaurants".to_string(),
            query_timeout: Duration::from_secs(30),
            retry: RetryConfig::default(),
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff: Duration::from_millis(200),
            multiplier: 2.0,
        }
    }
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    pub fn collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    pub fn query_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout = timeout;
        self
    }

    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }
}

impl RetryConfig {
    /// A policy that makes a single attempt.
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn initial_backoff(mut self, backoff: Duration) -> Self {
        self.initial_backoff = backoff;
        self
    }

    pub fn multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Delay before attempt `attempt + 1`, where `attempt` starts at 1.
    pub fn backoff(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1) as i32;
        self.initial_backoff
            .mul_f64(self.multiplier.max(1.0).powi(exponent))
    }
}
