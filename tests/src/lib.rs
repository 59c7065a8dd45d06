//! Shared fixtures and connection wrappers for the integration tests.

mod city;
pub use city::{city, restaurants};

mod flaky_connection;
pub use flaky_connection::FlakyConnection;

mod logging_connection;
pub use logging_connection::{ConnectionOp, LoggingConnection, OpLog};

mod scripted_connection;
pub use scripted_connection::{row, ScriptedConnection};

mod slow_connection;
pub use slow_connection::SlowConnection;

use std::time::Duration;
use tastegap::{Config, RetryConfig};

/// Config for runs against in-process connections: short timeout, fast
/// backoff.
pub fn test_config(max_attempts: u32) -> Config {
    Config::new()
        .url("memory:")
        .query_timeout(Duration::from_secs(1))
        .retry(
            RetryConfig::default()
                .max_attempts(max_attempts)
                .initial_backoff(Duration::from_millis(10)),
        )
}
