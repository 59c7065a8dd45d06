use crate::RetryConfig;

use std::{future::Future, time::Duration};
use tastegap_core::{err, Error, Result};
use tokio::time::{sleep, timeout};

/// Runs `op` under `query_timeout`, retrying timeouts and connection errors
/// per `retry`. The final error carries `stage` as context.
pub(crate) async fn with_retry<T, F, Fut>(
    stage: &'static str,
    query_timeout: Duration,
    retry: &RetryConfig,
    mut op: F,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut attempt = 1;

    loop {
        let res = match timeout(query_timeout, op()).await {
            Ok(res) => res,
            Err(_) => Err(Error::query_timeout(query_timeout)),
        };

        match res {
            Ok(value) => return Ok(value),
            Err(err) if err.is_retryable() && attempt < retry.max_attempts => {
                let delay = retry.backoff(attempt);
                tracing::warn!(
                    stage,
                    attempt,
                    ?delay,
                    error = %err,
                    "stage failed; retrying"
                );
                sleep(delay).await;
                attempt += 1;
            }
            Err(err) => return Err(err.context(err!("{stage} stage"))),
        }
    }
}
