use std::sync::atomic::{AtomicU32, Ordering};
use tastegap_core::{
    async_trait,
    query::{Filter, Pipeline},
    Connection, Document, Error, Path, Result, Value,
};

/// Fails the first `failures` queries, then passes queries through.
#[derive(Debug)]
pub struct FlakyConnection<C> {
    inner: C,
    failures: u32,
    error: fn() -> Error,
    calls: AtomicU32,
}

fn connection_reset() -> Error {
    Error::connection(std::io::Error::new(
        std::io::ErrorKind::ConnectionReset,
        "reset by peer",
    ))
}

impl<C: Connection> FlakyConnection<C> {
    /// Fails with a connection reset.
    pub fn new(inner: C, failures: u32) -> Self {
        Self::with_error(inner, failures, connection_reset)
    }

    /// Fails with the error `error` builds.
    pub fn with_error(inner: C, failures: u32, error: fn() -> Error) -> Self {
        Self {
            inner,
            failures,
            error,
            calls: AtomicU32::new(0),
        }
    }

    /// Queries received so far, failed ones included.
    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<()> {
        if self.calls.fetch_add(1, Ordering::SeqCst) < self.failures {
            Err((self.error)())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl<C: Connection> Connection for FlakyConnection<C> {
    fn url(&self) -> std::borrow::Cow<'_, str> {
        self.inner.url()
    }

    async fn count(&self, filter: &Filter) -> Result<u64> {
        self.check()?;
        self.inner.count(filter).await
    }

    async fn distinct(&self, path: &Path, filter: &Filter) -> Result<Vec<Value>> {
        self.check()?;
        self.inner.distinct(path, filter).await
    }

    async fn aggregate(&self, pipeline: &Pipeline) -> Result<Vec<Document>> {
        self.check()?;
        self.inner.aggregate(pipeline).await
    }

    async fn close(&self) {
        self.inner.close().await
    }
}
