use std::time::Duration;
use tastegap_core::{
    async_trait,
    query::{Filter, Pipeline},
    Connection, Document, Path, Result, Value,
};

/// Sleeps `delay` before every query.
#[derive(Debug)]
pub struct SlowConnection<C> {
    inner: C,
    delay: Duration,
}

impl<C: Connection> SlowConnection<C> {
    pub fn new(inner: C, delay: Duration) -> Self {
        Self { inner, delay }
    }
}

#[async_trait]
impl<C: Connection> Connection for SlowConnection<C> {
    fn url(&self) -> std::borrow::Cow<'_, str> {
        self.inner.url()
    }

    async fn count(&self, filter: &Filter) -> Result<u64> {
        tokio::time::sleep(self.delay).await;
        self.inner.count(filter).await
    }

    async fn distinct(&self, path: &Path, filter: &Filter) -> Result<Vec<Value>> {
        tokio::time::sleep(self.delay).await;
        self.inner.distinct(path, filter).await
    }

    async fn aggregate(&self, pipeline: &Pipeline) -> Result<Vec<Document>> {
        tokio::time::sleep(self.delay).await;
        self.inner.aggregate(pipeline).await
    }

    async fn close(&self) {
        self.inner.close().await
    }
}
