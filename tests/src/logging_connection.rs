use std::sync::{Arc, Mutex};
use tastegap_core::{
    async_trait,
    query::{Filter, Pipeline},
    Connection, Document, Path, Result, Value,
};

/// A query issued through a [`LoggingConnection`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionOp {
    Count(Filter),
    Distinct(Path, Filter),
    Aggregate(Pipeline),
    Close,
}

/// Handle to the queries a [`LoggingConnection`] has issued.
#[derive(Debug, Clone, Default)]
pub struct OpLog {
    ops: Arc<Mutex<Vec<ConnectionOp>>>,
}

impl OpLog {
    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    pub fn ops(&self) -> Vec<ConnectionOp> {
        self.ops.lock().unwrap().clone()
    }

    /// Number of aggregation pipelines issued.
    pub fn aggregates(&self) -> usize {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter(|op| matches!(op, ConnectionOp::Aggregate(_)))
            .count()
    }

    /// Whether the connection has been closed.
    pub fn closed(&self) -> bool {
        self.ops.lock().unwrap().last() == Some(&ConnectionOp::Close)
    }

    fn push(&self, op: ConnectionOp) {
        self.ops.lock().unwrap().push(op);
    }
}

/// Records every query before passing it on to the wrapped connection.
#[derive(Debug)]
pub struct LoggingConnection<C> {
    inner: C,
    log: OpLog,
}

impl<C: Connection> LoggingConnection<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            log: OpLog::default(),
        }
    }

    pub fn log(&self) -> OpLog {
        self.log.clone()
    }
}

#[async_trait]
impl<C: Connection> Connection for LoggingConnection<C> {
    fn url(&self) -> std::borrow::Cow<'_, str> {
        self.inner.url()
    }

    async fn count(&self, filter: &Filter) -> Result<u64> {
        self.log.push(ConnectionOp::Count(filter.clone()));
        self.inner.count(filter).await
    }

    async fn distinct(&self, path: &Path, filter: &Filter) -> Result<Vec<Value>> {
        self.log
            .push(ConnectionOp::Distinct(path.clone(), filter.clone()));
        self.inner.distinct(path, filter).await
    }

    async fn aggregate(&self, pipeline: &Pipeline) -> Result<Vec<Document>> {
        self.log.push(ConnectionOp::Aggregate(pipeline.clone()));
        self.inner.aggregate(pipeline).await
    }

    async fn close(&self) {
        self.log.push(ConnectionOp::Close);
        self.inner.close().await
    }
}
