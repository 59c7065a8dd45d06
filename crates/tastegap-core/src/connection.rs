use crate::{
    async_trait,
    query::{Filter, Pipeline},
    Document, Path, Result, Value,
};

use std::{borrow::Cow, fmt::Debug};

/// A read-only handle to the restaurant collection.
///
/// Drivers translate these calls into their store's native queries. The
/// connection is acquired once per run and closed with
/// [`Connection::close`] when the run ends.
#[async_trait]
pub trait Connection: Debug + Send + Sync + 'static {
    /// Describes where the connection points, for logging.
    fn url(&self) -> Cow<'_, str>;

    /// Counts the records matching `filter`.
    async fn count(&self, filter: &Filter) -> Result<u64>;

    /// Returns the distinct values at `path` among records matching
    /// `filter`. The order is unspecified.
    async fn distinct(&self, path: &Path, filter: &Filter) -> Result<Vec<Value>>;

    /// Runs an aggregation pipeline over the collection.
    async fn aggregate(&self, pipeline: &Pipeline) -> Result<Vec<Document>>;

    /// Releases the connection's client resources. Called once, after the
    /// last query.
    async fn close(&self) {}
}
