use tastegap_core::{
    async_trait,
    query::{Filter, Pipeline, Stage},
    Connection, Document, Path, Result, Value,
};

/// Answers queries with canned results, regardless of what was asked.
///
/// Aggregations that start with a match stage get `filtered`; all others get
/// `unfiltered`. Lets tests feed the stages results no real collection could
/// produce.
#[derive(Debug, Default)]
pub struct ScriptedConnection {
    pub count: u64,
    pub distinct: Vec<Value>,
    pub unfiltered: Vec<Document>,
    pub filtered: Vec<Document>,
}

/// A grouped row: `{ _id: key, count }`.
pub fn row(key: &str, count: i64) -> Document {
    Document::new().with("_id", key).with("count", count)
}

#[async_trait]
impl Connection for ScriptedConnection {
    fn url(&self) -> std::borrow::Cow<'_, str> {
        "scripted:".into()
    }

    async fn count(&self, _filter: &Filter) -> Result<u64> {
        Ok(self.count)
    }

    async fn distinct(&self, _path: &Path, _filter: &Filter) -> Result<Vec<Value>> {
        Ok(self.distinct.clone())
    }

    async fn aggregate(&self, pipeline: &Pipeline) -> Result<Vec<Document>> {
        match pipeline.stages().first() {
            Some(Stage::Match(_)) => Ok(self.filtered.clone()),
            _ => Ok(self.unfiltered.clone()),
        }
    }
}
