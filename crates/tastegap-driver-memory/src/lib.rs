mod op;

use std::{
    borrow::Cow,
    fs,
    path::{Path as FsPath, PathBuf},
};
use tastegap_core::{
    async_trait,
    query::{Filter, Pipeline},
    Connection, Document, Error, Path, Restaurant, Result, Value,
};
use url::Url;

/// A collection held in memory.
///
/// Evaluates pipelines with the same semantics as the MongoDB driver, which
/// makes it suitable both for tests and for running the analysis over an
/// exported JSON dataset without a database.
#[derive(Debug, Default)]
pub struct Memory {
    source: Option<PathBuf>,
    documents: Vec<Document>,
}

impl Memory {
    /// Create a collection from documents.
    pub fn new(documents: impl IntoIterator<Item = Document>) -> Memory {
        Memory {
            source: None,
            documents: documents.into_iter().collect(),
        }
    }

    /// Create a collection from typed restaurant records.
    pub fn from_restaurants<'a>(restaurants: impl IntoIterator<Item = &'a Restaurant>) -> Memory {
        Memory::new(restaurants.into_iter().map(Document::from))
    }

    /// Open a collection from a `memory:` URL.
    ///
    /// `memory:` alone yields an empty collection; `memory:<path>` loads the
    /// file at `<path>` with [`Memory::load`].
    pub fn connect(url: &str) -> Result<Memory> {
        let url = Url::parse(url).map_err(|err| Error::invalid_connection_url(err.to_string()))?;

        if url.scheme() != "memory" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `memory` scheme; url={url}"
            )));
        }

        match url.path() {
            "" => Ok(Memory::default()),
            path => Memory::load(path),
        }
    }

    /// Load documents from a JSON file.
    ///
    /// The file holds either a single JSON array of documents or one document
    /// per line, which is the format `mongoexport` writes.
    pub fn load(path: impl AsRef<FsPath>) -> Result<Memory> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(Error::driver_operation_failed)?;

        let mut memory = Memory::parse(&contents)?;
        memory.source = Some(path.to_path_buf());

        tracing::debug!(
            path = %path.display(),
            documents = memory.documents.len(),
            "loaded dataset"
        );

        Ok(memory)
    }

    /// Parse documents from JSON text; see [`Memory::load`] for the formats.
    pub fn parse(contents: &str) -> Result<Memory> {
        let trimmed = contents.trim_start();

        let values: Vec<serde_json::Value> = if trimmed.starts_with('[') {
            serde_json::from_str(trimmed)?
        } else {
            serde_json::Deserializer::from_str(trimmed)
                .into_iter::<serde_json::Value>()
                .collect::<core::result::Result<_, _>>()?
        };

        values
            .into_iter()
            .map(|value| match Value::from(value) {
                Value::Document(doc) => Ok(doc),
                other => Err(Error::invalid_result(format!(
                    "expected a document per record, got {}",
                    other.type_name()
                ))),
            })
            .collect::<Result<Vec<_>>>()
            .map(Memory::new)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn matching<'a>(&'a self, filter: &'a Filter) -> impl Iterator<Item = &'a Document> + 'a {
        self.documents
            .iter()
            .filter(move |doc| op::matches(doc, filter))
    }
}

#[async_trait]
impl Connection for Memory {
    fn url(&self) -> Cow<'_, str> {
        match &self.source {
            Some(path) => Cow::Owned(format!("memory:{}", path.display())),
            None => Cow::Borrowed("memory:"),
        }
    }

    async fn count(&self, filter: &Filter) -> Result<u64> {
        Ok(self.matching(filter).count() as u64)
    }

    async fn distinct(&self, path: &Path, filter: &Filter) -> Result<Vec<Value>> {
        let mut distinct = Vec::<Value>::new();

        for doc in self.matching(filter) {
            // A list field contributes each of its elements
            let values = match doc.get_path(path) {
                None => continue,
                Some(Value::List(items)) => items.clone(),
                Some(value) => vec![value.clone()],
            };

            for value in values {
                if !distinct.iter().any(|seen| seen.eq_stored(&value)) {
                    distinct.push(value);
                }
            }
        }

        Ok(distinct)
    }

    async fn aggregate(&self, pipeline: &Pipeline) -> Result<Vec<Document>> {
        let rows = op::execute_pipeline(self.documents.iter().cloned().collect(), pipeline);
        tracing::trace!(stages = pipeline.stages().len(), rows = rows.len(), "aggregate");
        Ok(rows)
    }
}
