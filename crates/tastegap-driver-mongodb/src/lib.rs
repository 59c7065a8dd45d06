mod error;
mod op;
pub mod value;

pub use op::{filter_document, pipeline_documents};

use std::borrow::Cow;
use tastegap_core::{
    async_trait,
    query::{Filter, Pipeline},
    Connection, Document, Error, Path, Result, Value,
};

use mongodb::{Client, Collection};
use url::Url;

#[derive(Debug)]
pub struct MongoDb {
    url: String,
    client: Client,
    collection: Collection<bson::Document>,
}

impl MongoDb {
    pub fn new(client: Client, database: &str, collection: &str) -> Self {
        let collection: Collection<bson::Document> =
            client.database(database).collection(collection);

        Self {
            url: format!("mongodb://{database}.{}", collection.name()),
            client,
            collection,
        }
    }

    /// Connects to the server at `url` and opens `database.collection`.
    pub async fn connect(url: &str, database: &str, collection: &str) -> Result<Self> {
        let parsed = Url::parse(url).map_err(|err| Error::invalid_connection_url(err.to_string()))?;

        if !matches!(parsed.scheme(), "mongodb" | "mongodb+srv") {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `mongodb` scheme; url={url}"
            )));
        }

        let client = Client::with_uri_str(url).await.map_err(error::from_mongodb)?;

        let mut driver = MongoDb::new(client, database, collection);
        driver.url = format!(
            "{}://{}/{database}.{collection}",
            parsed.scheme(),
            parsed.host_str().unwrap_or("localhost")
        );

        tracing::debug!(url = %driver.url, "connected to mongodb");

        Ok(driver)
    }

}

#[async_trait]
impl Connection for MongoDb {
    fn url(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.url)
    }

    async fn count(&self, filter: &Filter) -> Result<u64> {
        op::count::execute(self, filter).await
    }

    async fn distinct(&self, path: &Path, filter: &Filter) -> Result<Vec<Value>> {
        op::distinct::execute(self, path, filter).await
    }

    async fn aggregate(&self, pipeline: &Pipeline) -> Result<Vec<Document>> {
        op::aggregate::execute(self, pipeline).await
    }

    async fn close(&self) {
        tracing::debug!(url = %self.url, "shutting down mongodb client");
        self.client.clone().shutdown().await;
    }
}
