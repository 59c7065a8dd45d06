use super::pipeline_documents;
use crate::{error::from_mongodb, value, MongoDb};
use futures::stream::TryStreamExt;
use tastegap_core::{query::Pipeline, Document, Result};

pub(crate) async fn execute(driver: &MongoDb, pipeline: &Pipeline) -> Result<Vec<Document>> {
    let stages = pipeline_documents(pipeline);
    tracing::debug!(?stages, "aggregate");

    let cursor = driver
        .collection
        .aggregate(stages)
        .await
        .map_err(from_mongodb)?;

    let docs: Vec<bson::Document> = cursor.try_collect().await.map_err(from_mongodb)?;

    Ok(docs.into_iter().map(value::from_document).collect())
}
