use super::filter_document;
use crate::{error::from_mongodb, MongoDb};
use tastegap_core::{query::Filter, Result};

pub(crate) async fn execute(driver: &MongoDb, filter: &Filter) -> Result<u64> {
    let filter = filter_document(filter);
    tracing::debug!(%filter, "count_documents");

    driver
        .collection
        .count_documents(filter)
        .await
        .map_err(from_mongodb)
}
