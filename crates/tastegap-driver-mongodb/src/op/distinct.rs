use super::filter_document;
use crate::{error::from_mongodb, value, MongoDb};
use tastegap_core::{query::Filter, Path, Result, Value};

pub(crate) async fn execute(driver: &MongoDb, path: &Path, filter: &Filter) -> Result<Vec<Value>> {
    let field = path.to_string();
    let filter = filter_document(filter);
    tracing::debug!(%field, %filter, "distinct");

    let values = driver
        .collection
        .distinct(field, filter)
        .await
        .map_err(from_mongodb)?;

    Ok(values.into_iter().map(value::from_bson).collect())
}
