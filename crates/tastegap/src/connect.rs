use crate::{Config, Result};

use tastegap_core::{Connection, Error};
use tastegap_driver_memory::Memory;
use url::Url;

/// Opens the collection named by `config`, picking the driver from the URL
/// scheme.
pub async fn connect(config: &Config) -> Result<Box<dyn Connection>> {
    let url = Url::parse(&config.url)
        .map_err(|err| Error::invalid_connection_url(format!("{err}; url={}", config.url)))?;

    let conn = match url.scheme() {
        "mongodb" | "mongodb+srv" => connect_mongodb(config).await?,
        "memory" => Box::new(Memory::connect(&config.url)?) as Box<dyn Connection>,
        scheme => {
            return Err(Error::invalid_connection_url(format!(
                "unsupported database; scheme={scheme}; url={}",
                config.url
            )))
        }
    };

    tracing::info!(url = %conn.url(), "connected");
    Ok(conn)
}

#[cfg(feature = "mongodb")]
async fn connect_mongodb(config: &Config) -> Result<Box<dyn Connection>> {
    let driver = tastegap_driver_mongodb::MongoDb::connect(
        &config.url,
        &config.database,
        &config.collection,
    )
    .await?;
    Ok(Box::new(driver))
}

#[cfg(not(feature = "mongodb"))]
async fn connect_mongodb(_config: &Config) -> Result<Box<dyn Connection>> {
    Err(Error::invalid_connection_url("`mongodb` feature not enabled"))
}
