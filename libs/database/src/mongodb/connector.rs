use mongodb::{
    Client, Database,
    bson::doc,
    options::ClientOptions,
};
use std::time::Duration;
use tracing::info;

use super::MongoConfig;
use super::config::DEFAULT_DATABASE;
use crate::common::{DatabaseError, DatabaseResult};

/// Connect using a MongoConfig and verify the server answers a ping.
///
/// There is no retry: an unreachable server is reported on the first failure.
///
/// ```ignore
/// use database::mongodb::{MongoConfig, connect_from_config};
///
/// let config = MongoConfig::with_database("mongodb://localhost:27017", "inventory");
/// let client = connect_from_config(&config).await?;
/// ```
pub async fn connect_from_config(config: &MongoConfig) -> DatabaseResult<Client> {
    info!("Attempting to connect to MongoDB at {}", config.redacted_url());

    let mut options = ClientOptions::parse(&config.url).await?;

    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_secs(config.server_selection_timeout_secs));

    if let Some(ref app_name) = config.app_name {
        options.app_name = Some(app_name.clone());
    }

    let client = Client::with_options(options)?;

    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

    info!("Successfully connected to MongoDB");
    Ok(client)
}

/// Pick the database to use: the configured name, then the one named in the
/// connection string, then [`DEFAULT_DATABASE`].
pub fn resolve_database(client: &Client, config: &MongoConfig) -> Database {
    match config.database.as_deref() {
        Some(name) => client.database(name),
        None => client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DATABASE)),
    }
}
