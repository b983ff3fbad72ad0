//! MongoDB connector used by the connection cache.

use std::time::Duration;

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};

use devevent_core::storage::Result;

use super::error::map_connection_error;
use crate::config::Config;
use crate::db::Connector;

/// Opens a MongoDB client and selects the configured database.
///
/// The driver connects lazily, so every attempt ends with a `ping`: an
/// unreachable server fails the attempt right away instead of surfacing on
/// the first operation.
#[derive(Clone)]
pub struct MongoConnector {
    uri: String,
    database: String,
    app_name: String,
    timeout: Duration,
}

impl MongoConnector {
    /// Creates a connector from application configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            uri: config.database_url.clone(),
            database: config.database_name.clone(),
            app_name: config.app_name.clone(),
            timeout: config.connect_timeout(),
        }
    }
}

// The URI may carry credentials, keep it out of debug output.
impl std::fmt::Debug for MongoConnector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MongoConnector")
            .field("database", &self.database)
            .field("app_name", &self.app_name)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Connector for MongoConnector {
    type Handle = Database;

    async fn connect(&self) -> Result<Database> {
        let mut options = ClientOptions::parse(&self.uri)
            .await
            .map_err(map_connection_error)?;
        options.app_name = Some(self.app_name.clone());
        options.connect_timeout = Some(self.timeout);
        options.server_selection_timeout = Some(self.timeout);

        let client = Client::with_options(options).map_err(map_connection_error)?;
        let database = client.database(&self.database);

        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(map_connection_error)?;

        tracing::info!(database = %self.database, "Connected to MongoDB");
        Ok(database)
    }
}
