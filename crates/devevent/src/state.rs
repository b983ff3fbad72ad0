//! Application state with repository-based storage.
//!
//! The state is built once at startup and handed to every call site, which
//! reach storage through the repository trait objects it holds.

use std::sync::Arc;

use devevent_core::storage::{BookingRepository, EventRepository};

use crate::storage::InMemoryRepository;

#[cfg(feature = "mongodb")]
use crate::{
    config::Config,
    db::ConnectionCache,
    storage::{MongoConnector, MongoRepository},
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Event storage.
    pub event_repo: Arc<dyn EventRepository>,
    /// Booking storage.
    pub booking_repo: Arc<dyn BookingRepository>,
    /// Connection cache backing the repositories, if any.
    #[cfg(feature = "mongodb")]
    connection: Option<Arc<ConnectionCache<MongoConnector>>>,
}

impl AppState {
    /// Builds state around the given repositories.
    pub fn new(
        event_repo: Arc<dyn EventRepository>,
        booking_repo: Arc<dyn BookingRepository>,
    ) -> Self {
        Self {
            event_repo,
            booking_repo,
            #[cfg(feature = "mongodb")]
            connection: None,
        }
    }

    /// Builds state backed by a fresh in-memory repository.
    pub fn in_memory() -> Self {
        let repo = Arc::new(InMemoryRepository::new());
        Self::new(repo.clone(), repo)
    }

    /// Connects to MongoDB and builds state backed by it.
    ///
    /// Goes through a [`ConnectionCache`], so the returned state shares one
    /// resolved handle. Indexes are ensured before the state is handed out.
    #[cfg(feature = "mongodb")]
    pub async fn connect(config: &Config) -> devevent_core::storage::Result<Self> {
        let cache = Arc::new(ConnectionCache::new(MongoConnector::from_config(config)));
        Self::from_cache(cache).await
    }

    /// Builds state from an existing connection cache.
    #[cfg(feature = "mongodb")]
    pub async fn from_cache(
        cache: Arc<ConnectionCache<MongoConnector>>,
    ) -> devevent_core::storage::Result<Self> {
        let database = cache.connect().await?;
        let repo = Arc::new(MongoRepository::new(&database));
        repo.ensure_indexes().await?;

        Ok(Self {
            event_repo: repo.clone(),
            booking_repo: repo,
            connection: Some(cache),
        })
    }

    /// The connection cache backing this state, if it is database backed.
    #[cfg(feature = "mongodb")]
    pub fn connection(&self) -> Option<&ConnectionCache<MongoConnector>> {
        self.connection.as_deref()
    }
}
