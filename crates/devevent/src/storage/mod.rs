//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository traits
//! defined in `devevent_core::storage`.
//!
//! # Backends
//!
//! - `inmemory` (always available): HashMaps behind `tokio::sync::RwLock`, for
//!   tests and local development
//! - `mongodb` (feature `mongodb`, default): MongoDB via the official driver
//!
//! # Examples
//!
//! Build without the MongoDB backend:
//! ```bash
//! cargo build -p devevent --no-default-features
//! ```

pub mod inmemory;

#[cfg(feature = "mongodb")]
pub mod mongodb;

pub use inmemory::InMemoryRepository;

#[cfg(feature = "mongodb")]
pub use self::mongodb::{MongoConnector, MongoRepository};
