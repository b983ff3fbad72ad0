//! MongoDB storage backend implementation.
//!
//! This module provides a MongoDB-based implementation of the repository traits
//! using the official `mongodb` driver. Events and bookings live in their own
//! collections; the unique `slug` index is what enforces slug uniqueness.

mod connector;
mod conversions;
mod error;
mod repository;

pub use connector::MongoConnector;
pub use repository::MongoRepository;
