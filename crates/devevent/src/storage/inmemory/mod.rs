//! In-memory storage backend for testing.
//!
//! This module provides an in-memory implementation of the repository traits
//! that stores all data in HashMaps wrapped in `Arc<RwLock<_>>`. The unique
//! slug index of the real store is emulated so uniqueness conflicts behave
//! the same way.
//!
//! # Example
//!
//! ```rust,ignore
//! use devevent::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
