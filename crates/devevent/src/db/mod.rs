//! Database connection management.
//!
//! The [`ConnectionCache`] memoizes a single connection handle per process (or
//! per application state it is injected into) and collapses concurrent
//! connection attempts into one shared in-flight future.

mod connection;

pub use connection::{ConnectionCache, Connector};
