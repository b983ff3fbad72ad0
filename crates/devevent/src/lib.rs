//! DevEvent data layer shell.
//!
//! Owns everything that performs I/O: configuration, the memoized database
//! connection, storage backends and the persistence service that runs the
//! validation hooks from `devevent_core` before every write.

pub mod config;
pub mod db;
pub mod service;
pub mod state;
pub mod storage;

pub use config::{Config, ConfigError};
pub use state::AppState;
