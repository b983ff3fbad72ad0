use thiserror::Error;

use devevent_core::booking::BookingError;
use devevent_core::event::EventError;
use devevent_core::storage::RepositoryError;

/// Errors returned by the persistence service.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("Invalid event: {0}")]
    InvalidEvent(#[from] EventError),

    #[error("Invalid booking: {0}")]
    InvalidBooking(#[from] BookingError),

    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Store errors, including uniqueness conflicts and connectivity failures.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ServiceError {
    /// Returns true if the store rejected the write as a uniqueness conflict.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Repository(err) if err.is_conflict())
    }
}
