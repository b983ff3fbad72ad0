use thiserror::Error;
use uuid::Uuid;

use crate::normalize::NormalizeError;

/// Errors raised while validating a booking before it is written.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
    /// The referenced event does not exist (referential integrity).
    #[error("Event not found: {0}")]
    EventNotFound(Uuid),
}
