use thiserror::Error;

use crate::normalize::NormalizeError;

/// Errors raised while validating or normalizing an event before it is written.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    #[error("Event {0} cannot be empty")]
    EmptyField(&'static str),
    #[error("Event {0} must contain at least one item")]
    EmptyList(&'static str),
    #[error("Event {0} cannot contain blank items")]
    BlankListItem(&'static str),
    #[error("Unable to derive slug from title: {0:?}")]
    SlugUnavailable(String),
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}
