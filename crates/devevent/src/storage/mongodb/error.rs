//! MongoDB error mapping.
//!
//! Maps driver errors to `RepositoryError` from `devevent_core::storage`.

use std::fmt::Display;

use devevent_core::storage::RepositoryError;
use mongodb::error::{Error, ErrorKind, WriteFailure};

/// Server error code for a unique index violation.
const DUPLICATE_KEY: i32 = 11000;

/// Returns true if the error is a unique index violation.
pub fn is_duplicate_key(err: &Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY
        }
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY,
        _ => false,
    }
}

/// Map a read/query error to RepositoryError.
pub fn map_query_error(err: Error) -> RepositoryError {
    match err.kind.as_ref() {
        ErrorKind::ServerSelection { .. }
        | ErrorKind::Io(_)
        | ErrorKind::ConnectionPoolCleared { .. }
        | ErrorKind::Authentication { .. } => RepositoryError::ConnectionFailed(err.to_string()),
        ErrorKind::BsonSerialization(_) | ErrorKind::BsonDeserialization(_) => {
            RepositoryError::Serialization(err.to_string())
        }
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

/// Map a write error to RepositoryError.
///
/// Duplicate key errors become `AlreadyExists` with the given identifier.
pub fn map_write_error(
    err: Error,
    entity_type: &'static str,
    id: impl Into<String>,
) -> RepositoryError {
    if is_duplicate_key(&err) {
        return RepositoryError::AlreadyExists {
            entity_type,
            id: id.into(),
        };
    }
    map_query_error(err)
}

/// Map a generic connection/config error to RepositoryError.
pub fn map_connection_error(err: impl Display) -> RepositoryError {
    RepositoryError::ConnectionFailed(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn io_error() -> Error {
        Error::from(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        ))
    }

    #[test]
    fn test_io_error_is_not_duplicate_key() {
        assert!(!is_duplicate_key(&io_error()));
    }

    #[test]
    fn test_write_error_falls_through_to_connection_failed() {
        let mapped = map_write_error(io_error(), "Event", "rustconf");

        assert!(matches!(mapped, RepositoryError::ConnectionFailed(_)));
        assert!(!mapped.is_conflict());
    }

    #[test]
    fn test_other_errors_map_to_query_failed() {
        let mapped = map_write_error(Error::custom("unexpected"), "Booking", "id");

        assert!(matches!(mapped, RepositoryError::QueryFailed(_)));
    }

    #[test]
    fn test_connection_error_keeps_message() {
        assert_eq!(
            map_connection_error("server selection timeout"),
            RepositoryError::ConnectionFailed("server selection timeout".to_string())
        );
    }
}
