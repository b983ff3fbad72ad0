use thiserror::Error;

/// Errors produced by the field normalizers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Invalid time format (expected HH:MM): {0}")]
    InvalidTimeFormat(String),
    #[error("Time out of range: {0}")]
    TimeOutOfRange(String),
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
}
