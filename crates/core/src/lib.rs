//! Functional core for devevent.
//!
//! Pure data types, normalization rules and validation hooks for the Event and
//! Booking documents, plus the repository traits the storage backends implement.
//! Nothing in this crate performs I/O.

pub mod booking;
pub mod event;
pub mod normalize;
pub mod storage;
