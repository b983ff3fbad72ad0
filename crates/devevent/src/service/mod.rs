//! Persistence call sites.
//!
//! Every write goes through these functions: they stamp timestamps, run the
//! core validation hooks and only then hand the record to a repository.

mod bookings;
mod error;
mod events;

pub use bookings::{booking_count, bookings_for_event, create_booking, update_booking};
pub use error::ServiceError;
pub use events::{
    create_event, delete_event, get_event_by_slug, list_events, similar_events, update_event,
};
