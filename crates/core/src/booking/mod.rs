mod error;
mod operations;
mod requests;
mod types;

pub use error::BookingError;
pub use operations::{prepare_booking, requires_event_check};
pub use requests::{CreateBookingRequest, UpdateBookingRequest};
pub use types::Booking;
