mod error;
mod mock_data;
mod operations;
mod requests;
mod types;

pub use error::EventError;
pub use mock_data::{generate_seed_events, sample_event_request};
pub use operations::{prepare_event, similar_events, sort_events_newest_first};
pub use requests::{CreateEventRequest, UpdateEventRequest};
pub use types::Event;
