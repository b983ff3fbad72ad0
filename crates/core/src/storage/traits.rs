use async_trait::async_trait;
use uuid::Uuid;

use crate::booking::Booking;
use crate::event::Event;

use super::Result;

/// Repository for event documents.
///
/// Implementations must enforce slug uniqueness and report a duplicate as
/// [`RepositoryError::AlreadyExists`](super::RepositoryError::AlreadyExists).
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Gets an event by its ID.
    async fn get_event(&self, id: Uuid) -> Result<Option<Event>>;

    /// Gets an event by its slug.
    async fn get_event_by_slug(&self, slug: &str) -> Result<Option<Event>>;

    /// Lists all events, most recently created first.
    async fn list_events(&self) -> Result<Vec<Event>>;

    /// Gets events carrying any of the given tags, excluding one event.
    async fn find_events_by_tags(&self, tags: &[String], exclude_id: Uuid) -> Result<Vec<Event>>;

    /// Creates a new event.
    async fn create_event(&self, event: &Event) -> Result<()>;

    /// Updates an existing event.
    async fn update_event(&self, event: &Event) -> Result<()>;

    /// Deletes an event by its ID.
    async fn delete_event(&self, id: Uuid) -> Result<()>;
}

/// Repository for booking documents.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Gets a booking by its ID.
    async fn get_booking(&self, id: Uuid) -> Result<Option<Booking>>;

    /// Gets all bookings referencing an event.
    async fn get_bookings_for_event(&self, event_id: Uuid) -> Result<Vec<Booking>>;

    /// Counts the bookings referencing an event.
    async fn count_bookings_for_event(&self, event_id: Uuid) -> Result<u64>;

    /// Creates a new booking.
    async fn create_booking(&self, booking: &Booking) -> Result<()>;

    /// Updates an existing booking.
    async fn update_booking(&self, booking: &Booking) -> Result<()>;

    /// Deletes a booking by its ID.
    async fn delete_booking(&self, id: Uuid) -> Result<()>;
}
