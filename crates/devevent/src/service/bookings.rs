use chrono::Utc;
use uuid::Uuid;

use devevent_core::booking::{
    prepare_booking, requires_event_check, Booking, BookingError, CreateBookingRequest,
    UpdateBookingRequest,
};
use devevent_core::storage::{BookingRepository, EventRepository};

use super::error::ServiceError;

/// Validates and stores a new booking.
///
/// The referenced event must exist; otherwise nothing is written.
pub async fn create_booking(
    events: &dyn EventRepository,
    bookings: &dyn BookingRepository,
    request: CreateBookingRequest,
) -> Result<Booking, ServiceError> {
    let mut booking = request.into_booking(Utc::now());
    prepare_booking(&mut booking)?;
    check_event_reference(events, &booking, None).await?;

    bookings.create_booking(&booking).await?;

    tracing::info!(booking_id = %booking.id, event_id = %booking.event_id, "Created booking");
    Ok(booking)
}

/// Applies a partial update to a stored booking.
///
/// The event reference is only looked up again when it changed.
pub async fn update_booking(
    events: &dyn EventRepository,
    bookings: &dyn BookingRepository,
    id: Uuid,
    request: UpdateBookingRequest,
) -> Result<Booking, ServiceError> {
    let persisted = bookings
        .get_booking(id)
        .await?
        .ok_or_else(|| ServiceError::NotFound {
            entity_type: "Booking",
            id: id.to_string(),
        })?;

    let mut booking = persisted.clone();
    request.apply_to(&mut booking);
    prepare_booking(&mut booking)?;
    check_event_reference(events, &booking, Some(&persisted)).await?;
    booking.touch(Utc::now());

    bookings.update_booking(&booking).await?;

    tracing::info!(booking_id = %id, event_id = %booking.event_id, "Updated booking");
    Ok(booking)
}

/// Lists the bookings of an event, oldest first.
pub async fn bookings_for_event(
    bookings: &dyn BookingRepository,
    event_id: Uuid,
) -> Result<Vec<Booking>, ServiceError> {
    Ok(bookings.get_bookings_for_event(event_id).await?)
}

/// Counts the bookings of an event.
pub async fn booking_count(
    bookings: &dyn BookingRepository,
    event_id: Uuid,
) -> Result<u64, ServiceError> {
    Ok(bookings.count_bookings_for_event(event_id).await?)
}

async fn check_event_reference(
    events: &dyn EventRepository,
    booking: &Booking,
    persisted: Option<&Booking>,
) -> Result<(), ServiceError> {
    if !requires_event_check(booking, persisted) {
        return Ok(());
    }
    if events.get_event(booking.event_id).await?.is_none() {
        tracing::warn!(event_id = %booking.event_id, "Booking references a missing event");
        return Err(BookingError::EventNotFound(booking.event_id).into());
    }
    Ok(())
}
