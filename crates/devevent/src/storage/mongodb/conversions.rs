//! BSON document conversion functions.
//!
//! Pure functions for converting between MongoDB documents and domain types.
//! These are testable in isolation without a running server.

use chrono::{DateTime, Utc};
use mongodb::bson::{doc, Bson, DateTime as BsonDateTime, Document, Regex};
use uuid::Uuid;

use devevent_core::booking::Booking;
use devevent_core::event::Event;
use devevent_core::storage::RepositoryError;

pub const EVENTS_COLLECTION: &str = "events";
pub const BOOKINGS_COLLECTION: &str = "bookings";

// ============================================================================
// Event conversions
// ============================================================================

/// Convert an Event to a MongoDB document.
pub fn event_to_document(event: &Event) -> Document {
    doc! {
        "_id": event.id.to_string(),
        "title": event.title.as_str(),
        "slug": event.slug.as_str(),
        "description": event.description.as_str(),
        "overview": event.overview.as_str(),
        "image": event.image.as_str(),
        "venue": event.venue.as_str(),
        "location": event.location.as_str(),
        "date": event.date.as_str(),
        "time": event.time.as_str(),
        "mode": event.mode.as_str(),
        "audience": event.audience.as_str(),
        "agenda": event.agenda.clone(),
        "organizer": event.organizer.as_str(),
        "tags": event.tags.clone(),
        "createdAt": to_bson_datetime(event.created_at),
        "updatedAt": to_bson_datetime(event.updated_at),
    }
}

/// Convert a MongoDB document to Event.
pub fn document_to_event(document: &Document) -> Result<Event, RepositoryError> {
    Ok(Event {
        id: get_uuid(document, "_id")?,
        title: get_string(document, "title")?,
        slug: get_string(document, "slug")?,
        description: get_string(document, "description")?,
        overview: get_string(document, "overview")?,
        image: get_string(document, "image")?,
        venue: get_string(document, "venue")?,
        location: get_string(document, "location")?,
        date: get_string(document, "date")?,
        time: get_string(document, "time")?,
        mode: get_string(document, "mode")?,
        audience: get_string(document, "audience")?,
        agenda: get_string_list(document, "agenda")?,
        organizer: get_string(document, "organizer")?,
        tags: get_string_list(document, "tags")?,
        created_at: get_datetime(document, "createdAt")?,
        updated_at: get_datetime(document, "updatedAt")?,
    })
}

// ============================================================================
// Booking conversions
// ============================================================================

/// Convert a Booking to a MongoDB document.
pub fn booking_to_document(booking: &Booking) -> Document {
    doc! {
        "_id": booking.id.to_string(),
        "eventId": booking.event_id.to_string(),
        "email": booking.email.as_str(),
        "createdAt": to_bson_datetime(booking.created_at),
        "updatedAt": to_bson_datetime(booking.updated_at),
    }
}

/// Convert a MongoDB document to Booking.
pub fn document_to_booking(document: &Document) -> Result<Booking, RepositoryError> {
    Ok(Booking {
        id: get_uuid(document, "_id")?,
        event_id: get_uuid(document, "eventId")?,
        email: get_string(document, "email")?,
        created_at: get_datetime(document, "createdAt")?,
        updated_at: get_datetime(document, "updatedAt")?,
    })
}

// ============================================================================
// Filters
// ============================================================================

/// Filter matching a document by its ID.
pub fn id_filter(id: Uuid) -> Document {
    doc! { "_id": id.to_string() }
}

/// Filter matching bookings of one event.
pub fn event_bookings_filter(event_id: Uuid) -> Document {
    doc! { "eventId": event_id.to_string() }
}

/// Filter matching events carrying any of `tags`, except `exclude_id`.
///
/// Tags are stored as given, so each one is matched by an anchored,
/// case-insensitive regex on its escaped text.
pub fn tags_filter(tags: &[String], exclude_id: Uuid) -> Document {
    let tags: Vec<Bson> = tags.iter().map(|tag| tag_pattern(tag)).collect();
    doc! {
        "_id": { "$ne": exclude_id.to_string() },
        "tags": { "$in": tags },
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Case-insensitive exact match for one tag.
fn tag_pattern(tag: &str) -> Bson {
    Bson::RegularExpression(Regex {
        pattern: format!("^{}$", regex::escape(tag)),
        options: "i".to_string(),
    })
}

/// Stored timestamps have millisecond precision.
fn to_bson_datetime(value: DateTime<Utc>) -> BsonDateTime {
    BsonDateTime::from_millis(value.timestamp_millis())
}

/// Get a required string field.
fn get_string(document: &Document, key: &str) -> Result<String, RepositoryError> {
    document
        .get_str(key)
        .map(|s| s.to_string())
        .map_err(|_| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get a required array of strings.
fn get_string_list(document: &Document, key: &str) -> Result<Vec<String>, RepositoryError> {
    let array = document
        .get_array(key)
        .map_err(|_| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))?;
    array
        .iter()
        .map(|value| match value {
            Bson::String(s) => Ok(s.clone()),
            other => Err(RepositoryError::InvalidData(format!(
                "Invalid item in {}: {}",
                key, other
            ))),
        })
        .collect()
}

/// Get a required UUID field stored as a string.
fn get_uuid(document: &Document, key: &str) -> Result<Uuid, RepositoryError> {
    let s = get_string(document, key)?;
    Uuid::parse_str(&s)
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid UUID {}: {}", key, e)))
}

/// Get a required BSON datetime field.
fn get_datetime(document: &Document, key: &str) -> Result<DateTime<Utc>, RepositoryError> {
    let value = document
        .get_datetime(key)
        .map_err(|_| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))?;
    DateTime::from_timestamp_millis(value.timestamp_millis()).ok_or_else(|| {
        RepositoryError::InvalidData(format!("Datetime out of range {}: {}", key, value))
    })
}
