use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::types::Booking;

/// Request payload for booking a spot at an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub event_id: Uuid,
    pub email: String,
}

impl CreateBookingRequest {
    pub fn new(event_id: Uuid, email: impl Into<String>) -> Self {
        Self {
            event_id,
            email: email.into(),
        }
    }

    /// Convert into an unsaved Booking stamped with `now`.
    pub fn into_booking(self, now: DateTime<Utc>) -> Booking {
        Booking::new(self.event_id, self.email, now)
    }
}

/// Request payload for updating a booking. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UpdateBookingRequest {
    /// Create an empty update request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the booking at another event.
    pub fn with_event_id(mut self, event_id: Uuid) -> Self {
        self.event_id = Some(event_id);
        self
    }

    /// Set the email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Apply updates to an existing booking.
    pub fn apply_to(self, booking: &mut Booking) {
        if let Some(event_id) = self.event_id {
            booking.event_id = event_id;
        }
        if let Some(email) = self.email {
            booking.email = email;
        }
    }
}
