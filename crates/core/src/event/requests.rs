//! Request payloads for event operations.
//!
//! Pure data types an upstream web layer deserializes; they carry raw user
//! input, which [`prepare_event`](super::prepare_event) normalizes before a write.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::types::Event;

/// Request payload for creating a new event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub title: String,
    pub description: String,
    pub overview: String,
    pub image: String,
    pub venue: String,
    pub location: String,
    pub date: String,
    pub time: String,
    pub mode: String,
    pub audience: String,
    pub agenda: Vec<String>,
    pub organizer: String,
    pub tags: Vec<String>,
}

impl CreateEventRequest {
    /// Set the event title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the raw date input.
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Set the raw time input.
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    /// Set the agenda items.
    pub fn with_agenda(mut self, agenda: Vec<String>) -> Self {
        self.agenda = agenda;
        self
    }

    /// Set the tags.
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Convert into an unsaved Event stamped with `now`.
    ///
    /// The slug is left empty; it is derived when the event is prepared for saving.
    pub fn into_event(self, now: DateTime<Utc>) -> Event {
        Event {
            id: Uuid::new_v4(),
            title: self.title,
            slug: String::new(),
            description: self.description,
            overview: self.overview,
            image: self.image,
            venue: self.venue,
            location: self.location,
            date: self.date,
            time: self.time,
            mode: self.mode,
            audience: self.audience,
            agenda: self.agenda,
            organizer: self.organizer,
            tags: self.tags,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Request payload for updating an event. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agenda: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl UpdateEventRequest {
    /// Create an empty update request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the event title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the event description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the raw date input.
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Set the raw time input.
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    /// Set the tags.
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Returns true if no field would change.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply updates to an existing event.
    pub fn apply_to(self, event: &mut Event) {
        fn set<T>(field: &mut T, value: Option<T>) {
            if let Some(value) = value {
                *field = value;
            }
        }

        set(&mut event.title, self.title);
        set(&mut event.description, self.description);
        set(&mut event.overview, self.overview);
        set(&mut event.image, self.image);
        set(&mut event.venue, self.venue);
        set(&mut event.location, self.location);
        set(&mut event.date, self.date);
        set(&mut event.time, self.time);
        set(&mut event.mode, self.mode);
        set(&mut event.audience, self.audience);
        set(&mut event.agenda, self.agenda);
        set(&mut event.organizer, self.organizer);
        set(&mut event.tags, self.tags);
    }
}
