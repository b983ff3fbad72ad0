use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A publishable event.
///
/// `slug`, `date` and `time` are derived/normalized by
/// [`prepare_event`](super::prepare_event) before every write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    /// URL-safe identifier derived from the title. Unique across events.
    pub slug: String,
    pub description: String,
    pub overview: String,
    /// Image URL.
    pub image: String,
    pub venue: String,
    pub location: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Start time, 24-hour `HH:MM`.
    pub time: String,
    /// Attendance mode, e.g. `online`, `offline` or `hybrid`.
    pub mode: String,
    pub audience: String,
    pub agenda: Vec<String>,
    pub organizer: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Returns true if the event carries the given tag (case-insensitive).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Returns true if the two events share at least one tag.
    pub fn shares_tag_with(&self, other: &Event) -> bool {
        other.tags.iter().any(|tag| self.has_tag(tag))
    }

    /// Sets a specific ID for this event.
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Bumps `updated_at`.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::sample_event_request;

    fn event_with_tags(tags: &[&str]) -> Event {
        sample_event_request("Tagged")
            .with_tags(tags.iter().map(|t| t.to_string()).collect())
            .into_event(Utc::now())
    }

    #[test]
    fn test_has_tag_ignores_case() {
        let event = event_with_tags(&["Rust", "WebAssembly"]);

        assert!(event.has_tag("rust"));
        assert!(event.has_tag("WEBASSEMBLY"));
        assert!(!event.has_tag("go"));
    }

    #[test]
    fn test_shares_tag_with() {
        let rust = event_with_tags(&["rust", "systems"]);
        let wasm = event_with_tags(&["wasm", "Rust"]);
        let react = event_with_tags(&["react"]);

        assert!(rust.shares_tag_with(&wasm));
        assert!(!rust.shares_tag_with(&react));
    }

    #[test]
    fn test_serializes_camel_case_timestamps() {
        let event = event_with_tags(&["rust"]);
        let json = serde_json::to_value(&event).unwrap();

        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("created_at").is_none());
    }
}
