//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use devevent_core::booking::Booking;
use devevent_core::event::{sort_events_newest_first, Event};
use devevent_core::storage::{BookingRepository, EventRepository, RepositoryError, Result};

/// In-memory storage backend for testing.
///
/// Uses HashMaps wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    events: Arc<RwLock<HashMap<Uuid, Event>>>,
    bookings: Arc<RwLock<HashMap<Uuid, Booking>>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            events: Arc::new(RwLock::new(HashMap::new())),
            bookings: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

fn slug_taken(events: &HashMap<Uuid, Event>, event: &Event) -> bool {
    events
        .values()
        .any(|other| other.id != event.id && other.slug == event.slug)
}

#[async_trait]
impl EventRepository for InMemoryRepository {
    async fn get_event(&self, id: Uuid) -> Result<Option<Event>> {
        let events = self.events.read().await;
        Ok(events.get(&id).cloned())
    }

    async fn get_event_by_slug(&self, slug: &str) -> Result<Option<Event>> {
        let events = self.events.read().await;
        Ok(events.values().find(|event| event.slug == slug).cloned())
    }

    async fn list_events(&self) -> Result<Vec<Event>> {
        let events = self.events.read().await;
        let mut list: Vec<Event> = events.values().cloned().collect();
        sort_events_newest_first(&mut list);
        Ok(list)
    }

    async fn find_events_by_tags(&self, tags: &[String], exclude_id: Uuid) -> Result<Vec<Event>> {
        let events = self.events.read().await;
        let mut matches: Vec<Event> = events
            .values()
            .filter(|event| event.id != exclude_id)
            .filter(|event| tags.iter().any(|tag| event.has_tag(tag)))
            .cloned()
            .collect();
        sort_events_newest_first(&mut matches);
        Ok(matches)
    }

    async fn create_event(&self, event: &Event) -> Result<()> {
        let mut events = self.events.write().await;
        if events.contains_key(&event.id) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Event",
                id: event.id.to_string(),
            });
        }
        if slug_taken(&events, event) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Event",
                id: event.slug.clone(),
            });
        }
        events.insert(event.id, event.clone());
        Ok(())
    }

    async fn update_event(&self, event: &Event) -> Result<()> {
        let mut events = self.events.write().await;
        if !events.contains_key(&event.id) {
            return Err(RepositoryError::NotFound {
                entity_type: "Event",
                id: event.id.to_string(),
            });
        }
        if slug_taken(&events, event) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Event",
                id: event.slug.clone(),
            });
        }
        events.insert(event.id, event.clone());
        Ok(())
    }

    async fn delete_event(&self, id: Uuid) -> Result<()> {
        let mut events = self.events.write().await;
        if events.remove(&id).is_none() {
            return Err(RepositoryError::NotFound {
                entity_type: "Event",
                id: id.to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl BookingRepository for InMemoryRepository {
    async fn get_booking(&self, id: Uuid) -> Result<Option<Booking>> {
        let bookings = self.bookings.read().await;
        Ok(bookings.get(&id).cloned())
    }

    async fn get_bookings_for_event(&self, event_id: Uuid) -> Result<Vec<Booking>> {
        let bookings = self.bookings.read().await;
        let mut list: Vec<Booking> = bookings
            .values()
            .filter(|booking| booking.event_id == event_id)
            .cloned()
            .collect();
        list.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(list)
    }

    async fn count_bookings_for_event(&self, event_id: Uuid) -> Result<u64> {
        let bookings = self.bookings.read().await;
        Ok(bookings
            .values()
            .filter(|booking| booking.event_id == event_id)
            .count() as u64)
    }

    async fn create_booking(&self, booking: &Booking) -> Result<()> {
        let mut bookings = self.bookings.write().await;
        if bookings.contains_key(&booking.id) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Booking",
                id: booking.id.to_string(),
            });
        }
        bookings.insert(booking.id, booking.clone());
        Ok(())
    }

    async fn update_booking(&self, booking: &Booking) -> Result<()> {
        let mut bookings = self.bookings.write().await;
        if !bookings.contains_key(&booking.id) {
            return Err(RepositoryError::NotFound {
                entity_type: "Booking",
                id: booking.id.to_string(),
            });
        }
        bookings.insert(booking.id, booking.clone());
        Ok(())
    }

    async fn delete_booking(&self, id: Uuid) -> Result<()> {
        let mut bookings = self.bookings.write().await;
        if bookings.remove(&id).is_none() {
            return Err(RepositoryError::NotFound {
                entity_type: "Booking",
                id: id.to_string(),
            });
        }
        Ok(())
    }
}
