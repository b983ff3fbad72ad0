//! MongoDB repository implementation.
//!
//! Implements the repository traits from `devevent_core::storage` using MongoDB.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::options::IndexOptions;
use mongodb::{Collection, Database, IndexModel};
use uuid::Uuid;

use devevent_core::booking::Booking;
use devevent_core::event::Event;
use devevent_core::storage::{BookingRepository, EventRepository, RepositoryError, Result};

use super::conversions::{
    booking_to_document, document_to_booking, document_to_event, event_bookings_filter,
    event_to_document, id_filter, tags_filter, BOOKINGS_COLLECTION, EVENTS_COLLECTION,
};
use super::error::{map_query_error, map_write_error};

/// MongoDB-based repository implementation.
///
/// Holds typed handles to the `events` and `bookings` collections of one
/// database. Cloning is cheap; the driver pools connections internally.
#[derive(Debug, Clone)]
pub struct MongoRepository {
    events: Collection<Document>,
    bookings: Collection<Document>,
}

impl MongoRepository {
    /// Creates a new repository on the given database.
    pub fn new(database: &Database) -> Self {
        Self {
            events: database.collection(EVENTS_COLLECTION),
            bookings: database.collection(BOOKINGS_COLLECTION),
        }
    }

    /// Creates the indexes the repositories rely on.
    ///
    /// The unique `slug` index is what rejects duplicate slugs. Creating an
    /// index that already exists is a no-op on the server.
    pub async fn ensure_indexes(&self) -> Result<()> {
        let slug_index = IndexModel::builder()
            .keys(doc! { "slug": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        let tags_index = IndexModel::builder().keys(doc! { "tags": 1 }).build();
        let event_id_index = IndexModel::builder().keys(doc! { "eventId": 1 }).build();

        self.events
            .create_indexes([slug_index, tags_index])
            .await
            .map_err(map_query_error)?;
        self.bookings
            .create_index(event_id_index)
            .await
            .map_err(map_query_error)?;

        tracing::debug!("MongoDB indexes ensured");
        Ok(())
    }

    async fn find_events(&self, filter: Document) -> Result<Vec<Event>> {
        let documents: Vec<Document> = self
            .events
            .find(filter)
            .sort(doc! { "createdAt": -1 })
            .await
            .map_err(map_query_error)?
            .try_collect()
            .await
            .map_err(map_query_error)?;

        documents.iter().map(document_to_event).collect()
    }
}

// ============================================================================
// EventRepository implementation
// ============================================================================

#[async_trait]
impl EventRepository for MongoRepository {
    async fn get_event(&self, id: Uuid) -> Result<Option<Event>> {
        let document = self
            .events
            .find_one(id_filter(id))
            .await
            .map_err(map_query_error)?;

        document.as_ref().map(document_to_event).transpose()
    }

    async fn get_event_by_slug(&self, slug: &str) -> Result<Option<Event>> {
        let document = self
            .events
            .find_one(doc! { "slug": slug })
            .await
            .map_err(map_query_error)?;

        document.as_ref().map(document_to_event).transpose()
    }

    async fn list_events(&self) -> Result<Vec<Event>> {
        self.find_events(Document::new()).await
    }

    async fn find_events_by_tags(&self, tags: &[String], exclude_id: Uuid) -> Result<Vec<Event>> {
        if tags.is_empty() {
            return Ok(Vec::new());
        }
        self.find_events(tags_filter(tags, exclude_id)).await
    }

    async fn create_event(&self, event: &Event) -> Result<()> {
        self.events
            .insert_one(event_to_document(event))
            .await
            .map_err(|e| map_write_error(e, "Event", event.slug.clone()))?;

        Ok(())
    }

    async fn update_event(&self, event: &Event) -> Result<()> {
        let result = self
            .events
            .replace_one(id_filter(event.id), event_to_document(event))
            .await
            .map_err(|e| map_write_error(e, "Event", event.slug.clone()))?;

        if result.matched_count == 0 {
            return Err(RepositoryError::NotFound {
                entity_type: "Event",
                id: event.id.to_string(),
            });
        }
        Ok(())
    }

    async fn delete_event(&self, id: Uuid) -> Result<()> {
        let result = self
            .events
            .delete_one(id_filter(id))
            .await
            .map_err(map_query_error)?;

        if result.deleted_count == 0 {
            return Err(RepositoryError::NotFound {
                entity_type: "Event",
                id: id.to_string(),
            });
        }
        Ok(())
    }
}

// ============================================================================
// BookingRepository implementation
// ============================================================================

#[async_trait]
impl BookingRepository for MongoRepository {
    async fn get_booking(&self, id: Uuid) -> Result<Option<Booking>> {
        let document = self
            .bookings
            .find_one(id_filter(id))
            .await
            .map_err(map_query_error)?;

        document.as_ref().map(document_to_booking).transpose()
    }

    async fn get_bookings_for_event(&self, event_id: Uuid) -> Result<Vec<Booking>> {
        let documents: Vec<Document> = self
            .bookings
            .find(event_bookings_filter(event_id))
            .sort(doc! { "createdAt": 1 })
            .await
            .map_err(map_query_error)?
            .try_collect()
            .await
            .map_err(map_query_error)?;

        documents.iter().map(document_to_booking).collect()
    }

    async fn count_bookings_for_event(&self, event_id: Uuid) -> Result<u64> {
        self.bookings
            .count_documents(event_bookings_filter(event_id))
            .await
            .map_err(map_query_error)
    }

    async fn create_booking(&self, booking: &Booking) -> Result<()> {
        self.bookings
            .insert_one(booking_to_document(booking))
            .await
            .map_err(|e| map_write_error(e, "Booking", booking.id.to_string()))?;

        Ok(())
    }

    async fn update_booking(&self, booking: &Booking) -> Result<()> {
        let result = self
            .bookings
            .replace_one(id_filter(booking.id), booking_to_document(booking))
            .await
            .map_err(|e| map_write_error(e, "Booking", booking.id.to_string()))?;

        if result.matched_count == 0 {
            return Err(RepositoryError::NotFound {
                entity_type: "Booking",
                id: booking.id.to_string(),
            });
        }
        Ok(())
    }

    async fn delete_booking(&self, id: Uuid) -> Result<()> {
        let result = self
            .bookings
            .delete_one(id_filter(id))
            .await
            .map_err(map_query_error)?;

        if result.deleted_count == 0 {
            return Err(RepositoryError::NotFound {
                entity_type: "Booking",
                id: id.to_string(),
            });
        }
        Ok(())
    }
}
