use chrono::Utc;
use uuid::Uuid;

use devevent_core::event::{self, prepare_event, CreateEventRequest, Event, UpdateEventRequest};
use devevent_core::storage::EventRepository;

use super::error::ServiceError;

/// Validates and stores a new event.
///
/// A duplicate slug is reported by the store as a uniqueness conflict.
pub async fn create_event(
    repo: &dyn EventRepository,
    request: CreateEventRequest,
) -> Result<Event, ServiceError> {
    let mut event = request.into_event(Utc::now());
    prepare_event(&mut event, None)?;

    repo.create_event(&event).await?;

    tracing::info!(event_id = %event.id, slug = %event.slug, "Created event");
    Ok(event)
}

/// Applies a partial update to a stored event.
///
/// Slug, date and time are only re-derived when their source field changed.
pub async fn update_event(
    repo: &dyn EventRepository,
    id: Uuid,
    request: UpdateEventRequest,
) -> Result<Event, ServiceError> {
    let persisted = repo
        .get_event(id)
        .await?
        .ok_or_else(|| ServiceError::NotFound {
            entity_type: "Event",
            id: id.to_string(),
        })?;

    let mut event = persisted.clone();
    request.apply_to(&mut event);
    prepare_event(&mut event, Some(&persisted))?;
    event.touch(Utc::now());

    repo.update_event(&event).await?;

    tracing::info!(event_id = %id, slug = %event.slug, "Updated event");
    Ok(event)
}

/// Deletes an event. Bookings referencing it are left in place.
pub async fn delete_event(repo: &dyn EventRepository, id: Uuid) -> Result<(), ServiceError> {
    repo.delete_event(id).await?;
    tracing::info!(event_id = %id, "Deleted event");
    Ok(())
}

/// Looks an event up by slug.
pub async fn get_event_by_slug(
    repo: &dyn EventRepository,
    slug: &str,
) -> Result<Event, ServiceError> {
    repo.get_event_by_slug(slug)
        .await?
        .ok_or_else(|| ServiceError::NotFound {
            entity_type: "Event",
            id: slug.to_string(),
        })
}

/// Lists every event, newest first.
pub async fn list_events(repo: &dyn EventRepository) -> Result<Vec<Event>, ServiceError> {
    Ok(repo.list_events().await?)
}

/// Returns up to `limit` events sharing a tag with the event at `slug`.
pub async fn similar_events(
    repo: &dyn EventRepository,
    slug: &str,
    limit: usize,
) -> Result<Vec<Event>, ServiceError> {
    let target = get_event_by_slug(repo, slug).await?;
    let candidates = repo.find_events_by_tags(&target.tags, target.id).await?;

    let similar = event::similar_events(&candidates, &target, limit);
    tracing::debug!(slug, count = similar.len(), "Found similar events");
    Ok(similar.into_iter().cloned().collect())
}
