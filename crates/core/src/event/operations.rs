use super::error::EventError;
use super::types::Event;
use crate::normalize::{normalize_date, normalize_time, slugify};

/// Validates and normalizes an event before it is written.
///
/// `persisted` is the currently stored version of the event, or `None` for a
/// new record. The slug is re-derived when the record is new or its title
/// changed; date and time are re-normalized when new or changed. Required text
/// fields are trimmed and must be non-empty; agenda and tags must be non-empty
/// with no blank items.
///
/// On error the event is left untouched.
pub fn prepare_event(event: &mut Event, persisted: Option<&Event>) -> Result<(), EventError> {
    let title = required_text("title", &event.title)?;
    let description = required_text("description", &event.description)?;
    let overview = required_text("overview", &event.overview)?;
    let image = required_text("image", &event.image)?;
    let venue = required_text("venue", &event.venue)?;
    let location = required_text("location", &event.location)?;
    let mode = required_text("mode", &event.mode)?;
    let audience = required_text("audience", &event.audience)?;
    let organizer = required_text("organizer", &event.organizer)?;
    let agenda = required_list("agenda", &event.agenda)?;
    let tags = required_list("tags", &event.tags)?;

    let slug = if persisted.is_none_or(|stored| stored.title != title) {
        let slug = slugify(&title);
        if slug.is_empty() {
            return Err(EventError::SlugUnavailable(title));
        }
        slug
    } else {
        event.slug.clone()
    };

    let date = if persisted.is_none_or(|stored| stored.date != event.date) {
        normalize_date(&event.date)?
    } else {
        event.date.clone()
    };

    let time = if persisted.is_none_or(|stored| stored.time != event.time) {
        normalize_time(&event.time)?
    } else {
        event.time.clone()
    };

    event.title = title;
    event.slug = slug;
    event.description = description;
    event.overview = overview;
    event.image = image;
    event.venue = venue;
    event.location = location;
    event.date = date;
    event.time = time;
    event.mode = mode;
    event.audience = audience;
    event.agenda = agenda;
    event.organizer = organizer;
    event.tags = tags;

    Ok(())
}

fn required_text(field: &'static str, value: &str) -> Result<String, EventError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EventError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}

fn required_list(field: &'static str, items: &[String]) -> Result<Vec<String>, EventError> {
    if items.is_empty() {
        return Err(EventError::EmptyList(field));
    }
    items
        .iter()
        .map(|item| match item.trim() {
            "" => Err(EventError::BlankListItem(field)),
            trimmed => Ok(trimmed.to_string()),
        })
        .collect()
}

/// Sorts events so the most recently created come first.
pub fn sort_events_newest_first(events: &mut [Event]) {
    events.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// Returns up to `limit` events that share a tag with `target`, newest first.
///
/// The target itself is never included.
pub fn similar_events<'a>(events: &'a [Event], target: &Event, limit: usize) -> Vec<&'a Event> {
    let mut similar: Vec<&Event> = events
        .iter()
        .filter(|event| event.id != target.id && event.shares_tag_with(target))
        .collect();
    similar.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    similar.truncate(limit);
    similar
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{sample_event_request, UpdateEventRequest};
    use crate::normalize::NormalizeError;
    use chrono::{Duration, Utc};

    fn new_event(title: &str) -> Event {
        sample_event_request(title).into_event(Utc::now())
    }

    fn saved_event(title: &str) -> Event {
        let mut event = new_event(title);
        prepare_event(&mut event, None).unwrap();
        event
    }

    #[test]
    fn test_new_event_gets_slug_and_normalized_fields() {
        let mut event = sample_event_request("Hello, World!")
            .with_date("2025-01-31T10:00:00Z")
            .with_time("9:00")
            .into_event(Utc::now());

        prepare_event(&mut event, None).unwrap();

        assert_eq!(event.slug, "hello-world");
        assert_eq!(event.date, "2025-01-31");
        assert_eq!(event.time, "09:00");
    }

    #[test]
    fn test_title_without_alphanumerics_fails() {
        let mut event = new_event("   ---   ");

        let result = prepare_event(&mut event, None);

        assert_eq!(
            result,
            Err(EventError::SlugUnavailable("---".to_string()))
        );
    }

    #[test]
    fn test_failed_hook_leaves_event_untouched() {
        let mut event = sample_event_request("  Padded Title  ")
            .with_time("25:00")
            .into_event(Utc::now());
        let before = event.clone();

        let result = prepare_event(&mut event, None);

        assert!(matches!(
            result,
            Err(EventError::Normalize(NormalizeError::TimeOutOfRange(_)))
        ));
        assert_eq!(event, before);
    }

    #[test]
    fn test_invalid_date_propagates() {
        let mut event = sample_event_request("Dated")
            .with_date("not-a-date")
            .into_event(Utc::now());

        assert!(matches!(
            prepare_event(&mut event, None),
            Err(EventError::Normalize(NormalizeError::InvalidDate(_)))
        ));
    }

    #[test]
    fn test_required_fields_are_trimmed_and_tags_keep_case() {
        let mut event = new_event("  Rust Meetup  ");
        event.venue = "  Main Hall ".to_string();
        event.tags = vec![" Rust ".to_string()];

        prepare_event(&mut event, None).unwrap();

        assert_eq!(event.title, "Rust Meetup");
        assert_eq!(event.venue, "Main Hall");
        assert_eq!(event.tags, vec!["Rust".to_string()]);
    }

    #[test]
    fn test_blank_required_field_fails() {
        let mut event = new_event("Rust Meetup");
        event.organizer = "   ".to_string();

        assert_eq!(
            prepare_event(&mut event, None),
            Err(EventError::EmptyField("organizer"))
        );
    }

    #[test]
    fn test_empty_agenda_and_tags_fail() {
        let mut event = new_event("Rust Meetup");
        event.agenda.clear();
        assert_eq!(
            prepare_event(&mut event, None),
            Err(EventError::EmptyList("agenda"))
        );

        let mut event = new_event("Rust Meetup");
        event.tags.clear();
        assert_eq!(
            prepare_event(&mut event, None),
            Err(EventError::EmptyList("tags"))
        );
    }

    #[test]
    fn test_blank_agenda_item_fails() {
        let mut event = sample_event_request("Rust Meetup")
            .with_agenda(vec!["Keynote".to_string(), " ".to_string()])
            .into_event(Utc::now());

        assert_eq!(
            prepare_event(&mut event, None),
            Err(EventError::BlankListItem("agenda"))
        );
    }

    #[test]
    fn test_blank_tag_fails() {
        let mut event = new_event("Rust Meetup");
        event.tags.push("  ".to_string());

        assert_eq!(
            prepare_event(&mut event, None),
            Err(EventError::BlankListItem("tags"))
        );
    }

    #[test]
    fn test_title_change_regenerates_slug() {
        let stored = saved_event("Rust Meetup");
        let mut event = stored.clone();
        UpdateEventRequest::new()
            .with_title("Rust Meetup: Autumn Edition")
            .apply_to(&mut event);

        prepare_event(&mut event, Some(&stored)).unwrap();

        assert_eq!(event.slug, "rust-meetup-autumn-edition");
    }

    #[test]
    fn test_description_change_keeps_slug_date_and_time() {
        let stored = saved_event("Rust Meetup");
        let mut event = stored.clone();
        UpdateEventRequest::new()
            .with_description("Now with more crabs")
            .apply_to(&mut event);

        prepare_event(&mut event, Some(&stored)).unwrap();

        assert_eq!(event.description, "Now with more crabs");
        assert_eq!(event.slug, stored.slug);
        assert_eq!(event.date, stored.date);
        assert_eq!(event.time, stored.time);
    }

    #[test]
    fn test_date_and_time_change_are_normalized() {
        let stored = saved_event("Rust Meetup");
        let mut event = stored.clone();
        UpdateEventRequest::new()
            .with_date("March 3, 2026")
            .with_time("7:15")
            .apply_to(&mut event);

        prepare_event(&mut event, Some(&stored)).unwrap();

        assert_eq!(event.date, "2026-03-03");
        assert_eq!(event.time, "07:15");
        assert_eq!(event.slug, stored.slug);
    }

    #[test]
    fn test_unchanged_fields_are_not_renormalized() {
        // A stored value is trusted as-is when the field was not modified.
        let mut stored = saved_event("Rust Meetup");
        stored.slug = "legacy-slug".to_string();
        let mut event = stored.clone();

        prepare_event(&mut event, Some(&stored)).unwrap();

        assert_eq!(event.slug, "legacy-slug");
    }

    #[test]
    fn test_sort_events_newest_first() {
        let now = Utc::now();
        let mut older = new_event("Older");
        older.created_at = now - Duration::days(2);
        let mut newer = new_event("Newer");
        newer.created_at = now;
        let mut events = vec![older, newer];

        sort_events_newest_first(&mut events);

        assert_eq!(events[0].title, "Newer");
        assert_eq!(events[1].title, "Older");
    }

    #[test]
    fn test_similar_events_share_tags_and_exclude_target() {
        let now = Utc::now();
        let tags = |tags: &[&str]| tags.iter().map(|t| t.to_string()).collect::<Vec<_>>();

        let target = sample_event_request("Target")
            .with_tags(tags(&["rust", "wasm"]))
            .into_event(now);
        let mut older = sample_event_request("Older Rust")
            .with_tags(tags(&["Rust"]))
            .into_event(now);
        older.created_at = now - Duration::days(3);
        let newer = sample_event_request("Newer Wasm")
            .with_tags(tags(&["wasm"]))
            .into_event(now);
        let unrelated = sample_event_request("React")
            .with_tags(tags(&["react"]))
            .into_event(now);

        let events = vec![target.clone(), older, newer, unrelated];
        let similar = similar_events(&events, &target, 10);

        let titles: Vec<&str> = similar.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Newer Wasm", "Older Rust"]);
    }

    #[test]
    fn test_similar_events_respects_limit() {
        let target = new_event("Target");
        let events: Vec<Event> = (0..5).map(|i| new_event(&format!("Event {i}"))).collect();

        assert_eq!(similar_events(&events, &target, 3).len(), 3);
    }
}
