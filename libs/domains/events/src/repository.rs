use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{EventError, EventResult};
use crate::models::Event;

/// Repository trait for Event persistence.
///
/// Lookups that find nothing yield `NotFound` here, so callers never see
/// an empty result as success.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Get an event by id
    async fn retrieve_by_id(&self, id: Uuid) -> EventResult<Event>;

    /// Get all events, ordered by start_time ascending
    async fn retrieve_all(&self) -> EventResult<Vec<Event>>;

    /// Persist a new event
    async fn save(&self, event: &Event) -> EventResult<()>;
}

/// In-memory implementation of EventRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryEventRepository {
    events: Arc<RwLock<HashMap<Uuid, Event>>>,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self {
            events: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn retrieve_by_id(&self, id: Uuid) -> EventResult<Event> {
        let events = self.events.read().await;

        events
            .get(&id)
            .cloned()
            .ok_or_else(|| EventError::not_found(format!("event by id: {} was not found", id)))
    }

    async fn retrieve_all(&self) -> EventResult<Vec<Event>> {
        let events = self.events.read().await;

        if events.is_empty() {
            return Err(EventError::not_found("no events found"));
        }

        let mut result: Vec<Event> = events.values().cloned().collect();
        result.sort_by(|a, b| a.start_time.cmp(&b.start_time));

        Ok(result)
    }

    async fn save(&self, event: &Event) -> EventResult<()> {
        let mut events = self.events.write().await;

        if events.contains_key(&event.id) {
            return Err(EventError::validation(
                "Event already exists. Duplicated event id",
            ));
        }

        events.insert(event.id, event.clone());

        tracing::info!(event_id = %event.id, "Saved event");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn event_starting_in(minutes: i64) -> Event {
        let start = Utc::now() + Duration::minutes(minutes);
        Event {
            id: Uuid::now_v7(),
            title: format!("event at +{}m", minutes),
            description: None,
            start_time: start,
            end_time: start + Duration::minutes(30),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_save_and_retrieve_event() {
        let repo = InMemoryEventRepository::new();
        let event = event_starting_in(10);

        repo.save(&event).await.unwrap();

        let fetched = repo.retrieve_by_id(event.id).await.unwrap();
        assert_eq!(fetched, event);
    }

    #[tokio::test]
    async fn test_retrieve_missing_event_is_not_found() {
        let repo = InMemoryEventRepository::new();
        let missing = Uuid::now_v7();

        let result = repo.retrieve_by_id(missing).await;

        match result {
            Err(EventError::NotFound { message, .. }) => {
                assert_eq!(message, format!("event by id: {} was not found", missing));
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_duplicate_id_rejected() {
        let repo = InMemoryEventRepository::new();
        let event = event_starting_in(5);

        repo.save(&event).await.unwrap();
        let result = repo.save(&event).await;

        match result {
            Err(EventError::Validation { message, .. }) => {
                assert_eq!(message, "Event already exists. Duplicated event id");
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_retrieve_all_ordered_by_start_time() {
        let repo = InMemoryEventRepository::new();
        let later = event_starting_in(60);
        let earlier = event_starting_in(5);

        repo.save(&later).await.unwrap();
        repo.save(&earlier).await.unwrap();

        let all = repo.retrieve_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, earlier.id);
        assert_eq!(all[1].id, later.id);
    }

    #[tokio::test]
    async fn test_retrieve_all_empty_is_not_found() {
        let repo = InMemoryEventRepository::new();

        let result = repo.retrieve_all().await;

        match result {
            Err(EventError::NotFound { message, .. }) => {
                assert_eq!(message, "no events found");
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }
}
