use std::sync::Arc;
use uuid::Uuid;

use crate::error::{EventError, EventResult};
use crate::models::{Event, NewEvent};
use crate::repository::EventRepository;

/// Service layer for Event business logic
#[derive(Clone)]
pub struct EventService<R: EventRepository> {
    repository: Arc<R>,
}

impl<R: EventRepository> EventService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new event, assigning a time-ordered identifier
    pub async fn create_event(&self, input: NewEvent) -> EventResult<Event> {
        let event = Event::new(input);

        self.repository.save(&event).await?;

        tracing::info!(event_id = %event.id, "Created event");
        Ok(event)
    }

    /// Get an event by id.
    ///
    /// The nil id is rejected before the repository is consulted.
    pub async fn get_event(&self, id: Uuid) -> EventResult<Event> {
        if id.is_nil() {
            return Err(EventError::validation("invalid event id"));
        }

        self.repository.retrieve_by_id(id).await
    }

    /// Get all events, ordered by start_time ascending
    pub async fn get_all_events(&self) -> EventResult<Vec<Event>> {
        self.repository.retrieve_all().await
    }
}
