//! events.rs
//!
//! Query service over the event store: one operation per CRUD verb. Each call
//! maps domain inputs through the row mapper, runs a single gateway statement,
//! and maps rows back to `AppEvent`s.
//!
//! Error policy: any store fault is logged here and collapsed to a generic
//! verb-specific `Failed` message; no SQL detail crosses this boundary. The
//! only modeled domain error is `NotFound` on a get-by-id miss.

use thiserror::Error;
use tracing::error;

use crate::models::{AppEvent, NewEventInput, NewEventRow};
use crate::store::EventStore;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EventServiceError {
    #[error("Event not found")]
    NotFound,
    #[error("{0}")]
    Failed(&'static str),
}

#[derive(Clone)]
pub struct EventService {
    store: EventStore,
}

impl EventService {
    pub fn new(store: EventStore) -> Self {
        Self { store }
    }

    pub async fn list_events(&self) -> Result<Vec<AppEvent>, EventServiceError> {
        let rows = self.store.list_all().await.map_err(|e| {
            error!("list_events sql error: {:?}", e);
            EventServiceError::Failed("Failed to fetch events")
        })?;
        Ok(rows.into_iter().map(AppEvent::from).collect())
    }

    pub async fn get_event(&self, id: i64) -> Result<AppEvent, EventServiceError> {
        let row = self.store.get_by_id(id).await.map_err(|e| {
            error!("get_event({}) sql error: {:?}", id, e);
            EventServiceError::Failed("Failed to fetch event")
        })?;
        row.map(AppEvent::from).ok_or(EventServiceError::NotFound)
    }

    /// Inserts the input and returns it as a full event under the assigned id.
    /// The row is not re-read from the store; the mapper is trusted to be
    /// faithful (covered by the round-trip tests).
    pub async fn create_event(&self, input: NewEventInput) -> Result<AppEvent, EventServiceError> {
        let row = NewEventRow::from_input(&input);
        let id = self.store.insert(&row).await.map_err(|e| {
            error!("create_event sql error: {:?}", e);
            EventServiceError::Failed("Failed to add event")
        })?;
        Ok(AppEvent::from_input(id, input))
    }

    /// Overwrites every column for `id` — a full replace, not a patch, so a
    /// partial input nulls out whatever it omits. There is no existence check:
    /// updating a missing id affects zero rows and still returns the synthetic
    /// event, matching the delete contract below.
    pub async fn update_event(
        &self,
        id: i64,
        input: NewEventInput,
    ) -> Result<AppEvent, EventServiceError> {
        let row = NewEventRow::from_input(&input);
        self.store.update(id, &row).await.map_err(|e| {
            error!("update_event({}) sql error: {:?}", id, e);
            EventServiceError::Failed("Failed to update event")
        })?;
        Ok(AppEvent::from_input(id, input))
    }

    /// Deleting a missing id is a silent no-op that still reports success.
    pub async fn delete_event(&self, id: i64) -> Result<(), EventServiceError> {
        self.store.delete(id).await.map_err(|e| {
            error!("delete_event({}) sql error: {:?}", id, e);
            EventServiceError::Failed("Failed to delete event")
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_distinct_from_generic_failure() {
        assert_ne!(
            EventServiceError::NotFound,
            EventServiceError::Failed("Failed to fetch event")
        );
        assert_eq!(EventServiceError::NotFound.to_string(), "Event not found");
        assert_eq!(
            EventServiceError::Failed("Failed to delete event").to_string(),
            "Failed to delete event"
        );
    }
}
