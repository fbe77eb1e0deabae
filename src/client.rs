//! client.rs
//!
//! HTTP client for the event API. Every operation issues one request and
//! returns a plain success/failure value: the caller never sees a panic or a
//! typed transport error, only the decoded payload or a fixed verb-specific
//! message. No retries, no timeouts, no cancellation.

use serde::de::DeserializeOwned;
use tracing::warn;

use crate::models::{AppEvent, NewEventInput};

pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    pub async fn fetch_events(&self) -> Result<Vec<AppEvent>, String> {
        let res = self.http.get(self.url("/events")).send().await;
        Self::decode(res, "Failed to fetch events").await
    }

    pub async fn fetch_event_by_id(&self, id: i64) -> Result<AppEvent, String> {
        let res = self.http.get(self.url(&format!("/events/{}", id))).send().await;
        Self::decode(res, "Failed to fetch event").await
    }

    pub async fn add_event(&self, event: &NewEventInput) -> Result<AppEvent, String> {
        let res = self.http.post(self.url("/events")).json(event).send().await;
        Self::decode(res, "Failed to add event").await
    }

    pub async fn edit_event(&self, id: i64, event: &NewEventInput) -> Result<AppEvent, String> {
        let res = self
            .http
            .put(self.url(&format!("/events/{}", id)))
            .json(event)
            .send()
            .await;
        Self::decode(res, "Failed to update event").await
    }

    pub async fn delete_event(&self, id: i64) -> Result<(), String> {
        let res = self
            .http
            .delete(self.url(&format!("/events/{}", id)))
            .send()
            .await;
        match res {
            Ok(res) if res.status().is_success() => Ok(()),
            Ok(res) => {
                warn!("delete_event({}) got status {}", id, res.status());
                Err("Failed to delete event".to_string())
            }
            Err(e) => {
                warn!("delete_event({}) transport error: {:?}", id, e);
                Err("Failed to delete event".to_string())
            }
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Collapses non-2xx statuses, transport faults, and undecodable bodies
    /// into the one fixed message for the operation.
    async fn decode<T: DeserializeOwned>(
        res: Result<reqwest::Response, reqwest::Error>,
        message: &str,
    ) -> Result<T, String> {
        match res {
            Ok(res) if res.status().is_success() => {
                res.json::<T>().await.map_err(|e| {
                    warn!("failed to decode response body: {:?}", e);
                    message.to_string()
                })
            }
            Ok(res) => {
                warn!("request failed with status {}", res.status());
                Err(message.to_string())
            }
            Err(e) => {
                warn!("transport error: {:?}", e);
                Err(message.to_string())
            }
        }
    }
}

/// Upserts a saved event into a locally cached snapshot:
/// replace-if-exists-else-append. The snapshot is only patched after mutation
/// responses; it can go stale against the server until the next full reload.
pub fn apply_saved(events: &mut Vec<AppEvent>, saved: AppEvent) {
    match events.iter_mut().find(|e| e.id == saved.id) {
        Some(existing) => *existing = saved,
        None => events.push(saved),
    }
}

/// Drops an entry from the cached snapshot after a delete response.
pub fn remove_local(events: &mut Vec<AppEvent>, id: i64) {
    events.retain(|e| e.id != id);
}
