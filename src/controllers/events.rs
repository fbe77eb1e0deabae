use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;

use crate::models::NewEventInput;
use crate::services::EventServiceError;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/events", get(list_events).post(add_event))
        .route(
            "/events/{id}",
            get(get_event).put(update_event).delete(delete_event),
        )
}

type ErrorBody = (StatusCode, Json<serde_json::Value>);

/// The fixed verb-specific message is the only error detail that crosses the
/// HTTP boundary.
fn error_response(err: EventServiceError) -> ErrorBody {
    let status = match err {
        EventServiceError::NotFound => StatusCode::NOT_FOUND,
        EventServiceError::Failed(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(json!({ "error": err.to_string() })))
}

// GET /events
async fn list_events(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ErrorBody> {
    let events = state.events.list_events().await.map_err(error_response)?;
    Ok(Json(events))
}

// GET /events/{id}
async fn get_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ErrorBody> {
    let event = state.events.get_event(id).await.map_err(error_response)?;
    Ok(Json(event))
}

// POST /events
async fn add_event(
    State(state): State<Arc<AppState>>,
    Json(input): Json<NewEventInput>,
) -> Result<impl IntoResponse, ErrorBody> {
    let event = state
        .events
        .create_event(input)
        .await
        .map_err(error_response)?;
    Ok(Json(event))
}

// PUT /events/{id}
async fn update_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(input): Json<NewEventInput>,
) -> Result<impl IntoResponse, ErrorBody> {
    let event = state
        .events
        .update_event(id, input)
        .await
        .map_err(error_response)?;
    Ok(Json(event))
}

// DELETE /events/{id}
async fn delete_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ErrorBody> {
    state.events.delete_event(id).await.map_err(error_response)?;
    Ok(Json(json!({ "message": "Event deleted" })))
}
