//! Meeting REST routes.
//!
//! Thin adapters over `MeetingStore`: each handler performs one store
//! operation (two for the participant helpers) and maps `StoreError` to an
//! HTTP status with a `{"error": ...}` body. Malformed paths, queries, and
//! bodies are rejected with the same body shape by the `extract` wrappers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use meetings::filter::StatusFilter;
use meetings::{Meeting, MeetingInsert, MeetingPatch, Participant};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{info, warn};

use super::extract::{ApiJson, ApiPath, ApiQuery};
use crate::state::AppState;
use crate::store::{self, StoreError};

/// Status code plus `{"error": message}` body.
pub type ApiError = (StatusCode, Json<Value>);

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddParticipantBody {
    pub name: String,
    pub position: String,
}

/// `GET /api/meetings[?status=S]`: list meetings, newest first.
pub async fn list_meetings(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListQuery>,
) -> Result<Json<Vec<Meeting>>, ApiError> {
    let filter = match query.status.as_deref() {
        None | Some("") => StatusFilter::All,
        Some(raw) => raw
            .parse::<StatusFilter>()
            .map_err(|e| bad_request(&e.to_string()))?,
    };

    let rows = match filter {
        StatusFilter::All => state.store.list_meetings().await,
        StatusFilter::Only(status) => state.store.list_meetings_by_status(status).await,
    }
    .map_err(store_error_response)?;

    Ok(Json(rows))
}

/// `POST /api/meetings`: create a meeting.
pub async fn create_meeting(
    State(state): State<AppState>,
    ApiJson(mut body): ApiJson<MeetingInsert>,
) -> Result<(StatusCode, Json<Meeting>), ApiError> {
    body.title = body.title.trim().to_owned();
    if body.title.is_empty() {
        return Err(bad_request("Title is required"));
    }

    let row = state
        .store
        .create_meeting(&body)
        .await
        .map_err(store_error_response)?;
    info!(meeting_id = %row.id, "meeting created");
    Ok((StatusCode::CREATED, Json(row)))
}

/// `GET /api/meetings/:id`: fetch one meeting.
pub async fn get_meeting(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> Result<Json<Meeting>, ApiError> {
    let row = state
        .store
        .get_meeting(&id)
        .await
        .map_err(store_error_response)?;
    Ok(Json(row))
}

/// `PATCH /api/meetings/:id`: partial update.
pub async fn update_meeting(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(mut patch): ApiJson<MeetingPatch>,
) -> Result<Json<Meeting>, ApiError> {
    if patch.is_empty() {
        return Err(bad_request("Nothing to update"));
    }
    if let Some(title) = patch.title.as_mut() {
        *title = title.trim().to_owned();
        if title.is_empty() {
            return Err(bad_request("Title is required"));
        }
    }

    let row = state
        .store
        .update_meeting(&id, &patch)
        .await
        .map_err(store_error_response)?;
    info!(meeting_id = %id, "meeting updated");
    Ok(Json(row))
}

/// `DELETE /api/meetings/:id`: delete a meeting.
pub async fn delete_meeting(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> Result<Json<Value>, ApiError> {
    let ok = state
        .store
        .delete_meeting(&id)
        .await
        .map_err(store_error_response)?;
    info!(meeting_id = %id, "meeting deleted");
    Ok(Json(json!({ "ok": ok })))
}

/// `POST /api/meetings/:id/participants`: append a participant.
pub async fn add_participant(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(body): ApiJson<AddParticipantBody>,
) -> Result<Json<Meeting>, ApiError> {
    let Some(participant) = Participant::new(&body.name, &body.position) else {
        return Err(bad_request("Name and position are required"));
    };
    let row = store::add_participant(state.store.as_ref(), &id, participant)
        .await
        .map_err(store_error_response)?;
    Ok(Json(row))
}

/// `DELETE /api/meetings/:id/participants/:index`: remove a participant by position.
pub async fn remove_participant(
    State(state): State<AppState>,
    ApiPath((id, index)): ApiPath<(String, usize)>,
) -> Result<Json<Meeting>, ApiError> {
    let row = store::remove_participant(state.store.as_ref(), &id, index)
        .await
        .map_err(store_error_response)?;
    Ok(Json(row))
}

pub(crate) fn store_error_to_status(err: &StoreError) -> StatusCode {
    match err {
        StoreError::NotFound(_) => StatusCode::NOT_FOUND,
        StoreError::Request(_)
        | StoreError::Response { .. }
        | StoreError::Decode(_)
        | StoreError::HttpClientBuild(_) => StatusCode::BAD_GATEWAY,
    }
}

fn store_error_response(err: StoreError) -> ApiError {
    let status = store_error_to_status(&err);
    if status != StatusCode::NOT_FOUND {
        warn!(error = %err, "meeting store call failed");
    }
    (status, Json(json!({ "error": err.to_string() })))
}

fn bad_request(message: &str) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message })))
}

#[cfg(test)]
#[path = "meetings_test.rs"]
mod tests;
