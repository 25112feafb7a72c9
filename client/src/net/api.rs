//! REST API helpers for meeting CRUD.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since pages only fetch after
//! hydration.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, String>`. Pages never show the string;
//! they map any failure to a static toast message, and it is only logged to
//! the browser console.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use meetings::{Meeting, MeetingInsert, MeetingPatch};

#[cfg(any(test, feature = "hydrate"))]
const MEETINGS_ENDPOINT: &str = "/api/meetings";

#[cfg(any(test, feature = "hydrate"))]
fn meeting_endpoint(id: &str) -> String {
    format!("{MEETINGS_ENDPOINT}/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(action: &str, status: u16) -> String {
    format!("{action} failed: {status}")
}

#[cfg(not(feature = "hydrate"))]
fn server_stub<T>() -> Result<T, String> {
    Err("not available on server".to_owned())
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
    action: &str,
) -> Result<T, String> {
    if !resp.ok() {
        let message = request_failed_message(action, resp.status());
        log::warn!("{message}");
        return Err(message);
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// Fetch all meetings via `GET /api/meetings`, newest first.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a non-OK status.
pub async fn fetch_meetings() -> Result<Vec<Meeting>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(MEETINGS_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp, "list meetings").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        server_stub()
    }
}

/// Fetch one meeting via `GET /api/meetings/{id}`.
///
/// # Errors
///
/// Returns an error string if the request fails or the meeting does not exist.
pub async fn fetch_meeting(id: &str) -> Result<Meeting, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&meeting_endpoint(id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp, "get meeting").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        server_stub()
    }
}

/// Create a meeting via `POST /api/meetings`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects the payload.
pub async fn create_meeting(insert: &MeetingInsert) -> Result<Meeting, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(MEETINGS_ENDPOINT)
            .json(insert)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp, "create meeting").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = insert;
        server_stub()
    }
}

/// Update a meeting via `PATCH /api/meetings/{id}`.
///
/// # Errors
///
/// Returns an error string if the request fails or the meeting does not exist.
pub async fn update_meeting(id: &str, patch: &MeetingPatch) -> Result<Meeting, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::patch(&meeting_endpoint(id))
            .json(patch)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp, "update meeting").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, patch);
        server_stub()
    }
}

/// Delete a meeting via `DELETE /api/meetings/{id}`.
///
/// # Errors
///
/// Returns an error string if the request fails or the meeting does not exist.
pub async fn delete_meeting(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&meeting_endpoint(id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let _: serde_json::Value = read_json(resp, "delete meeting").await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        server_stub()
    }
}
