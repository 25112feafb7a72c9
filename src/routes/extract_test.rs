use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use meetings::{MeetingInsert, MeetingStatus};
use serde_json::Value;
use time::macros::datetime;

use super::*;
use crate::routes::api_routes;
use crate::state::test_helpers::{dummy_meeting, test_app_state};

fn json_request(body: &'static str) -> Request {
    Request::builder()
        .method("POST")
        .uri("/api/meetings")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

/// Serve the API on an ephemeral port and return its base URL.
async fn spawn_api() -> String {
    let (state, _store) =
        test_app_state(vec![dummy_meeting("a", datetime!(2025-03-01 10:00 UTC), MeetingStatus::Scheduled)]);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, api_routes(state)).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn json_accepts_valid_body() {
    let req = json_request(r#"{"title":"Sync","arranged_time":"2025-03-01T10:00:00Z","status":"scheduled","participants":[]}"#);
    let ApiJson(insert) = ApiJson::<MeetingInsert>::from_request(req, &()).await.unwrap();
    assert_eq!(insert.title, "Sync");
}

#[tokio::test]
async fn json_syntax_error_is_400_with_error_body() {
    let Err((status, Json(body))) = ApiJson::<MeetingInsert>::from_request(json_request("{not json"), &()).await else {
        panic!("malformed body should be rejected");
    };
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().is_some_and(|m| !m.is_empty()));
}

#[tokio::test]
async fn json_unknown_status_is_400_with_error_body() {
    let req = json_request(r#"{"title":"Sync","arranged_time":"2025-03-01T10:00:00Z","status":"postponed","participants":[]}"#);
    let Err((status, Json(body))) = ApiJson::<MeetingInsert>::from_request(req, &()).await else {
        panic!("unknown status should be rejected");
    };
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn non_numeric_participant_index_returns_json_error() {
    let base = spawn_api().await;
    let response = reqwest::Client::new()
        .delete(format!("{base}/api/meetings/a/participants/first"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn malformed_create_body_returns_json_error() {
    let base = spawn_api().await;
    let response = reqwest::Client::new()
        .post(format!("{base}/api/meetings"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].is_string());
}
