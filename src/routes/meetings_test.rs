use std::sync::Arc;

use meetings::MeetingStatus;
use time::macros::datetime;

use super::*;
use crate::state::test_helpers::{UnreachableStore, dummy_meeting, test_app_state};

fn seeded() -> (AppState, Arc<crate::state::test_helpers::MemoryStore>) {
    test_app_state(vec![
        dummy_meeting("a", datetime!(2025-03-01 10:00 UTC), MeetingStatus::Scheduled),
        dummy_meeting("b", datetime!(2025-03-05 10:00 UTC), MeetingStatus::Completed),
        dummy_meeting("c", datetime!(2025-03-03 10:00 UTC), MeetingStatus::Scheduled),
    ])
}

fn unreachable() -> AppState {
    AppState::new(Arc::new(UnreachableStore))
}

fn status_query(status: &str) -> ApiQuery<ListQuery> {
    ApiQuery(ListQuery { status: Some(status.to_owned()) })
}

fn error_message(err: &ApiError) -> &str {
    err.1.0["error"].as_str().unwrap_or_default()
}

#[test]
fn store_error_to_status_maps_not_found() {
    let err = StoreError::NotFound("x".into());
    assert_eq!(store_error_to_status(&err), StatusCode::NOT_FOUND);
}

#[test]
fn store_error_to_status_maps_backend_failures_to_bad_gateway() {
    for err in [
        StoreError::Request("refused".into()),
        StoreError::Response { status: 500, body: String::new() },
        StoreError::Decode("bad json".into()),
    ] {
        assert_eq!(store_error_to_status(&err), StatusCode::BAD_GATEWAY);
    }
}

#[tokio::test]
async fn list_returns_newest_first() {
    let (state, _) = seeded();
    let Json(rows) = list_meetings(State(state), ApiQuery(ListQuery::default())).await.unwrap();
    let ids: Vec<_> = rows.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, ["b", "c", "a"]);
}

#[tokio::test]
async fn list_by_status_filters_exactly() {
    let (state, _) = seeded();
    let Json(rows) = list_meetings(State(state), status_query("scheduled")).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|m| m.status == MeetingStatus::Scheduled));
}

#[tokio::test]
async fn list_accepts_all_as_no_filter() {
    let (state, _) = seeded();
    let Json(rows) = list_meetings(State(state), status_query("all")).await.unwrap();
    assert_eq!(rows.len(), 3);
}

#[tokio::test]
async fn list_rejects_unknown_status() {
    let (state, _) = seeded();
    let err = list_meetings(State(state), status_query("postponed")).await.unwrap_err();
    assert_eq!(err.0, StatusCode::BAD_REQUEST);
    assert!(error_message(&err).contains("postponed"));
}

#[tokio::test]
async fn list_maps_unreachable_backend_to_bad_gateway() {
    let err = list_meetings(State(unreachable()), ApiQuery(ListQuery::default())).await.unwrap_err();
    assert_eq!(err.0, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn create_returns_created_row() {
    let (state, store) = seeded();
    let body = MeetingInsert {
        title: "  Kickoff  ".into(),
        arranged_time: datetime!(2025-04-01 09:00 UTC),
        status: MeetingStatus::Scheduled,
        participants: Vec::new(),
    };
    let (status, Json(row)) = create_meeting(State(state), ApiJson(body)).await.unwrap();
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(row.title, "Kickoff");
    assert!(!row.id.is_empty());
    assert_eq!(store.snapshot().len(), 4);
}

#[tokio::test]
async fn create_rejects_blank_title() {
    let (state, store) = seeded();
    let body = MeetingInsert {
        title: "   ".into(),
        arranged_time: datetime!(2025-04-01 09:00 UTC),
        status: MeetingStatus::Scheduled,
        participants: Vec::new(),
    };
    let err = create_meeting(State(state), ApiJson(body)).await.unwrap_err();
    assert_eq!(err.0, StatusCode::BAD_REQUEST);
    assert_eq!(store.snapshot().len(), 3);
}

#[tokio::test]
async fn create_surfaces_backend_rejection() {
    let body = MeetingInsert {
        title: "Kickoff".into(),
        arranged_time: datetime!(2025-04-01 09:00 UTC),
        status: MeetingStatus::Scheduled,
        participants: Vec::new(),
    };
    let err = create_meeting(State(unreachable()), ApiJson(body)).await.unwrap_err();
    assert_eq!(err.0, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn get_missing_meeting_is_not_found() {
    let (state, _) = seeded();
    let err = get_meeting(State(state), ApiPath("zzz".into())).await.unwrap_err();
    assert_eq!(err.0, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_changes_only_given_fields() {
    let (state, _) = seeded();
    let patch = MeetingPatch { status: Some(MeetingStatus::Canceled), ..MeetingPatch::default() };
    let Json(row) = update_meeting(State(state), ApiPath("a".into()), ApiJson(patch)).await.unwrap();
    assert_eq!(row.status, MeetingStatus::Canceled);
    assert_eq!(row.title, "Meeting a");
}

#[tokio::test]
async fn update_rejects_empty_patch() {
    let (state, _) = seeded();
    let err = update_meeting(State(state), ApiPath("a".into()), ApiJson(MeetingPatch::default()))
        .await
        .unwrap_err();
    assert_eq!(err.0, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_missing_meeting_is_not_found() {
    let (state, _) = seeded();
    let patch = MeetingPatch { title: Some("New".into()), ..MeetingPatch::default() };
    let err = update_meeting(State(state), ApiPath("zzz".into()), ApiJson(patch)).await.unwrap_err();
    assert_eq!(err.0, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_removes_row() {
    let (state, store) = seeded();
    let Json(body) = delete_meeting(State(state), ApiPath("b".into())).await.unwrap();
    assert_eq!(body, json!({ "ok": true }));
    assert!(store.snapshot().iter().all(|m| m.id != "b"));
}

#[tokio::test]
async fn delete_missing_meeting_is_not_found() {
    let (state, _) = seeded();
    let err = delete_meeting(State(state), ApiPath("zzz".into())).await.unwrap_err();
    assert_eq!(err.0, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn add_participant_appends() {
    let (state, _) = seeded();
    let body = AddParticipantBody { name: " Ann ".into(), position: "PM".into() };
    let Json(row) = add_participant(State(state), ApiPath("a".into()), ApiJson(body)).await.unwrap();
    assert_eq!(row.participants.len(), 1);
    assert_eq!(row.participants[0].name, "Ann");
}

#[tokio::test]
async fn add_participant_requires_both_fields() {
    let (state, _) = seeded();
    let body = AddParticipantBody { name: "Ann".into(), position: "  ".into() };
    let err = add_participant(State(state), ApiPath("a".into()), ApiJson(body)).await.unwrap_err();
    assert_eq!(err.0, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn remove_participant_by_index() {
    let (state, _) = seeded();
    for name in ["Ann", "Bo"] {
        let body = AddParticipantBody { name: name.into(), position: "Dev".into() };
        add_participant(State(state.clone()), ApiPath("a".into()), ApiJson(body)).await.unwrap();
    }
    let Json(row) = remove_participant(State(state), ApiPath(("a".into(), 0))).await.unwrap();
    assert_eq!(row.participants.len(), 1);
    assert_eq!(row.participants[0].name, "Bo");
}
