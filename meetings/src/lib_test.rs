use super::*;
use time::macros::datetime;

fn sample_meeting() -> Meeting {
    Meeting {
        id: "m-1".to_owned(),
        title: "Q1 Review".to_owned(),
        arranged_time: datetime!(2025-03-01 10:00 UTC),
        status: MeetingStatus::Scheduled,
        participants: vec![Participant { name: "Ann".to_owned(), position: "PM".to_owned() }],
        created_at: datetime!(2025-02-01 08:00 UTC),
        updated_at: datetime!(2025-02-02 09:30 UTC),
    }
}

#[test]
fn status_wire_strings_use_kebab_case() {
    assert_eq!(serde_json::to_string(&MeetingStatus::InProgress).unwrap(), "\"in-progress\"");
    assert_eq!(serde_json::to_string(&MeetingStatus::Canceled).unwrap(), "\"canceled\"");
    let parsed: MeetingStatus = serde_json::from_str("\"completed\"").unwrap();
    assert_eq!(parsed, MeetingStatus::Completed);
}

#[test]
fn status_from_str_accepts_every_wire_value() {
    for status in MeetingStatus::ALL {
        assert_eq!(status.as_str().parse::<MeetingStatus>(), Ok(status));
    }
}

#[test]
fn status_from_str_rejects_unknown() {
    let err = "postponed".parse::<MeetingStatus>().unwrap_err();
    assert_eq!(err, UnknownStatus("postponed".to_owned()));
    assert_eq!(err.to_string(), "unknown meeting status: postponed");
}

#[test]
fn status_defaults_to_scheduled() {
    assert_eq!(MeetingStatus::default(), MeetingStatus::Scheduled);
}

#[test]
fn participant_new_trims_and_requires_both_fields() {
    assert_eq!(
        Participant::new("  Ann ", "PM"),
        Some(Participant { name: "Ann".to_owned(), position: "PM".to_owned() })
    );
    assert_eq!(Participant::new("Ann", "   "), None);
    assert_eq!(Participant::new("", "PM"), None);
}

#[test]
fn participant_initial_handles_empty_and_unicode_names() {
    let p = Participant { name: "Émile".to_owned(), position: "CTO".to_owned() };
    assert_eq!(p.initial(), "É");
    let empty = Participant { name: String::new(), position: "CTO".to_owned() };
    assert_eq!(empty.initial(), "");
}

#[test]
fn meeting_parses_backend_row() {
    let row = r#"{
        "id": "7f1c",
        "title": "Standup",
        "arranged_time": "2025-04-24T09:15:00+00:00",
        "status": "in-progress",
        "participants": [{"name": "Bo", "position": "Dev"}],
        "created_at": "2025-04-20T12:00:00.123456+00:00",
        "updated_at": "2025-04-21T12:00:00+00:00"
    }"#;
    let meeting: Meeting = serde_json::from_str(row).unwrap();
    assert_eq!(meeting.id, "7f1c");
    assert_eq!(meeting.arranged_time, datetime!(2025-04-24 09:15 UTC));
    assert_eq!(meeting.status, MeetingStatus::InProgress);
    assert_eq!(meeting.participants.len(), 1);
}

#[test]
fn meeting_missing_participants_defaults_to_empty() {
    let row = r#"{
        "id": "a",
        "title": "t",
        "arranged_time": "2025-04-24T09:15:00Z",
        "status": "scheduled",
        "created_at": "2025-04-20T12:00:00Z",
        "updated_at": "2025-04-20T12:00:00Z"
    }"#;
    let meeting: Meeting = serde_json::from_str(row).unwrap();
    assert!(meeting.participants.is_empty());
}

#[test]
fn patch_omits_absent_fields() {
    let patch = MeetingPatch { title: Some("Renamed".to_owned()), ..MeetingPatch::default() };
    assert_eq!(serde_json::to_value(&patch).unwrap(), serde_json::json!({ "title": "Renamed" }));
    assert_eq!(serde_json::to_value(MeetingPatch::default()).unwrap(), serde_json::json!({}));
}

#[test]
fn patch_from_insert_sets_every_field() {
    let insert = MeetingInsert {
        title: "Plan".to_owned(),
        arranged_time: datetime!(2025-05-01 14:00 UTC),
        status: MeetingStatus::Completed,
        participants: Vec::new(),
    };
    let patch = MeetingPatch::from(insert);
    assert_eq!(patch.title.as_deref(), Some("Plan"));
    assert_eq!(patch.status, Some(MeetingStatus::Completed));
    assert_eq!(patch.participants, Some(Vec::new()));
    assert!(!patch.is_empty());
}

#[test]
fn patch_apply_to_replaces_only_set_fields() {
    let mut meeting = sample_meeting();
    let patch = MeetingPatch::participants(Vec::new());
    patch.apply_to(&mut meeting);
    assert!(meeting.participants.is_empty());
    assert_eq!(meeting.title, "Q1 Review");
    assert_eq!(meeting.status, MeetingStatus::Scheduled);
}

#[test]
fn insert_status_defaults_when_missing() {
    let body = r#"{"title": "x", "arranged_time": "2025-01-01T00:00:00Z"}"#;
    let insert: MeetingInsert = serde_json::from_str(body).unwrap();
    assert_eq!(insert.status, MeetingStatus::Scheduled);
    assert!(insert.participants.is_empty());
}
