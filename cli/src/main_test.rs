use clap::Parser;
use time::macros::datetime;

use super::*;

#[test]
fn list_path_adds_status_filter() {
    assert_eq!(list_path(None), "/api/meetings");
    assert_eq!(list_path(Some(MeetingStatus::InProgress)), "/api/meetings?status=in-progress");
}

#[test]
fn meeting_path_formats_id() {
    assert_eq!(meeting_path("abc"), "/api/meetings/abc");
}

#[test]
fn parse_participant_splits_on_first_colon() {
    let p = parse_participant(" Ann : PM: Ops ").unwrap();
    assert_eq!(p.name, "Ann");
    assert_eq!(p.position, "PM: Ops");
}

#[test]
fn parse_participant_rejects_missing_parts() {
    assert!(parse_participant("Ann").is_err());
    assert!(parse_participant("Ann:  ").is_err());
}

#[test]
fn parse_time_accepts_rfc3339() {
    assert_eq!(parse_time("2025-03-01T10:00:00Z").unwrap(), datetime!(2025-03-01 10:00 UTC));
    assert!(parse_time("2025-03-01 10:00").is_err());
}

#[test]
fn error_message_prefers_error_field() {
    assert_eq!(error_message(&serde_json::json!({ "error": "meeting not found: x" })), "meeting not found: x");
    assert_eq!(error_message(&Value::Null), "null");
}

#[test]
fn cli_parses_create_with_participants() {
    let cli = Cli::try_parse_from([
        "meetflow-cli",
        "create",
        "--title",
        "Q1 Review",
        "--at",
        "2025-03-01T10:00:00Z",
        "--participant",
        "Ann:PM",
        "--participant",
        "Bo:Dev",
    ])
    .unwrap();
    let Command::Create(args) = cli.command else {
        panic!("expected create command");
    };
    let insert = create_payload(args);
    assert_eq!(insert.status, MeetingStatus::Scheduled);
    assert_eq!(insert.participants.len(), 2);
    assert_eq!(insert.arranged_time, datetime!(2025-03-01 10:00 UTC));
}

#[test]
fn cli_rejects_unknown_status() {
    let err = Cli::try_parse_from(["meetflow-cli", "list", "--status", "postponed"]).unwrap_err();
    assert!(err.to_string().contains("postponed"));
}

#[test]
fn update_payload_requires_a_field() {
    let cli = Cli::try_parse_from(["meetflow-cli", "update", "abc"]).unwrap();
    let Command::Update(args) = cli.command else {
        panic!("expected update command");
    };
    assert!(matches!(update_payload(args), Err(CliError::EmptyUpdate)));
}

#[test]
fn update_payload_sets_only_given_fields() {
    let cli = Cli::try_parse_from(["meetflow-cli", "update", "abc", "--status", "completed"]).unwrap();
    let Command::Update(args) = cli.command else {
        panic!("expected update command");
    };
    let patch = update_payload(args).unwrap();
    assert_eq!(patch.status, Some(MeetingStatus::Completed));
    assert!(patch.title.is_none());
    assert!(patch.participants.is_none());
}
