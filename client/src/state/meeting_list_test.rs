use meetings::MeetingStatus;
use time::macros::datetime;

use super::*;

fn meeting(id: &str) -> Meeting {
    let at = datetime!(2025-03-01 10:00 UTC);
    Meeting {
        id: id.to_owned(),
        title: format!("Meeting {id}"),
        arranged_time: at,
        status: MeetingStatus::Scheduled,
        participants: Vec::new(),
        created_at: at,
        updated_at: at,
    }
}

#[test]
fn remove_meeting_drops_matching_id() {
    let mut list = vec![meeting("a"), meeting("b"), meeting("c")];
    assert!(remove_meeting(&mut list, "b"));
    assert_eq!(list.iter().map(|m| m.id.as_str()).collect::<Vec<_>>(), ["a", "c"]);
}

#[test]
fn remove_meeting_absent_id_leaves_list_unchanged() {
    let mut list = vec![meeting("a"), meeting("b")];
    let before = list.clone();
    assert!(!remove_meeting(&mut list, "zzz"));
    assert_eq!(list, before);
}

#[test]
fn pending_deletes_allow_a_second_meeting_while_first_in_flight() {
    let mut pending = PendingDeletes::default();
    assert!(pending.begin("a"));
    assert!(pending.begin("b"));
    assert!(pending.contains("a") && pending.contains("b"));
}

#[test]
fn pending_deletes_skip_repeat_for_same_id() {
    let mut pending = PendingDeletes::default();
    assert!(pending.begin("a"));
    assert!(!pending.begin("a"));
    pending.finish("a");
    assert!(pending.is_empty());
    assert!(pending.begin("a"));
}

#[test]
fn pending_deletes_finish_only_clears_that_id() {
    let mut pending = PendingDeletes::default();
    pending.begin("a");
    pending.begin("b");
    pending.finish("a");
    assert!(!pending.contains("a"));
    assert!(pending.contains("b"));
}
