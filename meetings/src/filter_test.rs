use super::*;
use time::macros::datetime;

fn meeting(id: &str, title: &str, status: MeetingStatus) -> Meeting {
    Meeting {
        id: id.to_owned(),
        title: title.to_owned(),
        arranged_time: datetime!(2025-03-01 10:00 UTC),
        status,
        participants: Vec::new(),
        created_at: datetime!(2025-01-01 00:00 UTC),
        updated_at: datetime!(2025-01-01 00:00 UTC),
    }
}

fn sample() -> Vec<Meeting> {
    vec![
        meeting("1", "Q1 Review", MeetingStatus::Completed),
        meeting("2", "Weekly sync", MeetingStatus::Scheduled),
        meeting("3", "Quarterly REVIEW prep", MeetingStatus::Scheduled),
        meeting("4", "Retro", MeetingStatus::Canceled),
    ]
}

fn ids(list: &[&Meeting]) -> Vec<String> {
    list.iter().map(|m| m.id.clone()).collect()
}

#[test]
fn default_filter_is_identity() {
    let list = sample();
    let out = MeetingFilter::default().apply(&list);
    assert_eq!(out.len(), list.len());
    for (kept, original) in out.iter().zip(&list) {
        assert!(std::ptr::eq(*kept, original));
    }
}

#[test]
fn search_is_case_insensitive_substring() {
    let list = sample();
    let filter = MeetingFilter { search: "review".to_owned(), status: StatusFilter::All };
    assert_eq!(ids(&filter.apply(&list)), vec!["1", "3"]);
}

#[test]
fn every_title_substring_keeps_its_meeting() {
    let list = sample();
    for m in &list {
        let filter = MeetingFilter { search: m.title[1..4].to_uppercase(), status: StatusFilter::All };
        assert!(filter.apply(&list).iter().any(|kept| kept.id == m.id));
    }
}

#[test]
fn status_filter_is_exact_match() {
    let list = sample();
    let filter = MeetingFilter { search: String::new(), status: StatusFilter::Only(MeetingStatus::Scheduled) };
    assert_eq!(ids(&filter.apply(&list)), vec!["2", "3"]);
}

#[test]
fn search_and_status_combine() {
    let list = sample();
    let filter = MeetingFilter { search: "review".to_owned(), status: StatusFilter::Only(MeetingStatus::Scheduled) };
    let out = filter.apply(&list);
    assert_eq!(ids(&out), vec!["3"]);
    assert!(std::ptr::eq(out[0], &list[2]));
}

#[test]
fn status_filter_parses_select_values() {
    assert_eq!("all".parse::<StatusFilter>(), Ok(StatusFilter::All));
    assert_eq!("in-progress".parse::<StatusFilter>(), Ok(StatusFilter::Only(MeetingStatus::InProgress)));
    assert!("bogus".parse::<StatusFilter>().is_err());
    assert_eq!(StatusFilter::Only(MeetingStatus::Canceled).as_str(), "canceled");
}

#[test]
fn empty_hint_depends_on_active_filter() {
    let idle = MeetingFilter::default();
    assert_eq!(idle.empty_hint(), "Create your first meeting to get started.");
    let searching = MeetingFilter { search: "x".to_owned(), status: StatusFilter::All };
    assert_eq!(searching.empty_hint(), "Try adjusting your search or filter criteria.");
    let by_status = MeetingFilter { search: String::new(), status: StatusFilter::Only(MeetingStatus::Completed) };
    assert!(by_status.is_active());
}
