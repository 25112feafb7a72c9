//! Colored status pill.

use leptos::prelude::*;
use meetings::MeetingStatus;

#[cfg(test)]
#[path = "status_badge_test.rs"]
mod status_badge_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BadgeStyle {
    pub label: &'static str,
    pub class: &'static str,
}

/// Label and CSS class for a status.
#[must_use]
pub fn badge_style(status: MeetingStatus) -> BadgeStyle {
    match status {
        MeetingStatus::Scheduled => BadgeStyle { label: "Scheduled", class: "status-badge status-badge--scheduled" },
        MeetingStatus::InProgress => BadgeStyle { label: "In Progress", class: "status-badge status-badge--in-progress" },
        MeetingStatus::Completed => BadgeStyle { label: "Completed", class: "status-badge status-badge--completed" },
        MeetingStatus::Canceled => BadgeStyle { label: "Canceled", class: "status-badge status-badge--canceled" },
    }
}

#[component]
pub fn StatusBadge(status: MeetingStatus) -> impl IntoView {
    let style = badge_style(status);
    view! { <span class=style.class>{style.label}</span> }
}
