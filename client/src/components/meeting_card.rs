//! Card for one meeting in the list grid.

use leptos::prelude::*;
use meetings::format::format_date;
use meetings::{Meeting, Participant};
use time::OffsetDateTime;

use crate::components::status_badge::StatusBadge;
use crate::util::clock::ViewerZone;

#[cfg(test)]
#[path = "meeting_card_test.rs"]
mod meeting_card_test;

const AVATAR_PREVIEW_LIMIT: usize = 3;

/// Participants shown as avatars, plus how many are left over.
fn avatar_preview(participants: &[Participant]) -> (&[Participant], usize) {
    let shown = participants.len().min(AVATAR_PREVIEW_LIMIT);
    (&participants[..shown], participants.len() - shown)
}

fn participant_count_label(count: usize) -> String {
    format!("{count} participants")
}

#[component]
pub fn MeetingCard(meeting: Meeting, now: OffsetDateTime, on_delete: Callback<String>) -> impl IntoView {
    let detail_href = format!("/meetings/{}", meeting.id);
    let edit_href = format!("/meetings/{}/edit", meeting.id);
    let when = format_date(meeting.arranged_time, now, &ViewerZone);
    let count_label = participant_count_label(meeting.participants.len());

    let (shown, overflow) = avatar_preview(&meeting.participants);
    let avatar_row = (!shown.is_empty()).then(|| {
        let avatars = shown
            .iter()
            .map(|p| {
                let title = format!("{} ({})", p.name, p.position);
                view! { <span class="avatar" title=title>{p.initial()}</span> }
            })
            .collect::<Vec<_>>();
        let more = (overflow > 0).then(|| view! { <span class="avatar avatar--more">{format!("+{overflow}")}</span> });
        view! { <div class="meeting-card__avatars">{avatars}{more}</div> }
    });

    let id = meeting.id.clone();
    let on_delete_click = move |_| on_delete.run(id.clone());

    view! {
        <div class="meeting-card">
            <div class="meeting-card__head">
                <h3 class="meeting-card__title">{meeting.title}</h3>
                <StatusBadge status=meeting.status/>
            </div>
            <div class="meeting-card__meta">
                <span class="meeting-card__time">{when}</span>
                <span class="meeting-card__count">{count_label}</span>
            </div>
            {avatar_row}
            <div class="meeting-card__footer">
                <a class="btn btn--outline" href=detail_href>
                    "View Details"
                </a>
                <span class="meeting-card__actions">
                    <a class="btn btn--ghost" href=edit_href title="Edit meeting" aria-label="Edit meeting">
                        "✎"
                    </a>
                    <button
                        class="btn btn--ghost meeting-card__delete"
                        title="Delete meeting"
                        aria-label="Delete meeting"
                        on:click=on_delete_click
                    >
                        "🗑"
                    </button>
                </span>
            </div>
        </div>
    }
}
