//! Meeting detail page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route `/meetings/:id`. The meeting is fetched whenever the `:id` parameter
//! changes. Each fetch runs under a `RequestGate` ticket; a response whose
//! ticket was superseded by a newer id or by unmount is dropped.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};
use meetings::Meeting;
use meetings::format::format_date;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::status_badge::StatusBadge;
use crate::state::loadable::Loadable;
use crate::state::request_gate::RequestGate;
use crate::state::toast::ToastState;
use crate::util::clock::{ViewerZone, now_local};

/// The current `:id` route parameter and the meeting loaded for it.
pub(crate) struct RoutedMeeting {
    pub id: Memo<String>,
    pub meeting: RwSignal<Loadable<Meeting>>,
}

/// Fetch the meeting named by the `:id` route parameter, refetching when it
/// changes and discarding responses for superseded ids.
pub(crate) fn use_routed_meeting(toasts: RwSignal<ToastState>) -> RoutedMeeting {
    let params = use_params_map();
    let id = Memo::new(move |_| params.read().get("id").unwrap_or_default());
    let meeting = RwSignal::new(Loadable::<Meeting>::Loading);
    let gate = RwSignal::new(RequestGate::default());

    Effect::new(move || {
        let current = id.get();
        let Some(ticket) = gate.try_update(RequestGate::begin) else {
            return;
        };
        meeting.set(Loadable::Loading);

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_meeting(&current).await;
                let still_current = gate
                    .try_get_untracked()
                    .is_some_and(|g| g.is_current(ticket));
                if !still_current {
                    return;
                }
                if result.is_err() {
                    crate::components::toast::notify(
                        toasts,
                        crate::state::toast::ToastKind::Error,
                        "Failed to load meeting details",
                    );
                }
                let _ = meeting.try_set(Loadable::from_result(result));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (current, ticket, toasts);
        }
    });

    on_cleanup(move || {
        let _ = gate.try_update(RequestGate::cancel);
    });

    RoutedMeeting { id, meeting }
}

/// Empty state shown when the meeting could not be loaded.
#[component]
pub(crate) fn MeetingNotFound() -> impl IntoView {
    view! {
        <div class="empty-state">
            <h3>"Meeting not found"</h3>
            <p>"The meeting you're looking for doesn't exist or has been deleted."</p>
            <a class="btn btn--primary" href="/meetings">
                "Back to Meetings"
            </a>
        </div>
    }
}

#[component]
pub fn MeetingDetailPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let RoutedMeeting { id, meeting } = use_routed_meeting(toasts);
    let confirming = RwSignal::new(false);
    let deleting = RwSignal::new(false);
    let redirect = RwSignal::new(None::<String>);

    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(path) = redirect.get() {
            redirect.set(None);
            navigate(&path, NavigateOptions::default());
        }
    });

    let on_delete_cancel = Callback::new(move |()| confirming.set(false));
    let on_delete_confirm = Callback::new(move |()| {
        confirming.set(false);
        if deleting.get_untracked() {
            return;
        }
        deleting.set(true);
        let meeting_id = id.get_untracked();

        #[cfg(feature = "hydrate")]
        {
            use crate::components::toast::notify;
            use crate::state::toast::ToastKind;

            leptos::task::spawn_local(async move {
                match crate::net::api::delete_meeting(&meeting_id).await {
                    Ok(()) => {
                        notify(toasts, ToastKind::Success, "Meeting deleted successfully");
                        let _ = redirect.try_set(Some("/meetings".to_owned()));
                    }
                    Err(_) => {
                        notify(toasts, ToastKind::Error, "Failed to delete meeting");
                        let _ = deleting.try_set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = meeting_id;
            deleting.set(false);
        }
    });

    view! {
        <div class="meeting-detail-page">
            {move || match meeting.get() {
                Loadable::Loading => view! { <div class="spinner" aria-label="Loading"></div> }.into_any(),
                Loadable::Failed => view! { <MeetingNotFound/> }.into_any(),
                Loadable::Loaded(m) => {
                    view! {
                        <MeetingDetail
                            meeting=m
                            deleting=deleting
                            on_delete=Callback::new(move |()| confirming.set(true))
                        />
                    }
                        .into_any()
                }
            }}
            <Show when=move || confirming.get()>
                <ConfirmDialog
                    title="Delete Meeting"
                    message="Are you sure you want to delete this meeting?"
                    on_confirm=on_delete_confirm
                    on_cancel=on_delete_cancel
                />
            </Show>
        </div>
    }
}

#[component]
fn MeetingDetail(meeting: Meeting, deleting: RwSignal<bool>, on_delete: Callback<()>) -> impl IntoView {
    let now = now_local();
    let edit_href = format!("/meetings/{}/edit", meeting.id);
    let participant_heading = format!("Participants ({})", meeting.participants.len());

    let participants = if meeting.participants.is_empty() {
        view! { <p class="detail-panel__empty">"No participants added yet"</p> }.into_any()
    } else {
        meeting
            .participants
            .iter()
            .map(|p| {
                view! {
                    <div class="participant-row">
                        <div>
                            <h3 class="participant-row__name">{p.name.clone()}</h3>
                            <p class="participant-row__position">{p.position.clone()}</p>
                        </div>
                        <span class="avatar">{p.initial()}</span>
                    </div>
                }
            })
            .collect::<Vec<_>>()
            .into_any()
    };

    view! {
        <div class="page-header">
            <div class="page-header__title">
                <a class="btn btn--ghost" href="/meetings">
                    "← Back"
                </a>
                <h1>{meeting.title.clone()}</h1>
            </div>
            <div class="page-header__actions">
                <a class="btn btn--primary" href=edit_href>
                    "Edit"
                </a>
                <button
                    class="btn btn--danger"
                    disabled=move || deleting.get()
                    on:click=move |_| on_delete.run(())
                >
                    {move || if deleting.get() { "Deleting..." } else { "Delete" }}
                </button>
            </div>
        </div>
        <div class="detail-meta">
            <span class="detail-meta__time">{format_date(meeting.arranged_time, now, &ViewerZone)}</span>
            <StatusBadge status=meeting.status/>
        </div>
        <div class="panel-grid">
            <section class="panel">
                <h2>"Meeting Details"</h2>
                <dl class="detail-list">
                    <dt>"Created"</dt>
                    <dd>{format_date(meeting.created_at, now, &ViewerZone)}</dd>
                    <dt>"Last Updated"</dt>
                    <dd>{format_date(meeting.updated_at, now, &ViewerZone)}</dd>
                    <dt>"Meeting ID"</dt>
                    <dd>{meeting.id.clone()}</dd>
                </dl>
            </section>
            <section class="panel">
                <h2>{participant_heading}</h2>
                {participants}
            </section>
        </div>
    }
}
