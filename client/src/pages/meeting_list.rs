//! Meetings list page with search, status filter, and delete.

use leptos::prelude::*;
use meetings::Meeting;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::meeting_list::MeetingList;
use crate::state::loadable::Loadable;
use crate::state::meeting_list::PendingDeletes;
use crate::state::toast::ToastState;

#[component]
pub fn MeetingListPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let meetings = RwSignal::new(Loadable::<Vec<Meeting>>::Loading);
    let pending_delete = RwSignal::new(None::<String>);
    let deleting = RwSignal::new(PendingDeletes::default());

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_meetings().await;
            if result.is_err() {
                crate::components::toast::notify(
                    toasts,
                    crate::state::toast::ToastKind::Error,
                    "Failed to load meetings",
                );
            }
            let _ = meetings.try_set(Loadable::from_result(result));
        });
    }

    let on_delete_request = Callback::new(move |id: String| pending_delete.set(Some(id)));
    let on_delete_cancel = Callback::new(move |()| pending_delete.set(None));
    let on_delete_confirm = Callback::new(move |()| {
        let Some(id) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        if deleting.try_update(|d| d.begin(&id)) != Some(true) {
            return;
        }
        delete_and_prune(id, meetings, deleting, toasts);
    });

    let items = Signal::derive(move || meetings.with(|m| m.loaded().cloned().unwrap_or_default()));

    view! {
        <div class="meeting-list-page">
            <div class="page-header">
                <h1>"Meetings"</h1>
                <a class="btn btn--primary" href="/meetings/new">
                    "+ New Meeting"
                </a>
            </div>
            <Show
                when=move || !meetings.with(Loadable::is_loading)
                fallback=|| view! { <div class="spinner" aria-label="Loading"></div> }
            >
                <MeetingList meetings=items on_delete=on_delete_request/>
            </Show>
            <Show when=move || pending_delete.get().is_some()>
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

/// Issue the delete; on success drop the id from local state, on failure
/// leave the list as it was and raise a toast. Other deletes may run
/// concurrently.
fn delete_and_prune(
    id: String,
    meetings: RwSignal<Loadable<Vec<Meeting>>>,
    deleting: RwSignal<PendingDeletes>,
    toasts: RwSignal<ToastState>,
) {
    #[cfg(feature = "hydrate")]
    {
        use crate::components::toast::notify;
        use crate::state::toast::ToastKind;

        leptos::task::spawn_local(async move {
            match crate::net::api::delete_meeting(&id).await {
                Ok(()) => {
                    let _ = meetings.try_update(|m| {
                        if let Some(list) = m.loaded_mut() {
                            crate::state::meeting_list::remove_meeting(list, &id);
                        }
                    });
                    notify(toasts, ToastKind::Success, "Meeting deleted successfully");
                }
                Err(_) => notify(toasts, ToastKind::Error, "Failed to delete meeting"),
            }
            let _ = deleting.try_update(|d| d.finish(&id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (meetings, toasts);
        deleting.update(|d| d.finish(&id));
    }
}
