//! Edit-meeting page.
//!
//! Loads the meeting for `:id` the same way the detail page does, pre-fills
//! the form, and submits every field as one `PATCH`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use meetings::{MeetingInsert, MeetingPatch};

use crate::components::meeting_form::MeetingForm;
use crate::pages::meeting_detail::{MeetingNotFound, RoutedMeeting, use_routed_meeting};
use crate::state::loadable::Loadable;
use crate::state::toast::ToastState;

#[component]
pub fn EditMeetingPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let RoutedMeeting { id, meeting } = use_routed_meeting(toasts);
    let saving = RwSignal::new(false);
    let redirect = RwSignal::new(None::<String>);

    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(path) = redirect.get() {
            redirect.set(None);
            navigate(&path, NavigateOptions::default());
        }
    });

    let on_submit = Callback::new(move |insert: MeetingInsert| {
        saving.set(true);
        let meeting_id = id.get_untracked();
        let patch = MeetingPatch::from(insert);

        #[cfg(feature = "hydrate")]
        {
            use crate::components::toast::notify;
            use crate::state::toast::ToastKind;

            leptos::task::spawn_local(async move {
                match crate::net::api::update_meeting(&meeting_id, &patch).await {
                    Ok(_) => {
                        notify(toasts, ToastKind::Success, "Meeting updated successfully");
                        let _ = redirect.try_set(Some(format!("/meetings/{meeting_id}")));
                    }
                    Err(_) => notify(toasts, ToastKind::Error, "Failed to update meeting"),
                }
                let _ = saving.try_set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (meeting_id, patch);
            saving.set(false);
        }
    });

    view! {
        <div class="meeting-form-page">
            <div class="page-header">
                <h1>"Edit Meeting"</h1>
            </div>
            {move || match meeting.get() {
                Loadable::Loading => view! { <div class="spinner" aria-label="Loading"></div> }.into_any(),
                Loadable::Failed => view! { <MeetingNotFound/> }.into_any(),
                Loadable::Loaded(m) => {
                    view! {
                        <section class="panel">
                            <MeetingForm initial=m on_submit=on_submit busy=saving/>
                        </section>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
