//! Create-meeting page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use meetings::MeetingInsert;

use crate::components::meeting_form::MeetingForm;
use crate::state::toast::ToastState;

#[component]
pub fn NewMeetingPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
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

        #[cfg(feature = "hydrate")]
        {
            use crate::components::toast::notify;
            use crate::state::toast::ToastKind;

            leptos::task::spawn_local(async move {
                match crate::net::api::create_meeting(&insert).await {
                    Ok(created) => {
                        notify(toasts, ToastKind::Success, "Meeting created successfully");
                        let _ = redirect.try_set(Some(format!("/meetings/{}", created.id)));
                    }
                    Err(_) => notify(toasts, ToastKind::Error, "Failed to create meeting"),
                }
                let _ = saving.try_set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (insert, toasts);
            saving.set(false);
        }
    });

    view! {
        <div class="meeting-form-page">
            <div class="page-header">
                <h1>"Create New Meeting"</h1>
            </div>
            <section class="panel">
                <MeetingForm on_submit=on_submit busy=saving/>
            </section>
        </div>
    }
}
