//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast::ToastHost;
use crate::pages::{
    dashboard::DashboardPage, meeting_detail::MeetingDetailPage, meeting_edit::EditMeetingPage,
    meeting_list::MeetingListPage, meeting_new::NewMeetingPage,
};
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the toast context and sets up client-side routing. `new` is
/// declared ahead of the `:id` routes so it is never captured as an id.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let toasts = RwSignal::new(ToastState::default());
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/meetflow.css"/>
        <Title text="MeetFlow"/>

        <Router>
            <Header/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("meetings") view=MeetingListPage/>
                    <Route path=(StaticSegment("meetings"), StaticSegment("new")) view=NewMeetingPage/>
                    <Route path=(StaticSegment("meetings"), ParamSegment("id")) view=MeetingDetailPage/>
                    <Route
                        path=(StaticSegment("meetings"), ParamSegment("id"), StaticSegment("edit"))
                        view=EditMeetingPage
                    />
                </Routes>
            </main>
            <ToastHost/>
        </Router>
    }
}

/// Top bar with the brand link and primary navigation.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="app-header">
            <a class="app-header__brand" href="/">
                "MeetFlow"
            </a>
            <nav class="app-header__nav">
                <a href="/">"Dashboard"</a>
                <a href="/meetings">"Meetings"</a>
            </nav>
        </header>
    }
}
