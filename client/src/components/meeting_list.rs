//! Searchable, status-filterable grid of meeting cards.
//!
//! DESIGN
//! ======
//! Filter state is local to the component and the visible subset is derived
//! on every change via `MeetingFilter::apply`; the source list is never
//! mutated here.

use leptos::prelude::*;
use meetings::filter::{MeetingFilter, StatusFilter};
use meetings::{Meeting, MeetingStatus};

use crate::components::meeting_card::MeetingCard;
use crate::util::clock::now_local;

#[component]
pub fn MeetingList(#[prop(into)] meetings: Signal<Vec<Meeting>>, on_delete: Callback<String>) -> impl IntoView {
    let filter = RwSignal::new(MeetingFilter::default());

    let visible = Memo::new(move |_| {
        let f = filter.get();
        meetings.with(|all| f.apply(all).into_iter().cloned().collect::<Vec<_>>())
    });

    let status_options = MeetingStatus::ALL
        .iter()
        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
        .collect::<Vec<_>>();

    view! {
        <div class="meeting-list">
            <div class="meeting-list__controls">
                <input
                    class="meeting-list__search"
                    type="search"
                    placeholder="Search meetings..."
                    prop:value=move || filter.get().search
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        filter.update(|f| f.search = value);
                    }
                />
                <select
                    class="meeting-list__status"
                    prop:value=move || filter.get().status.as_str()
                    on:change=move |ev| {
                        let status = event_target_value(&ev).parse().unwrap_or(StatusFilter::All);
                        filter.update(|f| f.status = status);
                    }
                >
                    <option value="all">"All Statuses"</option>
                    {status_options}
                </select>
            </div>

            <Show
                when=move || !visible.get().is_empty()
                fallback=move || {
                    view! {
                        <div class="meeting-list__empty">
                            <h3>"No meetings found"</h3>
                            <p>{move || filter.get().empty_hint()}</p>
                        </div>
                    }
                }
            >
                <div class="meeting-list__grid">
                    {move || {
                        let now = now_local();
                        visible
                            .get()
                            .into_iter()
                            .map(|m| view! { <MeetingCard meeting=m now=now on_delete=on_delete/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </div>
    }
}
