//! Create/edit form for a meeting, including its participant list.
//!
//! DESIGN
//! ======
//! The component owns a `MeetingFormState` signal and emits a single
//! `MeetingInsert` through `on_submit`. Participant add/remove only touches
//! local state; nothing reaches the server until the whole form is submitted.

use leptos::prelude::*;
use meetings::{Meeting, MeetingInsert, MeetingStatus};

use crate::state::meeting_form::{MeetingFormState, submit_label};
use crate::util::clock::ViewerZone;

#[component]
pub fn MeetingForm(
    #[prop(optional)] initial: Option<Meeting>,
    on_submit: Callback<MeetingInsert>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    let editing = initial.is_some();
    let form = RwSignal::new(
        initial
            .as_ref()
            .map(|m| MeetingFormState::from_meeting(m, &ViewerZone))
            .unwrap_or_default(),
    );
    let error = RwSignal::new(None::<String>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        match form.with_untracked(|f| f.to_insert(&ViewerZone)) {
            Ok(insert) => {
                error.set(None);
                on_submit.run(insert);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    let status_options = MeetingStatus::ALL
        .iter()
        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
        .collect::<Vec<_>>();

    view! {
        <form class="meeting-form" on:submit=submit>
            <label class="meeting-form__label">
                "Meeting Title"
                <input
                    class="meeting-form__input"
                    type="text"
                    placeholder="Quarterly Review"
                    required
                    prop:value=move || form.get().title
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.title = value);
                    }
                />
            </label>

            <label class="meeting-form__label">
                "Meeting Time"
                <input
                    class="meeting-form__input"
                    type="datetime-local"
                    required
                    prop:value=move || form.get().arranged_time
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.arranged_time = value);
                    }
                />
            </label>

            <label class="meeting-form__label">
                "Status"
                <select
                    class="meeting-form__input"
                    prop:value=move || form.get().status.as_str()
                    on:change=move |ev| {
                        if let Ok(status) = event_target_value(&ev).parse::<MeetingStatus>() {
                            form.update(|f| f.status = status);
                        }
                    }
                >
                    {status_options}
                </select>
            </label>

            <fieldset class="meeting-form__participants">
                <legend>"Participants"</legend>
                {move || {
                    form.get()
                        .participants
                        .into_iter()
                        .enumerate()
                        .map(|(index, p)| {
                            view! {
                                <div class="participant-row">
                                    <div>
                                        <p class="participant-row__name">{p.name}</p>
                                        <p class="participant-row__position">{p.position}</p>
                                    </div>
                                    <button
                                        type="button"
                                        class="btn btn--ghost participant-row__remove"
                                        title="Remove participant"
                                        aria-label="Remove participant"
                                        on:click=move |_| form.update(|f| f.remove_participant(index))
                                    >
                                        "🗑"
                                    </button>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}

                <div class="participant-add">
                    <label class="meeting-form__label">
                        "Name"
                        <input
                            class="meeting-form__input"
                            type="text"
                            placeholder="John Doe"
                            prop:value=move || form.get().participant_name
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.participant_name = value);
                            }
                        />
                    </label>
                    <label class="meeting-form__label">
                        "Position"
                        <input
                            class="meeting-form__input"
                            type="text"
                            placeholder="Product Manager"
                            prop:value=move || form.get().participant_position
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.participant_position = value);
                            }
                        />
                    </label>
                    <button
                        type="button"
                        class="btn btn--outline"
                        disabled=move || !form.get().can_add_participant()
                        on:click=move |_| {
                            form.update(|f| {
                                f.add_participant();
                            });
                        }
                    >
                        "+ Add Participant"
                    </button>
                </div>
            </fieldset>

            <Show when=move || error.get().is_some()>
                <p class="meeting-form__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <div class="meeting-form__actions">
                <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { submit_label(editing) }}
                </button>
            </div>
        </form>
    }
}
