//! Dashboard page: headline counts, status breakdown, and upcoming meetings.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. It fetches the full meeting list once and
//! derives every figure from it with `DashboardStats::compute` on each render.

use leptos::prelude::*;
use meetings::format::format_date;
use meetings::stats::DashboardStats;
use meetings::{Meeting, MeetingStatus};

use crate::components::status_badge::StatusBadge;
use crate::state::loadable::Loadable;
use crate::state::toast::ToastState;
use crate::util::clock::{ViewerZone, now_local};

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

/// Dashboard page: stat cards plus status and upcoming panels.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let meetings = RwSignal::new(Loadable::<Vec<Meeting>>::Loading);

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
    #[cfg(not(feature = "hydrate"))]
    let _ = toasts;

    view! {
        <div class="dashboard-page">
            <div class="page-header">
                <h1>"Dashboard"</h1>
                <a class="btn btn--primary" href="/meetings/new">
                    "+ New Meeting"
                </a>
            </div>
            {move || match meetings.get() {
                Loadable::Loading => view! { <div class="spinner" aria-label="Loading"></div> }.into_any(),
                Loadable::Failed => view! { <DashboardBody stats=DashboardStats::compute(&[], now_local(), &ViewerZone)/> }.into_any(),
                Loadable::Loaded(list) => {
                    view! { <DashboardBody stats=DashboardStats::compute(&list, now_local(), &ViewerZone)/> }.into_any()
                }
            }}
        </div>
    }
}

#[component]
fn DashboardBody(stats: DashboardStats) -> impl IntoView {
    let now = now_local();
    let counts = stats.status_counts;
    let breakdown = counts
        .iter()
        .map(|(status, count)| {
            view! {
                <div class="status-row">
                    <div class="status-row__track">
                        <div class=bar_class(status) style=bar_width_style(counts.percent(status))></div>
                    </div>
                    <StatusBadge status=status/>
                    <span class="status-row__count">{count}</span>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let preview = stats.upcoming_preview().to_vec();
    let upcoming = if preview.is_empty() {
        view! { <p class="dashboard-page__empty">"No upcoming meetings"</p> }.into_any()
    } else {
        preview
            .into_iter()
            .map(|m| {
                let href = format!("/meetings/{}", m.id);
                view! {
                    <a class="upcoming-row" href=href>
                        <div>
                            <h3>{m.title.clone()}</h3>
                            <p class="upcoming-row__time">{format_date(m.arranged_time, now, &ViewerZone)}</p>
                            <p class="upcoming-row__count">{format!("{} participants", m.participants.len())}</p>
                        </div>
                        <StatusBadge status=m.status/>
                    </a>
                }
            })
            .collect::<Vec<_>>()
            .into_any()
    };

    view! {
        <div class="stat-grid">
            <StatCard label="Total Meetings" value=stats.total/>
            <StatCard label="Today's Meetings" value=stats.today/>
            <StatCard label="Upcoming Meetings" value=stats.upcoming.len()/>
            <StatCard label="Total Participants" value=stats.total_participants/>
        </div>
        <div class="panel-grid">
            <section class="panel">
                <h2>"Meeting Status"</h2>
                {breakdown}
            </section>
            <section class="panel">
                <div class="panel__header">
                    <h2>"Upcoming Meetings"</h2>
                    <a href="/meetings">"View all"</a>
                </div>
                {upcoming}
            </section>
        </div>
    }
}

#[component]
fn StatCard(label: &'static str, value: usize) -> impl IntoView {
    view! {
        <div class="stat-card">
            <p class="stat-card__label">{label}</p>
            <p class="stat-card__value">{value}</p>
        </div>
    }
}

fn bar_class(status: MeetingStatus) -> &'static str {
    match status {
        MeetingStatus::Scheduled => "status-row__bar status-row__bar--scheduled",
        MeetingStatus::InProgress => "status-row__bar status-row__bar--in-progress",
        MeetingStatus::Completed => "status-row__bar status-row__bar--completed",
        MeetingStatus::Canceled => "status-row__bar status-row__bar--canceled",
    }
}

fn bar_width_style(percent: f64) -> String {
    format!("width: {percent:.1}%")
}
