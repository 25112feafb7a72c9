//! Dashboard aggregates derived from the full meeting list.
//!
//! Nothing here is cached: the dashboard recomputes [`DashboardStats`] from
//! the in-memory list on every render.

use time::OffsetDateTime;

use crate::format::LocalZone;
use crate::{Meeting, MeetingStatus};

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

/// How many upcoming meetings the dashboard previews.
pub const UPCOMING_PREVIEW_LIMIT: usize = 5;

/// Per-status meeting counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub scheduled: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub canceled: usize,
}

impl StatusCounts {
    #[must_use]
    pub fn tally(meetings: &[Meeting]) -> Self {
        let mut counts = Self::default();
        for meeting in meetings {
            *counts.slot(meeting.status) += 1;
        }
        counts
    }

    #[must_use]
    pub fn get(&self, status: MeetingStatus) -> usize {
        match status {
            MeetingStatus::Scheduled => self.scheduled,
            MeetingStatus::InProgress => self.in_progress,
            MeetingStatus::Completed => self.completed,
            MeetingStatus::Canceled => self.canceled,
        }
    }

    fn slot(&mut self, status: MeetingStatus) -> &mut usize {
        match status {
            MeetingStatus::Scheduled => &mut self.scheduled,
            MeetingStatus::InProgress => &mut self.in_progress,
            MeetingStatus::Completed => &mut self.completed,
            MeetingStatus::Canceled => &mut self.canceled,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.scheduled + self.in_progress + self.completed + self.canceled
    }

    /// Share of `status` in percent (0 when there are no meetings).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percent(&self, status: MeetingStatus) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.get(status) as f64 / total as f64 * 100.0
    }

    /// `(status, count)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (MeetingStatus, usize)> + '_ {
        MeetingStatus::ALL.into_iter().map(|s| (s, self.get(s)))
    }
}

/// Everything the dashboard shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardStats {
    pub total: usize,
    /// Meetings whose arranged time falls on today's calendar date.
    pub today: usize,
    /// Future meetings still scheduled, soonest first.
    pub upcoming: Vec<Meeting>,
    pub total_participants: usize,
    pub status_counts: StatusCounts,
}

impl DashboardStats {
    /// Compute aggregates relative to `now`.
    ///
    /// "Today" compares local calendar dates in `zone`. Each instant is
    /// localized with the offset in force at that instant.
    #[must_use]
    pub fn compute(meetings: &[Meeting], now: OffsetDateTime, zone: &impl LocalZone) -> Self {
        let today_date = zone.localize(now).date();
        let today = meetings
            .iter()
            .filter(|m| zone.localize(m.arranged_time).date() == today_date)
            .count();

        let mut upcoming: Vec<Meeting> = meetings
            .iter()
            .filter(|m| m.arranged_time > now && m.status == MeetingStatus::Scheduled)
            .cloned()
            .collect();
        upcoming.sort_by_key(|m| m.arranged_time);

        Self {
            total: meetings.len(),
            today,
            upcoming,
            total_participants: meetings.iter().map(|m| m.participants.len()).sum(),
            status_counts: StatusCounts::tally(meetings),
        }
    }

    /// The slice of upcoming meetings shown on the dashboard.
    #[must_use]
    pub fn upcoming_preview(&self) -> &[Meeting] {
        &self.upcoming[..self.upcoming.len().min(UPCOMING_PREVIEW_LIMIT)]
    }
}
