//! Shared meeting record model and the pure logic built on it.
//!
//! This crate owns the record shape used by the server, the browser UI, and
//! the CLI. Everything here is synchronous and side-effect free: filtering,
//! dashboard aggregates, participant list edits, and date formatting all take
//! their inputs (including "now") as arguments.

pub mod filter;
pub mod format;
pub mod participants;
pub mod stats;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

// =============================================================================
// STATUS
// =============================================================================

/// Error returned when a status string is not one of the four wire values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown meeting status: {0}")]
pub struct UnknownStatus(pub String);

/// Lifecycle tag of a meeting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MeetingStatus {
    #[default]
    Scheduled,
    InProgress,
    Completed,
    Canceled,
}

impl MeetingStatus {
    /// Every status, in display order.
    pub const ALL: [Self; 4] = [Self::Scheduled, Self::InProgress, Self::Completed, Self::Canceled];

    /// Wire representation, e.g. `"in-progress"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Canceled => "canceled",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Canceled => "Canceled",
        }
    }
}

impl fmt::Display for MeetingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MeetingStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(Self::Scheduled),
            "in-progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "canceled" => Ok(Self::Canceled),
            other => Err(UnknownStatus(other.to_owned())),
        }
    }
}

// =============================================================================
// PARTICIPANT
// =============================================================================

/// A person attending a meeting. Has no identity outside its owning meeting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub position: String,
}

impl Participant {
    /// Build a participant from raw form input.
    ///
    /// Both fields are trimmed; returns `None` if either ends up empty.
    #[must_use]
    pub fn new(name: &str, position: &str) -> Option<Self> {
        let name = name.trim();
        let position = position.trim();
        if name.is_empty() || position.is_empty() {
            return None;
        }
        Some(Self { name: name.to_owned(), position: position.to_owned() })
    }

    /// First character of the name, used for avatar initials.
    #[must_use]
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

// =============================================================================
// MEETING
// =============================================================================

/// A persisted meeting row as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    pub id: String,
    pub title: String,
    #[serde(with = "time::serde::rfc3339")]
    pub arranged_time: OffsetDateTime,
    pub status: MeetingStatus,
    #[serde(default)]
    pub participants: Vec<Participant>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Insert payload. The backend assigns `id`, `created_at`, and `updated_at`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingInsert {
    pub title: String,
    #[serde(with = "time::serde::rfc3339")]
    pub arranged_time: OffsetDateTime,
    #[serde(default)]
    pub status: MeetingStatus,
    #[serde(default)]
    pub participants: Vec<Participant>,
}

/// Partial update payload. Absent fields are left untouched by the backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "time::serde::rfc3339::option")]
    pub arranged_time: Option<OffsetDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MeetingStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participants: Option<Vec<Participant>>,
}

impl MeetingPatch {
    /// A patch that replaces only the participant list.
    #[must_use]
    pub fn participants(participants: Vec<Participant>) -> Self {
        Self { participants: Some(participants), ..Self::default() }
    }

    /// True when no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.arranged_time.is_none() && self.status.is_none() && self.participants.is_none()
    }

    /// Apply this patch to an existing row in place.
    pub fn apply_to(&self, meeting: &mut Meeting) {
        if let Some(title) = &self.title {
            meeting.title.clone_from(title);
        }
        if let Some(arranged_time) = self.arranged_time {
            meeting.arranged_time = arranged_time;
        }
        if let Some(status) = self.status {
            meeting.status = status;
        }
        if let Some(participants) = &self.participants {
            meeting.participants.clone_from(participants);
        }
    }
}

impl From<MeetingInsert> for MeetingPatch {
    fn from(insert: MeetingInsert) -> Self {
        Self {
            title: Some(insert.title),
            arranged_time: Some(insert.arranged_time),
            status: Some(insert.status),
            participants: Some(insert.participants),
        }
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
