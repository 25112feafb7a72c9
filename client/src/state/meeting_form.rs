//! Meeting form field state.
//!
//! DESIGN
//! ======
//! The form edits a local copy of every field, including the participant list,
//! and produces a single `MeetingInsert` on submit. It does not know whether
//! it is creating or editing; the page decides what to do with the payload.
//! The `datetime-local` text is wall-clock time in the viewer's zone, using
//! the offset in force on that date in both directions.

use meetings::format::{LocalZone, parse_datetime_local, to_datetime_local};
use meetings::participants::{appended, removed_at};
use meetings::{Meeting, MeetingInsert, MeetingStatus, Participant};

#[cfg(test)]
#[path = "meeting_form_test.rs"]
mod meeting_form_test;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("meeting title is required")]
    BlankTitle,
    #[error("invalid date and time: {0:?}")]
    InvalidTime(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MeetingFormState {
    pub title: String,
    /// Raw `datetime-local` input text, e.g. `2025-03-01T10:00`.
    pub arranged_time: String,
    pub status: MeetingStatus,
    pub participants: Vec<Participant>,
    pub participant_name: String,
    pub participant_position: String,
}

impl MeetingFormState {
    /// Pre-populate from an existing meeting for editing.
    #[must_use]
    pub fn from_meeting(meeting: &Meeting, zone: &impl LocalZone) -> Self {
        Self {
            title: meeting.title.clone(),
            arranged_time: to_datetime_local(meeting.arranged_time, zone),
            status: meeting.status,
            participants: meeting.participants.clone(),
            participant_name: String::new(),
            participant_position: String::new(),
        }
    }

    #[must_use]
    pub fn can_add_participant(&self) -> bool {
        self.staged_participant().is_some()
    }

    /// Append the staged participant and clear the staging inputs.
    /// Returns `false` and changes nothing when either input is blank.
    pub fn add_participant(&mut self) -> bool {
        let Some(participant) = self.staged_participant() else {
            return false;
        };
        self.participants = appended(&self.participants, participant);
        self.participant_name.clear();
        self.participant_position.clear();
        true
    }

    pub fn remove_participant(&mut self, index: usize) {
        self.participants = removed_at(&self.participants, index);
    }

    /// Build the submit payload. The title is sent trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::BlankTitle`] when the title is empty after
    /// trimming, and [`FormError::InvalidTime`] when the date/time input does
    /// not parse.
    pub fn to_insert(&self, zone: &impl LocalZone) -> Result<MeetingInsert, FormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::BlankTitle);
        }
        let arranged_time = parse_datetime_local(&self.arranged_time, zone)
            .map_err(|_| FormError::InvalidTime(self.arranged_time.clone()))?;
        Ok(MeetingInsert {
            title: title.to_owned(),
            arranged_time,
            status: self.status,
            participants: self.participants.clone(),
        })
    }

    fn staged_participant(&self) -> Option<Participant> {
        Participant::new(&self.participant_name, &self.participant_position)
    }
}

#[must_use]
pub fn submit_label(editing: bool) -> &'static str {
    if editing { "Update Meeting" } else { "Create Meeting" }
}
