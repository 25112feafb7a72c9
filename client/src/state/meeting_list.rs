//! Local list-state edits applied after remote mutations succeed.

use meetings::Meeting;

#[cfg(test)]
#[path = "meeting_list_test.rs"]
mod meeting_list_test;

/// Drop the meeting with `id` from local state. Returns whether anything was
/// removed; an absent id leaves the list untouched.
pub fn remove_meeting(list: &mut Vec<Meeting>, id: &str) -> bool {
    let before = list.len();
    list.retain(|m| m.id != id);
    list.len() != before
}

/// Ids whose delete request is still in flight.
///
/// Deletes for different meetings run independently; only a second delete
/// for an id that is already being deleted is skipped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PendingDeletes {
    ids: Vec<String>,
}

impl PendingDeletes {
    /// Mark `id` as in flight. Returns `false` if it already was.
    pub fn begin(&mut self, id: &str) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id.to_owned());
        true
    }

    pub fn finish(&mut self, id: &str) {
        self.ids.retain(|pending| pending != id);
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|pending| pending == id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
