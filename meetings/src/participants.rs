//! Participant list edits.
//!
//! Participants have no identity of their own, so every edit produces a whole
//! replacement list. Callers persist that list with a full overwrite.

use crate::Participant;

#[cfg(test)]
#[path = "participants_test.rs"]
mod participants_test;

/// Return a copy of `list` with `participant` appended.
#[must_use]
pub fn appended(list: &[Participant], participant: Participant) -> Vec<Participant> {
    let mut next = Vec::with_capacity(list.len() + 1);
    next.extend_from_slice(list);
    next.push(participant);
    next
}

/// Return a copy of `list` without the entry at `index`.
///
/// An out-of-range index yields an unchanged copy.
#[must_use]
pub fn removed_at(list: &[Participant], index: usize) -> Vec<Participant> {
    list.iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, p)| p.clone())
        .collect()
}
