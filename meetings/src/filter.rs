//! Client-side list filtering.
//!
//! DESIGN
//! ======
//! Filtering runs synchronously over the in-memory list on every keystroke or
//! selection change. It only ever drops elements; order and identity of the
//! survivors are preserved.

use std::str::FromStr;

use crate::{Meeting, MeetingStatus, UnknownStatus};

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

/// Status selector value: everything, or one exact status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(MeetingStatus),
}

impl StatusFilter {
    /// Select-box value for this filter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(status) => status.as_str(),
        }
    }

    #[must_use]
    pub fn matches(self, status: MeetingStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

/// Search text plus status selector.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MeetingFilter {
    pub search: String,
    pub status: StatusFilter,
}

impl MeetingFilter {
    /// True when `meeting` passes both the title search and the status selector.
    #[must_use]
    pub fn matches(&self, meeting: &Meeting) -> bool {
        let needle = self.search.to_lowercase();
        meeting.title.to_lowercase().contains(&needle) && self.status.matches(meeting.status)
    }

    /// Filter `meetings`, keeping input order.
    #[must_use]
    pub fn apply<'a>(&self, meetings: &'a [Meeting]) -> Vec<&'a Meeting> {
        meetings.iter().filter(|m| self.matches(m)).collect()
    }

    /// True when either the search text or the status selector narrows the list.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.status != StatusFilter::All
    }

    /// Help text shown when the filtered list is empty.
    #[must_use]
    pub fn empty_hint(&self) -> &'static str {
        if self.is_active() {
            "Try adjusting your search or filter criteria."
        } else {
            "Create your first meeting to get started."
        }
    }
}
