//! Remote access layer for the hosted `meetings` table.
//!
//! DESIGN
//! ======
//! Every operation maps to exactly one backend request. There is no cache and
//! no retry; failures propagate to the caller unchanged. The store is an
//! injected trait object (`Arc<dyn MeetingStore>` in `AppState`) so tests can
//! run the HTTP surface against an in-memory fake.
//!
//! TRADE-OFFS
//! ==========
//! `add_participant` / `remove_participant` are read-modify-write over two
//! requests. A write that lands between the read and the overwrite is lost;
//! the last full-list overwrite wins.

pub mod supabase;

use meetings::participants::{appended, removed_at};
use meetings::{Meeting, MeetingInsert, MeetingPatch, MeetingStatus, Participant};
use tracing::info;

pub use supabase::SupabaseStore;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by meeting store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No row matched the given id.
    #[error("meeting not found: {0}")]
    NotFound(String),

    /// The HTTP request to the backend failed.
    #[error("backend request failed: {0}")]
    Request(String),

    /// The backend returned a non-success HTTP status.
    #[error("backend response error: status {status}")]
    Response { status: u16, body: String },

    /// The backend response body could not be deserialized.
    #[error("backend response parse failed: {0}")]
    Decode(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// STORE
// =============================================================================

/// The meeting operations the application consumes from the backend.
#[async_trait::async_trait]
pub trait MeetingStore: Send + Sync {
    /// All meetings, newest arranged time first.
    async fn list_meetings(&self) -> Result<Vec<Meeting>, StoreError>;

    /// Meetings with exactly `status`, newest arranged time first.
    async fn list_meetings_by_status(&self, status: MeetingStatus) -> Result<Vec<Meeting>, StoreError>;

    /// One meeting by id.
    async fn get_meeting(&self, id: &str) -> Result<Meeting, StoreError>;

    /// Insert a meeting and return the stored row with server-assigned fields.
    async fn create_meeting(&self, insert: &MeetingInsert) -> Result<Meeting, StoreError>;

    /// Apply a partial update and return the updated row.
    async fn update_meeting(&self, id: &str, patch: &MeetingPatch) -> Result<Meeting, StoreError>;

    /// Delete a meeting. Returns `true` on success.
    async fn delete_meeting(&self, id: &str) -> Result<bool, StoreError>;
}

/// Append a participant by fetching the meeting and overwriting its list.
///
/// # Errors
///
/// Propagates the first failing store call.
pub async fn add_participant(
    store: &dyn MeetingStore,
    meeting_id: &str,
    participant: Participant,
) -> Result<Meeting, StoreError> {
    let meeting = store.get_meeting(meeting_id).await?;
    let next = appended(&meeting.participants, participant);
    info!(%meeting_id, count = next.len(), "participant added");
    store
        .update_meeting(meeting_id, &MeetingPatch::participants(next))
        .await
}

/// Remove the participant at `index` by fetching the meeting and overwriting its list.
///
/// An out-of-range index still rewrites the unchanged list.
///
/// # Errors
///
/// Propagates the first failing store call.
pub async fn remove_participant(
    store: &dyn MeetingStore,
    meeting_id: &str,
    index: usize,
) -> Result<Meeting, StoreError> {
    let meeting = store.get_meeting(meeting_id).await?;
    let next = removed_at(&meeting.participants, index);
    info!(%meeting_id, index, count = next.len(), "participant removed");
    store
        .update_meeting(meeting_id, &MeetingPatch::participants(next))
        .await
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
