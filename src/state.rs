//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! carries the meeting store as a trait object; production wires in
//! `SupabaseStore`, tests wire in `test_helpers::MemoryStore`.

use std::sync::Arc;

use crate::store::MeetingStore;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the store is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MeetingStore>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn MeetingStore>) -> Self {
        Self { store }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
