//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, toasts, navigation)
//! and delegates rendering details to `components`. Fetches run only after
//! hydration; the server renders the loading state.

pub mod dashboard;
pub mod meeting_detail;
pub mod meeting_edit;
pub mod meeting_list;
pub mod meeting_new;
