//! UI state modules.
//!
//! DESIGN
//! ======
//! Plain structs and enums with no Leptos dependency, wrapped in `RwSignal` by
//! pages and components. Keeping them reactive-free lets the transitions be
//! unit tested natively.

pub mod loadable;
pub mod meeting_form;
pub mod meeting_list;
pub mod request_gate;
pub mod toast;
