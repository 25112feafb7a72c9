//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render meeting cards, lists, the create/edit form, and shared
//! chrome (toasts, confirmation dialogs). They never fetch; pages own all
//! remote calls and hand data and callbacks down as props.

pub mod confirm_dialog;
pub mod meeting_card;
pub mod meeting_form;
pub mod meeting_list;
pub mod status_badge;
pub mod toast;
