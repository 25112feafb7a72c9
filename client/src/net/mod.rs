//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the server's `/api/meetings` REST endpoints. The browser never
//! talks to the hosted table directly.

pub mod api;
