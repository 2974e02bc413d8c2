//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so components depend on small focused models:
//! `auth` holds the session, `ui` holds section visibility.

pub mod auth;
pub mod ui;
