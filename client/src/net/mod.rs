//! Networking modules for the news REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the wire schema plus the
//! in-memory session record built from it.

pub mod api;
pub mod types;
