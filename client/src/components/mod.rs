//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page sections and account forms while reading/writing
//! shared state from Leptos context providers.

pub mod login_form;
pub mod nav_bar;
pub mod signup_form;
pub mod stories_container;
pub mod update_profile_form;
pub mod user_profile;
