//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once as `RwSignal<AuthState>` context by `App`. Forms write it,
//! the nav bar and profile section read it. At most one session exists.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{User, UserRecord};

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    /// True while remembered credentials are being replayed on page load.
    pub loading: bool,
}

impl AuthState {
    /// Replace any existing session with `user`.
    pub fn begin_session(&mut self, user: User) {
        self.user = Some(user);
        self.loading = false;
    }

    /// Apply a profile edit returned by the API to the active session.
    /// No-op when logged out.
    pub fn apply_profile(&mut self, record: &UserRecord) {
        if let Some(user) = self.user.as_mut() {
            user.apply_record(record);
        }
    }

    pub fn end_session(&mut self) {
        *self = Self::default();
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.username.as_str())
    }
}
