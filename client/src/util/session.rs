//! Session flows shared by the forms, the nav bar and page load.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every way of becoming logged in (login, signup, remembered credentials)
//! funnels through `complete_login` so storage and page layout stay in step
//! with the session signal.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{User, UserRecord};
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::{browser, credentials};

/// Install `user` as the session, remember it, and switch to the logged-in layout.
pub fn complete_login(auth: RwSignal<AuthState>, ui: RwSignal<UiState>, user: User) {
    log::debug!("login complete for {}", user.username);
    credentials::save(&user);
    auth.update(|state| state.begin_session(user));
    ui.update(UiState::show_logged_in);
}

/// Replay remembered credentials. Meant to run once, on page load.
///
/// Returns `true` when a session was restored. Credentials the API no longer
/// accepts are left in storage.
pub async fn restore_remembered_user(auth: RwSignal<AuthState>, ui: RwSignal<UiState>) -> bool {
    log::debug!("checking for remembered user");
    let Some(stored) = credentials::load() else {
        return false;
    };
    auth.update(|state| state.loading = true);
    let replayed = api::login_via_stored_credentials(&stored.token, &stored.username).await;
    finish_restore(auth, ui, replayed)
}

/// Settle a credential replay: log the user in or drop back to anonymous.
pub(crate) fn finish_restore(auth: RwSignal<AuthState>, ui: RwSignal<UiState>, replayed: Option<User>) -> bool {
    match replayed {
        Some(user) => {
            complete_login(auth, ui, user);
            true
        }
        None => {
            auth.update(|state| state.loading = false);
            false
        }
    }
}

/// Merge a profile edit into the session and re-remember it.
pub fn apply_profile_update(auth: RwSignal<AuthState>, record: &UserRecord) {
    log::debug!("applying profile update for {}", record.username);
    auth.update(|state| state.apply_profile(record));
    if let Some(user) = auth.with_untracked(|state| state.user.clone()) {
        credentials::save(&user);
    }
}

/// Forget everything and start over from a fresh page.
pub fn logout(auth: RwSignal<AuthState>, ui: RwSignal<UiState>) {
    log::debug!("logout");
    credentials::clear_all();
    auth.update(AuthState::end_session);
    ui.set(UiState::default());
    browser::reload_page();
}
