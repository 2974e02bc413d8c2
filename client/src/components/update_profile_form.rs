//! Profile edit form: new display name and/or password via `PATCH /users/:username`.
//!
//! Empty fields are left unchanged. The outcome is reported with an alert
//! rather than inline text.

#[cfg(test)]
#[path = "update_profile_form_test.rs"]
mod update_profile_form_test;

use leptos::prelude::*;

use crate::net::api::{self, ApiError};
use crate::net::types::{ProfileChanges, UserRecord};
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::browser;
use crate::util::session::apply_profile_update;

const UPDATE_OK_MESSAGE: &str = "Profile updated successfully.";
const UPDATE_FAILED_MESSAGE: &str = "Failed to update profile. Please try again.";

pub(crate) fn update_result_message(result: &Result<UserRecord, ApiError>) -> &'static str {
    if result.is_ok() { UPDATE_OK_MESSAGE } else { UPDATE_FAILED_MESSAGE }
}

/// Finish a profile edit: on success merge it into the session and close the
/// form. Returns the alert text.
pub(crate) fn apply_update_result(
    auth: RwSignal<AuthState>,
    ui: RwSignal<UiState>,
    result: &Result<UserRecord, ApiError>,
) -> &'static str {
    match result {
        Ok(record) => {
            apply_profile_update(auth, record);
            ui.update(UiState::close_update_form);
        }
        Err(e) => log::error!("failed to update profile: {e}"),
    }
    update_result_message(result)
}

#[component]
pub fn UpdateProfileForm() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let new_name = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        log::debug!("update profile submitted");
        if busy.get_untracked() {
            return;
        }
        let Some(user) = auth.with_untracked(|state| state.user.clone()) else {
            return;
        };
        let changes = ProfileChanges::from_form(&new_name.get_untracked(), &new_password.get_untracked());
        busy.set(true);

        leptos::task::spawn_local(async move {
            let result = api::update_profile(&user, &changes).await;
            let message = apply_update_result(auth, ui, &result);
            if result.is_ok() {
                new_name.set(String::new());
                new_password.set(String::new());
            }
            busy.set(false);
            browser::alert(message);
        });
    };

    view! {
        <form
            id="update-profile-form"
            class="account-form"
            hidden=move || !ui.with(|state| state.update_form_visible)
            on:submit=on_submit
        >
            <div class="login-input">
                <label for="update-name">"new name"</label>
                <input
                    id="update-name"
                    autocomplete="name"
                    prop:value=move || new_name.get()
                    on:input=move |ev| new_name.set(event_target_value(&ev))
                />
            </div>
            <div class="login-input">
                <label for="update-password">"new password"</label>
                <input
                    id="update-password"
                    type="password"
                    autocomplete="new-password"
                    prop:value=move || new_password.get()
                    on:input=move |ev| new_password.set(event_target_value(&ev))
                />
            </div>
            <button type="submit" disabled=move || busy.get()>"save"</button>
        </form>
    }
}
