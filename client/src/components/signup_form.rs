//! Signup form: name + username + password against `POST /signup`.

#[cfg(test)]
#[path = "signup_form_test.rs"]
mod signup_form_test;

use leptos::prelude::*;

use crate::net::api::{self, ApiError};
use crate::net::types::User;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::session::complete_login;

const USERNAME_TAKEN_MESSAGE: &str = "Username already taken. Please choose another one.";
const SIGNUP_FAILED_MESSAGE: &str = "An error occurred. Please try again.";

/// Inline message for a failed signup. Only a 409 conflict is distinguished.
pub(crate) fn signup_error_message(err: &ApiError) -> &'static str {
    if err.status() == Some(409) { USERNAME_TAKEN_MESSAGE } else { SIGNUP_FAILED_MESSAGE }
}

/// Finish a signup request. Returns the inline error to show, if any.
pub(crate) fn apply_signup_result(
    auth: RwSignal<AuthState>,
    ui: RwSignal<UiState>,
    result: Result<User, ApiError>,
) -> Option<&'static str> {
    match result {
        Ok(user) => {
            complete_login(auth, ui, user);
            None
        }
        Err(e) => {
            log::warn!("signup failed: {e}");
            Some(signup_error_message(&e))
        }
    }
}

#[component]
pub fn SignupForm() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let name = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        log::debug!("signup submitted");
        if busy.get_untracked() {
            return;
        }
        error.set(String::new());
        busy.set(true);
        let name_value = name.get_untracked();
        let username_value = username.get_untracked();
        let password_value = password.get_untracked();

        leptos::task::spawn_local(async move {
            let result = api::signup(&username_value, &password_value, &name_value).await;
            match apply_signup_result(auth, ui, result) {
                None => {
                    name.set(String::new());
                    username.set(String::new());
                    password.set(String::new());
                }
                Some(message) => error.set(message.to_owned()),
            }
            busy.set(false);
        });
    };

    view! {
        <form id="signup-form" class="account-form" on:submit=on_submit>
            <h4>"Create Account"</h4>
            <div class="login-input">
                <label for="signup-name">"name"</label>
                <input
                    id="signup-name"
                    autocomplete="name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </div>
            <div class="login-input">
                <label for="signup-username">"username"</label>
                <input
                    id="signup-username"
                    autocomplete="username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
            </div>
            <div class="login-input">
                <label for="signup-password">"password"</label>
                <input
                    id="signup-password"
                    type="password"
                    autocomplete="new-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </div>
            <button type="submit" disabled=move || busy.get()>"create account"</button>
            <p id="signup-error" class="form-error">{move || error.get()}</p>
        </form>
    }
}
