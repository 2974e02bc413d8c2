//! Login form: username + password against `POST /login`.

#[cfg(test)]
#[path = "login_form_test.rs"]
mod login_form_test;

use leptos::prelude::*;

use crate::net::api::{self, ApiError};
use crate::net::types::User;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::session::complete_login;

const LOGIN_ERROR_MESSAGE: &str = "Invalid username or password. Please try again.";

/// Finish a login request. Returns the inline error to show, if any.
pub(crate) fn apply_login_result(
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
            log::warn!("login failed: {e}");
            Some(LOGIN_ERROR_MESSAGE)
        }
    }
}

#[component]
pub fn LoginForm() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        log::debug!("login submitted");
        if busy.get_untracked() {
            return;
        }
        error.set(String::new());
        busy.set(true);
        let username_value = username.get_untracked();
        let password_value = password.get_untracked();

        leptos::task::spawn_local(async move {
            let result = api::login(&username_value, &password_value).await;
            match apply_login_result(auth, ui, result) {
                None => {
                    username.set(String::new());
                    password.set(String::new());
                }
                Some(message) => error.set(message.to_owned()),
            }
            busy.set(false);
        });
    };

    view! {
        <form id="login-form" class="account-form" on:submit=on_submit>
            <h4>"Login"</h4>
            <div class="login-input">
                <label for="login-username">"username"</label>
                <input
                    id="login-username"
                    autocomplete="current-username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
            </div>
            <div class="login-input">
                <label for="login-password">"password"</label>
                <input
                    id="login-password"
                    type="password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </div>
            <button type="submit" disabled=move || busy.get()>"login"</button>
            <p id="login-error" class="form-error">{move || error.get()}</p>
        </form>
    }
}
