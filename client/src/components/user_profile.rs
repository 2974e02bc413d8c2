//! Profile section built from the current session.

use leptos::prelude::*;

use crate::components::update_profile_form::UpdateProfileForm;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;

/// Name, username and account date of the logged-in user, plus the edit form.
#[component]
pub fn UserProfile() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let user_name = move || auth.with(|state| state.user.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let user_username =
        move || auth.with(|state| state.user.as_ref().map(|u| u.username.clone()).unwrap_or_default());
    let account_date =
        move || auth.with(|state| state.user.as_ref().map(|u| u.account_date().to_owned()).unwrap_or_default());

    let on_show_form = move |_| {
        log::debug!("update profile requested");
        ui.update(UiState::open_update_form);
    };

    view! {
        <section id="user-profile" hidden=move || !ui.with(|state| state.profile_visible)>
            <h4>"User Profile Info"</h4>
            <div class="profile-row">
                <span class="profile-label">"Name: "</span>
                <span id="profile-name">{user_name}</span>
            </div>
            <div class="profile-row">
                <span class="profile-label">"Username: "</span>
                <span id="profile-username">{user_username}</span>
            </div>
            <div class="profile-row">
                <span class="profile-label">"Account Created: "</span>
                <span id="profile-account-date">{account_date}</span>
            </div>
            <button
                id="show-update-profile-form"
                hidden=move || ui.with(|state| state.update_form_visible)
                on:click=on_show_form
            >
                "Update Profile"
            </button>
            <UpdateProfileForm/>
        </section>
    }
}
