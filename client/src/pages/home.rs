//! The single news page: nav, stories, account forms and profile.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::login_form::LoginForm;
use crate::components::nav_bar::NavBar;
use crate::components::signup_form::SignupForm;
use crate::components::stories_container::StoriesContainer;
use crate::components::user_profile::UserProfile;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    // Forms stay hidden while remembered credentials are replayed.
    let forms_hidden = move || !ui.with(|state| state.auth_forms_visible) || auth.with(|state| state.loading);

    view! {
        <div class="home-page">
            <NavBar/>
            <StoriesContainer/>
            <section id="account-forms" hidden=forms_hidden>
                <LoginForm/>
                <SignupForm/>
            </section>
            <UserProfile/>
        </div>
    }
}
