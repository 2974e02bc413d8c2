//! Top navigation: home link plus login/signup or username/logout.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::session;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let logged_in = move || auth.with(AuthState::is_logged_in);
    let username = move || auth.with(|state| state.username().unwrap_or_default().to_owned());

    let on_home = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        let logged_in = auth.with_untracked(AuthState::is_logged_in);
        ui.update(|state| state.show_home(logged_in));
    };
    let on_login = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        log::debug!("nav login clicked");
        ui.update(UiState::show_auth_forms);
    };
    let on_logout = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        session::logout(auth, ui);
    };

    view! {
        <nav class="nav-bar">
            <a id="nav-all" class="nav-brand" href="#" on:click=on_home>"Newsdesk"</a>
            <Show
                when=logged_in
                fallback=move || view! {
                    <a
                        id="nav-login"
                        class="nav-link"
                        href="#"
                        hidden=move || auth.with(|state| state.loading)
                        on:click=on_login
                    >
                        "login/signup"
                    </a>
                }
            >
                <span id="nav-user-profile" class="nav-user">{username}</span>
                <a id="nav-logout" class="nav-link" href="#" on:click=on_logout>"(logout)"</a>
            </Show>
        </nav>
    }
}
