//! Mount point for the stories list. Only its visibility is managed here.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn StoriesContainer() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <section id="stories-container" hidden=move || !ui.with(|state| state.stories_visible)>
            <ol id="all-stories-list" class="stories-list"></ol>
        </section>
    }
}
