use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_shows_only_stories() {
    let state = UiState::default();
    assert!(state.stories_visible);
    assert!(!state.auth_forms_visible);
    assert!(!state.profile_visible);
    assert!(!state.update_form_visible);
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn hide_page_components_hides_everything() {
    let mut state = UiState { stories_visible: true, auth_forms_visible: true, profile_visible: true, update_form_visible: true };
    state.hide_page_components();
    assert!(!state.stories_visible);
    assert!(!state.auth_forms_visible);
    assert!(!state.profile_visible);
    assert!(!state.update_form_visible);
}

#[test]
fn show_logged_in_hides_forms_and_shows_profile() {
    let mut state = UiState::default();
    state.show_auth_forms();
    state.show_logged_in();
    assert!(!state.auth_forms_visible);
    assert!(state.stories_visible);
    assert!(state.profile_visible);
    assert!(!state.update_form_visible);
}

#[test]
fn show_auth_forms_hides_stories() {
    let mut state = UiState::default();
    state.show_auth_forms();
    assert!(state.auth_forms_visible);
    assert!(!state.stories_visible);
}

#[test]
fn show_home_anonymous_matches_default() {
    let mut state = UiState::default();
    state.show_auth_forms();
    state.show_home(false);
    assert_eq!(state, UiState::default());
}

#[test]
fn show_home_logged_in_keeps_profile() {
    let mut state = UiState::default();
    state.show_home(true);
    assert!(state.profile_visible);
    assert!(state.stories_visible);
}

#[test]
fn update_form_toggle_round_trip() {
    let mut state = UiState::default();
    state.show_logged_in();
    state.open_update_form();
    assert!(state.update_form_visible);
    state.close_update_form();
    assert!(!state.update_form_visible);
    assert!(state.profile_visible);
}
