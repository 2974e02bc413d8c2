use super::*;
use leptos::prelude::*;

fn make_user() -> User {
    User {
        username: "alice".to_owned(),
        name: "Alice".to_owned(),
        created_at: "2024-03-05T18:22:11.013Z".to_owned(),
        login_token: "tok-alice".to_owned(),
    }
}

fn with_signals(f: impl FnOnce(RwSignal<AuthState>, RwSignal<UiState>)) {
    let owner = Owner::new();
    owner.with(|| f(RwSignal::new(AuthState::default()), RwSignal::new(UiState::default())));
}

#[test]
fn complete_login_populates_session_and_hides_forms() {
    with_signals(|auth, ui| {
        ui.update(UiState::show_auth_forms);
        complete_login(auth, ui, make_user());

        assert_eq!(auth.get_untracked().username(), Some("alice"));
        let layout = ui.get_untracked();
        assert!(!layout.auth_forms_visible);
        assert!(layout.profile_visible);
        assert!(layout.stories_visible);
    });
}

#[test]
fn apply_profile_update_changes_name_in_place() {
    with_signals(|auth, ui| {
        complete_login(auth, ui, make_user());
        apply_profile_update(
            auth,
            &UserRecord {
                username: "alice".to_owned(),
                name: "Alice Liddell".to_owned(),
                created_at: "2024-03-05T18:22:11.013Z".to_owned(),
            },
        );
        let user = auth.get_untracked().user.unwrap();
        assert_eq!(user.name, "Alice Liddell");
        assert_eq!(user.login_token, "tok-alice");
    });
}

#[test]
fn logout_resets_session_and_layout() {
    with_signals(|auth, ui| {
        complete_login(auth, ui, make_user());
        ui.update(UiState::open_update_form);
        logout(auth, ui);

        assert_eq!(auth.get_untracked(), AuthState::default());
        assert_eq!(ui.get_untracked(), UiState::default());
    });
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn restore_remembered_user_without_storage_stays_anonymous() {
    with_signals(|auth, ui| {
        let restored = futures::executor::block_on(restore_remembered_user(auth, ui));
        assert!(!restored);
        assert!(!auth.get_untracked().is_logged_in());
        assert!(!auth.get_untracked().loading);
    });
}

#[test]
fn finish_restore_with_replayed_user_logs_in() {
    with_signals(|auth, ui| {
        auth.update(|state| state.loading = true);
        assert!(finish_restore(auth, ui, Some(make_user())));

        let state = auth.get_untracked();
        assert_eq!(state.username(), Some("alice"));
        assert!(!state.loading);
        assert!(ui.get_untracked().profile_visible);
    });
}

#[test]
fn finish_restore_without_user_clears_loading() {
    with_signals(|auth, ui| {
        auth.update(|state| state.loading = true);
        assert!(!finish_restore(auth, ui, None));

        let state = auth.get_untracked();
        assert!(!state.is_logged_in());
        assert!(!state.loading);
        assert_eq!(ui.get_untracked(), UiState::default());
    });
}
