use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_record() -> UserRecord {
    UserRecord {
        username: "alice".to_owned(),
        name: "Alice".to_owned(),
        created_at: "2024-03-05T18:22:11.013Z".to_owned(),
    }
}

fn make_user() -> User {
    User::from_record(make_record(), "tok-1".to_owned())
}

// =============================================================
// Responses
// =============================================================

#[test]
fn auth_response_parses_api_shape_and_ignores_extra_fields() {
    let raw = r#"{
        "token": "tok-abc",
        "user": {
            "username": "alice",
            "name": "Alice",
            "createdAt": "2024-03-05T18:22:11.013Z",
            "favorites": [],
            "ownStories": []
        }
    }"#;
    let resp: AuthResponse = serde_json::from_str(raw).unwrap();
    let user = User::from_auth(resp);
    assert_eq!(user.username, "alice");
    assert_eq!(user.name, "Alice");
    assert_eq!(user.login_token, "tok-abc");
}

#[test]
fn user_response_requires_created_at() {
    let raw = r#"{"user": {"username": "alice", "name": "Alice"}}"#;
    assert!(serde_json::from_str::<UserResponse>(raw).is_err());
}

// =============================================================
// Requests
// =============================================================

#[test]
fn login_request_omits_name() {
    let req = CredentialsRequest { user: Credentials { username: "alice", password: "pw", name: None } };
    let json = serde_json::to_value(req).unwrap();
    assert_eq!(json, serde_json::json!({"user": {"username": "alice", "password": "pw"}}));
}

#[test]
fn signup_request_includes_name() {
    let req = CredentialsRequest { user: Credentials { username: "bob", password: "pw", name: Some("Bob") } };
    let json = serde_json::to_value(req).unwrap();
    assert_eq!(json["user"]["name"], "Bob");
}

#[test]
fn profile_changes_from_form_skips_empty_fields() {
    let changes = ProfileChanges::from_form("", "");
    assert_eq!(changes, ProfileChanges::default());
    assert_eq!(serde_json::to_value(&changes).unwrap(), serde_json::json!({}));
}

#[test]
fn profile_changes_from_form_keeps_values_as_typed() {
    let changes = ProfileChanges::from_form("  New Name ", " secret ");
    assert_eq!(changes.name.as_deref(), Some("  New Name "));
    assert_eq!(changes.password.as_deref(), Some(" secret "));
}

#[test]
fn profile_update_request_carries_token_in_body() {
    let changes = ProfileChanges { name: Some("Al".to_owned()), password: None };
    let req = ProfileUpdateRequest { token: "tok-1", user: &changes };
    let json = serde_json::to_value(req).unwrap();
    assert_eq!(json, serde_json::json!({"token": "tok-1", "user": {"name": "Al"}}));
}

// =============================================================
// User
// =============================================================

#[test]
fn account_date_is_date_prefix() {
    assert_eq!(make_user().account_date(), "2024-03-05");
}

#[test]
fn account_date_short_timestamp_is_returned_whole() {
    let mut user = make_user();
    user.created_at = "2024".to_owned();
    assert_eq!(user.account_date(), "2024");
}

#[test]
fn apply_record_keeps_username_and_token() {
    let mut user = make_user();
    let record = UserRecord { name: "Alice B.".to_owned(), ..make_record() };
    user.apply_record(&record);
    assert_eq!(user.name, "Alice B.");
    assert_eq!(user.username, "alice");
    assert_eq!(user.login_token, "tok-1");
}
