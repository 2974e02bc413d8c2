//! Wire DTOs for the news REST API and the in-memory session record.
//!
//! DESIGN
//! ======
//! Request types borrow from form input so handlers can serialize without
//! cloning. Response types ignore unknown fields (favorites, stories) that
//! belong to other parts of the front end.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// User as returned by the API under the `user` key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub username: String,
    pub name: String,
    /// ISO-8601 account creation timestamp.
    pub created_at: String,
}

/// Response body of `POST /login` and `POST /signup`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    pub user: UserRecord,
    pub token: String,
}

/// Response body of `GET /users/:username` and `PATCH /users/:username`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UserResponse {
    pub user: UserRecord,
}

/// Credentials submitted by the login and signup forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
    /// Only sent on signup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
}

/// Request body of `POST /login` and `POST /signup`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CredentialsRequest<'a> {
    pub user: Credentials<'a>,
}

/// Partial profile edit. Absent fields are left unchanged by the API.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProfileChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl ProfileChanges {
    /// Build changes from raw form input; empty fields mean "unchanged".
    /// Non-empty values are sent exactly as typed.
    pub fn from_form(name: &str, password: &str) -> Self {
        Self {
            name: (!name.is_empty()).then(|| name.to_owned()),
            password: (!password.is_empty()).then(|| password.to_owned()),
        }
    }
}

/// Request body of `PATCH /users/:username`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ProfileUpdateRequest<'a> {
    pub token: &'a str,
    pub user: &'a ProfileChanges,
}

/// The logged-in user session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub name: String,
    pub created_at: String,
    /// Bearer credential for subsequent API calls.
    pub login_token: String,
}

impl User {
    pub fn from_record(record: UserRecord, token: String) -> Self {
        Self {
            username: record.username,
            name: record.name,
            created_at: record.created_at,
            login_token: token,
        }
    }

    pub fn from_auth(resp: AuthResponse) -> Self {
        Self::from_record(resp.user, resp.token)
    }

    /// Refresh profile fields from a server record. Username and token stay.
    pub fn apply_record(&mut self, record: &UserRecord) {
        self.name.clone_from(&record.name);
        self.created_at.clone_from(&record.created_at);
    }

    /// `YYYY-MM-DD` prefix of the creation timestamp.
    pub fn account_date(&self) -> &str {
        self.created_at.get(..10).unwrap_or(&self.created_at)
    }
}
