//! Remembered-login persistence in browser `localStorage`.
//!
//! Stores the session token and username as two plaintext keys so a page
//! reload (or a later visit) can replay them. Browser-only; SSR and native
//! builds no-op.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use crate::net::types::User;

pub const TOKEN_KEY: &str = "token";
pub const USERNAME_KEY: &str = "username";

/// Token and username read back from storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredCredentials {
    pub token: String,
    pub username: String,
}

impl StoredCredentials {
    /// Both values must be present and non-empty.
    pub fn from_parts(token: Option<String>, username: Option<String>) -> Option<Self> {
        let token = token.filter(|t| !t.is_empty())?;
        let username = username.filter(|u| !u.is_empty())?;
        Some(Self { token, username })
    }
}

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read remembered credentials, if both keys are set.
pub fn load() -> Option<StoredCredentials> {
    #[cfg(feature = "hydrate")]
    {
        let storage = storage()?;
        StoredCredentials::from_parts(
            storage.get_item(TOKEN_KEY).ok().flatten(),
            storage.get_item(USERNAME_KEY).ok().flatten(),
        )
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Remember `user`'s token and username.
pub fn save(user: &User) {
    log::debug!("saving credentials for {}", user.username);
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = storage() else {
            return;
        };
        let _ = storage.set_item(TOKEN_KEY, &user.login_token);
        let _ = storage.set_item(USERNAME_KEY, &user.username);
    }
}

/// Wipe all of `localStorage`, not only the credential keys.
pub fn clear_all() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.clear();
        }
    }
}
