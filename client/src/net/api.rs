//! User API wrapper for the news REST API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable`/`None` since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get typed `Result` outputs instead of panics. Only the HTTP status
//! is classified; handlers map errors to fixed UI messages.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use super::types::{AuthResponse, Credentials, CredentialsRequest, ProfileUpdateRequest, UserResponse};
use super::types::{ProfileChanges, User, UserRecord};

/// Errors produced by API calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(String),

    /// The API answered with a non-success status.
    #[error("request failed with status {status}")]
    Status { status: u16 },

    /// The response body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// HTTP status, if the API answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn user_endpoint(base: &str, username: &str) -> String {
    endpoint(base, &format!("users/{}", urlencoding::encode(username)))
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(ApiError::Status { status: resp.status() });
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn post_credentials(path: &str, credentials: Credentials<'_>) -> Result<User, ApiError> {
    let url = endpoint(&crate::config::api_base_url(), path);
    let resp = gloo_net::http::Request::post(&url)
        .json(&CredentialsRequest { user: credentials })
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let body: AuthResponse = read_json(resp).await?;
    Ok(User::from_auth(body))
}

/// Log in with username and password via `POST /login`.
///
/// # Errors
///
/// Returns an error if the request fails or the credentials are rejected.
pub async fn login(username: &str, password: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_credentials("login", Credentials { username, password, name: None }).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /signup`. A taken username answers 409.
///
/// # Errors
///
/// Returns an error if the request fails or the API rejects the signup.
pub async fn signup(username: &str, password: &str, name: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_credentials("signup", Credentials { username, password, name: Some(name) }).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password, name);
        Err(ApiError::Unavailable)
    }
}

/// Rebuild a session from a remembered token via `GET /users/{username}`.
/// Returns `None` if the token is no longer valid or on the server.
pub async fn login_via_stored_credentials(token: &str, username: &str) -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let url = user_endpoint(&crate::config::api_base_url(), username);
        let resp = match gloo_net::http::Request::get(&url).query([("token", token)]).send().await {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("stored credential login failed: {e}");
                return None;
            }
        };
        match read_json::<UserResponse>(resp).await {
            Ok(body) => Some(User::from_record(body.user, token.to_owned())),
            Err(e) => {
                log::warn!("stored credential login rejected: {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, username);
        None
    }
}

/// Apply a partial profile edit via `PATCH /users/{username}`.
/// The session token travels in the JSON body.
///
/// # Errors
///
/// Returns an error if the request fails or the API rejects the edit.
pub async fn update_profile(user: &User, changes: &ProfileChanges) -> Result<UserRecord, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = user_endpoint(&crate::config::api_base_url(), &user.username);
        let payload = ProfileUpdateRequest { token: &user.login_token, user: changes };
        let resp = gloo_net::http::Request::patch(&url)
            .json(&payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let body: UserResponse = read_json(resp).await?;
        Ok(body.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user, changes);
        Err(ApiError::Unavailable)
    }
}
