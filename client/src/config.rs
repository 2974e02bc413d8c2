//! Compile-time client configuration.
//!
//! The REST API base URL is baked into the WASM bundle at build time from
//! `NEWSDESK_API_BASE_URL`, falling back to the public news API.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "https://hack-or-snooze-v3.herokuapp.com";

/// Base URL of the news REST API, without a trailing slash.
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("NEWSDESK_API_BASE_URL"))
}

fn normalize_base_url(raw: Option<&str>) -> String {
    let raw = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_API_BASE_URL);
    raw.trim_end_matches('/').to_owned()
}
