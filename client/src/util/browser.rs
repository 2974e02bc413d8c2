//! Thin wrappers over `window` side effects. No-ops outside the browser.

/// Show a blocking `alert()` dialog.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::info!("alert: {message}");
    }
}

/// Reload the current page, discarding all in-memory state.
pub fn reload_page() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }
}
