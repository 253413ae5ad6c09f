//! Demo admin gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Admin pages share one `localStorage` flag. Login compares the typed
//! credentials against build-time values (`GATHERLY_ADMIN_USERNAME`,
//! `GATHERLY_ADMIN_PASSWORD`) or the demo defaults and sets the flag on a
//! match. This is a UI gate only; it provides no security.
//!
//! TRADE-OFFS
//! ==========
//! Storage access is browser-only. SSR and test builds read the flag as unset
//! and writes are no-ops, so every gated page renders its redirect path on
//! the server and re-checks after hydration.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "gatherly_admin_auth";

const DEFAULT_USERNAME: &str = "admin";
const DEFAULT_PASSWORD: &str = "gatherly2024";

pub const LOGIN_PATH: &str = "/admin/login";
pub const DASHBOARD_PATH: &str = "/admin";
pub const LOGIN_ERROR: &str = "Invalid username or password.";

/// Credentials baked in at build time, falling back to the demo defaults.
pub fn configured_credentials() -> (&'static str, &'static str) {
    (
        option_env!("GATHERLY_ADMIN_USERNAME").unwrap_or(DEFAULT_USERNAME),
        option_env!("GATHERLY_ADMIN_PASSWORD").unwrap_or(DEFAULT_PASSWORD),
    )
}

pub fn credentials_match(username: &str, password: &str) -> bool {
    let (expected_user, expected_pass) = configured_credentials();
    username == expected_user && password == expected_pass
}

/// Check the typed credentials and set the flag on success.
///
/// # Errors
///
/// Returns [`LOGIN_ERROR`] on mismatch; the flag is left untouched.
pub fn try_login(username: &str, password: &str) -> Result<(), &'static str> {
    if !credentials_match(username, password) {
        return Err(LOGIN_ERROR);
    }
    set_authenticated(true);
    Ok(())
}

/// Read the admin flag from localStorage.
pub fn is_authenticated() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                return val == "true";
            }
        }
        false
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Set or clear the admin flag.
pub fn set_authenticated(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = if enabled {
                    storage.set_item(STORAGE_KEY, "true")
                } else {
                    storage.remove_item(STORAGE_KEY)
                };
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Redirect to the admin login page on mount when the flag is unset.
///
/// Effects only run after hydration, so the check always sees browser storage.
pub fn install_admin_redirect<F>(navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if !is_authenticated() {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
}
