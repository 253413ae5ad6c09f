#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn configured_credentials_match() {
    let (user, pass) = configured_credentials();
    assert!(credentials_match(user, pass));
    assert!(try_login(user, pass).is_ok());
}

#[test]
fn default_credentials_apply_without_build_env() {
    if option_env!("GATHERLY_ADMIN_USERNAME").is_none() && option_env!("GATHERLY_ADMIN_PASSWORD").is_none() {
        assert_eq!(configured_credentials(), ("admin", "gatherly2024"));
    }
}

#[test]
fn mismatch_reports_login_error() {
    let (user, pass) = configured_credentials();
    assert_eq!(try_login(user, "wrong"), Err("Invalid username or password."));
    assert_eq!(try_login("nobody", pass), Err(LOGIN_ERROR));
    assert_eq!(try_login("", ""), Err(LOGIN_ERROR));
}

#[test]
fn credentials_are_case_and_whitespace_sensitive() {
    let (user, pass) = configured_credentials();
    assert!(!credentials_match(&user.to_uppercase(), pass) || user.to_uppercase() == user);
    assert!(!credentials_match(&format!(" {user}"), pass));
}

#[test]
fn flag_reads_unset_outside_browser() {
    set_authenticated(true);
    assert!(!is_authenticated());
    set_authenticated(false);
    assert!(!is_authenticated());
}
