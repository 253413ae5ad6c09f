//! Form helpers: required-field checks and simulated submission.
//!
//! None of the site's forms make a network call. Submission is a short
//! deferred delay, a success banner that hides itself, and a field reset.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use leptos::prelude::*;

/// Delay of the simulated "Submitting..." state.
pub const SUBMIT_DELAY_MS: u64 = 800;
/// How long the success banner stays visible.
pub const BANNER_MS: u64 = 3_000;
/// Delay between "Signing out..." and the flag being cleared.
pub const LOGOUT_DELAY_MS: u64 = 600;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
}

impl SubmitPhase {
    pub fn button_label(self, idle: &'static str) -> &'static str {
        match self {
            Self::Submitting => "Submitting...",
            Self::Idle | Self::Succeeded => idle,
        }
    }
}

/// Label of the first required field whose value is blank.
pub fn first_missing<'a>(fields: &[(&'a str, &str)]) -> Option<&'a str> {
    fields
        .iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| *label)
}

pub fn missing_field_message(label: &str) -> String {
    format!("{label} is required.")
}

/// Validate required fields, returning the inline message for the first gap.
///
/// # Errors
///
/// Returns the message naming the first blank field.
pub fn check_required(fields: &[(&str, &str)]) -> Result<(), String> {
    match first_missing(fields) {
        Some(label) => Err(missing_field_message(label)),
        None => Ok(()),
    }
}

/// Loose email shape: an `@` with a `.` somewhere after it.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'))
}

/// Split a comma separated input into trimmed, non-empty entries.
pub fn parse_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Run the simulated submission: `Submitting` for [`SUBMIT_DELAY_MS`], then
/// `Succeeded` with `on_success` applied, then back to `Idle` after
/// [`BANNER_MS`] unless another submission started meanwhile.
pub fn simulate_submit<F>(phase: RwSignal<SubmitPhase>, on_success: F)
where
    F: FnOnce() + 'static,
{
    if phase.get_untracked() == SubmitPhase::Submitting {
        return;
    }
    phase.set(SubmitPhase::Submitting);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(SUBMIT_DELAY_MS)).await;
        on_success();
        phase.set(SubmitPhase::Succeeded);
        gloo_timers::future::sleep(std::time::Duration::from_millis(BANNER_MS)).await;
        if phase.get_untracked() == SubmitPhase::Succeeded {
            phase.set(SubmitPhase::Idle);
        }
    });

    #[cfg(not(feature = "hydrate"))]
    {
        on_success();
        phase.set(SubmitPhase::Succeeded);
    }
}
