use super::*;

#[test]
fn first_missing_names_first_blank_field() {
    let fields = [("Name", "Food Shelf"), ("Address", "  "), ("Community", "")];
    assert_eq!(first_missing(&fields), Some("Address"));
}

#[test]
fn first_missing_is_none_when_complete() {
    assert_eq!(first_missing(&[("Name", "x"), ("Address", "y")]), None);
    assert_eq!(first_missing(&[]), None);
}

#[test]
fn check_required_builds_message() {
    assert_eq!(check_required(&[("Title", "")]), Err("Title is required.".to_owned()));
    assert_eq!(check_required(&[("Title", "Picnic")]), Ok(()));
}

#[test]
fn email_needs_at_and_dot_after_it() {
    assert!(is_valid_email("sam@example.org"));
    assert!(is_valid_email("  sam@mail.example.org "));
    assert!(!is_valid_email("sam.example.org"));
    assert!(!is_valid_email("sam@localhost"));
    assert!(!is_valid_email("@example.org"));
    assert!(!is_valid_email(""));
}

#[test]
fn parse_list_trims_and_drops_empties() {
    assert_eq!(parse_list(" Games, Food ,,Music "), vec!["Games", "Food", "Music"]);
    assert!(parse_list("  ,  ").is_empty());
}

#[test]
fn button_label_follows_phase() {
    assert_eq!(SubmitPhase::Idle.button_label("Submit"), "Submit");
    assert_eq!(SubmitPhase::Submitting.button_label("Submit"), "Submitting...");
    assert_eq!(SubmitPhase::Succeeded.button_label("Register"), "Register");
}

#[test]
fn delays_match_ui_timing() {
    assert_eq!(SUBMIT_DELAY_MS, 800);
    assert_eq!(BANNER_MS, 3_000);
    assert_eq!(LOGOUT_DELAY_MS, 600);
}

#[test]
fn simulated_submit_succeeds_and_resets_fields() {
    let name = RwSignal::new("Northside Food Shelf".to_owned());
    let address = RwSignal::new("12 Elm St".to_owned());
    let tags = RwSignal::new(vec!["Food".to_owned()]);
    let phase = RwSignal::new(SubmitPhase::Idle);

    simulate_submit(phase, move || {
        name.set(String::new());
        address.set(String::new());
        tags.set(Vec::new());
    });

    assert_eq!(phase.get_untracked(), SubmitPhase::Succeeded);
    assert!(name.get_untracked().is_empty());
    assert!(address.get_untracked().is_empty());
    assert!(tags.get_untracked().is_empty());
}

#[test]
fn simulated_submit_ignores_presses_while_submitting() {
    let name = RwSignal::new("Picnic".to_owned());
    let phase = RwSignal::new(SubmitPhase::Submitting);

    simulate_submit(phase, move || name.set(String::new()));

    assert_eq!(phase.get_untracked(), SubmitPhase::Submitting);
    assert_eq!(name.get_untracked(), "Picnic");
}
