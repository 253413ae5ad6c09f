use super::*;
use serde_json::json;

fn sample_docs() -> Vec<Value> {
    vec![
        json!({
            "id": "a",
            "name": "Northside Food Shelf",
            "address": "12 Elm St",
            "community": "Northside",
            "contact": "555-0100",
            "indoor_outdoor": "Indoor",
            "tags": ["Food", "Family"],
            "description": "Weekly groceries",
            "created_at": 1_000
        }),
        json!({
            "id": "b",
            "name": "Riverside Park",
            "address": "1 River Rd",
            "community": "Riverside",
            "indoor_outdoor": "Outdoor",
            "tags": ["Recreation"],
            "created_at": 3_000
        }),
        json!({
            "id": "c",
            "name": "Senior Center",
            "address": "40 Oak Ave",
            "community": "Downtown",
            "tags": ["Seniors", "Health"],
            "description": "Free blood pressure checks",
            "created_at": 2_000
        }),
    ]
}

fn loaded_state() -> ResourcesState {
    let mut state = ResourcesState::loading();
    state.apply_snapshot(&sample_docs());
    state
}

#[test]
fn from_document_applies_defaults() {
    let r = Resource::from_document(&json!({"name": "Library"}));
    assert_eq!(r.name, "Library");
    assert_eq!(r.address, "");
    assert!(r.tags.is_empty());
    assert_eq!(r.created_at, 0);
}

#[test]
fn from_document_accepts_camel_case_keys() {
    let r = Resource::from_document(&json!({"indoorOutdoor": "Both", "createdAt": 42}));
    assert_eq!(r.indoor_outdoor, "Both");
    assert_eq!(r.created_at, 42);
}

#[test]
fn from_document_ignores_non_string_tags() {
    let r = Resource::from_document(&json!({"tags": ["Food", 7, null, "Health"]}));
    assert_eq!(r.tags, vec!["Food".to_owned(), "Health".to_owned()]);
}

#[test]
fn snapshot_sorts_newest_first() {
    let ids: Vec<_> = loaded_state().resources.into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec!["b", "c", "a"]);
}

#[test]
fn no_filters_show_everything() {
    assert_eq!(loaded_state().visible().len(), 3);
}

#[test]
fn category_filter_requires_matching_tag() {
    let mut state = loaded_state();
    state.category = Some("Food".into());
    let visible = state.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "a");
}

#[test]
fn category_without_matches_yields_empty_set() {
    let mut state = loaded_state();
    state.category = Some("Housing".into());
    assert!(state.visible().is_empty());
}

#[test]
fn search_is_case_insensitive_across_fields() {
    let mut state = loaded_state();
    state.query = "BLOOD pressure".into();
    assert_eq!(state.visible()[0].id, "c");

    state.query = "riverside".into();
    assert_eq!(state.visible()[0].id, "b");

    state.query = "555-0100".into();
    assert_eq!(state.visible()[0].id, "a");

    state.query = "outdoor".into();
    assert_eq!(state.visible().len(), 1);
}

#[test]
fn search_matches_tags() {
    let mut state = loaded_state();
    state.query = "seniors".into();
    assert_eq!(state.visible().len(), 1);
}

#[test]
fn category_and_search_combine() {
    let mut state = loaded_state();
    state.category = Some("Health".into());
    state.query = "northside".into();
    assert!(state.visible().is_empty());
    state.query = "oak".into();
    assert_eq!(state.visible().len(), 1);
}

#[test]
fn toggle_category_selects_and_clears() {
    let mut state = ResourcesState::default();
    state.toggle_category("Food");
    assert_eq!(state.category.as_deref(), Some("Food"));
    state.toggle_category("Health");
    assert_eq!(state.category.as_deref(), Some("Health"));
    state.toggle_category("Health");
    assert_eq!(state.category, None);
}

#[test]
fn error_clears_records() {
    let mut state = loaded_state();
    state.apply_error("Missing or insufficient permissions.");
    assert!(state.resources.is_empty());
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("Missing or insufficient permissions."));

    state.apply_snapshot(&sample_docs());
    assert_eq!(state.error, None);
    assert_eq!(state.resources.len(), 3);
}

#[test]
fn search_text_is_matched_untrimmed() {
    let mut state = loaded_state();
    state.query = "shelf".into();
    assert_eq!(state.visible().len(), 1);
    state.query = "shelf  ".into();
    assert!(state.visible().is_empty());
    state.query = "food shelf".into();
    assert_eq!(state.visible()[0].id, "a");
}
