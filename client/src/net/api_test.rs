use super::*;

#[test]
fn seed_endpoint_formats_expected_path() {
    assert_eq!(seed_endpoint("events"), "/api/collections/events/seed");
}

#[test]
fn seed_failed_message_explains_common_statuses() {
    assert_eq!(seed_failed_message(404), "seeding is disabled on this server");
    assert_eq!(seed_failed_message(403), "collection is not writable");
    assert_eq!(seed_failed_message(500), "seed request failed: 500");
}

#[test]
fn seed_success_message_counts_events() {
    assert_eq!(seed_success_message(&SeedResult { inserted: 1 }), "Inserted 1 event.");
    assert_eq!(seed_success_message(&SeedResult { inserted: 6 }), "Inserted 6 events.");
}

#[test]
fn seed_result_ignores_extra_fields() {
    let result: SeedResult = serde_json::from_str(r#"{"inserted": 2, "ids": ["a", "b"]}"#).expect("parse");
    assert_eq!(result.inserted, 2);
}
