use super::*;
use crate::state::test_helpers;
use serde_json::json;

fn doc(data: Value, created_at_ms: i64) -> Document {
    Document { id: Uuid::nil(), collection: "resources".into(), data, created_at_ms }
}

#[test]
fn to_wire_adds_id_and_row_timestamp() {
    let wire = doc(json!({"name": "Food Shelf", "tags": ["Food"]}), 1_700_000_000_000).to_wire();
    assert_eq!(wire.get("id"), Some(&json!(Uuid::nil().to_string())));
    assert_eq!(wire.get("created_at"), Some(&json!(1_700_000_000_000_i64)));
    assert_eq!(wire.get("name"), Some(&json!("Food Shelf")));
}

#[test]
fn to_wire_keeps_document_timestamp() {
    let wire = doc(json!({"created_at": 5}), 9).to_wire();
    assert_eq!(wire.get("created_at"), Some(&json!(5)));
}

#[test]
fn to_wire_overrides_stored_id_field() {
    let wire = doc(json!({"id": "spoofed"}), 0).to_wire();
    assert_eq!(wire.get("id"), Some(&json!(Uuid::nil().to_string())));
}

#[test]
fn to_wire_tolerates_non_object_data() {
    let wire = doc(json!([1, 2, 3]), 7).to_wire();
    assert_eq!(wire, json!({"id": Uuid::nil().to_string(), "created_at": 7}));
}

#[test]
fn ensure_readable_follows_allow_list() {
    let config = test_helpers::test_config();
    assert!(ensure_readable(&config, "resources").is_ok());
    assert!(ensure_readable(&config, "events").is_ok());
    let err = ensure_readable(&config, "admins").expect_err("should be forbidden");
    assert!(matches!(err, CollectionError::Forbidden(ref name) if name == "admins"));
    assert_eq!(err.to_string(), "Missing or insufficient permissions.");
}

#[test]
fn validate_documents_reports_first_non_object() {
    assert!(validate_documents(&[]).is_ok());
    assert!(validate_documents(&[json!({"a": 1}), json!({})]).is_ok());
    let err = validate_documents(&[json!({}), json!("text"), json!(3)]).expect_err("should fail");
    assert!(matches!(err, CollectionError::InvalidDocument(1)));
}

#[test]
fn error_codes_are_grepable() {
    assert_eq!(CollectionError::Forbidden("x".into()).error_code(), "E_FORBIDDEN");
    assert_eq!(CollectionError::InvalidDocument(0).error_code(), "E_BAD_REQUEST");
    assert_eq!(CollectionError::Database(sqlx::Error::RowNotFound).error_code(), "E_DATABASE");
}

#[tokio::test]
async fn insert_rejects_invalid_batch_before_touching_database() {
    let state = test_helpers::test_app_state();
    let err = insert_documents(&state.pool, "events", &[json!(null)])
        .await
        .expect_err("should reject");
    assert!(matches!(err, CollectionError::InvalidDocument(0)));
}

#[cfg(feature = "live-db-tests")]
#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL/live Postgres"]
async fn snapshot_is_newest_first_and_scoped_to_collection() {
    let pool = test_helpers::integration_pool().await;

    insert_documents(&pool, "resources", &[json!({"name": "Older"})])
        .await
        .expect("first insert");
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    insert_documents(&pool, "resources", &[json!({"name": "Newer"})])
        .await
        .expect("second insert");
    insert_documents(&pool, "events", &[json!({"title": "Picnic"})])
        .await
        .expect("event insert");

    let docs = snapshot(&pool, "resources").await.expect("snapshot");
    let names: Vec<_> = docs
        .iter()
        .filter_map(|d| d.get("name").and_then(Value::as_str))
        .collect();
    assert_eq!(names, vec!["Newer", "Older"]);
    assert!(docs.iter().all(|d| d.get("created_at").is_some()));
}
