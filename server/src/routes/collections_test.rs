use super::*;
use crate::state::test_helpers;
use serde_json::json;

fn seed_enabled_state() -> AppState {
    let mut config = test_helpers::test_config();
    config.seed_enabled = true;
    test_helpers::test_app_state_with_config(config)
}

#[test]
fn collection_error_to_status_maps_variants() {
    assert_eq!(collection_error_to_status(CollectionError::Forbidden("x".into())), StatusCode::FORBIDDEN);
    assert_eq!(collection_error_to_status(CollectionError::InvalidDocument(2)), StatusCode::BAD_REQUEST);
    assert_eq!(
        collection_error_to_status(CollectionError::Database(sqlx::Error::RowNotFound)),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[tokio::test]
async fn list_rejects_collection_outside_allow_list() {
    let state = test_helpers::test_app_state();
    let result = list_collection(State(state), Path("admins".to_owned())).await;
    assert_eq!(result.err(), Some(StatusCode::FORBIDDEN));
}

#[tokio::test]
async fn seed_is_hidden_when_disabled() {
    let state = test_helpers::test_app_state();
    let result = seed_collection(State(state), Path("events".to_owned()), Json(vec![json!({"title": "Picnic"})])).await;
    assert_eq!(result.err(), Some(StatusCode::NOT_FOUND));
}

#[tokio::test]
async fn seed_rejects_collection_outside_allow_list() {
    let result = seed_collection(State(seed_enabled_state()), Path("admins".to_owned()), Json(vec![json!({})])).await;
    assert_eq!(result.err(), Some(StatusCode::FORBIDDEN));
}

#[tokio::test]
async fn seed_rejects_non_object_documents() {
    let result = seed_collection(State(seed_enabled_state()), Path("events".to_owned()), Json(vec![json!("nope")])).await;
    assert_eq!(result.err(), Some(StatusCode::BAD_REQUEST));
}

#[cfg(feature = "live-db-tests")]
#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL/live Postgres"]
async fn seed_then_list_round_trip() {
    let pool = test_helpers::integration_pool().await;
    let mut state = test_helpers::test_app_state_with_pool(pool);
    let mut config = (*state.config).clone();
    config.seed_enabled = true;
    state.config = std::sync::Arc::new(config);

    let (status, Json(body)) = seed_collection(
        State(state.clone()),
        Path("events".to_owned()),
        Json(vec![json!({"title": "Picnic"}), json!({"title": "Cleanup"})]),
    )
    .await
    .expect("seed should succeed");
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body.inserted, 2);

    let Json(docs) = list_collection(State(state), Path("events".to_owned()))
        .await
        .expect("list should succeed");
    assert_eq!(docs.len(), 2);
}
