mod common;

use axum::http::StatusCode;
use darkshort::domain::repositories::KeyValueStore;
use serde_json::json;

#[tokio::test]
async fn test_shorten_generates_code() {
    let (server, store) = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/some/long/path" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    let code = json["code"].as_str().unwrap();
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    assert_eq!(json["original"], "https://example.com/some/long/path");
    assert_eq!(json["short"], format!("http://localhost:3000/#/{code}"));
    assert_eq!(json["clicks"], 0);

    let stored = common::stored_records(&store).await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].code, code);
}

#[tokio::test]
async fn test_shorten_with_custom_code() {
    let (server, _store) = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com", "custom_code": "promo" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["code"], "promo");
    assert_eq!(json["short"], "http://localhost:3000/#/promo");
}

#[tokio::test]
async fn test_shorten_blank_custom_code_generates() {
    let (server, _store) = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com", "custom_code": "" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<serde_json::Value>()["code"].as_str().unwrap().len(), 6);
}

#[tokio::test]
async fn test_shorten_expiry_uses_minutes() {
    let (server, _store) = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com", "minutes": 5 }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let record = response.json::<darkshort::domain::entities::Record>();
    assert_eq!(record.expiry.timestamp_millis() - record.id, 5 * 60 * 1000);
}

#[tokio::test]
async fn test_shorten_default_minutes() {
    let (server, _store) = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    let record = response.json::<darkshort::domain::entities::Record>();
    assert_eq!(
        record.expiry.timestamp_millis() - record.id,
        common::DEFAULT_MINUTES * 60 * 1000
    );
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let (server, store) = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "not a url" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["message"], "Invalid URL");

    assert!(store.get(common::STORAGE_KEY).await.unwrap().is_none());
}

#[tokio::test]
async fn test_shorten_rejects_non_http_scheme() {
    let (server, _store) = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "ftp://example.com/file" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_rejects_zero_minutes() {
    let (server, _store) = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com", "minutes": 0 }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["message"],
        "Request validation failed"
    );
}

#[tokio::test]
async fn test_shorten_rejects_bad_custom_code() {
    let (server, _store) = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com", "custom_code": "has space" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_rejects_reserved_code() {
    let (server, _store) = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com", "custom_code": "stats" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_duplicate_code_conflict() {
    let (server, store) = common::create_test_server();

    server
        .post("/api/shorten")
        .json(&json!({ "url": "https://first.example.com", "custom_code": "dup" }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://second.example.com", "custom_code": "dup" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "conflict");
    assert_eq!(json["error"]["details"]["code"], "dup");

    let stored = common::stored_records(&store).await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].original, "https://first.example.com/");
}

#[tokio::test]
async fn test_shorten_appends_to_existing_registry() {
    let existing = common::test_record(1_700_000_000_000, "old123", "https://old.example.com", 4);
    let (server, store) = common::create_seeded_server(&common::seed_blob(&[existing]));

    server
        .post("/api/shorten")
        .json(&json!({ "url": "https://new.example.com" }))
        .await
        .assert_status(StatusCode::CREATED);

    let stored = common::stored_records(&store).await;
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].code, "old123");
    assert_eq!(stored[0].clicks, 4);
    assert_eq!(stored[1].original, "https://new.example.com/");
}
