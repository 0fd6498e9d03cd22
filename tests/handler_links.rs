mod common;

use darkshort::domain::entities::Record;

#[tokio::test]
async fn test_links_empty() {
    let (server, _store) = common::create_test_server();

    let response = server.get("/api/links").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Vec<Record>>(), Vec::new());
}

#[tokio::test]
async fn test_links_in_insertion_order() {
    let records = vec![
        common::test_record(1_700_000_000_000, "first1", "https://a.example.com", 3),
        common::test_record(1_700_000_000_500, "second", "https://b.example.com", 0),
    ];
    let (server, _store) = common::create_seeded_server(&common::seed_blob(&records));

    let response = server.get("/api/links").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Vec<Record>>(), records);
}

#[tokio::test]
async fn test_links_reflect_clicks() {
    let record = common::test_record(1_700_000_000_000, "abc123", "https://example.com", 0);
    let (server, _store) = common::create_seeded_server(&common::seed_blob(&[record]));

    server.get("/abc123").await;
    server.get("/abc123").await;

    let links = server.get("/api/links").await.json::<Vec<Record>>();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].clicks, 2);
}

#[tokio::test]
async fn test_links_json_shape() {
    let record = common::test_record(1_700_000_000_000, "abc123", "https://example.com", 1);
    let (server, _store) = common::create_seeded_server(&common::seed_blob(&[record]));

    let json = server.get("/api/links").await.json::<serde_json::Value>();

    let link = &json[0];
    assert_eq!(link["id"], 1_700_000_000_000i64);
    assert_eq!(link["original"], "https://example.com");
    assert_eq!(link["short"], "http://localhost:3000/#/abc123");
    assert_eq!(link["code"], "abc123");
    assert_eq!(link["clicks"], 1);
    assert!(link["expiry"].as_str().unwrap().starts_with("2023-11-14T22:43:20"));
}

#[tokio::test]
async fn test_links_accepts_browser_blob() {
    let blob = r#"[{"id":1700000000000,"original":"https://example.com","short":"http://localhost:3000/#/k3x9qa","code":"k3x9qa","expiry":"2023-11-14T22:43:20.000Z","clicks":7}]"#;
    let (server, _store) = common::create_seeded_server(blob);

    let links = server.get("/api/links").await.json::<Vec<Record>>();

    assert_eq!(links.len(), 1);
    assert_eq!(links[0].code, "k3x9qa");
    assert_eq!(links[0].clicks, 7);
}
