mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_index_renders_form() {
    let (server, _store) = common::create_test_server();

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("<form"));
    assert!(html.contains("name=\"long_url\""));
    assert!(html.contains("name=\"expires_in\""));
    assert!(!html.contains("id=\"short_url\""));
}

#[tokio::test]
async fn test_index_submit_shows_short_url() {
    let (server, _store) = common::create_test_server();

    let response = server
        .post("/")
        .form(&[("long_url", "http://example.com")])
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("id=\"short_url\""));
    assert!(html.contains("2a55966625"));
}

#[tokio::test]
async fn test_index_submit_without_url_is_rejected() {
    let (server, store) = common::create_test_server();

    let response = server.post("/").form(&[("long_url", "")]).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        pushort::domain::repositories::UrlStore::count(store.as_ref())
            .await
            .unwrap()
            .total,
        0
    );
}
