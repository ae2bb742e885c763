//! Dispatcher behavior against a mock HTTP server: payload decoding and
//! error-body normalization.

use kbchat_client::transport::HttpDispatcher;
use kbchat_client::Error;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

fn dispatcher(base: &str) -> HttpDispatcher {
    let url = Url::parse(base).expect("mock server URL");
    HttpDispatcher::new(&url, Duration::from_secs(5)).expect("dispatcher")
}

#[derive(Debug, Deserialize)]
struct Who {
    username: String,
}

#[tokio::test]
async fn decodes_success_payload() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/auth/me")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"username": "admin"}"#)
        .create_async()
        .await;

    let who: Who = dispatcher(&server.url()).get("/auth/me").await.unwrap();
    assert_eq!(who.username, "admin");
    mock.assert_async().await;
}

#[tokio::test]
async fn no_content_dispatch_discards_any_success_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/auth/logout")
        .with_status(200)
        .with_body(r#"{"ok": true}"#)
        .create_async()
        .await;
    server
        .mock("POST", "/auth/refresh")
        .with_status(204)
        .with_body("")
        .create_async()
        .await;

    let dispatcher = dispatcher(&server.url());
    dispatcher.post_no_content("/auth/logout").await.unwrap();
    dispatcher.post_no_content("/auth/refresh").await.unwrap();
}

#[tokio::test]
async fn empty_success_body_decodes_as_unit() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("DELETE", "/admin/kb/qa/3")
        .with_status(204)
        .with_body("")
        .create_async()
        .await;

    dispatcher(&server.url())
        .delete("/admin/kb/qa/3")
        .await
        .unwrap();
}

#[tokio::test]
async fn error_body_detail_field_becomes_the_message() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/auth/login")
        .with_status(403)
        .with_body(r#"{"detail": "Invalid credentials"}"#)
        .create_async()
        .await;

    let err = dispatcher(&server.url())
        .post::<_, serde_json::Value>("/auth/login", &serde_json::json!({"username": "x", "password": "y"}))
        .await
        .unwrap_err();
    match err {
        Error::Http { status, detail } => {
            assert_eq!(status, 403);
            assert_eq!(detail, "Invalid credentials");
        }
        other => panic!("expected Http error, got {:?}", other),
    }
}

#[tokio::test]
async fn error_body_message_field_is_a_fallback() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/admin/kb/qa")
        .with_status(404)
        .with_body(r#"{"message": "Not found"}"#)
        .create_async()
        .await;

    let err = dispatcher(&server.url())
        .get::<serde_json::Value>("/admin/kb/qa")
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert!(err.to_string().contains("Not found"));
}

#[tokio::test]
async fn malformed_error_body_falls_back_to_status_line() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/health/components")
        .with_status(500)
        .with_body("<html>nope</html>")
        .create_async()
        .await;

    let err = dispatcher(&server.url())
        .get::<serde_json::Value>("/health/components")
        .await
        .unwrap_err();
    match err {
        Error::Http { status, detail } => {
            assert_eq!(status, 500);
            assert_eq!(detail, "Internal Server Error");
        }
        other => panic!("expected Http error, got {:?}", other),
    }
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    // Nothing listens on this port.
    let err = dispatcher("http://127.0.0.1:9")
        .get::<serde_json::Value>("/chat/greeting")
        .await
        .unwrap_err();
    assert!(err.is_network(), "expected Network, got {:?}", err);
}
