//! Typed resource clients against a mock server.

use kbchat_client::resources::{LogQuery, NewKbEntry, NewWebsiteSource};
use kbchat_client::ApiClient;
use mockito::{Matcher, ServerGuard};

fn client(server: &ServerGuard) -> ApiClient {
    ApiClient::builder()
        .base_url(server.url())
        .build()
        .expect("client")
}

#[tokio::test]
async fn knowledge_base_crud_round_trip() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/admin/kb/categories")
        .with_status(200)
        .with_body(r#"[{"id": 1, "title": "عمومی", "created_at": "2026-01-01T00:00:00"}]"#)
        .create_async()
        .await;
    let create = server
        .mock("POST", "/admin/kb/qa")
        .match_body(Matcher::Json(serde_json::json!({
            "category_id": 1,
            "question": "ساعات کاری؟",
            "answer": "۹ تا ۱۷"
        })))
        .with_status(200)
        .with_body(
            r#"{"id": 5, "category_id": 1, "question": "ساعات کاری؟", "answer": "۹ تا ۱۷",
                "created_at": "2026-01-02T00:00:00", "updated_at": "2026-01-02T00:00:00"}"#,
        )
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/admin/kb/qa/5")
        .with_status(204)
        .create_async()
        .await;

    let api = client(&server);
    let kb = api.knowledge_base();

    let categories = kb.categories().await.unwrap();
    assert_eq!(categories[0].title, "عمومی");

    let entry = kb
        .create_entry(&NewKbEntry {
            category_id: Some(1),
            question: "ساعات کاری؟".into(),
            answer: "۹ تا ۱۷".into(),
        })
        .await
        .unwrap();
    assert_eq!(entry.id, 5);

    kb.delete_entry(5).await.unwrap();
    create.assert_async().await;
    delete.assert_async().await;
}

#[tokio::test]
async fn website_recrawl_and_status() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/admin/website")
        .match_body(Matcher::Json(serde_json::json!({"base_url": "https://example.ir"})))
        .with_status(200)
        .with_body(
            r#"{"id": 2, "base_url": "https://example.ir", "enabled": true,
                "created_at": "2026-01-01T00:00:00", "crawl_status": "pending"}"#,
        )
        .create_async()
        .await;
    server
        .mock("POST", "/admin/website/2/recrawl")
        .with_status(200)
        .with_body(r#"{"status": "started"}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/admin/website/2/status")
        .with_status(200)
        .with_body(r#"{"status": "done", "last_crawled_at": "2026-01-03T10:00:00", "pages_count": 42}"#)
        .create_async()
        .await;

    let api = client(&server);
    let website = api.website();

    let source = website
        .create(&NewWebsiteSource {
            base_url: "https://example.ir".into(),
            enabled: None,
        })
        .await
        .unwrap();
    assert_eq!(source.crawl_status, "pending");
    assert_eq!(source.pages_count, None);

    let trigger = website.recrawl(2).await.unwrap();
    assert_eq!(trigger.status, "started");

    let status = website.status(2).await.unwrap();
    assert_eq!(status.pages_count, 42);
}

#[tokio::test]
async fn log_listing_sends_only_set_query_params() {
    let mut server = mockito::Server::new_async().await;
    let list = server
        .mock("GET", "/admin/logs")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("limit".into(), "20".into()),
            Matcher::UrlEncoded("search".into(), "سلام".into()),
        ]))
        .with_status(200)
        .with_body(
            r#"{"logs": [{"id": 1, "session_id": "abc", "user_message": "سلام",
                "bot_message": "سلام", "sources_json": {"kb_ids": [3]},
                "refused": false, "created_at": "2026-01-01T00:00:00"}],
                "total": 1, "limit": 20, "offset": 0}"#,
        )
        .create_async()
        .await;

    let api = client(&server);
    let page = api
        .logs()
        .list(&LogQuery::new().limit(20).search("سلام"))
        .await
        .unwrap();

    assert_eq!(page.total, 1);
    assert_eq!(page.logs[0].session_id, "abc");
    assert_eq!(
        page.logs[0].sources_json.as_ref().unwrap().kb_ids,
        Some(vec![3])
    );
    list.assert_async().await;
}

#[tokio::test]
async fn health_report_decodes_component_statuses() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/health/components")
        .with_status(200)
        .with_body(
            r#"{"backend": {"status": "ok"},
                "db": {"status": "ok"},
                "openai": {"status": "degraded", "message": "slow responses"},
                "website_crawler": {"status": "ok"}}"#,
        )
        .create_async()
        .await;

    let api = client(&server);
    let report = api.health().components().await.unwrap();
    assert_eq!(report.openai.status, "degraded");
    assert_eq!(report.openai.message.as_deref(), Some("slow responses"));
}

#[tokio::test]
async fn independent_resource_calls_may_run_concurrently() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/admin/greeting")
        .with_status(200)
        .with_body(
            r#"[{"id": 1, "message": "سلام!", "enabled": true, "priority": 1,
                "created_at": "2026-01-01T00:00:00", "updated_at": "2026-01-01T00:00:00"}]"#,
        )
        .create_async()
        .await;
    server
        .mock("GET", "/admin/intent")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let api = client(&server);
    let (greetings, intents) =
        futures::future::join(api.greetings().list(), api.intents().list()).await;
    assert_eq!(greetings.unwrap()[0].message, "سلام!");
    assert!(intents.unwrap().is_empty());
}

#[tokio::test]
async fn login_and_identity_round_trip() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/auth/login")
        .match_body(Matcher::Json(
            serde_json::json!({"username": "admin", "password": "secret"}),
        ))
        .with_status(200)
        .with_header("set-cookie", "session=issued; Path=/")
        .with_body(r#"{"ok": true}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/auth/me")
        .match_header("cookie", "session=issued")
        .with_status(200)
        .with_body(r#"{"username": "admin"}"#)
        .create_async()
        .await;

    let api = client(&server);
    assert!(api.login("admin", "secret").await.unwrap().ok);
    assert_eq!(api.me().await.unwrap().username, "admin");
}
