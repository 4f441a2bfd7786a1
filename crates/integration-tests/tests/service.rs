//! End-to-end tests for cross-cutting service behavior.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use serde_json::json;
use tokio::task::JoinSet;
use toko_integration_tests::{TestContext, ids};

#[tokio::test]
async fn test_health() {
    let ctx = TestContext::seeded();

    let resp = ctx.get("/health").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body, json!("ok"));
}

#[tokio::test]
async fn test_readiness_reports_counts() {
    let ctx = TestContext::seeded();
    ctx.delete("/produk/1").await;

    let resp = ctx.get("/health/ready").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(
        resp.body,
        json!({"status": "ready", "produk": 1, "pelanggan": 2})
    );
}

#[tokio::test]
async fn test_request_id_is_generated() {
    let ctx = TestContext::seeded();

    let resp = ctx.get("/produk").await;

    let request_id = resp.request_id.unwrap();
    assert_eq!(request_id.len(), 36);
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let ctx = TestContext::seeded();
    let request = Request::builder()
        .uri("/pelanggan/1")
        .header("x-request-id", "req-abc-123")
        .body(Body::empty())
        .unwrap();

    let resp = ctx.send_request(request).await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.request_id.as_deref(), Some("req-abc-123"));
}

#[tokio::test]
async fn test_unknown_route() {
    let ctx = TestContext::seeded();

    let resp = ctx.get("/kategori").await;

    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unsupported_method() {
    let ctx = TestContext::seeded();

    let resp = ctx.send(Method::PATCH, "/produk/1", Some(&json!({}))).await;

    assert_eq!(resp.status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_get_distinct_ids() {
    let ctx = TestContext::empty();

    let mut tasks = JoinSet::new();
    for n in 0..20 {
        let ctx = ctx.clone();
        tasks.spawn(async move {
            ctx.post("/produk", &json!({"nama": format!("Produk {n}"), "harga": n}))
                .await
        });
    }
    let responses = tasks.join_all().await;

    assert!(responses.iter().all(|r| r.status == StatusCode::CREATED));

    let mut assigned: Vec<i64> = responses
        .iter()
        .filter_map(|r| r.body["id"].as_i64())
        .collect();
    assigned.sort_unstable();
    assert_eq!(assigned, (1..=20).collect::<Vec<_>>());
    assert_eq!(ids(&ctx.get("/produk").await.body).len(), 20);
}
