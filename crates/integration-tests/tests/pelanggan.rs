//! End-to-end tests for the `/pelanggan` resource.

use axum::http::StatusCode;
use serde_json::json;
use toko_integration_tests::{TestContext, ids};

#[tokio::test]
async fn test_list_returns_seed_records() {
    let ctx = TestContext::seeded();

    let resp = ctx.get("/pelanggan/").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(
        resp.body,
        json!([
            {"id": 1, "nama": "Andi", "email": "andi@mail.com"},
            {"id": 2, "nama": "Siti", "email": "siti@mail.com"}
        ])
    );
}

#[tokio::test]
async fn test_get_existing() {
    let ctx = TestContext::seeded();

    let resp = ctx.get("/pelanggan/2").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(
        resp.body,
        json!({"id": 2, "nama": "Siti", "email": "siti@mail.com"})
    );
}

#[tokio::test]
async fn test_get_unknown_id() {
    let ctx = TestContext::seeded();

    let resp = ctx.get("/pelanggan/0").await;

    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(resp.body, json!({"detail": "Pelanggan tidak ditemukan"}));
}

#[tokio::test]
async fn test_create_and_fetch() {
    let ctx = TestContext::seeded();

    let created = ctx
        .post(
            "/pelanggan/",
            &json!({"nama": "Budi", "email": "budi@mail.com"}),
        )
        .await;

    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(
        created.body,
        json!({"id": 3, "nama": "Budi", "email": "budi@mail.com"})
    );

    let fetched = ctx.get("/pelanggan/3").await;
    assert_eq!(fetched.body, created.body);
}

#[tokio::test]
async fn test_create_rejects_wrong_types() {
    let ctx = TestContext::seeded();

    let resp = ctx
        .post("/pelanggan", &json!({"nama": "Budi", "email": 42}))
        .await;

    assert_eq!(resp.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(ctx.state().customers().read().await.len(), 2);
}

#[tokio::test]
async fn test_update() {
    let ctx = TestContext::seeded();

    let resp = ctx
        .put(
            "/pelanggan/1",
            &json!({"id": 5, "nama": "Andi Update", "email": "andi@update.com"}),
        )
        .await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(
        resp.body,
        json!({"id": 1, "nama": "Andi Update", "email": "andi@update.com"})
    );
    assert_eq!(ids(&ctx.get("/pelanggan").await.body), vec![1, 2]);
}

#[tokio::test]
async fn test_update_unknown_id() {
    let ctx = TestContext::seeded();

    let resp = ctx
        .put("/pelanggan/9", &json!({"nama": "X", "email": "x@mail.com"}))
        .await;

    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(resp.body, json!({"detail": "Pelanggan tidak ditemukan"}));
}

#[tokio::test]
async fn test_delete() {
    let ctx = TestContext::seeded();

    let resp = ctx.delete("/pelanggan/1").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(
        resp.body,
        json!({"message": "Pelanggan dengan ID 1 telah dihapus"})
    );
    assert_eq!(ids(&ctx.get("/pelanggan").await.body), vec![2]);

    let again = ctx.delete("/pelanggan/1").await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
    assert_eq!(again.body, json!({"detail": "Pelanggan tidak ditemukan"}));
}

#[tokio::test]
async fn test_id_beyond_range_is_not_found() {
    let ctx = TestContext::seeded();
    let not_found = json!({"detail": "Pelanggan tidak ditemukan"});

    let get = ctx.get("/pelanggan/99999999999").await;
    assert_eq!(get.status, StatusCode::NOT_FOUND);
    assert_eq!(get.body, not_found);

    let put = ctx
        .put(
            "/pelanggan/3000000000",
            &json!({"nama": "X", "email": "x@mail.com"}),
        )
        .await;
    assert_eq!(put.status, StatusCode::NOT_FOUND);
    assert_eq!(put.body, not_found);

    let delete = ctx.delete("/pelanggan/3000000000").await;
    assert_eq!(delete.status, StatusCode::NOT_FOUND);
    assert_eq!(delete.body, not_found);

    assert_eq!(ctx.state().customers().read().await.len(), 2);
}

#[tokio::test]
async fn test_customers_and_products_are_independent() {
    let ctx = TestContext::seeded();

    ctx.delete("/pelanggan/1").await;
    ctx.delete("/pelanggan/2").await;

    assert_eq!(ctx.get("/pelanggan").await.body, json!([]));
    assert_eq!(ids(&ctx.get("/produk").await.body), vec![1, 2]);

    let resp = ctx
        .post("/pelanggan", &json!({"nama": "Budi", "email": "budi@mail.com"}))
        .await;
    assert_eq!(resp.body["id"], 1);
}
