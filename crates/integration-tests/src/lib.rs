//! Integration tests for Toko.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p toko-integration-tests
//! ```
//!
//! The tests drive the fully layered application in process, so no server
//! or port is needed. Every test builds its own [`TestContext`] and therefore
//! its own stores.

#![allow(clippy::missing_panics_doc, clippy::unwrap_used)]

use axum::{
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use serde_json::Value;
use toko_api::AppState;
use tower::ServiceExt;

/// A response reduced to what the tests assert on.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub request_id: Option<String>,
    pub body: Value,
}

/// A fresh application instance.
///
/// Clones share the same stores.
#[derive(Clone)]
pub struct TestContext {
    state: AppState,
}

impl TestContext {
    /// Application with the default records loaded.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            state: AppState::seeded(),
        }
    }

    /// Application with both stores empty.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            state: AppState::empty(),
        }
    }

    /// Direct access to the stores, for asserting on state.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Send a request with an optional JSON body.
    pub async fn send(&self, method: Method, uri: &str, body: Option<&Value>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        self.send_request(builder.body(body).unwrap()).await
    }

    /// Send a fully built request.
    pub async fn send_request(&self, request: Request<Body>) -> TestResponse {
        let app = toko_api::app(self.state.clone());
        let response = app.oneshot(request).await.unwrap();

        let status = response.status();
        let request_id = response
            .headers()
            .get(toko_api::middleware::REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(String::from);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));

        TestResponse {
            status,
            request_id,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: &Value) -> TestResponse {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: &Value) -> TestResponse {
        self.send(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(Method::DELETE, uri, None).await
    }
}

/// IDs of a JSON array of records, in order.
#[must_use]
pub fn ids(body: &Value) -> Vec<i64> {
    body.as_array()
        .map(|records| records.iter().filter_map(|r| r["id"].as_i64()).collect())
        .unwrap_or_default()
}
