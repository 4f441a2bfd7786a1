//! Health check endpoints.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::state::AppState;

/// Readiness report.
#[derive(Debug, Serialize)]
pub struct Readiness {
    /// Always `"ready"` once the stores are reachable.
    pub status: &'static str,
    /// Number of products currently held.
    pub produk: usize,
    /// Number of customers currently held.
    pub pelanggan: usize,
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
pub async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Reports how many records each store currently holds.
pub async fn readiness(State(state): State<AppState>) -> Json<Readiness> {
    let produk = state.products().read().await.len();
    let pelanggan = state.customers().read().await.len();

    Json(Readiness {
        status: "ready",
        produk,
        pelanggan,
    })
}
