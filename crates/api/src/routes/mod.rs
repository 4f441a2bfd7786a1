//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check with record counts
//!
//! # Products
//! GET    /produk               - List products
//! POST   /produk               - Create product
//! GET    /produk/{id}          - Product detail
//! PUT    /produk/{id}          - Replace product fields
//! DELETE /produk/{id}          - Delete product
//!
//! # Customers
//! GET    /pelanggan            - List customers
//! POST   /pelanggan            - Create customer
//! GET    /pelanggan/{id}       - Customer detail
//! PUT    /pelanggan/{id}       - Replace customer fields
//! DELETE /pelanggan/{id}       - Delete customer
//! ```
//!
//! Trailing slashes are trimmed before routing, so `/produk/` reaches the
//! product list.

pub mod health;
pub mod records;

use axum::{Router, extract::FromRef, routing::get};
use toko_core::{Customer, Product, Record};

use crate::state::{AppState, SharedStore};

/// Create the CRUD routes for one record kind, mounted under its path segment.
pub fn record_routes<R>() -> Router<AppState>
where
    R: Record,
    SharedStore<R>: FromRef<AppState>,
{
    let collection = format!("/{}", R::KIND.path_segment());
    let member = format!("{collection}/{{id}}");

    Router::new()
        .route(&collection, get(records::list::<R>).post(records::create::<R>))
        .route(
            &member,
            get(records::show::<R>)
                .put(records::update::<R>)
                .delete(records::destroy::<R>),
        )
}

/// Create all routes for the service.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .merge(record_routes::<Product>())
        .merge(record_routes::<Customer>())
}
