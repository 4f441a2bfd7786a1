//! Application state shared across handlers.

use std::sync::Arc;

use axum::extract::FromRef;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use toko_core::{Customer, Product, Record, RecordStore, seed};

use crate::config::ApiConfig;

/// A record store shared between concurrent requests.
///
/// Each operation holds the lock for its whole read-modify-write, so ID
/// assignment within one store never races.
pub struct SharedStore<R> {
    inner: Arc<RwLock<RecordStore<R>>>,
}

impl<R> Clone for SharedStore<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Record> SharedStore<R> {
    /// Wrap a store for sharing.
    #[must_use]
    pub fn new(store: RecordStore<R>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Acquire shared read access.
    pub async fn read(&self) -> RwLockReadGuard<'_, RecordStore<R>> {
        self.inner.read().await
    }

    /// Acquire exclusive write access.
    pub async fn write(&self) -> RwLockWriteGuard<'_, RecordStore<R>> {
        self.inner.write().await
    }
}

/// Application state shared across all handlers.
///
/// Cheaply cloneable; handlers extract the store they need directly with
/// `State<SharedStore<R>>`.
#[derive(Clone, FromRef)]
pub struct AppState {
    products: SharedStore<Product>,
    customers: SharedStore<Customer>,
}

impl AppState {
    /// Create application state from existing stores.
    #[must_use]
    pub fn new(products: RecordStore<Product>, customers: RecordStore<Customer>) -> Self {
        Self {
            products: SharedStore::new(products),
            customers: SharedStore::new(customers),
        }
    }

    /// State with the default records loaded.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(
            RecordStore::with_records(seed::products()),
            RecordStore::with_records(seed::customers()),
        )
    }

    /// State with both stores empty.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(RecordStore::new(), RecordStore::new())
    }

    /// State as requested by configuration.
    #[must_use]
    pub fn from_config(config: &ApiConfig) -> Self {
        if config.seed_data {
            Self::seeded()
        } else {
            Self::empty()
        }
    }

    /// Get the product store.
    #[must_use]
    pub const fn products(&self) -> &SharedStore<Product> {
        &self.products
    }

    /// Get the customer store.
    #[must_use]
    pub const fn customers(&self) -> &SharedStore<Customer> {
        &self.customers
    }
}
