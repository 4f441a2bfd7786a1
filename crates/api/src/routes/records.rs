//! CRUD handlers shared by every record kind.
//!
//! Each handler is generic over the [`Record`] it serves and pulls the
//! matching [`SharedStore`] out of the application state, so one set of
//! functions backs both `/produk` and `/pelanggan`.

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use toko_core::Record;

use crate::error::{AppError, Result};
use crate::extract::{IdPath, JsonBody};
use crate::state::SharedStore;

/// Confirmation returned after a successful delete.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    /// e.g. `Produk dengan ID 2 telah dihapus`.
    pub message: String,
}

/// List every record in insertion order.
pub async fn list<R: Record>(State(store): State<SharedStore<R>>) -> Json<Vec<R>> {
    Json(store.read().await.list_all().to_vec())
}

/// Fetch one record by ID.
pub async fn show<R: Record>(
    State(store): State<SharedStore<R>>,
    IdPath(id): IdPath<R>,
) -> Result<Json<R>> {
    let found = store.read().await.find(id).cloned();

    found.map(Json).ok_or_else(|| {
        tracing::debug!(kind = %R::KIND, %id, "Record not found");
        AppError::NotFound(R::KIND)
    })
}

/// Create a record; the store assigns its ID.
pub async fn create<R: Record>(
    State(store): State<SharedStore<R>>,
    JsonBody(draft): JsonBody<R::Draft>,
) -> Result<(StatusCode, Json<R>)> {
    let created = store.write().await.insert(draft)?;

    tracing::info!(kind = %R::KIND, id = %created.id(), "Record created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace every field of a record except its ID.
pub async fn update<R: Record>(
    State(store): State<SharedStore<R>>,
    IdPath(id): IdPath<R>,
    JsonBody(draft): JsonBody<R::Draft>,
) -> Result<Json<R>> {
    let updated = store.write().await.replace(id, draft);

    match updated {
        Some(record) => {
            tracing::info!(kind = %R::KIND, %id, "Record updated");
            Ok(Json(record))
        }
        None => {
            tracing::debug!(kind = %R::KIND, %id, "Record not found for update");
            Err(AppError::NotFound(R::KIND))
        }
    }
}

/// Delete a record by ID.
pub async fn destroy<R: Record>(
    State(store): State<SharedStore<R>>,
    IdPath(id): IdPath<R>,
) -> Result<Json<DeletedResponse>> {
    let removed = store.write().await.remove(id);

    if !removed {
        tracing::debug!(kind = %R::KIND, %id, "Record not found for delete");
        return Err(AppError::NotFound(R::KIND));
    }

    tracing::info!(kind = %R::KIND, %id, "Record deleted");
    Ok(Json(DeletedResponse {
        message: format!("{} dengan ID {id} telah dihapus", R::KIND),
    }))
}
