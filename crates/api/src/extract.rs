//! Request extractors that reject with [`AppError`].
//!
//! These wrap axum's `Json` and `Path` so that every malformed body or path
//! parameter produces the same `422 Unprocessable Entity` validation
//! response, instead of axum's mix of 400, 415, and 422 plain-text bodies.

use axum::{
    extract::{FromRequest, FromRequestParts, Path},
    http::request::Parts,
};
use toko_core::Record;

use crate::error::{AppError, ValidationIssue};

/// JSON request body.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(JsonBody(draft): JsonBody<ProductDraft>) -> Result<Json<Product>> {
///     // ...
/// }
/// ```
#[derive(Debug, Clone, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// The ID of an `R` taken from the `{id}` path segment.
///
/// Text that is not an integer is a validation error. An integer too large
/// or too small for the ID type cannot name a stored record, so it is
/// rejected as not found.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(IdPath(id): IdPath<Product>) -> Result<Json<Product>> {
///     // ...
/// }
/// ```
pub struct IdPath<R: Record>(pub R::Id);

impl<R, S> FromRequestParts<S> for IdPath<R>
where
    R: Record,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state).await?;

        if !is_integer(&raw) {
            return Err(AppError::Validation(vec![ValidationIssue::path(
                format!("Cannot parse `{raw}` to an integer"),
                "int_parsing",
            )]));
        }

        raw.parse()
            .map(Self)
            .map_err(|_| AppError::NotFound(R::KIND))
    }
}

/// An optional sign followed by at least one ASCII digit.
fn is_integer(raw: &str) -> bool {
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
