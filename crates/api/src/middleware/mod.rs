//! HTTP middleware stack.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Trailing-slash normalization (`NormalizePathLayer`, wraps the router)
//! 2. Sentry layers (hub per request, transactions)
//! 3. `TraceLayer` (`http_request` span with status and latency)
//! 4. Request ID (records the ID on the span and the response)

pub mod request_id;

pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
