//! Toko Core - Domain types and record storage.
//!
//! This crate provides everything the HTTP service needs that is not HTTP:
//! - `types` - Records, drafts, type-safe IDs and prices
//! - `store` - The generic ordered [`RecordStore`]
//! - `seed` - Records a fresh service starts with
//!
//! # Architecture
//!
//! The core crate does no I/O and takes no locks. Concurrency is the
//! caller's concern, which keeps every operation here plain, synchronous,
//! and easy to test.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod seed;
pub mod store;
pub mod types;

pub use store::{RecordStore, StoreError};
pub use types::*;
