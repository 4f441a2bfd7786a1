//! Core types for Toko.
//!
//! This module provides type-safe wrappers for IDs and prices, the two record
//! kinds, and the traits the generic store is built on.

pub mod customer;
pub mod id;
pub mod price;
pub mod product;
pub mod record;

pub use customer::{Customer, CustomerDraft};
pub use id::*;
pub use price::{Price, PriceError};
pub use product::{Product, ProductDraft};
pub use record::{EntityKind, Record, RecordId};
