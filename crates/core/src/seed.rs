//! Records loaded into a fresh service.

use crate::types::{Customer, CustomerDraft, CustomerId, Price, Product, ProductDraft, ProductId};
use crate::Record;

/// The default product catalogue.
#[must_use]
pub fn products() -> Vec<Product> {
    vec![
        Product::assemble(
            ProductId::new(1),
            ProductDraft::new("Kopi Hitam", Price::from_whole(15_000)),
        ),
        Product::assemble(
            ProductId::new(2),
            ProductDraft::new("Teh Manis", Price::from_whole(10_000)),
        ),
    ]
}

/// The default customer list.
#[must_use]
pub fn customers() -> Vec<Customer> {
    vec![
        Customer::assemble(CustomerId::new(1), CustomerDraft::new("Andi", "andi@mail.com")),
        Customer::assemble(CustomerId::new(2), CustomerDraft::new("Siti", "siti@mail.com")),
    ]
}
