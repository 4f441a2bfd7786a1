//! Product records (`produk`).

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;
use super::record::{EntityKind, Record};

/// An item for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned ID.
    pub id: ProductId,
    /// Display name.
    #[serde(rename = "nama")]
    pub name: String,
    /// Unit price.
    #[serde(rename = "harga")]
    pub price: Price,
}

/// Product fields accepted on create and update.
///
/// Unknown fields, including `id`, are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    /// Display name.
    #[serde(rename = "nama")]
    pub name: String,
    /// Unit price.
    #[serde(rename = "harga")]
    pub price: Price,
}

impl ProductDraft {
    /// Create a product draft.
    #[must_use]
    pub fn new(name: impl Into<String>, price: Price) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

impl Record for Product {
    type Id = ProductId;
    type Draft = ProductDraft;

    const KIND: EntityKind = EntityKind::Produk;

    fn id(&self) -> ProductId {
        self.id
    }

    fn assemble(id: ProductId, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            price: draft.price,
        }
    }

    fn overwrite(&mut self, draft: ProductDraft) {
        self.name = draft.name;
        self.price = draft.price;
    }
}
