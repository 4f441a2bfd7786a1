//! Customer records (`pelanggan`).

use serde::{Deserialize, Serialize};

use super::id::CustomerId;
use super::record::{EntityKind, Record};

/// A registered buyer.
///
/// The email address is stored as given; its format is not checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Store-assigned ID.
    pub id: CustomerId,
    /// Full name.
    #[serde(rename = "nama")]
    pub name: String,
    /// Contact email address.
    pub email: String,
}

/// Customer fields accepted on create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDraft {
    /// Full name.
    #[serde(rename = "nama")]
    pub name: String,
    /// Contact email address.
    pub email: String,
}

impl CustomerDraft {
    /// Create a customer draft.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

impl Record for Customer {
    type Id = CustomerId;
    type Draft = CustomerDraft;

    const KIND: EntityKind = EntityKind::Pelanggan;

    fn id(&self) -> CustomerId {
        self.id
    }

    fn assemble(id: CustomerId, draft: CustomerDraft) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
        }
    }

    fn overwrite(&mut self, draft: CustomerDraft) {
        self.name = draft.name;
        self.email = draft.email;
    }
}
