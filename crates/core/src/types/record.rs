//! Traits shared by every record kind held in a [`RecordStore`](crate::RecordStore).

use core::fmt;
use core::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// The kinds of records the service manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// Items for sale (`produk`).
    Produk,
    /// Registered buyers (`pelanggan`).
    Pelanggan,
}

impl EntityKind {
    /// Human-facing label, as used in response messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Produk => "Produk",
            Self::Pelanggan => "Pelanggan",
        }
    }

    /// Path segment the kind is mounted under.
    #[must_use]
    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::Produk => "produk",
            Self::Pelanggan => "pelanggan",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An identifier that can be assigned sequentially.
///
/// Implemented for every ID produced by [`define_id!`](crate::define_id).
pub trait RecordId:
    Copy
    + Eq
    + Ord
    + fmt::Display
    + fmt::Debug
    + FromStr
    + Serialize
    + DeserializeOwned
    + Send
    + Sync
    + 'static
{
    /// The ID given to the first record of an empty collection.
    fn first() -> Self;

    /// The ID following `self`, or `None` if the ID space is exhausted.
    fn checked_next(self) -> Option<Self>;
}

/// A record with a store-assigned ID and caller-supplied fields.
///
/// The `Draft` is everything except the ID: it is what callers provide on
/// create and update. Implementors must never let a draft change the ID.
///
/// Records serialize as response bodies and drafts deserialize from requests.
pub trait Record: Clone + Serialize + Send + Sync + 'static {
    /// The record's ID type.
    type Id: RecordId;
    /// The record's fields without the ID.
    type Draft: DeserializeOwned + Send + 'static;

    /// Which kind of record this is.
    const KIND: EntityKind;

    /// The record's ID.
    fn id(&self) -> Self::Id;

    /// Build a record from an assigned ID and its fields.
    fn assemble(id: Self::Id, draft: Self::Draft) -> Self;

    /// Replace every field except the ID.
    fn overwrite(&mut self, draft: Self::Draft);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_and_segments() {
        assert_eq!(EntityKind::Produk.label(), "Produk");
        assert_eq!(EntityKind::Pelanggan.label(), "Pelanggan");
        assert_eq!(EntityKind::Produk.path_segment(), "produk");
        assert_eq!(EntityKind::Pelanggan.path_segment(), "pelanggan");
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(EntityKind::Pelanggan.to_string(), "Pelanggan");
    }
}
