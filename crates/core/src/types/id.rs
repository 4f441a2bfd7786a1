//! Newtype IDs for type-safe record references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity kinds.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `i32` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `PartialOrd`, `Ord`, `Hash`
/// - Conversion methods: `new()`, `as_i32()`
/// - `From<i32>` and `Into<i32>` implementations
/// - `FromStr`, failing for text outside the `i32` range
/// - A [`RecordId`](crate::RecordId) implementation for sequential assignment
///
/// # Example
///
/// ```rust
/// # use toko_core::define_id;
/// define_id!(InvoiceId);
/// define_id!(SupplierId);
///
/// let invoice_id = InvoiceId::new(1);
/// let supplier_id = SupplierId::new(1);
///
/// // These are different types, so this won't compile:
/// // let _: InvoiceId = supplier_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Create a new ID from an i32 value.
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// Get the underlying i32 value.
            #[must_use]
            pub const fn as_i32(&self) -> i32 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = ::core::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl $crate::RecordId for $name {
            fn first() -> Self {
                Self(1)
            }

            fn checked_next(self) -> Option<Self> {
                self.0.checked_add(1).map(Self)
            }
        }
    };
}

define_id!(ProductId);
define_id!(CustomerId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::RecordId;

    #[test]
    fn test_first_id_is_one() {
        assert_eq!(ProductId::first(), ProductId::new(1));
        assert_eq!(CustomerId::first().as_i32(), 1);
    }

    #[test]
    fn test_checked_next() {
        assert_eq!(ProductId::new(41).checked_next(), Some(ProductId::new(42)));
        assert_eq!(ProductId::new(i32::MAX).checked_next(), None);
    }

    #[test]
    fn test_ordering_follows_inner_value() {
        assert!(CustomerId::new(2) > CustomerId::new(1));
        assert_eq!(
            [3, 9, 4].map(ProductId::new).into_iter().max(),
            Some(ProductId::new(9))
        );
    }

    #[test]
    fn test_serde_is_transparent() {
        let json = serde_json::to_string(&ProductId::new(7)).unwrap();
        assert_eq!(json, "7");

        let parsed: CustomerId = serde_json::from_str("12").unwrap();
        assert_eq!(parsed, CustomerId::from(12));
        assert_eq!(i32::from(parsed), 12);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("42".parse::<ProductId>(), Ok(ProductId::new(42)));
        assert_eq!("-1".parse::<CustomerId>(), Ok(CustomerId::new(-1)));
        assert!("3000000000".parse::<ProductId>().is_err());
        assert!("satu".parse::<ProductId>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ProductId::new(2).to_string(), "2");
    }
}
