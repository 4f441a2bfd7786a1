//! Non-negative price representation using decimal arithmetic.
//!
//! Prices are stored as [`Decimal`] so that amounts like `0.1` survive a
//! round trip exactly. On the wire they are plain JSON numbers: integral
//! amounts serialize as integers (`17000`), fractional ones as floats.

use core::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is below zero.
    #[error("price must not be negative (got {0})")]
    Negative(Decimal),
}

/// A non-negative price in the store's currency (rupiah).
///
/// ## Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use toko_core::Price;
///
/// assert!(Price::new(Decimal::from(15_000)).is_ok());
/// assert!(Price::new(Decimal::ZERO).is_ok());
/// assert!(Price::new(Decimal::from(-1)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(Decimal);

impl Price {
    /// Create a price, rejecting negative amounts.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if `amount` is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self(amount.normalize()))
    }

    /// Create a price from a whole number of rupiah.
    #[must_use]
    pub fn from_whole(amount: u32) -> Self {
        Self(Decimal::from(amount))
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.fract().is_zero() {
            if let Some(whole) = self.0.to_i64() {
                return serializer.serialize_i64(whole);
            }
        }

        let float = self
            .0
            .to_f64()
            .ok_or_else(|| serde::ser::Error::custom("price is not representable as f64"))?;
        serializer.serialize_f64(float)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = <Decimal as Deserialize>::deserialize(deserializer)?;
        Self::new(amount).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_negative() {
        assert_eq!(
            Price::new(Decimal::from(-5)),
            Err(PriceError::Negative(Decimal::from(-5)))
        );
    }

    #[test]
    fn test_accepts_negative_zero() {
        let price = Price::new(-Decimal::ZERO).unwrap();
        assert!(price.amount().is_zero());
    }

    #[test]
    fn test_integral_amount_serializes_as_integer() {
        let json = serde_json::to_string(&Price::from_whole(17_000)).unwrap();
        assert_eq!(json, "17000");

        let trailing_zeros = Price::new(Decimal::new(1_800_000, 2)).unwrap();
        assert_eq!(serde_json::to_string(&trailing_zeros).unwrap(), "18000");
    }

    #[test]
    fn test_fractional_amount_serializes_as_float() {
        let price = Price::new(Decimal::new(125, 1)).unwrap();
        assert_eq!(serde_json::to_string(&price).unwrap(), "12.5");
    }

    #[test]
    fn test_deserialize_accepts_numbers_and_strings() {
        let from_int: Price = serde_json::from_str("15000").unwrap();
        let from_float: Price = serde_json::from_str("15000.0").unwrap();
        let from_str: Price = serde_json::from_str("\"15000\"").unwrap();

        assert_eq!(from_int, Price::from_whole(15_000));
        assert_eq!(from_float, from_int);
        assert_eq!(from_str, from_int);
    }

    #[test]
    fn test_deserialize_rejects_negative_and_garbage() {
        let negative = serde_json::from_str::<Price>("-1").unwrap_err();
        assert!(negative.to_string().contains("must not be negative"));

        assert!(serde_json::from_str::<Price>("\"murah\"").is_err());
        assert!(serde_json::from_str::<Price>("null").is_err());
    }
}
