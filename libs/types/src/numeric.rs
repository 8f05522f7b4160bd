//! Fixed-point ratio types for chart computation
//!
//! Uses rust_decimal for deterministic arithmetic (no floating-point errors).
//! Ratio-like quantities (price impact, tier thresholds) are expressed in
//! basis points: 10 000 bps = 100%.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A ratio expressed in basis points (1 bps = 0.01%).
///
/// Backed by `Decimal` so fractional basis points are exact. Ordering is
/// the numeric ordering of the underlying value; negative values are
/// allowed (a favorable price impact is negative).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BasisPoints(Decimal);

impl BasisPoints {
    /// Create from an exact decimal basis-point value
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Create from a whole number of basis points
    pub fn from_i64(bps: i64) -> Self {
        Self(Decimal::from(bps))
    }

    /// Parse from a decimal string (e.g., "12.5")
    pub fn from_str(s: &str) -> Result<Self, rust_decimal::Error> {
        Decimal::from_str_exact(s).map(Self)
    }

    /// The basis-point value as a decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bps", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_from_i64() {
        let bps = BasisPoints::from_i64(1500);
        assert_eq!(bps.as_decimal(), Decimal::from(1500));
    }

    #[test]
    fn test_from_str() {
        let bps = BasisPoints::from_str("12.5").unwrap();
        assert_eq!(bps.as_decimal(), Decimal::from_str_exact("12.5").unwrap());

        assert!(BasisPoints::from_str("not a number").is_err());
    }

    #[test]
    fn test_ordering() {
        let low = BasisPoints::from_i64(100);
        let high = BasisPoints::from_i64(1500);
        assert!(low < high);
        assert_eq!(low, BasisPoints::from_str("100").unwrap());
    }

    #[test]
    fn test_negative_allowed() {
        let rebate = BasisPoints::from_i64(-5);
        assert!(rebate < BasisPoints::from_i64(0));
    }

    #[test]
    fn test_display() {
        assert_eq!(BasisPoints::from_i64(250).to_string(), "250 bps");
    }

    #[test]
    fn test_serialization_transparent() {
        let bps = BasisPoints::from_str("12.5").unwrap();
        let json = serde_json::to_string(&bps).unwrap();
        let deserialized: BasisPoints = serde_json::from_str(&json).unwrap();
        assert_eq!(bps, deserialized);
    }

    proptest! {
        #[test]
        fn ordering_agrees_with_decimal(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
            let lhs = BasisPoints::from_i64(a);
            let rhs = BasisPoints::from_i64(b);
            prop_assert_eq!(lhs.cmp(&rhs), lhs.as_decimal().cmp(&rhs.as_decimal()));
            prop_assert_eq!(lhs.cmp(&rhs), a.cmp(&b));
        }
    }
}
