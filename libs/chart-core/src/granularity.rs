//! Chart granularity presets
//!
//! The bucket widths the front-end's interval selector exposes, from
//! five-minute intraday buckets to weekly history. Bucket boundaries are
//! aligned to epoch by floor division (e.g. daily buckets open at
//! midnight UTC); alignment uses Euclidean floor so timestamps before
//! the epoch align correctly too.

use serde::{Deserialize, Serialize};

/// Supported chart granularities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Granularity {
    /// 5 minutes
    M5,
    /// 15 minutes
    M15,
    /// 1 hour
    H1,
    /// 4 hours
    H4,
    /// 1 day
    D1,
    /// 1 week
    W1,
}

impl Granularity {
    /// Bucket width of this granularity in seconds.
    pub fn seconds(&self) -> i64 {
        match self {
            Granularity::M5 => 5 * 60,
            Granularity::M15 => 15 * 60,
            Granularity::H1 => 3600,
            Granularity::H4 => 4 * 3600,
            Granularity::D1 => 86_400,
            Granularity::W1 => 7 * 86_400,
        }
    }

    /// All standard granularities.
    pub fn all() -> &'static [Granularity] {
        &[
            Granularity::M5,
            Granularity::M15,
            Granularity::H1,
            Granularity::H4,
            Granularity::D1,
            Granularity::W1,
        ]
    }

    /// Align a timestamp to this granularity's bucket boundary (floor).
    pub fn floor(&self, timestamp_seconds: i64) -> i64 {
        let width = self.seconds();
        timestamp_seconds.div_euclid(width) * width
    }

    /// Short label used by the interval selector.
    pub fn label(&self) -> &'static str {
        match self {
            Granularity::M5 => "5m",
            Granularity::M15 => "15m",
            Granularity::H1 => "1h",
            Granularity::H4 => "4h",
            Granularity::D1 => "1d",
            Granularity::W1 => "1w",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_granularity_seconds() {
        assert_eq!(Granularity::M5.seconds(), 300);
        assert_eq!(Granularity::H1.seconds(), 3_600);
        assert_eq!(Granularity::D1.seconds(), 86_400);
        assert_eq!(Granularity::W1.seconds(), 604_800);
    }

    #[test]
    fn test_granularity_alignment() {
        let ts = 5 * 60 + 30; // 5m30s past epoch
        assert_eq!(Granularity::M5.floor(ts), 300);
        assert_eq!(Granularity::M15.floor(ts), 0);
        assert_eq!(Granularity::H1.floor(ts), 0);
    }

    #[test]
    fn test_alignment_on_boundary_is_identity() {
        for &g in Granularity::all() {
            let boundary = 42 * g.seconds();
            assert_eq!(g.floor(boundary), boundary);
        }
    }

    #[test]
    fn test_alignment_before_epoch_floors_down() {
        // -50s is inside the bucket [-300, 0), not [0, 300).
        assert_eq!(Granularity::M5.floor(-50), -300);
        assert_eq!(Granularity::M5.floor(-300), -300);
        assert_eq!(Granularity::M5.floor(-301), -600);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Granularity::M5.label(), "5m");
        assert_eq!(Granularity::H4.label(), "4h");
        assert_eq!(Granularity::W1.label(), "1w");
    }

    #[test]
    fn test_all_is_ascending() {
        let widths: Vec<i64> = Granularity::all().iter().map(|g| g.seconds()).collect();
        assert!(widths.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_granularity_serialization() {
        let json = serde_json::to_string(&Granularity::H1).unwrap();
        let deserialized: Granularity = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Granularity::H1);
    }
}
