//! Error types for the chart computation layer
//!
//! Comprehensive error taxonomy using thiserror

use thiserror::Error;

/// Top-level chart layer error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    #[error("Resample error: {0}")]
    Resample(#[from] ResampleError),

    #[error("Tier error: {0}")]
    Tier(#[from] TierError),

    #[error("Invalid market: {symbol}")]
    InvalidMarket { symbol: String },
}

/// Resampling-specific errors
///
/// The resampler rejects bad configuration up front; resampling itself
/// never fails (empty input is a valid, empty result).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResampleError {
    #[error("bucket width must be positive, got {width}")]
    InvalidBucketWidth { width: i64 },
}

/// Severity-tier configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TierError {
    #[error("tiers must be strictly descending: tier {index} ({next}) is not below {prev}")]
    NotDescending {
        index: usize,
        prev: String,
        next: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resample_error_display() {
        let err = ResampleError::InvalidBucketWidth { width: -60 };
        assert_eq!(err.to_string(), "bucket width must be positive, got -60");
    }

    #[test]
    fn test_tier_error_display() {
        let err = TierError::NotDescending {
            index: 2,
            prev: "300 bps".to_string(),
            next: "500 bps".to_string(),
        };
        assert!(err.to_string().contains("tier 2"));
        assert!(err.to_string().contains("500 bps"));
        assert!(err.to_string().contains("300 bps"));
    }

    #[test]
    fn test_chart_error_from_resample_error() {
        let inner = ResampleError::InvalidBucketWidth { width: 0 };
        let err: ChartError = inner.into();
        assert!(matches!(err, ChartError::Resample(_)));
    }

    #[test]
    fn test_chart_error_from_tier_error() {
        let inner = TierError::NotDescending {
            index: 1,
            prev: "100 bps".to_string(),
            next: "100 bps".to_string(),
        };
        let err: ChartError = inner.into();
        assert!(matches!(err, ChartError::Tier(_)));
    }

    #[test]
    fn test_invalid_market_display() {
        let err = ChartError::InvalidMarket {
            symbol: "NOSLASH".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid market: NOSLASH");
    }
}
