//! Severity classification against ordered tier tables
//!
//! Maps a measured magnitude (price impact, slippage, deviation) onto a
//! small ordinal severity scale defined by a strictly descending table of
//! thresholds. With `N` tiers the scale is `0..=N + 1`: `0` means the
//! value sits at or below every threshold, `N` means it exceeds the
//! largest, and `N + 1` is reserved for a value that could not be
//! measured at all. An unknown magnitude is treated as the worst case,
//! never silently as harmless.

use serde::{Deserialize, Serialize};
use tracing::debug;
use types::errors::TierError;
use types::numeric::BasisPoints;

/// Classifies magnitudes into severity ordinals using descending tiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeverityClassifier {
    tiers: Vec<BasisPoints>,
}

impl SeverityClassifier {
    /// Create a classifier from a strictly descending tier table.
    ///
    /// Descending order is what makes the scan below correct, so it is
    /// enforced here rather than assumed at every call site. An empty
    /// table is valid and yields the two-point scale `{0, 1}`.
    pub fn new(tiers: Vec<BasisPoints>) -> Result<Self, TierError> {
        for (i, pair) in tiers.windows(2).enumerate() {
            if pair[1] >= pair[0] {
                return Err(TierError::NotDescending {
                    index: i + 1,
                    prev: pair[0].to_string(),
                    next: pair[1].to_string(),
                });
            }
        }
        debug!(tiers = tiers.len(), "SeverityClassifier created");
        Ok(Self { tiers })
    }

    /// Classifier preloaded with the default price-impact tiers.
    pub fn default_impact() -> Self {
        // default_impact_tiers is descending by construction.
        Self {
            tiers: default_impact_tiers(),
        }
    }

    /// Number of thresholds in the table.
    pub fn tier_count(&self) -> usize {
        self.tiers.len()
    }

    /// Largest severity this classifier can produce (the unknown-value case).
    pub fn max_severity(&self) -> usize {
        self.tiers.len() + 1
    }

    /// Classify a magnitude into a severity in `0..=max_severity()`.
    ///
    /// `None` maps to the worst case: a magnitude that could not be
    /// computed must not be presented as benign.
    pub fn classify(&self, value: Option<BasisPoints>) -> usize {
        let Some(value) = value else {
            debug!("Classifying absent magnitude as worst case");
            return self.max_severity();
        };

        // Scan largest tier first; the first threshold strictly below the
        // value decides. Each skipped tier lowers the severity by one.
        let mut severity = self.tiers.len();
        for tier in &self.tiers {
            if *tier < value {
                return severity;
            }
            severity -= 1;
        }
        0
    }
}

/// Default price-impact tier table, in basis points.
///
/// 15% blocked, 5% high, 3% medium, 1% low.
pub fn default_impact_tiers() -> Vec<BasisPoints> {
    vec![
        BasisPoints::from_i64(1_500),
        BasisPoints::from_i64(500),
        BasisPoints::from_i64(300),
        BasisPoints::from_i64(100),
    ]
}

/// Named price-impact level shown in the trade form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactLevel {
    /// At or below 1% impact; no styling.
    Negligible,
    /// Above 1%; informational.
    Low,
    /// Above 3%; cautionary styling.
    Medium,
    /// Above 5%; warning styling.
    High,
    /// Above 15%, or impact unknown; trade should be blocked pending review.
    Blocked,
}

impl ImpactLevel {
    /// Map a severity from the default impact classifier to a level.
    pub fn for_severity(severity: usize) -> Self {
        match severity {
            0 => ImpactLevel::Negligible,
            1 => ImpactLevel::Low,
            2 => ImpactLevel::Medium,
            3 => ImpactLevel::High,
            _ => ImpactLevel::Blocked,
        }
    }

    /// Whether the trade form should demand explicit confirmation.
    pub fn requires_confirmation(&self) -> bool {
        matches!(self, ImpactLevel::High | ImpactLevel::Blocked)
    }
}

/// Classify a price impact against the default tiers.
pub fn impact_level(impact: Option<BasisPoints>) -> ImpactLevel {
    ImpactLevel::for_severity(SeverityClassifier::default_impact().classify(impact))
}
