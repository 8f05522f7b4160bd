//! Market identifier types for chart entities
//!
//! Chart series are keyed by the trading pair they visualize; the
//! identifier is validated once at the boundary so downstream code can
//! rely on the BASE/QUOTE shape.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::ChartError;

/// Market identifier (trading pair)
///
/// Format: "BASE/QUOTE" (e.g., "BTC/USDT", "ETH/USDC")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarketId(String);

impl MarketId {
    /// Create a new MarketId from a string
    ///
    /// # Panics
    /// Panics if the format is invalid (must be non-empty BASE/QUOTE)
    pub fn new(symbol: impl Into<String>) -> Self {
        Self::try_new(symbol).expect("MarketId must be in BASE/QUOTE format")
    }

    /// Try to create a MarketId, rejecting malformed symbols
    pub fn try_new(symbol: impl Into<String>) -> Result<Self, ChartError> {
        let s = symbol.into();
        match s.split_once('/') {
            Some((base, quote)) if !base.is_empty() && !quote.is_empty() => Ok(Self(s)),
            _ => Err(ChartError::InvalidMarket { symbol: s }),
        }
    }

    /// Get the symbol string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split into base and quote assets
    pub fn split(&self) -> (&str, &str) {
        // Validated at construction; '/' is always present.
        self.0.split_once('/').unwrap_or((&self.0, ""))
    }
}

impl fmt::Display for MarketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MarketId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
