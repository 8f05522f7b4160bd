//! Types library for the exchange chart layer
//!
//! This library provides the core type definitions shared by the chart
//! computation crates, ensuring type safety and deterministic behavior.
//!
//! # Version
//! v1.0.0 - Frozen interface
//!
//! # Modules
//! - `ids`: Market identifiers (MarketId)
//! - `numeric`: Fixed-point ratio types (BasisPoints)
//! - `errors`: Error taxonomy

// Public modules
pub mod errors;
pub mod ids;
pub mod numeric;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::errors::*;
    pub use crate::ids::*;
    pub use crate::numeric::*;
}
