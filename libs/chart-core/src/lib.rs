//! Chart Core — Client-Side Chart Computation Layer
//!
//! Pure, deterministic building blocks behind the front-end's charts and
//! trade form:
//! - Series resampling: irregular observations into fixed-width,
//!   step-interpolated chart series (last observation carried forward)
//! - Price-impact severity tiers and display levels
//! - Human-readable amount formatting
//! - Chart granularity presets with epoch-aligned bucket boundaries
//!
//! # Determinism
//! All computation is pure: `Decimal` fixed-point arithmetic, no RNG, no
//! I/O. The one temporal input — "now", which bounds a resampled series —
//! is injected through `clock::Clock` rather than read from a global.
//!
//! # Version
//! v1.0.0 — Frozen interface

pub mod clock;
pub mod format;
pub mod granularity;
pub mod resample;
pub mod severity;

/// Crate version constant
pub const CHART_CORE_VERSION: &str = "1.0.0";
