//! Chart series resampler
//!
//! Converts an irregularly-timed set of observations into a dense,
//! regularly-spaced, step-interpolated series for charting ("last
//! observation carried forward").
//!
//! Bucket boundaries are aligned to epoch (floor of the earliest
//! observation). The series always extends to the injected "now", carrying
//! the last known value forward past the final observation, so a chart
//! stays current between data-source refreshes. Leading buckets that
//! precede every observation have no known value and are dropped rather
//! than emitted as null or zero.
//!
//! Ties on equal timestamps resolve by insertion order: the sort is
//! stable, the cursor consumes equal-timestamp observations in their
//! original order, and the last one consumed is the value carried.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;
use types::errors::ResampleError;
use types::ids::MarketId;

use crate::clock::Clock;
use crate::granularity::Granularity;

/// A single raw (timestamp, value) data point from an upstream source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// Observation timestamp (Unix seconds).
    pub time: i64,
    /// Observed value (price, TVL, volume, ...).
    pub value: Decimal,
}

impl Observation {
    pub fn new(time: i64, value: Decimal) -> Self {
        Self { time, value }
    }
}

/// One bucket of a resampled series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Bucket boundary (Unix seconds); always a multiple of the bucket width.
    pub time: i64,
    /// Value carried into this bucket (last observation at or before `time`).
    pub value: Decimal,
}

/// Step-interpolating resampler with a fixed bucket width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesResampler {
    bucket_width_seconds: i64,
}

impl SeriesResampler {
    /// Create a resampler with the given bucket width in seconds.
    ///
    /// Non-positive widths are rejected up front; a zero width would
    /// otherwise divide by zero and a negative one would never advance
    /// the bucket sweep.
    pub fn new(bucket_width_seconds: i64) -> Result<Self, ResampleError> {
        if bucket_width_seconds <= 0 {
            return Err(ResampleError::InvalidBucketWidth {
                width: bucket_width_seconds,
            });
        }
        debug!(bucket_width_seconds, "SeriesResampler created");
        Ok(Self {
            bucket_width_seconds,
        })
    }

    /// Create a resampler for a preset chart granularity.
    pub fn for_granularity(granularity: Granularity) -> Self {
        // Preset widths are all positive.
        Self {
            bucket_width_seconds: granularity.seconds(),
        }
    }

    /// Configured bucket width in seconds.
    pub fn bucket_width_seconds(&self) -> i64 {
        self.bucket_width_seconds
    }

    /// Resample observations into a dense series ending at the clock's now.
    pub fn resample(&self, observations: &[Observation], clock: &impl Clock) -> Vec<ChartPoint> {
        self.resample_at(observations, clock.now_seconds())
    }

    /// Resample observations with an explicit "now" (Unix seconds).
    ///
    /// Emits one point per bucket boundary from the earliest observation's
    /// bucket floor through the floor of `now_seconds`, each carrying the
    /// value of the last observation at or before the boundary. Empty
    /// input yields an empty series; so does a `now_seconds` that falls
    /// before the first bucket (a clock behind the data).
    pub fn resample_at(&self, observations: &[Observation], now_seconds: i64) -> Vec<ChartPoint> {
        if observations.is_empty() {
            return Vec::new();
        }

        let width = self.bucket_width_seconds;

        // Stable sort: equal timestamps keep their insertion order, so the
        // last of an equal-timestamp group is the value that wins.
        let mut sorted: Vec<Observation> = observations.to_vec();
        sorted.sort_by_key(|obs| obs.time);

        let start = floor_to_width(sorted[0].time, width);
        let end = floor_to_width(now_seconds, width);

        let mut points = Vec::new();
        let mut cursor = 0;
        let mut last_value: Option<Decimal> = None;
        let mut dropped_leading = 0usize;

        let mut t = start;
        while t <= end {
            // The cursor only moves forward; an observation is consumed once.
            while cursor < sorted.len() && sorted[cursor].time <= t {
                last_value = Some(sorted[cursor].value);
                cursor += 1;
            }
            match last_value {
                Some(value) => points.push(ChartPoint { time: t, value }),
                None => dropped_leading += 1,
            }
            t = match t.checked_add(width) {
                Some(next) => next,
                None => break,
            };
        }

        debug!(
            observations = sorted.len(),
            emitted = points.len(),
            dropped_leading,
            bucket_width_seconds = width,
            "Series resampled"
        );

        points
    }

    /// Resample and tag the result as a chart series for a market.
    pub fn resample_market(
        &self,
        market: MarketId,
        observations: &[Observation],
        clock: &impl Clock,
    ) -> ChartSeries {
        ChartSeries {
            market,
            bucket_width_seconds: self.bucket_width_seconds,
            points: self.resample(observations, clock),
        }
    }
}

/// Floor-align a timestamp to a bucket boundary.
///
/// Euclidean division keeps the floor exact for timestamps before the
/// epoch, where truncating division would round toward zero.
fn floor_to_width(timestamp: i64, width: i64) -> i64 {
    timestamp.div_euclid(width) * width
}

/// A resampled series tagged with the market it charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub market: MarketId,
    pub bucket_width_seconds: i64,
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    /// Validate series integrity: positive width, boundary-aligned times,
    /// and a fixed step of exactly one bucket width between points.
    pub fn is_well_formed(&self) -> bool {
        self.bucket_width_seconds > 0
            && self
                .points
                .iter()
                .all(|p| p.time % self.bucket_width_seconds == 0)
            && self
                .points
                .windows(2)
                .all(|w| w[1].time - w[0].time == self.bucket_width_seconds)
    }

    /// Number of points in the series.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The most recent point, if any.
    pub fn latest(&self) -> Option<&ChartPoint> {
        self.points.last()
    }
}
