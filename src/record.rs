//! Metrics captured from a single completed algorithm run.

use crate::algorithm::AlgorithmId;
use crate::error::{Result, SortRankError};
use serde::{Deserialize, Serialize};

/// Immutable snapshot of one algorithm run's measured cost.
///
/// A `time_ms` of zero means the run has not been measured yet. Such records
/// are valid values but are left out of ranking and comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRecord")]
pub struct MetricsRecord {
    algorithm: AlgorithmId,
    swaps: u64,
    comparisons: u64,
    time_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    input_size: Option<usize>,
}

impl MetricsRecord {
    /// Creates a record for a completed run.
    pub fn new(algorithm: AlgorithmId, swaps: u64, comparisons: u64, time_ms: f64) -> Self {
        Self {
            algorithm,
            swaps,
            comparisons,
            time_ms,
            input_size: None,
        }
    }

    /// Creates a record for a run that has no timing yet.
    pub fn unmeasured(algorithm: AlgorithmId) -> Self {
        Self::new(algorithm, 0, 0, 0.0)
    }

    /// Attaches the number of elements the run sorted.
    #[must_use]
    pub fn with_input_size(mut self, input_size: usize) -> Self {
        self.input_size = Some(input_size);
        self
    }

    /// Algorithm that produced this record.
    #[inline]
    pub fn algorithm(&self) -> AlgorithmId {
        self.algorithm
    }

    /// Number of swaps (or element writes, for non in-place sorts).
    #[inline]
    pub fn swaps(&self) -> u64 {
        self.swaps
    }

    /// Number of element comparisons.
    #[inline]
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    /// Elapsed wall-clock time in milliseconds.
    #[inline]
    pub fn time_ms(&self) -> f64 {
        self.time_ms
    }

    /// Number of elements sorted, if known.
    #[inline]
    pub fn input_size(&self) -> Option<usize> {
        self.input_size
    }

    /// Returns true if the run has a strictly positive, finite time.
    #[inline]
    pub fn is_measured(&self) -> bool {
        self.time_ms.is_finite() && self.time_ms > 0.0
    }
}

/// Untrusted record shape as it arrives from outside the crate.
///
/// Counts are signed and wide enough for any `u64` value, and time is optional,
/// so that malformed data can be parsed and then rejected record by record
/// instead of failing a whole file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Algorithm name
    #[serde(alias = "algorithmId", alias = "algo")]
    pub algorithm: String,
    /// Swap count
    #[serde(default)]
    pub swaps: i128,
    /// Comparison count
    #[serde(default)]
    pub comparisons: i128,
    /// Elapsed time; absent means unmeasured
    #[serde(default, alias = "timeMs")]
    pub time_ms: Option<f64>,
    /// Elements sorted
    #[serde(default, alias = "inputSize")]
    pub input_size: Option<usize>,
}

impl TryFrom<RawRecord> for MetricsRecord {
    type Error = SortRankError;

    fn try_from(raw: RawRecord) -> Result<Self> {
        let algorithm: AlgorithmId = raw.algorithm.parse()?;

        let swaps = u64::try_from(raw.swaps).map_err(|_| {
            SortRankError::InvalidRecord(format!(
                "{}: swaps out of range ({})",
                algorithm, raw.swaps
            ))
        })?;
        let comparisons = u64::try_from(raw.comparisons).map_err(|_| {
            SortRankError::InvalidRecord(format!(
                "{}: comparisons out of range ({})",
                algorithm, raw.comparisons
            ))
        })?;

        let time_ms = raw.time_ms.unwrap_or(0.0);
        if !time_ms.is_finite() || time_ms < 0.0 {
            return Err(SortRankError::InvalidRecord(format!(
                "{}: time must be a non-negative number, got {}",
                algorithm, time_ms
            )));
        }

        Ok(Self {
            algorithm,
            swaps,
            comparisons,
            time_ms,
            input_size: raw.input_size,
        })
    }
}

impl From<&MetricsRecord> for RawRecord {
    fn from(record: &MetricsRecord) -> Self {
        Self {
            algorithm: record.algorithm.name().to_string(),
            swaps: record.swaps.into(),
            comparisons: record.comparisons.into(),
            time_ms: Some(record.time_ms),
            input_size: record.input_size,
        }
    }
}
