//! Relative speed of one run against the current baseline.

use crate::record::MetricsRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the candidate ran faster or slower than the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Candidate took less time
    Faster,
    /// Candidate took the same time or more
    Slower,
}

/// Signed relative difference, expressed as a direction and a whole percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Comparison {
    /// Faster or slower than the baseline
    pub direction: Direction,
    /// Magnitude of the difference in percent, rounded half away from zero
    pub percent: u32,
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Direction::Faster => write!(f, "{}% faster", self.percent),
            Direction::Slower => write!(f, "{}% slower", self.percent),
        }
    }
}

/// Compares `candidate` against `baseline` by elapsed time.
///
/// Returns `None` when either run is unmeasured or both records belong to the
/// same algorithm. Callers are expected to omit the comparison in that case.
///
/// # Examples
///
/// ```
/// use sortrank::{AlgorithmId, Comparison, Direction, MetricsRecord, compare};
///
/// let merge = MetricsRecord::new(AlgorithmId::Merge, 0, 0, 140.0);
/// let quick = MetricsRecord::new(AlgorithmId::Quick, 0, 0, 120.0);
///
/// assert_eq!(
///     compare(&merge, &quick),
///     Some(Comparison { direction: Direction::Slower, percent: 17 })
/// );
/// assert_eq!(compare(&quick, &quick), None);
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn compare(candidate: &MetricsRecord, baseline: &MetricsRecord) -> Option<Comparison> {
    if candidate.algorithm() == baseline.algorithm() {
        return None;
    }
    if !candidate.is_measured() || !baseline.is_measured() {
        return None;
    }

    let delta = candidate.time_ms() / baseline.time_ms() - 1.0;

    let (direction, magnitude) = if candidate.time_ms() < baseline.time_ms() {
        (Direction::Faster, -delta)
    } else {
        (Direction::Slower, delta)
    };

    // f64::round rounds half away from zero on every platform.
    let percent = (magnitude * 100.0).round();
    let percent = if percent >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        percent as u32
    };

    Some(Comparison { direction, percent })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::AlgorithmId;

    fn timed(algorithm: AlgorithmId, time_ms: f64) -> MetricsRecord {
        MetricsRecord::new(algorithm, 0, 0, time_ms)
    }

    #[test]
    fn test_slower_example() {
        let result = compare(
            &timed(AlgorithmId::Merge, 140.0),
            &timed(AlgorithmId::Quick, 120.0),
        );
        assert_eq!(
            result,
            Some(Comparison {
                direction: Direction::Slower,
                percent: 17
            })
        );
    }

    #[test]
    fn test_faster() {
        let result = compare(
            &timed(AlgorithmId::Quick, 120.0),
            &timed(AlgorithmId::Merge, 140.0),
        );
        // 1 - 120/140 = 0.142857 -> 14%
        assert_eq!(
            result,
            Some(Comparison {
                direction: Direction::Faster,
                percent: 14
            })
        );
    }

    #[test]
    fn test_equal_times_are_slower_by_zero() {
        let result = compare(
            &timed(AlgorithmId::Heap, 50.0),
            &timed(AlgorithmId::Quick, 50.0),
        );
        assert_eq!(
            result,
            Some(Comparison {
                direction: Direction::Slower,
                percent: 0
            })
        );
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        // 12.5% slower rounds up to 13
        let slower = compare(
            &timed(AlgorithmId::Heap, 112.5),
            &timed(AlgorithmId::Quick, 100.0),
        )
        .unwrap();
        assert_eq!(slower.direction, Direction::Slower);
        assert_eq!(slower.percent, 13);

        // 12.5% faster rounds up to 13
        let faster = compare(
            &timed(AlgorithmId::Heap, 87.5),
            &timed(AlgorithmId::Quick, 100.0),
        )
        .unwrap();
        assert_eq!(faster.direction, Direction::Faster);
        assert_eq!(faster.percent, 13);
    }

    #[test]
    fn test_self_comparison_is_undefined() {
        let quick = timed(AlgorithmId::Quick, 120.0);
        assert_eq!(compare(&quick, &quick), None);
    }

    #[test]
    fn test_unmeasured_comparison_is_undefined() {
        let measured = timed(AlgorithmId::Quick, 120.0);
        let pending = MetricsRecord::unmeasured(AlgorithmId::Bubble);
        assert_eq!(compare(&measured, &pending), None);
        assert_eq!(compare(&pending, &measured), None);
        assert_eq!(compare(&timed(AlgorithmId::Heap, -4.0), &measured), None);
    }

    #[test]
    fn test_display() {
        let c = Comparison {
            direction: Direction::Faster,
            percent: 42,
        };
        assert_eq!(c.to_string(), "42% faster");
    }
}
