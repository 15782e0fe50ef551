//! # sortrank
//!
//! Instrumented sorting algorithms with run ranking and relative speed
//! comparison.
//!
//! Each algorithm run yields a [`MetricsRecord`] holding its swap count,
//! comparison count and elapsed time. Records are ranked by time with
//! [`rank`], and any record can be compared against the currently selected
//! algorithm with [`compare`].
//!
//! ## Quick Start
//!
//! ```
//! use sortrank::{AlgorithmId, MetricsRecord, compare, rank};
//!
//! let quick = MetricsRecord::new(AlgorithmId::Quick, 0, 0, 120.0);
//! let bubble = MetricsRecord::new(AlgorithmId::Bubble, 0, 0, 980.0);
//! let merge = MetricsRecord::new(AlgorithmId::Merge, 0, 0, 140.0);
//!
//! let ranked = rank([&quick, &bubble, &merge]);
//! assert_eq!(ranked[0].record.algorithm(), AlgorithmId::Quick);
//! assert_eq!(ranked[2].rank, 3);
//!
//! let vs_quick = compare(&merge, &quick).unwrap();
//! assert_eq!(vs_quick.to_string(), "17% slower");
//! ```
//!
//! ## Ranking Rules
//!
//! - Only runs with a strictly positive time take part; unmeasured runs are
//!   skipped, never reported as errors.
//! - Ties keep their input order and still receive distinct ranks.
//! - Comparisons against an unmeasured baseline, or of an algorithm against
//!   itself, produce no result.
//!
//! Ranking and comparison are pure functions over immutable snapshots and
//! can be called on every refresh.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

mod algorithm;
mod compare;
mod config;
mod error;
mod input;
mod ranking;
mod record;
mod scoreboard;
mod sorter;

pub use algorithm::{AlgorithmId, Tier};
pub use compare::{Comparison, Direction, compare};
pub use config::{PlaygroundConfig, parse_algorithm_list};
pub use error::{Result, SortRankError};
pub use input::{InputPattern, MAX_INPUT_SIZE, generate};
pub use ranking::{RankedEntry, RunSet, rank};
pub use record::{MetricsRecord, RawRecord};
pub use scoreboard::{ScoreRow, Scoreboard};
pub use sorter::{OpCounter, Sorter, measure, sorter_for};

/// Runs every algorithm selected by `config` over the same generated input.
///
/// # Errors
///
/// Returns `SortRankError::InputTooLarge` if `config.size` exceeds
/// [`MAX_INPUT_SIZE`]. Insertion into the [`RunSet`] cannot fail for records
/// produced here, since they all share one input.
///
/// # Examples
///
/// ```
/// use sortrank::{AlgorithmId, PlaygroundConfig, Scoreboard, run_playground};
///
/// let config = PlaygroundConfig {
///     size: 200,
///     algorithms: Some(vec![AlgorithmId::Insertion, AlgorithmId::Heap]),
///     current: Some(AlgorithmId::Heap),
///     ..PlaygroundConfig::quick()
/// };
///
/// let runs = run_playground(&config).unwrap();
/// assert_eq!(runs.len(), 2);
///
/// let board = Scoreboard::build(&runs, config.current);
/// assert!(board.rows.len() <= 2);
/// ```
pub fn run_playground(config: &PlaygroundConfig) -> Result<RunSet> {
    let input = generate(config.pattern, config.size, config.seed)?;
    log::info!(
        "Running {} algorithm(s) on {} {} elements (seed {})",
        config.selected_algorithms().len(),
        input.len(),
        config.pattern,
        config.seed
    );

    let mut runs = RunSet::new();
    for algorithm in config.selected_algorithms() {
        runs.insert(measure(algorithm, &input))?;
    }
    Ok(runs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_playground_covers_selection() {
        let config = PlaygroundConfig {
            size: 300,
            pattern: InputPattern::NearlySorted,
            algorithms: Some(vec![AlgorithmId::Quick, AlgorithmId::Merge, AlgorithmId::Shell]),
            ..PlaygroundConfig::quick()
        };

        let runs = run_playground(&config).unwrap();

        assert_eq!(runs.len(), 3);
        assert!(runs.iter().all(|r| r.input_size() == Some(300)));
        let order: Vec<_> = runs.iter().map(MetricsRecord::algorithm).collect();
        assert_eq!(order, vec![AlgorithmId::Quick, AlgorithmId::Merge, AlgorithmId::Shell]);
    }

    #[test]
    fn test_run_playground_same_seed_same_counts() {
        let config = PlaygroundConfig {
            size: 250,
            algorithms: Some(vec![AlgorithmId::Bubble, AlgorithmId::Heap]),
            ..PlaygroundConfig::quick()
        };

        let first = run_playground(&config).unwrap();
        let second = run_playground(&config).unwrap();

        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.swaps(), b.swaps());
            assert_eq!(a.comparisons(), b.comparisons());
        }
    }

    #[test]
    fn test_run_playground_rejects_oversized_input() {
        let config = PlaygroundConfig {
            size: MAX_INPUT_SIZE + 1,
            ..PlaygroundConfig::quick()
        };

        assert!(matches!(
            run_playground(&config),
            Err(SortRankError::InputTooLarge { .. })
        ));
    }
}
