//! Ranked rows joined with their comparison against the current algorithm.

use crate::algorithm::{AlgorithmId, Tier};
use crate::compare::{Comparison, compare};
use crate::ranking::{RunSet, rank};
use serde::{Deserialize, Serialize};

/// One ranked algorithm as a presentation layer would show it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRow {
    /// 1-based rank
    pub rank: usize,
    /// Algorithm of this row
    pub algorithm: AlgorithmId,
    /// Static efficiency tier
    pub tier: Tier,
    /// Swap count
    pub swaps: u64,
    /// Comparison count
    pub comparisons: u64,
    /// Elapsed time in milliseconds
    pub time_ms: f64,
    /// True for the baseline row
    pub is_current: bool,
    /// Relative speed against the baseline, absent for the baseline itself
    /// or when the baseline is unmeasured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<Comparison>,
}

/// Ranking of a [`RunSet`] with comparisons against a chosen algorithm.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Baseline algorithm, if one was chosen
    pub current: Option<AlgorithmId>,
    /// Rows in rank order
    pub rows: Vec<ScoreRow>,
    /// Algorithms present in the set but not yet measured
    pub pending: Vec<AlgorithmId>,
}

impl Scoreboard {
    /// Builds the scoreboard for `runs`, comparing every row to `current`.
    pub fn build(runs: &RunSet, current: Option<AlgorithmId>) -> Self {
        let baseline = current.and_then(|id| runs.get(id));

        let rows = rank(runs)
            .into_iter()
            .map(|entry| {
                let record = entry.record;
                ScoreRow {
                    rank: entry.rank,
                    algorithm: record.algorithm(),
                    tier: record.algorithm().tier(),
                    swaps: record.swaps(),
                    comparisons: record.comparisons(),
                    time_ms: record.time_ms(),
                    is_current: Some(record.algorithm()) == current,
                    comparison: baseline.and_then(|b| compare(&record, b)),
                }
            })
            .collect();

        let pending = runs
            .iter()
            .filter(|r| !r.is_measured())
            .map(|r| r.algorithm())
            .collect();

        Self {
            current,
            rows,
            pending,
        }
    }

    /// Row of the fastest algorithm.
    pub fn winner(&self) -> Option<&ScoreRow> {
        self.rows.first()
    }

    /// Row for a given algorithm, if it was ranked.
    pub fn row(&self, algorithm: AlgorithmId) -> Option<&ScoreRow> {
        self.rows.iter().find(|r| r.algorithm == algorithm)
    }
}
