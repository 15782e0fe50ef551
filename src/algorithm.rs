//! Algorithm catalogue and the static efficiency-tier table.

use crate::error::{Result, SortRankError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a sorting algorithm known to the playground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmId {
    /// Bubble sort
    Bubble,
    /// Cocktail shaker sort
    Cocktail,
    /// Selection sort
    Selection,
    /// Insertion sort
    Insertion,
    /// Gnome sort
    Gnome,
    /// Shell sort (Ciura gaps)
    Shell,
    /// Comb sort
    Comb,
    /// Top-down merge sort
    Merge,
    /// Quicksort with Lomuto partitioning
    Quick,
    /// Heapsort
    Heap,
    /// LSD radix sort
    Radix,
}

/// Coarse efficiency grouping used by presentation layers.
///
/// Has no influence on ranking, which is decided by measured time alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// O(n log n) or better on average
    Fast,
    /// Sub-quadratic gap-based sorts
    Moderate,
    /// Quadratic sorts
    Slow,
}

impl AlgorithmId {
    /// Every algorithm in catalogue order.
    pub const ALL: [AlgorithmId; 11] = [
        AlgorithmId::Bubble,
        AlgorithmId::Cocktail,
        AlgorithmId::Selection,
        AlgorithmId::Insertion,
        AlgorithmId::Gnome,
        AlgorithmId::Shell,
        AlgorithmId::Comb,
        AlgorithmId::Merge,
        AlgorithmId::Quick,
        AlgorithmId::Heap,
        AlgorithmId::Radix,
    ];

    /// Lowercase name used on the command line and in JSON.
    pub fn name(self) -> &'static str {
        match self {
            AlgorithmId::Bubble => "bubble",
            AlgorithmId::Cocktail => "cocktail",
            AlgorithmId::Selection => "selection",
            AlgorithmId::Insertion => "insertion",
            AlgorithmId::Gnome => "gnome",
            AlgorithmId::Shell => "shell",
            AlgorithmId::Comb => "comb",
            AlgorithmId::Merge => "merge",
            AlgorithmId::Quick => "quick",
            AlgorithmId::Heap => "heap",
            AlgorithmId::Radix => "radix",
        }
    }

    /// Efficiency tier of this algorithm.
    pub fn tier(self) -> Tier {
        match self {
            AlgorithmId::Quick | AlgorithmId::Merge | AlgorithmId::Heap | AlgorithmId::Radix => {
                Tier::Fast
            }
            AlgorithmId::Shell | AlgorithmId::Comb => Tier::Moderate,
            AlgorithmId::Bubble
            | AlgorithmId::Cocktail
            | AlgorithmId::Selection
            | AlgorithmId::Insertion
            | AlgorithmId::Gnome => Tier::Slow,
        }
    }

    /// Average-case time complexity label.
    pub fn complexity(self) -> &'static str {
        match self {
            AlgorithmId::Bubble
            | AlgorithmId::Cocktail
            | AlgorithmId::Selection
            | AlgorithmId::Insertion
            | AlgorithmId::Gnome => "O(n^2)",
            AlgorithmId::Shell => "O(n^(4/3))",
            AlgorithmId::Comb => "O(n^2 / 2^p)",
            AlgorithmId::Merge | AlgorithmId::Quick | AlgorithmId::Heap => "O(n log n)",
            AlgorithmId::Radix => "O(n k)",
        }
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for AlgorithmId {
    type Err = SortRankError;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim();
        AlgorithmId::ALL
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| SortRankError::UnknownAlgorithm(s.to_string()))
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Tier::Fast => "fast",
            Tier::Moderate => "moderate",
            Tier::Slow => "slow",
        };
        f.pad(label)
    }
}
