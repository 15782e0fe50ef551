//! Playground run configuration.
//!
//! Presets can be picked with `SORTRANK_MODE=quick|full`; individual settings
//! are then overridden by `SORTRANK_SIZE`, `SORTRANK_SEED`, `SORTRANK_PATTERN`,
//! `SORTRANK_ALGOS` (comma separated) and `SORTRANK_CURRENT`.

use crate::algorithm::AlgorithmId;
use crate::error::Result;
use crate::input::InputPattern;

/// Settings for one playground run.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaygroundConfig {
    /// Elements per input array
    pub size: usize,
    /// Seed for input generation
    pub seed: u64,
    /// Input shape
    pub pattern: InputPattern,
    /// Algorithms to run, in order. `None` means the whole catalogue.
    pub algorithms: Option<Vec<AlgorithmId>>,
    /// Baseline for comparisons
    pub current: Option<AlgorithmId>,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self::quick()
    }
}

impl PlaygroundConfig {
    /// Small input, suitable for the quadratic sorts.
    pub fn quick() -> Self {
        Self {
            size: 1_000,
            seed: 42,
            pattern: InputPattern::Random,
            algorithms: None,
            current: None,
        }
    }

    /// Larger input where tier differences dominate.
    pub fn full() -> Self {
        Self {
            size: 10_000,
            ..Self::quick()
        }
    }

    /// Reads the configuration from `SORTRANK_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// An unknown mode and unparsable numbers fall back to the preset with a
    /// warning. Unknown algorithm or pattern names are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mode = lookup("SORTRANK_MODE").unwrap_or_else(|| "quick".to_string());

        let mut config = match mode.trim() {
            "quick" => Self::quick(),
            "full" => Self::full(),
            other => {
                log::warn!("Unknown SORTRANK_MODE={:?}, using quick", other);
                Self::quick()
            }
        };

        if let Some(size) = lookup("SORTRANK_SIZE") {
            match size.trim().parse() {
                Ok(size) => config.size = size,
                Err(_) => log::warn!("Ignoring invalid SORTRANK_SIZE={:?}", size),
            }
        }

        if let Some(seed) = lookup("SORTRANK_SEED") {
            match seed.trim().parse() {
                Ok(seed) => config.seed = seed,
                Err(_) => log::warn!("Ignoring invalid SORTRANK_SEED={:?}", seed),
            }
        }

        if let Some(pattern) = lookup("SORTRANK_PATTERN") {
            config.pattern = pattern.parse()?;
        }

        if let Some(algos) = lookup("SORTRANK_ALGOS") {
            config.algorithms = Some(parse_algorithm_list(&algos)?);
        }

        if let Some(current) = lookup("SORTRANK_CURRENT") {
            config.current = Some(current.parse()?);
        }

        Ok(config)
    }

    /// Algorithms this run covers.
    pub fn selected_algorithms(&self) -> Vec<AlgorithmId> {
        self.algorithms
            .clone()
            .unwrap_or_else(|| AlgorithmId::ALL.to_vec())
    }
}

/// Parses a comma separated list of algorithm names, dropping duplicates.
pub fn parse_algorithm_list(list: &str) -> Result<Vec<AlgorithmId>> {
    let mut algorithms = Vec::new();
    for name in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let id: AlgorithmId = name.parse()?;
        if !algorithms.contains(&id) {
            algorithms.push(id);
        }
    }
    Ok(algorithms)
}
