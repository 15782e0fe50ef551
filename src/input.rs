//! Deterministic input generation for playground runs.

use crate::error::{Result, SortRankError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::str::FromStr;

/// Value range for generated elements.
const VALUE_RANGE: std::ops::Range<i32> = -10_000..10_000;

/// Number of distinct values in a [`InputPattern::FewUnique`] input.
const FEW_UNIQUE_VALUES: i32 = 8;

/// Largest size [`generate`] accepts. Ordered patterns use element indices as values.
pub const MAX_INPUT_SIZE: usize = i32::MAX as usize;

/// Shape of the array handed to every algorithm in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputPattern {
    /// Uniformly random values
    Random,
    /// Ascending order with about 10% of positions swapped
    NearlySorted,
    /// Strictly descending
    Reversed,
    /// Random values drawn from a handful of distinct keys
    FewUnique,
    /// Already ascending
    Sorted,
}

impl InputPattern {
    /// Every pattern.
    pub const ALL: [InputPattern; 5] = [
        InputPattern::Random,
        InputPattern::NearlySorted,
        InputPattern::Reversed,
        InputPattern::FewUnique,
        InputPattern::Sorted,
    ];

    /// Name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            InputPattern::Random => "random",
            InputPattern::NearlySorted => "nearly-sorted",
            InputPattern::Reversed => "reversed",
            InputPattern::FewUnique => "few-unique",
            InputPattern::Sorted => "sorted",
        }
    }
}

impl fmt::Display for InputPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for InputPattern {
    type Err = SortRankError;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().replace('_', "-");
        InputPattern::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(&needle))
            .ok_or_else(|| SortRankError::UnknownPattern(s.to_string()))
    }
}

/// Generates `size` elements shaped by `pattern`.
///
/// The same `(pattern, size, seed)` always yields the same array.
///
/// # Errors
///
/// Returns `SortRankError::InputTooLarge` if `size` exceeds [`MAX_INPUT_SIZE`].
pub fn generate(pattern: InputPattern, size: usize, seed: u64) -> Result<Vec<i32>> {
    let upper = i32::try_from(size).map_err(|_| SortRankError::InputTooLarge {
        requested: size,
        max: MAX_INPUT_SIZE,
    })?;
    let mut rng = StdRng::seed_from_u64(seed);

    let data = match pattern {
        InputPattern::Random => (0..size).map(|_| rng.random_range(VALUE_RANGE)).collect(),
        InputPattern::NearlySorted => {
            let mut data: Vec<i32> = (0..upper).collect();
            if size > 1 {
                for _ in 0..size / 10 {
                    let i = rng.random_range(0..size);
                    let j = rng.random_range(0..size);
                    data.swap(i, j);
                }
            }
            data
        }
        InputPattern::Reversed => (0..upper).rev().collect(),
        InputPattern::FewUnique => (0..size)
            .map(|_| rng.random_range(0..FEW_UNIQUE_VALUES) * 100)
            .collect(),
        InputPattern::Sorted => (0..upper).collect(),
    };

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_deterministic() {
        for pattern in InputPattern::ALL {
            assert_eq!(
                generate(pattern, 200, 42).unwrap(),
                generate(pattern, 200, 42).unwrap()
            );
        }
        assert_ne!(
            generate(InputPattern::Random, 200, 1).unwrap(),
            generate(InputPattern::Random, 200, 2).unwrap()
        );
    }

    #[test]
    fn test_generate_shapes() {
        assert!(generate(InputPattern::Sorted, 100, 0).unwrap().is_sorted());

        let reversed = generate(InputPattern::Reversed, 100, 0).unwrap();
        assert!(reversed.windows(2).all(|w| w[0] > w[1]));

        let few = generate(InputPattern::FewUnique, 500, 3).unwrap();
        let mut distinct = few.clone();
        distinct.sort_unstable();
        distinct.dedup();
        assert!(distinct.len() <= FEW_UNIQUE_VALUES as usize);

        for pattern in InputPattern::ALL {
            assert_eq!(generate(pattern, 37, 9).unwrap().len(), 37);
            assert!(generate(pattern, 0, 9).unwrap().is_empty());
        }
    }

    #[test]
    fn test_generate_rejects_sizes_beyond_i32() {
        let too_large = MAX_INPUT_SIZE + 1;
        for pattern in InputPattern::ALL {
            assert_eq!(
                generate(pattern, too_large, 0),
                Err(SortRankError::InputTooLarge {
                    requested: too_large,
                    max: MAX_INPUT_SIZE
                })
            );
        }
    }

    #[test]
    fn test_parse_pattern() {
        assert_eq!(
            "nearly_sorted".parse::<InputPattern>().unwrap(),
            InputPattern::NearlySorted
        );
        assert_eq!("Reversed".parse::<InputPattern>().unwrap(), InputPattern::Reversed);
        assert!("zigzag".parse::<InputPattern>().is_err());
    }
}
