//! Ranking of algorithm runs by elapsed time.

use crate::algorithm::AlgorithmId;
use crate::error::{Result, SortRankError};
use crate::record::MetricsRecord;
use serde::{Deserialize, Serialize};

/// A record annotated with its 1-based position among its peers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    /// 1-based rank, unique within one ranking
    pub rank: usize,
    /// The ranked record
    pub record: MetricsRecord,
}

/// Insertion-ordered mapping from algorithm to its latest run.
///
/// Re-inserting an algorithm replaces its record but keeps its original
/// position, so ties in [`rank`] keep resolving the same way across refreshes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSet {
    records: Vec<MetricsRecord>,
}

impl RunSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from records in order, applying [`RunSet::insert`] to each.
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = MetricsRecord>,
    {
        let mut set = Self::new();
        for record in records {
            set.insert(record)?;
        }
        Ok(set)
    }

    /// Inserts or replaces the record for its algorithm.
    ///
    /// Returns the replaced record, if any. Fails when the record's input
    /// size differs from the size carried by the other records in the set.
    pub fn insert(&mut self, record: MetricsRecord) -> Result<Option<MetricsRecord>> {
        if let Some(actual) = record.input_size() {
            let expected = self
                .records
                .iter()
                .filter(|r| r.algorithm() != record.algorithm())
                .find_map(MetricsRecord::input_size);

            if let Some(expected) = expected {
                if expected != actual {
                    return Err(SortRankError::InputSizeMismatch { expected, actual });
                }
            }
        }

        match self
            .records
            .iter_mut()
            .find(|r| r.algorithm() == record.algorithm())
        {
            Some(slot) => Ok(Some(std::mem::replace(slot, record))),
            None => {
                self.records.push(record);
                Ok(None)
            }
        }
    }

    /// Returns the record for an algorithm.
    pub fn get(&self, algorithm: AlgorithmId) -> Option<&MetricsRecord> {
        self.records.iter().find(|r| r.algorithm() == algorithm)
    }

    /// Number of records, measured or not.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the set holds no records.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, MetricsRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a RunSet {
    type Item = &'a MetricsRecord;
    type IntoIter = std::slice::Iter<'a, MetricsRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ranks measured records by ascending elapsed time.
///
/// Records without a strictly positive, finite time are skipped. Equal times
/// keep their input order, and ranks run contiguously from 1 with no sharing.
///
/// # Examples
///
/// ```
/// use sortrank::{AlgorithmId, MetricsRecord, rank};
///
/// let records = [
///     MetricsRecord::new(AlgorithmId::Quick, 0, 0, 120.0),
///     MetricsRecord::new(AlgorithmId::Bubble, 0, 0, 980.0),
///     MetricsRecord::new(AlgorithmId::Merge, 0, 0, 140.0),
/// ];
///
/// let ranked = rank(&records);
/// let order: Vec<_> = ranked.iter().map(|e| e.record.algorithm()).collect();
/// assert_eq!(order, [AlgorithmId::Quick, AlgorithmId::Merge, AlgorithmId::Bubble]);
/// ```
pub fn rank<'a, I>(records: I) -> Vec<RankedEntry>
where
    I: IntoIterator<Item = &'a MetricsRecord>,
{
    let mut eligible: Vec<&MetricsRecord> = Vec::new();
    let mut skipped = 0usize;

    for record in records {
        if record.is_measured() {
            eligible.push(record);
        } else {
            skipped += 1;
        }
    }

    if skipped > 0 {
        log::debug!("Ranking skipped {} unmeasured record(s)", skipped);
    }

    // Stable: equal times keep input order.
    eligible.sort_by(|a, b| a.time_ms().total_cmp(&b.time_ms()));

    eligible
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            log::trace!("#{} {} ({:.3}ms)", i + 1, record.algorithm(), record.time_ms());
            RankedEntry {
                rank: i + 1,
                record: record.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timed(algorithm: AlgorithmId, time_ms: f64) -> MetricsRecord {
        MetricsRecord::new(algorithm, 0, 0, time_ms)
    }

    fn order(ranked: &[RankedEntry]) -> Vec<AlgorithmId> {
        ranked.iter().map(|e| e.record.algorithm()).collect()
    }

    #[test]
    fn test_rank_example() {
        let records = vec![
            timed(AlgorithmId::Quick, 120.0),
            timed(AlgorithmId::Bubble, 980.0),
            timed(AlgorithmId::Merge, 140.0),
        ];

        let ranked = rank(&records);

        assert_eq!(
            order(&ranked),
            vec![AlgorithmId::Quick, AlgorithmId::Merge, AlgorithmId::Bubble]
        );
        assert_eq!(ranked.iter().map(|e| e.rank).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_rank_excludes_unmeasured() {
        let records = vec![timed(AlgorithmId::Bubble, 0.0)];
        assert!(rank(&records).is_empty());

        let records = vec![
            timed(AlgorithmId::Bubble, 0.0),
            timed(AlgorithmId::Heap, 5.0),
            timed(AlgorithmId::Shell, -1.0),
            timed(AlgorithmId::Comb, f64::NAN),
            timed(AlgorithmId::Gnome, f64::INFINITY),
        ];
        let ranked = rank(&records);
        assert_eq!(order(&ranked), vec![AlgorithmId::Heap]);
        assert_eq!(ranked[0].rank, 1);
    }

    #[test]
    fn test_rank_ties_keep_input_order() {
        let records = vec![
            timed(AlgorithmId::Heap, 50.0),
            timed(AlgorithmId::Merge, 10.0),
            timed(AlgorithmId::Quick, 10.0),
            timed(AlgorithmId::Radix, 10.0),
        ];

        let ranked = rank(&records);

        assert_eq!(
            order(&ranked),
            vec![
                AlgorithmId::Merge,
                AlgorithmId::Quick,
                AlgorithmId::Radix,
                AlgorithmId::Heap
            ]
        );
        assert_eq!(ranked.iter().map(|e| e.rank).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_rank_is_idempotent() {
        let records = vec![
            timed(AlgorithmId::Selection, 30.0),
            timed(AlgorithmId::Insertion, 30.0),
            timed(AlgorithmId::Quick, 2.0),
        ];
        assert_eq!(rank(&records), rank(&records));
    }

    #[test]
    fn test_run_set_replace_keeps_position() {
        let mut set = RunSet::new();
        set.insert(timed(AlgorithmId::Quick, 10.0)).unwrap();
        set.insert(timed(AlgorithmId::Merge, 10.0)).unwrap();

        let previous = set.insert(timed(AlgorithmId::Quick, 10.0)).unwrap();
        assert!(previous.is_some());
        assert_eq!(set.len(), 2);

        // Quick was inserted first, so it still wins the tie.
        let ranked = rank(&set);
        assert_eq!(order(&ranked), vec![AlgorithmId::Quick, AlgorithmId::Merge]);
    }

    #[test]
    fn test_run_set_rejects_mixed_input_sizes() {
        let mut set = RunSet::new();
        set.insert(timed(AlgorithmId::Quick, 1.0).with_input_size(100))
            .unwrap();

        let err = set
            .insert(timed(AlgorithmId::Heap, 1.0).with_input_size(200))
            .unwrap_err();
        assert_eq!(
            err,
            SortRankError::InputSizeMismatch {
                expected: 100,
                actual: 200
            }
        );

        // Replacing the only sized record with a new size is allowed.
        set.insert(timed(AlgorithmId::Quick, 1.0).with_input_size(200))
            .unwrap();
        assert_eq!(set.get(AlgorithmId::Quick).unwrap().input_size(), Some(200));
    }
}
