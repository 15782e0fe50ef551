//! Instrumented sorting algorithms.
//!
//! Every sorter routes its element comparisons and swaps through an
//! [`OpCounter`], so a run yields the counts stored in a [`MetricsRecord`].
//! Merge and radix sort do not swap; each element write into the slice being
//! sorted is counted as one swap instead.

use crate::algorithm::AlgorithmId;
use crate::record::MetricsRecord;
use std::time::Instant;

/// Operation counts collected during one sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpCounter {
    /// Element comparisons performed
    pub comparisons: u64,
    /// Swaps (or element writes) performed
    pub swaps: u64,
}

impl OpCounter {
    /// Returns `a < b`, counting one comparison.
    #[inline]
    pub fn less(&mut self, a: i32, b: i32) -> bool {
        self.comparisons += 1;
        a < b
    }

    /// Swaps two positions, counting one swap.
    #[inline]
    pub fn swap(&mut self, data: &mut [i32], i: usize, j: usize) {
        self.swaps += 1;
        data.swap(i, j);
    }

    /// Writes a value into a position, counting one swap.
    #[inline]
    pub fn write(&mut self, data: &mut [i32], i: usize, value: i32) {
        self.swaps += 1;
        data[i] = value;
    }
}

/// A sorting algorithm that reports its work through an [`OpCounter`].
pub trait Sorter: Send + Sync {
    /// Catalogue identifier of this algorithm.
    fn id(&self) -> AlgorithmId;

    /// Sorts `data` ascending in place.
    fn sort(&self, data: &mut [i32], counter: &mut OpCounter);
}

/// Returns the sorter implementing `algorithm`.
pub fn sorter_for(algorithm: AlgorithmId) -> Box<dyn Sorter> {
    match algorithm {
        AlgorithmId::Bubble => Box::new(BubbleSorter),
        AlgorithmId::Cocktail => Box::new(CocktailSorter),
        AlgorithmId::Selection => Box::new(SelectionSorter),
        AlgorithmId::Insertion => Box::new(InsertionSorter),
        AlgorithmId::Gnome => Box::new(GnomeSorter),
        AlgorithmId::Shell => Box::new(ShellSorter),
        AlgorithmId::Comb => Box::new(CombSorter),
        AlgorithmId::Merge => Box::new(MergeSorter),
        AlgorithmId::Quick => Box::new(QuickSorter),
        AlgorithmId::Heap => Box::new(HeapSorter),
        AlgorithmId::Radix => Box::new(RadixSorter),
    }
}

/// Runs `algorithm` over a copy of `input` and records its cost.
///
/// The copy is made before the clock starts, so only sorting is timed.
pub fn measure(algorithm: AlgorithmId, input: &[i32]) -> MetricsRecord {
    let sorter = sorter_for(algorithm);
    let mut data = input.to_vec();
    let mut counter = OpCounter::default();

    let start = Instant::now();
    sorter.sort(&mut data, &mut counter);
    let elapsed = start.elapsed();

    debug_assert!(data.is_sorted(), "{} left data unsorted", algorithm);

    log::debug!(
        "{}: n={} swaps={} comparisons={} time={:?}",
        algorithm,
        input.len(),
        counter.swaps,
        counter.comparisons,
        elapsed
    );

    MetricsRecord::new(
        algorithm,
        counter.swaps,
        counter.comparisons,
        elapsed.as_secs_f64() * 1000.0,
    )
    .with_input_size(input.len())
}

// ============================================================================
// Quadratic sorts
// ============================================================================

/// Bubble sort with early exit on a pass without swaps.
pub struct BubbleSorter;

impl Sorter for BubbleSorter {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::Bubble
    }

    fn sort(&self, data: &mut [i32], counter: &mut OpCounter) {
        let n = data.len();
        if n <= 1 {
            return;
        }

        for i in 0..n {
            let mut swapped = false;
            for j in 0..n - 1 - i {
                if counter.less(data[j + 1], data[j]) {
                    counter.swap(data, j, j + 1);
                    swapped = true;
                }
            }
            if !swapped {
                break;
            }
        }
    }
}

/// Bidirectional bubble sort.
pub struct CocktailSorter;

impl Sorter for CocktailSorter {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::Cocktail
    }

    fn sort(&self, data: &mut [i32], counter: &mut OpCounter) {
        if data.len() <= 1 {
            return;
        }

        let mut start = 0;
        let mut end = data.len() - 1;

        while start < end {
            let mut swapped = false;
            for j in start..end {
                if counter.less(data[j + 1], data[j]) {
                    counter.swap(data, j, j + 1);
                    swapped = true;
                }
            }
            if !swapped {
                break;
            }
            end -= 1;

            swapped = false;
            for j in (start..end).rev() {
                if counter.less(data[j + 1], data[j]) {
                    counter.swap(data, j, j + 1);
                    swapped = true;
                }
            }
            if !swapped {
                break;
            }
            start += 1;
        }
    }
}

/// Selection sort; swaps only when the minimum is out of place.
pub struct SelectionSorter;

impl Sorter for SelectionSorter {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::Selection
    }

    fn sort(&self, data: &mut [i32], counter: &mut OpCounter) {
        let n = data.len();
        for i in 0..n.saturating_sub(1) {
            let mut min = i;
            for j in i + 1..n {
                if counter.less(data[j], data[min]) {
                    min = j;
                }
            }
            if min != i {
                counter.swap(data, i, min);
            }
        }
    }
}

/// Insertion sort by adjacent exchanges.
pub struct InsertionSorter;

impl Sorter for InsertionSorter {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::Insertion
    }

    fn sort(&self, data: &mut [i32], counter: &mut OpCounter) {
        for i in 1..data.len() {
            let mut j = i;
            while j > 0 && counter.less(data[j], data[j - 1]) {
                counter.swap(data, j, j - 1);
                j -= 1;
            }
        }
    }
}

/// Gnome sort.
pub struct GnomeSorter;

impl Sorter for GnomeSorter {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::Gnome
    }

    fn sort(&self, data: &mut [i32], counter: &mut OpCounter) {
        let n = data.len();
        let mut pos = 0;
        while pos < n {
            if pos == 0 || !counter.less(data[pos], data[pos - 1]) {
                pos += 1;
            } else {
                counter.swap(data, pos, pos - 1);
                pos -= 1;
            }
        }
    }
}

// ============================================================================
// Gap sorts
// ============================================================================

/// Ciura's gap sequence, extended by x2.25 beyond the last published gap.
const CIURA_GAPS: [usize; 8] = [1, 4, 10, 23, 57, 132, 301, 701];

/// Shell sort over Ciura gaps.
pub struct ShellSorter;

impl ShellSorter {
    fn gaps(n: usize) -> Vec<usize> {
        let mut gaps: Vec<usize> = CIURA_GAPS.iter().copied().filter(|&g| g < n).collect();
        let mut next = CIURA_GAPS[CIURA_GAPS.len() - 1] * 9 / 4;
        while next < n {
            gaps.push(next);
            next = next * 9 / 4;
        }
        gaps.reverse();
        gaps
    }
}

impl Sorter for ShellSorter {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::Shell
    }

    fn sort(&self, data: &mut [i32], counter: &mut OpCounter) {
        for gap in Self::gaps(data.len()) {
            for i in gap..data.len() {
                let mut j = i;
                while j >= gap && counter.less(data[j], data[j - gap]) {
                    counter.swap(data, j, j - gap);
                    j -= gap;
                }
            }
        }
    }
}

/// Comb sort with shrink factor 1.3.
pub struct CombSorter;

impl Sorter for CombSorter {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::Comb
    }

    fn sort(&self, data: &mut [i32], counter: &mut OpCounter) {
        let n = data.len();
        let mut gap = n;
        let mut sorted = false;

        while !sorted {
            gap = (gap * 10 / 13).max(1);
            sorted = gap == 1;

            for i in 0..n.saturating_sub(gap) {
                if counter.less(data[i + gap], data[i]) {
                    counter.swap(data, i, i + gap);
                    sorted = false;
                }
            }
        }
    }
}

// ============================================================================
// n log n sorts
// ============================================================================

/// Top-down merge sort with a single scratch buffer.
pub struct MergeSorter;

impl MergeSorter {
    fn sort_range(data: &mut [i32], scratch: &mut Vec<i32>, counter: &mut OpCounter) {
        let n = data.len();
        if n <= 1 {
            return;
        }

        let mid = n / 2;
        Self::sort_range(&mut data[..mid], scratch, counter);
        Self::sort_range(&mut data[mid..], scratch, counter);

        scratch.clear();
        scratch.extend_from_slice(data);

        let (mut i, mut j) = (0, mid);
        for k in 0..n {
            // Left wins ties to keep the sort stable.
            let take_left = j >= n || (i < mid && !counter.less(scratch[j], scratch[i]));
            if take_left {
                counter.write(data, k, scratch[i]);
                i += 1;
            } else {
                counter.write(data, k, scratch[j]);
                j += 1;
            }
        }
    }
}

impl Sorter for MergeSorter {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::Merge
    }

    fn sort(&self, data: &mut [i32], counter: &mut OpCounter) {
        let mut scratch = Vec::with_capacity(data.len());
        Self::sort_range(data, &mut scratch, counter);
    }
}

/// Quicksort with median-of-three pivot and three-way partitioning.
///
/// Keys equal to the pivot are settled in one pass, so inputs with few
/// distinct values stay n log n. Recurses into the smaller partition and
/// loops over the larger one, so stack depth stays logarithmic.
pub struct QuickSorter;

impl QuickSorter {
    fn sort_range(mut data: &mut [i32], counter: &mut OpCounter) {
        while data.len() > 1 {
            let (lt, gt) = Self::partition(data, counter);
            let (left, rest) = std::mem::take(&mut data).split_at_mut(lt);
            let right = &mut rest[gt - lt..];

            if left.len() < right.len() {
                Self::sort_range(left, counter);
                data = right;
            } else {
                Self::sort_range(right, counter);
                data = left;
            }
        }
    }

    /// Splits `data` into `< pivot`, `== pivot` and `> pivot` runs and
    /// returns the bounds `(lt, gt)` of the middle run. The middle run is
    /// never empty.
    fn partition(data: &mut [i32], counter: &mut OpCounter) -> (usize, usize) {
        let last = data.len() - 1;
        let mid = last / 2;

        // Order first, middle, last so the median lands at the end.
        if counter.less(data[mid], data[0]) {
            counter.swap(data, mid, 0);
        }
        if counter.less(data[last], data[0]) {
            counter.swap(data, last, 0);
        }
        if counter.less(data[mid], data[last]) {
            counter.swap(data, mid, last);
        }

        let pivot = data[last];
        let (mut lt, mut i, mut gt) = (0, 0, data.len());
        while i < gt {
            if counter.less(data[i], pivot) {
                if i != lt {
                    counter.swap(data, i, lt);
                }
                lt += 1;
                i += 1;
            } else if counter.less(pivot, data[i]) {
                gt -= 1;
                counter.swap(data, i, gt);
            } else {
                i += 1;
            }
        }
        (lt, gt)
    }
}

impl Sorter for QuickSorter {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::Quick
    }

    fn sort(&self, data: &mut [i32], counter: &mut OpCounter) {
        Self::sort_range(data, counter);
    }
}

/// In-place heapsort over a max-heap.
pub struct HeapSorter;

impl HeapSorter {
    fn sift_down(data: &mut [i32], mut root: usize, end: usize, counter: &mut OpCounter) {
        loop {
            let left = 2 * root + 1;
            if left >= end {
                break;
            }

            let right = left + 1;
            let child = if right < end && counter.less(data[left], data[right]) {
                right
            } else {
                left
            };

            if !counter.less(data[root], data[child]) {
                break;
            }
            counter.swap(data, root, child);
            root = child;
        }
    }
}

impl Sorter for HeapSorter {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::Heap
    }

    fn sort(&self, data: &mut [i32], counter: &mut OpCounter) {
        let n = data.len();
        for root in (0..n / 2).rev() {
            Self::sift_down(data, root, n, counter);
        }
        for end in (1..n).rev() {
            counter.swap(data, 0, end);
            Self::sift_down(data, 0, end, counter);
        }
    }
}

/// LSD radix sort, one byte per pass. Performs no comparisons.
pub struct RadixSorter;

impl RadixSorter {
    /// Maps `i32` onto `u32` so that unsigned order matches signed order.
    #[inline]
    #[allow(clippy::cast_sign_loss)]
    fn key(value: i32) -> u32 {
        (value as u32) ^ 0x8000_0000
    }
}

impl Sorter for RadixSorter {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::Radix
    }

    fn sort(&self, data: &mut [i32], counter: &mut OpCounter) {
        if data.len() <= 1 {
            return;
        }

        let mut buffer = vec![0i32; data.len()];

        for shift in [0u32, 8, 16, 24] {
            let mut offsets = [0usize; 257];
            for &value in data.iter() {
                offsets[((Self::key(value) >> shift) & 0xFF) as usize + 1] += 1;
            }
            for b in 0..256 {
                offsets[b + 1] += offsets[b];
            }

            for &value in data.iter() {
                let bucket = ((Self::key(value) >> shift) & 0xFF) as usize;
                buffer[offsets[bucket]] = value;
                offsets[bucket] += 1;
            }

            for (i, &value) in buffer.iter().enumerate() {
                counter.write(data, i, value);
            }
        }
    }
}
