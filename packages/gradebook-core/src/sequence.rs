//! Longest-run analyzers over number sequences.
//!
//! Three scans over a slice:
//! - pairwise: longest chain under a two-element check (O(n^2) table)
//! - pointwise: longest contiguous run of elements passing a check
//! - max sum: highest positive-sum window (Kadane)
//!
//! Ties break differently: the run scans keep the last maximal run (`>=`),
//! the sum scan keeps the first (`>`).

use std::ops::{Add, Range};

/// Start position and length of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Run {
    pub start: usize,
    pub len: usize,
}

impl Run {
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.len
    }

    /// Returns the run's elements, or an empty slice when it lies past the end.
    pub fn slice<'a, T>(&self, seq: &'a [T]) -> &'a [T] {
        seq.get(self.range()).unwrap_or(&[])
    }
}

/// Window with the largest positive sum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SumWindow<'a, T> {
    pub items: &'a [T],
    pub sum: T,
}

/// Longest chain where each element passes `check` against an earlier one.
///
/// `chain[i]` is one more than the longest `chain[j]` (`j < i`) with
/// `check(&seq[i], &seq[j])`, or 1. The reported run ends at the last index
/// holding the maximum chain length.
pub fn longest_pairwise_subsequence<T, F>(seq: &[T], check: F) -> Run
where
    F: Fn(&T, &T) -> bool,
{
    let mut chain = vec![1usize; seq.len()];
    for i in 1..seq.len() {
        for j in 0..i {
            if check(&seq[i], &seq[j]) && chain[i] < chain[j] + 1 {
                chain[i] = chain[j] + 1;
            }
        }
    }

    let mut best = Run::default();
    for (i, &len) in chain.iter().enumerate() {
        if best.len <= len {
            best = Run::new(i + 1 - len, len);
        }
    }
    best
}

/// Longest contiguous run of elements each passing `check`.
///
/// When nothing passes the scan still moves the start along, so a
/// non-empty input yields `start == seq.len()` and `len == 0`.
pub fn longest_pointwise_subsequence<T, F>(seq: &[T], check: F) -> Run
where
    F: Fn(&T) -> bool,
{
    let mut best = Run::default();
    let mut current = 0usize;
    for (i, x) in seq.iter().enumerate() {
        current = if check(x) { current + 1 } else { 0 };
        if current >= best.len {
            best = Run::new(i + 1 - current, current);
        }
    }
    best
}

/// Window with the largest strictly positive sum.
///
/// The running sum restarts after any element that would bring it to zero
/// or below. `T::default()` must be the additive zero, and running sums must
/// fit in `T`; widen integer input first when they might not.
pub fn longest_sum_subsequence<T>(seq: &[T]) -> SumWindow<'_, T>
where
    T: Copy + Default + PartialOrd + Add<Output = T>,
{
    let zero = T::default();
    let (mut best, mut current) = (zero, zero);
    let (mut current_start, mut start, mut end) = (0, 0, 0);

    for (i, &x) in seq.iter().enumerate() {
        if current + x > zero {
            current = current + x;
        } else {
            current = zero;
            current_start = i + 1;
        }

        if current > best {
            start = current_start;
            end = i + 1;
            best = current;
        }
    }

    SumWindow {
        items: &seq[start..end],
        sum: best,
    }
}

/// True when exactly one of the two values is strictly positive.
///
/// Zero counts as non-positive.
pub fn opposite_sign<T>(x: &T, y: &T) -> bool
where
    T: PartialOrd + Default,
{
    let zero = T::default();
    (*x <= zero) != (*y <= zero)
}

pub fn equal<T: PartialEq>(x: &T, y: &T) -> bool {
    x == y
}
