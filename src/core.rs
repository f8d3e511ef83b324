//! Core types for pair sorting.
//!
//! This module defines:
//! - [`Key`] and [`TieBreaker`]: the two column element types.
//! - [`compare_pairs`]: the total order every sort in this crate produces.
//! - [`PairColumns`]: the trait users implement to sort their own column stores.
//! - [`PairSlices`]: a length-checked view over two borrowed columns.

use crate::algo::{is_pair_sorted, selection_sort, swap_pairs};
use crate::error::PairError;
use std::cmp::Ordering;

/// Primary ordering value of a pair.
pub type Key = i32;

/// Secondary ordering value, consulted only when keys are equal.
pub type TieBreaker = i32;

/// Compares two `(key, tie-breaker)` pairs.
///
/// Keys are compared first; the tie-breakers decide only when the keys are
/// equal.
///
/// # Examples
///
/// ```
/// use pairsort::compare_pairs;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare_pairs((1, 9), (2, 0)), Ordering::Less);
/// assert_eq!(compare_pairs((2, 5), (2, 1)), Ordering::Greater);
/// assert_eq!(compare_pairs((2, 1), (2, 1)), Ordering::Equal);
/// ```
#[inline(always)]
pub fn compare_pairs(a: (Key, TieBreaker), b: (Key, TieBreaker)) -> Ordering {
    match a.0.cmp(&b.0) {
        Ordering::Equal => a.1.cmp(&b.1),
        other => other,
    }
}

/// A container holding a key column and a tie-breaker column side by side.
///
/// Implementing this trait lets [`pair_sort_mut`](crate::pair_sort_mut) sort any
/// column store in place, without copying the columns out first.
///
/// # Examples
///
/// ```
/// use pairsort::core::{Key, PairColumns, TieBreaker};
///
/// struct Ledger {
///     priority: Vec<i32>,
///     arrival: Vec<i32>,
/// }
///
/// impl PairColumns for Ledger {
///     fn columns(&self) -> (&[Key], &[TieBreaker]) {
///         (&self.priority, &self.arrival)
///     }
///
///     fn columns_mut(&mut self) -> (&mut [Key], &mut [TieBreaker]) {
///         (&mut self.priority, &mut self.arrival)
///     }
/// }
/// ```
pub trait PairColumns {
    /// Returns the key and tie-breaker columns.
    fn columns(&self) -> (&[Key], &[TieBreaker]);

    /// Returns the key and tie-breaker columns for in-place mutation.
    fn columns_mut(&mut self) -> (&mut [Key], &mut [TieBreaker]);

    /// Returns the length of the key column.
    ///
    /// Sorting rejects a container whose tie-breaker column differs from this.
    fn len(&self) -> usize {
        self.columns().0.len()
    }

    /// Returns `true` if the key column is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the columns have equal length and are ordered by
    /// [`compare_pairs`].
    fn is_pair_sorted(&self) -> bool {
        let (keys, ties) = self.columns();
        is_pair_sorted(keys, ties)
    }
}

impl PairColumns for (Vec<Key>, Vec<TieBreaker>) {
    fn columns(&self) -> (&[Key], &[TieBreaker]) {
        (&self.0, &self.1)
    }

    fn columns_mut(&mut self) -> (&mut [Key], &mut [TieBreaker]) {
        (&mut self.0, &mut self.1)
    }
}

impl<const N: usize> PairColumns for ([Key; N], [TieBreaker; N]) {
    fn columns(&self) -> (&[Key], &[TieBreaker]) {
        (&self.0, &self.1)
    }

    fn columns_mut(&mut self) -> (&mut [Key], &mut [TieBreaker]) {
        (&mut self.0, &mut self.1)
    }
}

// Borrowed columns, e.g. prefixes of larger buffers.
impl PairColumns for (&mut [Key], &mut [TieBreaker]) {
    fn columns(&self) -> (&[Key], &[TieBreaker]) {
        (&*self.0, &*self.1)
    }

    fn columns_mut(&mut self) -> (&mut [Key], &mut [TieBreaker]) {
        (&mut *self.0, &mut *self.1)
    }
}

/// Two borrowed columns whose lengths were checked to match.
///
/// Construction is the only fallible step; afterwards [`sort`](Self::sort)
/// cannot fail and [`swap`](Self::swap) only panics on an out-of-range index.
///
/// # Examples
///
/// ```
/// use pairsort::PairSlices;
///
/// let mut keys = [2, 2, 1];
/// let mut ties = [5, 1, 0];
///
/// let mut pairs = PairSlices::new(&mut keys, &mut ties).unwrap();
/// pairs.sort();
/// assert!(pairs.is_sorted());
///
/// assert_eq!(keys, [1, 2, 2]);
/// assert_eq!(ties, [0, 1, 5]);
/// ```
#[derive(Debug)]
pub struct PairSlices<'a> {
    keys: &'a mut [Key],
    ties: &'a mut [TieBreaker],
}

impl<'a> PairSlices<'a> {
    /// Wraps two columns, rejecting them if their lengths differ.
    pub fn new(keys: &'a mut [Key], ties: &'a mut [TieBreaker]) -> Result<Self, PairError> {
        PairError::check_lengths(keys.len(), ties.len())?;
        Ok(Self { keys, ties })
    }

    /// Returns the number of pairs.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if there are no pairs.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the pair at `index`, or `None` if it is out of range.
    pub fn get(&self, index: usize) -> Option<(Key, TieBreaker)> {
        let key = *self.keys.get(index)?;
        Some((key, self.ties[index]))
    }

    /// Iterates over the pairs by value, in column order.
    pub fn iter(&self) -> impl Iterator<Item = (Key, TieBreaker)> + '_ {
        self.keys.iter().copied().zip(self.ties.iter().copied())
    }

    /// Exchanges the pairs at `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of bounds.
    pub fn swap(&mut self, i: usize, j: usize) {
        if let Err(err) = self.try_swap(i, j) {
            panic!("{err}");
        }
    }

    /// Exchanges the pairs at `i` and `j`, reporting an out-of-range index
    /// instead of panicking.
    pub fn try_swap(&mut self, i: usize, j: usize) -> Result<(), PairError> {
        let len = self.len();
        PairError::check_index(i, len)?;
        PairError::check_index(j, len)?;
        swap_pairs(self.keys, self.ties, i, j);
        Ok(())
    }

    /// Sorts the pairs in place by [`compare_pairs`].
    pub fn sort(&mut self) {
        selection_sort(self.keys, self.ties);
    }

    /// Returns `true` if the pairs are ordered by [`compare_pairs`].
    pub fn is_sorted(&self) -> bool {
        is_pair_sorted(self.keys, self.ties)
    }

    /// Releases the borrowed columns.
    pub fn into_inner(self) -> (&'a mut [Key], &'a mut [TieBreaker]) {
        (self.keys, self.ties)
    }
}

impl PairColumns for PairSlices<'_> {
    fn columns(&self) -> (&[Key], &[TieBreaker]) {
        (&*self.keys, &*self.ties)
    }

    fn columns_mut(&mut self) -> (&mut [Key], &mut [TieBreaker]) {
        (&mut *self.keys, &mut *self.ties)
    }
}
