//! Pair swap and selection sort over parallel key and tie-breaker columns.
//!
//! The sort builds the result from the right: each pass selects the maximal
//! pair of the unsorted prefix and swaps it into the slot just left of the
//! sorted suffix. It uses `O(n²)` comparisons, at most `n - 1` swaps and no
//! allocation.
//!
//! The main entry points are [`pair_sort`] and [`pair_swap`], with checked
//! `try_*` variants that report contract violations as [`PairError`].

use crate::core::{Key, PairColumns, TieBreaker, compare_pairs};
use crate::error::PairError;
use std::cmp::Ordering;

/// Exchanges the pairs at positions `i` and `j` of both columns.
///
/// `i == j` is a no-op. All other positions are left unchanged.
///
/// # Panics
///
/// Panics if the columns differ in length or if `i` or `j` is out of bounds.
/// Use [`try_pair_swap`] to get a [`PairError`] instead.
///
/// # Examples
///
/// ```
/// use pairsort::pair_swap;
///
/// let mut keys = [1, 2, 3];
/// let mut ties = [10, 20, 30];
/// pair_swap(&mut keys, &mut ties, 0, 2);
///
/// assert_eq!(keys, [3, 2, 1]);
/// assert_eq!(ties, [30, 20, 10]);
/// ```
pub fn pair_swap(keys: &mut [Key], ties: &mut [TieBreaker], i: usize, j: usize) {
    if let Err(err) = try_pair_swap(keys, ties, i, j) {
        panic!("pair_swap: {err}");
    }
}

/// Exchanges the pairs at positions `i` and `j`, checking the contract first.
///
/// On error the columns are not modified.
pub fn try_pair_swap(
    keys: &mut [Key],
    ties: &mut [TieBreaker],
    i: usize,
    j: usize,
) -> Result<(), PairError> {
    let len = PairError::check_lengths(keys.len(), ties.len())?;
    PairError::check_index(i, len)?;
    PairError::check_index(j, len)?;

    swap_pairs(keys, ties, i, j);
    Ok(())
}

/// Sorts both columns in place by key, then by tie-breaker.
///
/// After the call `(keys[i], ties[i]) <= (keys[i + 1], ties[i + 1])` under
/// [`compare_pairs`] for every adjacent pair, and the pairs are a rearrangement
/// of the input pairs: a key always travels together with its tie-breaker.
///
/// Empty and single-pair columns are left untouched.
///
/// # Panics
///
/// Panics if the columns differ in length. Use [`try_pair_sort`] to get a
/// [`PairError`] instead.
///
/// # Examples
///
/// ```
/// use pairsort::pair_sort;
///
/// let mut keys = [2, 2, 1];
/// let mut ties = [5, 1, 0];
/// pair_sort(&mut keys, &mut ties);
///
/// assert_eq!(keys, [1, 2, 2]);
/// assert_eq!(ties, [0, 1, 5]);
/// ```
pub fn pair_sort(keys: &mut [Key], ties: &mut [TieBreaker]) {
    if let Err(err) = try_pair_sort(keys, ties) {
        panic!("pair_sort: {err}");
    }
}

/// Sorts both columns in place, rejecting columns of different lengths.
///
/// On error the columns are not modified.
pub fn try_pair_sort(keys: &mut [Key], ties: &mut [TieBreaker]) -> Result<(), PairError> {
    PairError::check_lengths(keys.len(), ties.len())?;
    selection_sort(keys, ties);
    Ok(())
}

/// Sorts any [`PairColumns`] container in place.
///
/// # Examples
///
/// ```
/// use pairsort::pair_sort_mut;
///
/// let mut columns = (vec![3, 1, 2], vec![0, 0, 0]);
/// pair_sort_mut(&mut columns).unwrap();
///
/// assert_eq!(columns.0, vec![1, 2, 3]);
/// ```
pub fn pair_sort_mut<P: PairColumns + ?Sized>(columns: &mut P) -> Result<(), PairError> {
    let (keys, ties) = columns.columns_mut();
    try_pair_sort(keys, ties)
}

/// Returns `true` if the columns have equal length and every adjacent pair is
/// ordered by [`compare_pairs`].
///
/// Columns of different lengths are never considered sorted.
pub fn is_pair_sorted(keys: &[Key], ties: &[TieBreaker]) -> bool {
    if keys.len() != ties.len() {
        return false;
    }

    (1..keys.len()).all(|i| {
        compare_pairs((keys[i - 1], ties[i - 1]), (keys[i], ties[i])) != Ordering::Greater
    })
}

#[inline(always)]
pub(crate) fn swap_pairs(keys: &mut [Key], ties: &mut [TieBreaker], i: usize, j: usize) {
    keys.swap(i, j);
    ties.swap(i, j);
}

/// Selection sort, right-to-left.
///
/// Invariant at the top of each pass: `[bound, len)` is sorted and no pair in
/// it orders before any pair in `[0, bound)`.
///
/// Callers must have checked that the columns have equal length.
pub(crate) fn selection_sort(keys: &mut [Key], ties: &mut [TieBreaker]) {
    debug_assert_eq!(keys.len(), ties.len());

    let mut bound = keys.len();
    while bound > 1 {
        let max = select_max(keys, ties, bound);
        swap_pairs(keys, ties, max, bound - 1);
        bound -= 1;
    }
}

/// Returns the index of a maximal pair in `[0, bound)`.
///
/// The candidate moves to a scanned pair only when that pair is not ordered
/// before-or-equal the candidate, so the first of several equal maxima wins.
fn select_max(keys: &[Key], ties: &[TieBreaker], bound: usize) -> usize {
    let mut candidate = 0;
    for scanned in 1..bound {
        let ordering = compare_pairs(
            (keys[scanned], ties[scanned]),
            (keys[candidate], ties[candidate]),
        );
        if ordering == Ordering::Greater {
            candidate = scanned;
        }
    }
    candidate
}
