//! Contract violations reported by the checked entry points.
//!
//! The plain functions ([`pair_swap`](crate::pair_swap), [`pair_sort`](crate::pair_sort))
//! panic with these same messages instead of returning them.

use thiserror::Error;

/// Errors returned by the `try_*` functions and [`PairSlices`](crate::PairSlices).
///
/// Every check runs before the first write, so an `Err` means the columns
/// were left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PairError {
    /// The key and tie-breaker columns differ in length.
    #[error("column length mismatch: {keys_len} keys vs {ties_len} tie-breakers")]
    LengthMismatch {
        /// Number of keys.
        keys_len: usize,
        /// Number of tie-breakers.
        ties_len: usize,
    },
    /// A swap index does not address a pair.
    #[error("index {index} out of bounds for {len} pairs")]
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Number of pairs in the columns.
        len: usize,
    },
}

impl PairError {
    /// Checks that both columns describe the same number of pairs.
    pub(crate) fn check_lengths(keys_len: usize, ties_len: usize) -> Result<usize, Self> {
        if keys_len != ties_len {
            return Err(PairError::LengthMismatch { keys_len, ties_len });
        }
        Ok(keys_len)
    }

    /// Checks that `index` addresses one of `len` pairs.
    pub(crate) fn check_index(index: usize, len: usize) -> Result<(), Self> {
        if index >= len {
            return Err(PairError::IndexOutOfBounds { index, len });
        }
        Ok(())
    }
}
