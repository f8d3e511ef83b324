//! # Pairsort
//!
//! `pairsort` sorts two parallel integer columns, a **key** column and a
//! **tie-breaker** column, in place, as if they were a single sequence of
//! `(key, tie-breaker)` pairs.
//!
//! The order is key ascending, then tie-breaker ascending among equal keys
//! (see [`compare_pairs`]). A key always moves together with its tie-breaker,
//! so the output is a rearrangement of the input pairs.
//!
//! ## Key Features
//!
//! - **In-Place**: No allocation. The only scratch space is the temporary used by a swap.
//! - **Checked Contracts**: Mismatched column lengths and out-of-range swap indices
//!   are detected once at entry. The plain functions panic, the `try_*` variants
//!   return a [`PairError`] and leave the columns untouched.
//! - **Non-Aliasing by Construction**: The two columns are distinct `&mut` borrows,
//!   so they can never overlap.
//! - **Custom Column Stores**: The [`PairColumns`] trait lets [`pair_sort_mut`] sort
//!   any container that holds the two columns side by side.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! ```rust
//! use pairsort::pair_sort;
//!
//! let mut keys = [3, 1, 2, 1];
//! let mut ties = [0, 7, 0, 4];
//! pair_sort(&mut keys, &mut ties);
//!
//! assert_eq!(keys, [1, 1, 2, 3]);
//! assert_eq!(ties, [4, 7, 0, 0]);
//! ```
//!
//! ### Checked Usage
//!
//! ```rust
//! use pairsort::{try_pair_sort, PairError};
//!
//! let mut keys = [2, 1];
//! let mut ties = [0];
//!
//! assert_eq!(
//!     try_pair_sort(&mut keys, &mut ties),
//!     Err(PairError::LengthMismatch { keys_len: 2, ties_len: 1 })
//! );
//! assert_eq!(keys, [2, 1]);
//! ```
//!
//! ### Sorting a Prefix
//!
//! The number of pairs is the slice length. To sort only the first `n` pairs of
//! larger buffers, pass sub-slices:
//!
//! ```rust
//! use pairsort::pair_sort;
//!
//! let mut keys = [9, 4, 1, 0];
//! let mut ties = [0, 0, 0, 0];
//! pair_sort(&mut keys[..3], &mut ties[..3]);
//!
//! assert_eq!(keys, [1, 4, 9, 0]);
//! ```
//!
//! ## Performance Characteristics
//!
//! Selection sort: `O(n²)` comparisons and at most `n - 1` swaps regardless of the
//! input distribution. Suited to short columns where the swap count matters more
//! than the comparison count.

pub mod algo;
pub mod core;
pub mod error;
pub mod matcher;
pub use crate::algo::{
    is_pair_sorted, pair_sort, pair_sort_mut, pair_swap, try_pair_sort, try_pair_swap,
};
pub use crate::core::{Key, PairColumns, PairSlices, TieBreaker, compare_pairs};
pub use crate::error::PairError;

pub mod prelude {
    pub use crate::algo::{
        is_pair_sorted, pair_sort, pair_sort_mut, pair_swap, try_pair_sort, try_pair_swap,
    };
    pub use crate::core::{Key, PairColumns, PairSlices, TieBreaker, compare_pairs};
    pub use crate::error::PairError;
}
