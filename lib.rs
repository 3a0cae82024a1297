// Rust-seqkit: Generic sequence algorithms.
// Copyright (c) 2026, the seqkit developers.
// See README.md and LICENSE.txt for details.

//! Small, pure algorithms over ordered sequences.
//!
//! - [`create`]: build a sequence from start/end/len and a fill.
//! - [`iter`]: `for_each`, `from`, `filter`, `find`, `find_index`,
//!   `includes` and `keys` over anything [`ArrayLike`].
//! - [`flat`]: flatten nested sequences to a given depth.
//! - [`bsearch`]: three comparator-driven binary searches.
//! - [`insert_at`] and [`unique`]/[`unique_by`]: copy-producing edits.
//! - [`value`]: the same iteration primitives over a dynamically typed
//!   [`Value`], with runtime validation.
//!
//! Nothing here mutates its input. Not-found results are `None`, never errors.
//!
//! ```
//! use seqkit::{binary_find, flatten, unique, ArraySpec, Nested};
//!
//! let odds = ArraySpec::new().start(0).len(5).filled_with(|_, i| 2 * i + 1);
//! assert_eq!(odds, vec![1, 3, 5, 7, 9]);
//! assert_eq!(binary_find(&odds, |x, _, _| 7.cmp(x)), Some(&7));
//!
//! let xs = vec![Nested::leaf(1), Nested::seq([Nested::leaf(2), Nested::leaf(2)])];
//! let flat = flatten(&xs, 1);
//! assert_eq!(&*unique(&flat), &[Nested::leaf(1), Nested::leaf(2)]);
//! ```

pub mod bsearch;
pub mod create;
pub mod error;
pub mod flat;
pub mod insert;
pub mod iter;
pub mod kind;
pub mod unique;
pub mod value;

pub use crate::bsearch::{binary_find, binary_find_index, binary_find_recursive};
pub use crate::create::{create_array, ArraySpec, Fill};
pub use crate::error::{Error, Result};
pub use crate::flat::{flatten, into_flattened, Nest, Nested};
pub use crate::insert::insert_at;
pub use crate::iter::{
    entries, filter, find, find_index, for_each, for_each_by_len, from, from_with, includes,
    includes_by, keys, ArrayLike, Entries, Keyed,
};
pub use crate::kind::{classify, Classify, Kind};
pub use crate::unique::{unique, unique_by};
pub use crate::value::{Callback, Value};
