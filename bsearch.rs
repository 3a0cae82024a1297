// Rust-seqkit: Generic sequence algorithms.
// Copyright (c) 2026, the seqkit developers.
// See README.md and LICENSE.txt for details.

//! Comparator-driven binary search.
//!
//! All three searches share one comparator convention: the comparator looks
//! at a midpoint element and says where the target is relative to it.
//! `Equal` means that element is the target, `Greater` means the target lies to
//! the right (later indices), `Less` means it lies to the left. For numbers
//! that is `target.cmp(&item)`, the sign of `target - item`.
//!
//! Nothing checks that the sequence is actually sorted consistently with the
//! comparator. An inconsistent comparator yields an unspecified result, but
//! every search still terminates without panicking.
//!
//! Each search emits a single trace event when it gives up, and nothing on
//! the individual steps.

use std::cmp::Ordering::{self, Equal, Greater, Less};

use tracing::trace;

/// Recursive bisection over shrinking subslices.
///
/// The comparator receives the midpoint element, its index in the *original*
/// `v`, and the subslice currently being searched.
pub fn binary_find_recursive<T, F>(v: &[T], mut f: F) -> Option<&T>
where
    F: FnMut(&T, usize, &[T]) -> Ordering,
{
    let found = find_from(v, 0, &mut f);
    if found.is_none() {
        trace!(len = v.len(), "binary_find_recursive exhausted");
    }
    found
}

fn find_from<'a, T, F>(v: &'a [T], offset: usize, f: &mut F) -> Option<&'a T>
where
    F: FnMut(&T, usize, &[T]) -> Ordering,
{
    if v.is_empty() {
        return None;
    }
    let mid = v.len() / 2;
    match f(&v[mid], mid + offset, v) {
        Equal => Some(&v[mid]),
        _ if v.len() == 1 => None,
        Greater => find_from(&v[mid + 1..], offset + mid + 1, f),
        Less => find_from(&v[..mid], offset, f),
    }
}

/// Iterative bisection over `[start, end)`; the comparator receives the
/// midpoint element, its index, and the whole sequence.
pub fn binary_find<T, F>(v: &[T], mut f: F) -> Option<&T>
where
    F: FnMut(&T, usize, &[T]) -> Ordering,
{
    let mut start = 0;
    let mut end = v.len();
    while start < end { // invariant: the target, if present, is in v[start..end]
        let mid = (start + end) / 2;
        match f(&v[mid], mid, v) {
            Equal => return Some(&v[mid]),
            Greater => start = mid + 1,
            Less => end = mid,
        }
    }
    trace!(len = v.len(), "binary_find exhausted");
    None
}

/// Like [`binary_find`] but returns the index. The comparator receives
/// `(item, mid, start, end)`, the current bounds included.
///
/// An empty `v` returns `None` without calling the comparator.
pub fn binary_find_index<T, F>(v: &[T], mut f: F) -> Option<usize>
where
    F: FnMut(&T, usize, usize, usize) -> Ordering,
{
    let mut start = 0;
    let mut end = v.len();
    while start < end {
        let mid = (end - start) / 2 + start;
        match f(&v[mid], mid, start, end) {
            Equal => return Some(mid),
            Greater => start = mid + 1,
            Less => end = mid,
        }
    }
    trace!(len = v.len(), "binary_find_index exhausted");
    None
}
