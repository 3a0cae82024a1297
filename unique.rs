// Rust-seqkit: Generic sequence algorithms.
// Copyright (c) 2026, the seqkit developers.
// See README.md and LICENSE.txt for details.

//! Order-preserving deduplication under an arbitrary equality.

use std::borrow::Cow;

use tracing::trace;

/// Removes later duplicates of each element, comparing with `==`.
pub fn unique<T: PartialEq + Clone>(v: &[T]) -> Cow<'_, [T]> {
    unique_by(v, |a, b| a == b)
}

/// Removes every element that `equals` some already kept element.
///
/// Each candidate is compared against the kept elements in order, as
/// `equals(kept, candidate)`, so the predicate needs neither hashing nor an
/// ordering. That makes this quadratic in the worst case.
///
/// An empty `v` is handed back as is; anything else yields a new vector.
pub fn unique_by<T, F>(v: &[T], mut equals: F) -> Cow<'_, [T]>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    if v.is_empty() {
        return Cow::Borrowed(v);
    }
    let mut kept: Vec<T> = Vec::with_capacity(v.len());
    for item in v {
        if kept.iter().any(|k| equals(k, item)) {
            continue;
        }
        kept.push(item.clone());
    }
    trace!(dropped = v.len() - kept.len(), "deduplicated");
    Cow::Owned(kept)
}
