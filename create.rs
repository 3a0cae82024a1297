// Rust-seqkit: Generic sequence algorithms.
// Copyright (c) 2026, the seqkit developers.
// See README.md and LICENSE.txt for details.

//! Building sequences from a start/end/len description.

use std::ops::Range;

use tracing::trace;

/// Where a built sequence starts and stops.
///
/// `end` is exclusive. When both `end` and `len` are set, the smaller
/// resulting bound wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArraySpec {
    pub start: i64,
    pub end: Option<i64>,
    pub len: Option<i64>,
}

/// How each slot of a built sequence is filled.
///
/// Only `Counter` needs a way to turn the counter into a `T`, so only it
/// carries one.
pub enum Fill<'a, T> {
    /// The running counter itself, converted.
    Counter(fn(i64) -> T),
    Constant(T),
    /// Called with `(item, index)`.
    With(&'a dyn Fn(i64, usize) -> T),
}

impl<T: From<i64>> Fill<'_, T> {
    pub fn counter() -> Self {
        Fill::Counter(T::from)
    }
}

impl<T: From<i64>> Default for Fill<'_, T> {
    fn default() -> Self {
        Fill::counter()
    }
}

impl ArraySpec {
    pub fn new() -> ArraySpec {
        ArraySpec::default()
    }

    pub fn start(mut self, start: i64) -> ArraySpec {
        self.start = start;
        self
    }

    pub fn end(mut self, end: i64) -> ArraySpec {
        self.end = Some(end);
        self
    }

    pub fn len(mut self, len: i64) -> ArraySpec {
        self.len = Some(len);
        self
    }

    /// The exclusive upper bound of the counter.
    pub fn upper_bound(&self) -> i64 {
        match (self.len, self.end) {
            (Some(len), Some(end)) => self.start.saturating_add(len).min(end),
            (Some(len), None) => self.start.saturating_add(len),
            (None, Some(end)) => end,
            (None, None) => self.start,
        }
    }

    /// The counter values, `start..upper_bound()`. Empty when the bound is
    /// not past `start`.
    pub fn range(&self) -> Range<i64> {
        self.start..self.upper_bound()
    }

    pub fn len_hint(&self) -> usize {
        let span = self.upper_bound().saturating_sub(self.start).max(0);
        usize::try_from(span).unwrap_or(usize::MAX)
    }

    pub fn counters(&self) -> Vec<i64> {
        self.filled_with(|item, _| item)
    }

    pub fn filled<T: Clone>(&self, value: T) -> Vec<T> {
        self.filled_with(|_, _| value.clone())
    }

    /// Calls `f(item, index)` for every counter value; `index` counts from 0.
    pub fn filled_with<T, F: FnMut(i64, usize) -> T>(&self, mut f: F) -> Vec<T> {
        let range = self.range();
        trace!(start = range.start, end = range.end, "building sequence");
        // the reservation is only a hint: a huge span must not allocate up front
        let mut out = Vec::with_capacity(self.len_hint().min(1 << 16));
        for (index, item) in range.enumerate() {
            out.push(f(item, index));
        }
        out
    }
}

/// Builds a sequence described by `spec`, filling each slot per `fill`.
pub fn create_array<T: Clone>(spec: &ArraySpec, fill: Fill<'_, T>) -> Vec<T> {
    match fill {
        Fill::Counter(convert) => spec.filled_with(|item, _| convert(item)),
        Fill::Constant(value) => spec.filled(value),
        Fill::With(f) => spec.filled_with(f),
    }
}
