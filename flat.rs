// Rust-seqkit: Generic sequence algorithms.
// Copyright (c) 2026, the seqkit developers.
// See README.md and LICENSE.txt for details.

//! Depth-limited flattening of nested sequences.
//!
//! Output always owns its containers. Whatever is still nested at the depth
//! limit is cloned into fresh storage, never shared with the input.

use tracing::trace;

use crate::kind::{Classify, Kind};

/// Values that may themselves be a sequence of values of the same type.
pub trait Nest: Sized {
    fn as_seq(&self) -> Option<&[Self]>;

    /// Unwraps an owned sequence, or hands the value back if it is not one.
    fn into_seq(self) -> Result<Vec<Self>, Self>;

    fn from_seq(items: Vec<Self>) -> Self;

    fn is_seq(&self) -> bool {
        self.as_seq().is_some()
    }
}

/// A tree of sequences with `T` at the leaves.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Nested<T> {
    Leaf(T),
    Seq(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    pub fn leaf(value: T) -> Nested<T> {
        Nested::Leaf(value)
    }

    pub fn seq<I: IntoIterator<Item = Nested<T>>>(items: I) -> Nested<T> {
        Nested::Seq(items.into_iter().collect())
    }

    /// Levels of sequence nesting; a leaf is 0, `[]` and `[1]` are 1.
    pub fn depth(&self) -> usize {
        match self {
            Nested::Leaf(_) => 0,
            Nested::Seq(items) => 1 + items.iter().map(Nested::depth).max().unwrap_or(0),
        }
    }
}

impl<T> Nest for Nested<T> {
    fn as_seq(&self) -> Option<&[Nested<T>]> {
        match self {
            Nested::Seq(items) => Some(items),
            Nested::Leaf(_) => None,
        }
    }

    fn into_seq(self) -> Result<Vec<Nested<T>>, Nested<T>> {
        match self {
            Nested::Seq(items) => Ok(items),
            leaf => Err(leaf),
        }
    }

    fn from_seq(items: Vec<Nested<T>>) -> Nested<T> {
        Nested::Seq(items)
    }
}

impl<T: Classify> Classify for Nested<T> {
    fn kind(&self) -> Kind {
        match self {
            Nested::Leaf(v) => v.kind(),
            Nested::Seq(_) => Kind::Array,
        }
    }
}

/// Flattens `items` by `depth` levels. `depth == 0` returns a clone.
pub fn flatten<N: Nest + Clone>(items: &[N], depth: usize) -> Vec<N> {
    flatten_level(items, 0, depth)
}

fn flatten_level<N: Nest + Clone>(items: &[N], level: usize, depth: usize) -> Vec<N> {
    if level == depth {
        trace!(level, len = items.len(), "depth limit reached");
        return items.to_vec();
    }
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        match item.as_seq() {
            Some(inner) => out.extend(flatten_level(inner, level + 1, depth)),
            None => out.push(item.clone()),
        }
    }
    out
}

/// Like [`flatten`], but moves out of `items` instead of cloning.
pub fn into_flattened<N: Nest>(items: Vec<N>, depth: usize) -> Vec<N> {
    into_flattened_level(items, 0, depth)
}

fn into_flattened_level<N: Nest>(items: Vec<N>, level: usize, depth: usize) -> Vec<N> {
    if level == depth {
        return items;
    }
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        match item.into_seq() {
            Ok(inner) => out.extend(into_flattened_level(inner, level + 1, depth)),
            Err(leaf) => out.push(leaf),
        }
    }
    out
}
