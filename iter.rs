// Rust-seqkit: Generic sequence algorithms.
// Copyright (c) 2026, the seqkit developers.
// See README.md and LICENSE.txt for details.

//! Iteration primitives over array-like inputs.
//!
//! Every function here takes anything implementing [`ArrayLike`], reads it by
//! index, and never writes back. The input's length is read once before
//! visiting, so the visited range is fixed at call time.

use std::collections::{BTreeMap, VecDeque};
use std::hash::BuildHasher;
use std::marker::PhantomData;
use std::ops::ControlFlow;

use indexmap::IndexMap;

use crate::kind::Classify;

/// Length plus index access. Not necessarily a contiguous slice.
pub trait ArrayLike<T> {
    fn len(&self) -> usize;

    fn get(&self, index: usize) -> Option<&T>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> ArrayLike<T> for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T, const N: usize> ArrayLike<T> for [T; N] {
    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T> ArrayLike<T> for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T> ArrayLike<T> for VecDeque<T> {
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }
}

impl<T, A: ArrayLike<T> + ?Sized> ArrayLike<T> for &A {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn get(&self, index: usize) -> Option<&T> {
        (**self).get(index)
    }
}

/// Lazy `(index, &value)` pairs over an array-like input.
///
/// Finite and not restartable; stopping early is just dropping the iterator.
pub struct Entries<'a, T, A: ?Sized> {
    input: &'a A,
    index: usize,
    len: usize,
    _marker: PhantomData<fn() -> T>,
}

pub fn entries<T, A: ArrayLike<T> + ?Sized>(input: &A) -> Entries<'_, T, A> {
    Entries { input, index: 0, len: input.len(), _marker: PhantomData }
}

impl<'a, T: 'a, A: ArrayLike<T> + ?Sized> Iterator for Entries<'a, T, A> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<(usize, &'a T)> {
        while self.index < self.len {
            let i = self.index;
            self.index += 1;
            if let Some(v) = self.input.get(i) {
                return Some((i, v));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.len - self.index))
    }
}

/// Visits every element in index order until `body` breaks.
pub fn for_each<T, A, F>(input: &A, mut body: F)
where
    A: ArrayLike<T> + ?Sized,
    F: FnMut(&T, usize) -> ControlFlow<()>,
{
    let _ = entries(input).try_for_each(|(i, v)| body(v, i));
}

/// Visits `0..len` until `body` breaks.
pub fn for_each_by_len<F>(len: usize, body: F)
where
    F: FnMut(usize) -> ControlFlow<()>,
{
    let _ = (0..len).try_for_each(body);
}

/// A fresh copy of `input`, element by element.
pub fn from<T: Clone, A: ArrayLike<T> + ?Sized>(input: &A) -> Vec<T> {
    from_with(input, |v, _| v.clone())
}

/// A fresh sequence of `map(value, index)` for every element of `input`.
pub fn from_with<T, U, A, F>(input: &A, mut map: F) -> Vec<U>
where
    A: ArrayLike<T> + ?Sized,
    F: FnMut(&T, usize) -> U,
{
    let mut out = Vec::with_capacity(input.len());
    for_each(input, |v, i| {
        out.push(map(v, i));
        ControlFlow::Continue(())
    });
    out
}

pub fn filter<T, A, F>(input: &A, mut predicate: F) -> Vec<T>
where
    T: Clone,
    A: ArrayLike<T> + ?Sized,
    F: FnMut(&T, usize, &A) -> bool,
{
    entries(input)
        .filter(|&(i, v)| predicate(v, i, input))
        .map(|(_, v)| v.clone())
        .collect()
}

pub fn find<'a, T, A, F>(input: &'a A, mut predicate: F) -> Option<&'a T>
where
    A: ArrayLike<T> + ?Sized,
    F: FnMut(&T, usize, &A) -> bool,
{
    entries(input).find(|&(i, v)| predicate(v, i, input)).map(|(_, v)| v)
}

pub fn find_index<T, A, F>(input: &A, mut predicate: F) -> Option<usize>
where
    A: ArrayLike<T> + ?Sized,
    F: FnMut(&T, usize, &A) -> bool,
{
    entries(input).find(|&(i, v)| predicate(v, i, input)).map(|(i, _)| i)
}

/// Whether any element at or after `from_index` equals `needle`.
///
/// Unlike `==`, two NaN-like values match each other.
pub fn includes<T, A>(input: &A, needle: &T, from_index: usize) -> bool
where
    T: PartialEq + Classify,
    A: ArrayLike<T> + ?Sized,
{
    let needle_nan = needle.is_nan_like();
    entries(input)
        .skip(from_index)
        .any(|(_, v)| v == needle || (needle_nan && v.is_nan_like()))
}

/// Whether any element at or after `from_index` satisfies `predicate`.
pub fn includes_by<T, A, F>(input: &A, mut predicate: F, from_index: usize) -> bool
where
    A: ArrayLike<T> + ?Sized,
    F: FnMut(&T, usize, &A) -> bool,
{
    entries(input).skip(from_index).any(|(i, v)| predicate(v, i, input))
}

/// Targets with own keys in a stable enumeration order.
pub trait Keyed {
    type Key;

    fn keys(&self) -> Vec<Self::Key>;
}

impl<T> Keyed for [T] {
    type Key = usize;

    fn keys(&self) -> Vec<usize> {
        (0..self.len()).collect()
    }
}

impl<T> Keyed for Vec<T> {
    type Key = usize;

    fn keys(&self) -> Vec<usize> {
        (0..self.len()).collect()
    }
}

impl<K: Clone, V, S: BuildHasher> Keyed for IndexMap<K, V, S> {
    type Key = K;

    fn keys(&self) -> Vec<K> {
        IndexMap::keys(self).cloned().collect()
    }
}

impl<K: Clone, V> Keyed for BTreeMap<K, V> {
    type Key = K;

    fn keys(&self) -> Vec<K> {
        BTreeMap::keys(self).cloned().collect()
    }
}

/// Own keys of `target` in enumeration order. Absent or empty targets yield
/// an empty sequence.
pub fn keys<K: Keyed + ?Sized>(target: Option<&K>) -> Vec<K::Key> {
    target.map(Keyed::keys).unwrap_or_default()
}

/// Visits the entries of an insertion-ordered map until `body` breaks.
pub fn for_each_entry<K, V, S, F>(map: &IndexMap<K, V, S>, mut body: F)
where
    F: FnMut(&V, &K) -> ControlFlow<()>,
{
    let _ = map.iter().try_for_each(|(k, v)| body(v, k));
}

pub fn reduce_entries<K, V, S, R, F>(map: &IndexMap<K, V, S>, mut body: F, init: R) -> R
where
    F: FnMut(R, &V, &K) -> R,
{
    map.iter().fold(init, |acc, (k, v)| body(acc, v, k))
}
