// Rust-seqkit: Generic sequence algorithms.
// Copyright (c) 2026, the seqkit developers.
// See README.md and LICENSE.txt for details.

//! A dynamically typed value, for callers whose inputs are only known at
//! runtime.
//!
//! The typed primitives in [`iter`](crate::iter) cannot be misused: the
//! compiler checks that inputs are array-like and predicates are callable.
//! The functions in this module take a [`Value`] for both and check the same
//! two things at runtime, uniformly, returning [`Error`] on a mismatch.

use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{Error, Result};
use crate::flat::{self, Nest};
use crate::iter::{ArrayLike, Keyed};
use crate::kind::{Classify, Kind};

/// A callable value. Receives `(value, index, input)` from the iteration
/// functions below, all borrowed from the caller.
pub type Callback = Rc<dyn Fn(&Value, usize, &Value) -> Value>;

#[derive(Clone, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(IndexMap<String, Value>),
    Function(Callback),
}

impl Value {
    pub fn function<F: Fn(&Value, usize, &Value) -> Value + 'static>(f: F) -> Value {
        Value::Function(Rc::new(f))
    }

    /// A copy sharing no mutable substructure with `self`. Functions are
    /// immutable and stay shared.
    pub fn deep_clone(&self) -> Value {
        self.clone()
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) | Value::Function(_) => true,
        }
    }

    pub fn as_array_like(&self) -> Result<&[Value]> {
        match self {
            Value::Array(items) => Ok(items),
            other => {
                debug!(kind = %other.kind(), "rejected non array-like input");
                Err(Error::NotArrayLike { kind: other.kind() })
            }
        }
    }

    pub fn as_callable(&self) -> Result<&Callback> {
        match self {
            Value::Function(f) => Ok(f),
            other => {
                debug!(kind = %other.kind(), "rejected non-callable predicate");
                Err(Error::NotCallable { kind: other.kind() })
            }
        }
    }

    /// Flattens nested arrays up to `depth` levels. Non-arrays come back as is.
    pub fn flat(&self, depth: usize) -> Value {
        match self.as_seq() {
            Some(items) => Value::from_seq(flat::flatten(items, depth)),
            None => self.clone(),
        }
    }
}

impl Classify for Value {
    fn kind(&self) -> Kind {
        match self {
            Value::Undefined => Kind::Undefined,
            Value::Null => Kind::Null,
            Value::Number(n) if n.is_nan() => Kind::NaN,
            Value::Bool(_) | Value::Number(_) | Value::String(_) => Kind::Other,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
            Value::Function(_) => Kind::Function,
        }
    }
}

/// Only arrays have elements; every other value is an empty array-like.
impl ArrayLike<Value> for Value {
    fn len(&self) -> usize {
        self.as_seq().map_or(0, <[Value]>::len)
    }

    fn get(&self, index: usize) -> Option<&Value> {
        self.as_seq()?.get(index)
    }
}

/// Indices for arrays, insertion order for objects, nothing for anything else.
impl Keyed for Value {
    type Key = String;

    fn keys(&self) -> Vec<String> {
        match self {
            Value::Array(items) => (0..items.len()).map(|i| i.to_string()).collect(),
            Value::Object(map) => map.keys().cloned().collect(),
            _ => Vec::new(),
        }
    }
}

impl Nest for Value {
    fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    fn into_seq(self) -> std::result::Result<Vec<Value>, Value> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(other),
        }
    }

    fn from_seq(items: Vec<Value>) -> Value {
        Value::Array(items)
    }
}

/// Strict equality, except that arrays and objects compare by content and
/// functions by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s:?}"),
            Value::Array(items) => f.debug_list().entries(items).finish(),
            Value::Object(map) => f.debug_map().entries(map).finish(),
            Value::Function(_) => f.write_str("<function>"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Value {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Value {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Value {
        Value::Array(items)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(map: IndexMap<String, Value>) -> Value {
        Value::Object(map)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Value::Undefined | Value::Null | Value::Function(_) => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => serializer.collect_seq(items),
            Value::Object(map) => serializer.collect_map(map),
        }
    }
}

/// Calls `body(value, index, input)` in order; stops once it returns exactly
/// `false`.
pub fn for_each(input: &Value, body: &Value) -> Result<()> {
    let items = input.as_array_like()?;
    let f = body.as_callable()?;
    for (i, v) in items.iter().enumerate() {
        if f(v, i, input) == Value::Bool(false) {
            break;
        }
    }
    Ok(())
}

pub fn filter(input: &Value, predicate: &Value) -> Result<Vec<Value>> {
    let items = input.as_array_like()?;
    let f = predicate.as_callable()?;
    Ok(items
        .iter()
        .enumerate()
        .filter(|&(i, v)| f(v, i, input).is_truthy())
        .map(|(_, v)| v.clone())
        .collect())
}

pub fn find<'a>(input: &'a Value, predicate: &Value) -> Result<Option<&'a Value>> {
    Ok(find_index(input, predicate)?.and_then(|i| input.as_array_like().ok()?.get(i)))
}

pub fn find_index(input: &Value, predicate: &Value) -> Result<Option<usize>> {
    let items = input.as_array_like()?;
    let f = predicate.as_callable()?;
    Ok(items.iter().enumerate().position(|(i, v)| f(v, i, input).is_truthy()))
}

/// A function `needle` is used as a predicate; anything else is compared
/// for equality, with NaN matching NaN.
pub fn includes(input: &Value, needle: &Value, from_index: usize) -> Result<bool> {
    let items = input.as_array_like()?;
    Ok(match needle {
        Value::Function(f) => items
            .iter()
            .enumerate()
            .skip(from_index)
            .any(|(i, v)| f(v, i, input).is_truthy()),
        _ => crate::iter::includes(items, needle, from_index),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iter::{self, keys};

    fn num(n: f64) -> Value {
        Value::Number(n)
    }

    fn arr(items: &[f64]) -> Value {
        Value::Array(items.iter().copied().map(Value::Number).collect())
    }

    fn greater_than(limit: f64) -> Value {
        Value::function(move |v, _, _| match *v {
            Value::Number(n) => Value::Bool(n > limit),
            _ => Value::Bool(false),
        })
    }

    #[test]
    fn classifies_every_variant() {
        assert_eq!(Value::Undefined.kind(), Kind::Undefined);
        assert_eq!(Value::Null.kind(), Kind::Null);
        assert_eq!(num(f64::NAN).kind(), Kind::NaN);
        assert_eq!(num(1.0).kind(), Kind::Other);
        assert_eq!(Value::from("s").kind(), Kind::Other);
        assert_eq!(arr(&[]).kind(), Kind::Array);
        assert_eq!(Value::Object(IndexMap::new()).kind(), Kind::Object);
        assert_eq!(greater_than(0.0).kind(), Kind::Function);
    }

    #[test]
    fn validation_is_uniform() {
        let pred = greater_than(1.0);
        let not_array = Error::NotArrayLike { kind: Kind::Other };
        let not_callable = Error::NotCallable { kind: Kind::Other };
        assert_eq!(find_index(&num(3.0), &pred), Err(not_array.clone()));
        assert_eq!(find(&num(3.0), &pred), Err(not_array.clone()));
        assert_eq!(filter(&num(3.0), &pred), Err(not_array.clone()));
        assert_eq!(for_each(&num(3.0), &pred), Err(not_array.clone()));
        assert_eq!(includes(&num(3.0), &pred, 0), Err(not_array));
        let xs = arr(&[1.0, 2.0]);
        assert_eq!(find_index(&xs, &num(1.0)), Err(not_callable.clone()));
        assert_eq!(find(&xs, &num(1.0)), Err(not_callable.clone()));
        assert_eq!(filter(&xs, &num(1.0)), Err(not_callable.clone()));
        assert_eq!(for_each(&xs, &num(1.0)), Err(not_callable));
        assert_eq!(
            find_index(&Value::Undefined, &pred),
            Err(Error::NotArrayLike { kind: Kind::Undefined })
        );
    }

    #[test]
    fn not_found_is_not_an_error() {
        let xs = arr(&[1.0, 2.0, 3.0]);
        assert_eq!(find_index(&xs, &greater_than(1.0)), Ok(Some(1)));
        assert_eq!(find(&xs, &greater_than(2.0)), Ok(Some(&num(3.0))));
        assert_eq!(find_index(&xs, &greater_than(9.0)), Ok(None));
        assert_eq!(find(&xs, &greater_than(9.0)), Ok(None));
        assert_eq!(filter(&xs, &greater_than(1.0)), Ok(vec![num(2.0), num(3.0)]));
    }

    #[test]
    fn for_each_stops_on_false() {
        use std::cell::RefCell;

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let body = Value::function(move |v, i, _| {
            sink.borrow_mut().push(i);
            Value::Bool(*v != num(2.0))
        });
        assert_eq!(for_each(&arr(&[1.0, 2.0, 3.0]), &body), Ok(()));
        assert_eq!(*seen.borrow(), vec![0, 1]);
    }

    #[test]
    fn callbacks_borrow_the_callers_input() {
        use std::cell::Cell;

        let xs = arr(&[1.0, 2.0, 3.0]);
        let addr = &xs as *const Value as usize;
        let same = Rc::new(Cell::new(0));
        let count = same.clone();
        let pred = Value::function(move |v, i, input| {
            let own = std::ptr::eq(input, addr as *const Value);
            if own && input.as_seq().and_then(|xs| xs.get(i)).is_some_and(|x| std::ptr::eq(x, v)) {
                count.set(count.get() + 1);
            }
            Value::Bool(false)
        });
        assert_eq!(filter(&xs, &pred), Ok(vec![]));
        assert_eq!(find_index(&xs, &pred), Ok(None));
        assert_eq!(includes(&xs, &pred, 1), Ok(false));
        assert_eq!(for_each(&xs, &pred), Ok(()));
        // for_each stops after the first `false`
        assert_eq!(same.get(), 3 + 3 + 2 + 1);
    }

    #[test]
    fn includes_value_or_predicate() {
        let xs = arr(&[1.0, f64::NAN, 3.0]);
        assert_eq!(includes(&xs, &num(f64::NAN), 0), Ok(true));
        assert_eq!(includes(&xs, &num(1.0), 1), Ok(false));
        assert_eq!(includes(&xs, &greater_than(2.5), 0), Ok(true));
        assert_eq!(includes(&xs, &greater_than(3.0), 0), Ok(false));
    }

    #[test]
    fn keys_in_enumeration_order() {
        let mut map = IndexMap::new();
        map.insert("b".to_owned(), num(1.0));
        map.insert("a".to_owned(), num(2.0));
        assert_eq!(keys(Some(&Value::Object(map))), vec!["b", "a"]);
        assert_eq!(keys(Some(&arr(&[5.0, 6.0]))), vec!["0", "1"]);
        assert!(keys(Some(&Value::Undefined)).is_empty());
        assert!(keys(Some(&Value::Null)).is_empty());
        assert!(keys(Some(&arr(&[]))).is_empty());
        assert!(keys::<Value>(None).is_empty());
    }

    #[test]
    fn typed_primitives_accept_values() {
        let xs = arr(&[1.0, 2.0, 3.0]);
        assert_eq!(ArrayLike::<Value>::len(&xs), 3);
        assert_eq!(iter::find_index(&xs, |v: &Value, _, _| *v == num(2.0)), Some(1));
        assert_eq!(iter::from::<Value, _>(&xs), vec![num(1.0), num(2.0), num(3.0)]);
        assert!(iter::includes(&xs, &num(3.0), 2));
        // non-arrays are empty rather than an error on the typed path
        assert_eq!(ArrayLike::<Value>::len(&num(7.0)), 0);
        assert_eq!(ArrayLike::<Value>::get(&num(7.0), 0), None);
        assert!(iter::from::<Value, _>(&Value::Null).is_empty());
    }

    #[test]
    fn flat_on_values() {
        let nested = Value::Array(vec![num(1.0), Value::Array(vec![num(2.0), arr(&[3.0])])]);
        assert_eq!(
            nested.flat(1),
            Value::Array(vec![num(1.0), num(2.0), arr(&[3.0])])
        );
        assert_eq!(nested.flat(5), arr(&[1.0, 2.0, 3.0]));
        assert_eq!(num(4.0).flat(1), num(4.0));
    }

    #[test]
    fn truthiness() {
        assert!(!Value::Undefined.is_truthy());
        assert!(!num(0.0).is_truthy());
        assert!(!num(f64::NAN).is_truthy());
        assert!(!Value::from("").is_truthy());
        assert!(arr(&[]).is_truthy());
        assert!(Value::from(true).is_truthy());
    }

    #[test]
    fn functions_compare_by_identity() {
        let f = greater_than(0.0);
        assert_eq!(f, f.deep_clone());
        assert_ne!(f, greater_than(0.0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_like_json() {
        let mut map = IndexMap::new();
        map.insert("xs".to_owned(), arr(&[1.0, 2.5]));
        map.insert("f".to_owned(), greater_than(0.0));
        let json = serde_json::to_string(&Value::Object(map)).unwrap();
        assert_eq!(json, r#"{"xs":[1.0,2.5],"f":null}"#);
    }
}
