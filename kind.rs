// Rust-seqkit: Generic sequence algorithms.
// Copyright (c) 2026, the seqkit developers.
// See README.md and LICENSE.txt for details.

//! Coarse runtime classification of values.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt;

use indexmap::IndexMap;

/// A coarse kind tag. Used to pick between code paths that differ only by
/// the broad shape of a value, e.g. treating two NaNs as equal in
/// [`includes`](crate::iter::includes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Function,
    Array,
    NaN,
    Undefined,
    Null,
    Object,
    Other,
}

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Function => "function",
            Kind::Array => "array",
            Kind::NaN => "nan",
            Kind::Undefined => "undefined",
            Kind::Null => "null",
            Kind::Object => "object",
            Kind::Other => "other",
        }
    }

    /// `undefined` and `null` are both "nothing" for fill resolution and `keys`.
    pub fn is_nullish(self) -> bool {
        matches!(self, Kind::Undefined | Kind::Null)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Types that can report their [`Kind`].
///
/// The default is [`Kind::Other`], so plain data types only need an empty impl.
pub trait Classify {
    fn kind(&self) -> Kind {
        Kind::Other
    }

    fn is_nan_like(&self) -> bool {
        self.kind() == Kind::NaN
    }
}

pub fn classify<T: Classify + ?Sized>(value: &T) -> Kind {
    value.kind()
}

macro_rules! classify_as_other {
    ($($t:ty),*) => {
        $(impl Classify for $t {})*
    };
}

classify_as_other!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, str, String
);

impl Classify for f32 {
    fn kind(&self) -> Kind {
        if self.is_nan() { Kind::NaN } else { Kind::Other }
    }
}

impl Classify for f64 {
    fn kind(&self) -> Kind {
        if self.is_nan() { Kind::NaN } else { Kind::Other }
    }
}

impl Classify for () {
    fn kind(&self) -> Kind {
        Kind::Null
    }
}

impl<T: Classify> Classify for Option<T> {
    fn kind(&self) -> Kind {
        match self {
            Some(v) => v.kind(),
            None => Kind::Undefined,
        }
    }
}

impl<T: Classify + ?Sized> Classify for &T {
    fn kind(&self) -> Kind {
        (**self).kind()
    }
}

impl<T: Classify + ?Sized> Classify for Box<T> {
    fn kind(&self) -> Kind {
        (**self).kind()
    }
}

impl<T> Classify for [T] {
    fn kind(&self) -> Kind {
        Kind::Array
    }
}

impl<T, const N: usize> Classify for [T; N] {
    fn kind(&self) -> Kind {
        Kind::Array
    }
}

impl<T> Classify for Vec<T> {
    fn kind(&self) -> Kind {
        Kind::Array
    }
}

impl<T> Classify for VecDeque<T> {
    fn kind(&self) -> Kind {
        Kind::Array
    }
}

impl<K, V, S> Classify for HashMap<K, V, S> {
    fn kind(&self) -> Kind {
        Kind::Object
    }
}

impl<K, V> Classify for BTreeMap<K, V> {
    fn kind(&self) -> Kind {
        Kind::Object
    }
}

impl<K, V, S> Classify for IndexMap<K, V, S> {
    fn kind(&self) -> Kind {
        Kind::Object
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floats_report_nan() {
        assert_eq!(classify(&f64::NAN), Kind::NaN);
        assert_eq!(classify(&1.5f32), Kind::Other);
        assert!(f32::NAN.is_nan_like());
        assert!(!0.0f64.is_nan_like());
    }

    #[test]
    fn containers_and_nothing() {
        assert_eq!(classify(&vec![1, 2]), Kind::Array);
        assert_eq!(classify(&[1u8; 3][..]), Kind::Array);
        assert_eq!(classify(&None::<i32>), Kind::Undefined);
        assert_eq!(classify(&Some(f64::NAN)), Kind::NaN);
        assert_eq!(classify(&()), Kind::Null);
        assert_eq!(classify(&IndexMap::<String, i32>::new()), Kind::Object);
        assert!(Kind::Null.is_nullish() && Kind::Undefined.is_nullish());
        assert!(!Kind::Array.is_nullish());
    }

    #[test]
    fn display_is_lowercase_tag() {
        assert_eq!(Kind::Function.to_string(), "function");
        assert_eq!(Kind::NaN.to_string(), "nan");
    }
}
