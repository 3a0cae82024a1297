// Rust-seqkit: Generic sequence algorithms.
// Copyright (c) 2026, the seqkit developers.
// See README.md and LICENSE.txt for details.

use thiserror::Error;

use crate::kind::Kind;

/// Contract violations raised by the dynamically typed entry points in
/// [`value`](crate::value). Not-found conditions are never errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("expected an array-like input, got {kind}")]
    NotArrayLike { kind: Kind },
    #[error("expected a callable predicate, got {kind}")]
    NotCallable { kind: Kind },
}

pub type Result<T> = std::result::Result<T, Error>;
