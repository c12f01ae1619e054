//! Error types.
//!
//! Updates never create missing containers on the fly: a path that goes through an absent value or
//! a scalar is an error. Reading, on the other hand, never fails (see [crate::read]).
use thiserror::Error;

use crate::{
    path::{Key, Path},
    value::ValueKind,
};

pub type Result<T> = std::result::Result<T, Error>;

/// An error occurring when updating a value along a path.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The path goes through a value which is `undefined` or `null`.
    #[error("cannot access `{key}` at `{path}`: the value there is {found}")]
    MissingIntermediate {
        /// The path to the missing container.
        path: Path,
        /// The key that couldn't be accessed.
        key: Key,
        found: ValueKind,
    },
    /// The path goes through a scalar value.
    #[error("cannot access `{key}` at `{path}`: expected an array or an object, found {found}")]
    NotAContainer {
        path: Path,
        key: Key,
        found: ValueKind,
    },
    /// A field name which isn't an index was used on an array.
    #[error("`{key}` is not a valid index for the array at `{path}`")]
    InvalidIndex { path: Path, key: Key },
    /// An array index is too large to pad the array up to it.
    #[error("index `{key}` is too large for the array at `{path}`")]
    IndexTooLarge { path: Path, key: Key },
    /// An array operation was applied to something else than an array.
    #[error("expected an array at `{path}`, found {found}")]
    ExpectedArray { path: Path, found: ValueKind },
    /// An object operation was applied to something else than an object.
    #[error("expected an object at `{path}`, found {found}")]
    ExpectedObject { path: Path, found: ValueKind },
    /// A textual path is malformed.
    #[error("invalid path `{input}` at offset {offset}: {reason}")]
    PathParse {
        input: String,
        /// Byte offset of the error in `input`.
        offset: usize,
        reason: &'static str,
    },
}
