//! Immutable updates of nested values along paths.
//!
//! Values are trees of arrays and objects whose containers are reference-counted. Every update
//! function takes a source value and returns a new one, leaving the source untouched: the
//! containers on the updated path are copied, and everything else is shared. An update which
//! doesn't change anything returns the source itself, which [Value::same] detects in constant
//! time. This is what [selectors](selector) rely on to avoid recomputing derived data.
//!
//! ```
//! use immupath_core::{path, set_at, Value};
//! use serde_json::json;
//!
//! let state = Value::from(json!({"user": {"name": "ann"}, "todos": [1, 2]}));
//! let renamed = set_at(&state, path!["user", "name"], Value::from("bob")).unwrap();
//!
//! assert_eq!(renamed, Value::from(json!({"user": {"name": "bob"}, "todos": [1, 2]})));
//! assert!(set_at(&state, path!["todos", 0], Value::from(1)).unwrap().same(&state));
//! ```
mod metrics;

pub mod array;
pub mod edit;
pub mod error;
pub mod path;
pub mod read;
pub mod replace;
pub mod selector;
pub mod update;
pub mod value;

pub use array::{
    insert, insert_at, pop, pop_at, push, push_at, shift, shift_at, splice, splice_at, unshift,
    unshift_at,
};
pub use error::{Error, Result};
pub use path::{Key, Path};
pub use read::get_at;
pub use replace::{replace_at, Target};
pub use selector::{create_selector, create_structured_selector, BoxedSelect, Select};
pub use update::{delete_at, extend, extend_at, set, set_at, update_at};
pub use value::{Map, Value, ValueKind};
