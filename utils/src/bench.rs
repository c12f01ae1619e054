//! Inputs for the benchmarks.
use immupath_core::{Path, Value};

/// An object with `width` fields `f0`, `f1`, ..., each holding a small object.
pub fn wide_object(width: usize) -> Value {
    Value::object((0..width).map(|i| {
        (
            format!("f{i}"),
            Value::object([("id", Value::from(i)), ("done", Value::Bool(false))]),
        )
    }))
}

/// A chain of `depth` nested objects, linked through their `next` field, together with the path
/// to the innermost `value` field.
pub fn deep_chain(depth: usize) -> (Value, Path) {
    let value = (0..depth).fold(Value::object([("value", Value::from(0))]), |inner, i| {
        Value::object([("next", inner), ("depth", Value::from(depth - i))])
    });
    let path = std::iter::repeat("next")
        .take(depth)
        .chain(["value"])
        .map(Into::into)
        .collect();

    (value, path)
}

/// An array of `len` todo items.
pub fn todo_list(len: usize) -> Value {
    Value::array((0..len).map(|i| {
        Value::object([
            ("id", Value::from(i)),
            ("title", Value::from(format!("todo {i}"))),
            ("done", Value::Bool(i % 2 == 0)),
        ])
    }))
}
