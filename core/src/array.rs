//! Array entry points.
//!
//! Each operation comes in two flavours: one working on an array value directly (`push`, `pop`,
//! ...) and one working on the array found at a path inside a larger value (`push_at`, `pop_at`,
//! ...). In both cases, the new array is reconciled with the old one (see [crate::update::set]), so
//! that an operation which doesn't change anything (popping zero elements, splicing nothing)
//! returns its source untouched.
//!
//! Positions past the end of the array are clamped to its length, and counts larger than the
//! number of available elements are clamped as well: `pop(&array, 10)` on a three-element array
//! gives the empty array.
use crate::{
    error::{Error, Result},
    path::{Key, Path},
    read::get_at,
    update::{set, set_at},
    value::Value,
};

fn items_of<'v>(value: &'v Value, keys: &[Key]) -> Result<&'v [Value]> {
    value
        .as_array()
        .map(|items| items.as_slice())
        .ok_or_else(|| Error::ExpectedArray {
            path: Path::from(keys),
            found: value.kind(),
        })
}

/// Applies a raw array operation to `src` and reconciles the result with it.
fn edit(src: &Value, op: impl FnOnce(&[Value]) -> Vec<Value>) -> Result<Value> {
    let items = items_of(src, &[])?;
    Ok(set(src, Value::from(op(items))))
}

/// Applies a raw array operation to the array at `path`, and stores the result back.
fn edit_at(
    src: &Value,
    path: impl AsRef<[Key]>,
    op: impl FnOnce(&[Value]) -> Vec<Value>,
) -> Result<Value> {
    let keys = path.as_ref();
    let current = get_at(src, keys);
    let items = items_of(&current, keys)?;
    set_at(src, keys, Value::from(op(items)))
}

fn pushed(items: &[Value], values: impl IntoIterator<Item = Value>) -> Vec<Value> {
    items.iter().cloned().chain(values).collect()
}

fn popped(items: &[Value], n: usize) -> Vec<Value> {
    items[..items.len().saturating_sub(n)].to_vec()
}

fn spliced(
    items: &[Value],
    start: usize,
    delete_count: usize,
    values: impl IntoIterator<Item = Value>,
) -> Vec<Value> {
    let start = start.min(items.len());
    let end = start + delete_count.min(items.len() - start);

    items[..start]
        .iter()
        .cloned()
        .chain(values)
        .chain(items[end..].iter().cloned())
        .collect()
}

fn shifted(items: &[Value], n: usize) -> Vec<Value> {
    items[n.min(items.len())..].to_vec()
}

fn unshifted(items: &[Value], values: impl IntoIterator<Item = Value>) -> Vec<Value> {
    values.into_iter().chain(items.iter().cloned()).collect()
}

/// Appends `values` at the end of the array `src`.
pub fn push(src: &Value, values: impl IntoIterator<Item = Value>) -> Result<Value> {
    edit(src, |items| pushed(items, values))
}

/// Appends `values` at the end of the array at `path`.
pub fn push_at(
    src: &Value,
    path: impl AsRef<[Key]>,
    values: impl IntoIterator<Item = Value>,
) -> Result<Value> {
    edit_at(src, path, |items| pushed(items, values))
}

/// Removes the last `n` elements of the array `src`.
pub fn pop(src: &Value, n: usize) -> Result<Value> {
    edit(src, |items| popped(items, n))
}

/// Removes the last `n` elements of the array at `path`.
pub fn pop_at(src: &Value, path: impl AsRef<[Key]>, n: usize) -> Result<Value> {
    edit_at(src, path, |items| popped(items, n))
}

/// Inserts `values` before the element at index `at` of the array `src`.
pub fn insert(src: &Value, at: usize, values: impl IntoIterator<Item = Value>) -> Result<Value> {
    edit(src, |items| spliced(items, at, 0, values))
}

/// Inserts `values` before the element at index `at` of the array at `path`.
pub fn insert_at(
    src: &Value,
    path: impl AsRef<[Key]>,
    at: usize,
    values: impl IntoIterator<Item = Value>,
) -> Result<Value> {
    edit_at(src, path, |items| spliced(items, at, 0, values))
}

/// Removes `delete_count` elements of the array `src` starting at index `start`, and inserts
/// `values` in their place.
pub fn splice(
    src: &Value,
    start: usize,
    delete_count: usize,
    values: impl IntoIterator<Item = Value>,
) -> Result<Value> {
    edit(src, |items| spliced(items, start, delete_count, values))
}

/// Like [splice], on the array at `path`.
pub fn splice_at(
    src: &Value,
    path: impl AsRef<[Key]>,
    start: usize,
    delete_count: usize,
    values: impl IntoIterator<Item = Value>,
) -> Result<Value> {
    edit_at(src, path, |items| spliced(items, start, delete_count, values))
}

/// Removes the first `n` elements of the array `src`.
pub fn shift(src: &Value, n: usize) -> Result<Value> {
    edit(src, |items| shifted(items, n))
}

/// Removes the first `n` elements of the array at `path`.
pub fn shift_at(src: &Value, path: impl AsRef<[Key]>, n: usize) -> Result<Value> {
    edit_at(src, path, |items| shifted(items, n))
}

/// Prepends `values` to the array `src`.
pub fn unshift(src: &Value, values: impl IntoIterator<Item = Value>) -> Result<Value> {
    edit(src, |items| unshifted(items, values))
}

/// Prepends `values` to the array at `path`.
pub fn unshift_at(
    src: &Value,
    path: impl AsRef<[Key]>,
    values: impl IntoIterator<Item = Value>,
) -> Result<Value> {
    edit_at(src, path, |items| unshifted(items, values))
}
