//! Generic update entry points.
use std::{collections::HashSet, sync::Arc};

use crate::{
    error::{Error, Result},
    path::{Key, Path},
    read::get_at,
    replace::{replace_at, Target},
    value::{Map, Value},
};

/// Reconciles `target` with `src`.
///
/// The result is deep-equal to `target`, but reuses as much of `src` as possible:
///
/// - if `target` is deep-equal to `src`, the result is `src` itself;
/// - if both are arrays, each element of `target` which is deep-equal to the element of `src` at
///   the same index is replaced by the latter. Other elements are kept as they are: elements are
///   never merged, since the one at a given index may have moved there from elsewhere;
/// - if both are objects, each field of `target` is reconciled with the same field of `src`, so
///   unchanged subtrees keep their identity;
/// - otherwise, the result is `target`.
///
/// Children of `target` which already are children of `src`, for example elements moved by a
/// [shift](crate::array::shift) or fields swapped by an updater, are left untouched.
///
/// This is what makes updates which don't change anything return their source untouched, even
/// when the new value has been freshly built.
pub fn set(src: &Value, target: Value) -> Value {
    if src.same(&target) {
        return src.clone();
    }

    match (src, target) {
        (Value::Array(old), Value::Array(new)) => {
            let originals = Originals::of(old.iter());
            let items: Vec<Value> = new
                .iter()
                .enumerate()
                .map(|(idx, item)| match old.get(idx) {
                    Some(prev) if !originals.contains(item) && prev == item => prev.clone(),
                    _ => item.clone(),
                })
                .collect();

            if items.len() == old.len() && all_same(&items, old.iter()) {
                Value::Array(Arc::clone(old))
            } else if all_same(&items, new.iter()) {
                Value::Array(new)
            } else {
                Value::Array(Arc::new(items))
            }
        }
        (Value::Object(old), Value::Object(new)) => {
            let originals = Originals::of(old.values());
            let fields: Map = new
                .iter()
                .map(|(key, value)| {
                    let value = match old.get(key) {
                        Some(prev) if !originals.contains(value) => set(prev, value.clone()),
                        _ => value.clone(),
                    };
                    (key.clone(), value)
                })
                .collect();

            let unchanged = fields.len() == old.len()
                && fields
                    .iter()
                    .all(|(key, value)| old.get(key).is_some_and(|prev| prev.same(value)));

            if unchanged {
                Value::Object(Arc::clone(old))
            } else if all_same(fields.values(), new.values()) {
                Value::Object(new)
            } else {
                Value::Object(Arc::new(fields))
            }
        }
        (_, target) => target,
    }
}

fn all_same<'a>(
    values: impl IntoIterator<Item = &'a Value>,
    others: impl IntoIterator<Item = &'a Value>,
) -> bool {
    values
        .into_iter()
        .zip(others)
        .all(|(value, other)| value.same(other))
}

/// The addresses of the containers held by an array or an object.
struct Originals(HashSet<*const ()>);

impl Originals {
    fn of<'a>(children: impl IntoIterator<Item = &'a Value>) -> Self {
        Originals(children.into_iter().filter_map(address).collect())
    }

    fn contains(&self, value: &Value) -> bool {
        address(value).is_some_and(|addr| self.0.contains(&addr))
    }
}

fn address(value: &Value) -> Option<*const ()> {
    match value {
        Value::Array(items) => Some(Arc::as_ptr(items).cast()),
        Value::Object(fields) => Some(Arc::as_ptr(fields).cast()),
        _ => None,
    }
}

/// Stores `target` at `path`.
///
/// See [replace_at] for the sharing guarantees and failure modes.
pub fn set_at(src: &Value, path: impl AsRef<[Key]>, target: Value) -> Result<Value> {
    replace_at(src, path, Target::Literal(target))
}

/// Replaces the value at `path` by the result of `updater` applied to it. The updater receives
/// `undefined` if there's nothing at `path`.
pub fn update_at<'a>(
    src: &Value,
    path: impl AsRef<[Key]>,
    updater: impl FnOnce(&Value) -> Value + 'a,
) -> Result<Value> {
    replace_at(src, path, Target::updater(updater))
}

/// Stores `undefined` at `path`.
///
/// The field (or element) isn't removed from its container, it's set to `undefined`.
pub fn delete_at(src: &Value, path: impl AsRef<[Key]>) -> Result<Value> {
    set_at(src, path, Value::Undefined)
}

/// Merges the fields of `ext` into the object `src`, overriding existing fields.
///
/// An absent (`undefined` or `null`) source is treated as the empty object. If no field actually
/// changes, `src` is returned.
pub fn extend(src: &Value, ext: &Map) -> Result<Value> {
    merged(src, ext, &[]).map(|merged| set(src, merged))
}

/// Merges the fields of `ext` into the object at `path`. See [extend].
pub fn extend_at(src: &Value, path: impl AsRef<[Key]>, ext: &Map) -> Result<Value> {
    let keys = path.as_ref();
    let current = get_at(src, keys);
    set_at(src, keys, merged(&current, ext, keys)?)
}

fn merged(current: &Value, ext: &Map, keys: &[Key]) -> Result<Value> {
    let mut fields = match current {
        Value::Object(fields) => Map::clone(fields),
        Value::Undefined | Value::Null => Map::with_capacity(ext.len()),
        other => {
            return Err(Error::ExpectedObject {
                path: Path::from(keys),
                found: other.kind(),
            })
        }
    };

    fields.extend(ext.iter().map(|(k, v)| (k.clone(), v.clone())));
    Ok(Value::from(fields))
}
