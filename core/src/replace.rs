//! Replacement of the value at a path, with structural sharing.
//!
//! [`replace_at`] is the routine every update of this crate goes through. It computes the new value
//! at the end of the path and, if that value is the same as the old one (see [Value::same]),
//! returns the source untouched. Otherwise, it rebuilds the containers on the path from the root to
//! the updated slot, bottom-up, and leaves every other subtree shared with the source.
use log::trace;

use crate::{
    edit::{Container, SlotError},
    error::{Error, Result},
    metrics::increment,
    path::{DisplayKeys, Key, Path},
    read::lookup,
    update::set,
    value::Value,
};

/// What to put at the end of a path.
pub enum Target<'a> {
    /// A value to store.
    Literal(Value),
    /// A function computing the value to store from the current one, which is `undefined` if the
    /// path doesn't lead anywhere.
    Updater(Box<dyn FnOnce(&Value) -> Value + 'a>),
}

impl<'a> Target<'a> {
    pub fn updater(f: impl FnOnce(&Value) -> Value + 'a) -> Self {
        Target::Updater(Box::new(f))
    }

    /// Computes the new value from the current one.
    ///
    /// The result is reconciled with `current` (see [crate::update::set]), so that a new value
    /// which is deep-equal to the current one, or to parts of it, reuses the existing containers.
    pub fn resolve(self, current: &Value) -> Value {
        let target = match self {
            Target::Literal(value) => value,
            Target::Updater(f) => f(current),
        };

        set(current, target)
    }
}

impl From<Value> for Target<'_> {
    fn from(value: Value) -> Self {
        Target::Literal(value)
    }
}

impl std::fmt::Debug for Target<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Target::Updater(_) => f.write_str("Updater(..)"),
        }
    }
}

/// Replaces the value at `path` in `src` by `target`.
///
/// If the new value is the same as the old one, `src` itself is returned (well, a clone of it,
/// which is the same value). Otherwise, every container between the root and the replaced slot is
/// copied, and every other subtree of the result is shared with `src`. `src` is never modified.
///
/// Intermediate containers are never created: if the path goes through `undefined`, `null` or a
/// scalar, this is an error, unless the replacement doesn't change anything (for example, deleting
/// a field of an object which doesn't exist).
pub fn replace_at<'a>(
    src: &Value,
    path: impl AsRef<[Key]>,
    target: impl Into<Target<'a>>,
) -> Result<Value> {
    let keys = path.as_ref();

    let Some((last, parent_keys)) = keys.split_last() else {
        let new_root = target.into().resolve(src);

        return Ok(if new_root.same(src) {
            unchanged(src, keys)
        } else {
            trace!("replace_at(.): replaced the root");
            increment!("immupath::replace::rebuilt");
            new_root
        });
    };

    let old_leaf = lookup(src, parent_keys)
        .and_then(Container::of)
        .and_then(|parent| parent.get(last))
        .cloned()
        .unwrap_or_default();
    let new_leaf = target.into().resolve(&old_leaf);

    if new_leaf.same(&old_leaf) {
        return Ok(unchanged(src, keys));
    }

    let ancestors = ancestors(src, keys)?;
    let result = ancestors.iter().zip(keys).enumerate().rev().try_fold(
        new_leaf,
        |child, (depth, (parent, key))| {
            let path = || Path::from(&keys[..depth]);
            let key = key.clone();

            match Container::of(parent).map(|container| container.set_slot(&key, child)) {
                Some(Ok(rebuilt)) => Ok(rebuilt),
                Some(Err(SlotError::TooLarge)) => Err(Error::IndexTooLarge { path: path(), key }),
                Some(Err(SlotError::NotAnIndex)) | None => {
                    Err(Error::InvalidIndex { path: path(), key })
                }
            }
        },
    )?;

    trace!(
        "replace_at({}): rebuilt {} container(s)",
        DisplayKeys(keys),
        ancestors.len()
    );
    increment!("immupath::replace::rebuilt");
    increment!("immupath::replace::allocated_containers", ancestors.len());

    Ok(result)
}

fn unchanged(src: &Value, keys: &[Key]) -> Value {
    trace!("replace_at({}): unchanged", DisplayKeys(keys));
    increment!("immupath::replace::unchanged");
    src.clone()
}

/// Collects the containers from the root down to the parent of the last key of the path, so that
/// `ancestors[i]` is the container indexed by `keys[i]`.
fn ancestors(src: &Value, keys: &[Key]) -> Result<Vec<Value>> {
    let mut chain = Vec::with_capacity(keys.len());
    let mut current = src.clone();

    for (depth, key) in keys.iter().enumerate() {
        let next = {
            let container = Container::of(&current).ok_or_else(|| {
                let path = Path::from(&keys[..depth]);
                let key = key.clone();
                let found = current.kind();

                if current.is_nullish() {
                    Error::MissingIntermediate { path, key, found }
                } else {
                    Error::NotAContainer { path, key, found }
                }
            })?;

            if !container.accepts(key) {
                return Err(Error::InvalidIndex {
                    path: Path::from(&keys[..depth]),
                    key: key.clone(),
                });
            }

            container.get(key).cloned().unwrap_or_default()
        };

        chain.push(std::mem::replace(&mut current, next));
    }

    Ok(chain)
}
