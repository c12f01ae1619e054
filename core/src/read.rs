//! Reading values along a path.
use crate::{edit::Container, path::Key, value::Value};

/// Returns the value at `path` in `src`, or `undefined` if there is none.
///
/// Reading never fails: as soon as the walk hits a missing slot or a scalar, the result is
/// `undefined`. The returned value shares its containers with `src`.
pub fn get_at(src: &Value, path: impl AsRef<[Key]>) -> Value {
    lookup(src, path.as_ref()).cloned().unwrap_or_default()
}

pub(crate) fn lookup<'a>(src: &'a Value, keys: &[Key]) -> Option<&'a Value> {
    keys.iter()
        .try_fold(src, |current, key| Container::of(current)?.get(key))
}
