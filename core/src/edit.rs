//! Single-slot editors for arrays and objects.
//!
//! A [`Container`] is a borrowed view of an array or an object. Editing one slot of a container
//! produces a fresh container: a shallow copy of the original, where every other slot still points
//! to the same children.
use std::sync::Arc;

use crate::{
    path::Key,
    value::{Map, Value},
};

/// The largest index an array slot can be set at. Setting it pads the array to `u32::MAX`
/// elements, the maximal length of an array.
pub const MAX_INDEX: usize = u32::MAX as usize - 1;

/// Why a slot couldn't be set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotError {
    /// The key isn't an index, and the container is an array.
    NotAnIndex,
    /// The index is past [MAX_INDEX], or the padded array couldn't be allocated.
    TooLarge,
}

/// A borrowed array or object.
#[derive(Clone, Copy, Debug)]
pub enum Container<'a> {
    Sequence(&'a Arc<Vec<Value>>),
    Mapping(&'a Arc<Map>),
}

impl<'a> Container<'a> {
    /// Returns `None` if `value` is a scalar.
    pub fn of(value: &'a Value) -> Option<Self> {
        match value {
            Value::Array(items) => Some(Container::Sequence(items)),
            Value::Object(fields) => Some(Container::Mapping(fields)),
            _ => None,
        }
    }

    /// Can `key` address a slot of this container?
    ///
    /// Every key can address an object field, but only indices (or fields that spell out an
    /// index) can address an array element.
    pub fn accepts(&self, key: &Key) -> bool {
        match self {
            Container::Sequence(_) => key.as_index().is_some(),
            Container::Mapping(_) => true,
        }
    }

    /// The child at `key`, or `None` if there's no such slot.
    pub fn get(&self, key: &Key) -> Option<&'a Value> {
        match self {
            Container::Sequence(items) => key.as_index().and_then(|idx| items.get(idx)),
            Container::Mapping(fields) => fields.get(key.as_field().as_ref()),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Container::Sequence(items) => items.len(),
            Container::Mapping(fields) => fields.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a copy of this container where the slot at `key` holds `value`.
    ///
    /// Setting an array index past the end pads the new array with `undefined`. Setting an object
    /// field that doesn't exist appends it.
    pub fn set_slot(&self, key: &Key, value: Value) -> Result<Value, SlotError> {
        match self {
            Container::Sequence(items) => {
                let idx = key.as_index().ok_or(SlotError::NotAnIndex)?;
                if idx > MAX_INDEX {
                    return Err(SlotError::TooLarge);
                }

                let mut items = Vec::clone(items);
                if idx >= items.len() {
                    items
                        .try_reserve_exact(idx + 1 - items.len())
                        .map_err(|_| SlotError::TooLarge)?;
                    items.resize(idx + 1, Value::Undefined);
                }
                items[idx] = value;
                Ok(Value::Array(Arc::new(items)))
            }
            Container::Mapping(fields) => {
                let mut fields = Map::clone(fields);
                fields.insert(key.as_field().into_owned(), value);
                Ok(Value::Object(Arc::new(fields)))
            }
        }
    }
}
