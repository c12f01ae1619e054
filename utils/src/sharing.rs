//! Assertions about structural sharing.
use immupath_core::{Key, Value};

/// Assert that every subtree of `result` lying off `path` is the [same](Value::same) as the
/// subtree at the same position in `src`.
///
/// This is the guarantee of a successful update at `path`: only the containers on the path are
/// rebuilt. Slots which don't exist in `src` aren't checked.
pub fn assert_shared_off_path(src: &Value, result: &Value, path: &[Key]) {
    let Some((key, rest)) = path.split_first() else {
        return;
    };

    match (src, result) {
        (Value::Array(old), Value::Array(new)) => {
            for (idx, (prev, item)) in old.iter().zip(new.iter()).enumerate() {
                if key.as_index() != Some(idx) {
                    assert!(
                        item.same(prev),
                        "element {idx} should be shared ({prev} vs {item})"
                    );
                }
            }
        }
        (Value::Object(old), Value::Object(new)) => {
            let on_path = key.as_field();
            for (name, value) in new.iter() {
                if *name == *on_path {
                    continue;
                }
                if let Some(prev) = old.get(name) {
                    assert!(
                        value.same(prev),
                        "field `{name}` should be shared ({prev} vs {value})"
                    );
                }
            }
        }
        _ => return,
    }

    let child = |value: &Value| immupath_core::get_at(value, [key.clone()]);
    assert_shared_off_path(&child(src), &child(result), rest);
}

