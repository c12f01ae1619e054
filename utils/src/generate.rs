//! Random values and paths for property tests.
use arbitrary::{Result, Unstructured};
use immupath_core::{Key, Map, Path, Value};

/// A small pool of names, so that generated objects share fields and paths hit existing slots.
const FIELD_NAMES: &[&str] = &["a", "b", "c", "id", "items", "x y", "0"];

pub fn arb_field(u: &mut Unstructured<'_>) -> Result<String> {
    Ok((*u.choose(FIELD_NAMES)?).to_owned())
}

/// Generate a JSON-like scalar. `undefined` is never generated.
pub fn arb_scalar(u: &mut Unstructured<'_>) -> Result<Value> {
    Ok(match u.int_in_range(0..=3)? {
        0 => Value::Null,
        1 => Value::Bool(u.arbitrary()?),
        2 => Value::from(u.int_in_range(-100i64..=100)?),
        _ => Value::from(arb_field(u)?),
    })
}

/// Generate a value nested at most `depth` levels deep.
pub fn arb_value(u: &mut Unstructured<'_>, depth: usize) -> Result<Value> {
    if depth == 0 || u.ratio(1u8, 3u8)? {
        return arb_scalar(u);
    }

    let len = u.int_in_range(0..=4)?;

    if u.arbitrary()? {
        let items = (0..len)
            .map(|_| arb_value(u, depth - 1))
            .collect::<Result<Vec<_>>>()?;
        Ok(Value::from(items))
    } else {
        let mut fields = Map::new();
        for _ in 0..len {
            fields.insert(arb_field(u)?, arb_value(u, depth - 1)?);
        }
        Ok(Value::from(fields))
    }
}

/// Generate a path along which `value` can be updated without error.
///
/// Every key but the last one leads to an existing container. The last one either addresses an
/// existing slot, or a new one: a fresh field of an object, or the first index past the end of an
/// array.
pub fn arb_path_into(u: &mut Unstructured<'_>, value: &Value) -> Result<Path> {
    let mut path = Path::root();
    let mut current = value.clone();

    loop {
        let key = match &current {
            Value::Array(items) => Key::Index(u.int_in_range(0..=items.len())?),
            Value::Object(fields) => {
                let idx = u.int_in_range(0..=fields.len())?;
                match fields.get_index(idx) {
                    Some((name, _)) => Key::Field(name.clone()),
                    None => Key::Field(arb_field(u)?),
                }
            }
            _ => return Ok(path),
        };

        let next = immupath_core::get_at(&current, [key.clone()]);
        path.push(key);

        if next.is_undefined() || u.ratio(1u8, 3u8)? {
            return Ok(path);
        }

        current = next;
    }
}
