use immupath_core::{path, Value};
use serde_json::json;

mod concurrency;
mod scenarios;
mod selectors;
mod sharing;

/// Build a value from a JSON literal.
fn value(json: serde_json::Value) -> Value {
    Value::from(json)
}

/// Access the field `name` of an object, panicking if there is none.
fn field<'v>(value: &'v Value, name: &str) -> &'v Value {
    value
        .as_object()
        .and_then(|fields| fields.get(name))
        .unwrap_or_else(|| panic!("expected a field `{name}` in {value}"))
}

#[test]
fn readme_example() {
    let state = value(json!({"user": {"name": "ann"}, "todos": [{"done": false}]}));

    let done = immupath_core::set_at(&state, path!["todos", 0, "done"], Value::Bool(true)).unwrap();
    assert_eq!(
        done,
        value(json!({"user": {"name": "ann"}, "todos": [{"done": true}]}))
    );
    assert!(field(&done, "user").same(field(&state, "user")));
}
