use assert_matches::assert_matches;
use immupath_core::{
    delete_at, get_at, path, pop, pop_at, push, set_at, splice_at, update_at, Error, Path, Value,
    ValueKind,
};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{field, value};

#[test]
fn set_nested_field() {
    let src = value(json!({"a": {"b": 1}, "c": {"d": true}}));
    let result = set_at(&src, path!["a", "b"], Value::from(2)).unwrap();

    assert_eq!(result, value(json!({"a": {"b": 2}, "c": {"d": true}})));
    assert!(!field(&result, "a").same(field(&src, "a")));
    assert!(field(&result, "c").same(field(&src, "c")));
}

#[test]
fn set_to_current_value_is_a_noop() {
    let src = value(json!({"a": {"b": 1}}));
    let result = set_at(&src, path!["a", "b"], Value::from(1)).unwrap();
    assert!(result.same(&src));
}

#[test]
fn delete_leaves_undefined() {
    let src = value(json!({"a": 1, "b": 2}));
    let result = delete_at(&src, path!["a"]).unwrap();

    assert_eq!(
        result,
        Value::object([("a", Value::Undefined), ("b", Value::from(2))])
    );
    // Undefined fields disappear when serialized.
    assert_eq!(serde_json::to_value(&result).unwrap(), json!({"b": 2}));
}

#[test]
fn push_leaves_the_source_untouched() {
    let src = value(json!([1, 2, 3]));
    let result = push(&src, [Value::from(4), Value::from(5)]).unwrap();

    assert_eq!(result, value(json!([1, 2, 3, 4, 5])));
    assert_eq!(src, value(json!([1, 2, 3])));
}

#[test]
fn pop_nothing_is_a_noop() {
    let src = value(json!([1, 2, 3]));
    assert!(pop(&src, 0).unwrap().same(&src));

    let nested = value(json!({"list": [1, 2, 3]}));
    assert!(pop_at(&nested, path!["list"], 0).unwrap().same(&nested));
}

#[test]
fn splice_nested_list() {
    let src = value(json!({"list": [1, 2, 3]}));
    let result = splice_at(&src, path!["list"], 1, 1, [Value::from(9)]).unwrap();
    assert_eq!(result, value(json!({"list": [1, 9, 3]})));
}

#[test]
fn paths_can_be_parsed() {
    let src = value(json!({"users": [{"first name": "ann"}]}));
    let path: Path = r#"users[0]."first name""#.parse().unwrap();

    assert_eq!(get_at(&src, &path), Value::from("ann"));

    let result = update_at(&src, &path, |name| {
        Value::from(name.as_str().unwrap_or_default().to_uppercase())
    })
    .unwrap();
    assert_eq!(result, value(json!({"users": [{"first name": "ANN"}]})));
}

#[test]
fn no_intermediate_is_ever_created() {
    let src = value(json!({"a": null}));

    assert_matches!(
        set_at(&src, path!["a", "b"], Value::from(1)),
        Err(Error::MissingIntermediate { found: ValueKind::Null, .. })
    );
    assert_matches!(
        set_at(&src, path!["x", "y", "z"], Value::from(1)),
        Err(Error::MissingIntermediate { found: ValueKind::Undefined, path, .. })
            if path == path!["x"]
    );
}

#[test]
fn errors_are_readable() {
    let src = value(json!({"a": {"b": 1}}));
    let err = set_at(&src, path!["a", "b", "c"], Value::from(1)).unwrap_err();

    assert_eq!(
        err.to_string(),
        "cannot access `c` at `a.b`: expected an array or an object, found a number"
    );
}
