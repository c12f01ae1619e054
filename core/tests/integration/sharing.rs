use immupath_core::{
    extend_at, insert_at, path, set_at, shift_at, splice_at, unshift_at, update_at, Map, Value,
};
use immupath_utils::{bench::todo_list, sharing::assert_shared_off_path};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{field, value};

#[test]
fn sibling_subtrees_are_shared() {
    let src = value(json!({
        "todos": [{"id": 0, "done": false}, {"id": 1, "done": false}],
        "filter": {"status": "all"},
    }));
    let path = path!["todos", 1, "done"];
    let result = set_at(&src, &path, Value::Bool(true)).unwrap();

    assert_shared_off_path(&src, &result, path.keys());
    assert!(field(&result, "filter").same(field(&src, "filter")));
}

#[test]
fn array_edits_share_elements() {
    let src = Value::object([("todos", todo_list(4))]);

    for result in [
        shift_at(&src, path!["todos"], 1).unwrap(),
        unshift_at(&src, path!["todos"], [Value::Null]).unwrap(),
        insert_at(&src, path!["todos"], 2, [Value::Null]).unwrap(),
    ] {
        let (old, new) = (field(&src, "todos"), field(&result, "todos"));
        let old = old.as_array().unwrap();
        let new = new.as_array().unwrap();

        for item in old.iter() {
            assert!(new.iter().any(|other| other.same(item)));
        }
    }
}

#[test]
fn moved_elements_keep_their_identity() {
    let src = value(json!({"todos": [
        {"tags": [1], "title": "a"},
        {"tags": [1], "title": "b"},
        {"tags": [2], "title": "c"},
    ]}));
    let old = field(&src, "todos").as_array().unwrap();

    let todos = |result: &Value| field(result, "todos").as_array().unwrap().to_vec();

    let unshifted = todos(&unshift_at(&src, path!["todos"], [Value::Null]).unwrap());
    assert!(unshifted[1..].iter().zip(old.iter()).all(|(new, old)| new.same(old)));

    let shifted = todos(&shift_at(&src, path!["todos"], 1).unwrap());
    assert!(shifted.iter().zip(&old[1..]).all(|(new, old)| new.same(old)));

    let spliced = splice_at(&src, path!["todos"], 0, 1, [Value::Null, Value::Null]).unwrap();
    let spliced = todos(&spliced);
    assert!(spliced[2].same(&old[1]) && spliced[3].same(&old[2]));

    let reversed = update_at(&src, path!["todos"], |items| {
        Value::array(items.as_array().unwrap().iter().rev().cloned())
    })
    .unwrap();
    let reversed = todos(&reversed);
    assert!(reversed[0].same(&old[2]));
    assert!(reversed[1].same(&old[1]));
    assert!(reversed[2].same(&old[0]));
}

#[test]
fn extend_shares_untouched_fields() {
    let src = value(json!({"config": {"server": {"port": 80}, "debug": false}}));
    let mut ext = Map::new();
    ext.insert("debug".to_owned(), Value::Bool(true));

    let result = extend_at(&src, path!["config"], &ext).unwrap();

    assert_eq!(
        result,
        value(json!({"config": {"server": {"port": 80}, "debug": true}}))
    );
    assert!(field(field(&result, "config"), "server")
        .same(field(field(&src, "config"), "server")));
}

#[test]
fn rebuilt_values_are_equal_but_not_the_same() {
    let src = value(json!({"a": {"b": [1, 2]}}));
    let result = set_at(&src, path!["a", "b", 0], Value::from(0)).unwrap();
    let back = set_at(&result, path!["a", "b", 0], Value::from(1)).unwrap();

    assert_eq!(back, src);
    assert!(!back.same(&src));
}
