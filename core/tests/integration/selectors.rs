use std::sync::Arc;

use immupath_core::{
    create_selector, create_structured_selector, get_at, path, push_at, set_at, BoxedSelect,
    Select, Value,
};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::value;

fn select_path(path: immupath_core::Path) -> BoxedSelect<Value> {
    Box::new(move |state: &Value| get_at(state, &path))
}

fn count_done(args: &[Value]) -> Value {
    let done = args[0].as_array().map_or(0, |todos| {
        todos
            .iter()
            .filter(|todo| get_at(todo, path!["done"]).as_bool() == Some(true))
            .count()
    });
    Value::from(done)
}

#[test]
fn selector_follows_updates() {
    let done = create_selector(vec![select_path(path!["todos"])], count_done);
    let state = value(json!({"todos": [{"done": true}, {"done": false}], "page": 0}));

    assert_eq!(done.select(&state), Value::from(1));

    let state = set_at(&state, path!["page"], Value::from(1)).unwrap();
    assert_eq!(done.select(&state), Value::from(1));
    assert_eq!(done.recomputations(), 1);

    let state = push_at(&state, path!["todos"], [value(json!({"done": true}))]).unwrap();
    assert_eq!(done.select(&state), Value::from(2));
    assert_eq!(done.recomputations(), 2);

    // Setting a field to its current value doesn't invalidate anything.
    let state = set_at(&state, path!["todos", 1, "done"], Value::Bool(false)).unwrap();
    assert_eq!(done.select(&state), Value::from(2));
    assert_eq!(done.recomputations(), 2);
}

#[test]
fn structured_selector_over_state() {
    let view = create_structured_selector([
        ("name", select_path(path!["user", "name"])),
        (
            "done",
            Box::new(create_selector(vec![select_path(path!["todos"])], count_done))
                as BoxedSelect<Value>,
        ),
    ]);
    let state = value(json!({"user": {"name": "ann"}, "todos": []}));

    let first = view.select(&state);
    assert_eq!(first, value(json!({"name": "ann", "done": 0})));

    let state = set_at(&state, path!["user", "age"], Value::from(30)).unwrap();
    assert!(view.select(&state).same(&first));
}

#[test]
fn selectors_are_shared_between_threads() {
    let done = Arc::new(create_selector(
        vec![select_path(path!["todos"])],
        count_done,
    ));
    let state = value(json!({"todos": [{"done": true}]}));

    std::thread::scope(|scope| {
        for _ in 0..4 {
            let (done, state) = (Arc::clone(&done), &state);
            scope.spawn(move || assert_eq!(done.select(state), Value::from(1)));
        }
    });

    assert!(done.recomputations() >= 1);
    assert_eq!(done.select(&state), Value::from(1));
}
