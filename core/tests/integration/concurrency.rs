use std::thread;

use immupath_core::{get_at, path, set_at, update_at, Value};
use immupath_utils::bench::wide_object;
use pretty_assertions::assert_eq;

#[test]
fn concurrent_updates_of_a_shared_source() {
    let src = wide_object(64);
    let snapshot = src.clone();

    let results: Vec<Value> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let src = &src;
                scope.spawn(move || {
                    update_at(src, path![format!("f{i}"), "done"], |_| Value::Bool(true)).unwrap()
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    assert_eq!(src, snapshot);
    assert!(src.same(&snapshot));

    for (i, result) in results.iter().enumerate() {
        assert_eq!(
            get_at(result, path![format!("f{i}"), "done"]),
            Value::Bool(true)
        );
        let other = format!("f{}", (i + 1) % 8);
        assert!(get_at(result, path![other.clone()]).same(&get_at(&src, path![other])));
    }
}

#[test]
fn values_move_across_threads() {
    let src = wide_object(4);
    let handle = thread::spawn(move || set_at(&src, path!["f0", "id"], Value::from(42)).unwrap());

    let result = handle.join().unwrap();
    assert_eq!(get_at(&result, path!["f0", "id"]), Value::from(42));
}
