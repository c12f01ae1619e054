use criterion::{black_box, criterion_group, criterion_main, Criterion};
use immupath_core::{get_at, path, push_at, set_at, update_at, Value};
use immupath_utils::bench::{deep_chain, todo_list, wide_object};

pub fn wide(c: &mut Criterion) {
    let mut group = c.benchmark_group("wide object");

    for width in [10, 1000] {
        let src = wide_object(width);
        let last = format!("f{}", width - 1);

        group.bench_function(format!("set_at, {width} fields"), |b| {
            b.iter(|| black_box(set_at(&src, path![last.as_str(), "done"], Value::Bool(true))))
        });

        group.bench_function(format!("set_at no-op, {width} fields"), |b| {
            b.iter(|| black_box(set_at(&src, path![last.as_str(), "done"], Value::Bool(false))))
        });
    }
}

pub fn deep(c: &mut Criterion) {
    let mut group = c.benchmark_group("deep chain");

    for depth in [8, 64] {
        let (src, path) = deep_chain(depth);

        group.bench_function(format!("get_at, depth {depth}"), |b| {
            b.iter(|| black_box(get_at(&src, &path)))
        });

        group.bench_function(format!("set_at, depth {depth}"), |b| {
            b.iter(|| black_box(set_at(&src, &path, Value::from(1))))
        });

        group.bench_function(format!("update_at, depth {depth}"), |b| {
            b.iter(|| {
                black_box(update_at(&src, &path, |n| {
                    Value::from(n.as_f64().unwrap_or(0.0) + 1.0)
                }))
            })
        });
    }
}

pub fn arrays(c: &mut Criterion) {
    let src = Value::object([("todos", todo_list(1000))]);
    let mut group = c.benchmark_group("arrays");

    group.bench_function("push_at 1 into 1000", |b| {
        b.iter(|| black_box(push_at(&src, path!["todos"], [Value::Null])))
    });

    group.bench_function("push_at nothing into 1000", |b| {
        b.iter(|| black_box(push_at(&src, path!["todos"], [])))
    });
}

criterion_group!(benches, wide, deep, arrays);
criterion_main!(benches);
