//! Recursive shapes and lazy population under concurrency.

use serde_json::json;
use shapeguard::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

fn v(json: serde_json::Value) -> Value {
    Value::from(json)
}

fn counted_nest(count: &Arc<AtomicUsize>) -> SharedRule {
    let count = Arc::clone(count);
    recursive(move |this| {
        count.fetch_add(1, Ordering::SeqCst);
        object! { "nest" => this; optional ["nest"] }
    })
}

#[test]
fn nest_shape() {
    let count = Arc::new(AtomicUsize::new(0));
    let nest = counted_nest(&count);

    assert!(nest.accepts(&v(json!({"nest": {"nest": {}}}))));
    assert!(!nest.accepts(&v(json!({"nest": {"nest": "abc"}}))));
    assert!(!nest.accepts(&v(json!({"nest": {"other": {}}}))));
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn deep_nesting_runs_factory_once() {
    let count = Arc::new(AtomicUsize::new(0));
    let nest = counted_nest(&count);

    let mut data = Value::object_empty();
    for _ in 0..200 {
        data = [("nest", data)].into_iter().collect();
    }
    assert!(nest.accepts(&data));
    assert!(nest.accepts(&data));
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

// ============================================================================
// JSON AST
// ============================================================================

fn json_ast() -> SharedRule {
    recursive(|node| {
        union![
            object! { "type" => string_literal("null") },
            object! { "type" => string_literal("bool"), "value" => boolean() },
            object! { "type" => string_literal("num"), "value" => number() },
            object! { "type" => string_literal("str"), "value" => string() },
            object! { "type" => string_literal("arr"), "items" => array_of(node.clone()) },
            object! { "type" => string_literal("obj"), "fields" => dictionary_of(node) },
        ]
    })
}

#[test]
fn json_ast_accepts_nested_document() {
    let document = json!({
        "type": "obj",
        "fields": {
            "name": {"type": "str", "value": "x"},
            "tags": {"type": "arr", "items": [{"type": "num", "value": 1}, {"type": "null"}]}
        }
    });
    assert!(json_ast().accepts(&v(document)));
}

#[test]
fn json_ast_rejects_bad_leaf() {
    let document = json!({
        "type": "arr",
        "items": [{"type": "obj", "fields": {"k": {"type": "bool", "value": "yes"}}}]
    });
    assert!(!json_ast().accepts(&v(document)));
}

// ============================================================================
// CONCURRENCY
// ============================================================================

#[test]
fn racing_first_use_builds_once() {
    const THREADS: usize = 8;

    let count = Arc::new(AtomicUsize::new(0));
    let nest = counted_nest(&count);
    let barrier = Arc::new(Barrier::new(THREADS));
    let data = Arc::new(v(json!({"nest": {"nest": {}}})));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let nest = Arc::clone(&nest);
            let barrier = Arc::clone(&barrier);
            let data = Arc::clone(&data);
            thread::spawn(move || {
                barrier.wait();
                nest.accepts(&data)
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn shared_lazy_across_threads() {
    let count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&count);
    let rule = Arc::new(lazy(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        array_of(string())
    }));

    thread::scope(|scope| {
        for _ in 0..4 {
            let rule = Arc::clone(&rule);
            scope.spawn(move || {
                assert!(rule.accepts(&Value::from(vec![Value::from("a")])));
                assert!(!rule.accepts(&Value::from(vec![Value::from(1)])));
            });
        }
    });

    assert!(rule.is_initialized());
    assert_eq!(count.load(Ordering::SeqCst), 1);
}
