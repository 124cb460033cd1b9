//! Binding Lifecycle Integration Tests

use crate::helpers::TestTree;
use serde_json::json;
use std::rc::Rc;
use touch_mouse_bridge::{DomHost, TouchEventKind};

#[test]
fn test_destroy_removes_listeners_and_stops_dispatch() {
    let tree = TestTree::new();
    let handle = tree.bridge.attach(tree.bound, None).unwrap();
    assert!(handle.is_active());

    handle.destroy();

    assert!(!handle.is_active());
    assert_eq!(tree.doc.listener_count(), 0);
    tree.touch(TouchEventKind::Start, tree.bound, 1.0, 1.0);
    assert!(tree.doc.dispatched_mouse_events().is_empty());
}

#[test]
fn test_destroy_twice_is_noop() {
    let tree = TestTree::new();
    let handle = tree.bridge.attach(tree.bound, None).unwrap();

    handle.destroy();
    handle.destroy();

    assert!(!tree.bridge.destroy(handle.id()));
    assert_eq!(tree.doc.listener_count(), 0);
}

#[test]
fn test_destroy_keeps_inline_style() {
    let tree = TestTree::new();
    let handle = tree.bridge.attach(tree.bound, None).unwrap();
    let styled = tree.doc.style_attribute(&tree.bound);

    handle.destroy();
    assert_eq!(tree.doc.style_attribute(&tree.bound), styled);
}

#[test]
fn test_destroy_only_affects_own_binding() {
    let tree = TestTree::new();
    let first = tree.bridge.attach(tree.bound, None).unwrap();
    let _second = tree.bridge.attach(tree.sibling, None).unwrap();

    first.destroy();

    assert_eq!(tree.doc.listener_count(), 4);
    tree.touch(TouchEventKind::Start, tree.bound, 1.0, 1.0);
    tree.touch(TouchEventKind::Start, tree.sibling, 1.0, 1.0);
    let dispatched = tree.doc.dispatched_mouse_events();
    assert_eq!(dispatched.len(), 1);
    assert_eq!(dispatched[0].target, tree.sibling);
}

#[test]
fn test_reattach_creates_independent_binding() {
    let tree = TestTree::new();
    let first = tree.bridge.attach(tree.bound, None).unwrap();
    let second = tree.bridge.attach(tree.bound, None).unwrap();

    assert_ne!(first.id(), second.id());
    assert_eq!(tree.bridge.bindings_for(&tree.bound).len(), 2);
    assert_eq!(tree.doc.listener_count(), 8);

    // Style text is appended once per attach
    let style = tree.doc.style_attribute(&tree.bound).unwrap();
    assert_eq!(style.matches("-webkit-touch-callout:none").count(), 2);

    tree.touch(TouchEventKind::Start, tree.bound, 1.0, 1.0);
    assert_eq!(tree.doc.take_dispatched_mouse_events().len(), 2);

    first.destroy();
    tree.touch(TouchEventKind::Start, tree.bound, 1.0, 1.0);
    assert_eq!(tree.doc.take_dispatched_mouse_events().len(), 1);
    assert!(second.is_active());
}

#[test]
fn test_destroy_all() {
    let tree = TestTree::new();
    let handle = tree.bridge.attach(tree.bound, None).unwrap();
    tree.bridge.attach(tree.sibling, Some(&json!({ "deep": true })));

    assert_eq!(tree.bridge.destroy_all(), 2);
    assert_eq!(tree.bridge.binding_count(), 0);
    assert_eq!(tree.doc.listener_count(), 0);
    assert!(!handle.is_active());
    handle.destroy();
}

#[test]
fn test_destroy_from_mouse_handler() {
    let tree = TestTree::new();
    let handle = Rc::new(tree.bridge.attach(tree.bound, None).unwrap());

    let in_handler = Rc::clone(&handle);
    tree.doc.add_mouse_listener(tree.bound, move |_| in_handler.destroy());

    tree.touch(TouchEventKind::Start, tree.bound, 1.0, 1.0);
    tree.touch(TouchEventKind::Move, tree.bound, 2.0, 2.0);

    assert_eq!(tree.doc.dispatched_mouse_events().len(), 1);
    assert!(!handle.is_active());
}

#[test]
fn test_binding_outlives_dropped_handle() {
    let tree = TestTree::new();
    let id = tree.bridge.attach(tree.bound, None).unwrap().id();

    assert!(tree.bridge.is_bound(id));
    tree.touch(TouchEventKind::Start, tree.bound, 1.0, 1.0);
    assert_eq!(tree.doc.dispatched_mouse_events().len(), 1);
}
