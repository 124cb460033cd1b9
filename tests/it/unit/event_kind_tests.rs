//! Unit tests for touch and mouse event kinds.

use touch_mouse_bridge::{MouseEventKind, TouchEventKind};

#[test]
fn test_mapping_table() {
    assert_eq!(TouchEventKind::Start.mouse_equivalent(), MouseEventKind::Down);
    assert_eq!(TouchEventKind::Move.mouse_equivalent(), MouseEventKind::Move);
    assert_eq!(TouchEventKind::End.mouse_equivalent(), MouseEventKind::Up);
    assert_eq!(TouchEventKind::Cancel.mouse_equivalent(), MouseEventKind::Up);
}

#[test]
fn test_event_type_round_trip() {
    for kind in TouchEventKind::ALL {
        assert_eq!(TouchEventKind::from_event_type(kind.as_str()), Some(kind));
    }
}

#[test]
fn test_unknown_event_types() {
    for event_type in ["mousedown", "pointerdown", "touchStart", "", "touch"] {
        assert_eq!(TouchEventKind::from_event_type(event_type), None);
    }
}

#[test]
fn test_dom_names() {
    assert_eq!(TouchEventKind::Cancel.to_string(), "touchcancel");
    assert_eq!(MouseEventKind::Down.to_string(), "mousedown");
    assert_eq!(MouseEventKind::Move.as_str(), "mousemove");
    assert_eq!(MouseEventKind::Up.as_str(), "mouseup");
}

#[test]
fn test_serde_uses_dom_names() {
    let kind: TouchEventKind = serde_json::from_str("\"touchmove\"").unwrap();
    assert_eq!(kind, TouchEventKind::Move);
    assert_eq!(serde_json::to_string(&MouseEventKind::Up).unwrap(), "\"mouseup\"");
}
