//! Unit tests for client coordinate normalization.

use touch_mouse_bridge::input::normalize_client_coords;
use touch_mouse_bridge::{Point, ScrollOffset};

#[test]
fn test_unpopulated_page_coordinates() {
    let corrected = normalize_client_coords(
        Point::new(100.0, 100.0),
        Point::new(0.0, 0.0),
        ScrollOffset::new(20.0, 30.0),
    );
    assert_eq!(corrected, Point::new(80.0, 70.0));
}

#[test]
fn test_client_clamped_to_page() {
    let corrected = normalize_client_coords(
        Point::new(5.0, 5.0),
        Point::new(50.0, 50.0),
        ScrollOffset::new(0.0, 0.0),
    );
    assert_eq!(corrected, Point::new(50.0, 50.0));
}

#[test]
fn test_client_passes_through() {
    let corrected = normalize_client_coords(
        Point::new(60.0, 60.0),
        Point::new(50.0, 50.0),
        ScrollOffset::new(0.0, 0.0),
    );
    assert_eq!(corrected, Point::new(60.0, 60.0));
}

#[test]
fn test_scrolled_page_with_viewport_client() {
    // Page is 300px further down; client already viewport-relative
    let corrected = normalize_client_coords(
        Point::new(40.0, 50.0),
        Point::new(40.0, 350.0),
        ScrollOffset::new(0.0, 300.0),
    );
    assert_eq!(corrected, Point::new(40.0, 50.0));
}

#[test]
fn test_fractional_client_floors_before_comparison() {
    // floor(0.9) == floor(0.0), so page coordinates are trusted and the
    // client value is below the scroll-adjusted page on neither axis
    let corrected = normalize_client_coords(
        Point::new(0.9, 10.0),
        Point::new(0.0, 10.0),
        ScrollOffset::new(0.0, 0.0),
    );
    assert_eq!(corrected, Point::new(0.9, 10.0));
}
