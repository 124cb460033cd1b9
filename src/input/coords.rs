//! Touch coordinate normalization.
//!
//! Browsers disagree on whether a touch point's client coordinates already
//! account for scrolling, and some leave page coordinates unpopulated. This
//! module folds those cases into one corrected pair of client coordinates.

use crate::types::{Point, ScrollOffset};

/// Compute the client coordinates reported on the synthesized mouse event.
///
/// Applied in order:
/// 1. A page coordinate of exactly zero while the matching client coordinate
///    (floored) is larger means page coordinates were never populated: the
///    scroll offset is subtracted from the client coordinates.
/// 2. Otherwise, if either client coordinate falls below the scroll-adjusted
///    page coordinate, both are replaced by the scroll-adjusted page position.
/// 3. Otherwise the client coordinates are used as reported.
pub fn normalize_client_coords(client: Point, page: Point, scroll: ScrollOffset) -> Point {
    let page_unpopulated = (page.x == 0.0 && client.x.floor() > page.x.floor())
        || (page.y == 0.0 && client.y.floor() > page.y.floor());

    if page_unpopulated {
        return Point::new(client.x - scroll.x, client.y - scroll.y);
    }

    let viewport_page = Point::new(page.x - scroll.x, page.y - scroll.y);
    if client.x < viewport_page.x || client.y < viewport_page.y {
        return viewport_page;
    }

    client
}
