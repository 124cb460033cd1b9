//! Touch event to mouse event translation.

use super::coords::normalize_client_coords;
use crate::types::{ScrollOffset, SyntheticMouseEvent, TouchInput};

/// Which touch events a binding reacts to.
///
/// `contains` answers whether the bound element contains the given node
/// (inclusive) and is only consulted in deep mode.
pub fn accepts_target<E, F>(bound: &E, target: Option<&E>, deep: bool, contains: F) -> bool
where
    E: PartialEq,
    F: FnOnce(&E, &E) -> bool,
{
    let Some(target) = target else {
        return false;
    };
    if deep {
        contains(bound, target)
    } else {
        bound == target
    }
}

/// Build the mouse event for a touch event, together with the element it
/// must be dispatched on (the first changed touch's own target).
///
/// Returns `None` when the event carries no changed touches.
pub fn synthesize<E: Clone>(
    input: &TouchInput<E>,
    scroll: ScrollOffset,
) -> Option<(E, SyntheticMouseEvent)> {
    let touch = input.primary_touch()?;
    let client = normalize_client_coords(touch.client, touch.page, scroll);

    let event = SyntheticMouseEvent::primary(
        input.kind.mouse_equivalent(),
        touch.screen,
        client,
        touch.page,
    )
    .with_modifiers(input.modifiers);

    Some((touch.target.clone(), event))
}
