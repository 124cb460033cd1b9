//! Core types shared by the bridge and its document hosts.
//!
//! The touch side is described host-neutrally (`TouchInput`, `TouchPoint`) so
//! the same mapping code runs against the browser and the in-memory document.
//! The mouse side is the fully resolved `SyntheticMouseEvent` handed back to the
//! host for dispatch.

use crate::constants::{
    MOUSE_DOWN, MOUSE_MOVE, MOUSE_UP, PRIMARY_BUTTON, PRIMARY_BUTTONS_MASK, TOUCH_CANCEL,
    TOUCH_END, TOUCH_MOVE, TOUCH_START,
};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Geometry
// ============================================================================

/// A pair of CSS pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Current window scroll position (`window.scrollX` / `window.scrollY`)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollOffset {
    pub x: f64,
    pub y: f64,
}

impl ScrollOffset {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ============================================================================
// Event Kinds
// ============================================================================

/// The four touch lifecycle events the bridge listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TouchEventKind {
    #[serde(rename = "touchstart")]
    Start,
    #[serde(rename = "touchmove")]
    Move,
    #[serde(rename = "touchend")]
    End,
    #[serde(rename = "touchcancel")]
    Cancel,
}

impl TouchEventKind {
    /// Every kind, in listener registration order
    pub const ALL: [TouchEventKind; 4] = [Self::Start, Self::Move, Self::End, Self::Cancel];

    /// DOM event type string
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => TOUCH_START,
            Self::Move => TOUCH_MOVE,
            Self::End => TOUCH_END,
            Self::Cancel => TOUCH_CANCEL,
        }
    }

    /// Parse a DOM event type. Anything that is not a touch lifecycle event
    /// yields `None`.
    pub fn from_event_type(event_type: &str) -> Option<Self> {
        match event_type {
            TOUCH_START => Some(Self::Start),
            TOUCH_MOVE => Some(Self::Move),
            TOUCH_END => Some(Self::End),
            TOUCH_CANCEL => Some(Self::Cancel),
            _ => None,
        }
    }

    /// The mouse event synthesized for this touch event.
    ///
    /// Cancellation releases the button just like a regular lift.
    pub fn mouse_equivalent(self) -> MouseEventKind {
        match self {
            Self::Start => MouseEventKind::Down,
            Self::Move => MouseEventKind::Move,
            Self::End | Self::Cancel => MouseEventKind::Up,
        }
    }
}

impl fmt::Display for TouchEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mouse events the bridge can synthesize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseEventKind {
    #[serde(rename = "mousedown")]
    Down,
    #[serde(rename = "mousemove")]
    Move,
    #[serde(rename = "mouseup")]
    Up,
}

impl MouseEventKind {
    /// DOM event type string
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Down => MOUSE_DOWN,
            Self::Move => MOUSE_MOVE,
            Self::Up => MOUSE_UP,
        }
    }
}

impl fmt::Display for MouseEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Touch Input
// ============================================================================

/// Modifier key flags carried from the touch event onto the mouse event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub meta: bool,
}

/// One entry of a touch event's changed touches.
#[derive(Debug, Clone, PartialEq)]
pub struct TouchPoint<E> {
    /// Element the finger first landed on
    pub target: E,
    pub client: Point,
    pub page: Point,
    pub screen: Point,
}

/// Snapshot of a touch event as observed by a document listener.
#[derive(Debug, Clone, PartialEq)]
pub struct TouchInput<E> {
    pub kind: TouchEventKind,
    /// The event's original target, if it was an element
    pub target: Option<E>,
    pub changed_touches: Vec<TouchPoint<E>>,
    pub modifiers: Modifiers,
}

impl<E> TouchInput<E> {
    /// The touch point that drives the synthesized event.
    ///
    /// Only the first changed touch is modeled.
    pub fn primary_touch(&self) -> Option<&TouchPoint<E>> {
        self.changed_touches.first()
    }
}

// ============================================================================
// Synthesized Output
// ============================================================================

/// Fully resolved parameters of a synthesized mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SyntheticMouseEvent {
    pub kind: MouseEventKind,
    pub bubbles: bool,
    pub cancelable: bool,
    pub screen: Point,
    /// Client coordinates after normalization
    pub client: Point,
    /// Page coordinates as reported by the touch point
    pub page: Point,
    pub buttons: u16,
    pub button: i16,
    pub modifiers: Modifiers,
}

impl SyntheticMouseEvent {
    /// A bubbling, cancelable event with the primary button held.
    pub fn primary(kind: MouseEventKind, screen: Point, client: Point, page: Point) -> Self {
        Self {
            kind,
            bubbles: true,
            cancelable: true,
            screen,
            client,
            page,
            buttons: PRIMARY_BUTTONS_MASK,
            button: PRIMARY_BUTTON,
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}
