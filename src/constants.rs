//! Crate-wide constants.
//!
//! Centralizes event names and the inline style text applied to bound
//! elements so the host backends and the bridge agree on them.

// ============================================================================
// Event Names
// ============================================================================

pub const TOUCH_START: &str = "touchstart";
pub const TOUCH_MOVE: &str = "touchmove";
pub const TOUCH_END: &str = "touchend";
pub const TOUCH_CANCEL: &str = "touchcancel";

pub const MOUSE_DOWN: &str = "mousedown";
pub const MOUSE_MOVE: &str = "mousemove";
pub const MOUSE_UP: &str = "mouseup";

// ============================================================================
// Synthesized Mouse State
// ============================================================================

/// `MouseEvent.buttons` bitmask reported on every synthesized event (primary pressed)
pub const PRIMARY_BUTTONS_MASK: u16 = 1;

/// `MouseEvent.button` index reported on every synthesized event (primary)
pub const PRIMARY_BUTTON: i16 = 0;

// ============================================================================
// Inline Style
// ============================================================================

/// Declarations appended to a bound element's `style` attribute.
///
/// Turns off the touch callout menu and native pan/zoom so touches stay
/// available for synthesis.
pub const TOUCH_SUPPRESSION_STYLE: &str =
    "-webkit-touch-callout:none; -ms-touch-action: none; touch-action: none;";

// ============================================================================
// Diagnostics
// ============================================================================

/// Prefix of every diagnostic written by the bridge
pub const DIAGNOSTIC_PREFIX: &str = "Touch to mouse";
