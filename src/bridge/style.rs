//! Inline style changes applied to bound elements.

use crate::constants::TOUCH_SUPPRESSION_STYLE;
use crate::host::DomHost;

/// Append the touch suppression declarations to an existing `style` value.
///
/// Prior declarations are kept and separated with `;`. Nothing is
/// deduplicated: applying this twice appends the declarations twice.
pub fn with_touch_suppression(existing: Option<&str>) -> String {
    let prior = existing
        .map(str::trim_end)
        .map(|style| style.strip_suffix(';').unwrap_or(style))
        .filter(|style| !style.trim().is_empty());

    match prior {
        Some(prior) => format!("{prior}; {TOUCH_SUPPRESSION_STYLE}"),
        None => TOUCH_SUPPRESSION_STYLE.to_string(),
    }
}

/// Disable the touch callout and native pan/zoom on `element`
pub fn suppress_native_touch<H: DomHost + ?Sized>(host: &H, element: &H::Element) {
    let existing = host.style_attribute(element);
    host.set_style_attribute(element, &with_touch_suppression(existing.as_deref()));
}
