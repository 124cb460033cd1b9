//! Browser document host.
//!
//! Document listeners are `gloo-events` listeners. Dropping one removes it
//! with the same capture flag it was registered with, so
//! `remove_document_listener` only has to drop the handle.

use super::{DomHost, ListenerCallback, ListenerPhase};
use crate::types::{
    Modifiers, Point, ScrollOffset, SyntheticMouseEvent, TouchEventKind, TouchInput, TouchPoint,
};
use gloo_events::{EventListener, EventListenerOptions, EventListenerPhase};
use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, MouseEvent, MouseEventInit, Node, Touch, TouchEvent, Window};

/// The page's `document` and `window`
#[derive(Debug, Clone)]
pub struct WebDocument {
    window: Window,
    document: Document,
}

impl WebDocument {
    /// The current page. `None` outside a browser main thread.
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl DomHost for WebDocument {
    type Element = Element;
    type Listener = EventListener;

    fn add_document_listener(
        &self,
        kind: TouchEventKind,
        phase: ListenerPhase,
        callback: ListenerCallback<Element>,
    ) -> EventListener {
        let options = EventListenerOptions {
            phase: match phase {
                ListenerPhase::Capture => EventListenerPhase::Capture,
                ListenerPhase::Bubble => EventListenerPhase::Bubble,
            },
            // The original touch event is never prevented
            passive: true,
        };

        EventListener::new_with_options(&self.document, kind.as_str(), options, move |event| {
            if let Some(input) = touch_input(event) {
                callback(&input);
            }
        })
    }

    fn remove_document_listener(&self, listener: EventListener) {
        drop(listener);
    }

    fn contains(&self, ancestor: &Element, node: &Element) -> bool {
        let node: &Node = node.as_ref();
        ancestor.contains(Some(node))
    }

    fn style_attribute(&self, element: &Element) -> Option<String> {
        element.get_attribute("style")
    }

    fn set_style_attribute(&self, element: &Element, value: &str) {
        if let Err(err) = element.set_attribute("style", value) {
            warn!(?err, "Failed to set style attribute");
        }
    }

    fn scroll_offset(&self) -> ScrollOffset {
        ScrollOffset::new(
            self.window.scroll_x().unwrap_or_default(),
            self.window.scroll_y().unwrap_or_default(),
        )
    }

    /// Page coordinates are not part of `MouseEventInit`; the browser derives
    /// them from the client coordinates.
    fn dispatch_mouse_event(&self, target: &Element, event: &SyntheticMouseEvent) {
        let init = MouseEventInit::new();
        init.set_bubbles(event.bubbles);
        init.set_cancelable(event.cancelable);
        init.set_screen_x(event.screen.x as i32);
        init.set_screen_y(event.screen.y as i32);
        init.set_client_x(event.client.x as i32);
        init.set_client_y(event.client.y as i32);
        init.set_buttons(event.buttons);
        init.set_button(event.button);
        init.set_ctrl_key(event.modifiers.ctrl);
        init.set_shift_key(event.modifiers.shift);
        init.set_alt_key(event.modifiers.alt);
        init.set_meta_key(event.modifiers.meta);

        let mouse = match MouseEvent::new_with_mouse_event_init_dict(event.kind.as_str(), &init) {
            Ok(mouse) => mouse,
            Err(err) => {
                warn!(?err, kind = %event.kind, "Failed to construct mouse event");
                return;
            }
        };

        if let Err(err) = target.dispatch_event(&mouse) {
            warn!(?err, kind = %event.kind, "Failed to dispatch mouse event");
        }
    }
}

fn touch_input(event: &Event) -> Option<TouchInput<Element>> {
    let touch_event = event.dyn_ref::<TouchEvent>()?;
    let kind = TouchEventKind::from_event_type(&event.type_())?;

    let changed = touch_event.changed_touches();
    let changed_touches = (0..changed.length())
        .filter_map(|index| changed.item(index))
        .filter_map(|touch| touch_point(&touch))
        .collect();

    Some(TouchInput {
        kind,
        target: event.target().and_then(|target| target.dyn_into::<Element>().ok()),
        changed_touches,
        modifiers: Modifiers {
            ctrl: touch_event.ctrl_key(),
            shift: touch_event.shift_key(),
            alt: touch_event.alt_key(),
            meta: touch_event.meta_key(),
        },
    })
}

fn touch_point(touch: &Touch) -> Option<TouchPoint<Element>> {
    let target = touch.target()?.dyn_into::<Element>().ok()?;
    Some(TouchPoint {
        target,
        client: Point::new(touch.client_x().into(), touch.client_y().into()),
        page: Point::new(touch.page_x().into(), touch.page_y().into()),
        screen: Point::new(touch.screen_x().into(), touch.screen_y().into()),
    })
}
