//! Document host abstraction.
//!
//! The bridge never touches the page directly. Everything it needs from the
//! document (listener registration, tree containment, the `style` attribute,
//! scroll offsets and event dispatch) goes through [`DomHost`].
//!
//! ## Backends
//!
//! - `memory` - In-memory document used by tests and the replay tool
//! - `web` - Browser document via `web-sys` (feature `web`)

pub mod memory;
#[cfg(feature = "web")]
pub mod web;

use crate::types::{ScrollOffset, SyntheticMouseEvent, TouchEventKind, TouchInput};
use std::fmt::Debug;
use std::rc::Rc;

pub use memory::{DispatchedMouseEvent, ElementId, MemoryDocument, MemoryListener};

/// Callback invoked with every touch event a document listener observes
pub type ListenerCallback<E> = Rc<dyn Fn(&TouchInput<E>)>;

/// Dispatch phase a document listener is registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerPhase {
    /// Sees events on the way down, before any target or bubble handler
    Capture,
    Bubble,
}

impl ListenerPhase {
    /// The `useCapture` flag of `addEventListener`
    pub fn use_capture(self) -> bool {
        matches!(self, Self::Capture)
    }
}

/// Capabilities a document must provide for bindings to run against it.
pub trait DomHost {
    /// Element reference. Equality is identity.
    type Element: Clone + PartialEq + Debug + 'static;

    /// Handle of a registered document listener. Removing a listener consumes
    /// its handle, so it carries whatever the host needs to remove exactly that
    /// registration (including its phase).
    type Listener;

    fn add_document_listener(
        &self,
        kind: TouchEventKind,
        phase: ListenerPhase,
        callback: ListenerCallback<Self::Element>,
    ) -> Self::Listener;

    fn remove_document_listener(&self, listener: Self::Listener);

    /// Whether `node` is `ancestor` or one of its descendants, evaluated
    /// against the tree as it is right now
    fn contains(&self, ancestor: &Self::Element, node: &Self::Element) -> bool;

    fn style_attribute(&self, element: &Self::Element) -> Option<String>;

    fn set_style_attribute(&self, element: &Self::Element, value: &str);

    fn scroll_offset(&self) -> ScrollOffset;

    fn dispatch_mouse_event(&self, target: &Self::Element, event: &SyntheticMouseEvent);
}
