//! In-memory document.
//!
//! A small element tree with document-level listeners, inline styles and a
//! scroll offset. Touch events are injected with [`MemoryDocument::dispatch_touch`]
//! and every mouse event the bridge synthesizes is recorded in order.
//!
//! `MemoryDocument` is a cheap handle: clones share the same document.

use super::{DomHost, ListenerCallback, ListenerPhase};
use crate::types::{ScrollOffset, SyntheticMouseEvent, TouchEventKind, TouchInput};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Reference to an element of a [`MemoryDocument`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(usize);

impl ElementId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A synthesized mouse event together with the element it was dispatched on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DispatchedMouseEvent {
    pub target: ElementId,
    #[serde(flatten)]
    pub event: SyntheticMouseEvent,
}

/// Handle of a document listener registered on a [`MemoryDocument`]
#[derive(Debug, PartialEq, Eq)]
pub struct MemoryListener {
    id: u64,
    kind: TouchEventKind,
    phase: ListenerPhase,
}

impl MemoryListener {
    pub fn kind(&self) -> TouchEventKind {
        self.kind
    }

    pub fn phase(&self) -> ListenerPhase {
        self.phase
    }
}

type MouseCallback = Rc<dyn Fn(&DispatchedMouseEvent)>;

struct Node {
    tag: String,
    parent: Option<ElementId>,
    style: Option<String>,
}

struct RegisteredListener {
    id: u64,
    kind: TouchEventKind,
    phase: ListenerPhase,
    callback: ListenerCallback<ElementId>,
}

#[derive(Default)]
struct DocumentState {
    nodes: Vec<Node>,
    listeners: Vec<RegisteredListener>,
    next_listener_id: u64,
    scroll: ScrollOffset,
    mouse_listeners: Vec<(ElementId, MouseCallback)>,
    dispatched: Vec<DispatchedMouseEvent>,
}

#[derive(Clone, Default)]
pub struct MemoryDocument {
    state: Rc<RefCell<DocumentState>>,
}

impl fmt::Debug for MemoryDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("MemoryDocument")
            .field("elements", &state.nodes.len())
            .field("listeners", &state.listeners.len())
            .field("scroll", &state.scroll)
            .field("dispatched", &state.dispatched.len())
            .finish()
    }
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Tree
    // ========================================================================

    /// Create a detached element
    pub fn create_element(&self, tag: impl Into<String>) -> ElementId {
        let mut state = self.state.borrow_mut();
        let id = ElementId(state.nodes.len());
        state.nodes.push(Node {
            tag: tag.into(),
            parent: None,
            style: None,
        });
        id
    }

    /// Move `child` under `parent`, detaching it from any previous parent.
    ///
    /// Returns false if either element is unknown or the move would create a
    /// cycle.
    pub fn append_child(&self, parent: ElementId, child: ElementId) -> bool {
        if !self.exists(parent) || !self.exists(child) || self.contains(&child, &parent) {
            return false;
        }
        self.state.borrow_mut().nodes[child.0].parent = Some(parent);
        true
    }

    /// Create an element and append it to `parent` in one step
    pub fn create_child(&self, parent: ElementId, tag: impl Into<String>) -> ElementId {
        let child = self.create_element(tag);
        self.append_child(parent, child);
        child
    }

    /// Remove an element (and its subtree) from its parent
    pub fn detach(&self, element: ElementId) {
        if let Some(node) = self.state.borrow_mut().nodes.get_mut(element.0) {
            node.parent = None;
        }
    }

    pub fn parent(&self, element: ElementId) -> Option<ElementId> {
        self.state.borrow().nodes.get(element.0).and_then(|node| node.parent)
    }

    pub fn tag(&self, element: ElementId) -> Option<String> {
        self.state.borrow().nodes.get(element.0).map(|node| node.tag.clone())
    }

    pub fn set_style(&self, element: ElementId, style: impl Into<String>) {
        if let Some(node) = self.state.borrow_mut().nodes.get_mut(element.0) {
            node.style = Some(style.into());
        }
    }

    fn exists(&self, element: ElementId) -> bool {
        element.0 < self.state.borrow().nodes.len()
    }

    // ========================================================================
    // Window
    // ========================================================================

    pub fn set_scroll(&self, scroll: ScrollOffset) {
        self.state.borrow_mut().scroll = scroll;
    }

    // ========================================================================
    // Events
    // ========================================================================

    /// Deliver a touch event to the document listeners for its kind.
    ///
    /// Capture listeners run first, each group in registration order. The
    /// listener set is snapshotted up front, so listeners added or removed by
    /// a callback take effect from the next event.
    pub fn dispatch_touch(&self, input: &TouchInput<ElementId>) {
        let callbacks: Vec<ListenerCallback<ElementId>> = {
            let state = self.state.borrow();
            let matching = |phase: ListenerPhase| {
                state
                    .listeners
                    .iter()
                    .filter(move |l| l.kind == input.kind && l.phase == phase)
                    .map(|l| Rc::clone(&l.callback))
            };
            let ordered: Vec<_> = matching(ListenerPhase::Capture)
                .chain(matching(ListenerPhase::Bubble))
                .collect();
            ordered
        };

        for callback in callbacks {
            callback(input);
        }
    }

    /// Observe mouse events reaching `element`, including ones bubbling up
    /// from its descendants
    pub fn add_mouse_listener(
        &self,
        element: ElementId,
        callback: impl Fn(&DispatchedMouseEvent) + 'static,
    ) {
        self.state
            .borrow_mut()
            .mouse_listeners
            .push((element, Rc::new(callback)));
    }

    /// Every mouse event dispatched so far, oldest first
    pub fn dispatched_mouse_events(&self) -> Vec<DispatchedMouseEvent> {
        self.state.borrow().dispatched.clone()
    }

    pub fn take_dispatched_mouse_events(&self) -> Vec<DispatchedMouseEvent> {
        std::mem::take(&mut self.state.borrow_mut().dispatched)
    }

    /// Number of registered document listeners
    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    pub fn listener_count_for(&self, kind: TouchEventKind, phase: ListenerPhase) -> usize {
        self.state
            .borrow()
            .listeners
            .iter()
            .filter(|l| l.kind == kind && l.phase == phase)
            .count()
    }

    fn propagation_path(&self, target: ElementId, bubbles: bool) -> Vec<ElementId> {
        let mut path = vec![target];
        if bubbles {
            let mut current = self.parent(target);
            while let Some(element) = current {
                path.push(element);
                current = self.parent(element);
            }
        }
        path
    }
}

impl DomHost for MemoryDocument {
    type Element = ElementId;
    type Listener = MemoryListener;

    fn add_document_listener(
        &self,
        kind: TouchEventKind,
        phase: ListenerPhase,
        callback: ListenerCallback<ElementId>,
    ) -> MemoryListener {
        let mut state = self.state.borrow_mut();
        let id = state.next_listener_id;
        state.next_listener_id += 1;
        state.listeners.push(RegisteredListener {
            id,
            kind,
            phase,
            callback,
        });
        MemoryListener { id, kind, phase }
    }

    /// Removal matches on identity, kind and phase, like `removeEventListener`
    /// matches on callback, type and capture flag.
    fn remove_document_listener(&self, listener: MemoryListener) {
        self.state.borrow_mut().listeners.retain(|l| {
            !(l.id == listener.id && l.kind == listener.kind && l.phase == listener.phase)
        });
    }

    fn contains(&self, ancestor: &ElementId, node: &ElementId) -> bool {
        let state = self.state.borrow();
        let mut current = Some(*node);
        while let Some(element) = current {
            if element == *ancestor {
                return true;
            }
            current = state.nodes.get(element.0).and_then(|n| n.parent);
        }
        false
    }

    fn style_attribute(&self, element: &ElementId) -> Option<String> {
        self.state
            .borrow()
            .nodes
            .get(element.0)
            .and_then(|node| node.style.clone())
    }

    fn set_style_attribute(&self, element: &ElementId, value: &str) {
        self.set_style(*element, value);
    }

    fn scroll_offset(&self) -> ScrollOffset {
        self.state.borrow().scroll
    }

    fn dispatch_mouse_event(&self, target: &ElementId, event: &SyntheticMouseEvent) {
        let dispatched = DispatchedMouseEvent {
            target: *target,
            event: *event,
        };
        let path = self.propagation_path(*target, event.bubbles);

        let callbacks: Vec<MouseCallback> = {
            let mut state = self.state.borrow_mut();
            state.dispatched.push(dispatched);
            let along_path: Vec<_> = path
                .iter()
                .flat_map(|element| {
                    state
                        .mouse_listeners
                        .iter()
                        .filter(move |(owner, _)| owner == element)
                        .map(|(_, callback)| Rc::clone(callback))
                })
                .collect();
            along_path
        };

        for callback in callbacks {
            callback(&dispatched);
        }
    }
}
