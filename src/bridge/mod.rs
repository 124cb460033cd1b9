//! Touch-to-mouse bridge.
//!
//! Binds DOM elements so that touches on them are re-dispatched as mouse
//! events, letting pointer code written only against `mousedown`/`mousemove`/
//! `mouseup` work on touch screens.
//!
//! ## Lifecycle
//!
//! ```text
//! attach   -> four capture-phase document listeners + inline style on the element
//! touch*   -> filter by target -> normalize coordinates -> dispatch mouse event
//! destroy  -> the four listeners are removed (the inline style stays)
//! ```
//!
//! ## Modules
//!
//! - `registry` - Bindings keyed by generated id
//! - `style` - Inline style applied on attach

pub mod registry;
pub mod style;

use crate::config::BindingConfiguration;
use crate::error::BridgeResult;
use crate::host::{DomHost, ListenerCallback, ListenerPhase};
use crate::input::{accepts_target, synthesize};
use crate::types::{TouchEventKind, TouchInput};
use registry::{Binding, BindingRegistry};
use serde_json::Value;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use tracing::{debug, error, trace};

pub use registry::BindingId;

/// Owns the bindings made against one document host.
///
/// Cloning is cheap; clones share the same host and registry.
pub struct TouchMouseBridge<H: DomHost + 'static> {
    host: Rc<H>,
    registry: Rc<RefCell<BindingRegistry<H>>>,
}

impl<H: DomHost + 'static> Clone for TouchMouseBridge<H> {
    fn clone(&self) -> Self {
        Self {
            host: Rc::clone(&self.host),
            registry: Rc::clone(&self.registry),
        }
    }
}

impl<H: DomHost + 'static> fmt::Debug for TouchMouseBridge<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TouchMouseBridge")
            .field("bindings", &self.binding_count())
            .finish_non_exhaustive()
    }
}

impl<H: DomHost + 'static> TouchMouseBridge<H> {
    pub fn new(host: H) -> Self {
        Self {
            host: Rc::new(host),
            registry: Rc::new(RefCell::new(BindingRegistry::default())),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    // ========================================================================
    // Attach
    // ========================================================================

    /// Bind `element` using loosely typed parameters.
    ///
    /// Invalid parameters are reported once on the error log and nothing is
    /// bound: no listener is registered, no style is touched, and `None` is
    /// returned.
    pub fn attach(&self, element: H::Element, params: Option<&Value>) -> Option<BindingHandle<H>> {
        match self.try_attach(element, params) {
            Ok(handle) => Some(handle),
            Err(err) => {
                error!("{err}");
                None
            }
        }
    }

    /// Like [`attach`](Self::attach), but hands the validation error back to
    /// the caller instead of logging it.
    pub fn try_attach(
        &self,
        element: H::Element,
        params: Option<&Value>,
    ) -> BridgeResult<BindingHandle<H>> {
        let config = BindingConfiguration::from_params(params)?;
        Ok(self.attach_with(element, config))
    }

    /// Bind `element` with an already validated configuration.
    ///
    /// Binding an element twice creates two independent bindings.
    pub fn attach_with(&self, element: H::Element, config: BindingConfiguration) -> BindingHandle<H> {
        let id = BindingId::new();
        let mapper = self.event_mapper(id);

        let listeners = TouchEventKind::ALL.map(|kind| {
            self.host
                .add_document_listener(kind, ListenerPhase::Capture, Rc::clone(&mapper))
        });
        style::suppress_native_touch(&*self.host, &element);

        debug!(binding = %id, element = ?element, deep = config.deep, "Attached touch-to-mouse binding");
        self.registry.borrow_mut().insert(
            id,
            Binding {
                element,
                config,
                listeners,
            },
        );

        BindingHandle {
            id,
            bridge: self.clone(),
        }
    }

    /// Listener shared by the four touch event kinds of one binding
    fn event_mapper(&self, id: BindingId) -> ListenerCallback<H::Element> {
        let host: Weak<H> = Rc::downgrade(&self.host);
        let registry = Rc::downgrade(&self.registry);

        Rc::new(move |input: &TouchInput<H::Element>| {
            let (Some(host), Some(registry)) = (host.upgrade(), registry.upgrade()) else {
                return;
            };
            let Some((element, config)) = registry.borrow().lookup(id) else {
                return;
            };
            map_touch_event(&*host, id, &element, config, input);
        })
    }

    // ========================================================================
    // Destroy
    // ========================================================================

    /// Remove the listeners of a binding.
    ///
    /// Returns false if the binding was already destroyed. The inline style
    /// added on attach is left in place.
    pub fn destroy(&self, id: BindingId) -> bool {
        // Release the registry before calling into the host
        let removed = self.registry.borrow_mut().remove(id);
        let Some(binding) = removed else {
            debug!(binding = %id, "Binding already destroyed");
            return false;
        };

        for listener in binding.listeners {
            self.host.remove_document_listener(listener);
        }
        debug!(binding = %id, element = ?binding.element, "Destroyed touch-to-mouse binding");
        true
    }

    /// Destroy every binding. Returns how many were live.
    pub fn destroy_all(&self) -> usize {
        let drained = self.registry.borrow_mut().drain();
        let count = drained.len();
        for (id, binding) in drained {
            for listener in binding.listeners {
                self.host.remove_document_listener(listener);
            }
            debug!(binding = %id, "Destroyed touch-to-mouse binding");
        }
        count
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn binding_count(&self) -> usize {
        self.registry.borrow().len()
    }

    pub fn is_bound(&self, id: BindingId) -> bool {
        self.registry.borrow().contains(id)
    }

    /// Live bindings on `element`
    pub fn bindings_for(&self, element: &H::Element) -> Vec<BindingId> {
        self.registry.borrow().bindings_for(element)
    }
}

/// Turn one observed touch event into a mouse event on the touched element.
///
/// Returns whether a mouse event was dispatched.
fn map_touch_event<H: DomHost>(
    host: &H,
    id: BindingId,
    element: &H::Element,
    config: BindingConfiguration,
    input: &TouchInput<H::Element>,
) -> bool {
    let accepted = accepts_target(element, input.target.as_ref(), config.deep, |ancestor, node| {
        host.contains(ancestor, node)
    });
    if !accepted {
        return false;
    }

    let Some((target, event)) = synthesize(input, host.scroll_offset()) else {
        debug!(binding = %id, kind = %input.kind, "Touch event without changed touches skipped");
        return false;
    };

    trace!(
        binding = %id,
        touch = %input.kind,
        mouse = %event.kind,
        client_x = event.client.x,
        client_y = event.client.y,
        "Synthesized mouse event"
    );
    host.dispatch_mouse_event(&target, &event);
    true
}

// ============================================================================
// BindingHandle
// ============================================================================

/// Returned by a successful attach; tears the binding down.
///
/// Dropping the handle does not destroy the binding.
pub struct BindingHandle<H: DomHost + 'static> {
    id: BindingId,
    bridge: TouchMouseBridge<H>,
}

impl<H: DomHost + 'static> BindingHandle<H> {
    pub fn id(&self) -> BindingId {
        self.id
    }

    pub fn is_active(&self) -> bool {
        self.bridge.is_bound(self.id)
    }

    /// Remove the binding's document listeners. Further calls do nothing.
    pub fn destroy(&self) {
        self.bridge.destroy(self.id);
    }
}

impl<H: DomHost + 'static> fmt::Debug for BindingHandle<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BindingHandle")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
