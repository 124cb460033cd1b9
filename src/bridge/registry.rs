//! Binding registry.
//!
//! Each attached binding gets a generated id. Document listeners only close
//! over that id and look the binding up when an event arrives, so a binding
//! that has been removed from the registry can never synthesize another event.

use crate::config::BindingConfiguration;
use crate::host::DomHost;
use crate::types::TouchEventKind;
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// Identifier of one binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindingId(Uuid);

impl BindingId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BindingId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BindingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// One bound element and the document listeners serving it.
///
/// The listeners are held as a fixed array, one per touch event kind in
/// [`TouchEventKind::ALL`] order, so they are registered and released as a
/// unit.
pub struct Binding<H: DomHost> {
    pub element: H::Element,
    pub config: BindingConfiguration,
    pub listeners: [H::Listener; TouchEventKind::ALL.len()],
}

impl<H: DomHost> fmt::Debug for Binding<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("element", &self.element)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

pub struct BindingRegistry<H: DomHost> {
    bindings: HashMap<BindingId, Binding<H>>,
}

impl<H: DomHost> Default for BindingRegistry<H> {
    fn default() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }
}

impl<H: DomHost> BindingRegistry<H> {
    pub fn insert(&mut self, id: BindingId, binding: Binding<H>) {
        self.bindings.insert(id, binding);
    }

    pub fn remove(&mut self, id: BindingId) -> Option<Binding<H>> {
        self.bindings.remove(&id)
    }

    /// Element and configuration of a live binding
    pub fn lookup(&self, id: BindingId) -> Option<(H::Element, BindingConfiguration)> {
        self.bindings
            .get(&id)
            .map(|binding| (binding.element.clone(), binding.config))
    }

    pub fn contains(&self, id: BindingId) -> bool {
        self.bindings.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Ids of every binding on `element`
    pub fn bindings_for(&self, element: &H::Element) -> Vec<BindingId> {
        self.bindings
            .iter()
            .filter(|(_, binding)| binding.element == *element)
            .map(|(id, _)| *id)
            .collect()
    }

    pub fn drain(&mut self) -> Vec<(BindingId, Binding<H>)> {
        self.bindings.drain().collect()
    }
}
