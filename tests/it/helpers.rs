//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestTree` - A bound element with a child and an unrelated sibling
//! - `TouchBuilder` - Builder for touch event snapshots
//! - `count_errors()` - Runs a closure and counts ERROR-level diagnostics

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use touch_mouse_bridge::host::{ElementId, MemoryDocument};
use touch_mouse_bridge::{
    Modifiers, Point, TouchEventKind, TouchInput, TouchMouseBridge, TouchPoint,
};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

// ============================================================================
// TestTree
// ============================================================================

/// ```text
/// root
/// ├── bound
/// │   └── child
/// │       └── grandchild
/// └── sibling
/// ```
pub struct TestTree {
    pub doc: MemoryDocument,
    pub bridge: TouchMouseBridge<MemoryDocument>,
    pub root: ElementId,
    pub bound: ElementId,
    pub child: ElementId,
    pub grandchild: ElementId,
    pub sibling: ElementId,
}

impl TestTree {
    pub fn new() -> Self {
        let doc = MemoryDocument::new();
        let root = doc.create_element("body");
        let bound = doc.create_child(root, "div");
        let child = doc.create_child(bound, "span");
        let grandchild = doc.create_child(child, "b");
        let sibling = doc.create_child(root, "div");
        let bridge = TouchMouseBridge::new(doc.clone());

        Self {
            doc,
            bridge,
            root,
            bound,
            child,
            grandchild,
            sibling,
        }
    }

    /// Dispatch a touch at (x, y) with identical client and page coordinates
    pub fn touch(&self, kind: TouchEventKind, target: ElementId, x: f64, y: f64) {
        self.doc
            .dispatch_touch(&TouchBuilder::new(kind, target).at(x, y).build());
    }
}

// ============================================================================
// TouchBuilder
// ============================================================================

/// Builder for a touch event with a single changed touch.
///
/// # Example
/// ```ignore
/// let input = TouchBuilder::new(TouchEventKind::Start, element)
///     .client(100.0, 100.0)
///     .page(0.0, 0.0)
///     .build();
/// ```
pub struct TouchBuilder {
    kind: TouchEventKind,
    target: ElementId,
    client: Point,
    page: Point,
    screen: Option<Point>,
    modifiers: Modifiers,
    extra_touches: Vec<TouchPoint<ElementId>>,
    no_touches: bool,
}

impl TouchBuilder {
    pub fn new(kind: TouchEventKind, target: ElementId) -> Self {
        Self {
            kind,
            target,
            client: Point::default(),
            page: Point::default(),
            screen: None,
            modifiers: Modifiers::default(),
            extra_touches: Vec::new(),
            no_touches: false,
        }
    }

    /// Same client and page coordinates (no scroll)
    pub fn at(self, x: f64, y: f64) -> Self {
        self.client(x, y).page(x, y)
    }

    pub fn client(mut self, x: f64, y: f64) -> Self {
        self.client = Point::new(x, y);
        self
    }

    pub fn page(mut self, x: f64, y: f64) -> Self {
        self.page = Point::new(x, y);
        self
    }

    pub fn screen(mut self, x: f64, y: f64) -> Self {
        self.screen = Some(Point::new(x, y));
        self
    }

    pub fn modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Add a second finger
    pub fn with_touch(mut self, target: ElementId, x: f64, y: f64) -> Self {
        self.extra_touches.push(TouchPoint {
            target,
            client: Point::new(x, y),
            page: Point::new(x, y),
            screen: Point::new(x, y),
        });
        self
    }

    /// Produce an event whose changed touches list is empty
    pub fn without_touches(mut self) -> Self {
        self.no_touches = true;
        self
    }

    pub fn build(self) -> TouchInput<ElementId> {
        let mut changed_touches = Vec::new();
        if !self.no_touches {
            changed_touches.push(TouchPoint {
                target: self.target,
                client: self.client,
                page: self.page,
                screen: self.screen.unwrap_or(self.client),
            });
            changed_touches.extend(self.extra_touches);
        }

        TouchInput {
            kind: self.kind,
            target: Some(self.target),
            changed_touches,
            modifiers: self.modifiers,
        }
    }
}

// ============================================================================
// Diagnostics
// ============================================================================

#[derive(Clone, Default)]
struct ErrorCounter(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for ErrorCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::ERROR {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Run `f` with a scoped subscriber and count the errors it logged
pub fn count_errors<T>(f: impl FnOnce() -> T) -> (T, usize) {
    let counter = ErrorCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, counter.0.load(Ordering::SeqCst))
}
