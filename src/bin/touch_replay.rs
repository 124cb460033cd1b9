//! Replay a recorded touch scenario through the bridge.
//!
//! ```text
//! touch-replay demos/drag.json
//! RUST_LOG=touch_mouse_bridge=trace touch-replay demos/drag.json
//! ```
//!
//! Each synthesized mouse event is printed to stdout as one JSON line.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use touch_mouse_bridge::host::{DispatchedMouseEvent, ElementId, MemoryDocument};
use touch_mouse_bridge::{
    BindingHandle, Modifiers, Point, ScrollOffset, SyntheticMouseEvent, TouchEventKind,
    TouchInput, TouchMouseBridge, TouchPoint,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

// ============================================================================
// Scenario Format
// ============================================================================

#[derive(Debug, Deserialize)]
struct Scenario {
    elements: Vec<ElementSpec>,
    #[serde(default)]
    scroll: ScrollOffset,
    #[serde(default)]
    bindings: Vec<BindingSpec>,
    steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
struct ElementSpec {
    name: String,
    #[serde(default = "default_tag")]
    tag: String,
    parent: Option<String>,
    style: Option<String>,
}

fn default_tag() -> String {
    "div".to_string()
}

#[derive(Debug, Deserialize)]
struct BindingSpec {
    element: String,
    /// Passed through unvalidated, so scenarios can exercise bad parameters
    params: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
enum Step {
    Touch {
        kind: TouchEventKind,
        target: String,
        client: Point,
        page: Point,
        #[serde(default)]
        screen: Option<Point>,
        #[serde(default)]
        modifiers: Modifiers,
    },
    Scroll {
        x: f64,
        y: f64,
    },
    /// Destroy the binding at this index of `bindings`
    Destroy {
        binding: usize,
    },
}

#[derive(Debug, Serialize)]
struct ReplayedEvent<'a> {
    target: &'a str,
    #[serde(flatten)]
    event: SyntheticMouseEvent,
}

// ============================================================================
// Replay
// ============================================================================

struct Replay {
    doc: MemoryDocument,
    bridge: TouchMouseBridge<MemoryDocument>,
    elements: HashMap<String, ElementId>,
    names: HashMap<ElementId, String>,
    handles: Vec<Option<BindingHandle<MemoryDocument>>>,
}

impl Replay {
    fn build(scenario: &Scenario) -> Result<Self> {
        let doc = MemoryDocument::new();
        let mut elements = HashMap::new();
        let mut names = HashMap::new();

        for spec in &scenario.elements {
            if elements.contains_key(&spec.name) {
                bail!("duplicate element name `{}`", spec.name);
            }
            let id = doc.create_element(spec.tag.as_str());
            if let Some(style) = &spec.style {
                doc.set_style(id, style.as_str());
            }
            elements.insert(spec.name.clone(), id);
            names.insert(id, spec.name.clone());
        }

        for spec in &scenario.elements {
            let Some(parent) = &spec.parent else { continue };
            let parent_id = lookup(&elements, parent)?;
            if !doc.append_child(parent_id, elements[&spec.name]) {
                bail!("cannot place `{}` under `{}`", spec.name, parent);
            }
        }
        doc.set_scroll(scenario.scroll);

        let bridge = TouchMouseBridge::new(doc.clone());
        let mut handles = Vec::with_capacity(scenario.bindings.len());
        for spec in &scenario.bindings {
            let element = lookup(&elements, &spec.element)?;
            handles.push(bridge.attach(element, spec.params.as_ref()));
        }

        Ok(Self {
            doc,
            bridge,
            elements,
            names,
            handles,
        })
    }

    fn run(&self, steps: &[Step], out: &mut impl Write) -> Result<usize> {
        let mut emitted = 0;
        for (index, step) in steps.iter().enumerate() {
            match step {
                Step::Touch {
                    kind,
                    target,
                    client,
                    page,
                    screen,
                    modifiers,
                } => {
                    let target = lookup(&self.elements, target)?;
                    self.doc.dispatch_touch(&TouchInput {
                        kind: *kind,
                        target: Some(target),
                        changed_touches: vec![TouchPoint {
                            target,
                            client: *client,
                            page: *page,
                            screen: screen.unwrap_or(*client),
                        }],
                        modifiers: *modifiers,
                    });
                }
                Step::Scroll { x, y } => self.doc.set_scroll(ScrollOffset::new(*x, *y)),
                Step::Destroy { binding } => match self.handles.get(*binding) {
                    Some(Some(handle)) => handle.destroy(),
                    Some(None) => warn!(step = index, binding, "Binding was never attached"),
                    None => bail!("step {index}: no binding at index {binding}"),
                },
            }

            for dispatched in self.doc.take_dispatched_mouse_events() {
                self.write_event(&dispatched, out)?;
                emitted += 1;
            }
        }
        Ok(emitted)
    }

    fn write_event(&self, dispatched: &DispatchedMouseEvent, out: &mut impl Write) -> Result<()> {
        let target = self
            .names
            .get(&dispatched.target)
            .map(String::as_str)
            .unwrap_or("?");
        let line = serde_json::to_string(&ReplayedEvent {
            target,
            event: dispatched.event,
        })?;
        writeln!(out, "{line}")?;
        Ok(())
    }
}

fn lookup(elements: &HashMap<String, ElementId>, name: &str) -> Result<ElementId> {
    elements
        .get(name)
        .copied()
        .with_context(|| format!("unknown element `{name}`"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        bail!("usage: touch-replay <scenario.json>");
    };

    let raw = fs::read_to_string(&path)
        .with_context(|| format!("failed to read scenario {}", path.display()))?;
    let scenario: Scenario = serde_json::from_str(&raw)
        .with_context(|| format!("invalid scenario {}", path.display()))?;

    let replay = Replay::build(&scenario)?;
    let stdout = io::stdout();
    let emitted = replay.run(&scenario.steps, &mut stdout.lock())?;

    info!(
        emitted,
        bindings = replay.bridge.binding_count(),
        "Replay finished"
    );
    Ok(())
}
