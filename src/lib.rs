//! Touch-to-mouse event bridge.
//!
//! Pointer code written only against mouse events (drag handles, sliders,
//! canvases) does nothing on a touch screen. Binding an element with
//! [`TouchMouseBridge`] makes touches on that element arrive as `mousedown`,
//! `mousemove` and `mouseup` events carrying translated coordinates and the
//! touch's modifier keys.
//!
//! ## Usage
//!
//! ```ignore
//! use touch_mouse_bridge::host::MemoryDocument;
//! use touch_mouse_bridge::TouchMouseBridge;
//! use serde_json::json;
//!
//! let doc = MemoryDocument::new();
//! let handle_el = doc.create_element("div");
//! let bridge = TouchMouseBridge::new(doc.clone());
//!
//! let binding = bridge.attach(handle_el, Some(&json!({ "deep": true })));
//! // ... touches on handle_el or its children now produce mouse events ...
//! if let Some(binding) = binding {
//!     binding.destroy();
//! }
//! ```
//!
//! In a browser, build with the `web` feature and use `host::web::WebDocument`.

pub mod bridge;
pub mod config;
pub mod constants;
pub mod error;
pub mod host;
pub mod input;
pub mod types;

pub use bridge::{BindingHandle, BindingId, TouchMouseBridge};
pub use config::BindingConfiguration;
pub use error::{BridgeError, BridgeResult};
pub use host::{DomHost, ListenerPhase};
pub use types::{
    Modifiers, MouseEventKind, Point, ScrollOffset, SyntheticMouseEvent, TouchEventKind,
    TouchInput, TouchPoint,
};
