//! Touch input translation.
//!
//! Pure functions with no DOM access: the bridge feeds them a `TouchInput`
//! snapshot and hands the resulting `SyntheticMouseEvent` back to the host.
//!
//! ## Modules
//!
//! - `coords` - Client coordinate normalization against scroll offsets
//! - `mapping` - Target filtering and mouse event construction

pub mod coords;
pub mod mapping;

pub use coords::normalize_client_coords;
pub use mapping::{accepts_target, synthesize};
