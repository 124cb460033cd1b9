//! Error types for binding operations.

use crate::constants::DIAGNOSTIC_PREFIX;
use thiserror::Error;

/// Errors that can occur while attaching a binding
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// Binding parameters were supplied but are not a plain key-value object
    #[error("{prefix}: params must be an object, got {found}", prefix = DIAGNOSTIC_PREFIX)]
    InvalidConfiguration { found: &'static str },
}

/// Result type alias for binding operations
pub type BridgeResult<T> = Result<T, BridgeError>;
