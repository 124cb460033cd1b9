//! Binding configuration.
//!
//! Parameters reach the bridge either as a typed [`BindingConfiguration`] or as
//! a loosely typed JSON value handed over by host glue. The loose form is
//! validated here: it must be an object, and `deep` is read with JavaScript
//! truthiness so that hosts passing `1` or `"yes"` behave the way the page
//! author expects.

use crate::error::{BridgeError, BridgeResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Options for one binding. Immutable once the binding exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BindingConfiguration {
    /// Respond to touches anywhere in the bound element's subtree instead of
    /// only on the element itself
    pub deep: bool,
}

impl BindingConfiguration {
    pub fn deep() -> Self {
        Self { deep: true }
    }

    /// Validate loosely typed binding parameters.
    ///
    /// `None` means the caller passed nothing and yields the defaults.
    /// Unrecognized keys are ignored.
    pub fn from_params(params: Option<&Value>) -> BridgeResult<Self> {
        let Some(params) = params else {
            return Ok(Self::default());
        };

        match params {
            Value::Object(map) => Ok(Self {
                deep: map.get("deep").is_some_and(is_truthy),
            }),
            other => Err(BridgeError::InvalidConfiguration {
                found: value_kind(other),
            }),
        }
    }
}

/// JavaScript truthiness of a JSON value
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
