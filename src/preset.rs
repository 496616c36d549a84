//! Named parameter sets.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{ParamValue, ParamValues};

/// A named, complete set of values for a product.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct Preset {
    /// The preset id.
    pub id: String,
    /// A human readable label.
    pub label: String,
    /// The values, keyed by parameter id.
    pub values: ParamValues,
}

impl Preset {
    /// Start an empty preset.
    pub fn new(id: &str, label: &str) -> Self {
        Preset {
            id: id.to_string(),
            label: label.to_string(),
            values: ParamValues::new(),
        }
    }

    /// Set one value.
    pub fn with(mut self, id: &str, value: impl Into<ParamValue>) -> Self {
        self.values.insert(id, value);
        self
    }
}
