//! The interface every product implements.

use gridparts::Parts;
use parse_display::{Display, FromStr};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{ParamValues, Preset, Result, Schema};

/// Optional behaviours a product asks its consumer to enable.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, FromStr)]
#[serde(rename_all = "kebab-case")]
#[display(style = "kebab-case")]
pub enum Plugin {
    /// Place fasteners automatically wherever beams and panels meet.
    SmartFasteners,
}

/// A parametric design.
pub trait Product: Send + Sync {
    /// The stable id.
    fn id(&self) -> &'static str;

    /// A human readable name.
    fn label(&self) -> &'static str;

    /// The tunable inputs. Fixed designs have none.
    fn parameters(&self) -> Schema {
        Schema::default()
    }

    /// Named value sets, the first of which is the default.
    fn presets(&self) -> Vec<Preset> {
        Vec::new()
    }

    /// Behaviours the consumer should enable.
    fn plugins(&self) -> &'static [Plugin] {
        &[]
    }

    /// Lay out the parts for a validated set of values.
    fn parts(&self, values: &ParamValues) -> Result<Parts>;

    /// Describe the product.
    fn info(&self) -> ProductInfo {
        ProductInfo {
            id: self.id().to_string(),
            label: self.label().to_string(),
            parameters: self.parameters(),
            presets: self.presets(),
            plugins: self.plugins().to_vec(),
        }
    }
}

/// Everything a client needs to present a product.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct ProductInfo {
    /// The stable id.
    pub id: String,
    /// A human readable name.
    pub label: String,
    /// The tunable inputs.
    pub parameters: Schema,
    /// Named value sets.
    pub presets: Vec<Preset>,
    /// Behaviours the consumer should enable.
    pub plugins: Vec<Plugin>,
}
