//! The registry of products and the evaluation pipeline.

use gridparts::{flatten, Part, Parts};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{config::CatalogConfig, products, Error, ParamValues, Product, ProductInfo, Result, Tally};

/// Every product the application knows how to build.
pub struct Catalog {
    products: Vec<Box<dyn Product>>,
}

/// What to build: a starting preset and values layered on top of it.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, Default, PartialEq)]
pub struct EvaluateRequest {
    /// The preset to start from. Without one, the product's first preset is
    /// used, or the schema defaults for products without presets.
    #[serde(default)]
    pub preset: Option<String>,
    /// Values to override, keyed by parameter id or short id.
    #[serde(default)]
    pub values: ParamValues,
}

impl EvaluateRequest {
    /// Start from a named preset.
    pub fn preset(preset: impl Into<String>) -> Self {
        EvaluateRequest {
            preset: Some(preset.into()),
            values: ParamValues::new(),
        }
    }
}

/// A built product.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The product id.
    pub product: String,
    /// The preset the values started from, if any.
    pub preset: Option<String>,
    /// The complete, validated values the parts were built from.
    pub values: ParamValues,
    /// The nested part list.
    pub parts: Parts,
    /// The number of parts once flattened.
    pub flat_count: usize,
}

impl Evaluation {
    /// The parts in depth-first order.
    pub fn flat(&self) -> Vec<Part> {
        flatten(&self.parts)
    }

    /// Summarize the parts.
    pub fn tally(&self) -> Tally {
        Tally::from_parts(&self.flat())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// A catalog of every built-in product.
    pub fn new() -> Self {
        Catalog {
            products: products::all(),
        }
    }

    /// The built-in products, minus those the configuration excludes.
    pub fn with_config(config: &CatalogConfig) -> Self {
        let mut catalog = Self::new();
        for id in &config.exclude {
            if catalog.find(id).is_none() {
                tracing::warn!(id = id.as_str(), "excluded product is not in the catalog");
            }
        }
        catalog.products.retain(|p| !config.exclude.iter().any(|id| id == p.id()));
        tracing::debug!(count = catalog.len(), "catalog ready");
        catalog
    }

    /// Look up a product.
    pub fn find(&self, id: &str) -> Option<&dyn Product> {
        self.products.iter().find(|p| p.id() == id).map(|p| p.as_ref())
    }

    /// Look up a product, failing if it is not in the catalog.
    pub fn get(&self, id: &str) -> Result<&dyn Product> {
        self.find(id).ok_or_else(|| Error::UnknownProduct(id.to_string()))
    }

    /// The products, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Product> {
        self.products.iter().map(|p| p.as_ref())
    }

    /// Describe every product.
    pub fn infos(&self) -> Vec<ProductInfo> {
        self.iter().map(|p| p.info()).collect()
    }

    /// The number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether every product has been excluded.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Build a product.
    #[tracing::instrument(skip(self, request), fields(preset = ?request.preset))]
    pub fn evaluate(&self, id: &str, request: &EvaluateRequest) -> Result<Evaluation> {
        let product = self.get(id)?;
        let schema = product.parameters();
        let presets = product.presets();

        let preset = match &request.preset {
            Some(name) => Some(presets.iter().find(|p| &p.id == name).ok_or_else(|| Error::UnknownPreset {
                product: id.to_string(),
                preset: name.clone(),
            })?),
            None => presets.first(),
        };

        let mut values = schema.defaults();
        if let Some(preset) = preset {
            values.extend(preset.values.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        for (key, value) in request.values.iter() {
            let (id, value) = schema.normalize(key, value.clone())?;
            values.insert(id, value);
        }
        schema.validate(&values)?;

        let parts = product.parts(&values)?;
        let flat = flatten(&parts);
        for part in &flat {
            part.validate().map_err(|source| Error::InvalidPart {
                product: id.to_string(),
                source,
            })?;
        }
        tracing::info!(parts = flat.len(), "evaluated product");

        Ok(Evaluation {
            product: id.to_string(),
            preset: preset.map(|p| p.id.clone()),
            values,
            parts,
            flat_count: flat.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ParamValue;

    #[test]
    fn test_catalog_has_every_product() {
        let catalog = Catalog::new();
        assert_eq!(catalog.len(), 41);
        assert!(catalog.find("super-table").is_some());
        assert!(catalog.find("sofa").is_none());
        assert_eq!(catalog.infos().len(), 41);
    }

    #[test]
    fn test_unknown_product() {
        let catalog = Catalog::new();
        let err = catalog.evaluate("sofa", &EvaluateRequest::default()).unwrap_err();
        assert!(matches!(err, Error::UnknownProduct(ref id) if id == "sofa"));
    }

    #[test]
    fn test_unknown_preset() {
        let catalog = Catalog::new();
        let err = catalog.evaluate("bench", &EvaluateRequest::preset("throne")).unwrap_err();
        assert_eq!(err.to_string(), "product `bench` has no preset `throne`");
    }

    #[test]
    fn test_exclude() {
        let catalog = Catalog::with_config(&CatalogConfig {
            exclude: vec!["1-test".to_string(), "not-a-product".to_string()],
        });
        assert_eq!(catalog.len(), 40);
        assert!(catalog.find("1-test").is_none());
        assert!(matches!(catalog.get("1-test"), Err(Error::UnknownProduct(_))));
    }

    #[test]
    fn test_every_preset_evaluates() {
        let catalog = Catalog::new();
        for product in catalog.iter() {
            let presets = product.presets();
            let requests = if presets.is_empty() {
                vec![EvaluateRequest::default()]
            } else {
                presets.iter().map(|p| EvaluateRequest::preset(p.id.as_str())).collect()
            };
            for request in requests {
                let evaluation = catalog
                    .evaluate(product.id(), &request)
                    .unwrap_or_else(|err| panic!("{} {:?}: {err}", product.id(), request.preset));
                assert_eq!(evaluation.flat().len(), evaluation.flat_count);
                assert_eq!(evaluation.preset, request.preset);
            }
        }
    }

    #[test]
    fn test_first_preset_is_default() {
        let catalog = Catalog::new();
        let evaluation = catalog.evaluate("chair", &EvaluateRequest::default()).unwrap();
        assert_eq!(evaluation.preset.as_deref(), Some("regular-with-back"));
    }

    #[test]
    fn test_defaults_without_presets() {
        let catalog = Catalog::new();
        let evaluation = catalog.evaluate("cat-castle", &EvaluateRequest::default()).unwrap();
        assert_eq!(evaluation.preset, None);
        assert!(evaluation.values.is_empty());
        assert_eq!(evaluation.flat_count, 4 + 4 * 5);
    }

    #[test]
    fn test_overrides_by_short_id() {
        let catalog = Catalog::new();
        let mut values = ParamValues::new();
        values.insert("sd", ParamValue::Choice("10".to_string()));
        let evaluation = catalog
            .evaluate(
                "bench-seat",
                &EvaluateRequest {
                    preset: Some("default".to_string()),
                    values,
                },
            )
            .unwrap();
        assert_eq!(evaluation.values.number("seat_depth").unwrap(), 10.0);
        assert_eq!(evaluation.flat_count, 5 * 3 + 2);
    }

    #[test]
    fn test_out_of_range_override() {
        let catalog = Catalog::new();
        let mut values = ParamValues::new();
        values.insert("seat_depth", 40);
        let err = catalog
            .evaluate(
                "bench-seat",
                &EvaluateRequest {
                    preset: None,
                    values,
                },
            )
            .unwrap_err();
        assert!(matches!(err, Error::OutOfRange { ref id, .. } if id == "seat_depth"));
    }

    #[test]
    fn test_unknown_override() {
        let catalog = Catalog::new();
        let mut values = ParamValues::new();
        values.insert("colour", "red");
        let err = catalog
            .evaluate(
                "bench-seat",
                &EvaluateRequest {
                    preset: None,
                    values,
                },
            )
            .unwrap_err();
        assert!(matches!(err, Error::UnknownParameter(ref key) if key == "colour"));
    }

    #[test]
    fn test_tally_of_evaluation() {
        let catalog = Catalog::new();
        let evaluation = catalog.evaluate("bench-seat", &EvaluateRequest::default()).unwrap();
        let tally = evaluation.tally();
        assert_eq!(tally.beam_count(), evaluation.flat_count);
        assert_eq!(tally.panel_count(), 0);
    }
}
