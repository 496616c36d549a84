use gridparts::Parts;

use crate::{ParamValues, Parameter, Preset, Product, Result, Schema};

/// A play gym. Only its parameters are defined, so it builds no parts.
pub struct BabyGym;

impl Product for BabyGym {
    fn id(&self) -> &'static str {
        "baby-gym"
    }

    fn label(&self) -> &'static str {
        "Baby Gym"
    }

    fn parameters(&self) -> Schema {
        Schema::new(vec![
            Parameter::number("ladder_length", "Ladder length", "ll", 5, 20).step(5),
            Parameter::number("rung_spacing", "Rung spacing", "rs", 2, 6),
        ])
    }

    fn presets(&self) -> Vec<Preset> {
        vec![Preset::new("regular", "Regular")
            .with("ladder_length", 20)
            .with("rung_spacing", 4)]
    }

    fn parts(&self, _values: &ParamValues) -> Result<Parts> {
        Ok(Parts::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::products::build;

    #[test]
    fn test_builds_nothing() {
        assert!(build(&BabyGym, "regular").is_empty());
        assert_eq!(BabyGym.parameters().len(), 2);
    }
}
