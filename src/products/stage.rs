use gridparts::{parts, Part, PartNode, Parts};

use super::common::{spread, steps};
use crate::{ParamValues, Parameter, Plugin, Preset, Product, Result, Schema};

/// A platform tiled from identical modules.
pub struct Stage;

/// One module of the stage, at the origin.
fn module(width: f64, depth: f64, supports: f64, height: f64) -> Parts {
    let supports: Parts = steps(supports)
        .map(|i| PartNode::from(Part::beam_x((0.0, width), spread(i, supports, depth), height - 1.0)))
        .collect();

    parts![
        Part::beam_z(1, 0, (0.0, height)),
        Part::beam_z(width - 2.0, 0, (0.0, height)),
        Part::beam_z(1, depth - 1.0, (0.0, height)),
        Part::beam_z(width - 2.0, depth - 1.0, (0.0, height)),
        Part::beam_x((0.0, width), 1, height - 1.0),
        Part::beam_x((0.0, width), depth - 2.0, height - 1.0),
        Part::beam_y(0, (0.0, depth), height - 2.0),
        Part::beam_y(width - 1.0, (0.0, depth), height - 2.0),
        supports,
        Part::panel_xy((0.0, width), (0.0, depth), height),
    ]
}

impl Product for Stage {
    fn id(&self) -> &'static str {
        "stage"
    }

    fn label(&self) -> &'static str {
        "Stage"
    }

    fn parameters(&self) -> Schema {
        Schema::new(vec![
            Parameter::number("unit_width", "Unit width", "uw", 10, 60).step(5),
            Parameter::number("unit_depth", "Unit depth", "ud", 10, 30).step(5),
            Parameter::number("unit_supports", "Num supports", "ns", 0, 10),
            Parameter::number("height", "Height", "h", 4, 20),
            Parameter::number("units_wide", "Number of units wide", "nuw", 1, 4),
            Parameter::number("units_deep", "Number of units deep", "nud", 1, 4),
        ])
    }

    fn presets(&self) -> Vec<Preset> {
        vec![Preset::new("default", "Default")
            .with("units_wide", 2)
            .with("units_deep", 2)
            .with("unit_width", 30)
            .with("unit_depth", 20)
            .with("unit_supports", 2)
            .with("height", 5)]
    }

    fn plugins(&self) -> &'static [Plugin] {
        &[Plugin::SmartFasteners]
    }

    fn parts(&self, values: &ParamValues) -> Result<Parts> {
        let width = values.number("unit_width")?;
        let depth = values.number("unit_depth")?;
        let supports = values.number("unit_supports")?;
        let height = values.number("height")?;
        let wide = values.number("units_wide")?;
        let deep = values.number("units_deep")?;

        let unit = PartNode::from(module(width, depth, supports, height));

        Ok(steps(wide)
            .flat_map(|i| steps(deep).map(move |j| (i, j)))
            .map(|(i, j)| unit.clone().translate(i * width, j * depth, 0.0))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::products::build;

    #[test]
    fn test_modules_are_tiled() {
        let parts = build(&Stage, "default");
        let per_module = 8 + 2 + 1;
        assert_eq!(parts.len(), 4 * per_module);
        // supports at a third and two thirds of the depth
        assert_eq!(parts[8], Part::beam_x((0, 30), 6, 4));
        assert_eq!(parts[9], Part::beam_x((0, 30), 12, 4));
        // the second module sits behind the first
        assert_eq!(parts[per_module + 10], Part::panel_xy((0, 30), (20, 40), 5));
        assert_eq!(parts[3 * per_module], Part::beam_z(31, 20, (0, 5)));
    }
}
