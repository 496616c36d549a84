use gridparts::{parts, Part, PartNode, Parts};

use super::common::steps;
use crate::{ParamValues, Parameter, Plugin, Preset, Product, Result, Schema};

/// A shelving unit with a ladder up one side.
pub struct LadderShelf;

impl Product for LadderShelf {
    fn id(&self) -> &'static str {
        "ladder-shelf"
    }

    fn label(&self) -> &'static str {
        "Ladder Shelf"
    }

    fn parameters(&self) -> Schema {
        Schema::new(vec![
            Parameter::number("width", "Width", "w", 5, 20).step(5),
            Parameter::number("depth", "Depth", "d", 5, 20).step(5),
            Parameter::number("height", "Height", "h", 5, 30).step(5),
            Parameter::number("rung_spacing", "Rung spacing", "rs", 2, 10),
            Parameter::number("initial_shelf_offset", "Initial Shelf Offset", "iso", 0, 10),
            Parameter::number("shelf_spacing", "Shelf spacing", "ss", 5, 15),
        ])
    }

    fn presets(&self) -> Vec<Preset> {
        vec![Preset::new("regular", "Regular")
            .with("width", 10)
            .with("depth", 10)
            .with("height", 20)
            .with("rung_spacing", 5)
            .with("initial_shelf_offset", 2)
            .with("shelf_spacing", 8)]
    }

    fn plugins(&self) -> &'static [Plugin] {
        &[Plugin::SmartFasteners]
    }

    fn parts(&self, values: &ParamValues) -> Result<Parts> {
        let width = values.number("width")?;
        let depth = values.number("depth")?;
        let height = values.number("height")?;
        let rung_spacing = values.number("rung_spacing")?;
        let offset = values.number("initial_shelf_offset")?;
        let shelf_spacing = values.number("shelf_spacing")?;

        let rungs: Parts = steps((height / rung_spacing).floor() - 1.0)
            .map(|i| PartNode::from(Part::beam_y(-1, (0.0, depth), (1.0 + i) * rung_spacing - 1.0)))
            .collect();

        let shelves: Parts = steps(((height - offset - 3.0) / shelf_spacing).ceil())
            .map(|i| {
                let z = offset + i * shelf_spacing;
                PartNode::from(parts![
                    Part::beam_x((0.0, width), 1, z),
                    Part::beam_x((0.0, width), depth - 2.0, z),
                    Part::panel_xy((1.0, width - 1.0), (0.0, depth), z + 1.0),
                ])
            })
            .collect();

        Ok(parts![
            Part::beam_z(0, 0, (0.0, height)),
            Part::beam_z(width - 1.0, 0, (0.0, height)),
            Part::beam_z(0, depth - 1.0, (0.0, height)),
            Part::beam_z(width - 1.0, depth - 1.0, (0.0, height)),
            rungs,
            Part::beam_y(-1, (0.0, depth), height - 1.0),
            shelves,
            Part::panel_xy((-1.0, width), (0.0, depth), height),
        ])
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::products::build;

    #[test]
    fn test_rungs_and_shelves() {
        let parts = build(&LadderShelf, "regular");
        // three rungs below the top one, two shelves below the top panel
        assert_eq!(parts.len(), 4 + 3 + 1 + 2 * 3 + 1);
        assert_eq!(parts[4], Part::beam_y(-1, (0, 10), 4));
        assert_eq!(parts[13], Part::panel_xy((1, 9), (0, 10), 11));
    }
}
