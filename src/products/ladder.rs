use gridparts::{parts, Part, PartNode, Parts};

use super::common::steps;
use crate::{ParamValues, Parameter, Preset, Product, Result, Schema};

/// Two rails with evenly spread rungs.
pub struct Ladder;

impl Product for Ladder {
    fn id(&self) -> &'static str {
        "ladder"
    }

    fn label(&self) -> &'static str {
        "Ladder"
    }

    fn parameters(&self) -> Schema {
        Schema::new(vec![
            Parameter::number("rung_width", "Rung width", "rw", 5, 20),
            Parameter::number("ladder_height", "Ladder height", "lh", 15, 60).step(5),
            Parameter::number("rung_count", "Number of rungs", "nr", 3, 15),
        ])
    }

    fn presets(&self) -> Vec<Preset> {
        vec![Preset::new("default", "Default")
            .with("rung_width", 10)
            .with("ladder_height", 30)
            .with("rung_count", 5)]
    }

    fn parts(&self, values: &ParamValues) -> Result<Parts> {
        let width = values.number("rung_width")?;
        let height = values.number("ladder_height")?;
        let rungs = values.number("rung_count")?;

        let pitch = (height - 3.0) / (rungs - 1.0);
        let rungs: Parts = steps(rungs)
            .map(|i| {
                let z = (i * pitch).floor();
                PartNode::from(parts![
                    Part::beam_y(1, (0, 2), z),
                    Part::beam_y(width - 2.0, (0, 2), z),
                    Part::beam_x((0.0, width), 0, z + 1.0),
                ])
            })
            .collect();

        Ok(parts![
            Part::beam_z(0, 1, (0.0, height)),
            Part::beam_z(width - 1.0, 1, (0.0, height)),
            rungs,
        ])
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::products::build;

    #[test]
    fn test_rungs_are_floored() {
        let parts = build(&Ladder, "default");
        assert_eq!(parts.len(), 2 + 5 * 3);
        // 27 / 4 = 6.75 between rungs
        assert_eq!(parts[5], Part::beam_y(1, (0, 2), 6));
        assert_eq!(parts[16], Part::beam_x((0, 10), 0, 28));
    }
}
