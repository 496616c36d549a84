use gridparts::{parts, Part, PartNode, Parts};

use super::common::{half_floor, steps};
use crate::{ParamValues, Parameter, Plugin, Preset, Product, Result, Schema};

/// A pair of poles with footrests, optionally extended for taller users.
pub struct Stilts;

impl Product for Stilts {
    fn id(&self) -> &'static str {
        "stilts"
    }

    fn label(&self) -> &'static str {
        "Stilts"
    }

    fn parameters(&self) -> Schema {
        Schema::new(vec![
            Parameter::number("pole_height", "Pole height", "ph", 10, 60).step(10),
            Parameter::number("foot_height", "Foot height", "fh", 2, 30),
            Parameter::number("foot_width", "Foot width", "fw", 1, 4),
            Parameter::number("foot_depth", "Foot depth", "fd", 4, 10),
            Parameter::boolean("extension", "Has extension", "he"),
        ])
    }

    fn presets(&self) -> Vec<Preset> {
        let preset = |id: &str, label: &str, extension: bool| {
            Preset::new(id, label)
                .with("pole_height", 30)
                .with("foot_height", 7)
                .with("foot_depth", 5)
                .with("foot_width", 2)
                .with("extension", extension)
        };
        vec![preset("regular", "Regular", false), preset("extended", "Extended", true)]
    }

    fn plugins(&self) -> &'static [Plugin] {
        &[Plugin::SmartFasteners]
    }

    fn parts(&self, values: &ParamValues) -> Result<Parts> {
        let pole = values.number("pole_height")?;
        let foot_height = values.number("foot_height")?;
        let foot_width = values.number("foot_width")?;
        let foot_depth = values.number("foot_depth")?;
        let extension = values.flag("extension")?;

        let spacing = 5.0 + foot_width * 2.0;
        let offset = half_floor(foot_depth);
        let foot_y = (offset, offset - foot_depth);

        let footrests: Parts = steps(foot_width)
            .map(|i| {
                PartNode::from(parts![
                    Part::beam_y(1.0 + i, foot_y, foot_height),
                    Part::beam_y(spacing - 1.0 - i, foot_y, foot_height),
                ])
            })
            .collect();

        Ok(parts![
            Part::beam_z(0, 0, (0.0, pole)),
            Part::beam_z(spacing, 0, (0.0, pole)),
            extension.then(|| {
                parts![
                    Part::beam_z(0, -1, (foot_height, foot_height + pole)),
                    Part::beam_z(spacing, -1, (foot_height, foot_height + pole)),
                ]
            }),
            Part::beam_x((0.0, foot_width + 1.0), -1, foot_height - 1.0),
            Part::beam_x((spacing - foot_width, spacing + 1.0), -1, foot_height - 1.0),
            footrests,
        ])
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::products::build;

    #[test]
    fn test_extension_adds_poles() {
        let regular = build(&Stilts, "regular");
        assert_eq!(regular.len(), 2 + 2 + 4);
        assert_eq!(regular[1], Part::beam_z(9, 0, (0, 30)));
        assert_eq!(regular[4], Part::beam_y(1, (2, -3), 7));

        let extended = build(&Stilts, "extended");
        assert_eq!(extended.len(), 2 + 2 + 2 + 4);
        assert_eq!(extended[2], Part::beam_z(0, -1, (7, 37)));
    }
}
