use gridparts::{parts, Fit, Part, Parts};

use crate::{ParamValues, Parameter, Plugin, Preset, Product, Result, Schema};

/// A four-legged chair with an optional panel backrest.
pub struct Chair;

impl Product for Chair {
    fn id(&self) -> &'static str {
        "chair"
    }

    fn label(&self) -> &'static str {
        "Chair"
    }

    fn parameters(&self) -> Schema {
        Schema::new(vec![
            Parameter::number("seat_width", "Seat width", "sw", 5, 10).step(5),
            Parameter::number("seat_depth", "Seat depth", "sd", 5, 15),
            Parameter::number("seat_height", "Seat height", "sh", 5, 15)
                .describe("The height from the ground to the top of the seat"),
            Parameter::boolean("include_back", "Include back", "b"),
            Parameter::number("back_height", "Back height", "bh", 5, 10)
                .describe("The height from the seat to the top of the backrest"),
        ])
    }

    fn presets(&self) -> Vec<Preset> {
        let preset = |id: &str, label: &str, back: bool| {
            Preset::new(id, label)
                .with("back_height", 10)
                .with("seat_depth", 10)
                .with("seat_height", 10)
                .with("seat_width", 10)
                .with("include_back", back)
        };
        vec![
            preset("regular-with-back", "Regular With Back", true),
            preset("regular", "Regular (Without Back)", false),
        ]
    }

    fn plugins(&self) -> &'static [Plugin] {
        &[Plugin::SmartFasteners]
    }

    fn parts(&self, values: &ParamValues) -> Result<Parts> {
        let width = values.number("seat_width")?;
        let depth = values.number("seat_depth")?;
        let height = values.number("seat_height")?;
        let back = values.flag("include_back")?;
        let back_height = values.number("back_height")?;

        let (back_top, seat_y) = if back {
            (height + back_height, (-1.0, depth - 1.0))
        } else {
            (height, (0.0, depth))
        };

        Ok(parts![
            Part::panel_xy((0.0, width), seat_y, height),
            back.then(|| {
                Part::panel_xz((0.0, width), depth - 2.0, (height + 1.0, height + 1.0 + back_height))
                    .with_fit(Fit::Top)
            }),
            // legs
            Part::beam_z(0, 0, (0.0, height)),
            Part::beam_z(width - 1.0, 0, (0.0, height)),
            Part::beam_z(0, depth - 1.0, (0.0, back_top)),
            Part::beam_z(width - 1.0, depth - 1.0, (0.0, back_top)),
            // seat frame
            Part::beam_x((0.0, width), 1, height - 2.0),
            Part::beam_x((0.0, width), depth - 2.0, height - 2.0),
            Part::beam_y(1, (0.0, depth), height - 1.0),
            Part::beam_y(width - 2.0, (0.0, depth), height - 1.0),
        ])
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::products::build;

    #[test]
    fn test_back_raises_rear_legs() {
        let with_back = build(&Chair, "regular-with-back");
        assert_eq!(with_back.len(), 10);
        assert_eq!(with_back[0], Part::panel_xy((0, 10), (-1, 9), 10));
        assert_eq!(with_back[4], Part::beam_z(0, 9, (0, 20)));

        let without = build(&Chair, "regular");
        assert_eq!(without.len(), 9);
        assert_eq!(without[0], Part::panel_xy((0, 10), (0, 10), 10));
        assert_eq!(without[3], Part::beam_z(0, 9, (0, 10)));
    }
}
