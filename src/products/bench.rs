//! A bench with an optional backrest and intermediate legs for long seats.

use gridparts::{parts, Fit, Part, PartNode, Parts};

use super::common::supports;
use crate::{ParamValues, Parameter, Plugin, Preset, Product, Result, Schema};

pub struct Bench;

impl Product for Bench {
    fn id(&self) -> &'static str {
        "bench"
    }

    fn label(&self) -> &'static str {
        "Bench"
    }

    fn parameters(&self) -> Schema {
        Schema::new(vec![
            Parameter::number("seat_width", "Seat width", "sw", 20, 60).step(5),
            Parameter::number("seat_depth", "Seat depth", "sd", 5, 10).step(5),
            Parameter::number("seat_height", "Seat height", "sh", 5, 15)
                .describe("The height from the ground to the top of the seat"),
            Parameter::number("width_overhang", "Overhang", "wo", 0, 4)
                .describe("How many grid units should the panel overhang the beams"),
            Parameter::boolean("include_back", "Include back", "b"),
            Parameter::number("back_height", "Back height", "bh", 5, 10)
                .step(5)
                .describe("The height from the seat to the top of the backrest"),
        ])
    }

    fn presets(&self) -> Vec<Preset> {
        let regular = |id: &str, label: &str, back: bool| {
            Preset::new(id, label)
                .with("back_height", 10)
                .with("seat_depth", 10)
                .with("seat_height", 10)
                .with("seat_width", 30)
                .with("include_back", back)
                .with("width_overhang", 3)
        };
        vec![
            regular("regular", "Regular", false),
            regular("regular-with-back", "Regular With Back", true),
        ]
    }

    fn plugins(&self) -> &'static [Plugin] {
        &[Plugin::SmartFasteners]
    }

    fn parts(&self, values: &ParamValues) -> Result<Parts> {
        let width = values.number("seat_width")?;
        let depth = values.number("seat_depth")?;
        let height = values.number("seat_height")?;
        let overhang = values.number("width_overhang")?;
        let back = values.flag("include_back")?;
        let back_height = values.number("back_height")?;

        let back_top = if back { height + back_height } else { height };
        let (panel_start, panel_end) = if back { (-1.0, depth - 1.0) } else { (0.0, depth) };

        let legs: Parts = supports(width)
            .into_iter()
            .map(|support| {
                PartNode::from(parts![
                    Part::beam_y(support.offset + support.nudge, (0.0, depth), height - 2.0),
                    Part::beam_z(support.offset, 0, (0.0, back_top)),
                    Part::beam_z(support.offset, depth - 1.0, (0.0, height)),
                ])
            })
            .collect();

        Ok(parts![
            Part::panel_xy((0.0, width), (panel_start, panel_end), height),
            back.then(|| {
                Part::panel_xz((0.0, width), depth - 2.0, (height + 1.0, height + 1.0 + back_height)).with_fit(Fit::Top)
            }),
            Part::beam_z(overhang, 0, (0.0, height)),
            Part::beam_z(width - 1.0 - overhang, 0, (0.0, height)),
            Part::beam_z(overhang, depth - 1.0, (0.0, back_top)),
            Part::beam_z(width - 1.0 - overhang, depth - 1.0, (0.0, back_top)),
            Part::beam_x((0.0, width), 1, height - 1.0),
            Part::beam_x((0.0, width), depth - 2.0, height - 1.0),
            Part::beam_y(1.0 + overhang, (0.0, depth), height - 2.0),
            Part::beam_y(width - 2.0 - overhang, (0.0, depth), height - 2.0),
            legs,
        ])
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::products::build_with;

    #[test]
    fn test_long_bench_gets_middle_legs() {
        let parts = build_with(&Bench, "regular", &[("seat_width", 60.into())]);
        assert!(parts.contains(&Part::beam_z(19, 0, (0, 10))));
        assert!(parts.contains(&Part::beam_y(20, (0, 10), 8)));
        assert!(parts.contains(&Part::beam_z(39, 9, (0, 10))));
        assert!(parts.contains(&Part::beam_y(38, (0, 10), 8)));
        assert_eq!(parts.len(), 9 + 6);
    }

    #[test]
    fn test_backrest_raises_rear_posts() {
        let parts = build_with(&Bench, "regular-with-back", &[]);
        assert_eq!(parts[0], Part::panel_xy((0, 30), (-1, 9), 10));
        assert_eq!(parts[1], Part::panel_xz((0, 30), 8, (11, 21)).with_fit(Fit::Top));
        assert_eq!(parts[4], Part::beam_z(3, 9, (0, 20)));
    }
}
