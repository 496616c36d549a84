use gridparts::{parts, Fit, Part, PartNode, Parts};

use super::common::{half_ceil, panel_runs};
use crate::{ParamValues, Parameter, Plugin, Preset, Product, Result, Schema};

/// A panelled board on two legs.
pub struct SignBoard;

impl Product for SignBoard {
    fn id(&self) -> &'static str {
        "sign-board"
    }

    fn label(&self) -> &'static str {
        "Sign Board"
    }

    fn parameters(&self) -> Schema {
        Schema::new(vec![
            Parameter::number("board_width", "Board width", "bw", 5, 60).step(5),
            Parameter::number("board_height", "Board height", "bh", 5, 50).step(5),
            Parameter::number("leg_height", "Leg height", "lh", 5, 30)
                .step(5)
                .describe("The height from the ground to the bottom of the board"),
            Parameter::number("leg_width", "Leg width", "lw", 5, 30).step(5),
        ])
    }

    fn presets(&self) -> Vec<Preset> {
        let preset = |id: &str, label: &str, board: i32, leg_width: i32| {
            Preset::new(id, label)
                .with("board_height", board)
                .with("board_width", board)
                .with("leg_height", 10)
                .with("leg_width", leg_width)
        };
        vec![
            preset("large", "Large", 30, 20),
            preset("medium", "Medium", 20, 15),
            preset("small", "Small", 10, 10),
        ]
    }

    fn plugins(&self) -> &'static [Plugin] {
        &[Plugin::SmartFasteners]
    }

    fn parts(&self, values: &ParamValues) -> Result<Parts> {
        let width = values.number("board_width")?;
        let height = values.number("board_height")?;
        let leg_height = values.number("leg_height")?;
        let leg_width = values.number("leg_width")?;

        let board: Parts = panel_runs(height)
            .into_iter()
            .map(|z| PartNode::from(Part::panel_xz((0.0, width), -1, z.shift(leg_height)).with_fit(Fit::Top)))
            .collect();

        let foot = half_ceil(leg_width);
        let feet = (foot, foot - leg_width);
        let top = leg_height + height;

        Ok(parts![
            board,
            Part::beam_z(0, 0, (0.0, top)),
            Part::beam_z(width - 1.0, 0, (0.0, top)),
            Part::beam_y(1, feet, 0),
            Part::beam_y(width - 2.0, feet, 0),
            Part::beam_x((0.0, width), 1, 1),
        ])
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::products::build;

    #[test]
    fn test_board_panels_start_above_the_legs() {
        let parts = build(&SignBoard, "medium");
        assert_eq!(parts[0], Part::panel_xz((0, 20), -1, (10, 20)).with_fit(Fit::Top));
        assert_eq!(parts[1], Part::panel_xz((0, 20), -1, (20, 30)).with_fit(Fit::Top));
        assert_eq!(parts[4], Part::beam_y(1, (8, -7), 0));
    }
}
