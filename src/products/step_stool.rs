use gridparts::{parts, Part, PartNode, Parts};

use super::common::steps;
use crate::{ParamValues, Parameter, Plugin, Preset, Product, Result, Schema};

/// Stairs of two to four steps, the top one deeper than the rest.
pub struct StepStool;

impl Product for StepStool {
    fn id(&self) -> &'static str {
        "step-stool"
    }

    fn label(&self) -> &'static str {
        "Step Stool"
    }

    fn parameters(&self) -> Schema {
        Schema::new(vec![
            Parameter::number("step_count", "Number of steps", "ns", 2, 4),
            Parameter::number("step_depth", "Step depth", "sd", 4, 10)
                .describe("The depth of every step except the topmost step"),
            Parameter::number("step_height", "Step height", "sh", 4, 10),
            Parameter::number("step_width", "Step width", "sw", 5, 20).step(5),
            Parameter::number("top_step_depth", "Top step depth", "tsd", 5, 10)
                .describe("The depth of the topmost step"),
        ])
    }

    fn presets(&self) -> Vec<Preset> {
        let preset = |id: &str, label: &str, count: i32, depth: i32, height: i32, width: i32, top: i32| {
            Preset::new(id, label)
                .with("step_count", count)
                .with("step_depth", depth)
                .with("step_height", height)
                .with("step_width", width)
                .with("top_step_depth", top)
        };
        vec![
            preset("base", "Base", 2, 4, 5, 10, 6),
            preset("short", "Short", 2, 5, 4, 10, 5),
            preset("high", "High", 3, 5, 5, 10, 5),
            preset("wide", "Wide", 2, 5, 5, 20, 5),
        ]
    }

    fn plugins(&self) -> &'static [Plugin] {
        &[Plugin::SmartFasteners]
    }

    fn parts(&self, values: &ParamValues) -> Result<Parts> {
        let count = values.number("step_count")?;
        let depth = values.number("step_depth")?;
        let rise = values.number("step_height")?;
        let width = values.number("step_width")?;
        let top_depth = values.number("top_step_depth")?;

        let last_y = (count - 1.0) * depth;
        let top_y = last_y + top_depth;
        let top = count * rise;
        let across = (0.0, width);

        let lower: Parts = steps(count - 1.0)
            .map(|i| {
                let z = rise * (1.0 + i);
                let y = depth * i;
                PartNode::from(parts![
                    Part::panel_xy(across, (y, y + depth), z),
                    Part::beam_z(0, y, (0.0, z)),
                    Part::beam_z(width - 1.0, y, (0.0, z)),
                    Part::beam_x(across, y + 1.0, z - 1.0),
                    Part::beam_x(across, y + depth - 1.0, z - 1.0),
                    // steps after the first need their own stringers
                    (i > 0.0).then(|| {
                        parts![
                            Part::beam_y(1, (y, y + depth), z - 2.0),
                            Part::beam_y(width - 2.0, (y, y + depth), z - 2.0),
                            Part::beam_x(across, y + 1.0, rise - 3.0),
                        ]
                    }),
                ])
            })
            .collect();

        Ok(parts![
            Part::beam_y(1, (0.0, top_y), rise - 2.0),
            Part::beam_y(width - 2.0, (0.0, top_y), rise - 2.0),
            lower,
            Part::panel_xy(across, (last_y, top_y), top),
            Part::beam_z(0, last_y, (0.0, top)),
            Part::beam_z(width - 1.0, last_y, (0.0, top)),
            Part::beam_x(across, last_y + 1.0, top - 1.0),
            Part::beam_x(across, top_y - 2.0, top - 1.0),
            Part::beam_x(across, last_y + 1.0, rise - 3.0),
            Part::beam_x(across, top_y - 2.0, rise - 3.0),
            Part::beam_z(0, top_y - 1.0, (0.0, top)),
            Part::beam_z(width - 1.0, top_y - 1.0, (0.0, top)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::products::build;

    #[test]
    fn test_steps() {
        let base = build(&StepStool, "base");
        assert_eq!(base.len(), 2 + 5 + 9);
        assert_eq!(base[2], Part::panel_xy((0, 10), (0, 4), 5));
        assert_eq!(base[7], Part::panel_xy((0, 10), (4, 10), 10));

        let high = build(&StepStool, "high");
        assert_eq!(high.len(), 2 + 5 + 8 + 9);
        assert_eq!(high[12], Part::beam_y(1, (5, 10), 8));
    }
}
