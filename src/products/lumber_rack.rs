use gridparts::{parts, Part, PartNode, Parts};

use super::common::{round_half_up, steps};
use crate::{ParamValues, Parameter, Plugin, Preset, Product, Result, Schema};

/// Wall-mounted uprights with cantilevered arms for storing lumber.
pub struct LumberRack;

/// The `index`th of `count` positions spread from zero to `length`, snapped
/// to the grid.
fn evenly(index: f64, count: f64, length: f64) -> f64 {
    round_half_up(index / (count - 1.0) * length)
}

impl Product for LumberRack {
    fn id(&self) -> &'static str {
        "lumber-rack"
    }

    fn label(&self) -> &'static str {
        "Lumber Rack"
    }

    fn parameters(&self) -> Schema {
        Schema::new(vec![
            Parameter::number("rack_width", "Rack width", "rw", 10, 120)
                .step(5)
                .describe("The distance from the first support to the last support"),
            Parameter::number("rack_height", "Rack height", "rh", 5, 60).step(5),
            Parameter::number("support_length", "Support length", "sl", 4, 20),
            Parameter::number("row_count", "Number of rows", "nr", 2, 10)
                .describe("How many horizontal supports per vertical support"),
            Parameter::number("column_count", "Number of columns", "nc", 2, 10)
                .describe("How many vertical supports"),
        ])
    }

    fn presets(&self) -> Vec<Preset> {
        vec![Preset::new("default", "Default")
            .with("rack_width", 50)
            .with("rack_height", 20)
            .with("support_length", 10)
            .with("row_count", 4)
            .with("column_count", 4)]
    }

    fn plugins(&self) -> &'static [Plugin] {
        &[Plugin::SmartFasteners]
    }

    fn parts(&self, values: &ParamValues) -> Result<Parts> {
        let width = values.number("rack_width")?;
        let height = values.number("rack_height")?;
        let length = values.number("support_length")?;
        let rows = values.number("row_count")?;
        let columns = values.number("column_count")?;

        Ok(steps(columns)
            .map(|column| {
                let x = evenly(column, columns, width);
                let arms: Parts = steps(rows)
                    .map(|row| {
                        let z = evenly(row, rows, height - 2.0);
                        PartNode::from(parts![
                            Part::beam_x((x, x + 2.0), -1, z),
                            Part::beam_y(x + 1.0, (0.0, -length), z + 1.0),
                        ])
                    })
                    .collect();
                PartNode::from(parts![Part::beam_z(x, 0, (0.0, height)), arms])
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::products::build;

    #[test]
    fn test_positions_snap_to_the_grid() {
        assert_eq!(evenly(1.0, 4.0, 50.0), 17.0);
        assert_eq!(evenly(2.0, 4.0, 50.0), 33.0);
        assert_eq!(evenly(3.0, 4.0, 18.0), 18.0);

        let parts = build(&LumberRack, "default");
        assert_eq!(parts.len(), 4 * (1 + 4 * 2));
        assert_eq!(parts[9], Part::beam_z(17, 0, (0, 20)));
        assert_eq!(parts[13], Part::beam_y(18, (0, -10), 7));
    }
}
