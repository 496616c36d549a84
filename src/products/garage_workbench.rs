use gridparts::{parts, Fit, Part, PartNode, Parts};

use super::common::steps;
use crate::{ParamValues, Parameter, Plugin, Preset, Product, Result, Schema};

/// A row of open-framed units, each holding a stack of pull-out boxes.
pub struct GarageWorkbench;

/// One unit's footprint and height, starting at `x`.
#[derive(Clone, Copy)]
struct Unit {
    x: f64,
    width: f64,
    depth: f64,
    height: f64,
}

impl Unit {
    fn parts(&self, box_height: f64, box_zs: &[f64]) -> Parts {
        let Unit { x, width, depth, height } = *self;
        let xs = (x, x + width);

        let shelves: Parts = box_zs
            .iter()
            .map(|&z| {
                PartNode::from(parts![
                    Part::beam_x(xs, 1, z - 2.0),
                    Part::beam_x(xs, depth - 2.0, z - 2.0),
                    Part::beam_y(x + 1.0, (0.0, depth), z - 1.0),
                    Part::beam_y(x + width - 2.0, (0.0, depth), z - 1.0),
                    storage_box(x + 1.5, 1.5, z + 0.5, width - 3.0, depth - 3.0, box_height),
                ])
            })
            .collect();

        parts![
            Part::beam_z(x, 0, (0.0, height)),
            Part::beam_z(x + width - 1.0, 0, (0.0, height)),
            Part::beam_z(x, depth - 1.0, (0.0, height)),
            Part::beam_z(x + width - 1.0, depth - 1.0, (0.0, height)),
            shelves,
            Part::beam_y(x + 1.0, (0.0, depth), height - 2.0),
            Part::beam_y(x + width - 2.0, (0.0, depth), height - 2.0),
            Part::beam_x(xs, 1, height - 1.0),
            Part::beam_x(xs, depth - 2.0, height - 1.0),
            Part::panel_xy(xs, (0.0, depth), height).with_fit(Fit::Bottom),
        ]
    }
}

/// An open-topped panel box with its inner corner at `(x, y, z)`.
fn storage_box(x: f64, y: f64, z: f64, width: f64, depth: f64, height: f64) -> Parts {
    let xs = (x, x + width);
    let ys = (y, y + depth);
    let zs = (z, z + height);

    parts![
        Part::panel_xy(xs, ys, z - 1.0).with_fit(Fit::Top),
        Part::panel_xz(xs, y - 1.0, zs).with_fit(Fit::Top),
        Part::panel_xz(xs, y + depth, zs).with_fit(Fit::Bottom),
        Part::panel_yz(x - 1.0, ys, zs).with_fit(Fit::Top),
        Part::panel_yz(x + width, ys, zs).with_fit(Fit::Bottom),
    ]
}

impl Product for GarageWorkbench {
    fn id(&self) -> &'static str {
        "garage-workbench"
    }

    fn label(&self) -> &'static str {
        "Garage Workbench"
    }

    fn parameters(&self) -> Schema {
        Schema::new(vec![
            Parameter::number("unit_height", "Unit height", "uh", 10, 30).step(10),
            Parameter::number("unit_width", "Unit width", "uw", 5, 20).step(5),
            Parameter::number("unit_depth", "Unit depth", "ud", 5, 20).step(5),
            Parameter::number("unit_count", "Num units", "nu", 1, 6),
            Parameter::number("box_height", "Box height", "bh", 2, 10),
        ])
    }

    fn presets(&self) -> Vec<Preset> {
        vec![Preset::new("regular", "Regular")
            .with("unit_height", 20)
            .with("unit_width", 15)
            .with("unit_depth", 15)
            .with("unit_count", 3)
            .with("box_height", 5)]
    }

    fn plugins(&self) -> &'static [Plugin] {
        &[Plugin::SmartFasteners]
    }

    fn parts(&self, values: &ParamValues) -> Result<Parts> {
        let height = values.number("unit_height")?;
        let width = values.number("unit_width")?;
        let depth = values.number("unit_depth")?;
        let count = values.number("unit_count")?;
        let box_height = values.number("box_height")?;

        // boxes stack down from under the top, each needing its own rails
        let space = height - 3.0;
        let pitch = box_height + 3.0;
        let box_zs: Vec<f64> = steps((space / pitch).floor())
            .map(|i| space - pitch * i - box_height)
            .collect();

        Ok(steps(count)
            .map(|i| {
                let unit = Unit {
                    x: width * i,
                    width,
                    depth,
                    height,
                };
                PartNode::from(unit.parts(box_height, &box_zs))
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
    fn test_boxes_per_unit() {
        let parts = build(&GarageWorkbench, "regular");
        // 17 units of space fit two 8-unit box bays
        let per_unit = 4 + 2 * (4 + 5) + 5;
        assert_eq!(parts.len(), 3 * per_unit);
        assert_eq!(parts[4], Part::beam_x((0, 15), 1, 10));
        assert_eq!(parts[8], Part::panel_xy((1.5, 13.5), (1.5, 13.5), 11.5).with_fit(Fit::Top));
    }
}
