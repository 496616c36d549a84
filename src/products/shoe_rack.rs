use gridparts::{parts, Part, PartNode, Parts};

use super::common::{steps, supports};
use crate::{ParamValues, Parameter, Plugin, Preset, Product, Result, Schema};

const DEPTH: f64 = 7.0;

/// Low slatted shelves for shoes.
pub struct ShoeRack;

/// Heights of the slats of each shelf, top down, skipping any that would sit
/// on the floor.
fn shelf_heights(height: f64, shelf_height: f64) -> Vec<f64> {
    steps((height / shelf_height).floor().max(1.0))
        .map(|i| height - i * (shelf_height + 1.0) - 1.0)
        .filter(|z| *z >= 1.0)
        .collect()
}

impl Product for ShoeRack {
    fn id(&self) -> &'static str {
        "shoe-rack"
    }

    fn label(&self) -> &'static str {
        "Shoe Rack"
    }

    fn parameters(&self) -> Schema {
        Schema::new(vec![
            Parameter::number("width", "Width", "w", 15, 45).step(5),
            Parameter::number("height", "Height", "h", 5, 30),
            Parameter::number("shelf_height", "Shelf Height", "sh", 4, 15),
        ])
    }

    fn presets(&self) -> Vec<Preset> {
        let preset = |id: &str, label: &str, height: i32, width: i32| {
            Preset::new(id, label)
                .with("height", height)
                .with("shelf_height", 4)
                .with("width", width)
        };
        vec![
            preset("regular", "Regular", 15, 30),
            preset("short", "Short", 5, 30),
            preset("tall", "Tall", 25, 30),
            preset("narrow", "Narrow", 15, 15),
            preset("wide", "Wide", 15, 45),
        ]
    }

    fn plugins(&self) -> &'static [Plugin] {
        &[Plugin::SmartFasteners]
    }

    fn parts(&self, values: &ParamValues) -> Result<Parts> {
        let width = values.number("width")?;
        let height = values.number("height")?;
        let zs = shelf_heights(height, values.number("shelf_height")?);

        let shelves: Parts = zs
            .iter()
            .map(|&z| {
                PartNode::from(parts![
                    Part::beam_x((0.0, width), 1, z),
                    Part::beam_x((0.0, width), 3, z),
                    Part::beam_x((0.0, width), 5, z),
                    Part::beam_y(1, (0.0, DEPTH), z - 1.0),
                    Part::beam_y(width - 2.0, (0.0, DEPTH), z - 1.0),
                ])
            })
            .collect();

        let legs: Parts = supports(width)
            .into_iter()
            .map(|s| {
                let braces: Parts = zs
                    .iter()
                    .map(|&z| PartNode::from(Part::beam_y(s.offset + s.nudge, (0.0, DEPTH), z - 1.0)))
                    .collect();
                PartNode::from(parts![
                    braces,
                    Part::beam_z(s.offset, 0, (0.0, height)),
                    Part::beam_z(s.offset, DEPTH - 1.0, (0.0, height)),
                ])
            })
            .collect();

        Ok(parts![
            Part::beam_z(0, 0, (0.0, height)),
            Part::beam_z(width - 1.0, 0, (0.0, height)),
            Part::beam_z(0, DEPTH - 1.0, (0.0, height)),
            Part::beam_z(width - 1.0, DEPTH - 1.0, (0.0, height)),
            shelves,
            legs,
        ])
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::products::build;

    #[test]
    fn test_shelf_heights() {
        assert_eq!(shelf_heights(15.0, 4.0), vec![14.0, 9.0, 4.0]);
        assert_eq!(shelf_heights(5.0, 4.0), vec![4.0]);
        // a shelf taller than the rack still gets one row
        assert_eq!(shelf_heights(5.0, 10.0), vec![4.0]);
    }

    #[test]
    fn test_wide_rack_gets_a_middle_leg() {
        let parts = build(&ShoeRack, "wide");
        assert_eq!(parts.len(), 4 + 3 * 5 + 3 + 2);
        assert_eq!(parts[19], Part::beam_y(21, (0, 7), 13));
        assert_eq!(parts[22], Part::beam_z(22, 0, (0, 15)));
    }
}
