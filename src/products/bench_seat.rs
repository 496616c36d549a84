use gridparts::{parts, Part, PartNode, Parts};

use super::common::{half_floor, steps};
use crate::{ParamValues, Parameter, Plugin, Preset, Product, Result, Schema};

/// A slatted seat without a panel.
pub struct BenchSeat;

impl Product for BenchSeat {
    fn id(&self) -> &'static str {
        "bench-seat"
    }

    fn label(&self) -> &'static str {
        "Bench Seat"
    }

    fn parameters(&self) -> Schema {
        Schema::new(vec![
            Parameter::number("seat_width", "Seat width", "sw", 10, 30).step(10),
            Parameter::number("seat_depth", "Seat depth", "sd", 5, 15),
            Parameter::number("seat_height", "Seat height", "sh", 5, 15)
                .describe("The height from the ground to the top of the seat"),
        ])
    }

    fn presets(&self) -> Vec<Preset> {
        vec![Preset::new("default", "Default")
            .with("seat_depth", 11)
            .with("seat_height", 10)
            .with("seat_width", 30)]
    }

    fn plugins(&self) -> &'static [Plugin] {
        &[Plugin::SmartFasteners]
    }

    fn parts(&self, values: &ParamValues) -> Result<Parts> {
        let width = values.number("seat_width")?;
        let depth = values.number("seat_depth")?;
        let height = values.number("seat_height")?;

        let slats: Parts = steps(half_floor(depth))
            .map(|i| {
                PartNode::from(parts![
                    Part::beam_x((0.0, width), 2.0 * i, height - 1.0),
                    Part::beam_z(0, 2.0 * i + 1.0, (0.0, height)),
                    Part::beam_z(width - 1.0, 2.0 * i + 1.0, (0.0, height)),
                ])
            })
            .collect();

        Ok(parts![
            slats,
            (depth % 2.0 == 1.0).then(|| Part::beam_x((0.0, width), depth - 1.0, height - 1.0)),
            Part::beam_y(1, (1.0, depth - 1.0), height - 2.0),
            Part::beam_y(width - 2.0, (1.0, depth - 1.0), height - 2.0),
        ])
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::products::build_with;

    #[test]
    fn test_odd_depth_closes_with_a_slat() {
        let parts = build_with(&BenchSeat, "default", &[]);
        // five slat groups, a closing slat and two rails
        assert_eq!(parts.len(), 5 * 3 + 1 + 2);
        assert_eq!(parts[15], Part::beam_x((0, 30), 10, 9));

        let even = build_with(&BenchSeat, "default", &[("seat_depth", 10.into())]);
        assert_eq!(even.len(), 5 * 3 + 2);
    }
}
