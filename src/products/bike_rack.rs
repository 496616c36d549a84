use gridparts::{parts, Part, Parts};

use crate::{ParamValues, Plugin, Product, Result};

/// A wall-standing rack holding two bikes by their top tubes.
pub struct BikeRack;

/// One cradle: two arms reaching out from the posts at height `z`.
fn cradle(z: f64) -> Parts {
    parts![
        Part::beam_x((-1, 2), -1, z - 1.0),
        Part::beam_y(-1, (0, -10), z),
        Part::beam_y(1, (0, -10), z),
        Part::beam_x((-1, 2), -9, z + 1.0),
    ]
}

impl Product for BikeRack {
    fn id(&self) -> &'static str {
        "bike-rack"
    }

    fn label(&self) -> &'static str {
        "Bike Rack"
    }

    fn plugins(&self) -> &'static [Plugin] {
        &[Plugin::SmartFasteners]
    }

    fn parts(&self, _values: &ParamValues) -> Result<Parts> {
        Ok(parts![
            Part::beam_z(-1, 0, (0, 20)),
            Part::beam_z(0, 0, (0, 5)),
            Part::beam_z(1, 0, (0, 20)),
            Part::beam_z(-2, 0, (15, 45)),
            Part::beam_z(0, 0, (15, 45)),
            Part::beam_z(2, 0, (15, 45)),
            cradle(20.0),
            Part::beam_z(-1, 0, (33, 38)),
            Part::beam_z(1, 0, (33, 38)),
            cradle(38.0),
            Part::beam_z(-1, 0, (40, 60)),
            Part::beam_z(1, 0, (40, 60)),
            Part::beam_x((-1, 2), 1, 58),
            Part::beam_y(0, (-2, 3), 59),
        ])
    }
}
