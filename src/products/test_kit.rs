//! A minimal fixture exercising one part of every kind.

use gridparts::{parts, Part, Parts};

use crate::{ParamValues, Product, Result};

const FASTENER: &str = "75mm:bolt:12mm:nut";

pub struct TestKit;

impl Product for TestKit {
    fn id(&self) -> &'static str {
        "1-test"
    }

    fn label(&self) -> &'static str {
        "Test"
    }

    fn parts(&self, _values: &ParamValues) -> Result<Parts> {
        Ok(parts![
            Part::beam_x((0, 10), 0, 0),
            Part::beam_y(0, (0, 10), 1),
            Part::beam_z(0, 0, (2, 12)),
            Part::fastener_line(FASTENER, [0.0, 0.0, 0.0], [1.0, 0.0, 0.0]),
            Part::fastener_line(FASTENER, [0.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            Part::fastener_line(FASTENER, [-2.0, -2.0, 0.0], [0.0, 1.0, 0.0]),
            Part::fastener_line(FASTENER, [-4.0, -4.0, 0.0], [0.0, 0.0, 1.0]),
        ])
    }
}
