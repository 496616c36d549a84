use gridparts::{parts, Part, Parts};

use crate::{ParamValues, Product, Result};

const BACK_HEIGHT: f64 = 12.0;
const ARM_HEIGHT: f64 = 8.0;
const SEAT_HEIGHT: f64 = 4.0;
const DEPTH: f64 = 8.0;
const WIDTH: f64 = 8.0;

pub struct BabyChair;

impl Product for BabyChair {
    fn id(&self) -> &'static str {
        "baby-chair"
    }

    fn label(&self) -> &'static str {
        "Baby Chair"
    }

    fn parts(&self, _values: &ParamValues) -> Result<Parts> {
        Ok(parts![
            // legs
            Part::beam_z(0, 0, (0.0, ARM_HEIGHT)),
            Part::beam_z(WIDTH - 1.0, 0, (0.0, ARM_HEIGHT)),
            Part::beam_z(0, DEPTH - 1.0, (0.0, BACK_HEIGHT)),
            Part::beam_z(WIDTH - 1.0, DEPTH - 1.0, (0.0, BACK_HEIGHT)),
            // seat frame and backrest
            Part::beam_x((0.0, WIDTH), 1, SEAT_HEIGHT - 2.0),
            Part::beam_x((0.0, WIDTH), DEPTH - 2.0, SEAT_HEIGHT - 2.0),
            Part::beam_x((0.0, WIDTH), DEPTH, BACK_HEIGHT - 1.0),
            Part::panel_xz((1.0, WIDTH - 1.0), DEPTH, (BACK_HEIGHT - 2.0, BACK_HEIGHT + 1.0)),
            Part::beam_y(1, (0.0, DEPTH), SEAT_HEIGHT - 1.0),
            Part::beam_y(WIDTH - 2.0, (0.0, DEPTH), SEAT_HEIGHT - 1.0),
            Part::panel_xy((1.0, WIDTH - 1.0), (0.0, DEPTH), SEAT_HEIGHT),
            // arms
            Part::beam_y(-1, (0.0, DEPTH), ARM_HEIGHT - 1.0),
            Part::beam_y(WIDTH, (0.0, DEPTH), ARM_HEIGHT - 1.0),
        ])
    }
}
