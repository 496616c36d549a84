use gridparts::{parts, Part, Parts};

use crate::{ParamValues, Plugin, Product, Result};

const HEIGHT: f64 = 20.0;
const WIDTH: f64 = 10.0;
const LOWER_DEPTH: f64 = 10.0;
const UPPER_DEPTH: f64 = 7.0;
const UPPER_Z: f64 = 7.0;
const HANDLE_SPACING: f64 = 6.0;

/// The lower stand reaches forward past the posts.
const LOWER_START_Y: f64 = UPPER_DEPTH - LOWER_DEPTH;

pub struct BabyLearningTower;

impl Product for BabyLearningTower {
    fn id(&self) -> &'static str {
        "baby-learning-tower"
    }

    fn label(&self) -> &'static str {
        "Baby Learning Tower"
    }

    fn plugins(&self) -> &'static [Plugin] {
        &[Plugin::SmartFasteners]
    }

    fn parts(&self, _values: &ParamValues) -> Result<Parts> {
        Ok(parts![
            // posts
            Part::beam_z(0, 0, (0.0, HEIGHT)),
            Part::beam_z(0, UPPER_DEPTH - 1.0, (0.0, HEIGHT)),
            Part::beam_z(WIDTH - 1.0, 0, (0.0, HEIGHT)),
            Part::beam_z(WIDTH - 1.0, UPPER_DEPTH - 1.0, (0.0, HEIGHT)),
            Part::beam_z(0, LOWER_START_Y + 1.0, (0, 3)),
            Part::beam_z(WIDTH - 1.0, LOWER_START_Y + 1.0, (0, 3)),
            // lower stand
            Part::beam_x((-1.0, WIDTH + 1.0), LOWER_START_Y, 0),
            Part::beam_x((0.0, WIDTH), LOWER_START_Y, 1),
            Part::beam_x((-1.0, WIDTH + 1.0), UPPER_DEPTH - 2.0, 0),
            Part::beam_x((0.0, WIDTH), UPPER_DEPTH - 2.0, 1),
            Part::beam_y(1, (LOWER_START_Y, UPPER_DEPTH), 2),
            Part::beam_y(WIDTH - 2.0, (LOWER_START_Y, UPPER_DEPTH), 2),
            Part::panel_xy((1.0, WIDTH - 1.0), (LOWER_START_Y, UPPER_DEPTH), 3),
            // upper stand
            Part::beam_x((0.0, WIDTH), 1, UPPER_Z - 2.0),
            Part::beam_x((0.0, WIDTH), UPPER_DEPTH - 2.0, UPPER_Z - 2.0),
            Part::beam_y(1, (0.0, UPPER_DEPTH), UPPER_Z - 1.0),
            Part::beam_y(WIDTH - 2.0, (0.0, UPPER_DEPTH), UPPER_Z - 1.0),
            Part::panel_xy((1.0, WIDTH - 1.0), (0.0, UPPER_DEPTH), UPPER_Z),
            // handles
            Part::beam_x((0.0, WIDTH), -1, HEIGHT - HANDLE_SPACING),
            Part::beam_x((0.0, WIDTH), -1, HEIGHT - 2.0),
            Part::beam_x((-1.0, WIDTH + 1.0), UPPER_DEPTH, HEIGHT - HANDLE_SPACING - 2.0),
            Part::beam_x((-1.0, WIDTH + 1.0), UPPER_DEPTH, HEIGHT - 2.0),
            Part::beam_y(-1, (0.0, UPPER_DEPTH + 1.0), HEIGHT - HANDLE_SPACING - 1.0),
            Part::beam_y(-1, (0.0, UPPER_DEPTH + 1.0), HEIGHT - 1.0),
            Part::beam_y(WIDTH, (0.0, UPPER_DEPTH + 1.0), HEIGHT - HANDLE_SPACING - 1.0),
            Part::beam_y(WIDTH, (0.0, UPPER_DEPTH + 1.0), HEIGHT - 1.0),
        ])
    }
}
