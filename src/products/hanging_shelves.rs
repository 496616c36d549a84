use gridparts::{parts, Part, PartNode, Parts};

use crate::{ParamValues, Product, Result};

const SHORT_Y: (f64, f64) = (-2.0, 3.0);
const LONG_Y: (f64, f64) = (-7.0, 8.0);

/// Six staggered rows of shelves hung between four jointed posts.
pub struct HangingShelves;

/// Which side of the post its feet stick out.
#[derive(Clone, Copy)]
enum Foot {
    Right,
    Left,
}

/// A two-piece post with feet at the floor and ceiling.
fn post(x: f64, foot: Foot) -> Parts {
    let (feet_x, foot_y_x) = match foot {
        Foot::Right => ((x, x + 2.0), x + 1.0),
        Foot::Left => ((x - 1.0, x + 1.0), x - 1.0),
    };

    parts![
        Part::beam_z(x, 0, (0, 30)),
        Part::beam_z(x, 0, (30, 60)),
        // joiner
        Part::beam_z(x, 1, (28, 33)),
        Part::beam_x(feet_x, 1, 1),
        Part::beam_y(foot_y_x, (-2, 4), 0),
        Part::beam_z(x, 1, (58, 63)),
        Part::beam_x(feet_x, 0, 61),
        Part::beam_y(foot_y_x, (-2, 4), 62),
    ]
}

/// A pair of rails at `z` and the shelves resting on them.
fn row(rails: (f64, f64), z: f64, shelves: &[((f64, f64), (f64, f64))]) -> Parts {
    let shelves: Parts = shelves
        .iter()
        .map(|&(x, y)| PartNode::from(Part::panel_xy(x, y, z + 1.0)))
        .collect();
    parts![Part::beam_x(rails, 1, z), Part::beam_x(rails, -1, z), shelves]
}

impl Product for HangingShelves {
    fn id(&self) -> &'static str {
        "hanging-shelves"
    }

    fn label(&self) -> &'static str {
        "Hanging Shelves"
    }

    fn parts(&self, _values: &ParamValues) -> Result<Parts> {
        let left = (1.0, 15.0);
        let middle = (16.0, 29.0);
        let right = (30.0, 44.0);

        Ok(parts![
            post(0.0, Foot::Right),
            post(15.0, Foot::Right),
            post(29.0, Foot::Left),
            post(44.0, Foot::Left),
            row((15.0, 45.0), 10.0, &[(middle, SHORT_Y), (right, SHORT_Y)]),
            row((0.0, 30.0), 18.0, &[(left, LONG_Y), (middle, SHORT_Y)]),
            row((15.0, 45.0), 26.0, &[(middle, SHORT_Y), (right, SHORT_Y)]),
            row((15.0, 30.0), 34.0, &[(middle, SHORT_Y)]),
            row((0.0, 30.0), 42.0, &[(left, SHORT_Y), (middle, SHORT_Y)]),
            // the top row's rails are offset from each other
            Part::beam_x((0, 30), -1, 50),
            Part::beam_x((15, 45), 1, 50),
            Part::panel_xy(left, SHORT_Y, 51),
            Part::panel_xy(middle, SHORT_Y, 51),
            Part::panel_xy(right, SHORT_Y, 51),
        ])
    }
}
