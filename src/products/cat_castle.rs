use gridparts::{parts, Fit, Part, Parts, Span};

use crate::{ParamValues, Product, Result};

const HEIGHT: f64 = 30.0;
const WIDTH: f64 = 10.0;
const DEPTH: f64 = 10.0;
const OVERHANG: f64 = WIDTH;

/// A tower of alternating cantilevered shelves.
pub struct CatCastle;

fn posts() -> Parts {
    parts![
        Part::beam_z(0, 0, (0.0, HEIGHT)),
        Part::beam_z(0, DEPTH - 1.0, (0.0, HEIGHT)),
        Part::beam_z(WIDTH - 1.0, 0, (0.0, HEIGHT)),
        Part::beam_z(WIDTH - 1.0, DEPTH - 1.0, (0.0, HEIGHT)),
    ]
}

fn level(z: f64, beam_x: Span, panel_x: Span) -> Parts {
    parts![
        Part::beam_y(1, (0.0, DEPTH), z - 1.0),
        Part::beam_y(WIDTH - 2.0, (0.0, DEPTH), z - 1.0),
        Part::beam_x(beam_x, 1, z),
        Part::beam_x(beam_x, DEPTH - 2.0, z),
        Part::panel_xy(panel_x, (1.0, DEPTH - 1.0), z + 1.0).with_fit(Fit::Bottom),
    ]
}

impl Product for CatCastle {
    fn id(&self) -> &'static str {
        "cat-castle"
    }

    fn label(&self) -> &'static str {
        "Cat Castle"
    }

    fn parts(&self, _values: &ParamValues) -> Result<Parts> {
        Ok(parts![
            posts(),
            level(2.0, Span(0.0, WIDTH), Span(0.0, WIDTH)),
            level(11.0, Span(-OVERHANG, WIDTH), Span(-OVERHANG, 0.0)),
            level(20.0, Span(0.0, WIDTH + OVERHANG), Span(0.0, WIDTH + OVERHANG)),
            level(29.0, Span(-OVERHANG, WIDTH), Span(-OVERHANG, WIDTH)),
        ])
    }
}
