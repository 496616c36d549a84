//! A cantilever-style chair on sled feet.

use gridparts::{parts, Part, PartNode, Parts};

use super::common::{half_floor, steps};
use crate::{ParamValues, Parameter, Plugin, Preset, Product, Result, Schema};

pub struct CescaChair;

impl Product for CescaChair {
    fn id(&self) -> &'static str {
        "cesca-chair"
    }

    fn label(&self) -> &'static str {
        "Cesca Chair"
    }

    fn parameters(&self) -> Schema {
        Schema::new(vec![
            Parameter::number("seat_width", "Seat width", "sw", 5, 10).step(5),
            Parameter::number("seat_depth", "Seat depth", "sd", 6, 14).step(2),
            Parameter::number("seat_height", "Seat height", "sh", 5, 15)
                .describe("The height from the ground to the top of the seat"),
            Parameter::boolean("include_back", "Include back", "b"),
            Parameter::number("back_height", "Back height", "bh", 5, 10)
                .describe("The height from the seat to the top of the backrest"),
        ])
    }

    fn presets(&self) -> Vec<Preset> {
        let preset = |id: &str, label: &str, back: bool| {
            Preset::new(id, label)
                .with("back_height", 10)
                .with("seat_depth", 10)
                .with("seat_height", 10)
                .with("seat_width", 10)
                .with("include_back", back)
        };
        vec![
            preset("default-with-back", "Default With Back", true),
            preset("default", "Default (Without Back)", false),
        ]
    }

    fn plugins(&self) -> &'static [Plugin] {
        &[Plugin::SmartFasteners]
    }

    fn parts(&self, values: &ParamValues) -> Result<Parts> {
        let width = values.number("seat_width")?;
        let depth = values.number("seat_depth")?;
        let height = values.number("seat_height")?;
        let back = values.flag("include_back")?;
        let back_height = values.number("back_height")?;

        let slats: Parts = steps(half_floor(depth))
            .map(|i| PartNode::from(Part::beam_x((0.0, width), 2.0 * i - 1.0, height - 1.0)))
            .collect();

        let back_top = height + back_height;

        Ok(parts![
            // sled
            Part::beam_y(1, (0.0, depth), 0),
            Part::beam_y(width - 2.0, (0.0, depth), 0),
            Part::beam_x((0.0, width), 1, 1),
            Part::beam_z(0, 0, (0.0, height)),
            Part::beam_z(width - 1.0, 0, (0.0, height)),
            // seat
            slats,
            Part::beam_y(1, (-1.0, depth - 1.0), height - 2.0),
            Part::beam_y(width - 2.0, (-1.0, depth - 1.0), height - 2.0),
            back.then(|| {
                parts![
                    Part::beam_z(0, depth - 2.0, (height - 2.0, back_top - 2.0)),
                    Part::beam_z(width - 1.0, depth - 2.0, (height - 2.0, back_top - 2.0)),
                    Part::beam_x((0.0, width), depth - 3.0, back_top - 5.0),
                    Part::beam_x((0.0, width), depth - 3.0, back_top - 3.0),
                ]
            }),
        ])
    }
}
