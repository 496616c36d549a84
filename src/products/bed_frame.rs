//! A bed frame sized to a standard mattress.

use gridparts::{parts, Part, Parts, GRID_LENGTH_MM};

use super::{
    common::half_floor,
    frame::{Frame, Placement},
};
use crate::{Error, ParamValues, Parameter, Preset, Product, Result, Schema};

/// Mattress ids, labels and dimensions in millimetres (width, length).
const MATTRESSES: &[(&str, &str, f64, f64)] = &[
    ("single", "Single (92cm x 188cm)", 920.0, 1880.0),
    ("long-single", "Long Single (92cm x 203cm)", 920.0, 2030.0),
    ("king-single", "King Single (107cm x 203cm)", 1070.0, 2030.0),
    ("double", "Double (138cm x 188cm)", 1380.0, 1880.0),
    ("queen", "Queen (153cm x 203cm)", 1530.0, 2030.0),
    ("king", "King (167cm x 203cm)", 1670.0, 2030.0),
    ("super-king", "Super King (183cm x 203cm)", 1830.0, 2030.0),
    ("california-king", "California King (203cm x 203cm)", 2030.0, 2030.0),
];

/// Beyond this many millimetres a side gets a middle support.
const MIDDLE_SUPPORT_MM: f64 = 1200.0;

pub struct BedFrame;

fn title(id: &str) -> String {
    id.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl Product for BedFrame {
    fn id(&self) -> &'static str {
        "bed-frame"
    }

    fn label(&self) -> &'static str {
        "Bed Frame"
    }

    fn parameters(&self) -> Schema {
        let options: Vec<(&str, &str)> = MATTRESSES.iter().map(|(id, label, _, _)| (*id, *label)).collect();
        Schema::new(vec![
            Parameter::choice("mattress_size", "Mattress size", "m", &options),
            Parameter::number("height", "Bed frame height", "h", 4, 12),
            Parameter::number("overhang_length", "Overhang length", "o", 0, 6)
                .describe("How many grid units should the length-wise beams overhang"),
            Parameter::boolean("include_panel", "Top panel", "p").describe("Should include panel on top"),
            Parameter::boolean("double_posts", "Double posts", "d").describe("Should the posts be doubled in width"),
            Parameter::boolean("underside", "Underside", "u")
                .describe("Should the side length-wise beams be underneath"),
        ])
    }

    fn presets(&self) -> Vec<Preset> {
        MATTRESSES
            .iter()
            .map(|(id, _, _, _)| {
                Preset::new(id, &title(id))
                    .with("mattress_size", *id)
                    .with("height", 8)
                    .with("overhang_length", 3)
                    .with("include_panel", true)
                    .with("double_posts", false)
                    .with("underside", false)
            })
            .collect()
    }

    fn parts(&self, values: &ParamValues) -> Result<Parts> {
        let size = values.choice("mattress_size")?;
        let (width_mm, length_mm) = MATTRESSES
            .iter()
            .find(|(id, _, _, _)| *id == size)
            .map(|(_, _, w, l)| (*w, *l))
            .ok_or_else(|| Error::UnknownChoice {
                id: "mattress_size".to_string(),
                value: size.to_string(),
            })?;
        let frame = Frame {
            height: values.number("height")?,
            double_posts: values.flag("double_posts")?,
        };
        let overhang = values.number("overhang_length")?;
        let underside = values.flag("underside")?;
        let h = frame.height;

        let width = (width_mm / GRID_LENGTH_MM).ceil();
        let length = (length_mm / GRID_LENGTH_MM).ceil();
        let middle_length = length_mm > MIDDLE_SUPPORT_MM;
        let middle_width = width_mm > MIDDLE_SUPPORT_MM;
        let post_width = frame.post_width();

        let posts_at = |x: f64| {
            parts![
                frame.post(x, 1.0, Placement::Start),
                middle_width.then(|| frame.post(x, half_floor(width), Placement::Middle)),
                frame.post(x, width - 2.0, Placement::End),
            ]
        };

        let cross_rails = if middle_width {
            parts![
                frame.rail_x((0.25 * width).floor() + 1.0, length, false),
                frame.rail_x((0.75 * width).floor() - 1.0, length, false),
            ]
        } else {
            parts![
                frame.rail_x(((1.0 / 3.0) * width).floor() + 1.0, length, false),
                frame.rail_x(((2.0 / 3.0) * width).floor() - 1.0, length, false),
            ]
        };

        Ok(parts![
            values
                .flag("include_panel")?
                .then(|| Part::panel_xy((0.0, length), (0.0, width), h).without_holes()),
            // posts
            posts_at(1.0 + overhang),
            middle_length.then(|| posts_at(half_floor(length))),
            posts_at(length - 2.0 - overhang),
            // rails along the length
            frame.rail_x(0.0, length, false),
            frame.rail_x(1.0 + post_width, length, underside),
            middle_width.then(|| parts![
                frame.rail_x(half_floor(width) - 1.0, length, false),
                frame.rail_x(half_floor(width) + post_width, length, false),
            ]),
            frame.rail_x(width - 1.0, length, false),
            frame.rail_x(width - 2.0 - post_width, length, underside),
            cross_rails,
            // rails across
            frame.rail_y(overhang, width),
            frame.rail_y(overhang + 2.0, width),
            middle_length.then(|| parts![
                frame.rail_y(half_floor(length) - 1.0, width),
                frame.rail_y(half_floor(length) + 1.0, width),
            ]),
            frame.rail_y(length - 1.0 - overhang, width),
            frame.rail_y(length - 3.0 - overhang, width),
        ])
    }
}
