use gridparts::{parts, Part, Parts};

use crate::{ParamValues, Parameter, Plugin, Preset, Product, Result, Schema};

/// A desk with a raised storage shelf along the back.
pub struct MakersDesk;

impl Product for MakersDesk {
    fn id(&self) -> &'static str {
        "makers-desk"
    }

    fn label(&self) -> &'static str {
        "Makers Desk"
    }

    fn parameters(&self) -> Schema {
        Schema::new(vec![
            Parameter::number("desk_height", "Desk height", "dh", 10, 30),
            Parameter::number("desk_width", "Desk width", "dw", 10, 30),
            Parameter::number("desk_depth", "Desk depth", "dd", 15, 25).step(5),
            Parameter::number("storage_height", "Storage height", "sh", 5, 10),
            Parameter::number("storage_depth", "Storage depth", "sd", 5, 10),
        ])
    }

    fn presets(&self) -> Vec<Preset> {
        vec![Preset::new("regular", "Regular")
            .with("desk_height", 20)
            .with("desk_width", 30)
            .with("desk_depth", 20)
            .with("storage_height", 10)
            .with("storage_depth", 8)]
    }

    fn plugins(&self) -> &'static [Plugin] {
        &[Plugin::SmartFasteners]
    }

    fn parts(&self, values: &ParamValues) -> Result<Parts> {
        let height = values.number("desk_height")?;
        let width = values.number("desk_width")?;
        let depth = values.number("desk_depth")?;
        let storage_height = values.number("storage_height")?;
        let storage_depth = values.number("storage_depth")?;

        let top = height + storage_height;
        let storage_y = depth - storage_depth;
        let desk_x = (0.0, width - 2.0);
        let storage_x = (-1.0, width - 1.0);

        Ok(parts![
            Part::panel_xy(desk_x, (0.0, depth), height),
            Part::panel_xy(storage_x, (storage_y, depth), top),
            // posts
            Part::beam_z(1, 0, (0.0, height)),
            Part::beam_z(-1, storage_y, (0.0, top)),
            Part::beam_z(-1, depth - 1.0, (0.0, top)),
            Part::beam_z(width - 4.0, 0, (0.0, height)),
            Part::beam_z(width - 2.0, storage_y, (0.0, top)),
            Part::beam_z(width - 2.0, depth - 1.0, (0.0, top)),
            // side rails
            Part::beam_y(0, (0.0, depth), 0),
            Part::beam_y(width - 3.0, (0.0, depth), 0),
            Part::beam_y(0, (0.0, depth), height - 2.0),
            Part::beam_y(width - 3.0, (0.0, depth), height - 2.0),
            Part::beam_y(0, (storage_y, depth), top - 2.0),
            Part::beam_y(width - 3.0, (storage_y, depth), top - 2.0),
            // feet
            Part::beam_x((0, 2), 1, 1),
            Part::beam_x((-1, 1), storage_y + 1.0, 1),
            Part::beam_x((-1, 1), depth - 2.0, 1),
            Part::beam_x((width - 4.0, width - 2.0), 1, 1),
            Part::beam_x((width - 3.0, width - 1.0), storage_y + 1.0, 1),
            Part::beam_x((width - 3.0, width - 1.0), depth - 2.0, 1),
            // cross rails under the desk and the shelf
            Part::beam_x(desk_x, 1, height - 1.0),
            Part::beam_x(desk_x, (storage_y / 2.0).floor() + 1.0, height - 1.0),
            Part::beam_x(storage_x, storage_y + 1.0, height - 1.0),
            Part::beam_x(storage_x, depth - 2.0, height - 1.0),
            Part::beam_x(storage_x, storage_y + 1.0, top - 1.0),
            Part::beam_x(storage_x, depth - 2.0, top - 1.0),
        ])
    }
}
