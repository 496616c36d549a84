use gridparts::{parts, Part, Parts};

use crate::{ParamValues, Parameter, Plugin, Preset, Product, Result, Schema};

/// A workbench with a bottom shelf and a high shelf across the back.
pub struct MakersWorkbench;

/// Rails and a panel closing a level at height `z`.
fn level(width: f64, depth: f64, z: f64) -> Parts {
    parts![
        Part::beam_y(1, (0.0, depth), z - 2.0),
        Part::beam_y(width - 2.0, (0.0, depth), z - 2.0),
        Part::beam_x((0.0, width), 1, z - 1.0),
        Part::beam_x((0.0, width), depth - 2.0, z - 1.0),
        Part::panel_xy((0.0, width), (1.0, depth - 1.0), z),
    ]
}

impl Product for MakersWorkbench {
    fn id(&self) -> &'static str {
        "makers-workbench"
    }

    fn label(&self) -> &'static str {
        "Makers Workbench"
    }

    fn parameters(&self) -> Schema {
        Schema::new(vec![
            Parameter::number("width", "Width", "w", 10, 30).step(5),
            Parameter::number("depth", "Depth", "d", 10, 20).step(10),
            Parameter::number("work_height", "Work height", "wh", 8, 30),
            Parameter::number("bottom_shelf_height", "Bottom shelf height", "bsh", 2, 30),
            Parameter::number("top_shelf_depth", "Top shelf depth", "tsd", 3, 10),
            Parameter::number("top_shelf_height", "Top shelf height", "tsh", 8, 30),
        ])
    }

    fn presets(&self) -> Vec<Preset> {
        vec![Preset::new("default", "Default")
            .with("width", 30)
            .with("depth", 20)
            .with("work_height", 23)
            .with("bottom_shelf_height", 4)
            .with("top_shelf_depth", 8)
            .with("top_shelf_height", 30)]
    }

    fn plugins(&self) -> &'static [Plugin] {
        &[Plugin::SmartFasteners]
    }

    fn parts(&self, values: &ParamValues) -> Result<Parts> {
        let width = values.number("width")?;
        let depth = values.number("depth")?;
        let work = values.number("work_height")?;
        let bottom = values.number("bottom_shelf_height")?;
        let shelf_depth = values.number("top_shelf_depth")?;
        let shelf = values.number("top_shelf_height")?;

        let shelf_y = (depth - 1.0, depth - 1.0 - shelf_depth);

        Ok(parts![
            Part::beam_z(0, 0, (0.0, work)),
            Part::beam_z(0, depth - 1.0, (0.0, shelf)),
            Part::beam_z(width - 1.0, 0, (0.0, work)),
            Part::beam_z(width - 1.0, depth - 1.0, (0.0, shelf)),
            level(width, depth, bottom),
            level(width, depth, work),
            // top shelf
            Part::beam_x((0.0, width), depth - 2.0, shelf - 2.0),
            Part::beam_y(1, shelf_y, shelf - 1.0),
            Part::beam_y((width / 2.0).floor(), shelf_y, shelf - 1.0),
            Part::beam_y(width - 2.0, shelf_y, shelf - 1.0),
            Part::panel_xy((0.0, width), shelf_y, shelf),
        ])
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::products::build;

    #[test]
    fn test_levels() {
        let parts = build(&MakersWorkbench, "default");
        assert_eq!(parts.len(), 4 + 5 + 5 + 5);
        assert_eq!(parts[8], Part::panel_xy((0, 30), (1, 19), 4));
        assert_eq!(parts[13], Part::panel_xy((0, 30), (1, 19), 23));
        assert_eq!(parts[18], Part::panel_xy((0, 30), (19, 11), 30));
    }
}
