use gridparts::{parts, Fit, Part, Parts, Span};

use super::common::{deck, half_floor, side_wall};
use crate::{ParamValues, Parameter, Plugin, Preset, Product, Result, Schema};

/// A small table with a shelf halfway down.
pub struct SideTable;

fn shelf(width: f64, depth: f64, z: f64) -> Parts {
    parts![
        deck(Span(1.0, width + 1.0), depth, z),
        Part::beam_y(1, (0.0, depth), z - 1.0),
        Part::beam_y(width, (0.0, depth), z - 1.0),
    ]
}

impl Product for SideTable {
    fn id(&self) -> &'static str {
        "side-table"
    }

    fn label(&self) -> &'static str {
        "Side Table"
    }

    fn parameters(&self) -> Schema {
        Schema::new(vec![
            Parameter::number("width", "Width", "w", 10, 20).step(5),
            Parameter::number("depth", "Depth", "d", 5, 20).step(5),
            Parameter::number("height", "Height", "h", 10, 20).step(5),
            Parameter::boolean("panel_sides", "Use panels for sides", "ps"),
        ])
    }

    fn presets(&self) -> Vec<Preset> {
        let preset = |id: &str, label: &str, depth: i32, height: i32, width: i32| {
            Preset::new(id, label)
                .with("depth", depth)
                .with("height", height)
                .with("panel_sides", false)
                .with("width", width)
        };
        vec![
            preset("regular", "Regular", 10, 15, 15),
            preset("short", "Short", 10, 10, 15),
            preset("tall", "Tall", 10, 20, 15),
            preset("narrow", "Narrow", 10, 15, 10),
            preset("wide", "Wide", 10, 15, 20),
            preset("shallow", "Shallow", 5, 15, 15),
            preset("deep", "Deep", 20, 15, 15),
        ]
    }

    fn plugins(&self) -> &'static [Plugin] {
        &[Plugin::SmartFasteners]
    }

    fn parts(&self, values: &ParamValues) -> Result<Parts> {
        let width = values.number("width")?;
        let depth = values.number("depth")?;
        let height = values.number("height")?;
        let panel_sides = values.flag("panel_sides")?;

        let sides = if panel_sides {
            parts![
                side_wall(0.0, depth, Span(0.0, height), Some(Fit::Top)),
                side_wall(width + 1.0, depth, Span(0.0, height), None),
            ]
        } else {
            parts![
                Part::beam_z(0, depth - 1.0, (0.0, height)),
                Part::beam_z(0, 0, (0.0, height)),
                Part::beam_z(width + 1.0, depth - 1.0, (0.0, height)),
                Part::beam_z(width + 1.0, 0, (0.0, height)),
            ]
        };

        Ok(parts![
            sides,
            shelf(width, depth, half_floor(height)),
            shelf(width, depth, height),
        ])
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::products::build;

    #[test]
    fn test_middle_shelf_is_floored() {
        let parts = build(&SideTable, "regular");
        assert_eq!(parts.len(), 4 + 3 + 3);
        assert_eq!(parts[4], Part::panel_xy((1, 16), (0, 10), 7));
        assert_eq!(parts[7], Part::panel_xy((1, 16), (0, 10), 15));
    }
}
