use gridparts::{parts, Part, Parts, Span};

use super::common::deck;
use crate::{ParamValues, Parameter, Plugin, Preset, Product, Result, Schema};

/// A low table with its legs set in from the edges.
pub struct CoffeeTable;

impl Product for CoffeeTable {
    fn id(&self) -> &'static str {
        "coffee-table"
    }

    fn label(&self) -> &'static str {
        "Coffee Table"
    }

    fn parameters(&self) -> Schema {
        Schema::new(vec![
            Parameter::number("width", "Width", "w", 5, 30).step(5),
            Parameter::number("depth", "Depth", "d", 5, 30).step(5),
            Parameter::number("height", "Height", "h", 5, 20),
        ])
    }

    fn presets(&self) -> Vec<Preset> {
        vec![Preset::new("regular", "Regular")
            .with("depth", 15)
            .with("height", 10)
            .with("width", 15)]
    }

    fn plugins(&self) -> &'static [Plugin] {
        &[Plugin::SmartFasteners]
    }

    fn parts(&self, values: &ParamValues) -> Result<Parts> {
        let width = values.number("width")?;
        let depth = values.number("depth")?;
        let height = values.number("height")?;

        Ok(parts![
            deck(Span(0.0, width), depth, height),
            Part::beam_z(1, 1, (0.0, height)),
            Part::beam_z(width - 2.0, 1, (0.0, height)),
            Part::beam_z(1, depth - 2.0, (0.0, height)),
            Part::beam_z(width - 2.0, depth - 2.0, (0.0, height)),
            Part::beam_x((0.0, width), 0, height - 2.0),
            Part::beam_x((0.0, width), depth - 1.0, height - 2.0),
            Part::beam_y(0, (0.0, depth), height - 1.0),
            Part::beam_y(width - 1.0, (0.0, depth), height - 1.0),
        ])
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::products::build;

    #[test]
    fn test_top_is_split_into_panels() {
        let parts = build(&CoffeeTable, "regular");
        assert_eq!(parts[0], Part::panel_xy((0, 15), (0, 10), 10));
        assert_eq!(parts[1], Part::panel_xy((0, 15), (10, 15), 10));
        assert_eq!(parts.len(), 2 + 8);
    }
}
