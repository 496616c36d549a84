use gridparts::{parts, Part, Parts};

use super::common::{half_ceil, half_floor};
use crate::{ParamValues, Parameter, Plugin, Preset, Product, Result, Schema};

/// A narrow table whose top overhangs its base at both ends.
pub struct ConsoleTable;

impl Product for ConsoleTable {
    fn id(&self) -> &'static str {
        "console-table"
    }

    fn label(&self) -> &'static str {
        "Console Table"
    }

    fn parameters(&self) -> Schema {
        Schema::new(vec![
            Parameter::number("base_width", "Base width", "bw", 10, 30).step(5),
            Parameter::number("table_width", "Table width", "tw", 10, 30).step(5),
            Parameter::number("depth", "Depth", "d", 5, 20),
            Parameter::number("height", "Height", "h", 10, 30).step(5),
        ])
    }

    fn presets(&self) -> Vec<Preset> {
        vec![Preset::new("default", "Default")
            .with("base_width", 20)
            .with("table_width", 30)
            .with("depth", 8)
            .with("height", 25)]
    }

    fn plugins(&self) -> &'static [Plugin] {
        &[Plugin::SmartFasteners]
    }

    fn parts(&self, values: &ParamValues) -> Result<Parts> {
        let base = values.number("base_width")?;
        let table = values.number("table_width")?;
        let depth = values.number("depth")?;
        let height = values.number("height")?;

        let overhang = table - base;
        let top = (-half_ceil(overhang), base + half_floor(overhang));

        Ok(parts![
            Part::beam_z(0, 0, (0.0, height)),
            Part::beam_z(0, depth - 1.0, (0.0, height)),
            Part::beam_z(base - 1.0, 0, (0.0, height)),
            Part::beam_z(base - 1.0, depth - 1.0, (0.0, height)),
            Part::beam_x((0.0, base), 1, 0),
            Part::beam_x((0.0, base), depth - 2.0, 0),
            Part::beam_x(top, 1, height - 1.0),
            Part::beam_x(top, depth - 2.0, height - 1.0),
            Part::beam_y(1, (0.0, depth), 1),
            Part::beam_y(base - 2.0, (0.0, depth), 1),
            Part::beam_y(1, (0.0, depth), height - 2.0),
            Part::beam_y(base - 2.0, (0.0, depth), height - 2.0),
            Part::panel_xy(top, (0.0, depth), height),
        ])
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::products::build_with;

    #[test]
    fn test_uneven_overhang_favours_the_left() {
        let parts = build_with(&ConsoleTable, "default", &[("table_width", 25.into())]);
        assert_eq!(parts[12], Part::panel_xy((-3, 22), (0, 8), 25));
    }
}
