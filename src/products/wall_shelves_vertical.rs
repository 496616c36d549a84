use gridparts::{parts, Part, PartNode, Parts};

use super::common::{half_ceil, half_floor, steps};
use crate::{ParamValues, Parameter, Plugin, Preset, Product, Result, Schema};

/// A single wall post with shelves alternating either side of it.
pub struct WallShelvesVertical;

/// A shelf on the left (`side` -1) or right (`side` 1) of the post, its panel
/// pushed out sideways by `offset`.
fn shelf(width: f64, depth: f64, offset: f64, side: f64, z: f64) -> Parts {
    let (bracket, arm) = if side < 0.0 { ((-1.0, 1.0), -1.0) } else { ((0.0, 2.0), 1.0) };
    let shift = side * offset;

    parts![
        Part::beam_x(bracket, -1, z - 2.0),
        Part::beam_y(arm, (0.0, -depth), z - 1.0),
        Part::panel_xy(
            (half_floor(-width) + shift, half_ceil(width) + shift),
            (-1.0, -1.0 - depth),
            z
        ),
    ]
}

impl Product for WallShelvesVertical {
    fn id(&self) -> &'static str {
        "wall-shelves-vertical"
    }

    fn label(&self) -> &'static str {
        "Wall Shelves Vertical"
    }

    fn parameters(&self) -> Schema {
        Schema::new(vec![
            Parameter::number("height", "Height", "h", 10, 60).step(5),
            Parameter::number("shelf_width", "Shelf width", "sw", 4, 10),
            Parameter::number("shelf_depth", "Shelf depth", "sd", 5, 10).step(5),
            Parameter::number("ladder_offset", "Ladder offset", "lo", 0, 5),
            Parameter::number("shelf_spacing", "Shelf spacing", "ss", 4, 15),
            Parameter::number("initial_shelf_offset", "Initial shelf offset", "iso", 0, 10),
        ])
    }

    fn presets(&self) -> Vec<Preset> {
        let preset = |id: &str, label: &str, ladder: i32| {
            Preset::new(id, label)
                .with("height", 30)
                .with("shelf_width", 8)
                .with("shelf_depth", 10)
                .with("ladder_offset", ladder)
                .with("shelf_spacing", 7)
                .with("initial_shelf_offset", 0)
        };
        vec![preset("default", "Default", 0), preset("cat-ladder", "Cat Ladder", 3)]
    }

    fn plugins(&self) -> &'static [Plugin] {
        &[Plugin::SmartFasteners]
    }

    fn parts(&self, values: &ParamValues) -> Result<Parts> {
        let height = values.number("height")?;
        let width = values.number("shelf_width")?;
        let depth = values.number("shelf_depth")?;
        let ladder = values.number("ladder_offset")?;
        let spacing = values.number("shelf_spacing")?;
        let offset = values.number("initial_shelf_offset")?;

        let count = ((height - offset) / spacing).ceil();
        let shelves: Parts = steps(count)
            .map(|i| {
                let z = if i == count - 1.0 { height } else { 2.0 + offset + i * spacing };
                let side = if i % 2.0 == 0.0 { -1.0 } else { 1.0 };
                PartNode::from(shelf(width, depth, ladder, side, z))
            })
            .collect();

        Ok(parts![Part::beam_z(0, 0, (0.0, height)), shelves])
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::products::build;

    #[test]
    fn test_cat_ladder_staggers_shelves() {
        let parts = build(&WallShelvesVertical, "cat-ladder");
        // ceil(30 / 7) shelves
        assert_eq!(parts.len(), 1 + 5 * 3);
        assert_eq!(parts[3], Part::panel_xy((-7, 1), (-1, -11), 2));
        assert_eq!(parts[5], Part::beam_y(1, (0, -10), 8));
        assert_eq!(parts[6], Part::panel_xy((-1, 7), (-1, -11), 9));
        assert_eq!(parts[15], Part::panel_xy((-7, 1), (-1, -11), 30));
    }
}
