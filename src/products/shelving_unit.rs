use gridparts::{parts, Part, PartNode, Parts};

use super::common::{steps, supports};
use crate::{ParamValues, Parameter, Preset, Product, Result, Schema};

/// Open shelving with extra uprights under wide shelves.
pub struct ShelvingUnit;

fn posts(width: f64, depth: f64, height: f64) -> Parts {
    let supports: Parts = supports(width)
        .into_iter()
        .map(|s| {
            PartNode::from(parts![
                Part::beam_z(s.offset, 0, (0.0, height)),
                Part::beam_z(s.offset, depth - 1.0, (0.0, height)),
            ])
        })
        .collect();

    parts![
        Part::beam_z(0, 0, (0.0, height)),
        Part::beam_z(width - 1.0, 0, (0.0, height)),
        Part::beam_z(0, depth - 1.0, (0.0, height)),
        Part::beam_z(width - 1.0, depth - 1.0, (0.0, height)),
        supports,
    ]
}

fn shelf(width: f64, depth: f64, z: f64) -> Parts {
    let supports: Parts = supports(width)
        .into_iter()
        .map(|s| PartNode::from(Part::beam_y(s.offset + s.nudge, (0.0, depth), z - 2.0)))
        .collect();

    parts![
        Part::beam_y(1, (0.0, depth), z - 2.0),
        Part::beam_y(width - 2.0, (0.0, depth), z - 2.0),
        Part::beam_x((0.0, width), 1, z - 1.0),
        Part::beam_x((0.0, width), depth - 2.0, z - 1.0),
        Part::panel_xy((0.0, width), (1.0, depth - 1.0), z),
        supports,
    ]
}

impl Product for ShelvingUnit {
    fn id(&self) -> &'static str {
        "shelving-unit"
    }

    fn label(&self) -> &'static str {
        "Shelving Unit"
    }

    fn parameters(&self) -> Schema {
        Schema::new(vec![
            Parameter::number("width", "Width", "w", 10, 60).step(5),
            Parameter::number("depth", "Depth", "d", 5, 20).step(5),
            Parameter::number("height", "Height", "h", 5, 60),
            Parameter::number("shelf_spacing", "Shelf spacing", "ss", 3, 15),
            Parameter::number("initial_shelf_offset", "Initial shelf offset", "iso", 0, 10),
        ])
    }

    fn presets(&self) -> Vec<Preset> {
        vec![Preset::new("default", "Default")
            .with("width", 30)
            .with("depth", 10)
            .with("height", 30)
            .with("shelf_spacing", 7)
            .with("initial_shelf_offset", 0)]
    }

    fn parts(&self, values: &ParamValues) -> Result<Parts> {
        let width = values.number("width")?;
        let depth = values.number("depth")?;
        let height = values.number("height")?;
        let spacing = values.number("shelf_spacing")?;
        let offset = values.number("initial_shelf_offset")?;

        // the top shelf is always at the full height
        let lower = ((height - offset - 2.0) / spacing).floor();
        let shelves: Parts = steps(lower)
            .map(|i| PartNode::from(shelf(width, depth, 2.0 + offset + i * spacing)))
            .collect();

        Ok(parts![posts(width, depth, height), shelves, shelf(width, depth, height)])
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::products::{build, build_with};

    #[test]
    fn test_shelf_spacing() {
        let parts = build(&ShelvingUnit, "default");
        // 28 / 7 gives four lower shelves plus the top
        assert_eq!(parts.len(), 4 + 5 * 5);
        assert_eq!(parts[8], Part::panel_xy((0, 30), (1, 9), 2));
        assert_eq!(parts[13], Part::panel_xy((0, 30), (1, 9), 9));
        assert_eq!(parts[28], Part::panel_xy((0, 30), (1, 9), 30));
    }

    #[test]
    fn test_wide_units_get_middle_supports() {
        let parts = build_with(&ShelvingUnit, "default", &[("width", 45.into())]);
        assert_eq!(parts[4], Part::beam_z(22, 0, (0, 30)));
        assert_eq!(parts[5], Part::beam_z(22, 9, (0, 30)));
        assert_eq!(parts[11], Part::beam_y(21, (0, 10), 0));
    }
}
