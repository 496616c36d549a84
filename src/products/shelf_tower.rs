use gridparts::{parts, Fit, Part, PartNode, Parts, Span};

use super::common::{deck, side_wall, steps};
use crate::{ParamValues, Parameter, Plugin, Preset, Product, Result, Schema};

/// Evenly spaced shelves between posts or solid side panels.
pub struct ShelfTower;

impl Product for ShelfTower {
    fn id(&self) -> &'static str {
        "shelf-tower"
    }

    fn label(&self) -> &'static str {
        "Shelf Tower"
    }

    fn parameters(&self) -> Schema {
        Schema::new(vec![
            Parameter::number("width", "Width", "w", 10, 30).step(5),
            Parameter::number("depth", "Depth", "d", 5, 20).step(5),
            Parameter::number("height", "Height", "h", 10, 60).step(5),
            Parameter::number("shelf_height", "Height per shelf", "hs", 4, 20),
            Parameter::boolean("panel_sides", "Use panels for sides", "ps"),
        ])
    }

    fn presets(&self) -> Vec<Preset> {
        let preset = |id: &str, label: &str, depth: i32, height: i32, shelf: i32| {
            Preset::new(id, label)
                .with("depth", depth)
                .with("height", height)
                .with("shelf_height", shelf)
                .with("panel_sides", false)
                .with("width", 15)
        };
        vec![
            preset("regular", "Regular", 10, 30, 10),
            preset("short", "Short", 10, 15, 5),
            preset("tall", "Tall", 10, 60, 10),
            preset("shallow", "Shallow", 5, 20, 5),
            preset("deep", "Deep", 20, 30, 10),
        ]
    }

    fn plugins(&self) -> &'static [Plugin] {
        &[Plugin::SmartFasteners]
    }

    fn parts(&self, values: &ParamValues) -> Result<Parts> {
        let width = values.number("width")?;
        let depth = values.number("depth")?;
        let height = values.number("height")?;
        let shelf_height = values.number("shelf_height")?;
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

        let shelves: Parts = steps((height / shelf_height).floor())
            .map(|i| {
                let z = height - i * shelf_height;
                PartNode::from(parts![
                    deck(Span(1.0, width + 1.0), depth, z),
                    Part::beam_y(1, (0.0, depth), z - 1.0),
                    Part::beam_y(width, (0.0, depth), z - 1.0),
                ])
            })
            .collect();

        Ok(parts![sides, shelves])
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::products::{build, build_with};

    #[test]
    fn test_shelves_count_down_from_the_top() {
        let parts = build(&ShelfTower, "regular");
        assert_eq!(parts.len(), 4 + 3 * 3);
        assert_eq!(parts[4], Part::panel_xy((1, 16), (0, 10), 30));
        assert_eq!(parts[10], Part::panel_xy((1, 16), (0, 10), 10));
    }

    #[test]
    fn test_panel_sides() {
        let parts = build_with(&ShelfTower, "deep", &[("panel_sides", true.into())]);
        assert_eq!(parts[0], Part::panel_yz(0, (0, 10), (0, 30)).with_fit(Fit::Top));
        assert_eq!(parts[1], Part::panel_yz(0, (10, 20), (0, 30)).with_fit(Fit::Top));
        assert_eq!(parts[2], Part::panel_yz(16, (0, 10), (0, 30)));
    }
}
