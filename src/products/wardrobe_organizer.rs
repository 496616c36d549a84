use gridparts::{parts, Fit, Part, PartNode, Parts, Span};

use super::common::{deck, half_floor, side_wall, steps};
use crate::{ParamValues, Parameter, Plugin, Preset, Product, Result, Schema};

/// Shelves on one side and an open hanging bay on the other.
pub struct WardrobeOrganizer;

impl Product for WardrobeOrganizer {
    fn id(&self) -> &'static str {
        "wardrobe-organizer"
    }

    fn label(&self) -> &'static str {
        "Wardrobe Organizer"
    }

    fn parameters(&self) -> Schema {
        Schema::new(vec![
            Parameter::number("width", "Width", "w", 10, 60).step(5),
            Parameter::number("depth", "Depth", "d", 5, 20).step(5),
            Parameter::number("height", "Height", "h", 20, 60).step(5),
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
                .with("width", 40)
        };
        vec![
            preset("regular", "Regular", 10, 40, 10),
            preset("tall", "Tall", 10, 60, 10),
            preset("shallow", "Shallow", 5, 40, 10),
            preset("deep", "Deep", 20, 40, 20),
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

        let shelf_width = width - half_floor(width);
        let divider = shelf_width + 1.0;
        let walls = [0.0, divider, width + 1.0];
        let rise = Span(1.0, height + 1.0);

        let sides: Parts = if panel_sides {
            walls
                .iter()
                .enumerate()
                .map(|(i, &x)| PartNode::from(side_wall(x, depth, rise, (i == 0).then_some(Fit::Top))))
                .collect()
        } else {
            walls
                .iter()
                .map(|&x| {
                    PartNode::from(parts![
                        Part::beam_z(x, depth - 1.0, rise),
                        Part::beam_z(x, 0, rise),
                    ])
                })
                .collect()
        };

        let shelves: Parts = steps((height / shelf_height).floor() - 1.0)
            .map(|i| {
                let z = height - (i + 1.0) * shelf_height + 1.0;
                PartNode::from(parts![
                    deck(Span(1.0, divider), depth, z),
                    Part::beam_y(1, (0.0, depth), z - 1.0),
                    Part::beam_y(shelf_width, (0.0, depth), z - 1.0),
                ])
            })
            .collect();

        Ok(parts![
            sides,
            // base
            Part::beam_y(width, (0.0, depth), 1),
            Part::beam_y(1, (0.0, depth), 1),
            Part::beam_y(shelf_width, (0.0, depth), 1),
            Part::beam_x((1.0, width + 1.0), 0, 0),
            Part::beam_x((1.0, width + 1.0), depth - 1.0, 0),
            Part::panel_xy((1.0, divider), (0.0, depth), 2),
            shelves,
            // top
            deck(Span(1.0, width + 1.0), depth, height + 1.0),
            Part::beam_y(1, (0.0, depth), height),
            Part::beam_y(shelf_width, (0.0, depth), height),
            Part::beam_y(width, (0.0, depth), height),
        ])
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::products::{build, build_with};

    #[test]
    fn test_regular() {
        let parts = build(&WardrobeOrganizer, "regular");
        // six posts, five base parts, three shelves, a top panel and three rails
        assert_eq!(parts.len(), 6 + 6 + 3 * 3 + 1 + 3);
        assert_eq!(parts[2], Part::beam_z(21, 9, (1, 41)));
        assert_eq!(parts[12], Part::panel_xy((1, 21), (0, 10), 31));
        assert_eq!(parts[21], Part::panel_xy((1, 41), (0, 10), 41));
    }

    #[test]
    fn test_panel_sides() {
        let parts = build_with(&WardrobeOrganizer, "regular", &[("panel_sides", true.into())]);
        assert_eq!(parts[0], Part::panel_yz(0, (0, 10), (1, 41)).with_fit(Fit::Top));
        assert_eq!(parts[1], Part::panel_yz(21, (0, 10), (1, 41)));
        assert_eq!(parts[2], Part::panel_yz(41, (0, 10), (1, 41)));
    }
}
