use gridparts::{parts, Part, PartNode, Parts};

use super::common::{half_ceil, half_floor, steps};
use crate::{ParamValues, Parameter, Plugin, Preset, Product, Result, Schema};

/// Shelves on two wall posts, alternating which side they reach out to.
pub struct WallShelvesHorizontal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Centre,
    Left,
    Right,
}

struct Layout {
    post_spacing: f64,
    panel_width: f64,
    panel_depth: f64,
    beam_width: f64,
}

impl Layout {
    fn left_post(&self) -> f64 {
        -half_floor(self.post_spacing)
    }

    fn right_post(&self) -> f64 {
        half_ceil(self.post_spacing)
    }

    fn posts(&self, height: f64) -> Parts {
        parts![
            Part::beam_z(self.left_post(), 1, (0.0, height)),
            Part::beam_z(self.right_post(), 1, (0.0, height)),
        ]
    }

    fn shelf(&self, z: f64, align: Align) -> Parts {
        let (left, right) = (self.left_post(), self.right_post());
        let overhang = self.panel_width - self.beam_width;

        let (beam, panel) = match align {
            Align::Centre => (
                (-half_floor(self.beam_width), half_ceil(self.beam_width)),
                (-half_floor(self.panel_width), half_ceil(self.panel_width)),
            ),
            Align::Left => {
                let edge = right + half_ceil(overhang);
                ((right, right - self.beam_width), (edge, edge - self.panel_width))
            }
            Align::Right => {
                let edge = left - half_floor(overhang);
                ((left, left + self.beam_width), (edge, edge + self.panel_width))
            }
        };

        parts![
            Part::beam_y(left + 1.0, (0, 2), z - 2.0),
            Part::beam_y(right - 1.0, (0, 2), z - 2.0),
            Part::beam_x(beam, 0, z - 1.0),
            Part::panel_xy(panel, (0.0, -self.panel_depth), z),
        ]
    }
}

impl Product for WallShelvesHorizontal {
    fn id(&self) -> &'static str {
        "wall-shelves-horizontal"
    }

    fn label(&self) -> &'static str {
        "Wall Shelves Horizontal"
    }

    fn parameters(&self) -> Schema {
        Schema::new(vec![
            Parameter::number("height", "Height", "h", 10, 60).step(5),
            Parameter::number("shelf_panel_width", "Shelf panel width", "spw", 10, 30).step(5),
            Parameter::number("shelf_panel_depth", "Shelf panel depth", "spd", 2, 5),
            Parameter::number("shelf_beam_width", "Shelf beam width", "sbw", 10, 30).step(5),
            Parameter::number("post_spacing", "Post spacing", "ps", 5, 15),
            Parameter::number("shelf_spacing", "Shelf spacing", "ss", 4, 15),
            Parameter::number("initial_shelf_offset", "Initial shelf offset", "iso", 0, 10),
        ])
    }

    fn presets(&self) -> Vec<Preset> {
        vec![Preset::new("default", "Default")
            .with("height", 30)
            .with("shelf_panel_width", 30)
            .with("shelf_panel_depth", 3)
            .with("shelf_beam_width", 20)
            .with("post_spacing", 10)
            .with("shelf_spacing", 6)
            .with("initial_shelf_offset", 3)]
    }

    fn plugins(&self) -> &'static [Plugin] {
        &[Plugin::SmartFasteners]
    }

    fn parts(&self, values: &ParamValues) -> Result<Parts> {
        let height = values.number("height")?;
        let spacing = values.number("shelf_spacing")?;
        let offset = values.number("initial_shelf_offset")?;
        let layout = Layout {
            post_spacing: values.number("post_spacing")?,
            panel_width: values.number("shelf_panel_width")?,
            panel_depth: values.number("shelf_panel_depth")?,
            beam_width: values.number("shelf_beam_width")?,
        };

        let count = ((height - offset - 2.0) / spacing).ceil();
        let last = count - 1.0;
        let shelves: Parts = steps(count)
            .map(|i| {
                let z = if i == last { height } else { 2.0 + offset + i * spacing };
                let align = if i == 0.0 || i == last {
                    Align::Centre
                } else if i % 2.0 == 1.0 {
                    Align::Left
                } else {
                    Align::Right
                };
                PartNode::from(layout.shelf(z, align))
            })
            .collect();

        Ok(parts![layout.posts(height), shelves])
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::products::build;

    #[test]
    fn test_shelves_alternate() {
        let parts = build(&WallShelvesHorizontal, "default");
        // ceil(25 / 6) shelves, the last at the very top
        assert_eq!(parts.len(), 2 + 5 * 4);
        assert_eq!(parts[5], Part::panel_xy((-15, 15), (0, -3), 5));
        assert_eq!(parts[8], Part::beam_x((5, -15), 0, 10));
        assert_eq!(parts[9], Part::panel_xy((10, -20), (0, -3), 11));
        assert_eq!(parts[12], Part::beam_x((-5, 15), 0, 16));
        assert_eq!(parts[13], Part::panel_xy((-10, 20), (0, -3), 17));
        assert_eq!(parts[21], Part::panel_xy((-15, 15), (0, -3), 30));
    }
}
