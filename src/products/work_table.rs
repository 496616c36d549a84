use gridparts::{parts, Part, PartNode, Parts};

use super::common::steps;
use crate::{ParamValues, Parameter, Plugin, Preset, Product, Result, Schema};

const PANEL_WIDTH: f64 = 10.0;
const SUPPORT_SPACING: f64 = 20.0;

/// A long table with a row of leg pairs and optional bottom bracing.
pub struct WorkTable;

/// Where the leg pairs go along the width, and which way each one's
/// rails lean to stay inside the table.
struct Legs {
    spacing: f64,
    count: f64,
}

impl Legs {
    fn new(width: f64) -> Self {
        let supports = (width / SUPPORT_SPACING).ceil() + 1.0;
        Legs {
            spacing: (width / (supports - 1.0)).floor(),
            count: supports,
        }
    }

    /// Every leg position but the last, which always sits flush at the far end.
    fn inner(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        steps(self.count - 1.0).map(move |i| {
            let lean = if i / self.count < 0.5 { 1.0 } else { -1.0 };
            (i * self.spacing, lean)
        })
    }
}

impl Product for WorkTable {
    fn id(&self) -> &'static str {
        "work-table"
    }

    fn label(&self) -> &'static str {
        "Work Table"
    }

    fn parameters(&self) -> Schema {
        Schema::new(vec![
            Parameter::number("width", "Width", "w", 10, 60).step(5),
            Parameter::number("depth", "Depth", "d", 10, 30).step(10),
            Parameter::number("height", "Height", "h", 8, 30),
            Parameter::boolean("include_panels", "Top panels", "p").describe("Should include panels on top"),
            Parameter::boolean("widthwise_bottoms", "Width-wise bottoms", "bw")
                .describe("Should include width-wise bottom beams"),
            Parameter::boolean("depthwise_bottoms", "Depth-wise bottoms", "bd")
                .describe("Should include depth-wise bottom beams"),
        ])
    }

    fn presets(&self) -> Vec<Preset> {
        let sizes = [("large", "Large", 60, 30), ("medium", "Medium", 30, 30), ("small", "Small", 20, 20)];
        let heights = [("", "", 20, false), ("-tall", " Tall", 30, true), ("-short", " Short", 10, false)];

        sizes
            .iter()
            .flat_map(|&(size_id, size_label, width, depth)| {
                heights.iter().map(move |&(suffix, label_suffix, height, bottoms)| {
                    Preset::new(&format!("{size_id}{suffix}"), &format!("{size_label}{label_suffix}"))
                        .with("depth", depth)
                        .with("depthwise_bottoms", bottoms)
                        .with("widthwise_bottoms", bottoms)
                        .with("height", height)
                        .with("include_panels", true)
                        .with("width", width)
                })
            })
            .collect()
    }

    fn plugins(&self) -> &'static [Plugin] {
        &[Plugin::SmartFasteners]
    }

    fn parts(&self, values: &ParamValues) -> Result<Parts> {
        let width = values.number("width")?;
        let depth = values.number("depth")?;
        let height = values.number("height")?;
        let panels = values.flag("include_panels")?;
        let widthwise = values.flag("widthwise_bottoms")?;
        let depthwise = values.flag("depthwise_bottoms")?;

        let legs = Legs::new(width);
        let across = (0.0, width);
        let front = depth - 1.0;

        let top: Parts = steps((depth / PANEL_WIDTH).floor())
            .map(|i| PartNode::from(Part::panel_xy(across, (i * PANEL_WIDTH, (i + 1.0) * PANEL_WIDTH), height)))
            .collect();

        // depth-wise rails beside every leg pair at height `z`
        let rails = |z: f64| -> Parts {
            let inner: Parts = legs
                .inner()
                .map(|(x, lean)| PartNode::from(Part::beam_y(x + lean, (0.0, depth), z)))
                .collect();
            parts![inner, Part::beam_y(width - 1.0, (0.0, depth), z)]
        };

        let posts: Parts = legs
            .inner()
            .map(|(x, _)| {
                PartNode::from(parts![
                    Part::beam_z(x, 1, (0.0, height)),
                    Part::beam_z(x, depth - 2.0, (0.0, height)),
                ])
            })
            .collect();

        // short stubs tying each leg to the bottom rails it lacks
        let x_stubs = || -> Parts {
            let inner: Parts = legs
                .inner()
                .map(|(x, lean)| {
                    PartNode::from(parts![
                        Part::beam_x((x, x + 2.0 * lean), 0, 2),
                        Part::beam_x((x, x + 2.0 * lean), front, 2),
                    ])
                })
                .collect();
            parts![
                inner,
                Part::beam_x((width - 2.0, width), 0, 2),
                Part::beam_x((width - 2.0, width), front, 2),
            ]
        };
        let y_stubs = || -> Parts {
            let inner: Parts = legs
                .inner()
                .map(|(x, lean)| {
                    PartNode::from(parts![
                        Part::beam_y(x + lean, (0, 2), 1),
                        Part::beam_y(x + lean, (depth - 2.0, depth), 1),
                    ])
                })
                .collect();
            parts![
                inner,
                Part::beam_y(width - 1.0, (0, 2), 1),
                Part::beam_y(width - 1.0, (depth - 2.0, depth), 1),
            ]
        };

        Ok(parts![
            panels.then_some(top),
            rails(height - 1.0),
            posts,
            Part::beam_z(width - 2.0, 1, (0.0, height)),
            Part::beam_z(width - 2.0, depth - 2.0, (0.0, height)),
            Part::beam_x(across, 0, height - 2.0),
            Part::beam_x(across, front, height - 2.0),
            depthwise.then(|| parts![rails(1.0), (!widthwise).then(x_stubs)]),
            widthwise.then(|| {
                parts![
                    Part::beam_x(across, 0, 2),
                    Part::beam_x(across, front, 2),
                    (!depthwise).then(y_stubs),
                ]
            }),
        ])
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::products::{build, build_with};

    #[test]
    fn test_leg_layout() {
        let legs = Legs::new(60.0);
        assert_eq!(legs.inner().collect::<Vec<_>>(), vec![(0.0, 1.0), (20.0, 1.0), (40.0, -1.0)]);

        let parts = build(&WorkTable, "large");
        assert_eq!(parts.len(), 3 + 4 + 3 * 2 + 2 + 2);
        assert_eq!(parts[5], Part::beam_y(39, (0, 30), 19));
    }

    #[test]
    fn test_bottom_bracing() {
        let both = build(&WorkTable, "small-tall");
        let only_depthwise = build_with(&WorkTable, "small-tall", &[("widthwise_bottoms", false.into())]);
        let only_widthwise = build_with(&WorkTable, "small-tall", &[("depthwise_bottoms", false.into())]);

        // one inner leg pair on a 20-wide table: bottom rails, plus either the
        // width-wise beams or a stub beside each leg
        assert_eq!(both.len(), 10 + 2 + 2);
        assert_eq!(only_depthwise.len(), 10 + 2 + 4);
        assert_eq!(only_widthwise.len(), 10 + 2 + 4);
        assert!(only_depthwise.contains(&Part::beam_x((0, 2), 0, 2)));
        assert!(only_widthwise.contains(&Part::beam_y(1, (18, 20), 1)));
    }
}
