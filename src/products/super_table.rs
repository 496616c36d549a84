use gridparts::{parts, Part, PartNode, Parts};

use super::{
    common::panel_runs,
    frame::{Frame, Placement},
};
use crate::{ParamValues, Parameter, Plugin, Preset, Product, Result, Schema};

/// A large table frame with middle posts once it grows past 30 units.
pub struct SuperTable;

impl Product for SuperTable {
    fn id(&self) -> &'static str {
        "super-table"
    }

    fn label(&self) -> &'static str {
        "Super Table"
    }

    fn parameters(&self) -> Schema {
        Schema::new(vec![
            Parameter::number("width", "Width", "w", 20, 60).step(5),
            Parameter::number("depth", "Depth", "d", 20, 60).step(5),
            Parameter::number("height", "Height", "h", 10, 30).step(5),
            Parameter::number("overhang", "Overhang width", "ol", 0, 6)
                .describe("How many grid units should the width-wise beams overhang"),
            Parameter::boolean("include_panels", "Top panels", "p").describe("Should include panels on top"),
            Parameter::boolean("double_posts", "Double posts", "dp")
                .describe("Should the posts be doubled in depth"),
            Parameter::boolean("underside", "Underside", "u")
                .describe("Should the side width-wise beams be underneath"),
        ])
    }

    fn presets(&self) -> Vec<Preset> {
        let sizes = [("large", "Large", 60, 30), ("medium", "Medium", 30, 30), ("small", "Small", 20, 20)];
        let heights = [("", "", 20, true), ("-tall", " Tall", 30, true), ("-short", " Short", 10, false)];

        sizes
            .iter()
            .flat_map(|&(size_id, size_label, width, depth)| {
                heights.iter().map(move |&(suffix, label_suffix, height, double)| {
                    Preset::new(&format!("{size_id}{suffix}"), &format!("{size_label}{label_suffix}"))
                        .with("depth", depth)
                        .with("height", height)
                        .with("overhang", 2)
                        .with("double_posts", double)
                        .with("include_panels", true)
                        .with("underside", false)
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
        let overhang = values.number("overhang")?;
        let panels = values.flag("include_panels")?;
        let double_posts = values.flag("double_posts")?;
        let underside = values.flag("underside")?;

        let frame = Frame { height, double_posts };
        let middle_x = width > 30.0;
        let middle_y = depth > 30.0;
        let mid_x = (width / 2.0).floor();
        let mid_y = (depth / 2.0).floor();
        let post_width = frame.post_width();

        // a row of posts front to back at `x`
        let posts = |x: f64| -> Parts {
            parts![
                frame.post(x, 1.0, Placement::Start),
                middle_y.then(|| frame.post(x, mid_y, Placement::Middle)),
                frame.post(x, depth - 2.0, Placement::End),
            ]
        };

        let top: Parts = panel_runs(width)
            .into_iter()
            .map(|x| PartNode::from(Part::panel_xy(x, (0.0, depth), height)))
            .collect();

        let braces = if middle_y {
            parts![
                frame.rail_x((0.25 * depth).floor() + 1.0, width, false),
                frame.rail_x((0.75 * depth).floor() - 1.0, width, false),
            ]
        } else {
            parts![frame.rail_x(mid_y, width, false)]
        };

        Ok(parts![
            panels.then_some(top),
            posts(1.0 + overhang),
            middle_x.then(|| posts(mid_x)),
            posts(width - 2.0 - overhang),
            // rails along the width
            frame.rail_x(0.0, width, false),
            frame.rail_x(1.0 + post_width, width, underside),
            middle_y.then(|| {
                parts![
                    frame.rail_x(mid_y - 1.0, width, false),
                    frame.rail_x(mid_y + post_width, width, false),
                ]
            }),
            frame.rail_x(depth - 1.0, width, false),
            frame.rail_x(depth - 2.0 - post_width, width, underside),
            braces,
            // rails along the depth
            frame.rail_y(overhang, depth),
            frame.rail_y(overhang + 2.0, depth),
            middle_x.then(|| parts![frame.rail_y(mid_x - 1.0, depth), frame.rail_y(mid_x + 1.0, depth)]),
            frame.rail_y(width - 1.0 - overhang, depth),
            frame.rail_y(width - 3.0 - overhang, depth),
        ])
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::products::build;

    #[test]
    fn test_presets() {
        let ids: Vec<String> = SuperTable.presets().into_iter().map(|p| p.id).collect();
        assert_eq!(
            ids,
            vec![
                "large",
                "large-tall",
                "large-short",
                "medium",
                "medium-tall",
                "medium-short",
                "small",
                "small-tall",
                "small-short"
            ]
        );
        assert_eq!(SuperTable.presets()[2].label, "Large Short");
    }

    #[test]
    fn test_large_has_middle_posts() {
        let parts = build(&SuperTable, "large");
        let posts = parts.iter().filter(|p| matches!(p, Part::BeamZ { .. })).count();
        // three rows of two doubled posts
        assert_eq!(posts, 3 * 2 * 2);
        assert_eq!(parts[0], Part::panel_xy((0, 10), (0, 30), 20));
        assert_eq!(parts[6], Part::beam_z(3, 1, (0, 20)));
        assert_eq!(parts[7], Part::beam_z(3, 2, (0, 20)));
        assert_eq!(parts[9], Part::beam_z(3, 27, (0, 20)));
    }

    #[test]
    fn test_short_has_single_posts() {
        let parts = build(&SuperTable, "small-short");
        let posts = parts.iter().filter(|p| matches!(p, Part::BeamZ { .. })).count();
        assert_eq!(posts, 4);
        assert!(parts.contains(&Part::beam_x((0, 20), 2, 9)));
    }
}
