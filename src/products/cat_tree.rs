//! A four-post trunk with leaves spiralling up around it.

use gridparts::{parts, Part, PartNode, Parts, Span};

use super::common::{half_ceil, half_floor, steps};
use crate::{ParamValues, Parameter, Plugin, Preset, Product, Result, Schema};

pub struct CatTree;

/// The span of a centred run of `length` units, shifted by `nudge`.
fn centred(length: f64, nudge: f64) -> Span {
    Span(-half_floor(length) + nudge, half_ceil(length) + nudge)
}

fn posts(height: f64) -> Parts {
    parts![
        Part::beam_z(-1, -1, (0.0, height)),
        Part::beam_z(1, -1, (0.0, height)),
        Part::beam_z(-1, 1, (0.0, height)),
        Part::beam_z(1, 1, (0.0, height)),
    ]
}

fn base(leaf_length: f64, leaf_width: f64) -> Parts {
    let base_length = ((leaf_length + 3.0) / 5.0).ceil() * 5.0;
    let feet = centred(base_length, 0.0);

    parts![
        Part::beam_y(0, feet, 0),
        Part::panel_xy(centred(leaf_width, 0.0), (-2.0, -2.0 - leaf_length), 1),
        Part::beam_x(feet, 0, 1),
        Part::beam_y(feet.start(), (-2, 3), 0),
        Part::beam_z(feet.start() + 1.0, 1, (0, 2)),
        Part::panel_xy((-2.0, -2.0 - leaf_length), centred(leaf_width, 1.0), 2),
        Part::beam_y(feet.end() - 1.0, (-2, 3), 0),
        Part::beam_z(half_floor(base_length) - 1.0, 1, (0, 2)),
    ]
}

/// Each branch turns a quarter around the trunk from the one below.
fn branch(index: usize, spacing: f64, leaf_length: f64, leaf_width: f64) -> Parts {
    let z = 1.0 + (index as f64 + 1.0) * spacing;
    let nudge = if ((index + 2) / 4) % 2 == 0 { 1.0 } else { 0.0 };

    match index % 4 {
        0 => parts![
            Part::beam_y(0, (-1.0, -1.0 + leaf_length), z),
            Part::panel_xy(centred(leaf_width, nudge), (2.0, 2.0 + leaf_length), z + 1.0),
        ],
        1 => parts![
            Part::beam_x((-1.0, -1.0 + leaf_length), 0, z),
            Part::panel_xy((2.0, 2.0 + leaf_length), centred(leaf_width, 1.0 - nudge), z + 1.0),
        ],
        2 => parts![
            Part::beam_y(0, (1.0, 1.0 - leaf_length), z),
            Part::panel_xy(centred(leaf_width, 1.0 - nudge), (-2.0, -2.0 - leaf_length), z + 1.0),
        ],
        _ => parts![
            Part::beam_x((1.0, 1.0 - leaf_length), 0, z),
            Part::panel_xy((-2.0, -2.0 - leaf_length), centred(leaf_width, nudge), z + 1.0),
        ],
    }
}

fn top(height: f64, leaf_length: f64, leaf_width: f64) -> Parts {
    parts![
        Part::beam_x(centred(leaf_length, 0.0), 0, height - 1.0),
        Part::panel_xy(centred(leaf_length, 0.0), centred(leaf_width, 1.0), height),
    ]
}

impl Product for CatTree {
    fn id(&self) -> &'static str {
        "cat-tree"
    }

    fn label(&self) -> &'static str {
        "Cat Tree"
    }

    fn parameters(&self) -> Schema {
        Schema::new(vec![
            Parameter::number("tree_height", "Tree height", "th", 20, 60).step(10),
            Parameter::number("branch_spacing", "Branch spacing", "bs", 1, 10),
            Parameter::number("leaf_length", "Leaf length", "ll", 5, 20).step(5),
            Parameter::number("leaf_width", "Leaf width", "lw", 4, 20),
        ])
    }

    fn presets(&self) -> Vec<Preset> {
        vec![Preset::new("regular", "Regular")
            .with("tree_height", 30)
            .with("branch_spacing", 3)
            .with("leaf_length", 10)
            .with("leaf_width", 8)]
    }

    fn plugins(&self) -> &'static [Plugin] {
        &[Plugin::SmartFasteners]
    }

    fn parts(&self, values: &ParamValues) -> Result<Parts> {
        let height = values.number("tree_height")?;
        let spacing = values.number("branch_spacing")?;
        let leaf_length = values.number("leaf_length")?;
        let leaf_width = values.number("leaf_width")?;

        let branch_count = ((height - 2.0) / spacing).floor() - 1.0;
        let branches: Parts = steps(branch_count)
            .map(|i| PartNode::from(branch(i as usize, spacing, leaf_length, leaf_width)))
            .collect();

        Ok(parts![
            posts(height),
            base(leaf_length, leaf_width),
            branches,
            top(height, leaf_length, leaf_width),
        ])
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_branches_spiral() {
        let first = branch(0, 3.0, 10.0, 8.0);
        assert_eq!(
            first,
            parts![Part::beam_y(0, (-1, 9), 4), Part::panel_xy((-3, 5), (2, 12), 5)]
        );
        let third = branch(2, 3.0, 10.0, 8.0);
        assert_eq!(
            third,
            parts![Part::beam_y(0, (1, -9), 10), Part::panel_xy((-3, 5), (-2, -12), 11)]
        );
        let fourth = branch(3, 3.0, 10.0, 8.0);
        assert_eq!(
            fourth,
            parts![Part::beam_x((1, -9), 0, 13), Part::panel_xy((-2, -12), (-4, 4), 14)]
        );
    }
}
