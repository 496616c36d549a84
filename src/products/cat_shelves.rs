use gridparts::{parts, Axis, Fit, Part, PartNode, Parts, Span};

use crate::{ParamValues, Plugin, Product, Result};

const SHELF_WIDTH: f64 = 10.0;
const SHELF_DEPTH: f64 = 8.0;
const POST_HEIGHT: f64 = 30.0;
const POSTS_X: [f64; 5] = [0.0, 9.0, 18.0, 27.0, 36.0];
const POSTS_Y: [f64; 2] = [0.0, 9.0];

/// A climbing wall of staggered shelves between two rows of posts.
pub struct CatShelves;

/// A shelf resting on a pair of beams along `first`, optionally braced
/// underneath by a wider pair along `second`.
struct Level {
    x: Span,
    y: Span,
    z: f64,
    first: Axis,
    second: Option<Axis>,
}

impl Level {
    /// A shelf whose beams run along x.
    fn along_x(x0: f64, z: f64) -> Self {
        Level {
            x: Span(x0, x0 + SHELF_WIDTH),
            y: Span(1.0, 1.0 + SHELF_DEPTH),
            z,
            first: Axis::X,
            second: None,
        }
    }

    /// A shelf turned sideways, beams along y.
    fn along_y(x0: f64, z: f64) -> Self {
        Level {
            x: Span(x0, x0 + SHELF_DEPTH),
            y: Span(0.0, SHELF_WIDTH),
            z,
            first: Axis::Y,
            second: None,
        }
    }

    fn braced(self, second: Axis) -> Self {
        Level {
            second: Some(second),
            ..self
        }
    }

    fn parts(&self) -> Parts {
        let Level { x, y, z, .. } = *self;

        let first = match self.first {
            Axis::Y => parts![
                Part::beam_y(x.start(), y, z - 1.0),
                Part::beam_y(x.end() - 1.0, y, z - 1.0),
            ],
            _ => parts![
                Part::beam_x(x, y.start(), z - 1.0),
                Part::beam_x(x, y.end() - 1.0, z - 1.0),
            ],
        };

        let second = match self.second {
            Some(Axis::X) => parts![
                Part::beam_x((x.start() - 1.0, x.end() + 1.0), y.start() + 1.0, z - 2.0),
                Part::beam_x((x.start() - 1.0, x.end() + 1.0), y.end() - 2.0, z - 2.0),
            ],
            Some(Axis::Y) => parts![
                Part::beam_y(x.start() + 1.0, (y.start() - 1.0, y.end() + 1.0), z - 2.0),
                Part::beam_y(x.end() - 2.0, (y.start() - 1.0, y.end() + 1.0), z - 2.0),
            ],
            _ => parts![],
        };

        parts![Part::panel_xy(x, y, z).with_fit(Fit::Bottom), first, second]
    }
}

impl Product for CatShelves {
    fn id(&self) -> &'static str {
        "cat-shelves"
    }

    fn label(&self) -> &'static str {
        "Cat Shelves"
    }

    fn plugins(&self) -> &'static [Plugin] {
        &[Plugin::SmartFasteners]
    }

    fn parts(&self, _values: &ParamValues) -> Result<Parts> {
        let posts: Parts = POSTS_X
            .iter()
            .flat_map(|x| POSTS_Y.iter().map(move |y| PartNode::from(Part::beam_z(*x, *y, (0.0, POST_HEIGHT)))))
            .collect();

        let levels = [
            Level::along_x(0.0, 3.0).braced(Axis::Y),
            Level::along_x(9.0, 5.0).braced(Axis::Y),
            Level::along_x(18.0, 3.0).braced(Axis::Y),
            Level::along_x(27.0, 5.0).braced(Axis::Y),
            Level::along_y(1.0, 9.0),
            Level::along_x(18.0, 11.0),
            Level::along_y(10.0, 15.0),
            Level::along_x(0.0, 19.0),
            Level::along_x(27.0, 17.0),
            Level::along_y(19.0, 22.0),
            Level::along_x(9.0, 25.0),
            Level::along_y(1.0, 30.0).braced(Axis::X),
            Level::along_x(18.0, 30.0),
            Level::along_y(28.0, 29.0).braced(Axis::X),
        ];

        Ok(parts![posts, levels.iter().map(Level::parts).collect::<Vec<_>>()])
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::products::build;

    #[test]
    fn test_braced_level() {
        let parts = build(&CatShelves, "");
        // ten posts, then the first level
        assert_eq!(parts[10], Part::panel_xy((0, 10), (1, 9), 3).with_fit(Fit::Bottom));
        assert_eq!(parts[11], Part::beam_x((0, 10), 1, 2));
        assert_eq!(parts[12], Part::beam_x((0, 10), 8, 2));
        assert_eq!(parts[13], Part::beam_y(1, (0, 10), 1));
        assert_eq!(parts[14], Part::beam_y(8, (0, 10), 1));
        assert_eq!(parts.len(), 10 + 14 * 3 + 6 * 2);
    }
}
