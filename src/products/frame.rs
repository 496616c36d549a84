//! Posts and rails for rectangular frames with optional doubled posts.

use gridparts::{Part, PartNode};

/// Where along the short side a post stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Placement {
    Start,
    Middle,
    End,
}

/// Posts and rails of a frame of a given `height`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Frame {
    pub height: f64,
    pub double_posts: bool,
}

impl Frame {
    /// How many units a post occupies along the short side.
    pub fn post_width(&self) -> f64 {
        if self.double_posts {
            2.0
        } else {
            1.0
        }
    }

    /// A post, doubled inward from the edge it stands on.
    pub fn post(&self, x: f64, y: f64, placement: Placement) -> PartNode {
        let twin_y = if placement == Placement::End { y - 1.0 } else { y + 1.0 };
        gridparts::parts![
            Part::beam_z(x, y, (0.0, self.height)),
            self.double_posts.then(|| Part::beam_z(x, twin_y, (0.0, self.height))),
        ]
        .into()
    }

    /// A rail along x at `y` covering `[0, length]`, dropped by two when slung underneath.
    pub fn rail_x(&self, y: f64, length: f64, underneath: bool) -> Part {
        let z = if underneath { self.height - 3.0 } else { self.height - 1.0 };
        Part::beam_x((0.0, length), y, z)
    }

    /// A rail along y at `x` covering `[0, width]`.
    pub fn rail_y(&self, x: f64, width: f64) -> Part {
        Part::beam_y(x, (0.0, width), self.height - 2.0)
    }
}
