//! Part descriptors for modular grid-based structures.
//!
//! Every structure is described as a tree of beams, panels and fastener lines
//! placed on an integer grid. One grid unit is [`GRID_LENGTH_MM`] millimetres.

#![deny(missing_docs)]

pub mod error;
pub mod part;
pub mod span;
pub mod tree;

pub use error::PartError;
pub use part::{Axis, Fit, Part, Rotation};
pub use span::Span;
pub use tree::{flatten, into_flat, PartNode, Parts};

/// The length of one grid unit, in millimetres.
pub const GRID_LENGTH_MM: f64 = 40.0;

/// Build a list of [`PartNode`]s from anything convertible into a node.
///
/// Parts, nested lists and `Option`s may be mixed freely; `None` contributes
/// an empty group.
#[macro_export]
macro_rules! parts {
    () => {
        ::std::vec::Vec::<$crate::PartNode>::new()
    };
    ($($node:expr),+ $(,)?) => {
        ::std::vec![$($crate::PartNode::from($node)),+]
    };
}
