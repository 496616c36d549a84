//! Errors raised while checking part descriptors.

use crate::Axis;

/// A part descriptor that breaks the grid rules.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PartError {
    /// A coordinate is NaN or infinite.
    #[error("{kind} has a non-finite {axis} coordinate")]
    NonFinite {
        /// The part type tag.
        kind: &'static str,
        /// The offending axis.
        axis: Axis,
    },
    /// A span starts and ends at the same place.
    #[error("{kind} has a zero-length {axis} span at {at}")]
    DegenerateSpan {
        /// The part type tag.
        kind: &'static str,
        /// The offending axis.
        axis: Axis,
        /// Where the span collapses.
        at: f64,
    },
    /// A coordinate is neither a whole nor a half grid unit.
    #[error("{kind} {axis} coordinate {value} is off the half grid")]
    OffGrid {
        /// The part type tag.
        kind: &'static str,
        /// The offending axis.
        axis: Axis,
        /// The offending value.
        value: f64,
    },
    /// The rotation descriptor cannot be applied.
    #[error("{kind} has an invalid rotation: {reason}")]
    InvalidRotation {
        /// The part type tag.
        kind: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },
    /// A fastener line without a direction.
    #[error("fastener line {variant_id} has a zero direction")]
    ZeroDirection {
        /// The fastener variant.
        variant_id: String,
    },
}
