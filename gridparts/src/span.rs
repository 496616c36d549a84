//! Directed intervals along a single axis.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A directed interval `[start, end]` in grid units.
///
/// Spans may run backwards (`[0, -10]`); the direction is preserved because
/// it carries meaning for the parts that own it.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, Copy, PartialEq)]
pub struct Span(pub f64, pub f64);

impl Span {
    /// Create a new span.
    pub fn new(start: impl Into<f64>, end: impl Into<f64>) -> Self {
        Span(start.into(), end.into())
    }

    /// The first coordinate.
    pub fn start(&self) -> f64 {
        self.0
    }

    /// The last coordinate.
    pub fn end(&self) -> f64 {
        self.1
    }

    /// The absolute length of the span.
    pub fn len(&self) -> f64 {
        (self.1 - self.0).abs()
    }

    /// Whether the span covers no distance at all.
    pub fn is_empty(&self) -> bool {
        self.0 == self.1
    }

    /// The lower of the two coordinates.
    pub fn min(&self) -> f64 {
        self.0.min(self.1)
    }

    /// The higher of the two coordinates.
    pub fn max(&self) -> f64 {
        self.0.max(self.1)
    }

    /// Move both ends by `by`.
    pub fn shift(self, by: f64) -> Self {
        Span(self.0 + by, self.1 + by)
    }
}

impl<A: Into<f64>, B: Into<f64>> From<(A, B)> for Span {
    fn from((start, end): (A, B)) -> Self {
        Span::new(start, end)
    }
}

impl From<[f64; 2]> for Span {
    fn from([start, end]: [f64; 2]) -> Self {
        Span(start, end)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_span_serializes_as_pair() {
        let span = Span::from((0, -10));
        assert_eq!(serde_json::to_string(&span).unwrap(), "[0.0,-10.0]");
        assert_eq!(span.len(), 10.0);
        assert_eq!(span.min(), -10.0);
    }

    #[test]
    fn test_span_shift_keeps_direction() {
        let span = Span::from((3, 1.5)).shift(2.0);
        assert_eq!(span, Span(5.0, 3.5));
        assert!(!span.is_empty());
        assert!(Span::new(4, 4).is_empty());
    }
}
