//! Arithmetic and sub-assemblies shared between products.

use gridparts::{Fit, Part, PartNode, Parts, Span};

/// `0, 1, .., n - 1` as grid values. Non-positive counts yield nothing.
pub(crate) fn steps(n: f64) -> impl Iterator<Item = f64> {
    let n = if n > 0.0 { n as usize } else { 0 };
    (0..n).map(|i| i as f64)
}

/// `floor(v / 2)`.
pub(crate) fn half_floor(v: f64) -> f64 {
    (0.5 * v).floor()
}

/// `ceil(v / 2)`.
pub(crate) fn half_ceil(v: f64) -> f64 {
    (0.5 * v).ceil()
}

/// Round to the nearest whole unit, halves going up.
pub(crate) fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Split `length` into 10-unit panels, then 5-unit panels.
///
/// Whatever is left under 5 units stays open.
pub(crate) fn panel_runs(length: f64) -> Vec<Span> {
    let tens = (length / 10.0).floor();
    let fives = ((length % 10.0) / 5.0).floor();

    steps(tens)
        .map(|i| Span(10.0 * i, 10.0 * (i + 1.0)))
        .chain(steps(fives).map(|j| {
            let j = 2.0 * tens + j;
            Span(5.0 * j, 5.0 * (j + 1.0))
        }))
        .collect()
}

/// The offset of the `index`th of `count` evenly spread supports along `length`.
pub(crate) fn spread(index: f64, count: f64, length: f64) -> f64 {
    round_half_up(1.0 / (count + 1.0) * length * (index + 1.0)) - 1.0
}

/// An intermediate support under a long span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Support {
    /// Where the upright sits.
    pub offset: f64,
    /// Which side of the upright the cross beam goes, toward the middle.
    pub nudge: f64,
}

/// The intermediate supports needed under a span of `width`: one for every
/// 15 units beyond the first 30.
pub(crate) fn supports(width: f64) -> Vec<Support> {
    let count = ((width - 30.0) / 15.0).ceil().max(0.0);
    steps(count)
        .map(|i| Support {
            offset: spread(i, count, width),
            nudge: if i >= half_floor(count) { -1.0 } else { 1.0 },
        })
        .collect()
}

/// Horizontal panels at height `z` covering `x`, run along a depth of `depth`.
pub(crate) fn deck(x: Span, depth: f64, z: f64) -> Parts {
    panel_runs(depth)
        .into_iter()
        .map(|y| PartNode::from(Part::panel_xy(x, y, z)))
        .collect()
}

/// Vertical side panels at `x` covering `z`, run along a depth of `depth`.
pub(crate) fn side_wall(x: f64, depth: f64, z: Span, fit: Option<Fit>) -> Parts {
    panel_runs(depth)
        .into_iter()
        .map(|y| {
            let panel = Part::panel_yz(x, y, z);
            PartNode::from(match fit {
                Some(fit) => panel.with_fit(fit),
                None => panel,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_steps_ignores_negative_counts() {
        assert_eq!(steps(3.0).collect::<Vec<_>>(), vec![0.0, 1.0, 2.0]);
        assert_eq!(steps(-2.0).count(), 0);
        assert_eq!(steps(0.0).count(), 0);
    }

    #[test]
    fn test_halves() {
        assert_eq!(half_floor(7.0), 3.0);
        assert_eq!(half_ceil(7.0), 4.0);
        assert_eq!(half_floor(-7.0), -4.0);
        assert_eq!(half_ceil(-7.0), -3.0);
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
    }

    #[test]
    fn test_panel_runs() {
        assert_eq!(panel_runs(25.0), vec![Span(0.0, 10.0), Span(10.0, 20.0), Span(20.0, 25.0)]);
        assert_eq!(panel_runs(15.0), vec![Span(0.0, 10.0), Span(10.0, 15.0)]);
        assert_eq!(panel_runs(5.0), vec![Span(0.0, 5.0)]);
        assert_eq!(panel_runs(8.0), vec![Span(0.0, 5.0)]);
        assert!(panel_runs(4.0).is_empty());
    }

    #[test]
    fn test_supports() {
        assert!(supports(30.0).is_empty());
        assert_eq!(
            supports(45.0),
            vec![Support {
                offset: 22.0,
                nudge: -1.0
            }]
        );
        assert_eq!(
            supports(60.0),
            vec![
                Support {
                    offset: 19.0,
                    nudge: 1.0
                },
                Support {
                    offset: 39.0,
                    nudge: -1.0
                },
            ]
        );
    }
}
