//! Beams, panels and fastener lines.

use parse_display::{Display, FromStr};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{PartError, Span};

/// One of the three grid axes.
#[derive(
    Serialize, Deserialize, JsonSchema, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, FromStr,
)]
#[serde(rename_all = "lowercase")]
#[display(style = "lowercase")]
pub enum Axis {
    /// Width.
    X,
    /// Depth.
    Y,
    /// Height.
    Z,
}

/// Which face of a panel sits flush against its supporting beams.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, FromStr)]
#[serde(rename_all = "lowercase")]
#[display(style = "lowercase")]
pub enum Fit {
    /// The top face.
    Top,
    /// The bottom face.
    Bottom,
}

/// A rotation recorded on a part.
///
/// The rotation is a descriptor only: the part's coordinates are stored
/// unrotated and consumers apply the rotation themselves.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    /// The axis to rotate around.
    pub direction: [f64; 3],
    /// The angle, in degrees.
    pub angle: f64,
    /// The pivot, in grid units.
    pub origin: [f64; 3],
}

impl Rotation {
    /// Rotate `angle` degrees around `direction` through `origin`.
    pub fn new(direction: [f64; 3], angle: f64, origin: [f64; 3]) -> Self {
        Rotation {
            direction,
            angle,
            origin,
        }
    }

    fn translate(self, dx: f64, dy: f64, dz: f64) -> Self {
        let [x, y, z] = self.origin;
        Rotation {
            origin: [x + dx, y + dy, z + dz],
            ..self
        }
    }
}

/// A single part placed on the grid.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum Part {
    /// A beam running along x.
    #[serde(rename = "gridbeam:x")]
    BeamX {
        /// Extent along x.
        x: Span,
        /// Fixed y position.
        y: f64,
        /// Fixed z position.
        z: f64,
        /// Optional rotation descriptor.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        rotate: Option<Rotation>,
    },
    /// A beam running along y.
    #[serde(rename = "gridbeam:y")]
    BeamY {
        /// Fixed x position.
        x: f64,
        /// Extent along y.
        y: Span,
        /// Fixed z position.
        z: f64,
        /// Optional rotation descriptor.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        rotate: Option<Rotation>,
    },
    /// A beam running along z.
    #[serde(rename = "gridbeam:z")]
    BeamZ {
        /// Fixed x position.
        x: f64,
        /// Fixed y position.
        y: f64,
        /// Extent along z.
        z: Span,
        /// Optional rotation descriptor.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        rotate: Option<Rotation>,
    },
    /// A horizontal panel.
    #[serde(rename = "gridpanel:xy")]
    PanelXy {
        /// Extent along x.
        x: Span,
        /// Extent along y.
        y: Span,
        /// Fixed height.
        z: f64,
        /// Which face sits on the beams.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fit: Option<Fit>,
        /// Whether the panel is drilled.
        #[serde(default = "drilled", skip_serializing_if = "is_drilled")]
        holes: bool,
    },
    /// A vertical panel facing y.
    #[serde(rename = "gridpanel:xz")]
    PanelXz {
        /// Extent along x.
        x: Span,
        /// Fixed y position.
        y: f64,
        /// Extent along z.
        z: Span,
        /// Which face sits on the beams.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fit: Option<Fit>,
        /// Whether the panel is drilled.
        #[serde(default = "drilled", skip_serializing_if = "is_drilled")]
        holes: bool,
    },
    /// A vertical panel facing x.
    #[serde(rename = "gridpanel:yz")]
    PanelYz {
        /// Fixed x position.
        x: f64,
        /// Extent along y.
        y: Span,
        /// Extent along z.
        z: Span,
        /// Which face sits on the beams.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fit: Option<Fit>,
        /// Whether the panel is drilled.
        #[serde(default = "drilled", skip_serializing_if = "is_drilled")]
        holes: bool,
    },
    /// A row of fasteners along a line.
    #[serde(rename = "fastener:line")]
    FastenerLine {
        /// The fastener variant, e.g. `75mm:bolt:12mm:nut`.
        variant_id: String,
        /// Where the line starts.
        start: [f64; 3],
        /// Which way the line runs.
        direction: [f64; 3],
    },
}

fn drilled() -> bool {
    true
}

fn is_drilled(holes: &bool) -> bool {
    *holes
}

/// The extent of a part along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Extent {
    /// A fixed position.
    At(f64),
    /// A span.
    Along(Span),
}

impl Part {
    /// A beam along x.
    pub fn beam_x(x: impl Into<Span>, y: impl Into<f64>, z: impl Into<f64>) -> Self {
        Part::BeamX {
            x: x.into(),
            y: y.into(),
            z: z.into(),
            rotate: None,
        }
    }

    /// A beam along y.
    pub fn beam_y(x: impl Into<f64>, y: impl Into<Span>, z: impl Into<f64>) -> Self {
        Part::BeamY {
            x: x.into(),
            y: y.into(),
            z: z.into(),
            rotate: None,
        }
    }

    /// A beam along z.
    pub fn beam_z(x: impl Into<f64>, y: impl Into<f64>, z: impl Into<Span>) -> Self {
        Part::BeamZ {
            x: x.into(),
            y: y.into(),
            z: z.into(),
            rotate: None,
        }
    }

    /// A drilled horizontal panel.
    pub fn panel_xy(x: impl Into<Span>, y: impl Into<Span>, z: impl Into<f64>) -> Self {
        Part::PanelXy {
            x: x.into(),
            y: y.into(),
            z: z.into(),
            fit: None,
            holes: true,
        }
    }

    /// A drilled vertical panel facing y.
    pub fn panel_xz(x: impl Into<Span>, y: impl Into<f64>, z: impl Into<Span>) -> Self {
        Part::PanelXz {
            x: x.into(),
            y: y.into(),
            z: z.into(),
            fit: None,
            holes: true,
        }
    }

    /// A drilled vertical panel facing x.
    pub fn panel_yz(x: impl Into<f64>, y: impl Into<Span>, z: impl Into<Span>) -> Self {
        Part::PanelYz {
            x: x.into(),
            y: y.into(),
            z: z.into(),
            fit: None,
            holes: true,
        }
    }

    /// A fastener line.
    pub fn fastener_line(variant_id: impl Into<String>, start: [f64; 3], direction: [f64; 3]) -> Self {
        Part::FastenerLine {
            variant_id: variant_id.into(),
            start,
            direction,
        }
    }

    /// Set the fit of a panel. Beams and fasteners are returned unchanged.
    pub fn with_fit(mut self, fit: Fit) -> Self {
        match &mut self {
            Part::PanelXy { fit: f, .. } | Part::PanelXz { fit: f, .. } | Part::PanelYz { fit: f, .. } => {
                *f = Some(fit)
            }
            Part::BeamX { .. } | Part::BeamY { .. } | Part::BeamZ { .. } | Part::FastenerLine { .. } => {}
        }
        self
    }

    /// Mark a panel as undrilled. Beams and fasteners are returned unchanged.
    pub fn without_holes(mut self) -> Self {
        match &mut self {
            Part::PanelXy { holes, .. } | Part::PanelXz { holes, .. } | Part::PanelYz { holes, .. } => *holes = false,
            Part::BeamX { .. } | Part::BeamY { .. } | Part::BeamZ { .. } | Part::FastenerLine { .. } => {}
        }
        self
    }

    /// Attach a rotation to a beam. Panels and fasteners are returned unchanged.
    pub fn rotated(mut self, rotation: Rotation) -> Self {
        match &mut self {
            Part::BeamX { rotate, .. } | Part::BeamY { rotate, .. } | Part::BeamZ { rotate, .. } => {
                *rotate = Some(rotation)
            }
            Part::PanelXy { .. } | Part::PanelXz { .. } | Part::PanelYz { .. } | Part::FastenerLine { .. } => {}
        }
        self
    }

    /// The serialized type tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Part::BeamX { .. } => "gridbeam:x",
            Part::BeamY { .. } => "gridbeam:y",
            Part::BeamZ { .. } => "gridbeam:z",
            Part::PanelXy { .. } => "gridpanel:xy",
            Part::PanelXz { .. } => "gridpanel:xz",
            Part::PanelYz { .. } => "gridpanel:yz",
            Part::FastenerLine { .. } => "fastener:line",
        }
    }

    /// Whether this part is a beam.
    pub fn is_beam(&self) -> bool {
        matches!(self, Part::BeamX { .. } | Part::BeamY { .. } | Part::BeamZ { .. })
    }

    /// Whether this part is a panel.
    pub fn is_panel(&self) -> bool {
        matches!(self, Part::PanelXy { .. } | Part::PanelXz { .. } | Part::PanelYz { .. })
    }

    /// The extent of the part along x, y and z.
    ///
    /// A fastener line reports its start point.
    pub fn extents(&self) -> [(Axis, Extent); 3] {
        use Extent::{Along, At};

        let (x, y, z) = match self {
            Part::BeamX { x, y, z, .. } => (Along(*x), At(*y), At(*z)),
            Part::BeamY { x, y, z, .. } => (At(*x), Along(*y), At(*z)),
            Part::BeamZ { x, y, z, .. } => (At(*x), At(*y), Along(*z)),
            Part::PanelXy { x, y, z, .. } => (Along(*x), Along(*y), At(*z)),
            Part::PanelXz { x, y, z, .. } => (Along(*x), At(*y), Along(*z)),
            Part::PanelYz { x, y, z, .. } => (At(*x), Along(*y), Along(*z)),
            Part::FastenerLine { start, .. } => (At(start[0]), At(start[1]), At(start[2])),
        };
        [(Axis::X, x), (Axis::Y, y), (Axis::Z, z)]
    }

    /// The span of the part along its own axis, for beams.
    pub fn beam_span(&self) -> Option<Span> {
        match self {
            Part::BeamX { x, .. } => Some(*x),
            Part::BeamY { y, .. } => Some(*y),
            Part::BeamZ { z, .. } => Some(*z),
            _ => None,
        }
    }

    /// Shift the part by a whole offset, rotation pivots included.
    pub fn translate(self, dx: f64, dy: f64, dz: f64) -> Self {
        match self {
            Part::BeamX { x, y, z, rotate } => Part::BeamX {
                x: x.shift(dx),
                y: y + dy,
                z: z + dz,
                rotate: rotate.map(|r| r.translate(dx, dy, dz)),
            },
            Part::BeamY { x, y, z, rotate } => Part::BeamY {
                x: x + dx,
                y: y.shift(dy),
                z: z + dz,
                rotate: rotate.map(|r| r.translate(dx, dy, dz)),
            },
            Part::BeamZ { x, y, z, rotate } => Part::BeamZ {
                x: x + dx,
                y: y + dy,
                z: z.shift(dz),
                rotate: rotate.map(|r| r.translate(dx, dy, dz)),
            },
            Part::PanelXy { x, y, z, fit, holes } => Part::PanelXy {
                x: x.shift(dx),
                y: y.shift(dy),
                z: z + dz,
                fit,
                holes,
            },
            Part::PanelXz { x, y, z, fit, holes } => Part::PanelXz {
                x: x.shift(dx),
                y: y + dy,
                z: z.shift(dz),
                fit,
                holes,
            },
            Part::PanelYz { x, y, z, fit, holes } => Part::PanelYz {
                x: x + dx,
                y: y.shift(dy),
                z: z.shift(dz),
                fit,
                holes,
            },
            Part::FastenerLine {
                variant_id,
                start,
                direction,
            } => Part::FastenerLine {
                variant_id,
                start: [start[0] + dx, start[1] + dy, start[2] + dz],
                direction,
            },
        }
    }

    /// Check the part against the grid rules.
    pub fn validate(&self) -> Result<(), PartError> {
        let kind = self.kind();

        for (axis, extent) in self.extents() {
            let values = match extent {
                Extent::At(v) => vec![v],
                Extent::Along(span) => vec![span.start(), span.end()],
            };
            for value in values {
                if !value.is_finite() {
                    return Err(PartError::NonFinite { kind, axis });
                }
                if (value * 2.0).fract() != 0.0 {
                    return Err(PartError::OffGrid { kind, axis, value });
                }
            }
            if let Extent::Along(span) = extent {
                if span.is_empty() {
                    return Err(PartError::DegenerateSpan {
                        kind,
                        axis,
                        at: span.start(),
                    });
                }
            }
        }

        match self {
            Part::BeamX { rotate: Some(r), .. }
            | Part::BeamY { rotate: Some(r), .. }
            | Part::BeamZ { rotate: Some(r), .. } => {
                if !r.angle.is_finite() {
                    return Err(PartError::InvalidRotation {
                        kind,
                        reason: "angle is not finite",
                    });
                }
                if r.direction.iter().chain(r.origin.iter()).any(|v| !v.is_finite()) {
                    return Err(PartError::InvalidRotation {
                        kind,
                        reason: "axis or pivot is not finite",
                    });
                }
                if r.direction.iter().all(|v| *v == 0.0) {
                    return Err(PartError::InvalidRotation {
                        kind,
                        reason: "axis is zero",
                    });
                }
            }
            Part::FastenerLine {
                variant_id, direction, ..
            } => {
                if direction.iter().any(|v| !v.is_finite()) || direction.iter().all(|v| *v == 0.0) {
                    return Err(PartError::ZeroDirection {
                        variant_id: variant_id.clone(),
                    });
                }
            }
            _ => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_beam_serializes_with_type_tag() {
        let beam = Part::beam_x((0, 10), 1, 2.5);
        let json = serde_json::to_value(&beam).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "gridbeam:x", "x": [0.0, 10.0], "y": 1.0, "z": 2.5})
        );
    }

    #[test]
    fn test_panel_holes_only_serialized_when_disabled() {
        let drilled = serde_json::to_value(Part::panel_xy((0, 10), (0, 5), 3).with_fit(Fit::Bottom)).unwrap();
        assert_eq!(
            drilled,
            serde_json::json!({"type": "gridpanel:xy", "x": [0.0, 10.0], "y": [0.0, 5.0], "z": 3.0, "fit": "bottom"})
        );

        let plain = serde_json::to_value(Part::panel_xy((0, 10), (0, 5), 3).without_holes()).unwrap();
        assert_eq!(plain["holes"], serde_json::json!(false));

        let parsed: Part = serde_json::from_value(drilled).unwrap();
        assert_eq!(parsed, Part::panel_xy((0, 10), (0, 5), 3).with_fit(Fit::Bottom));
    }

    #[test]
    fn test_fit_ignored_on_beams() {
        let beam = Part::beam_z(0, 0, (0, 5)).with_fit(Fit::Top).without_holes();
        assert_eq!(beam, Part::beam_z(0, 0, (0, 5)));
    }

    #[test]
    fn test_translate_moves_rotation_pivot() {
        let beam = Part::beam_z(-1, 0, (0, 30))
            .rotated(Rotation::new([1.0, 0.0, 0.0], 22.5, [0.0, 0.0, 28.0]))
            .translate(10.0, 5.0, 0.0);
        assert_eq!(
            beam,
            Part::beam_z(9, 5, (0, 30)).rotated(Rotation::new([1.0, 0.0, 0.0], 22.5, [10.0, 5.0, 28.0]))
        );
    }

    #[test]
    fn test_validate_accepts_half_grid() {
        Part::panel_yz(0.5, (1.5, 13.5), (3.5, 8.5)).validate().unwrap();
        Part::fastener_line("75mm:bolt:12mm:nut", [-4.0, -4.0, 0.0], [0.0, 0.0, 1.0])
            .validate()
            .unwrap();
    }

    #[test]
    fn test_validate_rejects_bad_parts() {
        assert_eq!(
            Part::beam_y(1, (4, 4), 0).validate(),
            Err(PartError::DegenerateSpan {
                kind: "gridbeam:y",
                axis: Axis::Y,
                at: 4.0
            })
        );
        assert_eq!(
            Part::beam_x((0, 10), 0.25, 0).validate(),
            Err(PartError::OffGrid {
                kind: "gridbeam:x",
                axis: Axis::Y,
                value: 0.25
            })
        );
        assert_eq!(
            Part::beam_z(f64::NAN, 0, (0, 1)).validate(),
            Err(PartError::NonFinite {
                kind: "gridbeam:z",
                axis: Axis::X
            })
        );
        assert!(matches!(
            Part::beam_z(0, 0, (0, 1))
                .rotated(Rotation::new([0.0, 1.0, 0.0], f64::NAN, [0.0, 0.0, 0.0]))
                .validate(),
            Err(PartError::InvalidRotation { .. })
        ));
        assert!(matches!(
            Part::fastener_line("m6", [0.0; 3], [0.0; 3]).validate(),
            Err(PartError::ZeroDirection { .. })
        ));
    }
}
