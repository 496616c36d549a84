//! Bill-of-materials summaries of a part list.

use std::collections::BTreeMap;

use gridparts::{part::Extent, Part, GRID_LENGTH_MM};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Counts of everything needed to build a part list.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, Default, PartialEq)]
pub struct Tally {
    /// Beams, grouped by length, shortest first.
    pub beams: Vec<BeamCount>,
    /// Panels, grouped by footprint, smallest first.
    pub panels: Vec<PanelCount>,
    /// Fastener lines, grouped by variant.
    pub fasteners: Vec<FastenerCount>,
    /// The grid cells occupied by beams and panels, if there are any.
    pub bounds: Option<Bounds>,
}

/// How many beams of one length.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, Copy, PartialEq)]
pub struct BeamCount {
    /// Length in grid units.
    pub length: f64,
    /// Length in millimetres.
    pub length_mm: f64,
    /// Number of beams.
    pub count: usize,
}

/// How many panels of one footprint.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, Copy, PartialEq)]
pub struct PanelCount {
    /// The shorter side, in grid units.
    pub width: f64,
    /// The longer side, in grid units.
    pub length: f64,
    /// Whether the panels are drilled.
    pub holes: bool,
    /// Number of panels.
    pub count: usize,
}

/// How many fastener lines of one variant.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct FastenerCount {
    /// The fastener variant.
    pub variant_id: String,
    /// Number of lines.
    pub count: usize,
}

/// An axis-aligned box in grid units.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// The lowest corner.
    pub min: [f64; 3],
    /// The highest corner.
    pub max: [f64; 3],
}

impl Bounds {
    /// The size along x, y and z.
    pub fn size(&self) -> [f64; 3] {
        [
            self.max[0] - self.min[0],
            self.max[1] - self.min[1],
            self.max[2] - self.min[2],
        ]
    }

    fn include(&mut self, axis: usize, low: f64, high: f64) {
        self.min[axis] = self.min[axis].min(low);
        self.max[axis] = self.max[axis].max(high);
    }
}

/// Lengths are keyed in half units so that they can be ordered.
fn half_units(value: f64) -> i64 {
    (value * 2.0).round() as i64
}

fn from_half_units(key: i64) -> f64 {
    key as f64 / 2.0
}

impl Tally {
    /// Summarize a flat part list.
    pub fn from_parts(parts: &[Part]) -> Self {
        let mut beams: BTreeMap<i64, usize> = BTreeMap::new();
        let mut panels: BTreeMap<(i64, i64, bool), usize> = BTreeMap::new();
        let mut fasteners: BTreeMap<&str, usize> = BTreeMap::new();
        let mut bounds: Option<Bounds> = None;

        for part in parts {
            match part {
                Part::FastenerLine { variant_id, .. } => {
                    *fasteners.entry(variant_id.as_str()).or_default() += 1;
                    continue;
                }
                Part::PanelXy { x: a, y: b, holes, .. }
                | Part::PanelXz { x: a, z: b, holes, .. }
                | Part::PanelYz { y: a, z: b, holes, .. } => {
                    let (short, long) = if a.len() <= b.len() {
                        (a.len(), b.len())
                    } else {
                        (b.len(), a.len())
                    };
                    *panels.entry((half_units(short), half_units(long), *holes)).or_default() += 1;
                }
                _ => {
                    if let Some(span) = part.beam_span() {
                        *beams.entry(half_units(span.len())).or_default() += 1;
                    }
                }
            }

            // A beam fills the unit cell next to its fixed coordinates.
            let depth = if part.is_beam() { 1.0 } else { 0.0 };
            let mut cell = Bounds {
                min: [f64::INFINITY; 3],
                max: [f64::NEG_INFINITY; 3],
            };
            for (axis, (_, extent)) in part.extents().into_iter().enumerate() {
                match extent {
                    Extent::At(v) => cell.include(axis, v, v + depth),
                    Extent::Along(span) => cell.include(axis, span.min(), span.max()),
                }
            }
            bounds = Some(match bounds {
                Some(mut b) => {
                    for axis in 0..3 {
                        b.include(axis, cell.min[axis], cell.max[axis]);
                    }
                    b
                }
                None => cell,
            });
        }

        Tally {
            beams: beams
                .into_iter()
                .map(|(key, count)| BeamCount {
                    length: from_half_units(key),
                    length_mm: from_half_units(key) * GRID_LENGTH_MM,
                    count,
                })
                .collect(),
            panels: panels
                .into_iter()
                .map(|((width, length, holes), count)| PanelCount {
                    width: from_half_units(width),
                    length: from_half_units(length),
                    holes,
                    count,
                })
                .collect(),
            fasteners: fasteners
                .into_iter()
                .map(|(variant_id, count)| FastenerCount {
                    variant_id: variant_id.to_string(),
                    count,
                })
                .collect(),
            bounds,
        }
    }

    /// The total number of beams.
    pub fn beam_count(&self) -> usize {
        self.beams.iter().map(|b| b.count).sum()
    }

    /// The total number of panels.
    pub fn panel_count(&self) -> usize {
        self.panels.iter().map(|p| p.count).sum()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_groups_beams_by_length() {
        let tally = Tally::from_parts(&[
            Part::beam_x((0, 10), 0, 0),
            Part::beam_y(0, (10, 0), 1),
            Part::beam_z(0, 0, (0, 5)),
        ]);
        assert_eq!(
            tally.beams,
            vec![
                BeamCount {
                    length: 5.0,
                    length_mm: 200.0,
                    count: 1,
                },
                BeamCount {
                    length: 10.0,
                    length_mm: 400.0,
                    count: 2,
                },
            ]
        );
        assert_eq!(tally.beam_count(), 3);
        assert!(tally.panels.is_empty());
    }

    #[test]
    fn test_panels_ignore_orientation() {
        let tally = Tally::from_parts(&[
            Part::panel_xy((0, 10), (0, 5), 1),
            Part::panel_yz(0, (0, 10), (0, 5)),
            Part::panel_xz((0, 5), 0, (0, 10)).without_holes(),
        ]);
        assert_eq!(
            tally.panels,
            vec![
                PanelCount {
                    width: 5.0,
                    length: 10.0,
                    holes: false,
                    count: 1,
                },
                PanelCount {
                    width: 5.0,
                    length: 10.0,
                    holes: true,
                    count: 2,
                },
            ]
        );
    }

    #[test]
    fn test_fasteners_by_variant() {
        let tally = Tally::from_parts(&[
            Part::fastener_line("75mm:bolt:12mm:nut", [0.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
            Part::fastener_line("75mm:bolt:12mm:nut", [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
            Part::fastener_line("40mm:bolt:12mm:nut", [2.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        ]);
        assert_eq!(
            tally.fasteners,
            vec![
                FastenerCount {
                    variant_id: "40mm:bolt:12mm:nut".to_string(),
                    count: 1,
                },
                FastenerCount {
                    variant_id: "75mm:bolt:12mm:nut".to_string(),
                    count: 2,
                },
            ]
        );
        assert_eq!(tally.bounds, None);
    }

    #[test]
    fn test_bounds_cover_beam_cells() {
        let tally = Tally::from_parts(&[Part::beam_x((0, 10), 0, 0), Part::beam_z(9, -3, (0, 20))]);
        let bounds = tally.bounds.expect("bounds");
        assert_eq!(bounds.min, [0.0, -3.0, 0.0]);
        assert_eq!(bounds.max, [10.0, 1.0, 20.0]);
        assert_eq!(bounds.size(), [10.0, 4.0, 20.0]);
    }
}
