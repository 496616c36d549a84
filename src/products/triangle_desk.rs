use gridparts::{parts, Part, Parts, Rotation};

use crate::{Error, ParamValues, Parameter, Preset, Product, Result, Schema};

/// A desk leaning on a 5-12-13 right triangle.
pub struct TriangleDesk;

impl Product for TriangleDesk {
    fn id(&self) -> &'static str {
        "5-12-13-triangle-desk"
    }

    fn label(&self) -> &'static str {
        "5-12-13 Triangle Desk"
    }

    fn parameters(&self) -> Schema {
        Schema::new(vec![
            Parameter::number("size", "Size", "s", 15, 30).step(15),
            Parameter::number("width", "Width", "w", 15, 30).step(15),
            Parameter::choice("top_shelf", "Top shelf", "ts", &[("none", "None"), ("full", "Full")]),
            Parameter::choice(
                "bottom_shelf",
                "Bottom shelf",
                "bs",
                &[("none", "None"), ("full", "Full"), ("side", "Side")],
            ),
        ])
    }

    fn presets(&self) -> Vec<Preset> {
        let preset = |id: &str, label: &str, bottom: &str| {
            Preset::new(id, label)
                .with("size", 30)
                .with("width", 30)
                .with("top_shelf", "full")
                .with("bottom_shelf", bottom)
        };
        vec![preset("regular", "Regular", "side"), preset("small", "Small", "full")]
    }

    fn parts(&self, values: &ParamValues) -> Result<Parts> {
        let size = values.number("size")?;
        let width = values.number("width")?;

        let drop = match size as i64 {
            15 => 1.0,
            30 => 2.0,
            _ => {
                return Err(Error::Unsupported {
                    product: "5-12-13-triangle-desk",
                    reason: format!("no triangle is defined for size {size}"),
                })
            }
        };

        // the hypotenuse leans at acos(12 / 13) from vertical
        let lean = Rotation::new([1.0, 0.0, 0.0], (12.0_f64 / 13.0).acos().to_degrees(), [0.0, 0.0, size - drop]);

        Ok(parts![
            Part::beam_z(0, 0, (0.0, size)),
            Part::beam_z(-1, 0, (0.0, size)).rotated(lean),
            Part::beam_z(width - 1.0, 0, (0.0, size)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::products::build_with;

    #[test]
    fn test_lean_pivots_below_the_top() {
        let parts = build_with(&TriangleDesk, "regular", &[("size", 15.into())]);
        let Part::BeamZ { rotate: Some(lean), .. } = &parts[1] else {
            panic!("expected a rotated beam, got {:?}", parts[1]);
        };
        assert_eq!(lean.origin, [0.0, 0.0, 14.0]);
        assert!((lean.angle - 22.619_864_948).abs() < 1e-6);
    }
}
