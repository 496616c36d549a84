use gridparts::{parts, Part, PartNode, Parts, Rotation};

use crate::{Error, ParamValues, Parameter, Preset, Product, Result, Schema};

/// A raised platform frame braced by two angled ladders of supports.
pub struct KidFort;

/// The tilt of a support of `length` whose top meets the fort at `height`,
/// in degrees above horizontal.
fn support_angle(length: f64, height: f64) -> Result<f64> {
    let rise = height - 0.5;
    let run_squared = length.powi(2) - rise.powi(2);
    if run_squared <= 0.0 {
        return Err(Error::Unsupported {
            product: "kid-fort",
            reason: format!("a support of length {length} cannot reach a height of {height}"),
        });
    }
    Ok((rise / run_squared.sqrt()).atan().to_degrees())
}

fn rotate_all(parts: Vec<Part>, rotation: Rotation) -> Parts {
    parts
        .into_iter()
        .map(|part| PartNode::from(part.rotated(rotation)))
        .collect()
}

impl Product for KidFort {
    fn id(&self) -> &'static str {
        "kid-fort"
    }

    fn label(&self) -> &'static str {
        "Kid Fort"
    }

    fn parameters(&self) -> Schema {
        Schema::new(vec![
            Parameter::number("fort_height", "Fort Height", "fh", 10, 30).step(5),
            Parameter::number("fort_width", "Fort Width", "fw", 10, 30).step(5),
            Parameter::number("fort_depth", "Fort Depth", "fd", 10, 30).step(5),
            Parameter::number("support_height", "Support Height", "sh", 10, 30),
            Parameter::number("support_length", "Support Length", "sl", 10, 30).step(5),
        ])
    }

    fn presets(&self) -> Vec<Preset> {
        vec![Preset::new("default", "Default")
            .with("fort_height", 30)
            .with("fort_width", 30)
            .with("fort_depth", 30)
            .with("support_length", 30)
            .with("support_height", 21)]
    }

    fn parts(&self, values: &ParamValues) -> Result<Parts> {
        let height = values.number("fort_height")?;
        let width = values.number("fort_width")?;
        let depth = values.number("fort_depth")?;
        let support_height = values.number("support_height")?;
        let support_length = values.number("support_length")?;

        let angle = support_angle(support_length, support_height)?;
        let tilt = [0.0, 1.0, 0.0];

        let left = rotate_all(
            vec![
                Part::beam_x((1.0 - support_length, 1.0), 1, support_height),
                Part::beam_x((1.0 - support_length, 1.0), depth - 2.0, support_height),
                Part::beam_y(4.0 - support_length, (0.0, depth), support_height + 1.0),
            ],
            Rotation::new(tilt, angle - 90.0, [0.0, 0.0, support_height]),
        );

        let outer = width - 1.0 + support_length;
        let right = rotate_all(
            vec![
                Part::beam_x((width - 1.0, outer), 1, support_height),
                Part::beam_x((width - 1.0, outer), depth - 2.0, support_height),
                Part::beam_y(outer - 4.0, (0.0, depth), support_height + 1.0),
            ],
            Rotation::new(tilt, 90.0 - angle, [width - 1.0, 0.0, support_height]),
        );

        Ok(parts![
            Part::beam_z(0, 0, (0.0, height)),
            Part::beam_z(width - 1.0, 0, (0.0, height)),
            Part::beam_z(0, depth - 1.0, (0.0, height)),
            Part::beam_z(width - 1.0, depth - 1.0, (0.0, height)),
            Part::beam_x((0.0, width), 1, height - 1.0),
            Part::beam_x((0.0, width), depth - 2.0, height - 1.0),
            Part::beam_y(1, (0.0, depth), height - 2.0),
            Part::beam_y(width - 2.0, (0.0, depth), height - 2.0),
            left,
            right,
        ])
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::products::build;

    #[test]
    fn test_supports_are_tilted_towards_the_fort() {
        let parts = build(&KidFort, "default");
        assert_eq!(parts.len(), 14);

        let Part::BeamX { rotate: Some(left), .. } = &parts[8] else {
            panic!("expected a rotated beam, got {:?}", parts[8]);
        };
        let Part::BeamX { rotate: Some(right), .. } = &parts[11] else {
            panic!("expected a rotated beam, got {:?}", parts[11]);
        };
        assert_eq!(left.origin, [0.0, 0.0, 21.0]);
        assert_eq!(right.origin, [29.0, 0.0, 21.0]);
        assert!((left.angle + right.angle).abs() < 1e-9);
        assert!(left.angle < 0.0);
    }

    #[test]
    fn test_support_too_short() {
        assert!(matches!(support_angle(10.0, 11.0), Err(Error::Unsupported { .. })));
        assert!(matches!(support_angle(10.0, 10.5), Err(Error::Unsupported { .. })));
        assert!(support_angle(30.0, 21.0).is_ok());
    }
}
