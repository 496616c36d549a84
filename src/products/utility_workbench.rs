use gridparts::{parts, Part, Parts};

use super::common::half_floor;
use crate::{Error, ParamValues, Parameter, Plugin, Preset, Product, Result, Schema};

/// A workbench with a lower shelf and the top overhanging the legs.
pub struct UtilityWorkbench;

impl Product for UtilityWorkbench {
    fn id(&self) -> &'static str {
        "utility-workbench"
    }

    fn label(&self) -> &'static str {
        "Utility Workbench"
    }

    fn parameters(&self) -> Schema {
        Schema::new(vec![
            Parameter::number("width", "Width", "w", 10, 30).step(5),
            Parameter::number("depth", "Depth", "d", 10, 20).step(10),
            Parameter::number("work_height", "Work height", "wh", 8, 30),
            Parameter::number("shelf_height", "Shelf height", "sh", 8, 30),
            Parameter::number("overhang", "Overhang", "o", 0, 10),
        ])
    }

    fn presets(&self) -> Vec<Preset> {
        vec![Preset::new("default", "Default")
            .with("width", 30)
            .with("depth", 20)
            .with("work_height", 20)
            .with("shelf_height", 15)
            .with("overhang", 5)]
    }

    fn plugins(&self) -> &'static [Plugin] {
        &[Plugin::SmartFasteners]
    }

    fn parts(&self, values: &ParamValues) -> Result<Parts> {
        let width = values.number("width")?;
        let depth = values.number("depth")?;
        let work = values.number("work_height")?;
        let shelf = values.number("shelf_height")?;
        let overhang = values.number("overhang")?;
        if width == 2.0 * overhang {
            return Err(Error::Unsupported {
                product: "utility-workbench",
                reason: format!(
                    "an overhang of {overhang} on each side leaves no room between the legs of a {width} wide bench"
                ),
            });
        }

        let left = overhang + 1.0;
        let right = width - overhang - 2.0;
        let middle = half_floor(depth);

        Ok(parts![
            Part::beam_z(left, 0, (0.0, work)),
            Part::beam_z(left, depth - 1.0, (0.0, work)),
            Part::beam_z(right, 0, (0.0, work)),
            Part::beam_z(right, depth - 1.0, (0.0, work)),
            // feet and the stretcher between them
            Part::beam_y(overhang, (0.0, depth), 1),
            Part::beam_y(width - overhang - 1.0, (0.0, depth), 1),
            Part::beam_x((overhang, width - overhang), middle, 2),
            Part::beam_z(left, middle + 1.0, (1, 3)),
            Part::beam_z(right, middle + 1.0, (1, 3)),
            // shelf
            Part::beam_y(overhang, (0.0, depth), shelf - 2.0),
            Part::beam_y(width - overhang - 1.0, (0.0, depth), shelf - 2.0),
            Part::beam_x((0.0, width), 1, shelf - 1.0),
            Part::beam_x((0.0, width), depth - 2.0, shelf - 1.0),
            Part::panel_xy((0.0, width), (1.0, depth - 1.0), shelf),
            // work top
            Part::beam_y(overhang, (0.0, depth), work - 2.0),
            Part::beam_y(width - overhang - 1.0, (0.0, depth), work - 2.0),
            Part::beam_x((0.0, width), 1, work - 1.0),
            Part::beam_x((0.0, width), depth - 2.0, work - 1.0),
            Part::panel_xy((0.0, width), (0.0, depth), work),
        ])
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::products::build;

    #[test]
    fn test_default_layout() {
        let parts = build(&UtilityWorkbench, "default");
        assert_eq!(parts.len(), 19);
        assert_eq!(parts[6], Part::beam_x((5, 25), 10, 2));
    }

    #[test]
    fn test_overhang_meeting_in_the_middle() {
        let mut values = UtilityWorkbench.presets()[0].values.clone();
        values.insert("width", 10);
        let err = UtilityWorkbench.parts(&values).unwrap_err();
        assert!(matches!(err, Error::Unsupported { product: "utility-workbench", .. }));
        assert_eq!(
            err.to_string(),
            "`utility-workbench` cannot be built: an overhang of 5 on each side leaves no room between the legs of a \
             10 wide bench"
        );

        values.insert("overhang", 4);
        assert!(UtilityWorkbench.parts(&values).is_ok());
    }
}
