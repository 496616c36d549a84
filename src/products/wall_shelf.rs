use gridparts::{parts, Fit, Part, Parts};

use crate::{ParamValues, Parameter, Plugin, Preset, Product, Result, Schema};

/// A single shelf hung from two short mounts, above or below them.
pub struct WallShelf;

impl Product for WallShelf {
    fn id(&self) -> &'static str {
        "wall-shelf"
    }

    fn label(&self) -> &'static str {
        "Wall Shelf"
    }

    fn parameters(&self) -> Schema {
        Schema::new(vec![
            Parameter::number("shelf_depth", "Shelf depth", "sd", 5, 15),
            Parameter::number("shelf_width", "Shelf width", "sw", 10, 30).step(5),
            Parameter::number("mount_length", "Mount length", "ml", 3, 10),
            Parameter::choice("mount_type", "Mount Type", "mt", &[("bottom", "Bottom"), ("top", "Top")]),
        ])
    }

    fn presets(&self) -> Vec<Preset> {
        let preset = |id: &str, label: &str, mount: &str| {
            Preset::new(id, label)
                .with("shelf_width", 30)
                .with("shelf_depth", 5)
                .with("mount_length", 5)
                .with("mount_type", mount)
        };
        vec![
            preset("regular-bottom", "Regular (Bottom)", "bottom"),
            preset("regular-top", "Regular (Top)", "top"),
        ]
    }

    fn plugins(&self) -> &'static [Plugin] {
        &[Plugin::SmartFasteners]
    }

    fn parts(&self, values: &ParamValues) -> Result<Parts> {
        let depth = values.number("shelf_depth")?;
        let width = values.number("shelf_width")?;
        let mount = values.number("mount_length")?;

        // the shelf sits on top of the mounts, or hangs beneath them
        let (panel_z, fit, beam_z, mounts, arm_z) = match values.choice("mount_type")? {
            "bottom" => (mount, Fit::Bottom, mount - 1.0, (0.0, mount), mount - 2.0),
            _ => (0.0, Fit::Top, 1.0, (1.0, mount + 1.0), 2.0),
        };

        Ok(parts![
            Part::panel_xy((0.0, width), (0.0, -depth), panel_z).with_fit(fit),
            Part::beam_x((0.0, width), -1, beam_z),
            Part::beam_z(1, 0, mounts),
            Part::beam_z(width - 2.0, 0, mounts),
            Part::beam_y(2, (0, -2), arm_z),
            Part::beam_y(width - 3.0, (0, -2), arm_z),
        ])
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::products::build;

    #[test]
    fn test_mount_types() {
        let bottom = build(&WallShelf, "regular-bottom");
        assert_eq!(bottom[0], Part::panel_xy((0, 30), (0, -5), 5).with_fit(Fit::Bottom));
        assert_eq!(bottom[2], Part::beam_z(1, 0, (0, 5)));

        let top = build(&WallShelf, "regular-top");
        assert_eq!(top[0], Part::panel_xy((0, 30), (0, -5), 0).with_fit(Fit::Top));
        assert_eq!(top[2], Part::beam_z(1, 0, (1, 6)));
        assert_eq!(top[5], Part::beam_y(27, (0, -2), 2));
    }
}
