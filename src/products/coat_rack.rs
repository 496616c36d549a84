use gridparts::{parts, Part, PartNode, Parts};

use super::common::{half_ceil, half_floor, steps};
use crate::{ParamValues, Parameter, Plugin, Preset, Product, Result, Schema};

/// A single post with hooks winding around it.
pub struct CoatRack;

fn hook(index: usize, length: f64, height: f64) -> Part {
    let z = height - index as f64 - 2.0;
    match index % 4 {
        0 => Part::beam_x((-1.0, length), -1, z),
        1 => Part::beam_y(1, (-1.0, length), z),
        2 => Part::beam_x((1.0, -length), 1, z),
        _ => Part::beam_y(-1, (1.0, -length), z),
    }
}

impl Product for CoatRack {
    fn id(&self) -> &'static str {
        "coat-rack"
    }

    fn label(&self) -> &'static str {
        "Coat Rack"
    }

    fn parameters(&self) -> Schema {
        Schema::new(vec![
            Parameter::number("base_width", "Base width", "bw", 8, 15),
            Parameter::number("hook_length", "Hook length", "hl", 5, 15),
            Parameter::number("hook_count", "Number of Hooks", "nh", 1, 12),
            Parameter::number("height", "Height", "h", 5, 30),
        ])
    }

    fn presets(&self) -> Vec<Preset> {
        vec![Preset::new("default", "Default")
            .with("base_width", 8)
            .with("hook_length", 5)
            .with("hook_count", 4)
            .with("height", 30)]
    }

    fn plugins(&self) -> &'static [Plugin] {
        &[Plugin::SmartFasteners]
    }

    fn parts(&self, values: &ParamValues) -> Result<Parts> {
        let base = values.number("base_width")?;
        let hook_length = values.number("hook_length")?;
        let hook_count = values.number("hook_count")?;
        let height = values.number("height")?;

        let hooks: Parts = steps(hook_count)
            .map(|i| PartNode::from(hook(i as usize, hook_length, height)))
            .collect();

        Ok(parts![
            Part::beam_z(0, 0, (0.0, height)),
            // base
            Part::beam_x((-half_ceil(base) + 1.0, half_floor(base) + 1.0), -1, 1),
            Part::beam_y(1, (-1, 1), 0),
            Part::beam_y(-half_ceil(base) + 1.0, (-half_floor(base), half_ceil(base)), 0),
            Part::beam_y(half_floor(base), (-half_floor(base), half_ceil(base)), 0),
            Part::beam_z(-half_ceil(base) + 2.0, 0, (0, 2)),
            Part::beam_z(half_ceil(base) - 1.0, 0, (0, 2)),
            hooks,
        ])
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_hooks_turn_around_the_post() {
        assert_eq!(hook(0, 5.0, 30.0), Part::beam_x((-1, 5), -1, 28));
        assert_eq!(hook(1, 5.0, 30.0), Part::beam_y(1, (-1, 5), 27));
        assert_eq!(hook(2, 5.0, 30.0), Part::beam_x((1, -5), 1, 26));
        assert_eq!(hook(3, 5.0, 30.0), Part::beam_y(-1, (1, -5), 25));
        assert_eq!(hook(4, 5.0, 30.0), Part::beam_x((-1, 5), -1, 24));
    }
}
