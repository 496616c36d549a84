use gridparts::{parts, Part, Parts};

use super::common::{half_ceil, half_floor};
use crate::{ParamValues, Parameter, Plugin, Preset, Product, Result, Schema};

/// A hanging rail on two H-frame ends.
pub struct ClothesRack;

impl Product for ClothesRack {
    fn id(&self) -> &'static str {
        "clothes-rack"
    }

    fn label(&self) -> &'static str {
        "Clothes Rack"
    }

    fn parameters(&self) -> Schema {
        Schema::new(vec![
            Parameter::number("width", "Width", "w", 10, 30).step(5),
            Parameter::number("height", "Height", "h", 10, 30).step(5),
            Parameter::number("leg_length", "Leg length", "ll", 10, 20).step(5),
        ])
    }

    fn presets(&self) -> Vec<Preset> {
        vec![Preset::new("default", "Default")
            .with("width", 30)
            .with("height", 30)
            .with("leg_length", 15)]
    }

    fn plugins(&self) -> &'static [Plugin] {
        &[Plugin::SmartFasteners]
    }

    fn parts(&self, values: &ParamValues) -> Result<Parts> {
        let width = values.number("width")?;
        let height = values.number("height")?;
        let leg = (-half_floor(values.number("leg_length")?), half_ceil(values.number("leg_length")?));

        Ok(parts![
            Part::beam_x((0.0, width), 0, 1),
            Part::beam_x((0.0, width), 0, height - 1.0),
            // feet
            Part::beam_y(1, leg, 0),
            Part::beam_y(width - 2.0, leg, 0),
            // posts either side of the rails
            Part::beam_z(0, -1, (0.0, height)),
            Part::beam_z(0, 1, (0.0, height)),
            Part::beam_z(width - 1.0, -1, (0.0, height)),
            Part::beam_z(width - 1.0, 1, (0.0, height)),
            Part::beam_y(1, (-1, 2), height - 2.0),
            Part::beam_y(width - 2.0, (-1, 2), height - 2.0),
        ])
    }
}
