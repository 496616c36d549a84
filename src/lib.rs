#![deny(missing_docs)]
#![deny(missing_copy_implementations)]
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
#![deny(unused_import_braces)]
#![deny(unused_qualifications)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

//! This crate implements a catalog of parametric furniture and structures,
//! each of which turns a handful of parameters into beams, panels and
//! fasteners placed on a modular grid.

mod catalog;
pub mod config;
mod error;
mod params;
mod preset;
mod product;
mod products;
pub mod server;
mod tally;
#[cfg(test)]
mod tests;

pub use catalog::{Catalog, EvaluateRequest, Evaluation};
pub use config::Config;
pub use error::{Error, Result};
pub use params::{ChoiceOption, ParamValue, ParamValues, Parameter, ParameterKind, Schema};
pub use preset::Preset;
pub use product::{Plugin, Product, ProductInfo};
pub use tally::{BeamCount, Bounds, FastenerCount, PanelCount, Tally};
