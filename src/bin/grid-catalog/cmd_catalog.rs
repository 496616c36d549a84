use anyhow::Result;
use grid_catalog::{Catalog, Config, EvaluateRequest, Evaluation, ParamValues};
use serde::Serialize;

use super::BuildArgs;

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn evaluate(catalog: &Catalog, args: &BuildArgs) -> Result<Evaluation> {
    let schema = catalog.get(&args.product)?.parameters();
    let values = args
        .values
        .iter()
        .map(|assignment| schema.parse_assignment(assignment))
        .collect::<Result<ParamValues, _>>()?;

    let request = EvaluateRequest {
        preset: args.preset.clone(),
        values,
    };
    Ok(catalog.evaluate(&args.product, &request)?)
}

pub fn list(cfg: &Config) -> Result<()> {
    let catalog = Catalog::with_config(&cfg.catalog);
    let width = catalog.iter().map(|p| p.id().len()).max().unwrap_or_default();
    for product in catalog.iter() {
        println!("{:width$}  {}", product.id(), product.label());
    }
    Ok(())
}

pub fn show(cfg: &Config, product: &str) -> Result<()> {
    let catalog = Catalog::with_config(&cfg.catalog);
    print_json(&catalog.get(product)?.info())
}

pub fn presets(cfg: &Config, product: &str) -> Result<()> {
    let catalog = Catalog::with_config(&cfg.catalog);
    let product = catalog.get(product)?;
    let presets = product.presets();
    if presets.is_empty() {
        tracing::info!(product = product.id(), "no presets, builds from defaults");
    }
    for preset in presets {
        let values: Vec<String> = preset.values.iter().map(|(k, v)| format!("{k}={v}")).collect();
        println!("{}\t{}\t{}", preset.id, preset.label, values.join(" "));
    }
    Ok(())
}

pub fn parts(cfg: &Config, args: &BuildArgs, flat: bool) -> Result<()> {
    let catalog = Catalog::with_config(&cfg.catalog);
    let evaluation = evaluate(&catalog, args)?;
    if flat {
        print_json(&evaluation.flat())
    } else {
        print_json(&evaluation.parts)
    }
}

pub fn tally(cfg: &Config, args: &BuildArgs) -> Result<()> {
    let catalog = Catalog::with_config(&cfg.catalog);
    let evaluation = evaluate(&catalog, args)?;
    print_json(&evaluation.tally())
}
