use anyhow::Result;
use grid_catalog::{server, Catalog, Config};

use super::Cli;

pub async fn main(cli: &Cli, cfg: &Config, bind: Option<&str>) -> Result<()> {
    let bind = bind.unwrap_or(&cfg.server.bind);
    let catalog = Catalog::with_config(&cfg.catalog);
    tracing::info!(bind = bind, products = catalog.len(), "starting server");

    let logger = server::Logging {
        debug: cli.debug,
        json: cli.json,
    }
    .create_logger("grid-catalog");

    server::serve(bind, catalog, logger).await
}
