//! The HTTP API over the product catalog.

pub mod context;
pub mod endpoints;

use std::{net::SocketAddr, sync::Arc};

use anyhow::{anyhow, Result};
use dropshot::{ApiDescription, ConfigDropshot, HttpServerStarter};
use signal_hook::{
    consts::{SIGINT, SIGTERM},
    iterator::Signals,
};
use slog::Drain;

use crate::{server::context::Context, Catalog};

/// How the server logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Logging {
    /// Log at debug level.
    pub debug: bool,
    /// Log as json.
    pub json: bool,
}

impl Logging {
    /// Setup our logger.
    pub fn create_logger(&self, app: &str) -> slog::Logger {
        if self.json {
            let drain = slog_json::Json::default(std::io::stderr()).fuse();
            self.async_root_logger(drain, app)
        } else {
            let decorator = slog_term::TermDecorator::new().build();
            let drain = slog_term::FullFormat::new(decorator).build().fuse();
            self.async_root_logger(drain, app)
        }
    }

    fn async_root_logger<T>(&self, drain: T, app: &str) -> slog::Logger
    where
        T: Drain + Send + 'static,
        <T as Drain>::Err: std::fmt::Debug,
    {
        let level = if self.debug {
            slog::Level::Debug
        } else {
            slog::Level::Info
        };

        let level_drain = slog::LevelFilter(drain, level).fuse();
        let async_drain = slog_async::Async::new(level_drain).build().fuse();
        slog::Logger::root(async_drain, slog::o!("app" => app.to_owned()))
    }
}

/// Create an API description for the server.
pub fn create_api_description() -> Result<ApiDescription<Arc<Context>>> {
    fn register_endpoints(api: &mut ApiDescription<Arc<Context>>) -> Result<()> {
        let registered = [
            api.register(endpoints::ping),
            api.register(endpoints::api_get_schema),
            api.register(endpoints::list_products),
            api.register(endpoints::get_product),
            api.register(endpoints::get_product_parts),
            api.register(endpoints::evaluate_product),
            api.register(endpoints::tally_product),
        ];
        for result in registered {
            result.map_err(|err| anyhow!("failed to register endpoints: {}", err))?;
        }

        Ok(())
    }

    // Describe the API.
    let tag_config = serde_json::from_str(include_str!("../../openapi/tag-config.json"))?;
    let mut api = ApiDescription::new().tag_config(tag_config);

    register_endpoints(&mut api)?;

    Ok(api)
}

/// Get the OpenAPI specification for the server.
pub fn get_openapi(api: &mut ApiDescription<Arc<Context>>) -> Result<serde_json::Value> {
    let version = semver::Version::parse(clap::crate_version!())?;
    let mut definition = api.openapi("grid-catalog", version);
    definition
        .description("Parametric grid furniture, as lists of beams, panels and fasteners.")
        .json()
        .map_err(|e| e.into())
}

/// Start serving `catalog` on `bind`.
pub async fn create_server(
    bind: &str,
    catalog: Catalog,
    logger: slog::Logger,
) -> Result<(dropshot::HttpServer<Arc<Context>>, Arc<Context>)> {
    let mut api = create_api_description()?;
    let schema = get_openapi(&mut api)?;

    let config_dropshot = ConfigDropshot {
        bind_address: bind.parse()?,
        default_handler_task_mode: dropshot::HandlerTaskMode::Detached,
        ..Default::default()
    };

    let dropshot_logger = logger.new(slog::o!("component" => "dropshot"));

    let api_context = Arc::new(Context::new(schema, logger, catalog));

    let server = HttpServerStarter::new(&config_dropshot, api, api_context.clone(), &dropshot_logger)
        .map_err(|error| anyhow!("failed to create server: {}", error))?
        .start();

    Ok((server, api_context))
}

/// Serve until the server fails or the process is signalled.
pub async fn serve(bind: &str, catalog: Catalog, logger: slog::Logger) -> Result<()> {
    let addr: SocketAddr = bind.parse()?;
    let (server, api_context) = create_server(bind, catalog, logger).await?;
    slog::info!(
        api_context.logger,
        "serving {} products on http://{}",
        api_context.catalog.len(),
        addr
    );

    // SIGKILL cannot be registered, so only the polite signals are handled.
    let mut signals = Signals::new([SIGINT, SIGTERM])?;

    let cloned_api_context = api_context.clone();
    tokio::task::spawn_blocking(move || {
        if let Some(sig) = signals.forever().next() {
            slog::info!(cloned_api_context.logger, "received signal: {:?}", sig);
            slog::info!(cloned_api_context.logger, "all clean, exiting!");
            std::process::exit(0);
        }
    });

    server.await.map_err(|error| anyhow!("server failed: {}", error))?;

    Ok(())
}
