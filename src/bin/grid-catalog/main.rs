use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use grid_catalog::Config;
use tracing_subscriber::prelude::*;

mod cmd_catalog;
mod cmd_serve;

const DEFAULT_CONFIG: &str = "grid-catalog.toml";

/// Browse and build parametric grid furniture.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "grid-catalog")]
struct Cli {
    /// Config file to use. Defaults to `grid-catalog.toml` when it exists.
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Print debug info
    #[arg(long, short, global = true)]
    debug: bool,

    /// Print logs as json
    #[arg(long, short, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Which product to build and how.
#[derive(Args, Debug, Clone)]
struct BuildArgs {
    /// The product id.
    product: String,

    /// The preset to start from. Defaults to the product's first preset.
    #[arg(long, short)]
    preset: Option<String>,

    /// Override a parameter, as `key=value`. May be repeated.
    #[arg(long = "set", short = 's', value_name = "KEY=VALUE")]
    values: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the products in the catalog.
    List,

    /// Describe a product's parameters, presets and plugins.
    Show {
        /// The product id.
        product: String,
    },

    /// List a product's presets and their values.
    Presets {
        /// The product id.
        product: String,
    },

    /// Print the parts of a product as JSON.
    Parts {
        #[command(flatten)]
        build: BuildArgs,

        /// Print a flat list rather than nested groups.
        #[arg(long)]
        flat: bool,
    },

    /// Count the beams, panels and fasteners a product needs.
    Tally {
        #[command(flatten)]
        build: BuildArgs,
    },

    /// Serve the catalog over HTTP.
    Serve {
        /// `host:port` to bind to on the host system. Overrides the config file.
        #[arg(long, short)]
        bind: Option<String>,
    },
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::from_file(path)
            .map_err(|e| anyhow::anyhow!("failed to load config from {}: {}", path.display(), e)),
        None if Path::new(DEFAULT_CONFIG).exists() => Config::from_file(Path::new(DEFAULT_CONFIG)),
        None => Ok(Config::default()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.debug { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))?;

    // Initialize tracing.
    tracing_subscriber::registry()
        .with(filter)
        .with(
            cli.json
                .then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)),
        )
        .with((!cli.json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .init();

    let cfg = load_config(cli.config.as_deref())?;
    tracing::debug!(?cfg, "loaded config");

    match cli.command {
        Commands::List => cmd_catalog::list(&cfg),
        Commands::Show { ref product } => cmd_catalog::show(&cfg, product),
        Commands::Presets { ref product } => cmd_catalog::presets(&cfg, product),
        Commands::Parts { ref build, flat } => cmd_catalog::parts(&cfg, build, flat),
        Commands::Tally { ref build } => cmd_catalog::tally(&cfg, build),
        Commands::Serve { ref bind } => cmd_serve::main(&cli, &cfg, bind.as_deref()).await,
    }
}
