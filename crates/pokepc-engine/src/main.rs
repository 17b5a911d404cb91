//! # PokePC
//!
//! Command line front-end for the PokePC crafting game data.
//!
//! Renders the home screen, single recipe grids, chest contents and
//! smelting results as text or JSON, and validates data packs.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

mod cli;
mod config;
mod data_pack;
mod render;

use std::io;
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::cli::{Commands, Context};
use crate::config::AppConfig;
use crate::data_pack::GameData;

#[derive(Parser, Debug)]
#[command(
    name = "pokepc",
    version,
    about = "Recipes, chest loot and crafting grids of the PokePC AR crafting game"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (default: platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Data pack replacing the built-in recipes and loot
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Main entry point.
fn main() -> Result<()> {
    let cli = Cli::parse();

    let directive = if cli.verbose { "pokepc=debug" } else { "pokepc=warn" };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env().add_directive(directive.parse()?))
        .init();

    info!("PokePC {}", env!("CARGO_PKG_VERSION"));

    let config_path = cli.config.clone().unwrap_or_else(AppConfig::config_path);
    let mut config = AppConfig::load_from(&config_path);
    config.validate();
    debug!("Config: {:?}", config);

    let data = match cli.data.as_ref().or(config.data_pack.as_ref()) {
        Some(path) => GameData::load(path)
            .with_context(|| format!("failed to load data pack {}", path.display()))?,
        None => GameData::builtin(),
    };

    let ctx = Context {
        config,
        config_path,
        data,
        json: cli.json,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    cli::dispatch(&cli.command, &ctx, &mut out)
}
