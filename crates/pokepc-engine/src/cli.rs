//! CLI subcommands.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context as _, Result};
use clap::Subcommand;
use pokepc_gameplay::{smelt, ChestType, HomeScreen, Item, RecipeCard};
use serde::Serialize;

use crate::config::AppConfig;
use crate::data_pack::GameData;
use crate::render::{self, RenderOptions};

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show the home screen: goal and basic recipes
    Home,

    /// Show the crafting grid of one recipe
    Recipe {
        /// Result item, by name (iron_pickaxe) or label (Pico de hierro)
        item: String,
    },

    /// Show the contents of a freshly seeded chest
    Chest {
        /// Chest number (1, 2 or 3)
        chest: u8,
    },

    /// Show what an item turns into in the furnace
    Smelt {
        /// Item to burn
        item: String,
    },

    /// Validate a data pack without using it
    Validate {
        /// Path to the data pack
        file: PathBuf,
    },

    /// Write the active recipes and loot as a data pack
    Export {
        /// Destination file
        #[arg(default_value = "pokepc-data.toml")]
        path: PathBuf,
    },

    /// Write the current settings to the config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

/// Everything a command needs to run.
#[derive(Debug, Clone)]
pub struct Context {
    /// Loaded configuration
    pub config: AppConfig,
    /// Where the configuration lives
    pub config_path: PathBuf,
    /// Active recipes and loot
    pub data: GameData,
    /// Emit JSON instead of text
    pub json: bool,
}

impl Context {
    fn options(&self) -> RenderOptions {
        RenderOptions::from(&self.config)
    }

    fn emit<T: Serialize>(
        &self,
        out: &mut impl Write,
        value: &T,
        text: impl FnOnce() -> String,
    ) -> Result<()> {
        if self.json {
            let json = if self.config.json_pretty {
                serde_json::to_string_pretty(value)?
            } else {
                serde_json::to_string(value)?
            };
            writeln!(out, "{json}")?;
        } else {
            write!(out, "{}", text())?;
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct SmeltOutput {
    input: Item,
    output: Option<Item>,
}

#[derive(Serialize)]
struct ValidateOutput {
    file: PathBuf,
    recipes: usize,
    loot: usize,
}

/// Runs one command, writing its output to `out`.
pub fn dispatch(command: &Commands, ctx: &Context, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Home => {
            let screen = HomeScreen::build(&ctx.data.book)?;
            ctx.emit(out, &screen, || render::render_home(&screen, ctx.options()))
        },
        Commands::Recipe { item } => {
            let result: Item = item.parse()?;
            let recipe = ctx.data.book.require(result)?;
            let card = RecipeCard::from_recipe(recipe);
            ctx.emit(out, &card, || render::render_card(&card, ctx.options()))
        },
        Commands::Chest { chest } => {
            let chest = ChestType::from_tag(*chest)?;
            let inventory = ctx.data.loot.populate(chest);
            ctx.emit(out, &inventory, || render::render_chest(&inventory))
        },
        Commands::Smelt { item } => {
            let input: Item = item.parse()?;
            let output = smelt(input);
            ctx.emit(out, &SmeltOutput { input, output }, || {
                render::render_smelt(input, output)
            })
        },
        Commands::Validate { file } => {
            let data = GameData::load(file)
                .with_context(|| format!("data pack {} is invalid", file.display()))?;
            let summary = ValidateOutput {
                file: file.clone(),
                recipes: data.book.len(),
                loot: data.loot.len(),
            };
            ctx.emit(out, &summary, || {
                format!(
                    "{}: {} recetas, {} entradas de cofre\n",
                    file.display(),
                    summary.recipes,
                    summary.loot
                )
            })
        },
        Commands::Export { path } => {
            ctx.data.export(path)?;
            writeln!(out, "{}", path.display())?;
            Ok(())
        },
        Commands::Init { force } => {
            let path = &ctx.config_path;
            if path.exists() && !force {
                bail!("{} already exists, pass --force to replace it", path.display());
            }
            ctx.config
                .save_to(path)
                .with_context(|| format!("failed to write {}", path.display()))?;
            writeln!(out, "{}", path.display())?;
            Ok(())
        },
    }
}
