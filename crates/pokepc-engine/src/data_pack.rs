//! Data pack loading.
//!
//! A data pack is a TOML file that replaces the built-in recipes and/or
//! chest loot. Everything is validated while loading: positions out of
//! range, duplicate positions, duplicate slots and unknown chests are
//! rejected before any of it reaches the game.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use pokepc_common::{DataError, SchemaVersion};
use pokepc_gameplay::{
    ChestLootEntry, ChestType, Item, LootError, LootTable, Recipe, RecipeBook, RecipeError,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while loading a data pack.
#[derive(Debug, Error)]
pub enum DataPackError {
    /// File not found.
    #[error("Data pack not found: {0}")]
    NotFound(PathBuf),

    /// Export target is already there.
    #[error("Data pack already exists: {0}")]
    AlreadyExists(PathBuf),

    /// Filesystem error while reading or writing.
    #[error("Data pack I/O error: {0}")]
    Read(#[from] std::io::Error),

    /// Failed to parse TOML.
    #[error("Failed to parse data pack TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// Failed to write TOML.
    #[error("Failed to serialize data pack: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Version or raw value rejected.
    #[error("Invalid data pack: {0}")]
    Data(#[from] DataError),

    /// A recipe failed validation.
    #[error("Invalid recipe #{index}: {source}")]
    Recipe {
        /// Zero-based index in the file.
        index: usize,
        /// What was wrong.
        source: RecipeError,
    },

    /// The loot table failed validation.
    #[error("Invalid loot: {0}")]
    Loot(#[from] LootError),
}

/// Result type for data pack operations.
pub type DataPackResult<T> = Result<T, DataPackError>;

/// One ingredient placement as written in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientDefinition {
    /// Item placed.
    pub item: Item,
    /// Grid position, 1..=9.
    pub position: u8,
}

/// A recipe as written in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDefinition {
    /// Item produced.
    pub result: Item,
    /// Occupied grid slots.
    #[serde(default)]
    pub ingredients: Vec<IngredientDefinition>,
}

impl RecipeDefinition {
    /// Validates and converts to a gameplay recipe.
    pub fn to_recipe(&self) -> Result<Recipe, RecipeError> {
        let pairs: Vec<(Item, u8)> = self
            .ingredients
            .iter()
            .map(|i| (i.item, i.position))
            .collect();
        Recipe::from_pairs(self.result, &pairs)
    }

    fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            result: recipe.result(),
            ingredients: recipe
                .ingredients()
                .iter()
                .map(|i| IngredientDefinition {
                    item: i.item,
                    position: i.position.get(),
                })
                .collect(),
        }
    }
}

/// A chest loot entry as written in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LootDefinition {
    /// Item in the stack.
    pub item: Item,
    /// Stack size.
    pub max_stack: u8,
    /// Chest slot, 1..=27.
    pub slot: u8,
    /// Chest tag, 1..=3.
    pub chest: u8,
}

impl LootDefinition {
    /// Converts to a gameplay loot entry. Table-wide checks happen in [`LootTable::new`].
    pub fn to_entry(&self) -> Result<ChestLootEntry, LootError> {
        let chest = ChestType::from_tag(self.chest)?;
        ChestLootEntry::new(self.item, self.max_stack, self.slot, chest)
    }

    fn from_entry(entry: &ChestLootEntry) -> Self {
        Self {
            item: entry.item,
            max_stack: entry.max_stack,
            slot: entry.slot.get(),
            chest: entry.chest.tag(),
        }
    }
}

/// The on-disk data pack format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataPackFile {
    /// File format version.
    #[serde(default = "default_version")]
    pub version: String,
    /// Recipes (empty = keep the built-in ones).
    #[serde(default)]
    pub recipes: Vec<RecipeDefinition>,
    /// Chest loot (empty = keep the built-in loot).
    #[serde(default)]
    pub loot: Vec<LootDefinition>,
}

fn default_version() -> String {
    SchemaVersion::DATA_PACK.to_string()
}

impl DataPackFile {
    /// Parses a data pack from TOML text.
    pub fn parse(content: &str) -> DataPackResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Describes existing game data in file form.
    #[must_use]
    pub fn from_game_data(data: &GameData) -> Self {
        Self {
            version: default_version(),
            recipes: data.book.iter().map(RecipeDefinition::from_recipe).collect(),
            loot: data
                .loot
                .entries()
                .iter()
                .map(LootDefinition::from_entry)
                .collect(),
        }
    }

    /// Serializes to TOML text.
    pub fn to_toml(&self) -> DataPackResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Recipes and loot the game runs with.
#[derive(Debug, Clone)]
pub struct GameData {
    /// Recipe book.
    pub book: RecipeBook,
    /// Chest loot.
    pub loot: LootTable,
}

impl GameData {
    /// The data shipped with the game.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            book: RecipeBook::builtin(),
            loot: LootTable::builtin(),
        }
    }

    /// Validates a parsed data pack and builds game data from it.
    ///
    /// Sections left empty in the file keep their built-in contents.
    pub fn from_file(file: &DataPackFile) -> DataPackResult<Self> {
        let version: SchemaVersion = file.version.parse()?;
        SchemaVersion::DATA_PACK.ensure_can_read(&version)?;

        let book = if file.recipes.is_empty() {
            debug!("Data pack has no recipes, keeping built-in recipes");
            RecipeBook::builtin()
        } else {
            let mut book = RecipeBook::new();
            for (index, definition) in file.recipes.iter().enumerate() {
                definition
                    .to_recipe()
                    .and_then(|recipe| book.register(recipe))
                    .map_err(|source| DataPackError::Recipe { index, source })?;
            }
            book
        };

        let loot = if file.loot.is_empty() {
            debug!("Data pack has no loot, keeping built-in loot");
            LootTable::builtin()
        } else {
            let entries = file
                .loot
                .iter()
                .map(LootDefinition::to_entry)
                .collect::<Result<Vec<_>, _>>()?;
            LootTable::new(entries)?
        };

        for missing in book.validate_references(&loot) {
            warn!(
                "Recipe for {:?} needs {:?}, which no chest, furnace or recipe provides",
                missing.recipe, missing.ingredient
            );
        }

        Ok(Self { book, loot })
    }

    /// Loads and validates a data pack file.
    pub fn load(path: &Path) -> DataPackResult<Self> {
        if !path.exists() {
            return Err(DataPackError::NotFound(path.to_path_buf()));
        }

        debug!("Loading data pack: {:?}", path);
        let content = fs::read_to_string(path)?;
        let data = Self::from_file(&DataPackFile::parse(&content)?)?;

        info!(
            "Loaded {} recipes and {} loot entries from {}",
            data.book.len(),
            data.loot.len(),
            path.display()
        );
        Ok(data)
    }

    /// Writes this data as a new data pack file. An existing file is
    /// never replaced.
    pub fn export(&self, path: &Path) -> DataPackResult<()> {
        let text = DataPackFile::from_game_data(self).to_toml()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| match e.kind() {
                io::ErrorKind::AlreadyExists => DataPackError::AlreadyExists(path.to_path_buf()),
                _ => DataPackError::Read(e),
            })?;
        file.write_all(text.as_bytes())?;
        info!("Exported data pack to {}", path.display());
        Ok(())
    }
}
