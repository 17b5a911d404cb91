//! Item definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when an item name does not match any item.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown item: {0:?}")]
pub struct UnknownItem(pub String);

/// Every item the game knows about.
///
/// `Air` is the empty sentinel used for unoccupied crafting grid slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Item {
    /// Nothing. Fills empty grid slots.
    Air,
    /// Wheat.
    Wheat,
    /// Sugar cane.
    SugarCane,
    /// Raw iron, smelted into iron.
    RawIron,
    /// Iron ingot.
    Iron,
    /// Sand, smelted into glass.
    Sand,
    /// Glass.
    Glass,
    /// Obsidian.
    Obsidian,
    /// Oak planks.
    OakPlanks,
    /// Diamond.
    Diamond,
    /// Stick.
    Stick,
    /// Bucket.
    Bucket,
    /// Iron pickaxe.
    IronPickaxe,
    /// Cake.
    Cake,
    /// Beacon.
    Beacon,
}

impl Item {
    /// The empty sentinel.
    pub const EMPTY: Self = Self::Air;

    /// Get all items.
    #[must_use]
    pub fn all() -> &'static [Item] {
        &[
            Self::Air,
            Self::Wheat,
            Self::SugarCane,
            Self::RawIron,
            Self::Iron,
            Self::Sand,
            Self::Glass,
            Self::Obsidian,
            Self::OakPlanks,
            Self::Diamond,
            Self::Stick,
            Self::Bucket,
            Self::IronPickaxe,
            Self::Cake,
            Self::Beacon,
        ]
    }

    /// Label shown to the player.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Air => "Aire",
            Self::Wheat => "Trigo",
            Self::SugarCane => "Caña de azúcar",
            Self::RawIron => "Hierro en bruto",
            Self::Iron => "Lingote de hierro",
            Self::Sand => "Arena",
            Self::Glass => "Cristal",
            Self::Obsidian => "Obsidiana",
            Self::OakPlanks => "Tablones de roble",
            Self::Diamond => "Diamante",
            Self::Stick => "Palo",
            Self::Bucket => "Cubo",
            Self::IronPickaxe => "Pico de hierro",
            Self::Cake => "Pastel",
            Self::Beacon => "Faro",
        }
    }

    /// Stable snake_case identifier, as used in data packs.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Air => "air",
            Self::Wheat => "wheat",
            Self::SugarCane => "sugar_cane",
            Self::RawIron => "raw_iron",
            Self::Iron => "iron",
            Self::Sand => "sand",
            Self::Glass => "glass",
            Self::Obsidian => "obsidian",
            Self::OakPlanks => "oak_planks",
            Self::Diamond => "diamond",
            Self::Stick => "stick",
            Self::Bucket => "bucket",
            Self::IronPickaxe => "iron_pickaxe",
            Self::Cake => "cake",
            Self::Beacon => "beacon",
        }
    }

    /// Texture asset drawn for this item.
    #[must_use]
    pub fn asset(self) -> &'static str {
        match self {
            Self::Air => "textures/item/air.png",
            Self::Wheat => "textures/item/wheat.png",
            Self::SugarCane => "textures/item/sugar_cane.png",
            Self::RawIron => "textures/item/raw_iron.png",
            Self::Iron => "textures/item/iron_ingot.png",
            Self::Sand => "textures/block/sand.png",
            Self::Glass => "textures/block/glass.png",
            Self::Obsidian => "textures/block/obsidian.png",
            Self::OakPlanks => "textures/block/oak_planks.png",
            Self::Diamond => "textures/item/diamond.png",
            Self::Stick => "textures/item/stick.png",
            Self::Bucket => "textures/item/bucket.png",
            Self::IronPickaxe => "textures/item/iron_pickaxe.png",
            Self::Cake => "textures/item/cake.png",
            Self::Beacon => "textures/block/beacon.png",
        }
    }

    /// Returns true for the empty sentinel.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Air)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Item {
    type Err = UnknownItem;

    /// Parses either the snake_case name or the label, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['-', ' '], "_");
        Self::all()
            .iter()
            .copied()
            .find(|item| {
                item.name() == wanted || item.label().to_lowercase().replace(' ', "_") == wanted
            })
            .ok_or_else(|| UnknownItem(s.to_string()))
    }
}
