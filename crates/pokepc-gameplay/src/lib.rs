//! # PokePC Gameplay
//!
//! Reference data and screen model for PokePC.
//!
//! This crate provides:
//! - Items with labels and textures
//! - Shaped recipes and the recipe book
//! - Projection of recipes onto the 3x3 crafting grid
//! - Chest loot tables
//! - Furnace (burn) recipes
//! - Home screen model

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod chest;
pub mod crafting;
pub mod grid;
pub mod item;
pub mod recipe;
pub mod screen;
pub mod smelting;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::chest::*;
    pub use crate::crafting::*;
    pub use crate::grid::*;
    pub use crate::item::*;
    pub use crate::recipe::*;
    pub use crate::screen::*;
    pub use crate::smelting::*;
}

pub use prelude::*;

/// Projects a recipe onto the 3x3 crafting grid.
///
/// Slot `i` holds the ingredient placed at position `i + 1`, or
/// [`Item::EMPTY`] when the recipe leaves it free.
#[must_use]
pub fn project(recipe: &Recipe) -> CraftingGrid {
    CraftingGrid::project(recipe)
}
