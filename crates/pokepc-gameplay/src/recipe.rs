//! Recipe definitions and data structures.
//!
//! A recipe lays out ingredients on the 3x3 crafting grid. Only occupied
//! slots are stored; [`crate::grid::CraftingGrid`] expands them into all
//! nine slots.

use pokepc_common::{DataError, GridPosition};
use serde::Serialize;
use thiserror::Error;

use crate::grid::CraftingGrid;
use crate::item::Item;

/// Recipe error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecipeError {
    /// Result is the empty sentinel
    #[error("Recipe result cannot be air")]
    EmptyResult,
    /// Ingredient is the empty sentinel
    #[error("Recipe for {result:?} places air at position {position}")]
    EmptyIngredient {
        /// Recipe result
        result: Item,
        /// Offending position
        position: GridPosition,
    },
    /// Two ingredients share a grid position
    #[error("Recipe for {result:?} uses position {position} more than once")]
    DuplicatePosition {
        /// Recipe result
        result: Item,
        /// Position used twice
        position: GridPosition,
    },
    /// A recipe for this result is already registered
    #[error("Duplicate recipe for {0:?}")]
    DuplicateResult(Item),
    /// Recipe not found
    #[error("Recipe not found: {0:?}")]
    NotFound(Item),
    /// Raw data failed validation
    #[error(transparent)]
    Data(#[from] DataError),
}

/// Result type for recipe operations.
pub type RecipeResult<T> = Result<T, RecipeError>;

/// An item placed at a position of the crafting grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Ingredient {
    /// Item placed in the slot.
    pub item: Item,
    /// Slot the item goes in.
    pub position: GridPosition,
}

impl Ingredient {
    /// Creates a new ingredient placement.
    #[must_use]
    pub const fn new(item: Item, position: GridPosition) -> Self {
        Self { item, position }
    }

    /// Creates an ingredient from a raw 1-based position.
    pub fn at(item: Item, position: u8) -> RecipeResult<Self> {
        Ok(Self::new(item, GridPosition::new(position)?))
    }
}

/// A shaped crafting recipe.
///
/// Construction rejects air and duplicate positions, so every recipe
/// holds at most one ingredient per slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipe {
    result: Item,
    ingredients: Vec<Ingredient>,
}

impl Recipe {
    /// Creates a validated recipe.
    pub fn new(result: Item, ingredients: Vec<Ingredient>) -> RecipeResult<Self> {
        if result.is_empty() {
            return Err(RecipeError::EmptyResult);
        }

        let mut seen = [false; pokepc_common::GRID_SIZE];
        for ingredient in &ingredients {
            if ingredient.item.is_empty() {
                return Err(RecipeError::EmptyIngredient {
                    result,
                    position: ingredient.position,
                });
            }
            let slot = &mut seen[ingredient.position.index()];
            if *slot {
                return Err(RecipeError::DuplicatePosition {
                    result,
                    position: ingredient.position,
                });
            }
            *slot = true;
        }

        Ok(Self {
            result,
            ingredients,
        })
    }

    /// Creates a recipe from `(item, position)` pairs with raw positions.
    pub fn from_pairs(result: Item, pairs: &[(Item, u8)]) -> RecipeResult<Self> {
        let ingredients = pairs
            .iter()
            .map(|&(item, position)| Ingredient::at(item, position))
            .collect::<RecipeResult<Vec<_>>>()?;
        Self::new(result, ingredients)
    }

    /// Item produced by this recipe.
    #[must_use]
    pub const fn result(&self) -> Item {
        self.result
    }

    /// Occupied slots, in the order they were defined.
    #[must_use]
    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    /// Ingredient placed at `position`, if any.
    #[must_use]
    pub fn ingredient_at(&self, position: GridPosition) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.position == position)
    }

    /// Number of items of a given kind the recipe consumes.
    #[must_use]
    pub fn count(&self, item: Item) -> usize {
        self.ingredients.iter().filter(|i| i.item == item).count()
    }

    /// Distinct items used, in first-use order.
    #[must_use]
    pub fn distinct_items(&self) -> Vec<Item> {
        let mut items = Vec::new();
        for ingredient in &self.ingredients {
            if !items.contains(&ingredient.item) {
                items.push(ingredient.item);
            }
        }
        items
    }

    /// Expands this recipe onto the full crafting grid.
    #[must_use]
    pub fn project(&self) -> CraftingGrid {
        CraftingGrid::project(self)
    }
}

/// Recipes shipped with the game, as `(result, [(item, position)])`.
pub const BUILTIN_RECIPES: &[(Item, &[(Item, u8)])] = &[
    (Item::Stick, &[(Item::OakPlanks, 2), (Item::OakPlanks, 5)]),
    (
        Item::Bucket,
        &[(Item::Iron, 4), (Item::Iron, 6), (Item::Iron, 8)],
    ),
    (
        Item::IronPickaxe,
        &[
            (Item::Iron, 1),
            (Item::Iron, 2),
            (Item::Iron, 3),
            (Item::Stick, 5),
            (Item::Stick, 8),
        ],
    ),
    (
        Item::Cake,
        &[
            (Item::Bucket, 1),
            (Item::Bucket, 2),
            (Item::Bucket, 3),
            (Item::SugarCane, 4),
            (Item::SugarCane, 6),
            (Item::Wheat, 7),
            (Item::Wheat, 8),
            (Item::Wheat, 9),
        ],
    ),
    (
        Item::Beacon,
        &[
            (Item::Glass, 1),
            (Item::Glass, 2),
            (Item::Glass, 3),
            (Item::Glass, 4),
            (Item::Diamond, 5),
            (Item::Glass, 6),
            (Item::Obsidian, 7),
            (Item::Obsidian, 8),
            (Item::Obsidian, 9),
        ],
    ),
];
