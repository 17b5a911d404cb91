//! Furnace ("burn") recipes.

use serde::{Deserialize, Serialize};

use crate::item::Item;

/// Smelting transforms: one input item burns into one output item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BurnRecipe {
    /// Sand into glass.
    Glass,
    /// Raw iron into an iron ingot.
    Iron,
}

impl BurnRecipe {
    /// Get all burn recipes.
    #[must_use]
    pub fn all() -> &'static [BurnRecipe] {
        &[Self::Glass, Self::Iron]
    }

    /// Item put in the furnace.
    #[must_use]
    pub const fn input(self) -> Item {
        match self {
            Self::Glass => Item::Sand,
            Self::Iron => Item::RawIron,
        }
    }

    /// Item taken out of the furnace.
    #[must_use]
    pub const fn result(self) -> Item {
        match self {
            Self::Glass => Item::Glass,
            Self::Iron => Item::Iron,
        }
    }

    /// Finds the burn recipe accepting `input`.
    #[must_use]
    pub fn for_input(input: Item) -> Option<Self> {
        Self::all().iter().copied().find(|b| b.input() == input)
    }
}

/// What `item` turns into when burnt, if it can be.
#[must_use]
pub fn smelt(item: Item) -> Option<Item> {
    BurnRecipe::for_input(item).map(BurnRecipe::result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smelt() {
        assert_eq!(smelt(Item::Sand), Some(Item::Glass));
        assert_eq!(smelt(Item::RawIron), Some(Item::Iron));
        assert_eq!(smelt(Item::Diamond), None);
        assert_eq!(smelt(Item::Air), None);
    }

    #[test]
    fn test_inputs_are_unique() {
        for recipe in BurnRecipe::all() {
            assert_eq!(BurnRecipe::for_input(recipe.input()), Some(*recipe));
            assert_ne!(recipe.input(), recipe.result());
        }
    }
}
