//! Recipe book: the registry of known recipes.

use ahash::AHashMap;
use tracing::debug;

use crate::chest::LootTable;
use crate::grid::CraftingGrid;
use crate::item::Item;
use crate::recipe::{Recipe, RecipeError, RecipeResult, BUILTIN_RECIPES};
use crate::smelting::BurnRecipe;

/// An ingredient no recipe, chest or furnace can provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingSource {
    /// Recipe that needs the item
    pub recipe: Item,
    /// Item that cannot be obtained
    pub ingredient: Item,
}

/// All recipes known to the game, keyed by result.
#[derive(Debug, Clone, Default)]
pub struct RecipeBook {
    /// Recipes in registration order
    recipes: Vec<Recipe>,
    /// Index into `recipes` by result
    by_result: AHashMap<Item, usize>,
}

impl RecipeBook {
    /// Creates an empty recipe book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a book holding the built-in recipes.
    ///
    /// # Panics
    /// Panics if a built-in recipe is malformed.
    #[must_use]
    pub fn builtin() -> Self {
        let mut book = Self::new();
        for (result, pairs) in BUILTIN_RECIPES {
            let recipe = Recipe::from_pairs(*result, pairs).expect("built-in recipes are valid");
            book.register(recipe).expect("built-in recipes are unique");
        }
        book
    }

    /// Builds a book from recipes, rejecting duplicates.
    pub fn from_recipes(recipes: impl IntoIterator<Item = Recipe>) -> RecipeResult<Self> {
        let mut book = Self::new();
        for recipe in recipes {
            book.register(recipe)?;
        }
        Ok(book)
    }

    /// Registers a recipe. Each result can only have one recipe.
    pub fn register(&mut self, recipe: Recipe) -> RecipeResult<()> {
        let result = recipe.result();
        if self.by_result.contains_key(&result) {
            return Err(RecipeError::DuplicateResult(result));
        }

        debug!(
            "Registered recipe for {:?} ({} ingredients)",
            result,
            recipe.ingredients().len()
        );
        self.by_result.insert(result, self.recipes.len());
        self.recipes.push(recipe);
        Ok(())
    }

    /// Gets the recipe producing `result`.
    #[must_use]
    pub fn get(&self, result: Item) -> Option<&Recipe> {
        self.by_result.get(&result).map(|&i| &self.recipes[i])
    }

    /// Like [`RecipeBook::get`], but fails with [`RecipeError::NotFound`].
    pub fn require(&self, result: Item) -> RecipeResult<&Recipe> {
        self.get(result).ok_or(RecipeError::NotFound(result))
    }

    /// Returns the number of registered recipes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Returns true if no recipe is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Returns all recipes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    /// Finds the recipe whose layout is exactly `grid`.
    #[must_use]
    pub fn find_match(&self, grid: &CraftingGrid) -> Option<&Recipe> {
        if grid.is_empty() {
            return None;
        }
        self.recipes.iter().find(|recipe| grid.matches(recipe))
    }

    /// Lists ingredients that nothing can produce.
    ///
    /// An item is obtainable when a chest holds it, a burn recipe yields it
    /// or another recipe in this book crafts it.
    #[must_use]
    pub fn validate_references(&self, loot: &LootTable) -> Vec<MissingSource> {
        let obtainable = |item: Item| {
            loot.contains(item)
                || BurnRecipe::all().iter().any(|b| b.result() == item)
                || self.by_result.contains_key(&item)
        };

        let mut missing = Vec::new();
        for recipe in &self.recipes {
            for item in recipe.distinct_items() {
                if !obtainable(item) {
                    missing.push(MissingSource {
                        recipe: recipe.result(),
                        ingredient: item,
                    });
                }
            }
        }
        missing
    }
}

impl<'a> IntoIterator for &'a RecipeBook {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokepc_common::GridPosition;

    fn pos(raw: u8) -> GridPosition {
        GridPosition::new(raw).expect("valid position")
    }

    fn stick() -> Recipe {
        Recipe::from_pairs(Item::Stick, &[(Item::OakPlanks, 2), (Item::OakPlanks, 5)])
            .expect("valid recipe")
    }

    #[test]
    fn test_register_and_get() {
        let mut book = RecipeBook::new();
        book.register(stick()).expect("should register");

        assert_eq!(book.len(), 1);
        assert!(book.get(Item::Stick).is_some());
        assert!(book.get(Item::Cake).is_none());
        assert_eq!(book.require(Item::Cake), Err(RecipeError::NotFound(Item::Cake)));
    }

    #[test]
    fn test_register_duplicate_result() {
        let mut book = RecipeBook::new();
        book.register(stick()).expect("should register");
        assert_eq!(
            book.register(stick()),
            Err(RecipeError::DuplicateResult(Item::Stick))
        );
    }

    #[test]
    fn test_builtin_book() {
        let book = RecipeBook::builtin();
        let results: Vec<Item> = book.iter().map(Recipe::result).collect();
        assert_eq!(
            results,
            vec![
                Item::Stick,
                Item::Bucket,
                Item::IronPickaxe,
                Item::Cake,
                Item::Beacon
            ]
        );
    }

    #[test]
    fn test_find_match() {
        let book = RecipeBook::builtin();

        for recipe in &book {
            let found = book.find_match(&recipe.project()).map(Recipe::result);
            assert_eq!(found, Some(recipe.result()));
        }

        let mut grid = CraftingGrid::empty();
        assert!(book.find_match(&grid).is_none());
        grid.set(pos(1), Item::Diamond);
        assert!(book.find_match(&grid).is_none());
    }

    #[test]
    fn test_builtin_ingredients_are_obtainable() {
        let book = RecipeBook::builtin();
        assert!(book.validate_references(&LootTable::builtin()).is_empty());
    }

    #[test]
    fn test_validate_references_reports_unobtainable() {
        let book = RecipeBook::from_recipes([stick()]).expect("valid book");
        let missing = book.validate_references(&LootTable::default());
        assert_eq!(
            missing,
            vec![MissingSource {
                recipe: Item::Stick,
                ingredient: Item::OakPlanks,
            }]
        );
    }
}
