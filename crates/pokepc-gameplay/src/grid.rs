//! The 3x3 crafting grid and recipe placement projection.

use pokepc_common::{GridPosition, GRID_SIDE, GRID_SIZE};
use serde::Serialize;

use crate::item::Item;
use crate::recipe::{Ingredient, Recipe};

/// One slot of a crafting grid.
pub type GridSlot = Ingredient;

/// A fully expanded crafting grid: exactly one slot per position, in order.
///
/// Slot `i` (zero-based) always holds position `i + 1`. Empty slots hold
/// [`Item::EMPTY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CraftingGrid {
    slots: [GridSlot; GRID_SIZE],
}

impl Default for CraftingGrid {
    fn default() -> Self {
        Self::empty()
    }
}

impl CraftingGrid {
    /// Creates a grid where every slot is empty.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            slots: GridPosition::ALL.map(|position| GridSlot::new(Item::EMPTY, position)),
        }
    }

    /// Projects a recipe onto the grid.
    #[must_use]
    pub fn project(recipe: &Recipe) -> Self {
        Self::from_ingredients(recipe.ingredients())
    }

    /// Projects arbitrary placements onto the grid.
    ///
    /// Walks positions 1..=9 and takes the first placement found for each;
    /// positions without one get the empty sentinel.
    #[must_use]
    pub fn from_ingredients(ingredients: &[Ingredient]) -> Self {
        Self {
            slots: GridPosition::ALL.map(|position| {
                ingredients
                    .iter()
                    .find(|i| i.position == position)
                    .copied()
                    .unwrap_or(GridSlot::new(Item::EMPTY, position))
            }),
        }
    }

    /// Places an item, replacing whatever was in the slot.
    pub fn set(&mut self, position: GridPosition, item: Item) {
        self.slots[position.index()].item = item;
    }

    /// Empties a slot.
    pub fn clear_slot(&mut self, position: GridPosition) {
        self.set(position, Item::EMPTY);
    }

    /// Slot at `position`.
    #[must_use]
    pub fn slot(&self, position: GridPosition) -> GridSlot {
        self.slots[position.index()]
    }

    /// Item at `position`.
    #[must_use]
    pub fn item(&self, position: GridPosition) -> Item {
        self.slot(position).item
    }

    /// All nine slots in position order.
    #[must_use]
    pub fn slots(&self) -> &[GridSlot; GRID_SIZE] {
        &self.slots
    }

    /// The three rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[GridSlot]> {
        self.slots.chunks(GRID_SIDE as usize)
    }

    /// Slots holding something other than the empty sentinel.
    pub fn occupied(&self) -> impl Iterator<Item = &GridSlot> {
        self.slots.iter().filter(|slot| !slot.item.is_empty())
    }

    /// Check if grid is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupied().next().is_none()
    }

    /// Inverse of the projection: the occupied slots as placements.
    #[must_use]
    pub fn to_ingredients(&self) -> Vec<Ingredient> {
        self.occupied().copied().collect()
    }

    /// Check if this grid holds exactly the layout of `recipe`.
    #[must_use]
    pub fn matches(&self, recipe: &Recipe) -> bool {
        *self == Self::project(recipe)
    }
}

impl std::ops::Index<GridPosition> for CraftingGrid {
    type Output = GridSlot;

    fn index(&self, position: GridPosition) -> &Self::Output {
        &self.slots[position.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pos(raw: u8) -> GridPosition {
        GridPosition::new(raw).expect("valid position")
    }

    #[test]
    fn test_project_sparse_recipe() {
        let recipe = Recipe::from_pairs(Item::Cake, &[(Item::Wheat, 1), (Item::SugarCane, 5)])
            .expect("valid recipe");
        let grid = CraftingGrid::project(&recipe);

        let expected: Vec<(Item, u8)> = vec![
            (Item::Wheat, 1),
            (Item::Air, 2),
            (Item::Air, 3),
            (Item::Air, 4),
            (Item::SugarCane, 5),
            (Item::Air, 6),
            (Item::Air, 7),
            (Item::Air, 8),
            (Item::Air, 9),
        ];
        let actual: Vec<(Item, u8)> = grid
            .slots()
            .iter()
            .map(|s| (s.item, s.position.get()))
            .collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_project_empty_recipe() {
        let recipe = Recipe::new(Item::Cake, Vec::new()).expect("valid recipe");
        let grid = recipe.project();

        assert!(grid.is_empty());
        assert_eq!(grid, CraftingGrid::empty());
        for (i, slot) in grid.slots().iter().enumerate() {
            assert_eq!(slot.item, Item::EMPTY);
            assert_eq!(slot.position.index(), i);
        }
    }

    #[test]
    fn test_from_ingredients_first_match_wins() {
        let ingredients = [
            Ingredient::new(Item::Wheat, pos(3)),
            Ingredient::new(Item::Sand, pos(3)),
        ];
        let grid = CraftingGrid::from_ingredients(&ingredients);
        assert_eq!(grid.item(pos(3)), Item::Wheat);
    }

    #[test]
    fn test_rows() {
        let recipe = Recipe::from_pairs(Item::Stick, &[(Item::OakPlanks, 2), (Item::OakPlanks, 5)])
            .expect("valid recipe");
        let grid = recipe.project();
        let middle: Vec<Item> = grid
            .rows()
            .map(|row| row[1].item)
            .collect();

        assert_eq!(grid.rows().count(), 3);
        assert_eq!(middle, vec![Item::OakPlanks, Item::OakPlanks, Item::Air]);
    }

    #[test]
    fn test_set_and_matches() {
        let recipe = Recipe::from_pairs(Item::Stick, &[(Item::OakPlanks, 2), (Item::OakPlanks, 5)])
            .expect("valid recipe");

        let mut grid = CraftingGrid::empty();
        grid.set(pos(2), Item::OakPlanks);
        assert!(!grid.matches(&recipe));

        grid.set(pos(5), Item::OakPlanks);
        assert!(grid.matches(&recipe));
        assert_eq!(grid[pos(5)].item, Item::OakPlanks);

        grid.set(pos(9), Item::Wheat);
        assert!(!grid.matches(&recipe));

        grid.clear_slot(pos(9));
        assert!(grid.matches(&recipe));
    }

    fn arb_item() -> impl Strategy<Value = Item> {
        prop::sample::select(&Item::all()[1..])
    }

    /// Recipes with unique positions and non-empty items.
    fn arb_recipe() -> impl Strategy<Value = Recipe> {
        prop::collection::btree_map(1u8..=9, arb_item(), 0..=9).prop_map(|layout| {
            let pairs: Vec<(Item, u8)> = layout.into_iter().map(|(p, item)| (item, p)).collect();
            Recipe::from_pairs(Item::Cake, &pairs).expect("generated recipe is valid")
        })
    }

    proptest! {
        #[test]
        fn prop_slot_positions_are_in_order(recipe in arb_recipe()) {
            let grid = recipe.project();
            for (i, slot) in grid.slots().iter().enumerate() {
                prop_assert_eq!(usize::from(slot.position.get()), i + 1);
            }
        }

        #[test]
        fn prop_slots_hold_recipe_items_or_empty(recipe in arb_recipe()) {
            let grid = recipe.project();
            for position in GridPosition::ALL {
                let expected = recipe
                    .ingredient_at(position)
                    .map_or(Item::EMPTY, |i| i.item);
                prop_assert_eq!(grid.item(position), expected);
            }
        }

        #[test]
        fn prop_projection_is_idempotent(recipe in arb_recipe()) {
            let grid = recipe.project();
            prop_assert_eq!(CraftingGrid::from_ingredients(&grid.to_ingredients()), grid);
            prop_assert_eq!(CraftingGrid::from_ingredients(grid.slots()), grid);
        }

        #[test]
        fn prop_occupied_count_matches_recipe(recipe in arb_recipe()) {
            prop_assert_eq!(recipe.project().occupied().count(), recipe.ingredients().len());
        }
    }
}
