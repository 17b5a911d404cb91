//! Screen model for rendering.
//!
//! This module describes what the home screen shows: a title header with a
//! how-to-play button, recipe cards grouped in sections, and the button
//! that opens the AR view. Drawing it is left
//! to the front-end.

use serde::Serialize;
use thiserror::Error;

use crate::crafting::RecipeBook;
use crate::grid::CraftingGrid;
use crate::item::Item;
use crate::recipe::Recipe;

/// Recipes the player is working towards.
pub const GOAL_RECIPES: &[Item] = &[Item::Cake, Item::Beacon];

/// Recipes for intermediate items.
pub const BASIC_RECIPES: &[Item] = &[Item::Stick, Item::Bucket, Item::IronPickaxe];

/// Screen error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScreenError {
    /// A card refers to a recipe the book does not have
    #[error("Section {section:?} needs a recipe for {result:?}")]
    MissingRecipe {
        /// Section title
        section: &'static str,
        /// Result without a recipe
        result: Item,
    },
}

/// Result type for screen building.
pub type ScreenResult<T> = Result<T, ScreenError>;

/// Navigation destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    /// Recipe overview.
    #[default]
    Home,
    /// Augmented reality view.
    Ar,
    /// How-to-play guide.
    #[serde(rename = "howto")]
    HowTo,
}

impl Route {
    /// Route path registered with the navigator.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Ar => "poke",
            Self::HowTo => "howto",
        }
    }
}

/// A button that navigates somewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
    /// Button label
    pub label: &'static str,
    /// Where the button leads
    pub route: Route,
}

/// A recipe card: the 3x3 grid, the result's name and its picture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeCard {
    /// Item the recipe makes
    pub result: Item,
    /// Result label shown under the grid
    pub label: &'static str,
    /// Result texture
    pub asset: &'static str,
    /// Projected ingredient grid
    pub grid: CraftingGrid,
}

impl RecipeCard {
    /// Creates a card for a recipe.
    #[must_use]
    pub fn from_recipe(recipe: &Recipe) -> Self {
        let result = recipe.result();
        Self {
            result,
            label: result.label(),
            asset: result.asset(),
            grid: recipe.project(),
        }
    }
}

/// A titled group of recipe cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeSection {
    /// Heading shown above the cards
    pub title: &'static str,
    /// Cards in display order
    pub cards: Vec<RecipeCard>,
}

impl HomeSection {
    /// Builds a section from recipe results, in the given order.
    pub fn build(title: &'static str, results: &[Item], book: &RecipeBook) -> ScreenResult<Self> {
        let cards = results
            .iter()
            .map(|&result| {
                book.get(result)
                    .map(RecipeCard::from_recipe)
                    .ok_or(ScreenError::MissingRecipe {
                        section: title,
                        result,
                    })
            })
            .collect::<ScreenResult<Vec<_>>>()?;
        Ok(Self { title, cards })
    }
}

/// The home screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeScreen {
    /// App title in the header
    pub title: &'static str,
    /// Line under the title
    pub subtitle: &'static str,
    /// Header button
    pub secondary_action: Action,
    /// Sections top to bottom
    pub sections: Vec<HomeSection>,
    /// Bottom bar button
    pub primary_action: Action,
}

impl HomeScreen {
    /// App title.
    pub const TITLE: &'static str = "ARCraft";
    /// Subtitle under the app title.
    pub const SUBTITLE: &'static str = "Minecraft en Realidad Aumentada";
    /// Label of the button that opens the how-to-play guide.
    pub const HOW_TO_LABEL: &'static str = "¿Cómo se juega?";
    /// Title of the goal section.
    pub const GOALS_TITLE: &'static str = "Objetivos";
    /// Title of the basic recipes section.
    pub const BASICS_TITLE: &'static str = "Recetas básicas";
    /// Label of the button that opens the AR view.
    pub const OPEN_AR_LABEL: &'static str = "Abrir AR";

    /// Builds the home screen from a recipe book.
    pub fn build(book: &RecipeBook) -> ScreenResult<Self> {
        Ok(Self {
            title: Self::TITLE,
            subtitle: Self::SUBTITLE,
            secondary_action: Action {
                label: Self::HOW_TO_LABEL,
                route: Route::HowTo,
            },
            sections: vec![
                HomeSection::build(Self::GOALS_TITLE, GOAL_RECIPES, book)?,
                HomeSection::build(Self::BASICS_TITLE, BASIC_RECIPES, book)?,
            ],
            primary_action: Action {
                label: Self::OPEN_AR_LABEL,
                route: Route::Ar,
            },
        })
    }

    /// Finds a section by title.
    #[must_use]
    pub fn section(&self, title: &str) -> Option<&HomeSection> {
        self.sections.iter().find(|s| s.title == title)
    }

    /// All cards, section by section.
    pub fn cards(&self) -> impl Iterator<Item = &RecipeCard> {
        self.sections.iter().flat_map(|s| s.cards.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokepc_common::GridPosition;

    #[test]
    fn test_home_screen_layout() {
        let screen = HomeScreen::build(&RecipeBook::builtin()).expect("should build");

        let titles: Vec<&str> = screen.sections.iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["Objetivos", "Recetas básicas"]);

        let goals: Vec<Item> = screen
            .section(HomeScreen::GOALS_TITLE)
            .expect("goal section")
            .cards
            .iter()
            .map(|c| c.result)
            .collect();
        assert_eq!(goals, vec![Item::Cake, Item::Beacon]);
        assert_eq!(screen.cards().count(), 5);
    }

    #[test]
    fn test_header_and_how_to_button() {
        let screen = HomeScreen::build(&RecipeBook::builtin()).expect("should build");

        assert_eq!(screen.title, "ARCraft");
        assert_eq!(screen.subtitle, "Minecraft en Realidad Aumentada");
        assert_eq!(screen.secondary_action.label, "¿Cómo se juega?");
        assert_eq!(screen.secondary_action.route, Route::HowTo);
        assert_eq!(screen.secondary_action.route.path(), "howto");

        let json = serde_json::to_value(&screen).expect("should serialize");
        assert_eq!(json["title"], "ARCraft");
        assert_eq!(json["secondary_action"]["route"], "howto");
    }

    #[test]
    fn test_primary_action_opens_ar() {
        let screen = HomeScreen::build(&RecipeBook::builtin()).expect("should build");
        assert_eq!(screen.primary_action.label, "Abrir AR");
        assert_eq!(screen.primary_action.route.path(), "poke");
        assert_eq!(Route::default().path(), "home");
    }

    #[test]
    fn test_card_carries_projected_grid() {
        let book = RecipeBook::builtin();
        let stick = book.get(Item::Stick).expect("stick recipe");
        let card = RecipeCard::from_recipe(stick);

        assert_eq!(card.label, "Palo");
        assert_eq!(card.asset, Item::Stick.asset());
        let top_middle = GridPosition::new(2).expect("valid");
        assert_eq!(card.grid.item(top_middle), Item::OakPlanks);
        assert_eq!(card.grid.slots().len(), 9);
    }

    #[test]
    fn test_missing_recipe_is_an_error() {
        let result = HomeScreen::build(&RecipeBook::new());
        assert_eq!(
            result,
            Err(ScreenError::MissingRecipe {
                section: HomeScreen::GOALS_TITLE,
                result: Item::Cake,
            })
        );
    }
}
