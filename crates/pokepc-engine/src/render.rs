//! Plain-text rendering of the screen model.

use std::fmt::Write;

use pokepc_gameplay::{Action, ChestInventory, CraftingGrid, HomeScreen, Item, RecipeCard};

use crate::config::AppConfig;

/// Layout options for text output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Characters per grid cell, excluding borders.
    pub cell_width: usize,
    /// Print the empty item's label instead of blanks.
    pub show_empty_slots: bool,
}

impl From<&AppConfig> for RenderOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            cell_width: config.cell_width,
            show_empty_slots: config.show_empty_slots,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

/// Fits `text` into exactly `width` characters, cutting it if needed.
fn fit(text: &str, width: usize) -> String {
    let mut out: String = text.chars().take(width).collect();
    let len = out.chars().count();
    out.extend(std::iter::repeat(' ').take(width - len));
    out
}

fn border(options: RenderOptions) -> String {
    let segment = "-".repeat(options.cell_width + 2);
    format!("+{segment}+{segment}+{segment}+")
}

/// Draws a crafting grid as a 3x3 box.
#[must_use]
pub fn render_grid(grid: &CraftingGrid, options: RenderOptions) -> String {
    let line = border(options);
    let mut out = String::new();
    out.push_str(&line);
    out.push('\n');
    for row in grid.rows() {
        out.push('|');
        for slot in row {
            let label = if slot.item.is_empty() && !options.show_empty_slots {
                ""
            } else {
                slot.item.label()
            };
            let _ = write!(out, " {} |", fit(label, options.cell_width));
        }
        out.push('\n');
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Draws a recipe card: the grid, then the result.
#[must_use]
pub fn render_card(card: &RecipeCard, options: RenderOptions) -> String {
    let mut out = render_grid(&card.grid, options);
    let _ = writeln!(out, "=> {} [{}]", card.label, card.asset);
    out
}

fn render_action(out: &mut String, action: &Action) {
    let _ = writeln!(out, "[ {} ] -> {}", action.label, action.route.path());
}

/// Draws the whole home screen.
#[must_use]
pub fn render_home(screen: &HomeScreen, options: RenderOptions) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", screen.title);
    let _ = writeln!(out, "{}", screen.subtitle);
    render_action(&mut out, &screen.secondary_action);
    out.push('\n');
    for section in &screen.sections {
        let _ = writeln!(out, "{}", section.title);
        let _ = writeln!(out, "{}", "=".repeat(section.title.chars().count()));
        out.push('\n');
        for card in &section.cards {
            out.push_str(&render_card(card, options));
            out.push('\n');
        }
    }
    render_action(&mut out, &screen.primary_action);
    out
}

/// Lists the stacks of a chest.
#[must_use]
pub fn render_chest(chest: &ChestInventory) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Cofre {}", chest.chest());
    if chest.is_empty() {
        out.push_str("  (vacío)\n");
    }
    for (slot, stack) in chest.stacks() {
        let _ = writeln!(out, "  {:>2}: {} x{}", slot, stack.item.label(), stack.count);
    }
    out
}

/// One line describing a smelting result.
#[must_use]
pub fn render_smelt(input: Item, output: Option<Item>) -> String {
    match output {
        Some(output) => format!("{} -> {}\n", input.label(), output.label()),
        None => format!("{} no se puede fundir\n", input.label()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokepc_gameplay::{ChestType, LootTable, RecipeBook};

    fn options() -> RenderOptions {
        RenderOptions {
            cell_width: 6,
            show_empty_slots: false,
        }
    }

    #[test]
    fn test_fit_pads_and_cuts() {
        assert_eq!(fit("Trigo", 7), "Trigo  ");
        assert_eq!(fit("Caña de azúcar", 4), "Caña");
        assert_eq!(fit("", 3), "   ");
    }

    #[test]
    fn test_render_stick_grid() {
        let book = RecipeBook::builtin();
        let grid = book.get(Item::Stick).expect("stick recipe").project();
        let text = render_grid(&grid, options());

        let expected = "\
+--------+--------+--------+
|        | Tablon |        |
+--------+--------+--------+
|        | Tablon |        |
+--------+--------+--------+
|        |        |        |
+--------+--------+--------+
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_empty_slots_when_enabled() {
        let grid = CraftingGrid::empty();
        let text = render_grid(
            &grid,
            RenderOptions {
                cell_width: 4,
                show_empty_slots: true,
            },
        );
        assert_eq!(text.matches("Aire").count(), 9);
    }

    #[test]
    fn test_render_home() {
        let screen = HomeScreen::build(&RecipeBook::builtin()).expect("should build");
        let text = render_home(&screen, RenderOptions::default());

        assert!(text.starts_with(
            "ARCraft\nMinecraft en Realidad Aumentada\n[ ¿Cómo se juega? ] -> howto\n\nObjetivos\n=========\n"
        ));
        assert!(text.contains("Recetas básicas"));
        assert!(text.contains("=> Pastel"));
        assert!(text.ends_with("[ Abrir AR ] -> poke\n"));
    }

    #[test]
    fn test_render_chest() {
        let chest = LootTable::builtin().populate(ChestType::Three);
        assert_eq!(
            render_chest(&chest),
            "Cofre 3\n   1: Tablones de roble x8\n   6: Diamante x2\n"
        );
    }

    #[test]
    fn test_render_smelt() {
        assert_eq!(render_smelt(Item::Sand, Some(Item::Glass)), "Arena -> Cristal\n");
        assert_eq!(
            render_smelt(Item::Wheat, None),
            "Trigo no se puede fundir\n"
        );
    }
}
