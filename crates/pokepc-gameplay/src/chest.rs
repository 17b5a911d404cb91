//! Chest loot tables.
//!
//! Each chest category is seeded with fixed stacks at fixed slots. The
//! table is validated once when built; populating a chest cannot fail.

use pokepc_common::{ChestSlot, DataError, CHEST_SLOT_COUNT};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::debug;

use crate::item::Item;

/// Largest stack a single slot can hold.
pub const MAX_STACK_SIZE: u8 = 64;

/// Loot table error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LootError {
    /// Stack size is zero
    #[error("Loot entry for {item:?} has an empty stack")]
    ZeroStack {
        /// Item of the entry
        item: Item,
    },
    /// Stack exceeds the slot limit
    #[error("Loot entry for {item:?} has stack {size}, limit is 64")]
    StackTooLarge {
        /// Item of the entry
        item: Item,
        /// Requested stack size
        size: u8,
    },
    /// Air cannot be loot
    #[error("Chest {chest} seeds air at slot {slot}")]
    EmptyItem {
        /// Chest category
        chest: ChestType,
        /// Slot of the entry
        slot: ChestSlot,
    },
    /// Two entries of one chest share a slot
    #[error("Chest {chest} uses slot {slot} more than once")]
    DuplicateSlot {
        /// Chest category
        chest: ChestType,
        /// Slot used twice
        slot: ChestSlot,
    },
    /// Raw data failed validation
    #[error(transparent)]
    Data(#[from] DataError),
}

/// Result type for loot operations.
pub type LootResult<T> = Result<T, LootError>;

/// Chest categories placed in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ChestType {
    /// First chest.
    One,
    /// Second chest.
    Two,
    /// Third chest.
    Three,
}

impl ChestType {
    /// Get all chest types.
    #[must_use]
    pub fn all() -> &'static [ChestType] {
        &[Self::One, Self::Two, Self::Three]
    }

    /// Numeric tag used in data files.
    #[must_use]
    pub const fn tag(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    /// Looks a chest up by its numeric tag.
    pub const fn from_tag(tag: u8) -> Result<Self, DataError> {
        match tag {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            other => Err(DataError::UnknownChestType(other)),
        }
    }
}

impl TryFrom<u8> for ChestType {
    type Error = DataError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_tag(value)
    }
}

impl From<ChestType> for u8 {
    fn from(chest: ChestType) -> Self {
        chest.tag()
    }
}

impl fmt::Display for ChestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// A stack seeded into a chest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChestLootEntry {
    /// Item in the stack.
    pub item: Item,
    /// Number of items in the stack.
    pub max_stack: u8,
    /// Slot the stack is placed in.
    pub slot: ChestSlot,
    /// Chest receiving the stack.
    pub chest: ChestType,
}

impl ChestLootEntry {
    /// Creates an entry from a raw 1-based slot number.
    pub fn new(item: Item, max_stack: u8, slot: u8, chest: ChestType) -> LootResult<Self> {
        Ok(Self {
            item,
            max_stack,
            slot: ChestSlot::new(slot)?,
            chest,
        })
    }

    fn validate(&self) -> LootResult<()> {
        if self.item.is_empty() {
            return Err(LootError::EmptyItem {
                chest: self.chest,
                slot: self.slot,
            });
        }
        if self.max_stack == 0 {
            return Err(LootError::ZeroStack { item: self.item });
        }
        if self.max_stack > MAX_STACK_SIZE {
            return Err(LootError::StackTooLarge {
                item: self.item,
                size: self.max_stack,
            });
        }
        Ok(())
    }
}

/// Chest seed data shipped with the game, as `(item, stack, slot, chest)`.
pub const BUILTIN_LOOT: &[(Item, u8, u8, ChestType)] = &[
    (Item::Wheat, 3, 1, ChestType::One),
    (Item::SugarCane, 2, 3, ChestType::One),
    (Item::RawIron, 9, 5, ChestType::One),
    (Item::Sand, 5, 2, ChestType::Two),
    (Item::Obsidian, 3, 4, ChestType::Two),
    (Item::OakPlanks, 8, 1, ChestType::Three),
    (Item::Diamond, 2, 6, ChestType::Three),
];

/// A stack of items in an inventory slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItemStack {
    /// Item type
    pub item: Item,
    /// Number of items
    pub count: u8,
}

/// The contents of one chest after seeding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChestInventory {
    chest: ChestType,
    slots: [Option<ItemStack>; CHEST_SLOT_COUNT],
}

impl ChestInventory {
    /// Creates an empty chest.
    #[must_use]
    pub fn new(chest: ChestType) -> Self {
        Self {
            chest,
            slots: [None; CHEST_SLOT_COUNT],
        }
    }

    /// Chest category.
    #[must_use]
    pub const fn chest(&self) -> ChestType {
        self.chest
    }

    /// Stack in `slot`, if any.
    #[must_use]
    pub fn slot(&self, slot: ChestSlot) -> Option<ItemStack> {
        self.slots[slot.index()]
    }

    /// Occupied slots with their stacks, in slot order.
    pub fn stacks(&self) -> impl Iterator<Item = (ChestSlot, ItemStack)> + '_ {
        self.slots.iter().enumerate().filter_map(|(i, stack)| {
            let slot = ChestSlot::new(i as u8 + 1).ok()?;
            stack.map(|stack| (slot, stack))
        })
    }

    /// Total count of `item` in the chest.
    #[must_use]
    pub fn count(&self, item: Item) -> u32 {
        self.slots
            .iter()
            .flatten()
            .filter(|stack| stack.item == item)
            .map(|stack| u32::from(stack.count))
            .sum()
    }

    /// Check if the chest holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

/// Validated chest seed data for every chest category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LootTable {
    entries: Vec<ChestLootEntry>,
}

impl LootTable {
    /// Validates and wraps loot entries.
    pub fn new(entries: Vec<ChestLootEntry>) -> LootResult<Self> {
        for (i, entry) in entries.iter().enumerate() {
            entry.validate()?;
            let clash = entries[..i]
                .iter()
                .any(|other| other.chest == entry.chest && other.slot == entry.slot);
            if clash {
                return Err(LootError::DuplicateSlot {
                    chest: entry.chest,
                    slot: entry.slot,
                });
            }
        }
        Ok(Self { entries })
    }

    /// The loot shipped with the game.
    ///
    /// # Panics
    /// Panics if the built-in loot is malformed.
    #[must_use]
    pub fn builtin() -> Self {
        let entries = BUILTIN_LOOT
            .iter()
            .map(|&(item, stack, slot, chest)| ChestLootEntry::new(item, stack, slot, chest))
            .collect::<LootResult<Vec<_>>>()
            .expect("built-in loot slots are in range");
        Self::new(entries).expect("built-in loot is valid")
    }

    /// All entries in definition order.
    #[must_use]
    pub fn entries(&self) -> &[ChestLootEntry] {
        &self.entries
    }

    /// Entries seeding `chest`.
    pub fn entries_for(&self, chest: ChestType) -> impl Iterator<Item = &ChestLootEntry> {
        self.entries.iter().filter(move |e| e.chest == chest)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if any chest holds `item`.
    #[must_use]
    pub fn contains(&self, item: Item) -> bool {
        self.entries.iter().any(|e| e.item == item)
    }

    /// Total of `item` across every chest.
    #[must_use]
    pub fn total(&self, item: Item) -> u32 {
        self.entries
            .iter()
            .filter(|e| e.item == item)
            .map(|e| u32::from(e.max_stack))
            .sum()
    }

    /// Seeds a fresh chest of the given category.
    #[must_use]
    pub fn populate(&self, chest: ChestType) -> ChestInventory {
        let mut inventory = ChestInventory::new(chest);
        for entry in self.entries_for(chest) {
            inventory.slots[entry.slot.index()] = Some(ItemStack {
                item: entry.item,
                count: entry.max_stack,
            });
        }
        debug!(
            "Populated chest {} with {} stacks",
            chest,
            inventory.stacks().count()
        );
        inventory
    }
}
