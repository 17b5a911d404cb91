//! Position types for the crafting grid and chest inventories.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{DataError, DataResult};

/// Side length of the crafting grid.
pub const GRID_SIDE: u8 = 3;

/// Number of slots in the crafting grid.
pub const GRID_SIZE: usize = 9;

/// Number of slots in a chest (3 rows x 9 columns).
pub const CHEST_SLOT_COUNT: usize = 27;

/// A slot of the 3x3 crafting grid, numbered 1..=9 in row-major order.
///
/// Position 1 is the top-left slot and 9 the bottom-right one. A value
/// outside that range cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct GridPosition(u8);

impl GridPosition {
    /// All positions in ascending order.
    pub const ALL: [Self; GRID_SIZE] = [
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
    ];

    /// Creates a position from its 1-based number.
    pub const fn new(raw: u8) -> DataResult<Self> {
        if raw >= 1 && raw as usize <= GRID_SIZE {
            Ok(Self(raw))
        } else {
            Err(DataError::InvalidPosition(raw))
        }
    }

    /// Returns the 1-based position number.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the zero-based index into a 9-slot array.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl TryFrom<u8> for GridPosition {
    type Error = DataError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<GridPosition> for u8 {
    fn from(position: GridPosition) -> Self {
        position.0
    }
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A slot of a chest inventory, numbered 1..=27.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ChestSlot(u8);

impl ChestSlot {
    /// Creates a slot from its 1-based number.
    pub const fn new(raw: u8) -> DataResult<Self> {
        if raw >= 1 && raw as usize <= CHEST_SLOT_COUNT {
            Ok(Self(raw))
        } else {
            Err(DataError::InvalidSlot(raw))
        }
    }

    /// Returns the 1-based slot number.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the zero-based index into a chest's slot array.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl TryFrom<u8> for ChestSlot {
    type Error = DataError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ChestSlot> for u8 {
    fn from(slot: ChestSlot) -> Self {
        slot.0
    }
}

impl fmt::Display for ChestSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_grid_position_rejects_out_of_range() {
        assert_eq!(GridPosition::new(0), Err(DataError::InvalidPosition(0)));
        assert_eq!(GridPosition::new(10), Err(DataError::InvalidPosition(10)));
    }

    #[test]
    fn test_grid_position_all_is_ascending() {
        let raw: Vec<u8> = GridPosition::ALL.iter().map(|p| p.get()).collect();
        assert_eq!(raw, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_grid_position_display_honours_width() {
        let position = GridPosition::new(7).expect("valid");
        assert_eq!(format!("{position:>3}"), "  7");
    }

    #[test]
    fn test_grid_position_serde_validates() {
        let ok: GridPosition = serde_json::from_str("4").expect("should parse");
        assert_eq!(ok.get(), 4);
        assert!(serde_json::from_str::<GridPosition>("12").is_err());
        assert_eq!(serde_json::to_string(&ok).expect("should serialize"), "4");
    }

    #[test]
    fn test_chest_slot_index() {
        let slot = ChestSlot::new(27).expect("valid");
        assert_eq!(slot.index(), 26);
        assert_eq!(ChestSlot::new(0), Err(DataError::InvalidSlot(0)));
    }

    proptest! {
        #[test]
        fn prop_index_matches_all(raw in 1u8..=9) {
            let position = GridPosition::new(raw).expect("in range");
            prop_assert_eq!(position.index(), usize::from(raw - 1));
            prop_assert_eq!(GridPosition::ALL[position.index()], position);
        }
    }
}
