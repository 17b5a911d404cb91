//! Error types for PokePC reference data.

use thiserror::Error;

/// Errors raised while validating raw reference data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    /// Crafting grid position outside 1..=9
    #[error("Invalid grid position {0}: expected 1..=9")]
    InvalidPosition(u8),

    /// Chest slot outside 1..=27
    #[error("Invalid chest slot {0}: expected 1..=27")]
    InvalidSlot(u8),

    /// Chest type tag that does not name a chest
    #[error("Unknown chest type tag: {0}")]
    UnknownChestType(u8),

    /// Version string that is not `major.minor.patch`
    #[error("Invalid schema version: {0:?}")]
    InvalidVersion(String),

    /// Schema version mismatch
    #[error("Schema version mismatch: expected {expected}, got {actual}")]
    VersionMismatch {
        /// Expected version
        expected: String,
        /// Actual version found
        actual: String,
    },
}

/// Result type alias for data validation.
pub type DataResult<T> = Result<T, DataError>;
