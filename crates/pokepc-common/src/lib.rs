//! # PokePC Common
//!
//! Common types shared by the PokePC crates.
//!
//! This crate provides:
//! - Crafting grid positions (1..=9) and chest slots (1..=27)
//! - Data validation errors
//! - Schema version information for data packs
//! - Prelude for convenient imports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod position;
pub mod version;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::*;
    pub use crate::position::*;
    pub use crate::version::*;
}

pub use prelude::*;
