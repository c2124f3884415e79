// src/markdown/mod.rs
//! The markdown digest that sits between the two pipelines.
//!
//! ```text
//! # Primes
//!
//! - Volt Prime
//!   - Volt Prime Chassis Blueprint (Rare) -> Axi A1 Relic
//!
//! # Relics
//!
//! ## Axi A1 Relic
//! - Forma Blueprint (Common)
//! **Location**: Apollo (Lua)
//! ```
//!
//! It is a private wire format: `write` and `read` are each other's inverse,
//! except that parts within a prime are rarity-sorted on write.

mod read;
mod write;

pub use read::read;
pub use write::write;

pub(crate) const PRIMES_HEADER: &str = "# Primes";
pub(crate) const RELICS_HEADER: &str = "# Relics";
pub(crate) const RELIC_PREFIX: &str = "## ";
pub(crate) const ITEM_PREFIX: &str = "- ";
pub(crate) const PART_PREFIX: &str = "  - ";
pub(crate) const PART_DELIM: &str = "->";
pub(crate) const LOCATION_PREFIX: &str = "**Location**:";
