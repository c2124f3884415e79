// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific knowledge of the drop-table HTML: which headings to look for,
//! how a relic's reward table is laid out, and how a drop chance maps to a
//! rarity tier.
//!
//! ## What lives here
//! - **Heading selection**: configured sub-table titles, or discovery of every
//!   `"<relic> (Intact)"` heading when none are configured.
//! - **Row shaping**: turning `(item, chance)` rows into `RewardEntry`s.
//! - **Rarity classification** against the configured `(token, rarity)` table.
//!
//! ## What does **not** live here
//! - Networking and DOM access (`core::net`, `core::html`).
//! - Grouping rewards into primes (`primes`), markdown (`markdown`).
//!
//! ## Typical call chain
//! ```text
//! runner::extract → core::net::http_get → specs::relics::extract
//!                                       ↘ primes::group → markdown::write
//! ```
//!
//! ## Conventions
//! - Lookups never fail: a missing heading logs a warning and yields nothing,
//!   so a partially changed page still produces a partial digest.
//! - Specs should be testable **offline** against captured or synthetic HTML.
pub mod relics;
