// src/lib.rs

#[macro_use]
pub mod log;

pub mod error;
pub mod config;
pub mod core;
pub mod model;
pub mod specs;

pub mod primes;
pub mod markdown;
pub mod category;
pub mod page;
pub mod file;
pub mod runner;
pub mod cli;

pub use error::{Error, Result};
pub use model::{Container, Dataset, Part, ProducedItem, Rarity, RewardEntry};
