//! Inventory domain module.
//!
//! This crate contains the daily update rules for the Gilded Rose inventory,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod category;
pub mod gilded_rose;
pub mod item;
pub mod rules;

pub use category::Category;
pub use gilded_rose::GildedRose;
pub use item::Item;
