//! Inventory domain module.
//!
//! This crate contains the in-memory inventory store: insertion-ordered products,
//! case-insensitive unique names, and stock that never goes negative. Everything
//! here is deterministic domain logic (no IO, no console).

pub mod store;

pub use store::{AddOutcome, InventoryStore, Listing, RemoveOutcome, StockUpdate};
