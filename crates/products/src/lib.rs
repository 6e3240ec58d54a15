//! Products domain module.
//!
//! This crate contains the catalog entry type and its validated value objects,
//! implemented purely as deterministic domain logic (no IO, no console).

pub mod product;

pub use product::{DEFAULT_CURRENCY_SYMBOL, Price, Product, ProductKey, ProductLine, ProductName};
