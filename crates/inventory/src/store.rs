use std::collections::HashMap;

use stockroom_products::{Product, ProductKey};

/// Result of [`InventoryStore::add`].
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// A product with the same name (ignoring case) is already stored; the store
    /// is unchanged. `existing` is the stored product's name.
    Duplicate { existing: String },
}

impl AddOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, AddOutcome::Added)
    }
}

/// Result of [`InventoryStore::update_stock`].
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StockUpdate {
    Updated { name: String, stock: i64 },
    NotFound,
    /// `current + delta` would be negative; stock left at `current`.
    WouldGoNegative { name: String, current: i64 },
    /// `current + delta` overflows `i64`; stock left at `current`.
    OutOfRange { name: String, current: i64 },
}

impl StockUpdate {
    pub fn is_success(&self) -> bool {
        matches!(self, StockUpdate::Updated { .. })
    }
}

/// Result of [`InventoryStore::remove`].
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed(Product),
    NotFound,
}

impl RemoveOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RemoveOutcome::Removed(_))
    }
}

/// Result of [`InventoryStore::list_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing<'a> {
    Empty,
    /// Insertion order; never empty.
    Products(&'a [Product]),
}

impl<'a> Listing<'a> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Listing::Empty)
    }

    pub fn products(&self) -> &'a [Product] {
        match *self {
            Listing::Empty => &[],
            Listing::Products(products) => products,
        }
    }
}

/// In-memory inventory for one session.
///
/// Products are kept in insertion order for display, with a side index from the
/// normalized (lower-cased) name to the position in that order.
///
/// Invariants:
/// - no two stored products share a [`ProductKey`]
/// - `index[p.key()] == i` for every `products[i] == p`, and `index.len() == products.len()`
#[derive(Debug, Clone, Default)]
pub struct InventoryStore {
    products: Vec<Product>,
    index: HashMap<ProductKey, usize>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Append `product` unless its name is already taken (case-insensitive).
    pub fn add(&mut self, product: Product) -> AddOutcome {
        if let Some(&pos) = self.index.get(product.key()) {
            let existing = self.products[pos].name().to_string();
            tracing::info!(name = product.name(), %existing, "duplicate product rejected");
            return AddOutcome::Duplicate { existing };
        }

        tracing::debug!(
            name = product.name(),
            price = %product.price().amount(),
            stock = product.stock_quantity(),
            "product added"
        );
        self.index.insert(product.key().clone(), self.products.len());
        self.products.push(product);
        AddOutcome::Added
    }

    /// Case-insensitive lookup by name.
    pub fn find(&self, name: &str) -> Option<&Product> {
        self.position(name).map(|pos| &self.products[pos])
    }

    /// Apply a signed `delta` to a product's stock.
    ///
    /// The stored quantity only changes when the result is `>= 0`.
    pub fn update_stock(&mut self, name: &str, delta: i64) -> StockUpdate {
        let Some(pos) = self.position(name) else {
            tracing::info!(name, delta, "stock update for unknown product");
            return StockUpdate::NotFound;
        };
        let product = &mut self.products[pos];
        let current = product.stock_quantity();

        let Some(new_stock) = current.checked_add(delta) else {
            tracing::info!(name = product.name(), current, delta, "stock update overflows");
            return StockUpdate::OutOfRange {
                name: product.name().to_string(),
                current,
            };
        };

        if product.set_stock_quantity(new_stock).is_err() {
            tracing::info!(name = product.name(), current, delta, "stock cannot go negative");
            return StockUpdate::WouldGoNegative {
                name: product.name().to_string(),
                current,
            };
        }

        tracing::debug!(name = product.name(), current, delta, stock = new_stock, "stock updated");
        StockUpdate::Updated {
            name: product.name().to_string(),
            stock: new_stock,
        }
    }

    /// Remove a product by name, keeping the relative order of the rest.
    pub fn remove(&mut self, name: &str) -> RemoveOutcome {
        let Some(pos) = self.position(name) else {
            tracing::info!(name, "remove for unknown product");
            return RemoveOutcome::NotFound;
        };

        let removed = self.products.remove(pos);
        self.index.remove(removed.key());
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }

        tracing::debug!(name = removed.name(), "product removed");
        RemoveOutcome::Removed(removed)
    }

    /// All products in insertion order, or [`Listing::Empty`].
    pub fn list_all(&self) -> Listing<'_> {
        if self.products.is_empty() {
            Listing::Empty
        } else {
            Listing::Products(&self.products)
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.index.get(&ProductKey::from_name(name)).copied()
    }
}
