//! # Domain Types
//!
//! Item records and the catalog they live in.
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Item Lifecycle                                  │
//! │                                                                         │
//! │  CSV row ──► Item (catalog copy, quantity = stock)                      │
//! │                   │                                                     │
//! │                   │  Catalog::reserve(name, n)  stock -= n              │
//! │                   ▼                                                     │
//! │              Item (cart copy, quantity = units reserved)                │
//! │                                                                         │
//! │  Catalog keys never change after load. Only quantities move.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Item
// =============================================================================

/// A named quantity of goods at a unit price.
///
/// In the catalog `quantity` is stock on hand; in the cart it is the number of
/// units reserved for purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub quantity: u32,
    pub unit_price: Money,
}

impl Item {
    pub fn new(name: impl Into<String>, quantity: u32, unit_price: Money) -> Self {
        Item {
            name: name.into(),
            quantity,
            unit_price,
        }
    }

    /// Returns `unit_price × quantity`, before any discount.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Article: {}, Quantity: {}, Price: {}",
            self.name, self.quantity, self.unit_price
        )
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Item name → stock record, iterated in load order.
///
/// ## Invariants
/// - One record per name (a later insert with the same name replaces the
///   record but keeps its original position)
/// - Stock never drops below zero: [`Catalog::reserve`] refuses instead
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<Item>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a record. Used while building the catalog.
    ///
    /// Returns the replaced record, if any.
    pub fn insert(&mut self, item: Item) -> Option<Item> {
        match self.index.get(&item.name) {
            Some(&pos) => Some(std::mem::replace(&mut self.items[pos], item)),
            None => {
                self.index.insert(item.name.clone(), self.items.len());
                self.items.push(item);
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Item> {
        self.index.get(name).map(|&pos| &self.items[pos])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Takes `quantity` units of `name` out of stock.
    ///
    /// On success returns a snapshot of the record (remaining stock and unit
    /// price). On failure stock is untouched.
    ///
    /// ## Errors
    /// - [`CoreError::ItemNotFound`] if the name is not in the catalog
    /// - [`CoreError::InsufficientStock`] if `quantity` exceeds stock
    pub fn reserve(&mut self, name: &str, quantity: u32) -> CoreResult<Item> {
        let pos = *self
            .index
            .get(name)
            .ok_or_else(|| CoreError::ItemNotFound(name.to_string()))?;
        let item = &mut self.items[pos];

        if quantity > item.quantity {
            return Err(CoreError::InsufficientStock {
                name: name.to_string(),
                available: item.quantity,
                requested: quantity,
            });
        }

        item.quantity -= quantity;
        debug!(item = %name, quantity, remaining = item.quantity, "Reserved stock");
        Ok(item.clone())
    }
}

impl FromIterator<Item> for Catalog {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for item in iter {
            catalog.insert(item);
        }
        catalog
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
