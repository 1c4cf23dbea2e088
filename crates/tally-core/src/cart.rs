//! # Cart
//!
//! The shopping cart: units reserved for purchase, priced and cleared at
//! checkout.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Menu Action            Cart Method             Cart State Change       │
//! │  ───────────            ───────────             ─────────────────       │
//! │                                                                         │
//! │  3. Add ───────────────► add() ────────────────► merge or push          │
//! │                                                                         │
//! │  4. Remove ────────────► remove() ─────────────► decrement or delete    │
//! │                                                                         │
//! │  5. Checkout ──────────► checkout() ───────────► price, then clear      │
//! │                                                                         │
//! │  2. View ──────────────► Display ──────────────► (read only)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::money::Money;
use crate::pricing::{PricingPolicy, Receipt};
use crate::types::Item;

/// What [`Cart::remove`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// No entry with that name; nothing changed.
    NotInCart,
    /// The entry was deleted (requested quantity ≥ quantity held).
    Removed,
    /// The entry stays with `remaining` units.
    Decremented { remaining: u32 },
}

/// The shopping cart.
///
/// ## Invariants
/// - Entries are unique by `name` (adding the same name merges quantities)
/// - Order is insertion order
/// - An entry whose quantity would reach zero through `remove` is deleted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<Item>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Adds `quantity` units of `name` at `unit_price`.
    ///
    /// ## Behavior
    /// - If `name` already in cart: increases its quantity (the price it was
    ///   first added at is kept)
    /// - If not: appends a new entry with exactly `quantity` units
    ///
    /// No validation happens here; the session parses the quantity and
    /// reserves stock before calling. A zero quantity still creates an entry.
    pub fn add(&mut self, name: &str, quantity: u32, unit_price: Money) {
        if let Some(item) = self.items.iter_mut().find(|i| i.name == name) {
            item.quantity += quantity;
            debug!(item = %name, quantity, total = item.quantity, "Merged into cart entry");
            return;
        }

        self.items.push(Item::new(name, quantity, unit_price));
        debug!(item = %name, quantity, "Added cart entry");
    }

    /// Removes up to `quantity` units of `name`.
    ///
    /// ## Behavior
    /// - Not in cart: no-op
    /// - Held quantity ≤ `quantity`: entry deleted (over-removal removes all)
    /// - Otherwise: quantity decremented, entry kept
    pub fn remove(&mut self, name: &str, quantity: u32) -> Removal {
        let Some(pos) = self.items.iter().position(|i| i.name == name) else {
            debug!(item = %name, "Remove ignored, not in cart");
            return Removal::NotInCart;
        };

        let item = &mut self.items[pos];
        if item.quantity <= quantity {
            self.items.remove(pos);
            debug!(item = %name, "Removed cart entry");
            Removal::Removed
        } else {
            item.quantity -= quantity;
            debug!(item = %name, remaining = item.quantity, "Decremented cart entry");
            Removal::Decremented {
                remaining: item.quantity,
            }
        }
    }

    /// Prices the cart without changing it.
    pub fn quote(&self, policy: &PricingPolicy) -> Receipt {
        policy.price(&self.items)
    }

    /// Prices the cart, then empties it.
    ///
    /// Checkout is one-shot: every call after a non-empty checkout starts
    /// from an empty cart. An empty cart checks out at zero.
    pub fn checkout(&mut self, policy: &PricingPolicy) -> Receipt {
        let receipt = self.quote(policy);
        self.clear();
        info!(
            lines = receipt.lines.len(),
            total = %receipt.total,
            "Checked out cart"
        );
        receipt
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the number of distinct entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Units of `name` currently reserved (0 when absent).
    pub fn quantity_of(&self, name: &str) -> u32 {
        self.items
            .iter()
            .find(|i| i.name == name)
            .map(|i| i.quantity)
            .unwrap_or(0)
    }

    /// Returns the total quantity of all items.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| i.quantity as u64).sum()
    }
}

/// One line per entry, or an explicit empty message.
impl fmt::Display for Cart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            return write!(f, "Shopping cart is empty.");
        }

        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ten() -> Money {
        Money::from_cents(1000)
    }

    #[test]
    fn test_cart_add_item() {
        let mut cart = Cart::new();
        cart.add("Widget", 2, ten());

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of("Widget"), 2);
        assert_eq!(cart.items()[0].unit_price, ten());
    }

    #[test]
    fn test_cart_add_same_item_merges() {
        let mut cart = Cart::new();
        for q in [1, 4, 2] {
            cart.add("Widget", q, ten());
        }

        assert_eq!(cart.len(), 1); // Still one entry
        assert_eq!(cart.quantity_of("Widget"), 7);
    }

    #[test]
    fn test_cart_keeps_insertion_order() {
        let mut cart = Cart::new();
        cart.add("B", 1, ten());
        cart.add("A", 1, ten());
        cart.add("B", 1, ten());

        let names: Vec<_> = cart.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["B", "A"]);
        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn test_remove_partial_keeps_entry() {
        let mut cart = Cart::new();
        cart.add("Widget", 5, ten());

        assert_eq!(
            cart.remove("Widget", 2),
            Removal::Decremented { remaining: 3 }
        );
        assert_eq!(cart.quantity_of("Widget"), 3);
    }

    #[test]
    fn test_remove_exact_quantity_deletes_entry() {
        let mut cart = Cart::new();
        cart.add("Widget", 5, ten());

        assert_eq!(cart.remove("Widget", 5), Removal::Removed);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_over_removal_deletes_entry() {
        let mut cart = Cart::new();
        cart.add("Widget", 2, ten());

        assert_eq!(cart.remove("Widget", 50), Removal::Removed);
        assert_eq!(cart.quantity_of("Widget"), 0);
    }

    #[test]
    fn test_add_zero_creates_empty_entry() {
        let mut cart = Cart::new();
        cart.add("Widget", 0, ten());
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of("Widget"), 0);

        cart.add("Widget", 2, ten());
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of("Widget"), 2);
    }

    #[test]
    fn test_remove_zero() {
        let mut cart = Cart::new();
        cart.add("Widget", 2, ten());
        assert_eq!(
            cart.remove("Widget", 0),
            Removal::Decremented { remaining: 2 }
        );

        cart.add("Gadget", 0, ten());
        assert_eq!(cart.remove("Gadget", 0), Removal::Removed);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut cart = Cart::new();
        cart.add("Widget", 2, ten());

        assert_eq!(cart.remove("Gadget", 1), Removal::NotInCart);
        assert_eq!(cart.quantity_of("Widget"), 2);
    }

    #[test]
    fn test_checkout_bulk_line() {
        let mut cart = Cart::new();
        cart.add("Widget", 3, ten());

        let receipt = cart.checkout(&PricingPolicy::default());
        assert_eq!(receipt.total.cents(), 2889);
        assert_eq!(receipt.total.to_string(), "$28.89");
        assert!(cart.is_empty());
    }

    #[test]
    fn test_checkout_small_line() {
        let mut cart = Cart::new();
        cart.add("Widget", 2, ten());

        let receipt = cart.checkout(&PricingPolicy::default());
        assert_eq!(receipt.total.to_string(), "$21.40");
        assert!(cart.is_empty());
    }

    #[test]
    fn test_checkout_empty_cart() {
        let mut cart = Cart::new();
        let receipt = cart.checkout(&PricingPolicy::default());

        assert!(receipt.total.is_zero());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_checkout_is_one_shot() {
        let policy = PricingPolicy::default();
        let mut cart = Cart::new();
        cart.add("Widget", 1, ten());

        assert!(!cart.checkout(&policy).total.is_zero());
        assert!(cart.checkout(&policy).total.is_zero());
    }

    #[test]
    fn test_quote_does_not_clear() {
        let mut cart = Cart::new();
        cart.add("Widget", 2, ten());

        assert_eq!(cart.quote(&PricingPolicy::default()).total.cents(), 2140);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_display() {
        let mut cart = Cart::new();
        assert_eq!(cart.to_string(), "Shopping cart is empty.");

        cart.add("Widget", 2, ten());
        cart.add("Gadget", 1, Money::from_cents(250));
        assert_eq!(
            cart.to_string(),
            "Article: Widget, Quantity: 2, Price: $10.00\n\
             Article: Gadget, Quantity: 1, Price: $2.50"
        );
    }
}
