//! # tally-core: Pure Business Logic for Tally
//!
//! This crate is the **heart** of Tally. It holds the catalog and cart
//! state-transfer logic and the checkout pricing rule, with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tally Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    tally-cli (Session)                          │   │
//! │  │    menu ──► prompts ──► add / remove / checkout                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  pricing  │  │   │
//! │  │   │   Item    │  │   Money   │  │   Cart    │  │  Policy   │  │   │
//! │  │   │  Catalog  │  │  TaxRate  │  │  Removal  │  │  Receipt  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO CONSOLE • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                ▲                                        │
//! │  ┌─────────────────────────────┴───────────────────────────────────┐   │
//! │  │                tally-catalog (CSV Loader)                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Item records and the catalog
//! - [`money`] - Exact decimal Money, rounded to the cent for display
//! - [`cart`] - The shopping cart
//! - [`pricing`] - Bulk discount and tax policy, receipts
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::{Cart, Money, PricingPolicy};
//!
//! let mut cart = Cart::new();
//! cart.add("Widget", 3, Money::from_cents(1000));
//!
//! // 3 × $10.00 = $30.00, 10% bulk discount → $27.00, 7% tax → $28.89
//! let receipt = cart.checkout(&PricingPolicy::default());
//! assert_eq!(receipt.total.cents(), 2889);
//! assert!(cart.is_empty());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, Removal};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{Money, TaxRate};
pub use pricing::{PricingPolicy, Receipt, ReceiptLine};
pub use types::{Catalog, Item};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum line quantity that earns the bulk discount.
pub const DEFAULT_BULK_THRESHOLD: u32 = 3;

/// Bulk discount in basis points (1000 = 10%).
pub const DEFAULT_BULK_DISCOUNT_BPS: u32 = 1000;

/// Sales tax applied once to the order subtotal (700 = 7%).
pub const DEFAULT_TAX_RATE_BPS: u32 = 700;
