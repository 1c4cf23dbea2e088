//! # Pricing
//!
//! The checkout pricing rule and the receipt it produces.
//!
//! ## Order of Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  For each cart line:                                                    │
//! │      gross = unit_price × quantity                                      │
//! │      net   = gross - 10%   if quantity >= 3                             │
//! │              gross         otherwise                                    │
//! │                                                                         │
//! │  subtotal = Σ net                                                       │
//! │  tax      = subtotal × 7%          (once, on the whole order)           │
//! │  total    = subtotal + tax                                              │
//! │                                                                         │
//! │  Every value is exact; only the printed total is rounded to the cent.   │
//! │                                                                         │
//! │  Example: 3 × $10.00 → $27.00 → $28.89                                  │
//! │           2 × $10.00 → $20.00 → $21.40                                  │
//! │           3 × $0.02  → $0.054 → $0.05778 → $0.06                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Threshold and rates are a [`PricingPolicy`]; the defaults are the fixed
//! store rule above.

use serde::{Deserialize, Serialize};

use crate::money::{Money, TaxRate};
use crate::types::Item;
use crate::validation::{validate_bps, validate_positive, ValidationResult};
use crate::{DEFAULT_BULK_DISCOUNT_BPS, DEFAULT_BULK_THRESHOLD, DEFAULT_TAX_RATE_BPS};

// =============================================================================
// Pricing Policy
// =============================================================================

/// Bulk discount and tax settings used at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPolicy {
    /// Minimum line quantity that earns the bulk discount.
    #[serde(default = "default_bulk_threshold")]
    pub bulk_threshold: u32,

    /// Per-line discount in basis points (1000 = 10%).
    #[serde(default = "default_bulk_discount_bps")]
    pub bulk_discount_bps: u32,

    /// Tax on the discounted order subtotal, in basis points (700 = 7%).
    #[serde(default = "default_tax_rate_bps")]
    pub tax_rate_bps: u32,
}

fn default_bulk_threshold() -> u32 {
    DEFAULT_BULK_THRESHOLD
}

fn default_bulk_discount_bps() -> u32 {
    DEFAULT_BULK_DISCOUNT_BPS
}

fn default_tax_rate_bps() -> u32 {
    DEFAULT_TAX_RATE_BPS
}

impl Default for PricingPolicy {
    fn default() -> Self {
        PricingPolicy {
            bulk_threshold: default_bulk_threshold(),
            bulk_discount_bps: default_bulk_discount_bps(),
            tax_rate_bps: default_tax_rate_bps(),
        }
    }
}

impl PricingPolicy {
    /// Checks the policy is usable: threshold at least 1, rates at most 100%.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_positive("bulk_threshold", self.bulk_threshold as i64)?;
        validate_bps("bulk_discount_bps", self.bulk_discount_bps)?;
        validate_bps("tax_rate_bps", self.tax_rate_bps)?;
        Ok(())
    }

    #[inline]
    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.tax_rate_bps)
    }

    /// Prices a single line.
    pub fn price_line(&self, item: &Item) -> ReceiptLine {
        let gross = item.line_total();
        let net = if item.quantity >= self.bulk_threshold {
            gross.apply_percentage_discount(self.bulk_discount_bps)
        } else {
            gross
        };

        ReceiptLine {
            name: item.name.clone(),
            quantity: item.quantity,
            unit_price: item.unit_price,
            gross,
            discount: gross - net,
            net,
        }
    }

    /// Prices a whole order. Pure: the items are not modified.
    pub fn price(&self, items: &[Item]) -> Receipt {
        let lines: Vec<ReceiptLine> = items.iter().map(|i| self.price_line(i)).collect();
        let subtotal: Money = lines.iter().map(|l| l.net).sum();
        let discount: Money = lines.iter().map(|l| l.discount).sum();
        let tax = subtotal.calculate_tax(self.tax_rate());

        Receipt {
            lines,
            subtotal,
            discount,
            tax,
            total: subtotal + tax,
        }
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// One priced cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub name: String,
    pub quantity: u32,
    pub unit_price: Money,
    /// `unit_price × quantity`
    pub gross: Money,
    /// Bulk discount taken off this line (zero below the threshold).
    pub discount: Money,
    /// `gross - discount`
    pub net: Money,
}

/// Result of pricing an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub lines: Vec<ReceiptLine>,
    /// Sum of discounted lines, before tax.
    pub subtotal: Money,
    /// Total bulk discount across lines.
    pub discount: Money,
    pub tax: Money,
    /// Amount due: `subtotal + tax`, unrounded.
    pub total: Money,
}

impl Receipt {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Units across all lines.
    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|l| l.quantity as u64).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::{Decimal, RoundingStrategy};

    fn item(name: &str, quantity: u32, cents: i64) -> Item {
        Item::new(name, quantity, Money::from_cents(cents))
    }

    #[test]
    fn test_bulk_line_is_discounted() {
        let receipt = PricingPolicy::default().price(&[item("Widget", 3, 1000)]);
        assert_eq!(receipt.subtotal.cents(), 2700);
        assert_eq!(receipt.discount.cents(), 300);
        assert_eq!(receipt.total.cents(), 2889);
    }

    #[test]
    fn test_small_line_is_not_discounted() {
        let receipt = PricingPolicy::default().price(&[item("Widget", 2, 1000)]);
        assert_eq!(receipt.subtotal.cents(), 2000);
        assert!(receipt.discount.is_zero());
        assert_eq!(receipt.tax.cents(), 140);
        assert_eq!(receipt.total.cents(), 2140);
    }

    #[test]
    fn test_discount_is_per_line_tax_is_once() {
        // 3 × $1.00 → $2.70, 1 × $5.00 → $5.00; $7.70 × 1.07 = $8.239 → $8.24
        let receipt =
            PricingPolicy::default().price(&[item("Pen", 3, 100), item("Book", 1, 500)]);
        assert_eq!(receipt.lines[0].net.cents(), 270);
        assert_eq!(receipt.lines[1].net.cents(), 500);
        assert_eq!(receipt.subtotal.cents(), 770);
        assert_eq!(receipt.tax.cents(), 54);
        assert_eq!(receipt.total.cents(), 824);
        assert_eq!(receipt.total_quantity(), 4);
    }

    #[test]
    fn test_low_cent_totals_round_once() {
        let policy = PricingPolicy::default();

        // 3 × $0.02 × 0.9 × 1.07 = 0.05778
        let receipt = policy.price(&[item("Pen", 3, 2)]);
        assert_eq!(receipt.total.amount(), Decimal::new(5778, 5));
        assert_eq!(receipt.total.to_string(), "$0.06");

        // 4 × $0.06 × 0.9 × 1.07 = 0.23112
        let receipt = policy.price(&[item("Clip", 4, 6)]);
        assert_eq!(receipt.total.to_string(), "$0.23");
    }

    #[test]
    fn test_sub_cent_prices_are_not_truncated() {
        // 3 × $0.333 × 0.9 × 1.07 = 0.961866
        let price: Money = "0.333".parse().unwrap();
        let receipt = PricingPolicy::default().price(&[Item::new("A", 3, price)]);
        assert_eq!(receipt.total.amount(), Decimal::new(961866, 6));
        assert_eq!(receipt.total.to_string(), "$0.96");
    }

    #[test]
    fn test_single_line_matches_exact_formula() {
        let policy = PricingPolicy::default();
        let bulk = Decimal::new(9, 1);
        let tax = Decimal::new(107, 2);

        for cents in 1..2000i64 {
            for qty in 1..=5u32 {
                let gross = Decimal::new(cents, 2) * Decimal::from(qty);
                let net = if qty >= 3 { gross * bulk } else { gross };
                let expected = (net * tax)
                    .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

                let receipt = policy.price(&[item("X", qty, cents)]);
                assert_eq!(
                    receipt.total.rounded().amount(),
                    expected,
                    "{} × {} cents",
                    qty,
                    cents
                );
            }
        }
    }

    #[test]
    fn test_empty_order_costs_nothing() {
        let receipt = PricingPolicy::default().price(&[]);
        assert!(receipt.is_empty());
        assert!(receipt.total.is_zero());
    }

    #[test]
    fn test_custom_policy() {
        let policy = PricingPolicy {
            bulk_threshold: 5,
            bulk_discount_bps: 2000,
            tax_rate_bps: 0,
        };
        assert_eq!(policy.price(&[item("A", 4, 100)]).total.cents(), 400);
        assert_eq!(policy.price(&[item("A", 5, 100)]).total.cents(), 400);
    }

    #[test]
    fn test_policy_validation() {
        assert!(PricingPolicy::default().validate().is_ok());

        let mut policy = PricingPolicy::default();
        policy.bulk_threshold = 0;
        assert!(policy.validate().is_err());

        let mut policy = PricingPolicy::default();
        policy.tax_rate_bps = 10_001;
        assert!(policy.validate().is_err());

        let mut policy = PricingPolicy::default();
        policy.bulk_discount_bps = 10_000;
        assert!(policy.validate().is_ok());
    }
}
