//! # Validation Module
//!
//! Input validation utilities for Tally.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Session prompt (tally-cli)                                   │
//! │  └── parse_quantity() on every typed number, reprompt on error          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Catalog (tally-core)                                         │
//! │  └── Catalog::reserve() checks stock                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cart (tally-core)                                            │
//! │  └── No checks: callers have already validated                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::validation::parse_quantity;
//!
//! assert_eq!(parse_quantity(" 5 ").unwrap(), 5);
//! assert_eq!(parse_quantity("0").unwrap(), 0);
//! assert!(parse_quantity("-1").is_err());
//! assert!(parse_quantity("five").is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Upper bound for basis-point rates (100%).
pub const MAX_BPS: u32 = 10_000;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item name from the catalog source.
///
/// ## Rules
/// - Must not be empty or only whitespace
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates that `value` is strictly positive.
pub fn validate_positive(field: &str, value: i64) -> ValidationResult<()> {
    if value <= 0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a quantity typed at a prompt.
///
/// ## Rules
/// - Must not be negative (zero is allowed and changes nothing)
/// - Must fit a `u32`
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "quantity".to_string(),
        });
    }

    if qty > u32::MAX as i64 {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0,
            max: u32::MAX as i64,
        });
    }

    Ok(())
}

/// Parses and validates a quantity typed at a prompt.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Enter the quantity: abc → InvalidFormat     → "Invalid input..."       │
/// │  Enter the quantity: -2  → MustBeNonNegative → "Please enter a pos..."  │
/// │  Enter the quantity: 0   → Ok(0)                                        │
/// │  Enter the quantity: 4   → Ok(4)                                        │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn parse_quantity(input: &str) -> ValidationResult<u32> {
    let input = input.trim();
    let qty: i64 = input.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "quantity".to_string(),
        reason: format!("'{}' is not a whole number", input),
    })?;

    validate_quantity(qty)?;
    Ok(qty as u32)
}

/// Validates a rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
pub fn validate_bps(field: &str, bps: u32) -> ValidationResult<()> {
    if bps > MAX_BPS {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: MAX_BPS as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Apple").is_ok());
        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(0).is_ok());
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(1000).is_ok());

        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(u32::MAX as i64 + 1).is_err());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3"), Ok(3));
        assert_eq!(parse_quantity(" 12\n"), Ok(12));

        assert_eq!(parse_quantity("0"), Ok(0));

        assert!(matches!(
            parse_quantity("-4"),
            Err(ValidationError::MustBeNonNegative { .. })
        ));
        assert!(matches!(
            parse_quantity("2.5"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_quantity(""),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_validate_bps() {
        assert!(validate_bps("tax_rate_bps", 0).is_ok());
        assert!(validate_bps("tax_rate_bps", 700).is_ok());
        assert!(validate_bps("tax_rate_bps", 10000).is_ok());
        assert!(validate_bps("tax_rate_bps", 10001).is_err());
    }
}
