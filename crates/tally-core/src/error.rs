//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tally-core errors (this file)                                         │
//! │  ├── CoreError        - Catalog / stock rule violations                │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  tally-catalog errors (separate crate)                                 │
//! │  └── CatalogError     - Source missing, bad rows                       │
//! │                                                                         │
//! │  tally-cli errors (app)                                                │
//! │  └── AppError         - What ends the process                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These are recoverable: the session reports them as a plain message and
/// the requested action is simply not performed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Item name is not a catalog key.
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// Requested more units than the catalog has left.
    ///
    /// ## User Workflow
    /// ```text
    /// Add to Cart (qty: 5)
    ///      │
    ///      ▼
    /// Check stock: available=3
    ///      │
    ///      ▼
    /// InsufficientStock { name: "Apple", available: 3, requested: 5 }
    ///      │
    ///      ▼
    /// Session prints: "Not enough inventory for this item."
    /// ```
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: u32,
        requested: u32,
    },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or more.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g. not a number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
