//! # Catalog Error Types
//!
//! Error types for catalog loading.
//!
//! ## Error Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  std::io::ErrorKind::NotFound  → CatalogError::SourceNotFound          │
//! │  other std::io::Error          → CatalogError::Io                      │
//! │  bad inventory / price / name  → CatalogError::DataFormat(RowError)    │
//! │  malformed CSV record / header → CatalogError::Csv                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Catalog loading errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file does not exist.
    #[error("Catalog source not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    /// The file exists but could not be read.
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// A row's values do not fit the schema.
    #[error("Data format error: {0}")]
    DataFormat(#[from] RowError),

    /// The file is not well-formed CSV, or a required column is missing.
    #[error("Malformed catalog: {0}")]
    Csv(#[from] csv::Error),
}

impl CatalogError {
    /// True for errors about the content of the file rather than its
    /// availability.
    pub fn is_data_format(&self) -> bool {
        matches!(self, CatalogError::DataFormat(_) | CatalogError::Csv(_))
    }
}

/// A single row that failed validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("line {line}: {field} '{value}' {reason}")]
pub struct RowError {
    /// 1-based line in the source (the header is line 1).
    pub line: u64,
    /// Column that failed.
    pub field: &'static str,
    /// Raw text of the offending value.
    pub value: String,
    pub reason: String,
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
