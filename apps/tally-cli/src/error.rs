//! # Application Error Type
//!
//! Errors that end the program. Everything recoverable (bad quantities,
//! unknown items, insufficient stock) is handled inside the session and never
//! reaches this type.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use tally_catalog::CatalogError;
use tally_core::ValidationError;

#[derive(Debug, Error)]
pub enum AppError {
    /// Config file exists but could not be read.
    #[error("Failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Config file is not valid TOML for [`crate::config::TallyConfig`].
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Config values out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ValidationError),

    /// The catalog could not be loaded at all.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The catalog loaded but has no items to sell.
    #[error("Catalog contains no items")]
    EmptyCatalog,

    /// Console I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;
