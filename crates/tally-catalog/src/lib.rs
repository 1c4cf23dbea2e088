//! # tally-catalog: Catalog Import for Tally
//!
//! Loads the inventory catalog from a delimited text file.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         tally-catalog                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     Public API                                  │   │
//! │  │  load_catalog(path) -> LoadOutcome                              │   │
//! │  │  read_catalog(reader) -> LoadOutcome                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │  ┌───────────────────────────┴─────────────────────────────────────┐   │
//! │  │                     Row Schema                                  │   │
//! │  │  RawRow (strings) ──TryFrom──► CatalogRow (u32, Money)          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │  ┌───────────────────────────┴─────────────────────────────────────┐   │
//! │  │                     tally-core::Catalog                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,no_run
//! use tally_catalog::{load_catalog, LoadOutcome};
//!
//! match load_catalog("products.csv") {
//!     LoadOutcome::Full(catalog) => println!("{} items", catalog.len()),
//!     LoadOutcome::Partial { catalog, error } => {
//!         eprintln!("stopped early: {}", error);
//!         println!("{} items", catalog.len());
//!     }
//!     LoadOutcome::Failed(error) => eprintln!("{}", error),
//! }
//! ```

pub mod error;
pub mod loader;
pub mod row;

pub use error::{CatalogError, CatalogResult, RowError};
pub use loader::{load_catalog, read_catalog, LoadOutcome};
pub use row::{CatalogRow, RawRow};
