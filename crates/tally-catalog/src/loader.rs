//! # Catalog Loader
//!
//! Reads `name,inventory,price` records into a [`Catalog`].
//!
//! ## Outcomes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Loading products.csv                              │
//! │                                                                         │
//! │  open file ──── NotFound ─────────────► Failed(SourceNotFound)          │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  read header ── unreadable ───────────► Failed(Csv / Io)                │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  for each row:                                                          │
//! │      parse ──── bad value ────────────► Partial { rows so far, error }  │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  all rows parsed ─────────────────────► Full(catalog)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Loading stops at the first bad row. The file handle lives only for the
//! duration of the call.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use tracing::{debug, info, warn};

use tally_core::{Catalog, Item};

use crate::error::{CatalogError, CatalogResult};
use crate::row::{CatalogRow, RawRow};

/// Result of loading a catalog.
#[derive(Debug)]
pub enum LoadOutcome {
    /// Every row was loaded.
    Full(Catalog),

    /// A row failed; `catalog` holds the rows before it.
    Partial {
        catalog: Catalog,
        error: CatalogError,
    },

    /// Nothing could be read.
    Failed(CatalogError),
}

impl LoadOutcome {
    /// Returns the loaded catalog (empty on failure) and the error, if any.
    pub fn into_parts(self) -> (Catalog, Option<CatalogError>) {
        match self {
            LoadOutcome::Full(catalog) => (catalog, None),
            LoadOutcome::Partial { catalog, error } => (catalog, Some(error)),
            LoadOutcome::Failed(error) => (Catalog::new(), Some(error)),
        }
    }

    /// The loaded catalog, if any rows could be read.
    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            LoadOutcome::Full(catalog) | LoadOutcome::Partial { catalog, .. } => Some(catalog),
            LoadOutcome::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&CatalogError> {
        match self {
            LoadOutcome::Full(_) => None,
            LoadOutcome::Partial { error, .. } | LoadOutcome::Failed(error) => Some(error),
        }
    }

    pub fn is_full(&self) -> bool {
        matches!(self, LoadOutcome::Full(_))
    }
}

/// Loads the catalog at `path`.
///
/// ## Example
/// ```rust,no_run
/// use tally_catalog::load_catalog;
///
/// let (catalog, error) = load_catalog("classes/products.csv").into_parts();
/// if let Some(error) = error {
///     eprintln!("{}", error);
/// }
/// println!("{} items", catalog.len());
/// ```
pub fn load_catalog(path: impl AsRef<Path>) -> LoadOutcome {
    let path = path.as_ref();
    debug!(?path, "Opening catalog");

    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            warn!(?path, "Catalog source not found");
            return LoadOutcome::Failed(CatalogError::SourceNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(err) => {
            warn!(?path, error = %err, "Catalog source unreadable");
            return LoadOutcome::Failed(err.into());
        }
    };

    let outcome = read_catalog(file);
    if let Some(catalog) = outcome.catalog() {
        info!(?path, items = catalog.len(), full = outcome.is_full(), "Catalog loaded");
    }
    outcome
}

/// Reads a catalog from any CSV source with a header row.
pub fn read_catalog<R: Read>(source: R) -> LoadOutcome {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = match reader.headers() {
        Ok(headers) => headers.clone(),
        Err(err) => return LoadOutcome::Failed(err.into()),
    };

    let mut catalog = Catalog::new();
    for record in reader.records() {
        let row = record
            .map_err(CatalogError::from)
            .and_then(|record| parse_record(&record, &headers));

        match row {
            Ok(row) => {
                let name = row.name.clone();
                if catalog.insert(Item::from(row)).is_some() {
                    debug!(item = %name, "Duplicate catalog entry replaced");
                }
            }
            Err(error) => {
                warn!(%error, loaded = catalog.len(), "Catalog load stopped early");
                return LoadOutcome::Partial { catalog, error };
            }
        }
    }

    LoadOutcome::Full(catalog)
}

fn parse_record(
    record: &csv::StringRecord,
    headers: &csv::StringRecord,
) -> CatalogResult<CatalogRow> {
    let mut raw: RawRow = record.deserialize(Some(headers))?;
    raw.line = record.position().map(|p| p.line()).unwrap_or_default();
    Ok(CatalogRow::try_from(raw)?)
}

// =============================================================================
// Unit Tests
// =============================================================================
