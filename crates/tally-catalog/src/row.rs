//! # Row Schema
//!
//! Typed view of one catalog record.
//!
//! CSV fields arrive as text. [`RawRow`] captures the three columns by header
//! name; `TryFrom<RawRow>` turns it into a [`CatalogRow`] or a [`RowError`]
//! naming the line, column and offending value.

use serde::Deserialize;

use tally_core::validation::validate_item_name;
use tally_core::{Item, Money};

use crate::error::RowError;

/// Header-keyed record as read from the file. Extra columns are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRow {
    /// Source line, filled in by the loader.
    #[serde(skip)]
    pub line: u64,
    pub name: String,
    pub inventory: String,
    pub price: String,
}

/// A validated catalog record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRow {
    pub name: String,
    pub inventory: u32,
    pub price: Money,
}

impl TryFrom<RawRow> for CatalogRow {
    type Error = RowError;

    fn try_from(raw: RawRow) -> Result<Self, Self::Error> {
        let line = raw.line;

        validate_item_name(&raw.name).map_err(|e| RowError {
            line,
            field: "name",
            value: raw.name.clone(),
            reason: e.to_string(),
        })?;

        let inventory = raw.inventory.trim().parse::<u32>().map_err(|_| RowError {
            line,
            field: "inventory",
            value: raw.inventory.clone(),
            reason: "is not a non-negative whole number".to_string(),
        })?;

        let price = raw.price.parse::<Money>().map_err(|e| RowError {
            line,
            field: "price",
            value: raw.price.clone(),
            reason: e.to_string(),
        })?;

        Ok(CatalogRow {
            name: raw.name,
            inventory,
            price,
        })
    }
}

impl From<CatalogRow> for Item {
    fn from(row: CatalogRow) -> Self {
        Item::new(row.name, row.inventory, row.price)
    }
}
