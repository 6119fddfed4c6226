//! Area-to-area rate tables.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::PostcodeArea;

/// Errors loading a rate table.
#[derive(Debug, thiserror::Error)]
pub enum RateTableError {
    /// The table file could not be read
    #[error("cannot read rate table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The table is not a JSON object of objects of numbers
    #[error("invalid rate table: {0}")]
    Json(#[from] serde_json::Error),

    /// A price is below zero
    #[error("negative price {price} from {from} to {to}")]
    NegativePrice {
        from: PostcodeArea,
        to: PostcodeArea,
        price: Decimal,
    },
}

/// Prices from origin area to destination area.
///
/// Tables are not assumed symmetric: the price from A to B is independent
/// of the price from B to A. The JSON form is the same nested mapping:
///
/// ```
/// use rydz::domain::PostcodeArea;
/// use rydz::ratebook::RateTable;
/// use rust_decimal::Decimal;
///
/// let table = RateTable::from_json(r#"{"NW1": {"RM14": 52.5}}"#).unwrap();
/// let price = table.get(&PostcodeArea::new("NW1"), &PostcodeArea::new("RM14"));
/// assert_eq!(price, Some(Decimal::new(525, 1)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RateTable {
    rates: HashMap<PostcodeArea, HashMap<PostcodeArea, Decimal>>,
}

impl RateTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a table from JSON, rejecting negative prices.
    pub fn from_json(json: &str) -> Result<Self, RateTableError> {
        let table: RateTable = serde_json::from_str(json)?;
        table.check_prices()?;
        Ok(table)
    }

    /// Load a table from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RateTableError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| RateTableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The built-in table for the areas served around London.
    pub fn london() -> Self {
        let mut table = Self::new();
        let rows = [
            ("TW11", [("NW1", 2250), ("RM14", 6525)]),
            ("NW1", [("RM14", 5250), ("TW11", 2325)]),
            ("RM14", [("NW1", 6250), ("TW11", 6325)]),
        ];
        for (from, prices) in rows {
            for (to, pence) in prices {
                table.insert(PostcodeArea::new(from), PostcodeArea::new(to), Decimal::new(pence, 2));
            }
        }
        table
    }

    /// Set the price from one area to another.
    pub fn insert(&mut self, from: PostcodeArea, to: PostcodeArea, price: Decimal) {
        self.rates.entry(from).or_default().insert(to, price);
    }

    /// All prices out of an area, if the area has a row.
    pub fn row(&self, from: &PostcodeArea) -> Option<&HashMap<PostcodeArea, Decimal>> {
        self.rates.get(from)
    }

    /// The price from one area to another.
    pub fn get(&self, from: &PostcodeArea, to: &PostcodeArea) -> Option<Decimal> {
        self.row(from)?.get(to).copied()
    }

    /// Number of origin areas with a row.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    fn check_prices(&self) -> Result<(), RateTableError> {
        for (from, row) in &self.rates {
            for (to, price) in row {
                if *price < Decimal::ZERO {
                    return Err(RateTableError::NegativePrice {
                        from: from.clone(),
                        to: to.clone(),
                        price: *price,
                    });
                }
            }
        }
        Ok(())
    }
}
