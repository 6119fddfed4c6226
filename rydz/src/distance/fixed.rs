//! Fixed distance table for testing and offline pricing.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::domain::{Address, PostcodeArea};

use super::error::DistanceError;
use super::DistanceSource;

/// Distances between postcode areas, held in memory.
///
/// Distances are directional: a route from A to B says nothing about B to A.
#[derive(Debug, Clone, Default)]
pub struct FixedDistances {
    miles: HashMap<(PostcodeArea, PostcodeArea), Decimal>,
}

impl FixedDistances {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the distance from one area to another.
    pub fn insert(&mut self, from: PostcodeArea, to: PostcodeArea, miles: Decimal) {
        self.miles.insert((from, to), miles);
    }

    /// Returns the number of routes in the table.
    pub fn len(&self) -> usize {
        self.miles.len()
    }

    /// Returns true if the table holds no routes.
    pub fn is_empty(&self) -> bool {
        self.miles.is_empty()
    }
}

impl DistanceSource for FixedDistances {
    fn distance(&self, origin: &Address, destination: &Address) -> Result<Decimal, DistanceError> {
        let key = (origin.postcode_area()?, destination.postcode_area()?);
        self.miles
            .get(&key)
            .copied()
            .ok_or_else(|| DistanceError::NoRoute {
                status: format!("{} to {}", key.0, key.1),
            })
    }
}
