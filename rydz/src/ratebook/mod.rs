//! Price lookup strategies.
//!
//! A rate book turns an origin/destination pair into a price. Two
//! interchangeable strategies exist: a postcode-area matrix and a flat rate
//! per mile of road distance. Failures say which end of the journey caused
//! them, so callers never have to reverse-engineer it from a lookup key.

mod error;
mod flat_rate;
mod postcode;
mod table;

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::Address;

pub use error::RateLookupError;
pub use flat_rate::FlatRateDistanceRateBook;
pub use postcode::PostcodeRateBook;
pub use table::{RateTable, RateTableError};

/// A price-lookup strategy for an origin/destination pair.
pub trait RateBook {
    /// The price of travelling from `origin` to `destination`.
    fn price(&self, origin: &Address, destination: &Address) -> Result<Decimal, RateLookupError>;
}

impl<T: RateBook + ?Sized> RateBook for &T {
    fn price(&self, origin: &Address, destination: &Address) -> Result<Decimal, RateLookupError> {
        (**self).price(origin, destination)
    }
}

impl<T: RateBook + ?Sized> RateBook for Box<T> {
    fn price(&self, origin: &Address, destination: &Address) -> Result<Decimal, RateLookupError> {
        (**self).price(origin, destination)
    }
}

impl<T: RateBook + ?Sized> RateBook for Arc<T> {
    fn price(&self, origin: &Address, destination: &Address) -> Result<Decimal, RateLookupError> {
        (**self).price(origin, destination)
    }
}
