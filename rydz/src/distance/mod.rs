//! Road distances between addresses.
//!
//! Flat-rate pricing needs a distance for each journey. The lookup itself
//! lives behind [`DistanceSource`] so that pricing never depends on the
//! network: production uses the Google Distance Matrix client, tests and
//! offline setups use a fixed table, and either can sit behind
//! [`crate::cache::CachedDistanceSource`].

mod error;
mod fixed;
mod google;
mod types;

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::Address;

pub use error::DistanceError;
pub use fixed::FixedDistances;
pub use google::{GoogleDistanceClient, GoogleDistanceConfig};
pub use types::{DistanceMatrixResponse, MatrixElement, MatrixRow, TextValue};

/// Metres in a statute mile.
const METRES_PER_MILE: Decimal = Decimal::from_parts(1_609_344, 0, 0, false, 3);

/// Something that can tell how far apart two addresses are.
pub trait DistanceSource {
    /// Road distance in miles from `origin` to `destination`.
    fn distance(&self, origin: &Address, destination: &Address) -> Result<Decimal, DistanceError>;
}

impl<T: DistanceSource + ?Sized> DistanceSource for &T {
    fn distance(&self, origin: &Address, destination: &Address) -> Result<Decimal, DistanceError> {
        (**self).distance(origin, destination)
    }
}

impl<T: DistanceSource + ?Sized> DistanceSource for Box<T> {
    fn distance(&self, origin: &Address, destination: &Address) -> Result<Decimal, DistanceError> {
        (**self).distance(origin, destination)
    }
}

impl<T: DistanceSource + ?Sized> DistanceSource for Arc<T> {
    fn distance(&self, origin: &Address, destination: &Address) -> Result<Decimal, DistanceError> {
        (**self).distance(origin, destination)
    }
}

/// A resolved route: distance and travel time, as text and raw values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distance {
    /// Display distance, e.g. "414 mi".
    pub dist_text: String,
    /// Distance in metres.
    pub dist_value: u64,
    /// Display duration, e.g. "7 hours 13 mins".
    pub time_text: String,
    /// Duration in seconds.
    pub time_value: u64,
}

impl Distance {
    /// The distance in statute miles.
    pub fn miles(&self) -> Decimal {
        Decimal::from(self.dist_value) / METRES_PER_MILE
    }
}
