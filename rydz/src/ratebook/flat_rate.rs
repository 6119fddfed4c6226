//! Flat rate per mile of road distance.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::distance::DistanceSource;
use crate::domain::Address;

use super::error::RateLookupError;
use super::RateBook;

/// Prices are quoted to this many decimal places.
const PRICE_DP: u32 = 2;

/// Prices a journey as `rate × distance`, with the distance from an
/// injected [`DistanceSource`].
#[derive(Debug, Clone)]
pub struct FlatRateDistanceRateBook<D> {
    distance_source: D,
    rate_per_mile: Decimal,
}

impl<D: DistanceSource> FlatRateDistanceRateBook<D> {
    pub fn new(distance_source: D, rate_per_mile: Decimal) -> Self {
        Self {
            distance_source,
            rate_per_mile,
        }
    }

    pub fn rate_per_mile(&self) -> Decimal {
        self.rate_per_mile
    }
}

impl<D: DistanceSource> RateBook for FlatRateDistanceRateBook<D> {
    fn price(&self, origin: &Address, destination: &Address) -> Result<Decimal, RateLookupError> {
        let miles = self.distance_source.distance(origin, destination)?;
        // Half to even
        Ok((self.rate_per_mile * miles)
            .round_dp_with_strategy(PRICE_DP, RoundingStrategy::MidpointNearestEven))
    }
}
