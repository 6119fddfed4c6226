//! Rate lookup error types.

use crate::distance::DistanceError;
use crate::domain::{AddressError, PostcodeArea, Side};

/// A rate book could not price a journey.
///
/// Every address-related variant is tagged with the end of the journey that
/// caused it.
#[derive(Debug, thiserror::Error)]
pub enum RateLookupError {
    /// The address has no postcode to derive an area from
    #[error("{0} has no postcode")]
    MissingPostcode(Side),

    /// The postcode area has no entry in the rate table
    #[error("{side} postcode area {area} not in rate table")]
    UnknownArea { side: Side, area: PostcodeArea },

    /// The address cannot be interpreted (no or unsupported country)
    #[error("{side} address: {source}")]
    Address {
        side: Side,
        #[source]
        source: AddressError,
    },

    /// The distance lookup failed
    #[error("distance lookup failed: {0}")]
    Distance(#[from] DistanceError),
}
