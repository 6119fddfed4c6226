//! Postcode-area matrix pricing.

use rust_decimal::Decimal;

use crate::domain::{Address, AddressError, AddressField, PostcodeArea, Side};

use super::error::RateLookupError;
use super::table::RateTable;
use super::RateBook;

/// Prices journeys by looking up the postcode areas of both ends in a
/// [`RateTable`].
#[derive(Debug, Clone)]
pub struct PostcodeRateBook {
    table: RateTable,
}

impl PostcodeRateBook {
    pub fn new(table: RateTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &RateTable {
        &self.table
    }
}

/// The area for one end of a journey, with failures tagged by side.
fn area_of(address: &Address, side: Side) -> Result<PostcodeArea, RateLookupError> {
    address.postcode_area().map_err(|source| match source {
        AddressError::Missing(AddressField::Postcode) => RateLookupError::MissingPostcode(side),
        source => RateLookupError::Address { side, source },
    })
}

impl RateBook for PostcodeRateBook {
    fn price(&self, origin: &Address, destination: &Address) -> Result<Decimal, RateLookupError> {
        let from = area_of(origin, Side::Origin)?;
        let row = self
            .table
            .row(&from)
            .ok_or(RateLookupError::UnknownArea {
                side: Side::Origin,
                area: from,
            })?;

        // An unknown origin is reported before any destination problem
        let to = area_of(destination, Side::Destination)?;
        row.get(&to).copied().ok_or(RateLookupError::UnknownArea {
            side: Side::Destination,
            area: to,
        })
    }
}
