//! Booking records and requests.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{Address, Journey, PickupTime, Side};

use super::error::BookingError;

/// Identifier assigned to a booking when it is stored.
///
/// Ids are handed out in increasing order starting at 1 and are never
/// reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(u64);

impl BookingId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A booking request as a client sent it.
///
/// Every field is optional here so that a missing one can be reported by
/// name. A client-supplied `quoted_price` is ignored: the stored price always
/// comes from the pricer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    #[serde(default)]
    pub origin: Option<Address>,
    #[serde(default)]
    pub destination: Option<Address>,
    #[serde(default)]
    pub pickup_time: Option<String>,
    #[serde(default)]
    pub passengers: Option<Vec<String>>,
    #[serde(default)]
    pub booker: Option<String>,
}

impl BookingRequest {
    /// Check the request, stopping at the first problem.
    ///
    /// Order: origin, destination, pickup time, booker, passengers.
    pub fn validate(&self) -> Result<ValidatedBooking, BookingError> {
        let origin = checked_address(&self.origin, Side::Origin)?;
        let destination = checked_address(&self.destination, Side::Destination)?;

        let pickup_time = self
            .pickup_time
            .as_deref()
            .ok_or(BookingError::MissingField("pickup_time"))?;
        let pickup_time = PickupTime::parse(pickup_time)?;

        let booker = self
            .booker
            .as_deref()
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .ok_or(BookingError::MissingField("booker"))?;

        let passengers = self
            .passengers
            .as_ref()
            .filter(|p| !p.is_empty())
            .ok_or(BookingError::MissingField("passengers"))?;

        Ok(ValidatedBooking {
            journey: Journey::new(origin.clone(), destination.clone()),
            pickup_time,
            passengers: passengers.clone(),
            booker: booker.to_string(),
        })
    }
}

fn checked_address(address: &Option<Address>, side: Side) -> Result<&Address, BookingError> {
    let address = address
        .as_ref()
        .ok_or(BookingError::MissingField(side.as_str()))?;
    address
        .validate()
        .map_err(|source| BookingError::Address { side, source })?;
    Ok(address)
}

/// A request that passed validation but has not been priced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedBooking {
    pub journey: Journey,
    pub pickup_time: PickupTime,
    pub passengers: Vec<String>,
    pub booker: String,
}

impl ValidatedBooking {
    /// Attach the quoted price.
    pub fn priced(self, quoted_price: Decimal) -> BookingDetails {
        BookingDetails {
            origin: self.journey.origin,
            destination: self.journey.destination,
            pickup_time: self.pickup_time,
            passengers: self.passengers,
            booker: self.booker,
            quoted_price,
        }
    }
}

/// Everything stored about a booking apart from its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingDetails {
    pub origin: Address,
    pub destination: Address,
    pub pickup_time: PickupTime,
    /// Contact identifiers, in the order given.
    pub passengers: Vec<String>,
    pub booker: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub quoted_price: Decimal,
}

/// A stored booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Booking {
    pub id: BookingId,
    #[serde(flatten)]
    pub details: BookingDetails,
}
